use std::io::{self, Write};

pub fn write_stdout_text(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_tolerating_closed_pipe(&mut stdout, text.as_bytes())?;
    flush_tolerating_closed_pipe(&mut stdout)
}

pub fn write_stdout_line(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout().lock();
    write_tolerating_closed_pipe(&mut stdout, text.as_bytes())?;
    write_tolerating_closed_pipe(&mut stdout, b"\n")?;
    flush_tolerating_closed_pipe(&mut stdout)
}

// `goalcast preview ... | head -1` must not turn into an output failure.
fn write_tolerating_closed_pipe(writer: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    match writer.write_all(bytes) {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

fn flush_tolerating_closed_pipe(writer: &mut dyn Write) -> io::Result<()> {
    match writer.flush() {
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}
