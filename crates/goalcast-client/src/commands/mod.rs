pub mod amount;
mod common;
pub mod deadline;
pub mod payload;
pub mod preview;
pub mod span;
