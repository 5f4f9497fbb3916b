pub mod commands;
pub mod contracts;
pub mod error;
pub mod goal;

pub use contracts::envelope::{FailureEnvelope, SuccessEnvelope};
pub use error::{ClientError, ClientResult};
pub use goal::{GoalIntent, parse};

pub const API_VERSION: &str = env!("CARGO_PKG_VERSION");
