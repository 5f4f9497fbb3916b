pub mod envelope;
pub mod forecast;
pub mod types;
