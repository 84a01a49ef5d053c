pub mod client;
pub mod errors;

pub use client::ActivitiesApi;
pub use errors::{LoadError, SignupError, TransportError};
