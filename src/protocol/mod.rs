/// Wire types for prime-check responses
///
/// This module defines the JSON bodies returned by the prime-check and
/// liveness routes.
mod message;

pub use message::{ErrorBody, PingBody, PrimeCheckResult};
