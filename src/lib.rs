//! Primality checks over HTTP with injectable failures
//!
//! This library serves two routes that decide whether an arbitrarily large
//! positive integer is prime by trial division. The routes differ only in
//! the algorithm behind them:
//!
//! - `GET /primes/v1/{num}` descends recursively and aborts the process for
//!   large inputs once the worker's stack is exhausted.
//! - `GET /primes/v2/{num}` descends iteratively and is merely slow for
//!   large inputs.
//!
//! A configurable share of valid requests (30% by default) fails on purpose
//! with a 500, independent of the input, so that callers and monitoring can
//! be exercised under partial failure.
//!

// Import all sub modules once...
mod failure;
mod number;
mod primality;
mod protocol;
mod server;
mod worker;

mod service_config;

mod error;
mod macros;
mod request_id;

// Re-export main types
pub use server::{app, prime_check_handler, serve, serve_with_shutdown, PrimeCheckContext};

pub use service_config::ServiceConfig;

pub use error::{Error, Result};
pub use request_id::{RequestId, REQUEST_ID_HEADER};

// --- public re-exports
pub use failure::{
    //
    ChanceSource,
    FailureInjector,
    SeededSource,
    ThreadRngSource,
    DEFAULT_FAILURE_RATE,
};
pub use number::PrimeCheckRequest;
pub use primality::{
    //
    is_prime_iterative,
    is_prime_recursive,
    AlgorithmVariant,
    PrimalityFn,
};
pub use protocol::{ErrorBody, PingBody, PrimeCheckResult};
pub use worker::run_on_worker;
