//! Service configuration.
//!
//! Everything here can be set in code through the `with_*` builder methods
//! or read from `PRIMES_*` environment variables with
//! [`ServiceConfig::from_env`].

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::failure::{
    // ---
    ChanceSource,
    FailureInjector,
    SeededSource,
    ThreadRngSource,
    DEFAULT_FAILURE_RATE,
};

pub const ENV_BIND_ADDR: &str = "PRIMES_BIND_ADDR";
pub const ENV_FAILURE_RATE: &str = "PRIMES_FAILURE_RATE";
pub const ENV_FAILURE_SEED: &str = "PRIMES_FAILURE_SEED";
pub const ENV_WORKER_STACK_SIZE: &str = "PRIMES_WORKER_STACK_SIZE";
pub const ENV_SERVICE_NAME: &str = "PRIMES_SERVICE_NAME";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_SERVICE_NAME: &str = "primes-api";

/// Service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    // ---
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,

    /// Name used in startup and shutdown log lines.
    pub service_name: String,

    /// Share of valid requests failed on purpose, within `[0, 1]`.
    ///
    /// Default: 0.30
    pub failure_rate: f64,

    /// Seed for a reproducible failure sequence.
    ///
    /// If `None`, draws come from the thread-local OS-seeded generator.
    pub failure_seed: Option<u64>,

    /// Stack size in bytes for computation worker threads.
    ///
    /// If `None`, the standard library default applies (2 MiB unless
    /// `RUST_MIN_STACK` says otherwise). This bounds how deep the recursive
    /// variant can descend before the process aborts.
    pub worker_stack_size: Option<usize>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            failure_rate: DEFAULT_FAILURE_RATE,
            failure_seed: None,
            worker_stack_size: None,
        }
    }
}

impl ServiceConfig {
    /// Read configuration from the process environment.
    ///
    /// Unset variables keep their defaults. Set but unparsable values are
    /// reported as [`Error::Config`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // ---
        let mut config = Self::default();

        let bind = lookup(ENV_BIND_ADDR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        config.bind_addr = parse_var(ENV_BIND_ADDR, &bind)?;

        if let Some(name) = lookup(ENV_SERVICE_NAME) {
            config.service_name = name;
        }
        if let Some(rate) = lookup(ENV_FAILURE_RATE) {
            config.failure_rate = parse_var(ENV_FAILURE_RATE, &rate)?;
        }
        if let Some(seed) = lookup(ENV_FAILURE_SEED) {
            config.failure_seed = Some(parse_var(ENV_FAILURE_SEED, &seed)?);
        }
        if let Some(size) = lookup(ENV_WORKER_STACK_SIZE) {
            config.worker_stack_size = Some(parse_var(ENV_WORKER_STACK_SIZE, &size)?);
        }

        config.validate()?;
        Ok(config)
    }

    /// Set the listen address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Set the service name used in logs.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Set the injected failure rate.
    ///
    /// # Example
    ///
    /// ```
    /// use primes_api::ServiceConfig;
    ///
    /// // never fail on purpose
    /// let config = ServiceConfig::default().with_failure_rate(0.0);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = rate;
        self
    }

    /// Make the failure sequence reproducible.
    pub fn with_failure_seed(mut self, seed: u64) -> Self {
        self.failure_seed = Some(seed);
        self
    }

    /// Set the worker thread stack size in bytes.
    pub fn with_worker_stack_size(mut self, bytes: usize) -> Self {
        self.worker_stack_size = Some(bytes);
        self
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        // ---
        if !(0.0..=1.0).contains(&self.failure_rate) {
            return Err(Error::Config(format!(
                "{ENV_FAILURE_RATE} must be within [0, 1], got {}",
                self.failure_rate
            )));
        }
        if self.worker_stack_size == Some(0) {
            return Err(Error::Config(format!(
                "{ENV_WORKER_STACK_SIZE} must be greater than zero"
            )));
        }
        Ok(())
    }

    /// Build the failure injector described by this config.
    pub fn failure_injector(&self) -> Result<FailureInjector> {
        // ---
        let source: Arc<dyn ChanceSource> = match self.failure_seed {
            Some(seed) => Arc::new(SeededSource::new(seed)),
            None => Arc::new(ThreadRngSource),
        };
        FailureInjector::new(self.failure_rate, source)
    }
}

fn parse_var<T>(key: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| Error::Config(format!("{key}={raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<ServiceConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_gives_defaults() {
        // ---
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config, ServiceConfig::default());
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.failure_rate, 0.30);
        assert_eq!(config.service_name, "primes-api");
    }

    #[test]
    fn reads_every_variable() {
        // ---
        let config = from_pairs(&[
            (ENV_BIND_ADDR, "127.0.0.1:9000"),
            (ENV_FAILURE_RATE, "0.5"),
            (ENV_FAILURE_SEED, "1234"),
            (ENV_WORKER_STACK_SIZE, "8388608"),
            (ENV_SERVICE_NAME, "pass-api"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.failure_rate, 0.5);
        assert_eq!(config.failure_seed, Some(1234));
        assert_eq!(config.worker_stack_size, Some(8 * 1024 * 1024));
        assert_eq!(config.service_name, "pass-api");
    }

    #[test]
    fn rejects_bad_values() {
        // ---
        for pairs in [
            [(ENV_BIND_ADDR, "not-an-addr")],
            [(ENV_FAILURE_RATE, "lots")],
            [(ENV_FAILURE_RATE, "1.01")],
            [(ENV_FAILURE_SEED, "-1")],
            [(ENV_WORKER_STACK_SIZE, "0")],
        ] {
            assert!(
                matches!(from_pairs(&pairs), Err(Error::Config(_))),
                "{pairs:?}"
            );
        }
    }

    #[test]
    fn builder_methods() {
        // ---
        let config = ServiceConfig::default()
            .with_bind_addr("127.0.0.1:0".parse().unwrap())
            .with_service_name("test")
            .with_failure_rate(1.0)
            .with_failure_seed(9)
            .with_worker_stack_size(4096 * 1024);

        assert!(config.validate().is_ok());
        let injector = config.failure_injector().unwrap();
        assert_eq!(injector.threshold(), 1.0);
        assert!(injector.should_fail());
    }
}
