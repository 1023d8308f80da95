//! primes-api server.
//!
//! Configuration comes from `PRIMES_*` environment variables (see
//! [`ServiceConfig::from_env`]). Logging honours `RUST_LOG` (default
//! `info`); set `PRIMES_LOG_FORMAT=json` for JSON lines.
//!
//! Run with: cargo run --release
//!
//! ```text
//! curl localhost:8080/primes/v2/17
//! curl localhost:8080/primes/v1/67280421310721   # aborts the process
//! ```

use primes_api::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // ---
    #[cfg(feature = "logging")]
    init_logging();

    let config = ServiceConfig::from_env()?;
    primes_api::serve(config).await?;

    Ok(())
}

#[cfg(feature = "logging")]
fn init_logging() {
    // ---
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = std::env::var("PRIMES_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_thread_names(true);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
