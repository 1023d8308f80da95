/// HTTP front end for the prime-check service
mod handler;

pub use handler::{prime_check_handler, PrimeCheckContext};

use axum::routing::get;
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::error::Result;
use crate::macros::{log_error, log_info};
use crate::primality::AlgorithmVariant;
use crate::protocol::PingBody;
use crate::service_config::ServiceConfig;

/// Build the router.
///
/// Mounts `/primes/v1/:num` (recursive), `/primes/v2/:num` (iterative) and
/// `/ping`. The router holds no mutable state; it can be cloned freely and
/// served or driven in-process with `tower::ServiceExt::oneshot`.
pub fn app(context: PrimeCheckContext) -> Router {
    // ---
    let context = Arc::new(context);

    let mut router = Router::new();
    for variant in [AlgorithmVariant::Recursive, AlgorithmVariant::Iterative] {
        let route = format!("/primes/{}/:num", variant.version());
        router = router.route(&route, get(prime_check_handler(variant, context.clone())));
    }
    router.route("/ping", get(ping))
}

async fn ping() -> Json<PingBody> {
    Json(PingBody { ok: true })
}

/// Bind the configured address and serve until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the listener cannot
/// be bound.
pub async fn serve(config: ServiceConfig) -> Result<()> {
    // ---
    let context = PrimeCheckContext::from_config(&config)?;
    let listener = TcpListener::bind(config.bind_addr).await?;

    log_info!(
        "{} listening on {} (failure rate {})",
        config.service_name,
        listener.local_addr()?,
        config.failure_rate
    );

    serve_with_shutdown(listener, context, ctrl_c()).await?;

    log_info!("{} stopped", config.service_name);
    Ok(())
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// In-flight requests finish before this returns.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    context: PrimeCheckContext,
    shutdown: F,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // ---
    axum::serve(listener, app(context))
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

async fn ctrl_c() {
    // ---
    match tokio::signal::ctrl_c().await {
        Ok(()) => log_info!("received Ctrl+C, shutting down"),
        Err(e) => {
            log_error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    }
}
