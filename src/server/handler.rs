//! Prime-check handler factory.
//!
//! Both prime-check routes share one request skeleton: parse the path
//! parameter, pass the failure gate, run the bound strategy on a worker and
//! format the JSON answer. [`prime_check_handler`] closes that skeleton over
//! an [`AlgorithmVariant`] so each route gets its own handler without
//! duplicating any of it.

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Instant;

use crate::error::{Error, Result};
use crate::failure::FailureInjector;
use crate::macros::{req_debug, req_error, req_info, req_warn};
use crate::number::PrimeCheckRequest;
use crate::primality::AlgorithmVariant;
use crate::protocol::PrimeCheckResult;
use crate::request_id::{RequestId, REQUEST_ID_HEADER};
use crate::service_config::ServiceConfig;
use crate::worker::run_on_worker;

pub(super) type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Extractor output for the `{num}` segment.
pub(super) type NumParam = std::result::Result<Path<String>, PathRejection>;

/// Everything a prime-check handler needs besides its variant.
///
/// Shared read-only between all requests of both routes.
#[derive(Debug, Clone, Default)]
pub struct PrimeCheckContext {
    pub injector: FailureInjector,
    pub worker_stack_size: Option<usize>,
}

impl PrimeCheckContext {
    pub fn new(injector: FailureInjector) -> Self {
        Self {
            injector,
            worker_stack_size: None,
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        // ---
        config.validate()?;
        Ok(Self {
            injector: config.failure_injector()?,
            worker_stack_size: config.worker_stack_size,
        })
    }

    pub fn with_worker_stack_size(mut self, bytes: usize) -> Self {
        self.worker_stack_size = Some(bytes);
        self
    }
}

/// Bind `variant` to the shared prime-check skeleton.
///
/// The returned closure is an axum handler for a route with a single
/// `{num}` path parameter.
pub fn prime_check_handler(
    variant: AlgorithmVariant,
    context: Arc<PrimeCheckContext>,
) -> impl Fn(NumParam) -> BoxFuture<'static, Response> + Clone + Send + Sync + 'static {
    // ---
    move |param: NumParam| {
        let context = context.clone();
        Box::pin(async move { respond(&context, variant, param).await })
            as BoxFuture<'static, Response>
    }
}

async fn respond(
    context: &PrimeCheckContext,
    variant: AlgorithmVariant,
    param: NumParam,
) -> Response {
    // ---
    let request_id = RequestId::generate();

    let mut response = match check_prime(context, variant, param, &request_id).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => e.into_response(),
    };

    if let Some(value) = request_id.header_value() {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}

// Received → Validating → {Rejected | FailureInjected | Computing → Completed}
async fn check_prime(
    context: &PrimeCheckContext,
    variant: AlgorithmVariant,
    param: NumParam,
    request_id: &RequestId,
) -> Result<PrimeCheckResult> {
    // ---
    let raw = match param {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            req_warn!(request_id, "{variant}: rejected undecodable path: {rejection}");
            return Err(Error::InvalidNumber(rejection.body_text()));
        }
    };

    let request = PrimeCheckRequest::parse(&raw).map_err(|e| {
        req_warn!(request_id, "{variant}: rejected: {e}");
        e
    })?;

    context.injector.gate().map_err(|e| {
        req_warn!(request_id, "{variant}: injected failure for {raw}");
        e
    })?;

    req_debug!(
        request_id,
        "{variant}: computing for a {}-bit candidate",
        request.number.bits()
    );
    let started = Instant::now();

    let is_prime = run_on_worker(variant, request.number.clone(), context.worker_stack_size)
        .await
        .map_err(|e| {
            req_error!(request_id, "{variant}: {e}");
            e
        })?;

    req_info!(
        request_id,
        "{variant}: {raw} is_prime={is_prime} in {} ms",
        started.elapsed().as_millis()
    );

    Ok(PrimeCheckResult {
        number: request.number,
        is_prime,
    })
}
