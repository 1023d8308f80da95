// src/macros.rs

//
// Logging macros
//
// logging feature enabled → tracing, request events carry a `request_id` field
// logging feature disabled → only error-level macros print to stderr
//
// Request-scoped macros take the RequestId first and a plain format string
// after it, so both expansions accept the same arguments.
//

#![allow(unused_macros)]

// --------------------
// SERVICE LEVEL
// --------------------

#[cfg(feature = "logging")]
macro_rules! log_error {
    ($($arg:tt)*) => {
        tracing::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_error {
    ($($arg:tt)*) => {
        eprintln!($($arg)*)
    };
}

#[cfg(feature = "logging")]
macro_rules! log_info {
    ($($arg:tt)*) => {
        tracing::info!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

// --------------------
// REQUEST LEVEL
// --------------------

#[cfg(feature = "logging")]
macro_rules! req_error {
    ($id:expr, $($arg:tt)*) => {
        tracing::error!(request_id = %$id, $($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! req_error {
    ($id:expr, $($arg:tt)*) => {
        eprintln!("request {}: {}", $id, format!($($arg)*))
    };
}

#[cfg(feature = "logging")]
macro_rules! req_warn {
    ($id:expr, $($arg:tt)*) => {
        tracing::warn!(request_id = %$id, $($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! req_warn {
    ($id:expr, $($arg:tt)*) => {{
        let _ = &$id;
    }};
}

#[cfg(feature = "logging")]
macro_rules! req_info {
    ($id:expr, $($arg:tt)*) => {
        tracing::info!(request_id = %$id, $($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! req_info {
    ($id:expr, $($arg:tt)*) => {{
        let _ = &$id;
    }};
}

#[cfg(feature = "logging")]
macro_rules! req_debug {
    ($id:expr, $($arg:tt)*) => {
        tracing::debug!(request_id = %$id, $($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! req_debug {
    ($id:expr, $($arg:tt)*) => {{
        let _ = &$id;
    }};
}

pub(crate) use log_error;
pub(crate) use log_info;
pub(crate) use req_debug;
pub(crate) use req_error;
pub(crate) use req_info;
pub(crate) use req_warn;
