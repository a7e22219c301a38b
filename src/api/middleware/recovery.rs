//! Per-request panic recovery.
//!
//! A panic inside a handler is caught here and answered with the standard
//! JSON 500 body. Other requests and the process keep running.

use std::any::Any;

use axum::response::IntoResponse;
use serde_json::json;
use tower_http::catch_panic::{CatchPanicLayer, ResponseForPanic};

use crate::error::AppError;

/// Converts a caught panic payload into an error response.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanicResponder;

impl ResponseForPanic for PanicResponder {
    type ResponseBody = axum::body::Body;

    fn response_for_panic(
        &mut self,
        err: Box<dyn Any + Send + 'static>,
    ) -> axum::http::Response<Self::ResponseBody> {
        let reason = if let Some(s) = err.downcast_ref::<String>() {
            s.clone()
        } else if let Some(s) = err.downcast_ref::<&str>() {
            s.to_string()
        } else {
            "unknown panic payload".to_string()
        };

        tracing::error!("Recovered from panic: {}", reason);

        AppError::internal("Internal Server Error", json!({})).into_response()
    }
}

/// Creates the panic recovery layer.
pub fn layer() -> CatchPanicLayer<PanicResponder> {
    CatchPanicLayer::custom(PanicResponder)
}
