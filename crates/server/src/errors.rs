use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::debug;

use service::errors::ServiceError;

/// Empty-body client-error response.
///
/// The API contract returns 400/401 with no payload; the rejection reason is
/// only logged, never serialized back to the client.
pub struct Rejection {
    status: StatusCode,
    err: ServiceError,
}

impl Rejection {
    pub fn bad_request(err: ServiceError) -> Self {
        Self { status: StatusCode::BAD_REQUEST, err }
    }

    pub fn unauthorized(err: ServiceError) -> Self {
        Self { status: StatusCode::UNAUTHORIZED, err }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        debug!(code = self.err.code(), error = %self.err, "request rejected");
        self.status.into_response()
    }
}
