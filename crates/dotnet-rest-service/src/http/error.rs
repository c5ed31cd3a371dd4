//! HTTP status mapping for [`DotnetRestError`].

use crate::dotnet_rest_actor::DotnetRestError;
use crate::model::ErrorResponse;
use axum::{
    http::{header::WWW_AUTHENTICATE, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

impl DotnetRestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            DotnetRestError::NotFound { .. } => StatusCode::NOT_FOUND,
            DotnetRestError::Validation(_) => StatusCode::BAD_REQUEST,
            DotnetRestError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            DotnetRestError::Forbidden(_) => StatusCode::FORBIDDEN,
            DotnetRestError::Transport(_) | DotnetRestError::ActorCommunicationError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            DotnetRestError::NotFound { .. } => "NOT_FOUND",
            DotnetRestError::Validation(_) => "VALIDATION_ERROR",
            DotnetRestError::Unauthorized(_) => "UNAUTHORIZED",
            DotnetRestError::Forbidden(_) => "FORBIDDEN",
            DotnetRestError::Transport(_) | DotnetRestError::ActorCommunicationError(_) => {
                "INTERNAL_ERROR"
            }
        }
    }
}

impl IntoResponse for DotnetRestError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
            status: status.as_u16(),
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            DotnetRestError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            DotnetRestError::Validation("v".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            DotnetRestError::Unauthorized("u".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            DotnetRestError::Forbidden("f".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            DotnetRestError::ActorCommunicationError("a".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_unauthorized_carries_challenge() {
        let response = DotnetRestError::Unauthorized("no token".into()).into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(response.headers()[WWW_AUTHENTICATE], "Bearer");
    }
}
