//! The shared loading/success/error envelope every screen is served in.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::client::ApiError;
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState<T> {
    Loading,
    Success { data: T },
    Error { message: String },
}

impl<T> LoadState<T> {
    pub fn success(data: T) -> Self {
        Self::Success { data }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
        }
    }
}

impl<T> From<Result<T, ApiError>> for LoadState<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(e) => {
                tracing::warn!(error = %e, "Screen failed to load");
                Self::error(e.user_message())
            }
        }
    }
}

impl<T> From<Result<T, AppError>> for LoadState<T> {
    fn from(result: Result<T, AppError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(AppError::Api(e)) => Self::from(Err::<T, ApiError>(e)),
            Err(e) => {
                tracing::error!(error = %e, "Screen failed to load");
                Self::error(e.to_string())
            }
        }
    }
}

impl<T: Serialize> IntoResponse for LoadState<T> {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Loading => StatusCode::ACCEPTED,
            Self::Success { .. } => StatusCode::OK,
            Self::Error { .. } => StatusCode::BAD_GATEWAY,
        };
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialized_shapes() {
        let ok: LoadState<Vec<i32>> = LoadState::success(vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({"state": "success", "data": [1, 2]})
        );

        let err: LoadState<Vec<i32>> = LoadState::error("boom");
        assert_eq!(
            serde_json::to_value(&err).unwrap(),
            json!({"state": "error", "message": "boom"})
        );

        let loading: LoadState<Vec<i32>> = LoadState::Loading;
        assert_eq!(
            serde_json::to_value(&loading).unwrap(),
            json!({"state": "loading"})
        );
    }

    #[test]
    fn test_from_api_error_uses_user_message() {
        let result: Result<u32, ApiError> = Err(ApiError::InvalidServerResponse {
            status: 503,
            body: "down".into(),
        });
        let state = LoadState::from(result);
        assert_eq!(
            state,
            LoadState::error("Server Error: Received status code 503. Please try again later.")
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(LoadState::success(1).into_response().status(), StatusCode::OK);
        assert_eq!(
            LoadState::<u8>::error("boom").into_response().status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            LoadState::<u8>::Loading.into_response().status(),
            StatusCode::ACCEPTED
        );
    }
}
