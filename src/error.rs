use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

/// 요청 처리 중 발생하는 오류
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Auction not found")]
    NotFound,

    /// 저장 결과 반영된 행이 없음
    #[error("{0}")]
    SaveFailed(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => {
                warn!("{:<12} --> 경매를 찾을 수 없습니다.", "Error");
                StatusCode::NOT_FOUND.into_response()
            }
            AppError::SaveFailed(msg) => {
                warn!("{:<12} --> 저장 실패: {}", "Error", msg);
                (StatusCode::BAD_REQUEST, msg).into_response()
            }
            AppError::Database(e) => {
                error!("{:<12} --> Database error: {}", "Error", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}
