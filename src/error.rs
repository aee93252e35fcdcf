use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::{DbErr, RuntimeErr};
use sqlx::error::{DatabaseError, ErrorKind};
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Room is not available for the requested dates")]
    RoomUnavailable,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Database error")]
    DbError(sqlx::Error),

    #[error("ORM error")]
    OrmError(DbErr),

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::RoomUnavailable => StatusCode::CONFLICT,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::DbError(_) | AppError::OrmError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

// Unique, foreign-key, check and not-null failures are the caller's fault;
// everything else stays an internal database error.
fn constraint_violation(err: &dyn DatabaseError) -> Option<AppError> {
    let what = match err.kind() {
        ErrorKind::UniqueViolation => "duplicate key",
        ErrorKind::ForeignKeyViolation => "referenced row does not exist",
        ErrorKind::CheckViolation => "check constraint failed",
        ErrorKind::NotNullViolation => "missing required value",
        _ => return None,
    };
    let detail = match err.constraint() {
        Some(name) => format!("{what} ({name})"),
        None => what.to_string(),
    };
    Some(AppError::ConstraintViolation(detail))
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if let Some(mapped) = constraint_violation(&**db) {
                return mapped;
            }
        }
        AppError::DbError(err)
    }
}

impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        match &err {
            DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(db)))
            | DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(db))) => {
                if let Some(mapped) = constraint_violation(&**db) {
                    return mapped;
                }
            }
            DbErr::RecordNotFound(_) => return AppError::NotFound,
            _ => {}
        }
        AppError::OrmError(err)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::DbError(err) => tracing::error!(error = %err, "database error"),
            AppError::OrmError(err) => tracing::error!(error = %err, "orm error"),
            AppError::Internal(err) => tracing::error!(error = %err, "internal error"),
            _ => {}
        }

        (status, axum::Json(ApiResponse::error(self.to_string()))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
