use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone)]
pub struct Meta {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub total: Option<i64>,
}

impl Meta {
    pub fn new(page: i64, per_page: i64, total: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
            total: Some(total),
        }
    }

    /// A full, unpaginated list of `total` rows.
    pub fn unpaged(total: i64) -> Self {
        Self::new(1, total, total)
    }

    pub fn empty() -> Self {
        Self {
            page: None,
            per_page: None,
            total: None,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub data: Option<T>,
    pub meta: Option<Meta>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T, meta: Option<Meta>) -> Self {
        Self {
            message: message.into(),
            data: Some(data),
            meta,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

impl ApiResponse<ErrorBody> {
    pub fn error(message: impl Into<String>) -> Self {
        let message = message.into();
        Self {
            data: Some(ErrorBody {
                error: message.clone(),
            }),
            message,
            meta: Some(Meta::empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_envelope_repeats_message() {
        let body = serde_json::to_value(ApiResponse::error("Not Found")).expect("json");
        assert_eq!(body["message"], "Not Found");
        assert_eq!(body["data"]["error"], "Not Found");
        assert!(body["meta"]["page"].is_null());
    }

    #[test]
    fn unpaged_meta_covers_every_row() {
        let meta = Meta::unpaged(7);
        assert_eq!((meta.page, meta.per_page, meta.total), (Some(1), Some(7), Some(7)));
    }
}
