use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

const MAX_PAGE: i64 = 1_000_000;

impl Pagination {
    /// Returns `(page, per_page, offset)` with page in `1..=MAX_PAGE` and per_page in `1..=100`.
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).clamp(1, MAX_PAGE);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = (page - 1).saturating_mul(per_page);
        (page, per_page, offset)
    }
}

// Fields are kept flat: serde_urlencoded cannot parse numbers through `flatten`.
#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PropertyQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    /// Case-insensitive city match.
    pub city: Option<String>,
    /// Keep properties with at least one room at or below this nightly price.
    pub max_price: Option<i64>,
    /// Comma-separated amenity names; every one must be offered.
    pub amenities: Option<String>,
}

impl PropertyQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }

    pub fn amenity_names(&self) -> Vec<String> {
        self.amenities
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(|name| name.trim().to_lowercase())
            .filter(|name| !name.is_empty())
            .collect()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref().map(str::trim).filter(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_is_clamped() {
        let p = Pagination {
            page: Some(0),
            per_page: Some(500),
        };
        assert_eq!(p.normalize(), (1, 100, 0));

        let p = Pagination {
            page: Some(3),
            per_page: None,
        };
        assert_eq!(p.normalize(), (3, 20, 40));
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let p = Pagination {
            page: Some(i64::MAX),
            per_page: Some(100),
        };
        let (page, per_page, offset) = p.normalize();
        assert_eq!(page, MAX_PAGE);
        assert_eq!(per_page, 100);
        assert_eq!(offset, (MAX_PAGE - 1) * 100);

        let p = Pagination {
            page: Some(i64::MIN),
            per_page: Some(i64::MIN),
        };
        assert_eq!(p.normalize(), (1, 1, 0));
    }

    #[test]
    fn amenity_list_is_split_and_normalized() {
        let q = PropertyQuery {
            amenities: Some(" WiFi, ,Parking ".into()),
            ..Default::default()
        };
        assert_eq!(q.amenity_names(), vec!["wifi", "parking"]);
        assert!(PropertyQuery::default().amenity_names().is_empty());
    }

    #[test]
    fn blank_city_is_ignored() {
        let q = PropertyQuery {
            city: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(q.city(), None);
    }
}
