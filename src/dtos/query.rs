//! Query DTOs - Data Transfer Objects per query string

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_LIMIT: u64 = 10;

/// DTO per query parameters di paginazione inviti (`?page=&limit=`).
/// Restano stringhe: valori non numerici ricadono sui default invece di
/// far fallire la richiesta.
#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct PageQuery {
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl PageQuery {
    pub fn new(page: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            page: page.map(str::to_string),
            limit: limit.map(str::to_string),
        }
    }

    pub fn page(&self) -> u64 {
        positive_or(self.page.as_deref(), DEFAULT_PAGE)
    }

    /// Limite richiesto, ridotto a `max_limit` se lo supera
    pub fn limit(&self, max_limit: u64) -> u64 {
        positive_or(self.limit.as_deref(), DEFAULT_LIMIT).min(max_limit.max(1))
    }
}

fn positive_or(raw: Option<&str>, default: u64) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_values_use_defaults() {
        let query = PageQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.limit(100), 10);
    }

    #[test]
    fn non_numeric_and_non_positive_values_use_defaults() {
        for raw in ["abc", "", "0", "-3", "2.5"] {
            let query = PageQuery::new(Some(raw), Some(raw));
            assert_eq!(query.page(), DEFAULT_PAGE, "page for {raw:?}");
            assert_eq!(query.limit(100), DEFAULT_LIMIT, "limit for {raw:?}");
        }
    }

    #[test]
    fn numeric_values_are_used() {
        let query = PageQuery::new(Some("3"), Some(" 25 "));
        assert_eq!(query.page(), 3);
        assert_eq!(query.limit(100), 25);
    }

    #[test]
    fn limit_is_capped() {
        let query = PageQuery::new(None, Some("5000"));
        assert_eq!(query.limit(100), 100);
    }
}
