use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CatalogConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact match.
    Eq,
    /// Substring match; the needle is escaped before being bound.
    Contains,
}

#[derive(Debug, Clone)]
pub struct FilterWhereInfo {
    pub column: String,
    pub operator: FilterOp,
    pub data: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone)]
pub struct FilterOrderInfo {
    pub column: String,
    pub sort: SortDirection,
}

/// Orderings accepted by `GET /products?sort=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    #[default]
    Default,
    PriceAsc,
    PriceDesc,
}

impl ProductSort {
    /// Unknown values fall back to the default id ordering.
    pub fn from_param(value: &str) -> Self {
        match value {
            "price_asc" => ProductSort::PriceAsc,
            "price_desc" => ProductSort::PriceDesc,
            _ => ProductSort::Default,
        }
    }
}

/// Parsed, normalized product listing parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFilter {
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: ProductSort,
    pub page: i64,
    pub limit: i64,
}

impl ProductFilter {
    pub fn new(page: i64, limit: i64) -> Self {
        Self {
            category: None,
            search: None,
            sort: ProductSort::Default,
            page: page.max(1),
            limit: limit.max(1),
        }
    }

    /// Lenient parsing of raw query values: anything missing, unparsable or
    /// below 1 takes the default, and empty strings disable their predicate.
    pub fn from_params(
        page: Option<&str>,
        limit: Option<&str>,
        category: Option<&str>,
        search: Option<&str>,
        sort: Option<&str>,
        catalog: &CatalogConfig,
    ) -> Self {
        let page = parse_positive(page).unwrap_or(1);
        let mut limit = parse_positive(limit).unwrap_or(catalog.default_limit);
        if let Some(max) = catalog.max_limit {
            if limit > max {
                tracing::debug!("Limit {} exceeds max {}, capping to max", limit, max);
                limit = max;
            }
        }

        Self {
            category: non_empty(category),
            search: non_empty(search),
            sort: sort.map(ProductSort::from_param).unwrap_or_default(),
            page,
            limit,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_sort(mut self, sort: ProductSort) -> Self {
        self.sort = sort;
        self
    }

    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }
}

impl Default for ProductFilter {
    fn default() -> Self {
        Self::new(1, 10)
    }
}

fn parse_positive(value: Option<&str>) -> Option<i64> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_string)
}

#[derive(Debug, Clone)]
pub struct SqlResult {
    pub query: String,
    pub params: Vec<Value>,
}
