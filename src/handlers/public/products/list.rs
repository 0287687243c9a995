// handlers/public/products/list.rs - GET /products handler

use axum::extract::{rejection::QueryRejection, Query, State};
use serde::Serialize;

use crate::app::AppState;
use crate::database::Product;
use crate::filter::ProductFilter;
use crate::middleware::{ApiResponse, ApiResult};

/// Raw query string; parsed leniently by `ProductFilter::from_params`.
/// A key given more than once keeps its first value.
#[derive(Debug, Default, PartialEq)]
pub struct ProductListQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub category: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

impl ProductListQuery {
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                "category" => &mut query.category,
                "search" => &mut query.search,
                "sort" => &mut query.sort,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub total: i64,
    pub page: i64,
    pub limit: i64,
    pub results: Vec<Product>,
}

/// GET /products?page&limit&category&search&sort
pub async fn products_get(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<ProductListResponse> {
    let Query(pairs) = query?;
    let query = ProductListQuery::from_pairs(pairs);
    let filter = ProductFilter::from_params(
        query.page.as_deref(),
        query.limit.as_deref(),
        query.category.as_deref(),
        query.search.as_deref(),
        query.sort.as_deref(),
        &state.catalog,
    );

    let (results, total) = state.db.products().list(&filter).await?;

    Ok(ApiResponse::success(ProductListResponse {
        total,
        page: filter.page,
        limit: filter.limit,
        results,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn first_occurrence_of_a_key_wins() {
        let query = ProductListQuery::from_pairs(pairs(&[
            ("page", "1"),
            ("sort", "price_desc"),
            ("page", "2"),
            ("sort", "title_asc"),
            ("utm_source", "mail"),
        ]));
        assert_eq!(query.page.as_deref(), Some("1"));
        assert_eq!(query.sort.as_deref(), Some("price_desc"));
        assert_eq!(query.limit, None);
    }
}
