use super::error::FilterError;
use super::filter_where::validate_column;
use super::types::{FilterOrderInfo, ProductSort, SortDirection};

pub struct FilterOrder;

impl FilterOrder {
    /// Price orderings tie-break on id so pages stay stable.
    pub fn for_products(sort: ProductSort) -> Vec<FilterOrderInfo> {
        let by_id = FilterOrderInfo { column: "id".to_string(), sort: SortDirection::Asc };
        match sort {
            ProductSort::Default => vec![by_id],
            ProductSort::PriceAsc => vec![
                FilterOrderInfo { column: "price".to_string(), sort: SortDirection::Asc },
                by_id,
            ],
            ProductSort::PriceDesc => vec![
                FilterOrderInfo { column: "price".to_string(), sort: SortDirection::Desc },
                by_id,
            ],
        }
    }

    pub fn generate(infos: &[FilterOrderInfo]) -> Result<String, FilterError> {
        if infos.is_empty() {
            return Ok(String::new());
        }
        let mut parts = Vec::with_capacity(infos.len());
        for info in infos {
            validate_column(&info.column)?;
            parts.push(format!("\"{}\" {}", info.column, info.sort.to_sql()));
        }
        Ok(format!("ORDER BY {}", parts.join(", ")))
    }
}
