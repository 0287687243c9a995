use super::error::FilterError;
use super::filter_order::FilterOrder;
use super::filter_where::{validate_column, FilterWhere};
use super::types::{FilterOrderInfo, ProductFilter, SqlResult};

/// Builds a parameterized `SELECT` (and matching `COUNT`) for one table.
pub struct Filter {
    table_name: String,
    select_columns: Vec<String>,
    where_data: FilterWhere,
    order_data: Vec<FilterOrderInfo>,
    limit: Option<i64>,
    offset: Option<i64>,
}

impl Filter {
    pub fn new(table_name: impl Into<String>) -> Result<Self, FilterError> {
        let table_name = table_name.into();
        validate_column(&table_name)
            .map_err(|_| FilterError::InvalidTableName(table_name.clone()))?;
        Ok(Self {
            table_name,
            select_columns: vec![],
            where_data: FilterWhere::new(),
            order_data: vec![],
            limit: None,
            offset: None,
        })
    }

    /// Translate listing parameters into a filter over `products`.
    pub fn for_products(params: &ProductFilter) -> Result<Self, FilterError> {
        let mut filter = Self::new("products")?;
        filter.select(&["id", "title", "price", "category", "image"])?;

        if let Some(category) = &params.category {
            filter.where_data.eq("category", category.as_str())?;
        }
        if let Some(search) = &params.search {
            filter.where_data.contains("title", search)?;
        }

        filter.order_data = FilterOrder::for_products(params.sort);
        filter.limit = Some(params.limit);
        filter.offset = Some(params.offset());
        Ok(filter)
    }

    pub fn select(&mut self, columns: &[&str]) -> Result<&mut Self, FilterError> {
        for column in columns {
            validate_column(column)?;
        }
        self.select_columns = columns.iter().map(|c| c.to_string()).collect();
        Ok(self)
    }

    pub fn to_sql(&self) -> Result<SqlResult, FilterError> {
        let (where_clause, mut params) = self.where_data.generate();
        let order_clause = FilterOrder::generate(&self.order_data)?;

        let limit_clause = match (self.limit, self.offset) {
            (Some(limit), offset) => {
                params.push(limit.into());
                let limit_sql = format!("LIMIT ?{}", params.len());
                params.push(offset.unwrap_or(0).into());
                format!("{} OFFSET ?{}", limit_sql, params.len())
            }
            (None, _) => String::new(),
        };

        let query = [
            format!("SELECT {}", self.build_select_clause()),
            format!("FROM \"{}\"", self.table_name),
            if where_clause.is_empty() { String::new() } else { format!("WHERE {}", where_clause) },
            order_clause,
            limit_clause,
        ]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

        Ok(SqlResult { query, params })
    }

    /// Same predicates as [`Filter::to_sql`], ignoring order and pagination.
    pub fn to_count_sql(&self) -> SqlResult {
        let (where_clause, params) = self.where_data.generate();
        let query = if where_clause.is_empty() {
            format!("SELECT COUNT(*) AS count FROM \"{}\"", self.table_name)
        } else {
            format!("SELECT COUNT(*) AS count FROM \"{}\" WHERE {}", self.table_name, where_clause)
        };
        SqlResult { query, params }
    }

    fn build_select_clause(&self) -> String {
        if self.select_columns.is_empty() {
            "*".to_string()
        } else {
            self.select_columns
                .iter()
                .map(|c| format!("\"{}\"", c))
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::ProductSort;
    use serde_json::json;

    #[test]
    fn unfiltered_products_query() {
        let filter = Filter::for_products(&ProductFilter::default()).unwrap();
        let sql = filter.to_sql().unwrap();
        assert_eq!(
            sql.query,
            "SELECT \"id\", \"title\", \"price\", \"category\", \"image\" FROM \"products\" \
             ORDER BY \"id\" ASC LIMIT ?1 OFFSET ?2"
        );
        assert_eq!(sql.params, vec![json!(10), json!(0)]);

        let count = filter.to_count_sql();
        assert_eq!(count.query, "SELECT COUNT(*) AS count FROM \"products\"");
        assert!(count.params.is_empty());
    }

    #[test]
    fn filtered_products_query_shares_params_with_count() {
        let params = ProductFilter::new(2, 5)
            .with_category("electronics")
            .with_search("phone")
            .with_sort(ProductSort::PriceAsc);
        let filter = Filter::for_products(&params).unwrap();

        let sql = filter.to_sql().unwrap();
        assert!(sql.query.contains("WHERE \"category\" = ?1 AND \"title\" LIKE ?2"));
        assert!(sql.query.ends_with("ORDER BY \"price\" ASC, \"id\" ASC LIMIT ?3 OFFSET ?4"));
        assert_eq!(sql.params, vec![json!("electronics"), json!("%phone%"), json!(5), json!(5)]);

        let count = filter.to_count_sql();
        assert!(count.query.ends_with("WHERE \"category\" = ?1 AND \"title\" LIKE ?2 ESCAPE '\\'"));
        assert_eq!(count.params, vec![json!("electronics"), json!("%phone%")]);
    }

    #[test]
    fn rejects_invalid_table_name() {
        assert!(matches!(Filter::new("products; --"), Err(FilterError::InvalidTableName(_))));
    }
}
