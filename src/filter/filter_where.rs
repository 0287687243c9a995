use serde_json::Value;

use super::error::FilterError;
use super::types::{FilterOp, FilterWhereInfo};

/// Accumulates predicates and the parameters they bind.
///
/// Placeholders are numbered (`?1`, `?2`, ...) so the same parameter list can
/// be shared between the page query and the count query, with pagination
/// parameters appended after it.
#[derive(Debug, Default)]
pub struct FilterWhere {
    param_values: Vec<Value>,
    conditions: Vec<FilterWhereInfo>,
}

impl FilterWhere {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(&mut self, column: &str, value: impl Into<Value>) -> Result<&mut Self, FilterError> {
        validate_column(column)?;
        self.conditions.push(FilterWhereInfo {
            column: column.to_string(),
            operator: FilterOp::Eq,
            data: value.into(),
        });
        Ok(self)
    }

    pub fn contains(&mut self, column: &str, needle: &str) -> Result<&mut Self, FilterError> {
        validate_column(column)?;
        self.conditions.push(FilterWhereInfo {
            column: column.to_string(),
            operator: FilterOp::Contains,
            data: Value::String(needle.to_string()),
        });
        Ok(self)
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Render the AND-joined predicate (without the `WHERE` keyword) and its
    /// parameters. An empty filter renders as an empty string.
    pub fn generate(&self) -> (String, Vec<Value>) {
        let mut params: Vec<Value> = Vec::with_capacity(self.conditions.len());
        let mut sql_conditions = Vec::with_capacity(self.conditions.len());

        for condition in &self.conditions {
            let quoted_column = format!("\"{}\"", condition.column);
            let sql = match condition.operator {
                FilterOp::Eq => {
                    if condition.data.is_null() {
                        format!("{} IS NULL", quoted_column)
                    } else {
                        format!("{} = {}", quoted_column, param(&mut params, condition.data.clone()))
                    }
                }
                FilterOp::Contains => {
                    let needle = condition.data.as_str().unwrap_or_default();
                    let pattern = format!("%{}%", escape_like(needle));
                    format!(
                        "{} LIKE {} ESCAPE '\\'",
                        quoted_column,
                        param(&mut params, Value::String(pattern))
                    )
                }
            };
            sql_conditions.push(sql);
        }

        (sql_conditions.join(" AND "), params)
    }
}

fn param(params: &mut Vec<Value>, value: Value) -> String {
    params.push(value);
    format!("?{}", params.len())
}

/// Make `%`, `_` and the escape character itself match literally.
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

pub(crate) fn validate_column(column: &str) -> Result<(), FilterError> {
    let mut chars = column.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return Err(FilterError::InvalidColumn(column.to_string())),
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(FilterError::InvalidColumn(column.to_string()));
    }
    Ok(())
}
