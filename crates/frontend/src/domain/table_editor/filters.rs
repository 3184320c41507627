//! Grid filter and sort URL parameters.
//!
//! Filter: `filter=column:operator:value`, sort: `sort=column:asc|desc`.
//! The column is everything before the first delimiter.

use crate::shared::query_params::QueryParams;

pub const FILTER_PARAM: &str = "filter";
pub const SORT_PARAM: &str = "sort";
const DELIMITER: char = ':';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    pub column: String,
    pub operator: String,
    pub value: String,
}

impl Filter {
    pub fn parse(param: &str) -> Option<Self> {
        let mut parts = param.splitn(3, DELIMITER);
        let column = parts.next().filter(|c| !c.is_empty())?;
        let operator = parts.next()?;
        let value = parts.next().unwrap_or_default();
        Some(Self {
            column: column.to_string(),
            operator: operator.to_string(),
            value: value.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub column: String,
    pub ascending: bool,
}

impl Sort {
    pub fn parse(param: &str) -> Option<Self> {
        let (column, direction) = param.split_once(DELIMITER)?;
        if column.is_empty() {
            return None;
        }
        let ascending = match direction {
            "asc" => true,
            "desc" => false,
            _ => return None,
        };
        Some(Self {
            column: column.to_string(),
            ascending,
        })
    }
}

/// Column addressed by a filter or sort parameter
pub fn param_column(param: &str) -> &str {
    param.split_once(DELIMITER).map_or(param, |(column, _)| column)
}

/// Parameters not referring to `column` (exact match on the column part)
pub fn without_column(params: &[String], column: &str) -> Vec<String> {
    params
        .iter()
        .filter(|p| param_column(p) != column)
        .cloned()
        .collect()
}

/// Drops filters and sorts on a deleted column. Returns `true` if anything changed.
pub fn remove_column_references(query: &dyn QueryParams, column: &str) -> bool {
    let mut changed = false;
    for key in [FILTER_PARAM, SORT_PARAM] {
        let current = query.values(key);
        let kept = without_column(&current, column);
        if kept.len() != current.len() {
            query.set_values(key, kept);
            changed = true;
        }
    }
    changed
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;

    /// In-memory query string
    #[derive(Default)]
    pub struct MemoryQuery {
        pub pairs: RefCell<Vec<(String, String)>>,
    }

    impl MemoryQuery {
        pub fn from(search: &str) -> Self {
            Self {
                pairs: RefCell::new(crate::shared::query_params::parse_query(search)),
            }
        }
    }

    impl QueryParams for MemoryQuery {
        fn values(&self, key: &str) -> Vec<String> {
            self.pairs
                .borrow()
                .iter()
                .filter(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
                .collect()
        }

        fn set_values(&self, key: &str, values: Vec<String>) {
            crate::shared::query_params::replace_values(&mut self.pairs.borrow_mut(), key, values);
        }
    }

    #[test]
    fn test_exact_prefix_match() {
        let params = vec![
            "age:gt:30".to_string(),
            "age_group:eq:adult".to_string(),
            "page_age:lt:3".to_string(),
        ];
        assert_eq!(
            without_column(&params, "age"),
            vec!["age_group:eq:adult".to_string(), "page_age:lt:3".to_string()]
        );
    }

    #[test]
    fn test_remove_column_references_touches_filters_and_sorts() {
        let query = MemoryQuery::from("filter=age:gt:30&filter=name:eq:bob&sort=age:asc&sort=age_group:desc");
        assert!(remove_column_references(&query, "age"));
        assert_eq!(query.values(FILTER_PARAM), vec!["name:eq:bob".to_string()]);
        assert_eq!(query.values(SORT_PARAM), vec!["age_group:desc".to_string()]);

        assert!(!remove_column_references(&query, "age"));
    }

    #[test]
    fn test_parse_filter_and_sort() {
        assert_eq!(
            Filter::parse("created_at:gte:2024-01-01T10:00"),
            Some(Filter {
                column: "created_at".to_string(),
                operator: "gte".to_string(),
                value: "2024-01-01T10:00".to_string(),
            })
        );
        assert_eq!(Filter::parse(":eq:1"), None);
        assert_eq!(
            Sort::parse("name:desc"),
            Some(Sort {
                column: "name".to_string(),
                ascending: false
            })
        );
        assert_eq!(Sort::parse("name:sideways"), None);
        assert_eq!(param_column("bare"), "bare");
    }
}
