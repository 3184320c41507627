use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub id: i64,
    pub name: String,
    pub owner: String,
}

/// Пользовательский тип (enum, composite) в схеме
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostgresType {
    pub id: i64,
    pub schema: String,
    pub name: String,
    #[serde(default)]
    pub enums: Vec<String>,
}

/// Row level security policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: i64,
    pub schema: String,
    pub table: String,
    pub table_id: i64,
    pub name: String,
    pub action: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub command: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationTable {
    pub id: i64,
    pub schema: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Publication {
    pub id: i64,
    pub name: String,
    /// `None` when the publication covers all tables
    #[serde(default)]
    pub tables: Option<Vec<PublicationTable>>,
}

impl Publication {
    pub fn includes_table(&self, table_id: i64) -> bool {
        match &self.tables {
            None => true,
            Some(tables) => tables.iter().any(|t| t.id == table_id),
        }
    }
}

/// Publication that streams row changes to realtime subscribers
pub const REALTIME_PUBLICATION: &str = "supabase_realtime";

/// Whether changes of `table_id` are broadcast over realtime
pub fn is_realtime_enabled(publications: &[Publication], table_id: i64) -> bool {
    publications
        .iter()
        .any(|p| p.name == REALTIME_PUBLICATION && p.includes_table(table_id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publication_for_all_tables() {
        let publication = Publication {
            id: 1,
            name: "realtime".to_string(),
            tables: None,
        };
        assert!(publication.includes_table(42));
    }

    #[test]
    fn test_publication_with_explicit_tables() {
        let publication = Publication {
            id: 1,
            name: "realtime".to_string(),
            tables: Some(vec![PublicationTable {
                id: 42,
                schema: "public".to_string(),
                name: "messages".to_string(),
            }]),
        };
        assert!(publication.includes_table(42));
        assert!(!publication.includes_table(43));
    }

    #[test]
    fn test_realtime_requires_realtime_publication() {
        let messages = PublicationTable {
            id: 42,
            schema: "public".to_string(),
            name: "messages".to_string(),
        };
        let publications = vec![
            Publication {
                id: 1,
                name: "analytics".to_string(),
                tables: None,
            },
            Publication {
                id: 2,
                name: REALTIME_PUBLICATION.to_string(),
                tables: Some(vec![messages]),
            },
        ];
        assert!(is_realtime_enabled(&publications, 42));
        assert!(!is_realtime_enabled(&publications, 7));
        assert!(!is_realtime_enabled(&publications[..1], 42));
    }
}
