use serde::{Deserialize, Serialize};

// ============================================================================
// Columns
// ============================================================================

/// Колонка таблицы, представления или внешней таблицы.
///
/// `id` имеет вид `"{table_id}.{ordinal_position}"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub id: String,
    pub table_id: i64,
    pub schema: String,
    pub table: String,
    pub name: String,
    pub ordinal_position: i32,
    pub data_type: String,
    pub format: String,
    #[serde(default)]
    pub is_nullable: bool,
    #[serde(default)]
    pub is_identity: bool,
    #[serde(default)]
    pub is_unique: bool,
    #[serde(default)]
    pub default_value: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrimaryKey {
    pub schema: String,
    pub table_name: String,
    pub name: String,
    pub table_id: i64,
}

// ============================================================================
// Table-like entities
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub id: i64,
    pub schema: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub rls_enabled: bool,
    #[serde(default)]
    pub live_rows_estimate: i64,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub primary_keys: Vec<PrimaryKey>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct View {
    pub id: i64,
    pub schema: String,
    pub name: String,
    #[serde(default)]
    pub is_updatable: bool,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForeignTable {
    pub id: i64,
    pub schema: String,
    pub name: String,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Table,
    View,
    ForeignTable,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::View => "view",
            Self::ForeignTable => "foreign table",
        }
    }
}

/// Any entity the editor can open in the grid
#[derive(Debug, Clone, PartialEq)]
pub enum TableLike {
    Table(Table),
    View(View),
    ForeignTable(ForeignTable),
}

impl TableLike {
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Table(_) => EntityKind::Table,
            Self::View(_) => EntityKind::View,
            Self::ForeignTable(_) => EntityKind::ForeignTable,
        }
    }

    pub fn id(&self) -> i64 {
        match self {
            Self::Table(t) => t.id,
            Self::View(v) => v.id,
            Self::ForeignTable(f) => f.id,
        }
    }

    pub fn schema(&self) -> &str {
        match self {
            Self::Table(t) => &t.schema,
            Self::View(v) => &v.schema,
            Self::ForeignTable(f) => &f.schema,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Table(t) => &t.name,
            Self::View(v) => &v.name,
            Self::ForeignTable(f) => &f.name,
        }
    }

    pub fn columns(&self) -> &[Column] {
        match self {
            Self::Table(t) => &t.columns,
            Self::View(v) => &v.columns,
            Self::ForeignTable(f) => &f.columns,
        }
    }

    /// Only plain tables accept row/column edits from the grid
    pub fn is_editable(&self) -> bool {
        matches!(self, Self::Table(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_deserializes_without_optional_fields() {
        let json = r#"{"id": 16384, "schema": "public", "name": "countries"}"#;
        let table: Table = serde_json::from_str(json).unwrap();
        assert_eq!(table.id, 16384);
        assert!(table.columns.is_empty());
        assert!(!table.rls_enabled);
    }

    #[test]
    fn test_table_like_accessors() {
        let view = TableLike::View(View {
            id: 7,
            schema: "reporting".to_string(),
            name: "monthly".to_string(),
            is_updatable: false,
            comment: None,
            columns: vec![],
        });
        assert_eq!(view.kind(), EntityKind::View);
        assert_eq!(view.id(), 7);
        assert_eq!(view.schema(), "reporting");
        assert!(!view.is_editable());
    }
}
