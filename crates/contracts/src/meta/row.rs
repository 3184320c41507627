use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single grid row, keyed by column name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RowData {
    /// Position of the row in the currently loaded page
    pub idx: usize,
    #[serde(flatten)]
    pub values: Map<String, Value>,
}
