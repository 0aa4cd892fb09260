use serde::{Deserialize, Serialize};

/// Fallback label for records rendered without a name
pub const UNNAMED_LABEL: &str = "Unnamed Item";

/// Single record from the `hiring.json` endpoint
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: i64,
    #[serde(rename = "listId")]
    pub group_id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl Record {
    pub fn new(id: i64, group_id: i64, name: Option<&str>) -> Self {
        Self {
            id,
            group_id,
            name: name.map(str::to_string),
        }
    }

    /// Name to show in a list, falling back to [`UNNAMED_LABEL`]
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_LABEL)
    }
}
