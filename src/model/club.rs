use serde::{Deserialize, Serialize};

/// Identifier of a club, as assigned by the league backend.
pub type ClubId = u32;

/// A club enrolled in a championship: just enough to label a table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClubRef {
    pub id: ClubId,
    pub name: String,
}

impl ClubRef {
    pub fn new(id: ClubId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
