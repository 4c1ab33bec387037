use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Player {
    pub(crate) id: u64,
    pub(crate) name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) state: Option<String>,
    pub(crate) points: f64,
}

/// Validated field values of a player, without an id.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerDraft {
    pub(crate) name: String,
    pub(crate) state: Option<String>,
    pub(crate) points: f64,
}

impl Player {
    pub fn from_draft(id: u64, draft: PlayerDraft) -> Self {
        Player {
            id,
            name: draft.name,
            state: draft.state,
            points: draft.points,
        }
    }

    pub fn apply(&mut self, draft: PlayerDraft) {
        self.name = draft.name;
        self.state = draft.state;
        self.points = draft.points;
    }
}
