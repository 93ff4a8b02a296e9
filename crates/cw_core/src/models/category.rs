//! Tactical-phase categories used to section the code window.

use serde::{Deserialize, Serialize};

/// Coarse tactical grouping for one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Turnovers,
    Restarts,
    Shots,
    Pressing,
    SetPieces,
    PlayerActions,
    Other,
}

impl Category {
    /// All categories in classifier rule order
    pub const ALL: [Category; 7] = [
        Category::Turnovers,
        Category::Restarts,
        Category::Shots,
        Category::Pressing,
        Category::SetPieces,
        Category::PlayerActions,
        Category::Other,
    ];

    /// Section heading shown above the category's tiles
    pub fn label(&self) -> &'static str {
        match self {
            Category::Turnovers => "Turnovers",
            Category::Restarts => "Restarts",
            Category::Shots => "Shots",
            Category::Pressing => "Pressing",
            Category::SetPieces => "Set Pieces",
            Category::PlayerActions => "Player Actions",
            Category::Other => "Other",
        }
    }

    /// Get the string ID (for JSON compatibility)
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Turnovers => "turnovers",
            Category::Restarts => "restarts",
            Category::Shots => "shots",
            Category::Pressing => "pressing",
            Category::SetPieces => "set_pieces",
            Category::PlayerActions => "player_actions",
            Category::Other => "other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
