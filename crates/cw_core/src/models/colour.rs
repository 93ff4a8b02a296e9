//! Display colours for event tiles.

use serde::{Deserialize, Serialize};

/// Colour token assigned to an event's tile or marker.
///
/// Each token is bound to one fixed hex value; renderers should use
/// [`DisplayColor::hex`] rather than inventing their own palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayColor {
    Red,
    Orange,
    Blue,
    Yellow,
    Violet,
    Purple,
    /// Goalkeeper saves
    DarkGray,
    /// Fallback for anything no rule recognises
    #[default]
    NeutralGray,
}

impl DisplayColor {
    pub const ALL: [DisplayColor; 8] = [
        DisplayColor::Red,
        DisplayColor::Orange,
        DisplayColor::Blue,
        DisplayColor::Yellow,
        DisplayColor::Violet,
        DisplayColor::Purple,
        DisplayColor::DarkGray,
        DisplayColor::NeutralGray,
    ];

    pub fn hex(&self) -> &'static str {
        match self {
            DisplayColor::Red => "#d7263d",
            DisplayColor::Orange => "#f49d37",
            DisplayColor::Blue => "#3f88c5",
            DisplayColor::Yellow => "#ffce00",
            DisplayColor::Violet => "#9c89b8",
            DisplayColor::Purple => "#6a4c93",
            DisplayColor::DarkGray => "#595959",
            DisplayColor::NeutralGray => "#444444",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_hex_values_unique_and_well_formed() {
        let mut seen = HashSet::new();
        for colour in DisplayColor::ALL {
            let hex = colour.hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
            assert!(seen.insert(hex), "duplicate hex {hex}");
        }
    }
}
