//! Playing surfaces and their named zones
//!
//! Zone anchors are percentages (0 - 100) of the surface image width and
//! height, so the layout never needs real pitch or court dimensions.
//!
//! ## Soccer (landscape pitch)
//! - x runs along the length towards the attacking goal
//! - y runs across the width from the left touchline
//!
//! ## Basketball (half court)
//! - x runs along the baseline from the left corner
//! - y runs away from the baseline towards half court

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sport-specific playing area used for spatial placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    #[default]
    Soccer,
    Basketball,
}

impl Surface {
    pub const ALL: [Surface; 2] = [Surface::Soccer, Surface::Basketball];

    pub fn as_str(&self) -> &'static str {
        match self {
            Surface::Soccer => "soccer",
            Surface::Basketball => "basketball",
        }
    }

    /// Human name used in prompts
    pub fn sport_name(&self) -> &'static str {
        match self {
            Surface::Soccer => "football (soccer)",
            Surface::Basketball => "basketball",
        }
    }

    /// Static zone table for this surface
    pub fn zones(&self) -> &'static [Zone] {
        match self {
            Surface::Soccer => &SOCCER_ZONES,
            Surface::Basketball => &BASKETBALL_ZONES,
        }
    }

    /// Zone used when no rule matches
    pub fn default_zone(&self) -> &'static Zone {
        match self {
            Surface::Soccer => &SOCCER_CENTRE_MID,
            Surface::Basketball => &COURT_TOP_OF_KEY,
        }
    }

    /// Look up the zone on this surface. `None` if the zone belongs to the other surface.
    pub fn zone(&self, id: ZoneId) -> Option<&'static Zone> {
        self.zones().iter().find(|z| z.id == id)
    }
}

impl std::fmt::Display for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Surface {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "soccer" | "football" => Ok(Surface::Soccer),
            "basketball" => Ok(Surface::Basketball),
            other => Err(format!("Unknown surface '{other}' (expected soccer or basketball)")),
        }
    }
}

/// Named region identifier across both surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneId {
    // Shared by both surfaces
    LeftWing,
    RightWing,
    // Soccer
    CentreMid,
    FinalThird,
    DefensiveThird,
    // Basketball
    TopOfKey,
    Paint,
    CornerThreeLeft,
    CornerThreeRight,
}

impl ZoneId {
    /// Display name
    pub const fn name(&self) -> &'static str {
        match self {
            ZoneId::LeftWing => "Left Wing",
            ZoneId::RightWing => "Right Wing",
            ZoneId::CentreMid => "Centre Mid",
            ZoneId::FinalThird => "Final Third",
            ZoneId::DefensiveThird => "Defensive Third",
            ZoneId::TopOfKey => "Top of Key",
            ZoneId::Paint => "Paint",
            ZoneId::CornerThreeLeft => "Corner Three Left",
            ZoneId::CornerThreeRight => "Corner Three Right",
        }
    }
}

/// Percentage anchor on the surface image. Both axes are in 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PitchPoint {
    pub x: u8,
    pub y: u8,
}

impl PitchPoint {
    pub const MAX: u8 = 100;

    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    pub fn is_in_bounds(&self) -> bool {
        self.x <= Self::MAX && self.y <= Self::MAX
    }
}

/// A named region with its fixed anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub id: ZoneId,
    pub name: &'static str,
    pub anchor: PitchPoint,
}

impl Zone {
    pub const fn new(id: ZoneId, x: u8, y: u8) -> Self {
        Self { id, name: id.name(), anchor: PitchPoint::new(x, y) }
    }
}

pub const SOCCER_LEFT_WING: Zone = Zone::new(ZoneId::LeftWing, 60, 15);
pub const SOCCER_RIGHT_WING: Zone = Zone::new(ZoneId::RightWing, 60, 85);
pub const SOCCER_CENTRE_MID: Zone = Zone::new(ZoneId::CentreMid, 45, 50);
pub const SOCCER_FINAL_THIRD: Zone = Zone::new(ZoneId::FinalThird, 80, 50);
pub const SOCCER_DEFENSIVE_THIRD: Zone = Zone::new(ZoneId::DefensiveThird, 20, 50);

pub const COURT_LEFT_WING: Zone = Zone::new(ZoneId::LeftWing, 20, 45);
pub const COURT_RIGHT_WING: Zone = Zone::new(ZoneId::RightWing, 80, 45);
pub const COURT_TOP_OF_KEY: Zone = Zone::new(ZoneId::TopOfKey, 50, 60);
pub const COURT_PAINT: Zone = Zone::new(ZoneId::Paint, 50, 20);
pub const COURT_CORNER_THREE_LEFT: Zone = Zone::new(ZoneId::CornerThreeLeft, 6, 10);
pub const COURT_CORNER_THREE_RIGHT: Zone = Zone::new(ZoneId::CornerThreeRight, 94, 10);

pub static SOCCER_ZONES: [Zone; 5] = [
    SOCCER_LEFT_WING,
    SOCCER_RIGHT_WING,
    SOCCER_CENTRE_MID,
    SOCCER_FINAL_THIRD,
    SOCCER_DEFENSIVE_THIRD,
];

pub static BASKETBALL_ZONES: [Zone; 6] = [
    COURT_LEFT_WING,
    COURT_RIGHT_WING,
    COURT_TOP_OF_KEY,
    COURT_PAINT,
    COURT_CORNER_THREE_LEFT,
    COURT_CORNER_THREE_RIGHT,
];
