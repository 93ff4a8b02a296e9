//! Category, colour and zone resolution from an event name
//!
//! The three resolvers run independent rule tables over the same name.
//! Category reflects tactical phase while colour reflects event type, so
//! their keyword sets and precedence deliberately differ.

use tracing::debug;

use crate::models::{Category, DisplayColor};
use crate::rules::{KeywordRule, RuleTable};
use crate::surface::*;

static CATEGORY_RULES: [KeywordRule<Category>; 6] = [
    KeywordRule::any(&["turnover"], Category::Turnovers),
    // "goal kick" must fire before the shots rule sees "goal"
    KeywordRule::any(&["restart", "goal kick"], Category::Restarts),
    KeywordRule::any(&["shot", "goal", "save"], Category::Shots),
    KeywordRule::any(&["press"], Category::Pressing),
    KeywordRule::any(&["cross", "set piece"], Category::SetPieces),
    KeywordRule::any(&["1v1", "interception"], Category::PlayerActions),
];

static COLOUR_RULES: [KeywordRule<DisplayColor>; 7] = [
    KeywordRule::any(&["goal"], DisplayColor::Red),
    KeywordRule::any(&["shot"], DisplayColor::Orange),
    KeywordRule::any(&["corner"], DisplayColor::Blue),
    KeywordRule::any(&["cross", "cutback"], DisplayColor::Yellow),
    KeywordRule::any(&["turnover"], DisplayColor::Violet),
    KeywordRule::any(&["press"], DisplayColor::Purple),
    KeywordRule::any(&["save"], DisplayColor::DarkGray),
];

static SOCCER_ZONE_RULES: [KeywordRule<&Zone>; 4] = [
    KeywordRule::any(&["left"], &SOCCER_LEFT_WING),
    KeywordRule::any(&["right"], &SOCCER_RIGHT_WING),
    KeywordRule::any(&["final"], &SOCCER_FINAL_THIRD),
    KeywordRule::any(&["defen"], &SOCCER_DEFENSIVE_THIRD),
];

static BASKETBALL_ZONE_RULES: [KeywordRule<&Zone>; 6] = [
    KeywordRule::any(&["left wing"], &COURT_LEFT_WING),
    KeywordRule::any(&["right wing"], &COURT_RIGHT_WING),
    KeywordRule::any(&["key"], &COURT_TOP_OF_KEY),
    KeywordRule::any(&["paint"], &COURT_PAINT),
    KeywordRule::all(&["corner", "left"], &COURT_CORNER_THREE_LEFT),
    KeywordRule::all(&["corner", "right"], &COURT_CORNER_THREE_RIGHT),
];

pub static CATEGORY_TABLE: RuleTable<Category> = RuleTable::new(&CATEGORY_RULES, Category::Other);

pub static COLOUR_TABLE: RuleTable<DisplayColor> =
    RuleTable::new(&COLOUR_RULES, DisplayColor::NeutralGray);

pub static SOCCER_ZONE_TABLE: RuleTable<&Zone> =
    RuleTable::new(&SOCCER_ZONE_RULES, &SOCCER_CENTRE_MID);

pub static BASKETBALL_ZONE_TABLE: RuleTable<&Zone> =
    RuleTable::new(&BASKETBALL_ZONE_RULES, &COURT_TOP_OF_KEY);

/// Zone rule table for a surface
pub fn zone_table(surface: Surface) -> &'static RuleTable<&'static Zone> {
    match surface {
        Surface::Soccer => &SOCCER_ZONE_TABLE,
        Surface::Basketball => &BASKETBALL_ZONE_TABLE,
    }
}

/// Tactical category for an event name. Total: unmatched names are `Other`.
pub fn classify(name: &str) -> Category {
    CATEGORY_TABLE.resolve(name)
}

/// Display colour for an event name. Total: unmatched names are neutral gray.
pub fn resolve_color(name: &str) -> DisplayColor {
    COLOUR_TABLE.resolve(name)
}

/// Zone on `surface` for an event name, falling back to the surface default.
pub fn resolve_zone(surface: Surface, name: &str) -> &'static Zone {
    zone_table(surface).resolve(name)
}

/// All three resolutions for one name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tagging {
    pub category: Category,
    pub color: DisplayColor,
    pub zone: &'static Zone,
}

/// Runs every resolver over one lowercased copy of `name`.
pub fn tag(surface: Surface, name: &str) -> Tagging {
    let lowered = name.to_lowercase();
    let tagging = Tagging {
        category: CATEGORY_TABLE.resolve_lowered(&lowered),
        color: COLOUR_TABLE.resolve_lowered(&lowered),
        zone: zone_table(surface).resolve_lowered(&lowered),
    };
    debug!(
        name,
        category = tagging.category.as_str(),
        color = tagging.color.hex(),
        zone = tagging.zone.name,
        "tagged event"
    );
    tagging
}
