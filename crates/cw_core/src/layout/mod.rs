//! Layout builder
//!
//! Groups validated events by category (first-seen order, both across and
//! within categories) and annotates each with its colour and zone anchor.

use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::info;

use crate::models::{Category, DisplayColor, Event};
use crate::surface::{Surface, Zone, ZoneId};
use crate::tagging::tag;


/// An event with everything a renderer needs to draw it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedEvent {
    #[serde(flatten)]
    event: Event,
    pub category: Category,
    pub display_color: DisplayColor,
    /// Hex value of `display_color`
    pub hex: &'static str,
    pub zone: ZoneId,
    pub zone_name: &'static str,
    pub x: u8,
    pub y: u8,
}

impl PlacedEvent {
    pub fn new(event: Event, category: Category, display_color: DisplayColor, zone: &Zone) -> Self {
        Self {
            event,
            category,
            display_color,
            hex: display_color.hex(),
            zone: zone.id,
            zone_name: zone.name,
            x: zone.anchor.x,
            y: zone.anchor.y,
        }
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn name(&self) -> &str {
        self.event.name()
    }

    pub fn labels(&self) -> &[String] {
        self.event.labels()
    }
}

/// One category section of the code window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryGroup {
    pub category: Category,
    pub label: &'static str,
    pub events: Vec<PlacedEvent>,
}

impl CategoryGroup {
    fn new(category: Category) -> Self {
        Self { category, label: category.label(), events: Vec::new() }
    }
}

/// Category-grouped, colour- and zone-annotated events for one surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    surface: Surface,
    groups: Vec<CategoryGroup>,
}

impl Layout {
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Category sections in first-seen order
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    pub fn get(&self, category: Category) -> Option<&[PlacedEvent]> {
        self.groups
            .iter()
            .find(|g| g.category == category)
            .map(|g| g.events.as_slice())
    }

    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        self.groups.iter().map(|g| g.category)
    }

    /// Every placed event, section by section
    pub fn iter_events(&self) -> impl Iterator<Item = &PlacedEvent> {
        self.groups.iter().flat_map(|g| g.events.iter())
    }

    pub fn event_count(&self) -> usize {
        self.groups.iter().map(|g| g.events.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// SHA-256 hex of the layout's JSON form. Equal exactly for structurally identical layouts.
    pub fn fingerprint(&self) -> serde_json::Result<String> {
        let mut hasher = Sha256::new();
        serde_json::to_writer(&mut hasher, self)?;
        Ok(format!("{:x}", hasher.finalize()))
    }
}

/// Build the layout for already validated events.
pub fn build(events: &[Event], surface: Surface) -> Layout {
    let mut groups: Vec<CategoryGroup> = Vec::new();

    for event in events {
        let tagging = tag(surface, event.name());
        let placed = PlacedEvent::new(event.clone(), tagging.category, tagging.color, tagging.zone);

        let index = match groups.iter().position(|g| g.category == tagging.category) {
            Some(index) => index,
            None => {
                groups.push(CategoryGroup::new(tagging.category));
                groups.len() - 1
            }
        };
        groups[index].events.push(placed);
    }

    let layout = Layout { surface, groups };
    info!(
        surface = surface.as_str(),
        categories = layout.groups.len(),
        events = layout.event_count(),
        "built code window layout"
    );
    layout
}
