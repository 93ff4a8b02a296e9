//! # cw_core - Tactical Code Window Layout Engine
//!
//! Turns a loosely structured list of tactical events (as produced by an
//! external text generator) into a code window layout: events grouped by
//! category, each with a display colour and an anchor on a soccer pitch or
//! basketball court.
//!
//! ## Pipeline
//! - [`validator::validate`] - raw payload text to [`Event`]s
//! - [`tagging`] - category, colour and zone from an event name
//! - [`layout::build`] - grouped, annotated [`Layout`]
//!
//! Every stage is a pure function; the same events and surface always give
//! the same layout.

pub mod api;
pub mod config;
pub mod error;
pub mod generation;
pub mod layout;
pub mod models;
pub mod rules;
pub mod surface;
pub mod tagging;
pub mod validator;

pub use api::{describe_zones_json, layout_from_payload_json};
pub use config::{CodeWindowConfig, GenerationConfig};
pub use error::{CodeWindowError, GenerationError, Result, ValidationError};
pub use generation::{CodeWindowService, GenerationRequest, ScenarioPrompt, StaticGenerator, TextGenerator};
pub use layout::{build, CategoryGroup, Layout, PlacedEvent};
pub use models::{Category, DisplayColor, Event};
pub use surface::{PitchPoint, Surface, Zone, ZoneId};
pub use tagging::{classify, resolve_color, resolve_zone};
pub use validator::validate;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SCHEMA_VERSION: u8 = 1;
