pub mod json_api;

pub use json_api::{
    describe_zones_json, layout_from_payload_json, LayoutRequest, LayoutResponse,
};
