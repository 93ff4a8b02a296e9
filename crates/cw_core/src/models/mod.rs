pub mod category;
pub mod colour;
pub mod event;

pub use category::Category;
pub use colour::DisplayColor;
pub use event::{Event, RawPayload, RawRow, UNNAMED_EVENT};
