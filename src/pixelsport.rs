pub mod api;
pub mod structs;

pub use api::{fetch_json, get_events, get_sliders};
pub use structs::{RawEvent, RawSlider};
