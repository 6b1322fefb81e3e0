//! Prompter feature: scroll engine, viewport mapping and the Running screen.

mod render;
mod state;
mod update;
mod view;

pub use render::render;
pub use state::ScrollState;
pub use update::{handle_key, handle_tick};
pub use view::{DepthBand, Row, map_viewport};
