mod events;
mod mouse_click;
mod render;
mod state;

pub use state::{App, TICK};
