pub use error::DisplayError;
pub use texture::{frame_to_rgb24, frame_to_text};

#[cfg(feature = "sdl")]
pub use display::Display;

#[cfg(feature = "sdl")]
mod display;
mod error;
mod texture;
