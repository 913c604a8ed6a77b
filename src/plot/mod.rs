mod error;
mod palette;
mod strip;

#[cfg(test)]
mod tests;

pub use error::PlotError;
pub use palette::{color_for, BRIGHT};
pub use strip::render_strip;

/// Figure width: 20 in at 360 DPI
pub const FIG_WIDTH_PX: u32 = 7200;

/// Figure height: 2 in at 360 DPI
pub const FIG_HEIGHT_PX: u32 = 720;
