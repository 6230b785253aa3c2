#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod image;
pub mod morph;
pub mod render;
pub mod transform;

// --- High-level re-exports -------------------------------------------------

pub use crate::error::{Error, Result};
pub use crate::image::{Color, PixelGrid};
pub use crate::morph::{morph, Morph, MorphDirection, MorphOptions, MorphReport};
pub use crate::render::Renderer;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use pixmorph::prelude::*;
///
/// let grid = decode("P3\n2 1\n255\n255 0 0  0 0 255\n").unwrap();
/// let mirrored = flip_horizontally(&grid);
/// assert_eq!(mirrored.get(0, 0), Color::new(0, 0, 255));
/// ```
pub mod prelude {
    pub use crate::image::ppm::{decode, encode};
    pub use crate::image::{Color, ImageView, PixelGrid};
    pub use crate::morph::{Morph, MorphOptions};
    pub use crate::render::Renderer;
    pub use crate::transform::{
        blend_color, blend_images, flip_horizontally, flip_vertically, grayscale, luminance,
        scale,
    };
}
