pub mod color;
pub mod grid;
pub mod io;
pub mod ppm;
pub mod traits;

pub use self::color::Color;
pub use self::grid::PixelGrid;
pub use self::traits::{ImageView, Rows};
