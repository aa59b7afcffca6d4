//! Structs defined here are a 1:1 mapping of the TMX / TSX elements this crate understands.
//! Elements and attributes outside of that set are skipped.
mod attr;
mod layer;
mod map;
mod tileset;
mod tmx;

pub use attr::*;
pub use layer::*;
pub use map::*;
pub use tileset::*;
pub use tmx::*;
