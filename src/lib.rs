//! Decodes Tiled TMX maps and TSX tilesets into plain owned structs.
//! Layer data is kept as raw text and external tilesets are not resolved.
mod map;

pub use map::*;
