use std::num::ParseIntError;
use std::str::FromStr;
use serde::Serialize;
use crate::map::TmxParseError;

/// Declares a string-backed enum whose unrecognized values are kept in an `Other` variant.
/// An empty string resolves to the default variant.
macro_rules! open_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident (default $default:ident) {
            $($variant:ident => $text:literal,)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Eq, PartialEq, Debug, Hash)]
        pub enum $name {
            $($variant,)*
            Other(String),
        }

        impl $name {
            pub fn parse(value: &str) -> Self {
                match value {
                    "" => Self::$default,
                    $($text => Self::$variant,)*
                    other => Self::Other(String::from(other)),
                }
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)*
                    Self::Other(other) => other.as_str(),
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::$default
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

open_enum! {
    /// Projection of the map grid.
    pub enum Orientation (default Orthogonal) {
        Orthogonal => "orthogonal",
        Isometric => "isometric",
        Staggered => "staggered",
        Hexagonal => "hexagonal",
    }
}

open_enum! {
    /// Order in which tiles of a layer are drawn.
    pub enum RenderOrder (default RightDown) {
        RightDown => "right-down",
        RightUp => "right-up",
        LeftDown => "left-down",
        LeftUp => "left-up",
    }
}

open_enum! {
    /// Staggered axis of staggered and hexagonal maps.
    pub enum StaggerAxis (default Y) {
        X => "x",
        Y => "y",
    }
}

open_enum! {
    /// Whether odd or even rows/columns are shifted on staggered and hexagonal maps.
    pub enum StaggerIndex (default Odd) {
        Odd => "odd",
        Even => "even",
    }
}

/// RGBA color as stored in TMX attributes.
/// The default value is fully transparent black.
#[derive(Copy, Clone, Eq, PartialEq, Default, Debug, Hash, Serialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Decodes "#RRGGBB" or "#AARRGGBB".
    /// Bytes are assigned from the end backwards (blue, green, red, alpha), so shorter values
    /// only fill the low channels. An empty value yields the default color.
    pub fn parse(value: &str) -> Result<Self, TmxParseError> {
        let mut color = Self::default();
        let mut chars = value.chars();
        if chars.next().is_none() {
            return Ok(color)
        }
        let bytes = hex::decode(chars.as_str())?;
        let channels = [&mut color.b, &mut color.g, &mut color.r, &mut color.a];
        for (channel, byte) in channels.into_iter().zip(bytes.iter().rev()) {
            *channel = *byte;
        }
        Ok(color)
    }
}

/// Terrain index of a corner that has no terrain.
pub const NO_TERRAIN: i32 = -1;

/// Corner of a tile, in the order terrain lists store them.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

/// Terrain indices of the four corners of a tile.
/// Each index points into the tileset's [`TerrainTypes`](crate::TerrainTypes), or is [`NO_TERRAIN`].
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Serialize)]
pub struct TerrainList {
    /// False when the tile had no terrain attribute.
    pub valid: bool,
    pub corners: [i32; 4],
}

impl Default for TerrainList {
    fn default() -> Self {
        Self {
            valid: false,
            corners: [NO_TERRAIN; 4],
        }
    }
}

impl TerrainList {

    /// Decodes a list such as "0,,1,2". Empty parts have no terrain.
    pub fn parse(value: &str) -> Result<Self, TmxParseError> {
        let parts: Vec<&str> = value.split(',').collect();
        if parts.len() != 4 {
            return Err(TmxParseError::InvalidTerrainList { value: String::from(value) })
        }
        let mut corners = [NO_TERRAIN; 4];
        for (corner, part) in corners.iter_mut().zip(parts) {
            if part.is_empty() {
                continue
            }
            let index: i32 = part.parse()?;
            if index < 0 {
                return Err(TmxParseError::InvalidAttributeValue { value: String::from(part) })
            }
            *corner = index;
        }
        Ok(Self { valid: true, corners })
    }

    /// Terrain index at a corner, or None if that corner has no terrain.
    pub fn corner(&self, corner: Corner) -> Option<u32> {
        u32::try_from(self.corners[corner as usize]).ok()
    }
}

/// Parses a numeric attribute. Empty values decode to zero.
pub(crate) fn parse_int<T>(value: &str) -> Result<T, ParseIntError>
where
    T: FromStr<Err = ParseIntError> + Default,
{
    if value.is_empty() {
        return Ok(T::default())
    }
    value.parse()
}
