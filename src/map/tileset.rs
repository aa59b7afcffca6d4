use roxmltree::{Document, Node};
use serde::Serialize;
use crate::map::attr::parse_int;
use crate::map::tmx::parse_document;
use crate::map::{Color, TerrainList, TmxParseError};


/// A <tileset> element, either embedded in a map or the root of a .tsx document.
/// When `source` is set, the tileset lives in that external file and its other fields are left empty.
#[derive(Clone, Default, Debug, Serialize)]
pub struct Tileset {
    /// Global id of this tileset's first tile.
    pub first_gid: u32,
    pub source: Option<String>,
    pub name: String,
    pub tile_width: u32,
    pub tile_height: u32,
    pub spacing: u32,
    pub margin: u32,
    pub tile_count: u32,
    pub columns: u32,
    pub image: Image,
    pub terrain_types: TerrainTypes,
    /// Only tiles carrying extra data, not every tile of the set.
    pub tiles: Vec<Tile>,
}

impl Tileset {

    pub fn parse_str(source: &str) -> Result<Self, TmxParseError> {
        let doc = parse_document(source)?;
        Self::parse_doc(&doc)
    }

    pub fn parse_doc(doc: &Document) -> Result<Self, TmxParseError> {
        let tileset_node = doc.root_element();
        let tag_name = tileset_node.tag_name().name();
        if tag_name != "tileset" {
            return Err(TmxParseError::UnexpectedTagError { tag_name: String::from(tag_name) })
        }
        let mut tileset = Tileset::default();
        tileset.parse(tileset_node)?;
        Ok(tileset)
    }

    pub fn parse(&mut self, tileset_node: Node) -> Result<(), TmxParseError> {

        // Parses attributes
        for attribute in tileset_node.attributes() {
            let name = attribute.name();
            let value = attribute.value();
            match name {
                "firstgid" => self.first_gid = parse_int(value)?,
                "source" => self.source = Some(String::from(value)),
                "name" => self.name = String::from(value),
                "tilewidth" => self.tile_width = parse_int(value)?,
                "tileheight" => self.tile_height = parse_int(value)?,
                "spacing" => self.spacing = parse_int(value)?,
                "margin" => self.margin = parse_int(value)?,
                "tilecount" => self.tile_count = parse_int(value)?,
                "columns" => self.columns = parse_int(value)?,
                _ => {}
            }
        }

        // Parses children
        for child in tileset_node.children().filter(Node::is_element) {
            let tag = child.tag_name().name();
            match tag {
                "image" => self.image = Image::parse(child)?,
                "terraintypes" => self.terrain_types = TerrainTypes::parse(child)?,
                "tile" => self.tiles.push(Tile::parse(child)?),
                _ => log::trace!("Skipping <{tag}> in <tileset>"),
            }
        }
        Ok(())
    }

    /// Tile override with the given local id, if the tileset has one.
    pub fn tile(&self, id: u32) -> Option<&Tile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }
}

#[derive(Clone, Eq, PartialEq, Default, Debug, Serialize)]
pub struct Image {
    pub format: String,
    pub source: String,
    /// Color treated as transparent.
    pub trans: Option<Color>,
    pub width: u32,
    pub height: u32,
}

impl Image {
    pub fn parse(image_node: Node) -> Result<Image, TmxParseError> {
        let mut image = Image::default();
        for attribute in image_node.attributes() {
            let name = attribute.name();
            let value = attribute.value();
            match name {
                "format" => image.format = String::from(value),
                "source" => image.source = String::from(value),
                "trans" => {
                    // Written without the leading '#' that other color attributes carry
                    let hex = value.strip_prefix('#').unwrap_or(value);
                    image.trans = Some(Color::parse(&format!("#{hex}"))?);
                },
                "width" => image.width = parse_int(value)?,
                "height" => image.height = parse_int(value)?,
                _ => {}
            }
        }
        Ok(image)
    }
}

/// Terrains of a tileset. A terrain's position in `terrains` is the index that [`TerrainList`]s refer to.
#[derive(Clone, Eq, PartialEq, Default, Debug, Serialize)]
pub struct TerrainTypes {
    pub terrains: Vec<Terrain>,
}

impl TerrainTypes {
    pub fn parse(terrain_types_node: Node) -> Result<TerrainTypes, TmxParseError> {
        let mut terrain_types = TerrainTypes::default();
        for child in terrain_types_node.children().filter(Node::is_element) {
            if child.tag_name().name() == "terrain" {
                terrain_types.terrains.push(Terrain::parse(child)?);
            }
        }
        Ok(terrain_types)
    }

    pub fn get(&self, index: u32) -> Option<&Terrain> {
        self.terrains.get(index as usize)
    }
}

#[derive(Clone, Eq, PartialEq, Default, Debug, Serialize)]
pub struct Terrain {
    pub name: String,
    /// Local id of the tile representing this terrain, -1 when there is none.
    pub tile: i32,
}

impl Terrain {
    pub fn parse(terrain_node: Node) -> Result<Terrain, TmxParseError> {
        let mut terrain = Terrain::default();
        for attribute in terrain_node.attributes() {
            match attribute.name() {
                "name" => terrain.name = String::from(attribute.value()),
                "tile" => terrain.tile = parse_int(attribute.value())?,
                _ => {}
            }
        }
        Ok(terrain)
    }
}

#[derive(Clone, Eq, PartialEq, Default, Debug, Serialize)]
pub struct Tile {
    /// ID of tile local to its tileset
    pub id: u32,
    pub terrain: TerrainList,
}

impl Tile {
    pub fn parse(tile_node: Node) -> Result<Tile, TmxParseError> {
        let mut tile = Tile::default();
        for attribute in tile_node.attributes() {
            let name = attribute.name();
            let value = attribute.value();
            match name {
                "id" => tile.id = parse_int(value)?,
                "terrain" => tile.terrain = TerrainList::parse(value)?,
                _ => {}
            }
        }
        Ok(tile)
    }
}
