use roxmltree::{Document, Node};
use serde::Serialize;
use crate::map::attr::parse_int;
use crate::map::tmx::parse_document;
use crate::map::{Color, Layer, Orientation, RenderOrder, StaggerAxis, StaggerIndex, Tileset, TmxParseError};

/// Bits of a global tile id that encode flipping and rotation rather than the id itself.
pub const GID_FLAG_BITS: u32 = 0xF000_0000;

/// A 1:1 mapping of the TMX <map> element.
/// External tilesets are referenced by their source path and left unloaded.
#[derive(Clone, Default, Debug, Serialize)]
pub struct TiledMap {
    pub version: String,
    pub orientation: Orientation,
    pub render_order: RenderOrder,
    pub width: u32,
    pub height: u32,
    pub tile_width: u32,
    pub tile_height: u32,
    pub hex_side_length: u32,
    pub stagger_axis: StaggerAxis,
    pub stagger_index: StaggerIndex,
    pub background_color: Color,
    pub next_object_id: u32,
    pub tilesets: Vec<Tileset>,
    pub layers: Vec<Layer>,
}

impl TiledMap {

    pub fn parse_str(source: &str) -> Result<Self, TmxParseError> {
        let doc = parse_document(source)?;
        Self::parse_doc(&doc)
    }

    pub fn parse_doc(map_doc: &Document) -> Result<Self, TmxParseError> {
        let map_node = map_doc.root_element();
        let tag_name = map_node.tag_name().name();
        if tag_name != "map" {
            return Err(TmxParseError::UnexpectedTagError { tag_name: String::from(tag_name) })
        }
        let mut map = Self::default();
        map.parse(map_node)?;
        log::debug!(
            "Parsed {}x{} {} map with {} tileset(s) and {} layer(s)",
            map.width, map.height, map.orientation.as_str(), map.tilesets.len(), map.layers.len(),
        );
        Ok(map)
    }

    fn parse(&mut self, map_node: Node) -> Result<(), TmxParseError> {

        // Parses map attributes
        for attribute in map_node.attributes() {
            let name = attribute.name();
            let value = attribute.value();
            match name {
                "version" => self.version = String::from(value),
                "orientation" => self.orientation = Orientation::parse(value),
                "renderorder" => self.render_order = RenderOrder::parse(value),
                "width" => self.width = parse_int(value)?,
                "height" => self.height = parse_int(value)?,
                "tilewidth" => self.tile_width = parse_int(value)?,
                "tileheight" => self.tile_height = parse_int(value)?,
                "hexsidelength" => self.hex_side_length = parse_int(value)?,
                "staggeraxis" => self.stagger_axis = StaggerAxis::parse(value),
                "staggerindex" => self.stagger_index = StaggerIndex::parse(value),
                "backgroundcolor" => self.background_color = Color::parse(value)?,
                "nextobjectid" => self.next_object_id = parse_int(value)?,
                _ => {}
            }
        }

        // Traverses children
        for node in map_node.children().filter(Node::is_element) {
            let tag_name = node.tag_name().name();
            match tag_name {
                "tileset" => {
                    let mut tileset = Tileset::default();
                    tileset.parse(node)?;
                    self.tilesets.push(tileset);
                },
                "layer" => self.layers.push(Layer::parse(node)?),
                _ => log::trace!("Skipping <{tag_name}> in <map>"),
            }
        }

        Ok(())
    }

    /// Finds the tileset a global tile id belongs to, along with the id local to that tileset.
    /// Flip flags are ignored. None for the empty tile (0) or ids below every tileset.
    pub fn tileset_for_gid(&self, gid: u32) -> Option<(&Tileset, u32)> {
        let gid = gid & !GID_FLAG_BITS;
        if gid == 0 {
            return None
        }
        self.tilesets
            .iter()
            .filter(|tileset| tileset.first_gid <= gid)
            .max_by_key(|tileset| tileset.first_gid)
            .map(|tileset| (tileset, gid - tileset.first_gid))
    }
}
