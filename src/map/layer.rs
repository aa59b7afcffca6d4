use roxmltree::Node;
use serde::Serialize;
use crate::map::attr::parse_int;
use crate::map::TmxParseError;

/// A <layer> element: a named grid of tiles.
#[derive(Clone, Eq, PartialEq, Default, Debug, Serialize)]
pub struct Layer {
    pub name: String,
    pub width: u32,
    pub height: u32,
    pub data: LayerData,
}

impl Layer {
    pub fn parse(layer_node: Node) -> Result<Layer, TmxParseError> {
        let mut layer = Layer::default();
        for attribute in layer_node.attributes() {
            let name = attribute.name();
            let value = attribute.value();
            match name {
                "name" => layer.name = String::from(value),
                "width" => layer.width = parse_int(value)?,
                "height" => layer.height = parse_int(value)?,
                _ => {}
            }
        }
        for child in layer_node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                "data" => layer.data = LayerData::parse(child),
                tag => log::trace!("Skipping <{tag}> in <layer>"),
            }
        }
        Ok(layer)
    }
}

/// Undecoded tile data of a layer.
/// `text` is the character data of the <data> element exactly as written, whitespace included.
#[derive(Clone, Eq, PartialEq, Default, Debug, Serialize)]
pub struct LayerData {
    /// "csv", "base64", or empty for XML <tile> elements.
    pub encoding: String,
    pub compression: Option<String>,
    pub text: String,
}

impl LayerData {
    pub fn parse(data_node: Node) -> LayerData {
        let mut data = LayerData::default();
        for attribute in data_node.attributes() {
            match attribute.name() {
                "encoding" => data.encoding = String::from(attribute.value()),
                "compression" => data.compression = Some(String::from(attribute.value())),
                _ => {}
            }
        }
        data.text = data_node
            .children()
            .filter(Node::is_text)
            .filter_map(|child| child.text())
            .collect();
        data
    }
}
