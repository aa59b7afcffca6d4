use std::io::Read;
use std::num::ParseIntError;
use derive_more::*;
use roxmltree::{Document, ParsingOptions};
use crate::{TiledMap, Tileset};

/// Reads a .tmx document from a stream.
pub fn read(reader: impl Read) -> Result<TiledMap, TmxParseError> {
    let source = read_source(reader)?;
    TiledMap::parse_str(&source)
}

/// Reads a standalone .tsx tileset document from a stream.
pub fn read_tileset(reader: impl Read) -> Result<Tileset, TmxParseError> {
    let source = read_source(reader)?;
    Tileset::parse_str(&source)
}

fn read_source(mut reader: impl Read) -> Result<String, TmxParseError> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    Ok(source)
}

/// Parses an XML document, accepting the DOCTYPE header older Tiled versions write.
/// The DTD itself is never fetched.
pub(crate) fn parse_document(source: &str) -> Result<Document, TmxParseError> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    Ok(Document::parse_with_options(source, options)?)
}

#[derive(Error, Display, From, Debug)]
pub enum TmxParseError {
    IoError(std::io::Error),
    XmlError(roxmltree::Error),
    #[display(fmt="{_0}")]
    ParseIntError(ParseIntError),
    #[display(fmt="Invalid hex color: {_0}")]
    HexError(hex::FromHexError),
    #[display(fmt="Unexpected tag '{tag_name}'")]
    #[from(ignore)]
    UnexpectedTagError { tag_name: String },
    #[display(fmt="Invalid terrain list, must contain four comma-separated parts: '{value}'")]
    #[from(ignore)]
    InvalidTerrainList { value: String },
    #[display(fmt="Unexpected value {value}")]
    #[from(ignore)]
    InvalidAttributeValue { value: String },
}

#[cfg(test)]
mod test {
    use crate::map::*;

    #[test]
    fn read_from_stream() {
        let source = br#"<?xml version="1.0" encoding="UTF-8"?>
<map version="1.0" width="2" height="2" tilewidth="16" tileheight="16"/>"#;
        let map = read(&source[..]).unwrap();
        assert_eq!("1.0", map.version);
        assert_eq!(2, map.width);
        assert_eq!(16, map.tile_height);
    }

    #[test]
    fn read_invalid_utf8() {
        let source: &[u8] = &[b'<', 0xFF, 0xFE, b'>'];
        assert!(matches!(read(source), Err(TmxParseError::IoError(_))));
    }

    #[test]
    fn read_unclosed_tag() {
        let source = "<map><tileset firstgid=\"1\"></map>";
        assert!(matches!(read(source.as_bytes()), Err(TmxParseError::XmlError(_))));
    }

    #[test]
    fn read_with_doctype() {
        let source = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE map SYSTEM "http://mapeditor.org/dtd/1.0/map.dtd">
<map version="1.0" orientation="orthogonal" width="1" height="1" tilewidth="8" tileheight="8">
 <layer name="a" width="1" height="1"><data encoding="csv">1</data></layer>
</map>"#;
        let map = read(source.as_bytes()).unwrap();
        assert_eq!(1, map.width);
        assert_eq!("1", map.layers[0].data.text);
    }

    #[test]
    fn read_tileset_with_doctype() {
        let source = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE tileset SYSTEM "http://mapeditor.org/dtd/1.0/map.dtd">
<tileset name="ground" tilewidth="8" tileheight="8"/>"#;
        let tileset = read_tileset(source.as_bytes()).unwrap();
        assert_eq!("ground", tileset.name);
    }

    #[test]
    fn read_tileset_document() {
        let source = r#"<tileset name="ground" tilewidth="8" tileheight="8" tilecount="4" columns="2">
  <image source="ground.png" width="16" height="16"/>
</tileset>"#;
        let tileset = read_tileset(source.as_bytes()).unwrap();
        assert_eq!("ground", tileset.name);
        assert_eq!(0, tileset.first_gid);
        assert_eq!("ground.png", tileset.image.source);
    }

    #[test]
    fn error_messages() {
        let err = TerrainList::parse("0,1").unwrap_err();
        assert_eq!("Invalid terrain list, must contain four comma-separated parts: '0,1'", err.to_string());
        let err = TmxParseError::UnexpectedTagError { tag_name: String::from("tileset") };
        assert_eq!("Unexpected tag 'tileset'", err.to_string());
    }
}
