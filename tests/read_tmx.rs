use tmx_reader::*;

const MAP: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<map version="1.0" orientation="orthogonal" renderorder="right-down" width="3" height="2" tilewidth="16" tileheight="16" nextobjectid="1">
 <tileset firstgid="1" name="tiles" tilewidth="16" tileheight="16" tilecount="4" columns="2">
  <image source="tiles.png" width="32" height="32"/>
  <terraintypes>
   <terrain name="sand" tile="0"/>
   <terrain name="grass" tile="1"/>
   <terrain name="rock" tile="2"/>
   <terrain name="water" tile="3"/>
  </terraintypes>
  <tile id="2" terrain="0,1,2,3"/>
 </tileset>
 <layer name="Tile Layer 1" width="3" height="2">
  <data encoding="csv">
1,2,3,
4,1,2
</data>
 </layer>
</map>
"#;

#[test]
fn full_document() {
    let map = read(MAP.as_bytes()).unwrap();
    assert_eq!(Orientation::Orthogonal, map.orientation);
    assert_eq!(RenderOrder::RightDown, map.render_order);
    assert_eq!((3, 2), (map.width, map.height));
    assert_eq!(1, map.tilesets.len());
    assert_eq!(1, map.layers.len());

    let tileset = &map.tilesets[0];
    assert_eq!("tiles", tileset.name);
    assert_eq!("tiles.png", tileset.image.source);
    assert_eq!(4, tileset.terrain_types.terrains.len());
    assert_eq!("water", tileset.terrain_types.terrains[3].name);
    assert_eq!(2, tileset.tiles[0].id);
    assert!(tileset.tiles[0].terrain.valid);
    assert_eq!([0, 1, 2, 3], tileset.tiles[0].terrain.corners);

    let data = &map.layers[0].data;
    assert_eq!("csv", data.encoding);
    assert_eq!(None, data.compression);
    assert_eq!("\n1,2,3,\n4,1,2\n", data.text);
}

#[test]
fn gid_lookup() {
    let map = read(MAP.as_bytes()).unwrap();
    let (tileset, local_id) = map.tileset_for_gid(3).unwrap();
    assert_eq!("tiles", tileset.name);
    let tile = tileset.tile(local_id).unwrap();
    let terrain = tileset.terrain_types.get(tile.terrain.corner(Corner::TopRight).unwrap()).unwrap();
    assert_eq!("grass", terrain.name);
}

#[test]
fn malformed_documents() {
    let unclosed = r#"<map width="1"><layer name="a"><data>1</layer></map>"#;
    assert!(matches!(read(unclosed.as_bytes()), Err(TmxParseError::XmlError(_))));

    let truncated = &MAP[..MAP.len() / 2];
    assert!(matches!(read(truncated.as_bytes()), Err(TmxParseError::XmlError(_))));

    assert!(read("".as_bytes()).is_err());
    assert!(read("not xml at all".as_bytes()).is_err());
}

#[test]
fn decoder_error_aborts() {
    let bad_color = MAP.replace(r#"nextobjectid="1""#, r##"nextobjectid="1" backgroundcolor="#12g456""##);
    assert!(matches!(read(bad_color.as_bytes()), Err(TmxParseError::HexError(_))));

    let bad_corner = MAP.replace("0,1,2,3", "0,1,x,3");
    assert!(matches!(read(bad_corner.as_bytes()), Err(TmxParseError::ParseIntError(_))));
}

#[test]
fn serializes_to_yaml() {
    let map = read(MAP.as_bytes()).unwrap();
    let yaml = serde_yaml::to_string(&map).unwrap();
    assert!(yaml.contains("orientation: orthogonal"));
    assert!(yaml.contains("render_order: right-down"));
    assert!(yaml.contains("name: Tile Layer 1"));
}
