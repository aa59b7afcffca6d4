use std::fs::File;
use std::io::BufReader;
use anyhow::{bail, Context};

/// Prints each .tmx / .tsx file given on the command line as YAML.
fn main() -> anyhow::Result<()> {
    env_logger::init();
    let paths: Vec<String> = std::env::args().skip(1).collect();
    if paths.is_empty() {
        bail!("Usage: tmxdump <file.tmx|file.tsx>...");
    }
    for path in &paths {
        let file = File::open(path).with_context(|| format!("Failed to open {path}"))?;
        let reader = BufReader::new(file);
        let yaml = if path.ends_with(".tsx") {
            let tileset = tmx_reader::read_tileset(reader).with_context(|| format!("Failed to read tileset {path}"))?;
            serde_yaml::to_string(&tileset)?
        }
        else {
            let map = tmx_reader::read(reader).with_context(|| format!("Failed to read map {path}"))?;
            log::info!("{path}: {} tileset(s), {} layer(s)", map.tilesets.len(), map.layers.len());
            serde_yaml::to_string(&map)?
        };
        println!("# {path}");
        print!("{yaml}");
    }
    Ok(())
}
