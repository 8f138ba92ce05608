use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use fives::GameConfig;

/// Reads game parameters from a JSON file. Missing keys take their default values.
pub fn load_config(path: &Path) -> anyhow::Result<GameConfig> {
    let file = File::open(path)
        .with_context(|| format!("Could not open config file '{}'", path.display()))?;
    let config: GameConfig = serde_json::from_reader(BufReader::new(file))?;
    config.validate()?;
    Ok(config)
}

/// Combines the optional config file with command line overrides.
pub fn resolve_config(
    path: Option<&Path>,
    size: Option<usize>,
    line_length: Option<usize>,
) -> anyhow::Result<GameConfig> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => GameConfig::default(),
    };
    if let Some(size) = size {
        config.size = size;
    }
    if let Some(line_length) = line_length {
        config.line_length = line_length;
    }
    config.validate()?;
    Ok(config)
}
