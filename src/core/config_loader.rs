// Copyright @yucwang 2026

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::core::config::BlockConfig;
use crate::core::error::BlockError;
use crate::math::constants::Float;

#[derive(Debug)]
pub enum ConfigLoadError {
    Io(std::io::Error),
    Parse(String),
    MissingField(&'static str),
}

impl From<std::io::Error> for ConfigLoadError {
    fn from(err: std::io::Error) -> Self {
        ConfigLoadError::Io(err)
    }
}

impl From<quick_xml::Error> for ConfigLoadError {
    fn from(err: quick_xml::Error) -> Self {
        ConfigLoadError::Parse(err.to_string())
    }
}

impl fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigLoadError::Io(err) => write!(f, "io error: {}", err),
            ConfigLoadError::Parse(msg) => write!(f, "parse error: {}", msg),
            ConfigLoadError::MissingField(field) => write!(f, "missing field: {}", field),
        }
    }
}

impl std::error::Error for ConfigLoadError {}

impl From<ConfigLoadError> for BlockError {
    fn from(err: ConfigLoadError) -> Self {
        BlockError::Config(format!("config file: {}", err))
    }
}

/// Reads a `<block>` XML file on top of `BlockConfig::default()`.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BlockConfig, ConfigLoadError> {
    load_config_over(path, BlockConfig::default())
}

/// Reads a `<block>` XML file, overriding the fields it names in `base`.
pub fn load_config_over<P: AsRef<Path>>(path: P, base: BlockConfig) -> Result<BlockConfig, ConfigLoadError> {
    let path = path.as_ref();
    log::info!("Loading block config from: {}.", path.display());
    let xml = fs::read_to_string(path)?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    parse_config(&xml, base_dir, base)
}

pub fn parse_config(xml: &str, base_dir: &Path, base: BlockConfig) -> Result<BlockConfig, ConfigLoadError> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);
    let mut buf = Vec::new();

    let mut config = base;
    let mut seen_root = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Eof) => break,
            Ok(Event::Start(e)) | Ok(Event::Empty(e)) => {
                let mut attrs: Vec<(Vec<u8>, String)> = Vec::new();
                for attr in e.attributes().flatten() {
                    let value = attr
                        .unescape_value()
                        .map_err(|err| ConfigLoadError::Parse(err.to_string()))?
                        .to_string();
                    attrs.push((attr.key.as_ref().to_vec(), value));
                }

                match e.name().as_ref() {
                    b"block" => seen_root = true,
                    b"texture" => {
                        let filename = find(&attrs, b"filename").ok_or(ConfigLoadError::MissingField("texture.filename"))?;
                        config.texture_path = resolve_path(filename, base_dir);
                    }
                    b"output" => {
                        let filename = find(&attrs, b"filename").ok_or(ConfigLoadError::MissingField("output.filename"))?;
                        config.output_path = resolve_path(filename, base_dir);
                    }
                    b"figure" => {
                        if let Some(w) = find(&attrs, b"width") {
                            config.figure_size.0 = parse_float(w)?;
                        }
                        if let Some(h) = find(&attrs, b"height") {
                            config.figure_size.1 = parse_float(h)?;
                        }
                        if let Some(dpi) = find(&attrs, b"dpi") {
                            config.dpi = parse_float(dpi)?;
                        }
                    }
                    b"faces" => {
                        if let Some(res) = find(&attrs, b"resolution") {
                            config.face_resolution = parse_usize(res)?;
                        }
                        if let Some(edge) = find(&attrs, b"edge") {
                            config.edge_length = parse_float(edge)?;
                        }
                    }
                    b"camera" => {
                        if let Some(kind) = find(&attrs, b"type") {
                            config.orthographic = match kind {
                                "orthographic" | "ortho" => true,
                                "perspective" | "persp" => false,
                                other => return Err(ConfigLoadError::Parse(format!("unsupported camera: {}", other))),
                            };
                        }
                        if let Some(elev) = find(&attrs, b"elevation") {
                            config.elevation_deg = parse_float(elev)?;
                        }
                        if let Some(azim) = find(&attrs, b"azimuth") {
                            config.azimuth_deg = parse_float(azim)?;
                        }
                        if let Some(dist) = find(&attrs, b"distance") {
                            config.camera_distance = parse_float(dist)?;
                        }
                    }
                    other => {
                        log::debug!("Ignoring config element <{}>.", String::from_utf8_lossy(other));
                    }
                }
            }
            Err(e) => {
                return Err(ConfigLoadError::Parse(e.to_string()));
            }
            _ => {}
        }

        buf.clear();
    }

    if !seen_root {
        return Err(ConfigLoadError::MissingField("block"));
    }
    Ok(config)
}

fn find<'a>(attrs: &'a [(Vec<u8>, String)], key: &[u8]) -> Option<&'a str> {
    attrs.iter().find(|(k, _)| k.as_slice() == key).map(|(_, v)| v.as_str())
}

fn resolve_path(filename: &str, base_dir: &Path) -> PathBuf {
    if Path::new(filename).is_absolute() {
        PathBuf::from(filename)
    } else {
        base_dir.join(filename)
    }
}

fn parse_float(value: &str) -> Result<Float, ConfigLoadError> {
    value.trim().parse::<Float>().map_err(|_| ConfigLoadError::Parse(format!("invalid float: {}", value)))
}

fn parse_usize(value: &str) -> Result<usize, ConfigLoadError> {
    value.trim().parse::<usize>().map_err(|_| ConfigLoadError::Parse(format!("invalid integer: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
        <block>
          <texture filename="ice.png"/>
          <output filename="/tmp/out.exr"/>
          <figure width="4" height="3" dpi="150"/>
          <faces resolution="64" edge="2.0"/>
          <camera type="perspective" elevation="20" azimuth="-40" distance="5"/>
        </block>
    "#;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(FULL, Path::new("assets"), BlockConfig::default()).unwrap();
        assert_eq!(config.texture_path, Path::new("assets").join("ice.png"));
        assert_eq!(config.output_path, PathBuf::from("/tmp/out.exr"));
        assert_eq!(config.figure_size, (4.0, 3.0));
        assert_eq!(config.dpi, 150.0);
        assert_eq!(config.face_resolution, 64);
        assert_eq!(config.edge_length, 2.0);
        assert!(!config.orthographic);
        assert_eq!(config.elevation_deg, 20.0);
        assert_eq!(config.azimuth_deg, -40.0);
        assert_eq!(config.camera_distance, 5.0);
        assert_eq!(config.pixel_size(), (600, 450));
    }

    #[test]
    fn test_missing_elements_keep_defaults() {
        let xml = r#"<block><faces resolution="10"/><unknown foo="bar"/></block>"#;
        let config = parse_config(xml, Path::new("."), BlockConfig::default()).unwrap();
        let defaults = BlockConfig::default();
        assert_eq!(config.face_resolution, 10);
        assert_eq!(config.texture_path, defaults.texture_path);
        assert_eq!(config.figure_size, defaults.figure_size);
        assert!(config.orthographic);
    }

    #[test]
    fn test_bad_values_are_errors() {
        let bad_number = r#"<block><figure dpi="lots"/></block>"#;
        assert!(matches!(parse_config(bad_number, Path::new("."), BlockConfig::default()),
                         Err(ConfigLoadError::Parse(_))));

        let bad_camera = r#"<block><camera type="fisheye"/></block>"#;
        assert!(parse_config(bad_camera, Path::new("."), BlockConfig::default()).is_err());

        let no_root = r#"<faces resolution="10"/>"#;
        assert!(matches!(parse_config(no_root, Path::new("."), BlockConfig::default()),
                         Err(ConfigLoadError::MissingField("block"))));

        let no_filename = r#"<block><texture/></block>"#;
        assert!(matches!(parse_config(no_filename, Path::new("."), BlockConfig::default()),
                         Err(ConfigLoadError::MissingField("texture.filename"))));
    }

    #[test]
    fn test_load_resolves_relative_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("block.xml");
        std::fs::write(&path, r#"<block><texture filename="tex/ice.png"/></block>"#).unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.texture_path, dir.path().join("tex/ice.png"));

        let err: BlockError = load_config(dir.path().join("missing.xml")).unwrap_err().into();
        assert!(matches!(err, BlockError::Config(_)));
    }
}
