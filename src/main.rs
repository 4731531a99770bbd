// Copyright 2020 TwoCookingMice

use blocksmith::core::config_loader::load_config_over;
use blocksmith::{generate_block, BlockConfig, BlockError, Result};

use std::env;
use std::path::PathBuf;

const USAGE: &str = "[texture] [output] [--config block.xml] [--resolution N] [--figsize WxH] [--dpi D] \
                     [--elev DEG] [--azim DEG] [--ortho | --perspective] [--edge L] [--distance D]";

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().collect();
    if args.iter().skip(1).any(|a| a == "-h" || a == "--help") {
        println!("Usage: {} {}", args[0], USAGE);
        return;
    }

    let result = parse_args(&args[1..]).and_then(|config| generate_block(&config));
    match result {
        Ok(summary) => {
            println!("Block saved to: {} ({}x{}).", summary.output_path.display(), summary.width, summary.height);
        }
        Err(e) => {
            log::error!("{}", e);
            if shows_usage(&e) {
                eprintln!("Usage: {} {}", args[0], USAGE);
            }
            std::process::exit(1);
        }
    }
}

// Only argument and configuration mistakes are the caller's to fix.
fn shows_usage(err: &BlockError) -> bool {
    matches!(err, BlockError::Config(_))
}

// Positional arguments and flags override the config file, which overrides
// the defaults.
fn parse_args(args: &[String]) -> Result<BlockConfig> {
    let mut config = BlockConfig::default();
    if let Some(path) = flag_value(args, "--config")? {
        config = load_config_over(path, config)?;
    }

    let mut positional = 0;
    let mut i = 0;
    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "--config" => i += 1,
            "--resolution" => {
                i += 1;
                config.face_resolution = parse_value(args, i, arg)?;
            }
            "--figsize" => {
                i += 1;
                config.figure_size = parse_figsize(value_at(args, i, arg)?)?;
            }
            "--dpi" => {
                i += 1;
                config.dpi = parse_value(args, i, arg)?;
            }
            "--elev" => {
                i += 1;
                config.elevation_deg = parse_value(args, i, arg)?;
            }
            "--azim" => {
                i += 1;
                config.azimuth_deg = parse_value(args, i, arg)?;
            }
            "--edge" => {
                i += 1;
                config.edge_length = parse_value(args, i, arg)?;
            }
            "--distance" => {
                i += 1;
                config.camera_distance = parse_value(args, i, arg)?;
            }
            "--ortho" => config.orthographic = true,
            "--perspective" => config.orthographic = false,
            _ if arg.starts_with("--") => {
                return Err(BlockError::config(format!("unknown option {}", arg)));
            }
            _ => {
                match positional {
                    0 => config.texture_path = PathBuf::from(arg),
                    1 => config.output_path = PathBuf::from(arg),
                    _ => return Err(BlockError::config(format!("unexpected argument {}", arg))),
                }
                positional += 1;
            }
        }
        i += 1;
    }

    Ok(config)
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    match args.iter().position(|a| a == flag) {
        Some(i) => value_at(args, i + 1, flag).map(Some),
        None => Ok(None),
    }
}

fn value_at<'a>(args: &'a [String], i: usize, flag: &str) -> Result<&'a str> {
    args.get(i)
        .map(|s| s.as_str())
        .ok_or_else(|| BlockError::config(format!("{} needs a value", flag)))
}

fn parse_value<T: std::str::FromStr>(args: &[String], i: usize, flag: &str) -> Result<T> {
    let raw = value_at(args, i, flag)?;
    raw.parse::<T>()
        .map_err(|_| BlockError::config(format!("invalid value for {}: {}", flag, raw)))
}

fn parse_figsize(raw: &str) -> Result<(f32, f32)> {
    let mut parts = raw.split(|c| c == 'x' || c == 'X' || c == ',');
    let w = parts.next().and_then(|s| s.trim().parse::<f32>().ok());
    let h = parts.next().and_then(|s| s.trim().parse::<f32>().ok());
    match (w, h, parts.next()) {
        (Some(w), Some(h), None) => Ok((w, h)),
        _ => Err(BlockError::config(format!("invalid figure size {}, expected WxH", raw))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_arguments_gives_defaults() {
        assert_eq!(parse_args(&[]).unwrap(), BlockConfig::default());
    }

    #[test]
    fn test_positional_and_flags() {
        let config = parse_args(&args(&[
            "stone.png", "stone_block.png", "--resolution", "64", "--figsize", "4x3",
            "--dpi", "100", "--elev", "25", "--azim", "-50", "--perspective", "--edge", "2",
            "--distance", "6",
        ])).unwrap();

        assert_eq!(config.texture_path, PathBuf::from("stone.png"));
        assert_eq!(config.output_path, PathBuf::from("stone_block.png"));
        assert_eq!(config.face_resolution, 64);
        assert_eq!(config.figure_size, (4.0, 3.0));
        assert_eq!(config.dpi, 100.0);
        assert_eq!(config.elevation_deg, 25.0);
        assert_eq!(config.azimuth_deg, -50.0);
        assert!(!config.orthographic);
        assert_eq!(config.edge_length, 2.0);
        assert_eq!(config.camera_distance, 6.0);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("block.xml");
        std::fs::write(&path, r#"<block><faces resolution="32" edge="3"/></block>"#).unwrap();

        let path_str = path.to_string_lossy().to_string();
        let config = parse_args(&args(&["--resolution", "16", "--config", &path_str])).unwrap();
        assert_eq!(config.face_resolution, 16);
        assert_eq!(config.edge_length, 3.0);
    }

    #[test]
    fn test_bad_arguments_are_config_errors() {
        for bad in [
            vec!["--resolution"],
            vec!["--resolution", "many"],
            vec!["--figsize", "6"],
            vec!["--figsize", "6x6x6"],
            vec!["--bogus"],
            vec!["a.png", "b.png", "c.png"],
        ].iter() {
            assert!(matches!(parse_args(&args(bad)), Err(BlockError::Config(_))), "{:?}", bad);
        }
    }

    #[test]
    fn test_usage_only_for_config_errors() {
        assert!(shows_usage(&BlockError::config("unknown option --bogus")));
        assert!(!shows_usage(&BlockError::decode("missing.png", "no such file")));
        assert!(!shows_usage(&BlockError::write("out.png", "permission denied")));
        assert!(!shows_usage(&BlockError::DegenerateTexture { width: 0, height: 3 }));
    }
}
