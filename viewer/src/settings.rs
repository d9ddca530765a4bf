// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::{fs, path::Path};

use anyhow::Context;
use platform_sdl2::EngineConfig;

/// Reads the engine configuration file, or returns the default configuration
/// if there's no file to read.
pub fn read(config: Option<&Path>) -> anyhow::Result<EngineConfig> {
    let Some(config) = config else {
        return Ok(EngineConfig::default());
    };
    let config = fs::read_to_string(config).context("Failed to open the config file")?;
    parse(&config)
}

fn parse(config: &str) -> anyhow::Result<EngineConfig> {
    serde_json::from_str(config).context("Failed to parse the config file")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use platform_sdl2::{EngineConfig, ScaleQuality};

    use super::{parse, read};

    #[test]
    fn no_file_means_defaults() {
        assert_eq!(EngineConfig::default(), read(None).unwrap());
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = read(Some(Path::new("/nonexistent/viewer.json"))).unwrap_err();
        assert_eq!("Failed to open the config file", err.to_string());
    }

    #[test]
    fn partial_configs_keep_other_defaults() {
        let config = parse(r#"{ "title": "Viewer", "scale_quality": "nearest" }"#).unwrap();
        assert_eq!("Viewer", config.title);
        assert_eq!(ScaleQuality::Nearest, config.scale_quality);
        assert!(config.keep_ratio);
        assert_eq!(EngineConfig::default().start_width, config.start_width);
    }

    #[test]
    fn malformed_configs_are_errors() {
        let err = parse("{ \"title\": 5 }").unwrap_err();
        assert_eq!("Failed to parse the config file", err.to_string());
    }
}
