// SPDX-FileCopyrightText: 2025 Jens Pitkänen <jens.pitkanen@helsinki.fi>
//
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::PathBuf;

use bpaf::{batteries::verbose_by_slice, construct, long, positional, OptionParser, Parser};
use tracing::level_filters::LevelFilter;

#[derive(Debug, Clone)]
pub struct Options {
    pub verbosity_level: LevelFilter,
    pub config_path: Option<PathBuf>,
    pub screenshot_path: PathBuf,
    pub image_path: Option<PathBuf>,
}

pub fn options() -> OptionParser<Options> {
    let verbosity_level = verbose_by_slice(
        3,
        [
            LevelFilter::OFF,
            LevelFilter::ERROR,
            LevelFilter::WARN,
            LevelFilter::INFO,
            LevelFilter::DEBUG,
            LevelFilter::TRACE,
        ],
    );

    let config_path = long("config")
        .help("Reads the engine configuration from a JSON file")
        .argument("FILE")
        .complete_shell(bpaf::ShellComp::File {
            mask: Some("*.json"),
        })
        .optional();

    let screenshot_path = long("screenshot")
        .help("Where the S key saves screenshots, the extension picks the format")
        .argument("FILE")
        .fallback(PathBuf::from("screenshot.png"));

    let image_path = positional("IMAGE")
        .help("The image to show, the configured logo is shown if not given")
        .complete_shell(bpaf::ShellComp::File { mask: None })
        .optional();

    construct!(Options {
        verbosity_level,
        config_path,
        screenshot_path,
        image_path,
    })
    .to_options()
    .descr("Shows an image letterboxed in a resizable window")
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use tracing::level_filters::LevelFilter;

    use super::options;

    #[test]
    fn check_bpaf_invariants() {
        options().check_invariants(true);
    }

    #[test]
    fn defaults() {
        const NO_ARGS: &[&str; 0] = &[];
        let options = options().run_inner(NO_ARGS).unwrap();
        assert_eq!(LevelFilter::INFO, options.verbosity_level);
        assert_eq!(None, options.config_path);
        assert_eq!(Path::new("screenshot.png"), options.screenshot_path);
        assert_eq!(None, options.image_path);
    }

    #[test]
    fn everything_given() {
        let options = options()
            .run_inner(&["-v", "--config", "viewer.json", "--screenshot", "a.jpg", "b.png"])
            .unwrap();
        assert_eq!(LevelFilter::DEBUG, options.verbosity_level);
        assert_eq!(Some(Path::new("viewer.json")), options.config_path.as_deref());
        assert_eq!(Path::new("a.jpg"), options.screenshot_path);
        assert_eq!(Some(Path::new("b.png")), options.image_path.as_deref());
    }
}
