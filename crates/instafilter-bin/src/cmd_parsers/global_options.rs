/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::num::NonZeroUsize;
use std::thread::available_parallelism;

use clap::ArgMatches;
use instafilter_core::colorspace::ColorSpace;
use instafilter_image::errors::ImageErrors;
use log::{info, Level};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub width:      usize,
    pub height:     usize,
    pub colorspace: ColorSpace,
    pub threads:    usize
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            width:      0,
            height:     0,
            colorspace: ColorSpace::RGB,
            threads:    1
        }
    }
}

pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, ImageErrors> {
    let mut cmd_options = CmdOptions::new();

    if let Some(width) = options.get_one::<usize>("width") {
        cmd_options.width = *width;
    }
    if let Some(height) = options.get_one::<usize>("height") {
        cmd_options.height = *height;
    }

    let channels = options.get_one::<usize>("channels").copied().unwrap_or(3);
    cmd_options.colorspace =
        ColorSpace::from_components(channels).ok_or(ImageErrors::UnsupportedChannels(channels))?;

    cmd_options.threads = match options.get_one::<usize>("threads") {
        Some(threads) => {
            info!("Using {} threads as requested", threads);
            (*threads).max(1)
        }
        _ => available_parallelism().map_or(1, NonZeroUsize::get)
    };

    Ok(cmd_options)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if options.get_flag("debug") {
        Level::Debug
    } else if options.get_flag("trace") {
        Level::Trace
    } else if options.get_flag("warn") {
        Level::Warn
    } else if options.get_flag("info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use instafilter_core::colorspace::ColorSpace;
    use instafilter_image::errors::ImageErrors;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    fn matches(extra: &[&str]) -> clap::ArgMatches {
        let mut args = vec![
            "instafilter", "-i", "in.raw", "-o", "out.raw", "-p", "ghost", "--width", "4",
            "--height", "2"
        ];
        args.extend_from_slice(extra);
        create_cmd_args().get_matches_from(args)
    }

    #[test]
    fn channels_select_colorspace() {
        let options = parse_options(&matches(&["--channels", "4", "--threads", "3"])).unwrap();

        assert_eq!(options.colorspace, ColorSpace::RGBA);
        assert_eq!((options.width, options.height), (4, 2));
        assert_eq!(options.threads, 3);
    }

    #[test]
    fn grayscale_is_rejected() {
        let err = parse_options(&matches(&["--channels", "1"])).unwrap_err();
        assert!(matches!(err, ImageErrors::UnsupportedChannels(1)));
    }
}
