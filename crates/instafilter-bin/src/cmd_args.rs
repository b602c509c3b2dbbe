/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::help_strings::{CHANNELS_HELP, PARAMS_HELP, PRESET_HELP, SET_HELP};

pub mod help_strings;

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("instafilter")
        .about("Apply InstaGIMP style filters to raw RGB(A) images")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Raw interleaved file to read pixels from")
            .required_unless_present_any(["list", "describe"]))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("File to write the filtered pixels to")
            .required_unless_present_any(["list", "describe"]))
        .arg(Arg::new("preset")
            .short('p')
            .long("preset")
            .help("Filter preset to apply")
            .long_help(PRESET_HELP)
            .required_unless_present("list"))
        .arg(Arg::new("width")
            .long("width")
            .help("Width of the raw image in pixels")
            .value_parser(value_parser!(usize))
            .required_unless_present_any(["list", "describe"]))
        .arg(Arg::new("height")
            .long("height")
            .help("Height of the raw image in pixels")
            .value_parser(value_parser!(usize))
            .required_unless_present_any(["list", "describe"]))
        .arg(Arg::new("channels")
            .long("channels")
            .help("Samples per pixel, 3 for RGB, 4 for RGBA")
            .long_help(CHANNELS_HELP)
            .value_parser(value_parser!(usize))
            .default_value("3"))
        .arg(Arg::new("params")
            .long("params")
            .help_heading("CONFIGURATION")
            .help("JSON file with preset parameters")
            .long_help(PARAMS_HELP))
        .arg(Arg::new("set")
            .long("set")
            .help_heading("CONFIGURATION")
            .help("Override a single parameter, as key=value")
            .long_help(SET_HELP)
            .action(ArgAction::Append))
        .arg(Arg::new("threads")
            .long("threads")
            .help_heading("ADVANCED")
            .help("Number of threads to filter with, defaults to the number of cores")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("list")
            .long("list")
            .help_heading("INFORMATION")
            .action(ArgAction::SetTrue)
            .help("Print every preset's registration details as JSON"))
        .arg(Arg::new("describe")
            .long("describe")
            .help_heading("INFORMATION")
            .action(ArgAction::SetTrue)
            .help("Print the selected preset's parameters as JSON"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the filter run"))
}
