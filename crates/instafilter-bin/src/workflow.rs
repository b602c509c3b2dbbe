/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use clap::ArgMatches;
use instafilter_image::errors::{ImageErrors, RunFailure};
use instafilter_image::host::LoggingHost;
use instafilter_image::pipelines::RunOptions;
use instafilter_procs::presets::Preset;
use log::{debug, info};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::params::parse_config;
use crate::file_io::{read_raw, write_raw};
use crate::serde::PresetDescription;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), RunFailure> {
    if args.get_flag("list") {
        let infos: Vec<_> = Preset::ALL.into_iter().map(Preset::info).collect();
        print_json(&infos)?;
        return Ok(());
    }

    let preset = match args.get_one::<String>("preset") {
        Some(name) => Preset::lookup(name)?,
        None => return Err(ImageErrors::GenericStr("No preset given").into())
    };

    if args.get_flag("describe") {
        print_json(&PresetDescription::new(preset))?;
        return Ok(());
    }

    let config = parse_config(args, preset)?;
    debug!("Using configuration {:?}", config);

    let (in_file, out_file) = match (args.get_one::<String>("in"), args.get_one::<String>("out")) {
        (Some(in_file), Some(out_file)) => (Path::new(in_file), Path::new(out_file)),
        _ => return Err(ImageErrors::GenericStr("Both input and output are required").into())
    };
    verify_file_paths(in_file, out_file)?;

    let mut image = read_raw(in_file, cmd_opts)?;
    let pipeline = config.pipeline()?;
    let options = RunOptions::new().set_threads(cmd_opts.threads);

    let mut host = LoggingHost::new();
    let report = pipeline.run_with_options(&mut image, &mut host, &options)?;

    info!(
        "Filtered {} pixels in {} rows on {} threads in {} ms",
        report.pixels,
        report.rows,
        report.threads,
        report.elapsed.as_millis()
    );

    write_raw(out_file, &image)?;
    Ok(())
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<(), ImageErrors> {
    let json =
        serde_json::to_string_pretty(value).map_err(|e| ImageErrors::GenericString(e.to_string()))?;
    println!("{json}");
    Ok(())
}

fn verify_file_paths(p0: &Path, p1: &Path) -> Result<(), ImageErrors> {
    if p0 == p1 {
        return Err(ImageErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            p0
        )));
    }
    if !p0.exists() {
        return Err(ImageErrors::GenericString(format!(
            "Path {:?}, does not exist",
            p0
        )));
    }
    if !p0.is_file() {
        return Err(ImageErrors::GenericString(format!(
            "Path {:?} is not a file",
            p0
        )));
    }
    if p1.exists() {
        info!("Overwriting path {:?} ", p1);
    }
    Ok(())
}
