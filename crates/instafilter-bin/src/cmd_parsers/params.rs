/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Turn `--params` and `--set` into a preset configuration
use std::fs::read_to_string;

use clap::ArgMatches;
use instafilter_image::errors::ImageErrors;
use instafilter_procs::params::ParamKind;
use instafilter_procs::presets::{Preset, PresetConfig};
use log::{debug, info};
use serde_json::{Map, Number, Value};

/// Build the configuration for `preset` from the command line
pub fn parse_config(args: &ArgMatches, preset: Preset) -> Result<PresetConfig, ImageErrors> {
    let mut values = Map::new();

    if let Some(path) = args.get_one::<String>("params") {
        info!("Reading parameters from {path}");
        values = parse_params_file(&read_to_string(path)?, preset)?;
    }
    if let Some(overrides) = args.get_many::<String>("set") {
        for assignment in overrides {
            let (key, value) = parse_assignment(assignment, preset)?;
            debug!("Setting {key} to {value}");
            values.insert(key, value);
        }
    }
    config_from_values(preset, values)
}

/// Parse the contents of a `--params` file
///
/// An optional `preset` key is accepted as long as it names `preset`.
pub fn parse_params_file(contents: &str, preset: Preset) -> Result<Map<String, Value>, ImageErrors> {
    let value: Value =
        serde_json::from_str(contents).map_err(|e| ImageErrors::GenericString(e.to_string()))?;

    let Value::Object(mut values) = value else {
        return Err(ImageErrors::GenericStr(
            "Parameter file must contain a JSON object"
        ));
    };

    if let Some(named) = values.remove("preset") {
        let named = named
            .as_str()
            .ok_or(ImageErrors::GenericStr("`preset` must be a string"))?;

        if Preset::lookup(named)? != preset {
            return Err(ImageErrors::GenericString(format!(
                "Parameter file is for {named}, but {preset} was selected"
            )));
        }
    }
    for key in values.keys() {
        preset.param(key)?;
    }
    Ok(values)
}

/// Parse a single `key=value` override
pub fn parse_assignment(assignment: &str, preset: Preset) -> Result<(String, Value), ImageErrors> {
    let (key, raw) = assignment.split_once('=').ok_or_else(|| {
        ImageErrors::GenericString(format!("Expected key=value, found `{assignment}`"))
    })?;
    let key = key.trim();
    let raw = raw.trim();

    let value = match preset.param(key)?.kind {
        ParamKind::Color { .. } => {
            let samples = raw
                .split(',')
                .map(|x| x.trim().parse::<u8>())
                .collect::<Result<Vec<u8>, _>>()
                .map_err(|e| ImageErrors::GenericString(format!("Invalid color `{raw}`: {e}")))?;

            if samples.len() != 3 {
                return Err(ImageErrors::GenericString(format!(
                    "Invalid color `{raw}`, expected three values"
                )));
            }
            Value::from(samples)
        }
        ParamKind::Float { .. } | ParamKind::Slider { .. } => {
            let number = raw.parse::<f64>().map_err(|e| {
                ImageErrors::GenericString(format!("Invalid number `{raw}` for {key}: {e}"))
            })?;
            // NaN and infinities have no JSON form
            Number::from_f64(number).map(Value::Number).ok_or_else(|| {
                ImageErrors::GenericString(format!("{key} must be a finite number"))
            })?
        }
    };
    Ok((key.to_string(), value))
}

/// Deserialize and validate the collected values
pub fn config_from_values(
    preset: Preset, values: Map<String, Value>
) -> Result<PresetConfig, ImageErrors> {
    let config = preset
        .config_from(Value::Object(values))
        .map_err(|e| ImageErrors::GenericString(format!("Invalid {preset} parameters: {e}")))?;

    config.validate()?;
    Ok(config)
}
