/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The five InstaGIMP filter presets
//!
//! A preset is a typed parameter struct that knows how to validate itself
//! and which [`Stage`]s it expands to. [`FilterPreset::pipeline`] turns it
//! into a runnable [`Pipeline`].
//!
//! | Preset    | Look                                             |
//! |-----------|--------------------------------------------------|
//! | Andromeda | Contrast, glow with dark corners, yellow tint    |
//! | Chicago   | Sepia, fading to white at the corners            |
//! | Geneva    | High contrast gray with a blue cast and vignette |
//! | Ghost     | Bright washed out gray                           |
//! | Sixities  | Warm faded colors with a soft vignette           |
//!
//! # Example
//! ```
//! use instafilter_core::colorspace::ColorSpace;
//! use instafilter_image::host::LoggingHost;
//! use instafilter_image::image::Image;
//! use instafilter_image::pixel::Pixel;
//! use instafilter_procs::presets::ghost::GhostParams;
//! use instafilter_procs::presets::FilterPreset;
//!
//! let mut image = Image::fill(Pixel::rgb(255, 0, 0), ColorSpace::RGB, 2, 2);
//! let pipeline = GhostParams::default().pipeline().unwrap();
//!
//! pipeline.run(&mut image, &mut LoggingHost::new()).unwrap();
//! assert_eq!(image.pixel(0, 0), Some(Pixel::rgb(92, 92, 92)));
//! ```
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use instafilter_image::errors::ImageErrors;
use instafilter_image::geometry::DistanceMode;
use instafilter_image::pipelines::Pipeline;
use serde::{Deserialize, Deserializer, Serialize};

use crate::params::{find_param, ParamSpec};
use crate::presets::andromeda::AndromedaParams;
use crate::presets::chicago::ChicagoParams;
use crate::presets::geneva::GenevaParams;
use crate::presets::ghost::GhostParams;
use crate::presets::sixities::SixitiesParams;
use crate::stage::Stage;

pub mod andromeda;
pub mod chicago;
pub mod geneva;
pub mod ghost;
pub mod sixities;

/// Registration details a host menu needs for a preset
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PresetInfo {
    /// Stable identifier the host registers the filter under
    pub identifier:  &'static str,
    pub name:        &'static str,
    pub blurb:       &'static str,
    pub author:      &'static str,
    pub copyright:   &'static str,
    pub date:        &'static str,
    pub menu_path:   &'static str,
    /// Layer types the filter accepts, in host notation
    pub image_types: &'static str
}

/// A set of parameters for one preset
pub trait FilterPreset {
    /// The preset these parameters configure
    const PRESET: Preset;

    /// Check every parameter against the preset's descriptor table
    ///
    /// # Errors
    /// The first parameter found invalid
    fn validate(&self) -> Result<(), ImageErrors>;

    /// The stages this preset runs, in order
    fn stages(&self) -> Vec<Stage>;

    /// How pixel distances are measured for this preset
    fn distance_mode(&self) -> DistanceMode {
        DistanceMode::Centered
    }

    /// Validate the parameters and build a pipeline out of them
    ///
    /// # Errors
    /// See [`validate`](FilterPreset::validate)
    fn pipeline(&self) -> Result<Pipeline, ImageErrors> {
        self.validate()?;

        let mut pipeline = Pipeline::new(Self::PRESET.name());
        pipeline.set_distance_mode(self.distance_mode());

        for stage in self.stages() {
            pipeline.chain_stage(Box::new(stage));
        }
        Ok(pipeline)
    }
}

/// The available presets
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    Andromeda,
    Chicago,
    Geneva,
    Ghost,
    #[serde(alias = "sixties")]
    Sixities
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Andromeda,
        Preset::Chicago,
        Preset::Geneva,
        Preset::Ghost,
        Preset::Sixities
    ];

    pub fn info(self) -> &'static PresetInfo {
        match self {
            Preset::Andromeda => &andromeda::INFO,
            Preset::Chicago => &chicago::INFO,
            Preset::Geneva => &geneva::INFO,
            Preset::Ghost => &ghost::INFO,
            Preset::Sixities => &sixities::INFO
        }
    }

    /// Display name, e.g. `Andromeda`
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// The descriptor table of every parameter this preset accepts
    pub fn params(self) -> &'static [ParamSpec] {
        match self {
            Preset::Andromeda => &andromeda::PARAMS,
            Preset::Chicago => &chicago::PARAMS,
            Preset::Geneva => &geneva::PARAMS,
            Preset::Ghost => &ghost::PARAMS,
            Preset::Sixities => &sixities::PARAMS
        }
    }

    /// Look up a parameter descriptor by its key
    ///
    /// # Errors
    /// `UnknownParameter` if the preset doesn't accept `name`
    pub fn param(self, name: &str) -> Result<&'static ParamSpec, ImageErrors> {
        find_param(self.name(), self.params(), name)
    }

    /// Find a preset from its registration identifier,
    /// e.g. `python_fu_instagimp_ghost`
    pub fn from_identifier(identifier: &str) -> Option<Preset> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.info().identifier == identifier)
    }

    /// Find a preset from its name, ignoring case
    ///
    /// `sixties` is accepted as an alias for `Sixities`
    pub fn from_name(name: &str) -> Option<Preset> {
        if name.eq_ignore_ascii_case("sixties") {
            return Some(Preset::Sixities);
        }
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name))
    }

    /// Find a preset by name or identifier
    ///
    /// # Errors
    /// `UnknownPreset` when nothing matches
    pub fn lookup(key: &str) -> Result<Preset, ImageErrors> {
        Preset::from_name(key)
            .or_else(|| Preset::from_identifier(key))
            .ok_or_else(|| ImageErrors::UnknownPreset(key.to_string()))
    }

    /// The preset configured with its default parameters
    pub fn default_config(self) -> PresetConfig {
        match self {
            Preset::Andromeda => PresetConfig::Andromeda(AndromedaParams::default()),
            Preset::Chicago => PresetConfig::Chicago(ChicagoParams::default()),
            Preset::Geneva => PresetConfig::Geneva(GenevaParams::default()),
            Preset::Ghost => PresetConfig::Ghost(GhostParams::default()),
            Preset::Sixities => PresetConfig::Sixities(SixitiesParams::default())
        }
    }

    /// Deserialize this preset's parameters
    ///
    /// Missing parameters take their defaults, unknown ones are rejected.
    /// Values are not range checked here, see [`PresetConfig::validate`].
    ///
    /// # Errors
    /// Whatever the deserializer reports
    pub fn config_from<'de, D>(self, deserializer: D) -> Result<PresetConfig, D::Error>
    where
        D: Deserializer<'de>
    {
        let config = match self {
            Preset::Andromeda => PresetConfig::Andromeda(AndromedaParams::deserialize(deserializer)?),
            Preset::Chicago => PresetConfig::Chicago(ChicagoParams::deserialize(deserializer)?),
            Preset::Geneva => PresetConfig::Geneva(GenevaParams::deserialize(deserializer)?),
            Preset::Ghost => PresetConfig::Ghost(GhostParams::deserialize(deserializer)?),
            Preset::Sixities => PresetConfig::Sixities(SixitiesParams::deserialize(deserializer)?)
        };
        Ok(config)
    }
}

impl Display for Preset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Preset {
    type Err = ImageErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::lookup(s)
    }
}

/// A preset together with its parameters
///
/// Serialized with a `preset` tag next to the parameters, e.g.
/// `{"preset": "ghost", "alpha": 1.5}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "preset", rename_all = "lowercase")]
pub enum PresetConfig {
    Andromeda(AndromedaParams),
    Chicago(ChicagoParams),
    Geneva(GenevaParams),
    Ghost(GhostParams),
    #[serde(alias = "sixties")]
    Sixities(SixitiesParams)
}

impl PresetConfig {
    pub fn preset(&self) -> Preset {
        match self {
            PresetConfig::Andromeda(_) => Preset::Andromeda,
            PresetConfig::Chicago(_) => Preset::Chicago,
            PresetConfig::Geneva(_) => Preset::Geneva,
            PresetConfig::Ghost(_) => Preset::Ghost,
            PresetConfig::Sixities(_) => Preset::Sixities
        }
    }

    /// # Errors
    /// The first invalid parameter
    pub fn validate(&self) -> Result<(), ImageErrors> {
        match self {
            PresetConfig::Andromeda(params) => params.validate(),
            PresetConfig::Chicago(params) => params.validate(),
            PresetConfig::Geneva(params) => params.validate(),
            PresetConfig::Ghost(params) => params.validate(),
            PresetConfig::Sixities(params) => params.validate()
        }
    }

    pub fn stages(&self) -> Vec<Stage> {
        match self {
            PresetConfig::Andromeda(params) => params.stages(),
            PresetConfig::Chicago(params) => params.stages(),
            PresetConfig::Geneva(params) => params.stages(),
            PresetConfig::Ghost(params) => params.stages(),
            PresetConfig::Sixities(params) => params.stages()
        }
    }

    /// Validate and build the pipeline for this configuration
    ///
    /// # Errors
    /// The first invalid parameter
    pub fn pipeline(&self) -> Result<Pipeline, ImageErrors> {
        match self {
            PresetConfig::Andromeda(params) => params.pipeline(),
            PresetConfig::Chicago(params) => params.pipeline(),
            PresetConfig::Geneva(params) => params.pipeline(),
            PresetConfig::Ghost(params) => params.pipeline(),
            PresetConfig::Sixities(params) => params.pipeline()
        }
    }
}
