/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Chicago: a sepia print whose corners fade to white
use instafilter_image::errors::ImageErrors;
use serde::{Deserialize, Serialize};

use crate::channel_shift::{ChannelSet, ChannelShift};
use crate::desaturate::Desaturate;
use crate::params::{check_named, ParamSpec};
use crate::presets::{FilterPreset, Preset, PresetInfo};
use crate::sepia::SepiaTint;
use crate::stage::Stage;

pub static INFO: PresetInfo = PresetInfo {
    identifier:  "python_fu_instagimp_chicago",
    name:        "Chicago",
    blurb:       "20s style GIMP filter",
    author:      "JFM",
    copyright:   "Open source (BSD 3-clause license)",
    date:        "2013",
    menu_path:   "<Image>/Filters/InstaGIMP/Chicago",
    image_types: "RGB, RGB*"
};

pub static PARAMS: [ParamSpec; 3] = [
    ParamSpec::slider("whiteoutside", "White intensity", 120.0, 0.0, 255.0),
    ParamSpec::color("sepiacolor", "Color", [214, 240, 201]),
    ParamSpec::slider("redshift", "Red shift", 34.0, 0.0, 255.0)
];

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChicagoParams {
    /// White added towards the corners
    pub whiteoutside: f64,
    /// Tint the gray image is multiplied with
    pub sepiacolor:   [u8; 3],
    /// Constant added to red after tinting
    pub redshift:     f64
}

impl Default for ChicagoParams {
    fn default() -> Self {
        ChicagoParams {
            whiteoutside: 120.0,
            sepiacolor:   [214, 240, 201],
            redshift:     34.0
        }
    }
}

impl FilterPreset for ChicagoParams {
    const PRESET: Preset = Preset::Chicago;

    fn validate(&self) -> Result<(), ImageErrors> {
        check_named(INFO.name, &PARAMS, "whiteoutside", self.whiteoutside)?;
        check_named(INFO.name, &PARAMS, "redshift", self.redshift)
    }

    fn stages(&self) -> Vec<Stage> {
        vec![
            Desaturate::new().into(),
            SepiaTint::new(self.sepiacolor, self.redshift).into(),
            ChannelShift::outward(ChannelSet::All, self.whiteoutside).into()
        ]
    }
}
