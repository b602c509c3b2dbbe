/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Andromeda: contrast boost, glow with dark corners, a yellow tint and
//! blue pushed into shadows and highlights
use instafilter_image::errors::ImageErrors;
use instafilter_image::pixel::Channel;
use serde::{Deserialize, Serialize};

use crate::channel_shift::ChannelShift;
use crate::cubic_tone::CubicToneInject;
use crate::linear_map::LinearMap;
use crate::params::{check_named, ParamSpec};
use crate::presets::{FilterPreset, Preset, PresetInfo};
use crate::radial_blend::RadialBlend;
use crate::stage::Stage;

pub static INFO: PresetInfo = PresetInfo {
    identifier:  "python_fu_instagimp_andromeda",
    name:        "Andromeda",
    blurb:       "Black and white style GIMP filter",
    author:      "JFM",
    copyright:   "Open source (BSD 3-clause license)",
    date:        "2016",
    menu_path:   "<Image>/Filters/InstaGIMP/Andromeda",
    image_types: "RGB, RGB*"
};

pub static PARAMS: [ParamSpec; 8] = [
    ParamSpec::float("alpha", "Alpha", 1.475),
    ParamSpec::slider("beta", "Beta", -20.0, -255.0, 255.0),
    ParamSpec::slider("whitecenter", "White intensity", 40.0, 0.0, 255.0),
    ParamSpec::slider("blackoutside", "Black intensity", 80.0, 0.0, 255.0),
    ParamSpec::slider("redint", "Red", 10.0, 0.0, 255.0),
    ParamSpec::slider("greenint", "Green", 50.0, 0.0, 255.0),
    ParamSpec::slider("bluize", "Blue intensity", 60.0, 0.0, 255.0),
    ParamSpec::slider("greenoutside", "Green intensity", 50.0, 0.0, 255.0)
];

/// Blue tone curve, an even parabola around mid gray
const BLUE_CURVE: [f64; 4] = [0.0, 0.00006, 0.0, 0.0];

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AndromedaParams {
    /// Contrast gain
    pub alpha:        f64,
    /// Brightness offset applied with the gain
    pub beta:         f64,
    /// Glow added at the center
    pub whitecenter:  f64,
    /// Darkening at the corners
    pub blackoutside: f64,
    /// Amount removed from red everywhere
    pub redint:       f64,
    /// Amount added to green everywhere
    pub greenint:     f64,
    /// Gain of the blue tone curve
    pub bluize:       f64,
    /// Green added towards the corners
    pub greenoutside: f64
}

impl Default for AndromedaParams {
    fn default() -> Self {
        AndromedaParams {
            alpha:        1.475,
            beta:         -20.0,
            whitecenter:  40.0,
            blackoutside: 80.0,
            redint:       10.0,
            greenint:     50.0,
            bluize:       60.0,
            greenoutside: 50.0
        }
    }
}

impl FilterPreset for AndromedaParams {
    const PRESET: Preset = Preset::Andromeda;

    fn validate(&self) -> Result<(), ImageErrors> {
        let values = [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("whitecenter", self.whitecenter),
            ("blackoutside", self.blackoutside),
            ("redint", self.redint),
            ("greenint", self.greenint),
            ("bluize", self.bluize),
            ("greenoutside", self.greenoutside)
        ];
        for (name, value) in values {
            check_named(INFO.name, &PARAMS, name, value)?;
        }
        Ok(())
    }

    fn stages(&self) -> Vec<Stage> {
        vec![
            LinearMap::new(self.alpha, self.beta).into(),
            RadialBlend::new(self.whitecenter, self.blackoutside).into(),
            ChannelShift::new(Channel::Red, -self.redint).into(),
            ChannelShift::new(Channel::Green, self.greenint).into(),
            CubicToneInject::new(Channel::Blue, BLUE_CURVE, self.bluize).into(),
            ChannelShift::outward(Channel::Green, self.greenoutside).into()
        ]
    }
}
