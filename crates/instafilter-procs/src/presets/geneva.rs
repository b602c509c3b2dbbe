/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Geneva: high contrast gray with a blue cast and dark corners
//!
//! The contrast stage always uses a gain of `1.775` and an offset of `-40`.
//! `alpha` and `beta` are still accepted and validated so configurations
//! written for the dialog keep loading, but they have no effect.
use instafilter_core::log::warn;
use instafilter_image::errors::ImageErrors;
use instafilter_image::pixel::Channel;
use serde::{Deserialize, Serialize};

use crate::channel_shift::ChannelShift;
use crate::desaturate::Desaturate;
use crate::linear_map::LinearMap;
use crate::params::{check_named, ParamSpec};
use crate::presets::{FilterPreset, Preset, PresetInfo};
use crate::radial_blend::RadialBlend;
use crate::stage::Stage;

pub static INFO: PresetInfo = PresetInfo {
    identifier:  "python_fu_instagimp_geneva",
    name:        "Geneva",
    blurb:       "20s style GIMP filter",
    author:      "JFM",
    copyright:   "Open source (BSD 3-clause license)",
    date:        "2013",
    menu_path:   "<Image>/Filters/InstaGIMP/Geneva",
    image_types: "RGB, RGB*"
};

pub static PARAMS: [ParamSpec; 4] = [
    ParamSpec::float("alpha", "Alpha", ALPHA),
    ParamSpec::slider("beta", "Beta", BETA, -255.0, 255.0),
    ParamSpec::slider("brownfusion", "Brown fusion", 25.0, 0.0, 255.0),
    ParamSpec::slider("blackoutside", "Black intensity", 100.0, 0.0, 255.0)
];

const ALPHA: f64 = 1.775;
const BETA: f64 = -40.0;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenevaParams {
    /// Ignored, the gain is fixed
    pub alpha:        f64,
    /// Ignored, the offset is fixed
    pub beta:         f64,
    /// Amount added to blue
    pub brownfusion:  f64,
    /// Darkening at the corners
    pub blackoutside: f64
}

impl Default for GenevaParams {
    fn default() -> Self {
        GenevaParams {
            alpha:        ALPHA,
            beta:         BETA,
            brownfusion:  25.0,
            blackoutside: 100.0
        }
    }
}

impl GenevaParams {
    /// Whether `alpha` or `beta` differ from the values the filter uses
    #[allow(clippy::float_cmp)]
    pub fn overrides_ignored(&self) -> bool {
        self.alpha != ALPHA || self.beta != BETA
    }
}

impl FilterPreset for GenevaParams {
    const PRESET: Preset = Preset::Geneva;

    fn validate(&self) -> Result<(), ImageErrors> {
        let values = [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("brownfusion", self.brownfusion),
            ("blackoutside", self.blackoutside)
        ];
        for (name, value) in values {
            check_named(INFO.name, &PARAMS, name, value)?;
        }
        Ok(())
    }

    fn stages(&self) -> Vec<Stage> {
        if self.overrides_ignored() {
            warn!(
                "Geneva: ignoring alpha={} beta={}, using fixed alpha={ALPHA} beta={BETA}",
                self.alpha,
                self.beta
            );
        }
        vec![
            LinearMap::new(ALPHA, BETA).into(),
            Desaturate::new().into(),
            ChannelShift::new(Channel::Blue, self.brownfusion).into(),
            RadialBlend::new(0.0, self.blackoutside).into()
        ]
    }
}

#[cfg(test)]
mod tests {
    use crate::presets::geneva::GenevaParams;
    use crate::presets::FilterPreset;

    #[test]
    fn alpha_and_beta_are_fixed() {
        let defaults = GenevaParams::default();
        let tuned = GenevaParams {
            alpha: 0.5,
            beta: 100.0,
            ..defaults
        };
        assert!(tuned.overrides_ignored());
        assert!(!defaults.overrides_ignored());
        assert_eq!(tuned.stages(), defaults.stages());
    }

    #[test]
    fn overrides_are_still_validated() {
        let params = GenevaParams {
            beta: -300.0,
            ..GenevaParams::default()
        };
        assert!(params.validate().is_err());
    }
}
