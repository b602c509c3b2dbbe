/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Ghost: bright, washed out black and white with white corners
use instafilter_image::errors::ImageErrors;
use serde::{Deserialize, Serialize};

use crate::channel_shift::{ChannelSet, ChannelShift};
use crate::desaturate::Desaturate;
use crate::linear_map::LinearMap;
use crate::params::{check_named, ParamSpec};
use crate::presets::{FilterPreset, Preset, PresetInfo};
use crate::stage::Stage;

pub static INFO: PresetInfo = PresetInfo {
    identifier:  "python_fu_instagimp_ghost",
    name:        "Ghost",
    blurb:       "Black and white style GIMP filter",
    author:      "JFM",
    copyright:   "Open source (BSD 3-clause license)",
    date:        "2016",
    menu_path:   "<Image>/Filters/InstaGIMP/Ghost",
    image_types: "RGB, RGB*"
};

pub static PARAMS: [ParamSpec; 3] = [
    ParamSpec::float("alpha", "Alpha", 1.975),
    ParamSpec::slider("beta", "Beta", -100.0, -255.0, 255.0),
    ParamSpec::slider("whiteoutside", "White intensity", 50.0, 0.0, 255.0)
];

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GhostParams {
    pub alpha:        f64,
    pub beta:         f64,
    pub whiteoutside: f64
}

impl Default for GhostParams {
    fn default() -> Self {
        GhostParams {
            alpha:        1.975,
            beta:         -100.0,
            whiteoutside: 50.0
        }
    }
}

impl FilterPreset for GhostParams {
    const PRESET: Preset = Preset::Ghost;

    fn validate(&self) -> Result<(), ImageErrors> {
        check_named(INFO.name, &PARAMS, "alpha", self.alpha)?;
        check_named(INFO.name, &PARAMS, "beta", self.beta)?;
        check_named(INFO.name, &PARAMS, "whiteoutside", self.whiteoutside)
    }

    fn stages(&self) -> Vec<Stage> {
        vec![
            LinearMap::new(self.alpha, self.beta).into(),
            Desaturate::new().into(),
            ChannelShift::outward(ChannelSet::All, self.whiteoutside).into()
        ]
    }
}

#[cfg(test)]
mod tests {
    use instafilter_image::geometry::{DistanceMode, Geometry};
    use instafilter_image::pixel::Pixel;

    use crate::presets::ghost::GhostParams;
    use crate::presets::FilterPreset;

    #[test]
    fn red_corner_of_a_two_by_two_layer() {
        let pipeline = GhostParams::default().pipeline().unwrap();
        let ctx = Geometry::new(2, 2).context(0, 0, DistanceMode::Centered);

        // 403.625, -100, -100 -> 67.875 gray, +25 at half the diagonal
        let out = pipeline.transform(Pixel::rgb(255, 0, 0), &ctx);
        assert_eq!(out, Pixel::rgb(92, 92, 92));
    }

    #[test]
    fn fractional_beta_is_rejected() {
        let params = GhostParams {
            beta: -99.5,
            ..GhostParams::default()
        };
        assert!(params.pipeline().is_err());
    }
}
