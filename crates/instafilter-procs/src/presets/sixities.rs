/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sixities: warm faded colors with a soft vignette
//!
//! Nothing is tunable. Distances are measured with
//! [`DistanceMode::ColumnMirrored`], which is what gives this preset its
//! slightly lopsided vignette.
use instafilter_image::errors::ImageErrors;
use instafilter_image::geometry::DistanceMode;
use instafilter_image::pixel::Channel;
use serde::{Deserialize, Serialize};

use crate::channel_shift::ChannelShift;
use crate::cubic_tone::CubicToneInject;
use crate::linear_map::LinearMap;
use crate::params::ParamSpec;
use crate::presets::{FilterPreset, Preset, PresetInfo};
use crate::radial_blend::RadialBlend;
use crate::stage::Stage;

pub static INFO: PresetInfo = PresetInfo {
    identifier:  "python_fu_instagimp_sixities",
    name:        "Sixities",
    blurb:       "60s style GIMP filter",
    author:      "JFM",
    copyright:   "Open source (BSD 3-clause license)",
    date:        "2016",
    menu_path:   "<Image>/Filters/InstaGIMP/Sixities",
    image_types: "RGB, RGB*"
};

pub static PARAMS: [ParamSpec; 0] = [];

const RED_CURVE: [f64; 4] = [0.0, 0.00005, 0.0, 0.5];

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SixitiesParams {}

impl FilterPreset for SixitiesParams {
    const PRESET: Preset = Preset::Sixities;

    fn validate(&self) -> Result<(), ImageErrors> {
        Ok(())
    }

    fn stages(&self) -> Vec<Stage> {
        vec![
            LinearMap::new(1.175, -30.0).into(),
            // reads the mean before any tint or glow lands on the pixel
            CubicToneInject::new(Channel::Red, RED_CURVE, 115.0)
                .with_scale(0.5)
                .into(),
            ChannelShift::new(Channel::Red, 10.0).into(),
            ChannelShift::new(Channel::Green, 13.0).into(),
            RadialBlend::new(60.0, 60.0).into()
        ]
    }

    fn distance_mode(&self) -> DistanceMode {
        DistanceMode::ColumnMirrored
    }
}

#[cfg(test)]
mod tests {
    use instafilter_image::geometry::Geometry;
    use instafilter_image::pixel::Pixel;

    use crate::presets::sixities::SixitiesParams;
    use crate::presets::FilterPreset;

    #[test]
    fn mid_gray_on_the_center_column() {
        let pipeline = SixitiesParams::default().pipeline().unwrap();
        // on a 4x4 layer column 2 is at distance zero in mirrored mode
        let ctx = Geometry::new(4, 4).context(2, 0, pipeline.distance_mode());
        assert_eq!(ctx.distance, 0.0);

        // 1.175 * 128 - 30 = 120.4 on every channel, mean = 120.4
        // red += ((-7.6)^2 * 0.00005 + 0.5) * 115 / 2 = 28.916
        // then +10 red, +13 green and +60 glow
        let out = pipeline.transform(Pixel::rgb(128, 128, 128), &ctx);
        assert_eq!(out, Pixel::rgb(219, 193, 180));
    }

    #[test]
    fn tone_curve_ignores_tint_and_glow() {
        let pipeline = SixitiesParams::default().pipeline().unwrap();
        // pixel (2, 2) of a 4x3 layer
        let ctx = Geometry::new(4, 3).context(2, 2, pipeline.distance_mode());

        let out = pipeline.transform(Pixel::rgb(131, 183, 154), &ctx);
        assert_eq!(out, Pixel::rgb(212, 246, 198));
    }

    #[test]
    fn rows_do_not_change_the_result() {
        let pipeline = SixitiesParams::default().pipeline().unwrap();
        let geometry = Geometry::new(5, 3);
        let pixel = Pixel::rgb(90, 140, 200);

        for x in 0..5 {
            let top = pipeline.transform(pixel, &geometry.context(x, 0, pipeline.distance_mode()));
            let bottom =
                pipeline.transform(pixel, &geometry.context(x, 2, pipeline.distance_mode()));
            assert_eq!(top, bottom);
        }
    }
}
