/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A closed set of the stages presets are built from
//!
//! Presets describe themselves as a list of [`Stage`]s, which can be
//! inspected, compared and printed before being handed over to a
//! [`Pipeline`](instafilter_image::pipelines::Pipeline).
use instafilter_image::geometry::PixelContext;
use instafilter_image::pixel::Rgb;
use instafilter_image::traits::PixelStage;

use crate::channel_shift::ChannelShift;
use crate::cubic_tone::CubicToneInject;
use crate::desaturate::Desaturate;
use crate::linear_map::LinearMap;
use crate::radial_blend::RadialBlend;
use crate::sepia::SepiaTint;

/// Any of the built in stages
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Stage {
    LinearMap(LinearMap),
    RadialBlend(RadialBlend),
    ChannelShift(ChannelShift),
    CubicToneInject(CubicToneInject),
    Desaturate(Desaturate),
    SepiaTint(SepiaTint)
}

impl Stage {
    /// Return the inner stage as a trait object
    pub fn as_pixel_stage(&self) -> &dyn PixelStage {
        match self {
            Stage::LinearMap(stage) => stage,
            Stage::RadialBlend(stage) => stage,
            Stage::ChannelShift(stage) => stage,
            Stage::CubicToneInject(stage) => stage,
            Stage::Desaturate(stage) => stage,
            Stage::SepiaTint(stage) => stage
        }
    }
}

impl PixelStage for Stage {
    fn name(&self) -> &'static str {
        self.as_pixel_stage().name()
    }

    fn apply(&self, rgb: Rgb, ctx: &PixelContext) -> Rgb {
        self.as_pixel_stage().apply(rgb, ctx)
    }
}

macro_rules! stage_from {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Stage {
                fn from(stage: $variant) -> Self {
                    Stage::$variant(stage)
                }
            }
        )*
    };
}

stage_from!(
    LinearMap,
    RadialBlend,
    ChannelShift,
    CubicToneInject,
    Desaturate,
    SepiaTint
);

#[cfg(test)]
mod tests {
    use instafilter_image::pixel::Channel;
    use instafilter_image::traits::PixelStage;

    use crate::channel_shift::ChannelShift;
    use crate::desaturate::Desaturate;
    use crate::stage::Stage;

    #[test]
    fn dispatches_to_inner_stage() {
        let stage = Stage::from(ChannelShift::outward(Channel::Green, 5.0));
        assert_eq!(stage.name(), "outward channel shift");

        let stage = Stage::from(Desaturate::new());
        assert_eq!(stage.name(), "desaturate");
    }
}
