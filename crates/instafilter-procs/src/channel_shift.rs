/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Additive channel shifts
//!
//! Adds a constant to one channel (a tint) or to all of them (a brightness
//! shift). A distance scaled shift grows linearly from nothing at the center
//! to the full amount at `max_distance`:
//!
//! ```text
//! channel' = channel + amount
//! channel' = channel + (amount / max_distance) * distance    // distance scaled
//! ```
use instafilter_image::geometry::PixelContext;
use instafilter_image::pixel::{Channel, Rgb};
use instafilter_image::traits::PixelStage;

/// Channels a shift is added to
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChannelSet {
    Red,
    Green,
    Blue,
    All
}

impl From<Channel> for ChannelSet {
    fn from(channel: Channel) -> Self {
        match channel {
            Channel::Red => ChannelSet::Red,
            Channel::Green => ChannelSet::Green,
            Channel::Blue => ChannelSet::Blue
        }
    }
}

/// Add an amount to one or all channels
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ChannelShift {
    target:          ChannelSet,
    amount:          f64,
    distance_scaled: bool
}

impl ChannelShift {
    /// Add `amount` to `target` for every pixel
    #[must_use]
    pub fn new(target: impl Into<ChannelSet>, amount: f64) -> ChannelShift {
        ChannelShift {
            target: target.into(),
            amount,
            distance_scaled: false
        }
    }

    /// Add `amount` to `target`, weighted by the pixel's distance from the center
    #[must_use]
    pub fn outward(target: impl Into<ChannelSet>, amount: f64) -> ChannelShift {
        ChannelShift {
            target: target.into(),
            amount,
            distance_scaled: true
        }
    }

    pub const fn target(&self) -> ChannelSet {
        self.target
    }

    pub const fn is_distance_scaled(&self) -> bool {
        self.distance_scaled
    }
}

impl PixelStage for ChannelShift {
    fn name(&self) -> &'static str {
        if self.distance_scaled {
            "outward channel shift"
        } else {
            "channel shift"
        }
    }

    fn apply(&self, mut rgb: Rgb, ctx: &PixelContext) -> Rgb {
        let amount = if self.distance_scaled {
            ctx.outward(self.amount)
        } else {
            self.amount
        };

        match self.target {
            ChannelSet::Red => rgb.r += amount,
            ChannelSet::Green => rgb.g += amount,
            ChannelSet::Blue => rgb.b += amount,
            ChannelSet::All => rgb = rgb.map(|x| x + amount)
        }
        rgb
    }
}

#[cfg(test)]
mod tests {
    use instafilter_image::geometry::{DistanceMode, Geometry};
    use instafilter_image::pixel::{Channel, Rgb};
    use instafilter_image::traits::PixelStage;

    use crate::channel_shift::{ChannelSet, ChannelShift};

    #[test]
    fn constant_shift_touches_one_channel() {
        let ctx = Geometry::new(3, 3).context(0, 0, DistanceMode::Centered);
        let out = ChannelShift::new(Channel::Red, -10.0).apply(Rgb::splat(50.0), &ctx);

        assert_eq!(out, Rgb::new(40.0, 50.0, 50.0));
    }

    #[test]
    fn outward_shift_on_two_by_two_corner() {
        // distance sqrt(2), max distance 2 * sqrt(2): half the amount
        let ctx = Geometry::new(2, 2).context(0, 0, DistanceMode::Centered);
        let out = ChannelShift::outward(ChannelSet::All, 50.0).apply(Rgb::splat(67.875), &ctx);

        assert!((out.r - 92.875).abs() < 1e-9);
        assert_eq!(out.r, out.g);
        assert_eq!(out.g, out.b);
    }

    #[test]
    fn outward_shift_is_zero_at_center() {
        let ctx = Geometry::new(4, 4).context(2, 2, DistanceMode::Centered);
        let out = ChannelShift::outward(Channel::Green, 50.0).apply(Rgb::splat(1.0), &ctx);

        assert_eq!(out, Rgb::splat(1.0));
    }
}
