/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
#![cfg(feature = "serde")]

use serde::de::{Error, Unexpected};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::colorspace::ColorSpace;

impl Serialize for ColorSpace {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        // colorspace serialization is simply it's short name
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for ColorSpace {
    fn deserialize<D>(deserializer: D) -> Result<ColorSpace, D::Error>
    where
        D: Deserializer<'de>
    {
        let name = String::deserialize(deserializer)?;

        match name.as_str() {
            "rgb" | "RGB" => Ok(ColorSpace::RGB),
            "rgba" | "RGBA" => Ok(ColorSpace::RGBA),
            other => Err(D::Error::invalid_value(
                Unexpected::Str(other),
                &"one of `rgb` or `rgba`"
            ))
        }
    }
}
