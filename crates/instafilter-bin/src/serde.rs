/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use instafilter_procs::params::ParamSpec;
use instafilter_procs::presets::{Preset, PresetInfo};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Everything a host dialog needs to offer a preset
pub struct PresetDescription {
    info:   &'static PresetInfo,
    params: &'static [ParamSpec]
}

impl PresetDescription {
    pub fn new(preset: Preset) -> PresetDescription {
        PresetDescription {
            info:   preset.info(),
            params: preset.params()
        }
    }
}

impl Serialize for PresetDescription {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PresetDescription", 2)?;

        state.serialize_field("info", self.info)?;
        state.serialize_field("params", self.params)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use instafilter_procs::presets::Preset;

    use crate::serde::PresetDescription;

    #[test]
    fn chicago_description() {
        let json = serde_json::to_value(PresetDescription::new(Preset::Chicago)).unwrap();

        assert_eq!(json["info"]["identifier"], "python_fu_instagimp_chicago");
        assert_eq!(json["params"][1]["name"], "sepiacolor");
        assert_eq!(json["params"][1]["kind"]["type"], "color");
        assert_eq!(json["params"][2]["kind"]["max"], 255.0);
    }
}
