/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

pub static PRESET_HELP: &str = "Filter preset to apply

Either the preset name, case insensitive, or its registration identifier.
Available presets are andromeda, chicago, geneva, ghost and sixities,
e.g `--preset chicago` or `--preset python_fu_instagimp_chicago`.

Use --list to see all presets and --describe to see a preset's parameters";

pub static CHANNELS_HELP: &str = "Samples per pixel in the raw file

The file must hold exactly width*height*channels bytes, pixels stored
row by row with interleaved samples. 3 reads RGB, 4 reads RGBA where the
alpha sample is carried over unchanged";

pub static PARAMS_HELP: &str = "Read preset parameters from a JSON file

The file must contain a single object mapping parameter names to values,
e.g {\"whiteoutside\": 90, \"sepiacolor\": [200, 220, 190]}.
Parameters not mentioned keep their defaults, values given with --set
take precedence";

pub static SET_HELP: &str = "Override a single preset parameter

Given as key=value, can be repeated. Colors are given as three comma
separated values, e.g --set redshift=20 --set sepiacolor=200,220,190";
