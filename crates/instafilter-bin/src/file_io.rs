/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use instafilter_image::errors::ImageErrors;
use instafilter_image::image::Image;
use log::{debug, info};

use crate::cmd_parsers::global_options::CmdOptions;

/// Read a raw interleaved RGB(A) file into an image
///
/// The layer is named after the file stem.
pub fn read_raw(path: &Path, options: &CmdOptions) -> Result<Image, ImageErrors> {
    let pixels = read(path)?;
    info!("Read {} bytes from {:?}", pixels.len(), path);

    let name = path
        .file_stem()
        .map_or_else(|| "Background".to_string(), |x| x.to_string_lossy().into_owned());

    let image = Image::from_raw(pixels, options.width, options.height, options.colorspace)?;
    debug!(
        "Loaded {}x{} {:?} layer `{}`",
        options.width, options.height, options.colorspace, name
    );
    Ok(image.with_name(name))
}

/// Write the image samples to `path`, replacing its contents
pub fn write_raw(path: &Path, image: &Image) -> Result<(), ImageErrors> {
    let mut writer = BufWriter::new(File::create(path)?);

    writer.write_all(image.as_bytes())?;
    writer.flush()?;

    info!("Wrote {} bytes to {:?}", image.as_bytes().len(), path);
    Ok(())
}
