/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines shared by all instafilter crates
//!
//! It currently contains
//!
//! - Colorspace information for the layers filters operate on
//! - A logging facade that compiles to nothing unless the `log` feature is on
//!
//! # Features
//!  - `log`: Forward the logging macros to the [log](https://docs.rs/log) crate.
//!
//!  - `serde`: Enables serializing of some of the data structures
//!     present in the crate
//!
#![macro_use]

pub mod colorspace;
#[cfg(not(feature = "log"))]
pub mod log;
#[cfg(feature = "log")]
pub use log;
pub mod serde;
