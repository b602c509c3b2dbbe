/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A host that forwards everything to the logger
//!
//! Useful for headless runs, where there is no undo stack or progress bar,
//! but the bracketing and progress should still be visible when tracing.
use instafilter_core::log::{error, info, trace, warn};

use crate::traits::Host;

/// Headless [`Host`] implementation writing to the `log` facade
#[derive(Debug, Default)]
pub struct LoggingHost {
    open_groups:   usize,
    last_reported: f64,
    messages:      Vec<String>
}

impl LoggingHost {
    pub fn new() -> LoggingHost {
        LoggingHost::default()
    }

    /// Number of undo groups opened but not yet closed
    pub const fn open_undo_groups(&self) -> usize {
        self.open_groups
    }

    /// Messages that were shown to the user
    pub fn messages(&self) -> &[String] {
        &self.messages
    }
}

impl Host for LoggingHost {
    fn begin_undo_group(&mut self) {
        self.open_groups += 1;
        trace!("Opened undo group, depth {}", self.open_groups);
    }

    fn end_undo_group(&mut self) {
        if self.open_groups == 0 {
            warn!("Closing an undo group that was never opened");
            return;
        }
        self.open_groups -= 1;
        trace!("Closed undo group, depth {}", self.open_groups);
    }

    fn progress_init(&mut self, message: &str) {
        self.last_reported = 0.0;
        info!("{message}");
    }

    fn progress_update(&mut self, fraction: f64) {
        // log roughly every tenth, the per row updates are too chatty
        if fraction >= 1.0 || fraction - self.last_reported >= 0.1 {
            self.last_reported = fraction;
            info!("Progress {:.0}%", fraction * 100.0);
        } else {
            trace!("Progress {:.2}%", fraction * 100.0);
        }
    }

    fn progress_end(&mut self) {
        trace!("Progress finished");
    }

    fn message(&mut self, message: &str) {
        error!("{message}");
        self.messages.push(message.to_string());
    }
}
