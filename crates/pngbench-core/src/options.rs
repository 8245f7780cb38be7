/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Options controlling how trials are run
use std::time::Duration;

use serde::Serialize;

use crate::clock::ClockKind;
use crate::codec::Backend;
use crate::errors::BenchErrors;

/// A zlib compression level, between 0 (store) and 9 (smallest output)
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct CompressionLevel(u8);

impl CompressionLevel {
    pub const MAX: u8 = 9;

    /// Create a new level or `None` if `level` is above 9
    pub const fn new(level: u8) -> Option<CompressionLevel> {
        if level <= Self::MAX {
            Some(CompressionLevel(level))
        } else {
            None
        }
    }

    /// Parse a level from a command line argument.
    ///
    /// Only a plain decimal integer between 0 and 9 is accepted.
    ///
    /// ```
    /// use pngbench_core::CompressionLevel;
    /// assert_eq!(CompressionLevel::parse("6").unwrap().get(), 6);
    /// assert!(CompressionLevel::parse("10").is_err());
    /// assert!(CompressionLevel::parse("fast").is_err());
    /// ```
    pub fn parse(arg: &str) -> Result<CompressionLevel, BenchErrors> {
        arg.trim()
            .parse::<u8>()
            .ok()
            .and_then(CompressionLevel::new)
            .ok_or_else(|| BenchErrors::BadCompressionLevel(arg.to_string()))
    }

    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Parse a trial count from a command line argument.
///
/// Zero is allowed and runs no trials, negative numbers are rejected.
pub fn parse_trials(arg: &str) -> Result<usize, BenchErrors> {
    arg.trim()
        .parse::<usize>()
        .map_err(|_| BenchErrors::BadTrialCount(arg.to_string()))
}

/// Options shared by the decode and encode trial loops
#[derive(Copy, Clone, Debug)]
pub struct BenchOptions {
    trials:   usize,
    cooldown: Duration,
    clock:    ClockKind,
    backend:  Backend
}

impl Default for BenchOptions {
    fn default() -> Self {
        BenchOptions {
            trials:   1,
            cooldown: Duration::from_millis(100),
            clock:    ClockKind::Cpu,
            backend:  Backend::ImageRs
        }
    }
}

impl BenchOptions {
    /// Options for tests and benches, no pause between trials
    pub fn new_fast() -> BenchOptions {
        BenchOptions::default().set_cooldown(Duration::ZERO)
    }

    pub const fn get_trials(&self) -> usize {
        self.trials
    }

    /// Set how many times the codec is run
    pub fn set_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    pub const fn get_cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Set the pause taken before every trial.
    ///
    /// The default of 100ms lets caches and the cpu frequency settle
    /// so each trial starts cold.
    pub fn set_cooldown(mut self, cooldown: Duration) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub const fn get_clock(&self) -> ClockKind {
        self.clock
    }

    pub fn set_clock(mut self, clock: ClockKind) -> Self {
        self.clock = clock;
        self
    }

    pub const fn get_backend(&self) -> Backend {
        self.backend
    }

    /// Set the codec the trials exercise
    pub fn set_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }
}
