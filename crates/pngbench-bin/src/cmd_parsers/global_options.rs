/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::Duration;

use clap::parser::ValueSource;
use clap::ArgMatches;
use log::{info, Level};
use pngbench_core::{Backend, ClockKind};

use crate::cmd_args::arg_parsers::{IClock, ICodec};

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub backend:        Backend,
    pub clock:          ClockKind,
    pub cooldown:       Duration,
    pub json:           bool,
    pub override_files: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            backend:        Backend::ImageRs,
            clock:          ClockKind::Cpu,
            cooldown:       Duration::from_millis(100),
            json:           false,
            override_files: false
        }
    }
}

fn flag(options: &ArgMatches, id: &str) -> bool {
    options.get_one::<bool>(id).copied().unwrap_or(false)
}

pub fn parse_options(options: &ArgMatches) -> CmdOptions {
    let mut cmd_options = CmdOptions::new();

    if let Some(codec) = options.get_one::<ICodec>("codec") {
        cmd_options.backend = codec.to_backend();
    }
    if let Some(clock) = options.get_one::<IClock>("clock") {
        cmd_options.clock = clock.to_clock_kind();
    }
    if let Some(millis) = options.get_one::<u64>("cooldown-ms") {
        cmd_options.cooldown = Duration::from_millis(*millis);
    }
    if options.value_source("cooldown-ms") == Some(ValueSource::CommandLine) {
        info!("Sleeping {:?} before every trial", cmd_options.cooldown);
    }
    info!(
        "Benchmarking {} with the {:?} clock",
        cmd_options.backend.name(),
        cmd_options.clock
    );

    cmd_options.json = flag(options, "json");

    if flag(options, "all-yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if flag(options, "debug") {
        Level::Debug
    } else if flag(options, "trace") {
        Level::Trace
    } else if flag(options, "warn") {
        Level::Warn
    } else if flag(options, "info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}
