/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use pngbench_core::BenchOptions;

use crate::cmd_parsers::global_options::CmdOptions;

pub mod global_options;

/// Build trial options from the parsed global flags and
/// the subcommand's trial count
pub fn get_bench_options(options: &ArgMatches, cmd_opts: &CmdOptions) -> BenchOptions {
    let trials = options
        .try_get_one::<usize>("trials")
        .ok()
        .flatten()
        .copied()
        .unwrap_or(1);

    BenchOptions::default()
        .set_trials(trials)
        .set_cooldown(cmd_opts.cooldown)
        .set_clock(cmd_opts.clock)
        .set_backend(cmd_opts.backend)
}
