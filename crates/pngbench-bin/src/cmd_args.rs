/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

use crate::cmd_args::arg_parsers::{parse_level_arg, parse_trials_arg, IClock, ICodec};
use crate::cmd_args::help_strings::{CLOCK_HELP, COOLDOWN_HELP, DUMP_HELP, ENCODE_HELP};

pub mod arg_parsers;
pub mod help_strings;

fn image_arg() -> Arg {
    Arg::new("image")
        .help("PNG file to benchmark")
        .required(true)
        .value_parser(value_parser!(PathBuf))
}

fn trials_arg() -> Arg {
    Arg::new("trials")
        .help("Number of timed trials to run")
        .required(true)
        .allow_hyphen_values(true)
        .value_parser(parse_trials_arg)
}

#[rustfmt::skip]
fn decode_cmd() -> Command {
    Command::new("decode")
        .about("Time decoding of a png file held in memory")
        .arg(image_arg())
        .arg(trials_arg())
}

#[rustfmt::skip]
fn encode_cmd() -> Command {
    Command::new("encode")
        .about("Time encoding of a decoded png framebuffer into memory")
        .long_about(ENCODE_HELP)
        .arg(Arg::new("level")
            .help("Compression level, 0 ... 9")
            .required(true)
            .allow_hyphen_values(true)
            .value_parser(parse_level_arg))
        .arg(image_arg())
        .arg(trials_arg())
}

#[rustfmt::skip]
fn dump_cmd() -> Command {
    Command::new("dump")
        .about("Decode a png once and write the raw pixels to a file")
        .long_about(DUMP_HELP)
        .arg(image_arg())
        .arg(Arg::new("output")
            .help("File to write the framebuffer to")
            .required(true)
            .value_parser(value_parser!(PathBuf)))
}

#[rustfmt::skip]
fn probe_cmd() -> Command {
    Command::new("probe")
        .about("Print header information of png files as json")
        .arg(Arg::new("images")
            .help("PNG files to inspect")
            .required(true)
            .num_args(1..)
            .action(ArgAction::Append)
            .value_parser(value_parser!(PathBuf)))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pngbench")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Micro-benchmarks for png encoding and decoding latency")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(decode_cmd())
        .subcommand(encode_cmd())
        .subcommand(dump_cmd())
        .subcommand(probe_cmd())
        .arg(Arg::new("codec")
            .long("codec")
            .global(true)
            .help_heading("BENCHMARK")
            .help("Codec library to benchmark")
            .default_value("png")
            .value_parser(value_parser!(ICodec)))
        .arg(Arg::new("clock")
            .long("clock")
            .global(true)
            .help_heading("BENCHMARK")
            .help("Clock used to time trials")
            .long_help(CLOCK_HELP)
            .default_value("cpu")
            .value_parser(value_parser!(IClock)))
        .arg(Arg::new("cooldown-ms")
            .long("cooldown-ms")
            .global(true)
            .help_heading("BENCHMARK")
            .help("Milliseconds to sleep before every trial")
            .long_help(COOLDOWN_HELP)
            .default_value("100")
            .value_parser(value_parser!(u64)))
        .arg(Arg::new("json")
            .long("json")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("OUTPUT")
            .help("Print the report and summary statistics as json"))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("OUTPUT")
            .help("Overwrite existing output files without asking"))
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the benchmark setup"))
}
