/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::{stdout, Write};
use std::path::PathBuf;

use clap::ArgMatches;
use log::{debug, info};
use pngbench_core::{
    decode_pass, run_decode_trials, run_encode_trials, BenchErrors, BlobSource, ClockKind,
    CompressionLevel, Framebuffer, Stopwatch, TrialReport
};

use crate::cmd_parsers::get_bench_options;
use crate::cmd_parsers::global_options::CmdOptions;
use crate::file_io::{verify_file_paths, write_output};
use crate::probe_files::probe_input_files;

pub(crate) fn run_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), BenchErrors> {
    match args.subcommand() {
        Some(("decode", sub)) => run_decode(sub, cmd_opts),
        Some(("encode", sub)) => run_encode(sub, cmd_opts),
        Some(("dump", sub)) => run_dump(sub, cmd_opts),
        Some(("probe", sub)) => probe_input_files(sub),
        Some((name, _)) => Err(BenchErrors::Generic(format!("Unknown subcommand {name}"))),
        None => Err(BenchErrors::GenericStatic("No subcommand given"))
    }
}

fn required_path<'a>(args: &'a ArgMatches, id: &str) -> Result<&'a PathBuf, BenchErrors> {
    args.get_one::<PathBuf>(id)
        .ok_or_else(|| BenchErrors::Generic(format!("Missing argument <{id}>")))
}

fn run_decode(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), BenchErrors> {
    let image = required_path(args, "image")?;
    let options = get_bench_options(args, cmd_opts);

    debug!("Treating {:?} as a png file", image);
    let mut source = BlobSource::load(image)?;

    let report = run_decode_trials(&mut source, &options)?;
    source.release();

    print_report(&report, cmd_opts.json)
}

fn run_encode(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), BenchErrors> {
    let image = required_path(args, "image")?;
    let level = *args
        .get_one::<CompressionLevel>("level")
        .ok_or(BenchErrors::GenericStatic("Missing argument <level>"))?;
    let options = get_bench_options(args, cmd_opts);

    if !options.get_backend().can_encode() {
        return Err(BenchErrors::Unsupported(
            "zune-png is only benchmarked for decoding"
        ));
    }
    // decoding the input is preparation, not part of any trial
    let mut source = BlobSource::load(image)?;
    let frame = Framebuffer::from_png(source.as_slice())?;
    source.release();

    let report = run_encode_trials(&frame, level, &options)?;

    print_report(&report, cmd_opts.json)
}

fn run_dump(args: &ArgMatches, cmd_opts: &CmdOptions) -> Result<(), BenchErrors> {
    let image = required_path(args, "image")?;
    let output = required_path(args, "output")?;

    verify_file_paths(image, output, cmd_opts.override_files)?;

    let mut source = BlobSource::load(image)?;

    let watch = Stopwatch::start(ClockKind::Wall);
    let decoded = decode_pass(&mut source, cmd_opts.backend)?;
    info!(
        "Decoded {}x{} image with {} channels in {:.3} ms",
        decoded.width,
        decoded.height,
        decoded.channels,
        watch.elapsed_ms()
    );

    write_output(output, &decoded.pixels)
}

fn print_report(report: &TrialReport, json: bool) -> Result<(), BenchErrors> {
    write_report(&mut stdout().lock(), report, json)
}

fn write_report<W: Write>(out: &mut W, report: &TrialReport, json: bool) -> Result<(), BenchErrors> {
    if json {
        let text = serde_json::to_string_pretty(report)
            .map_err(|err| BenchErrors::Generic(err.to_string()))?;
        writeln!(out, "{text}")?;
    } else {
        write!(out, "{}", report.legacy_line())?;
    }
    out.flush()?;
    Ok(())
}
