/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Trial loops
//!
//! Every trial sleeps for the configured cooldown first, then times exactly one
//! codec pass, from context creation to teardown.
use std::hint::black_box;
use std::thread::sleep;

use log::{debug, info};

use crate::blob::BlobSource;
use crate::clock::Stopwatch;
use crate::codec::{decode_pass, encode_pass, Framebuffer};
use crate::errors::BenchErrors;
use crate::options::{BenchOptions, CompressionLevel};
use crate::report::{Operation, TrialReport};

fn cooldown(options: &BenchOptions) {
    let pause = options.get_cooldown();

    if !pause.is_zero() {
        sleep(pause);
    }
}

/// Decode the contents of `source` `options.get_trials()` times
///
/// The source is rewound before every trial.
pub fn run_decode_trials(
    source: &mut BlobSource, options: &BenchOptions
) -> Result<TrialReport, BenchErrors> {
    let trials = options.get_trials();
    let backend = options.get_backend();

    info!(
        "Running {} decode trials of {} bytes with {}",
        trials,
        source.capacity(),
        backend.name()
    );
    let mut report = TrialReport::new(Operation::Decode, backend, options.get_clock(), trials);

    for trial in 0..trials {
        cooldown(options);
        source.reload();

        let watch = Stopwatch::start(options.get_clock());
        let image = decode_pass(source, backend)?;
        let elapsed = watch.elapsed_ms();

        black_box(&image);
        debug!(
            "Trial {}: decoded {}x{}x{} in {:.6} ms ({:?} clock)",
            trial,
            image.width,
            image.height,
            image.channels,
            elapsed,
            watch.kind()
        );
        report.timings_ms.push(elapsed);
    }
    Ok(report.finish())
}

/// Encode `frame` at `level` `options.get_trials()` times
///
/// Each trial writes into a fresh blob, the size reported is the
/// one produced by the last trial.
pub fn run_encode_trials(
    frame: &Framebuffer, level: CompressionLevel, options: &BenchOptions
) -> Result<TrialReport, BenchErrors> {
    let trials = options.get_trials();
    let backend = options.get_backend();

    if !backend.can_encode() {
        return Err(BenchErrors::Unsupported(
            "zune-png is only benchmarked for decoding"
        ));
    }
    info!(
        "Running {} encode trials of a {}x{} image at level {} with {}",
        trials,
        frame.width(),
        frame.height(),
        level.get(),
        backend.name()
    );
    if frame.is_interlaced() {
        info!("Interlaced input, trials write progressive rows");
    }
    let mut report = TrialReport::new(Operation::Encode, backend, options.get_clock(), trials);
    report.level = Some(level);

    for trial in 0..trials {
        cooldown(options);

        let watch = Stopwatch::start(options.get_clock());
        let mut blob = encode_pass(frame, level, backend)?;
        let elapsed = watch.elapsed_ms();

        debug!(
            "Trial {}: encoded {} bytes (capacity {}) in {:.6} ms ({:?} clock)",
            trial,
            blob.len(),
            blob.capacity(),
            elapsed,
            watch.kind()
        );
        report.timings_ms.push(elapsed);
        report.output_size = Some(blob.len());

        blob.release();
    }
    Ok(report.finish())
}
