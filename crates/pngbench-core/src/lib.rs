/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Core routines for timing PNG codecs
//!
//! This crate contains the pieces shared by the `pngbench` drivers
//!
//! - An in-memory [`Blob`] sink and [`BlobSource`] source, used as the codec's
//!   output and input hooks so that no file I/O happens inside a timed trial.
//! - A [`Stopwatch`] over either process cpu time or a monotonic wall clock.
//! - Decode and encode passes over the external codecs (the `png` crate and `zune-png`).
//! - Trial loops and the resulting [`TrialReport`].
//!
//! # Usage
//!
//!```no_run
//! use pngbench_core::{run_decode_trials, BenchOptions, BlobSource};
//!
//! let mut source = BlobSource::load("image.png").unwrap();
//! let options = BenchOptions::default().set_trials(10);
//!
//! let report = run_decode_trials(&mut source, &options).unwrap();
//! print!("{}", report.legacy_line());
//!```
//!
//! The compression side needs the image as a framebuffer first, that step is not timed.
//!
//!```no_run
//! use pngbench_core::{run_encode_trials, BenchOptions, CompressionLevel, Framebuffer};
//!
//! let bytes = std::fs::read("image.png").unwrap();
//! let frame = Framebuffer::from_png(&bytes).unwrap();
//! let level = CompressionLevel::parse("9").unwrap();
//!
//! let report = run_encode_trials(&frame, level, &BenchOptions::default()).unwrap();
//! print!("{}", report.legacy_line());
//!```

pub use blob::{Blob, BlobSource};
pub use clock::{ClockKind, Stopwatch};
pub use codec::{decode_pass, encode_pass, Backend, DecodedImage, Framebuffer, PngHeader};
pub use errors::BenchErrors;
pub use options::{parse_trials, BenchOptions, CompressionLevel};
pub use report::{Operation, Summary, TrialReport};
pub use trial::{run_decode_trials, run_encode_trials};

pub mod blob;
mod clock;
pub mod codec;
pub mod errors;
mod options;
mod report;
mod trial;
