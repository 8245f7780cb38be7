/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The codec passes timed by a trial
//!
//! A pass is everything from creating the codec's context to tearing it down,
//! the trial loops wrap exactly one pass in a stopwatch.
//!
//! Decoding normalizes every image to 8 bit samples with an alpha channel,
//! grayscale images stay grayscale, so the output is either gray+alpha or RGBA.
//!
//! Encoding writes the framebuffer back out in its native layout
//! (same depth, colour type and palette) into a [`Blob`].
use serde::Serialize;

use crate::blob::{Blob, BlobSource};
use crate::errors::BenchErrors;
use crate::options::CompressionLevel;

mod image_rs;
mod zune;

pub use image_rs::{Framebuffer, PngHeader};

/// External codec library driven by the trials
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub enum Backend {
    /// The `png` crate from image-rs
    #[default]
    #[serde(rename = "png")]
    ImageRs,
    /// `zune-png`, decode only
    #[serde(rename = "zune")]
    Zune
}

impl Backend {
    pub const fn name(self) -> &'static str {
        match self {
            Backend::ImageRs => "png",
            Backend::Zune => "zune"
        }
    }

    /// Whether this codec can write images
    pub const fn can_encode(self) -> bool {
        matches!(self, Backend::ImageRs)
    }
}

/// Pixels produced by a decode pass
#[derive(Clone, Debug)]
pub struct DecodedImage {
    pub width:    usize,
    pub height:   usize,
    /// 2 for gray+alpha, 4 for RGBA
    pub channels: usize,
    pub pixels:   Vec<u8>
}

/// Run one full decode of the bytes left in `source`.
///
/// The source is consumed, callers running several passes
/// should [`reload`](BlobSource::reload) it in between.
pub fn decode_pass(source: &mut BlobSource, backend: Backend) -> Result<DecodedImage, BenchErrors> {
    match backend {
        Backend::ImageRs => image_rs::decode(source),
        Backend::Zune => zune::decode(source)
    }
}

/// Run one full encode of `frame` into a fresh [`Blob`]
pub fn encode_pass(
    frame: &Framebuffer, level: CompressionLevel, backend: Backend
) -> Result<Blob, BenchErrors> {
    match backend {
        Backend::ImageRs => image_rs::encode(frame, level),
        Backend::Zune => Err(BenchErrors::Unsupported(
            "zune-png is only benchmarked for decoding"
        ))
    }
}

/// Append an opaque alpha sample after every pixel of an image
/// with `channels` samples per pixel.
pub(crate) fn add_filler(pixels: &[u8], channels: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(pixels.len() / channels * (channels + 1));

    for pixel in pixels.chunks_exact(channels) {
        out.extend_from_slice(pixel);
        out.push(0xFF);
    }
    out
}
