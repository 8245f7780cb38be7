/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use log::{debug, warn};
use png::{BitDepth, ColorType, Compression, Transformations};
use serde::Serialize;

use crate::blob::{Blob, BlobSource};
use crate::codec::{add_filler, DecodedImage};
use crate::errors::BenchErrors;
use crate::options::CompressionLevel;

/// Decoded rows of an image in the layout the file stores them
///
/// Sub-byte depths stay packed and 16 bit samples stay big endian,
/// which is exactly what the encoder expects back.
#[derive(Clone, Debug)]
pub struct Framebuffer {
    width:      u32,
    height:     u32,
    bit_depth:  BitDepth,
    color_type: ColorType,
    palette:    Option<Vec<u8>>,
    interlaced: bool,
    data:       Vec<u8>
}

impl Framebuffer {
    /// Decode `bytes` without any transformation.
    ///
    /// Interlaced images come out de-interlaced, the flag is kept
    /// only for reporting since the encoder writes progressive rows.
    pub fn from_png(bytes: &[u8]) -> Result<Framebuffer, BenchErrors> {
        let mut decoder = png::Decoder::new(bytes);
        decoder.set_transformations(Transformations::IDENTITY);

        let mut reader = decoder.read_info()?;

        let mut data = vec![0; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut data)?;
        data.truncate(frame.buffer_size());

        let info = reader.info();
        let palette = info.palette.as_ref().map(|palette| palette.to_vec());

        if info.interlaced {
            warn!("Input is interlaced, it will be encoded without interlacing");
        }
        debug!(
            "Framebuffer {}x{} {:?} {:?}, {} bytes",
            frame.width,
            frame.height,
            frame.color_type,
            frame.bit_depth,
            data.len()
        );

        Ok(Framebuffer {
            width: frame.width,
            height: frame.height,
            bit_depth: frame.bit_depth,
            color_type: frame.color_type,
            palette,
            interlaced: info.interlaced,
            data
        })
    }

    /// An 8 bit RGB framebuffer from already interleaved pixels
    ///
    /// # Panics
    /// If `data` is not `width * height * 3` bytes long
    pub fn new_rgb8(width: u32, height: u32, data: Vec<u8>) -> Framebuffer {
        assert_eq!(data.len(), width as usize * height as usize * 3);

        Framebuffer {
            width,
            height,
            bit_depth: BitDepth::Eight,
            color_type: ColorType::Rgb,
            palette: None,
            interlaced: false,
            data
        }
    }

    pub const fn width(&self) -> u32 {
        self.width
    }

    pub const fn height(&self) -> u32 {
        self.height
    }

    pub const fn bit_depth(&self) -> BitDepth {
        self.bit_depth
    }

    pub const fn color_type(&self) -> ColorType {
        self.color_type
    }

    pub fn palette(&self) -> Option<&[u8]> {
        self.palette.as_deref()
    }

    pub const fn is_interlaced(&self) -> bool {
        self.interlaced
    }

    /// Raw rows, top to bottom, without filter bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// Header fields of a png file
#[derive(Clone, Debug, Serialize)]
pub struct PngHeader {
    pub width:            u32,
    pub height:           u32,
    pub bit_depth:        u8,
    pub color_type:       &'static str,
    pub interlaced:       bool,
    pub palette_entries:  usize,
    pub has_transparency: bool
}

impl PngHeader {
    /// Read headers up to the first image data chunk
    pub fn read(bytes: &[u8]) -> Result<PngHeader, BenchErrors> {
        let reader = png::Decoder::new(bytes).read_info()?;
        let info = reader.info();

        Ok(PngHeader {
            width:            info.width,
            height:           info.height,
            bit_depth:        info.bit_depth as u8,
            color_type:       color_type_name(info.color_type),
            interlaced:       info.interlaced,
            palette_entries:  info.palette.as_ref().map_or(0, |p| p.len() / 3),
            has_transparency: info.trns.is_some()
        })
    }
}

const fn color_type_name(color: ColorType) -> &'static str {
    match color {
        ColorType::Grayscale => "grayscale",
        ColorType::Rgb => "rgb",
        ColorType::Indexed => "indexed",
        ColorType::GrayscaleAlpha => "grayscale-alpha",
        ColorType::Rgba => "rgba"
    }
}

/// Map a zlib level onto the presets the `png` crate exposes
pub(crate) const fn compression_for(level: CompressionLevel) -> Compression {
    match level.get() {
        0..=2 => Compression::Fast,
        3..=6 => Compression::Default,
        _ => Compression::Best
    }
}

pub(crate) fn decode(source: &mut BlobSource) -> Result<DecodedImage, BenchErrors> {
    let mut decoder = png::Decoder::new(source);
    // palette and low depths to 8 bits, tRNS to alpha, 16 bits down to 8
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;

    let mut buffer = vec![0; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buffer)?;
    reader.finish()?;

    buffer.truncate(frame.buffer_size());

    let (pixels, channels) = match frame.color_type {
        ColorType::Grayscale => (add_filler(&buffer, 1), 2),
        ColorType::Rgb => (add_filler(&buffer, 3), 4),
        ColorType::GrayscaleAlpha => (buffer, 2),
        ColorType::Rgba => (buffer, 4),
        ColorType::Indexed => {
            return Err(BenchErrors::GenericStatic(
                "Palette was not expanded by the decoder"
            ))
        }
    };

    Ok(DecodedImage {
        width: frame.width as usize,
        height: frame.height as usize,
        channels,
        pixels
    })
}

pub(crate) fn encode(frame: &Framebuffer, level: CompressionLevel) -> Result<Blob, BenchErrors> {
    let mut blob = Blob::new();
    {
        let mut encoder = png::Encoder::new(&mut blob, frame.width, frame.height);

        encoder.set_color(frame.color_type);
        encoder.set_depth(frame.bit_depth);
        encoder.set_compression(compression_for(level));

        if let Some(palette) = frame.palette() {
            encoder.set_palette(palette);
        }
        let mut writer = encoder.write_header()?;

        writer.write_image_data(&frame.data)?;
        writer.finish()?;
    }
    Ok(blob)
}
