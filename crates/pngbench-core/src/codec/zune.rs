/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::io::BufRead;

use zune_png::zune_core::options::DecoderOptions;
use zune_png::PngDecoder;

use crate::blob::BlobSource;
use crate::codec::DecodedImage;
use crate::errors::BenchErrors;

pub(crate) fn decode(source: &mut BlobSource) -> Result<DecodedImage, BenchErrors> {
    // same output layout as the png crate path, 8 bit samples with alpha
    let options = DecoderOptions::default()
        .png_set_strip_to_8bit(true)
        .png_set_add_alpha_channel(true);

    let data = source.fill_buf()?;
    let consumed = data.len();

    if header_bit_depth(data).is_some_and(|depth| depth < 8) {
        return Err(BenchErrors::Unsupported(
            "zune-png does not expand images below 8 bits per sample"
        ));
    }

    let mut decoder = PngDecoder::new_with_options(data, options);

    let pixels = decoder
        .decode_raw()
        .map_err(|err| BenchErrors::ZuneDecode(format!("{err:?}")))?;

    let (width, height) = decoder
        .get_dimensions()
        .ok_or(BenchErrors::GenericStatic("zune-png did not report dimensions"))?;

    let area = width * height;
    if area == 0 || pixels.len() % area != 0 {
        return Err(BenchErrors::Generic(format!(
            "Decoded {} bytes for a {width}x{height} image",
            pixels.len()
        )));
    }
    let channels = pixels.len() / area;

    drop(decoder);
    source.consume(consumed);

    Ok(DecodedImage {
        width,
        height,
        channels,
        pixels
    })
}

/// Bit depth from the IHDR chunk, which must directly follow the signature
fn header_bit_depth(data: &[u8]) -> Option<u8> {
    if data.get(12..16)? != b"IHDR" {
        return None;
    }
    data.get(24).copied()
}
