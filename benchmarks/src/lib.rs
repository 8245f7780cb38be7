/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use png::{BitDepth, ColorType, Encoder};

/// Build an in-memory 8 bit PNG of `width` x `height` pixels.
///
/// Pixels are a gradient with some noise so the deflate stream
/// is neither trivial nor incompressible.
pub fn sample_png(width: u32, height: u32, color: ColorType) -> Vec<u8> {
    let channels = color.samples();
    let mut pixels = vec![0_u8; width as usize * height as usize * channels];

    nanorand::WyRand::new_seed(0x5eed).fill(&mut pixels);

    for (i, pix) in pixels.iter_mut().enumerate() {
        let x = (i / channels) % width as usize;
        *pix = (x as u8).wrapping_add(*pix & 0x0F);
    }

    let mut out = Vec::new();
    {
        let mut encoder = Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(BitDepth::Eight);

        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&pixels).unwrap();
        writer.finish().unwrap();
    }
    out
}
