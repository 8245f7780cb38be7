/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use png::{BitDepth, ColorType};
use pngbench_core::{
    decode_pass, run_decode_trials, Backend, BenchErrors, BenchOptions, BlobSource, ClockKind,
    DecodedImage, Framebuffer, PngHeader
};

use crate::{hash, make_interlaced_png, make_png, sample_pixels, sample_png, temp_path};

fn decode(data: &[u8], backend: Backend) -> DecodedImage {
    let mut source = BlobSource::from_vec(data.to_vec());
    decode_pass(&mut source, backend).unwrap()
}

#[test]
#[allow(clippy::uninlined_format_args)]
fn backends_agree_on_8bit_images() {
    let colors = [
        (ColorType::Rgb, 4),
        (ColorType::Rgba, 4),
        (ColorType::Grayscale, 2),
        (ColorType::GrayscaleAlpha, 2)
    ];
    let mut error = false;

    for (color, channels) in colors {
        let data = sample_png(61, 37, color);

        let reference = decode(&data, Backend::ImageRs);
        let zune = decode(&data, Backend::Zune);

        assert_eq!(reference.channels, channels);
        assert_eq!(reference.pixels.len(), 61 * 37 * channels);

        if (zune.width, zune.height, zune.channels) != (61, 37, channels)
            || hash(&zune.pixels) != hash(&reference.pixels)
        {
            error = true;
            eprintln!("Mismatch between backends for {:?}", color);
        }
    }
    if error {
        panic!("Backends disagree on decoded pixels");
    }
}

#[test]
fn opaque_images_gain_alpha() {
    let pixels = sample_pixels(9, 5, 3, 7);
    let data = make_png(9, 5, ColorType::Rgb, BitDepth::Eight, &pixels, None, None);

    let image = decode(&data, Backend::ImageRs);
    assert_eq!(image.channels, 4);

    for (rgba, rgb) in image.pixels.chunks_exact(4).zip(pixels.chunks_exact(3)) {
        assert_eq!(&rgba[..3], rgb);
        assert_eq!(rgba[3], 0xFF);
    }
}

#[test]
fn palette_with_transparency_expands_to_rgba() {
    let plte = [255, 0, 0, 0, 255, 0, 0, 0, 255, 10, 20, 30];
    let trns = [0, 128];
    let data = make_png(
        2,
        2,
        ColorType::Indexed,
        BitDepth::Eight,
        &[0, 1, 2, 3],
        Some(&plte),
        Some(&trns)
    );

    for backend in [Backend::ImageRs, Backend::Zune] {
        let image = decode(&data, backend);

        assert_eq!(image.channels, 4);
        assert_eq!(
            image.pixels,
            [255, 0, 0, 0, 0, 255, 0, 128, 0, 0, 255, 255, 10, 20, 30, 255]
        );
    }
}

#[test]
fn gray_transparency_becomes_alpha() {
    // gray level 7 is transparent
    let data = make_png(
        2,
        2,
        ColorType::Grayscale,
        BitDepth::Eight,
        &[7, 100, 7, 200],
        None,
        Some(&[0, 7])
    );

    let image = decode(&data, Backend::ImageRs);
    assert_eq!(image.channels, 2);
    assert_eq!(image.pixels, [7, 0, 100, 255, 7, 0, 200, 255]);

    let zune = decode(&data, Backend::Zune);
    assert_eq!((zune.channels, zune.pixels.len()), (2, 8));
}

#[test]
fn rgb_transparency_becomes_alpha() {
    let data = make_png(
        2,
        1,
        ColorType::Rgb,
        BitDepth::Eight,
        &[10, 20, 30, 1, 2, 3],
        None,
        Some(&[0, 10, 0, 20, 0, 30])
    );

    let image = decode(&data, Backend::ImageRs);
    assert_eq!(image.channels, 4);
    assert_eq!(image.pixels, [10, 20, 30, 0, 1, 2, 3, 255]);

    let zune = decode(&data, Backend::Zune);
    assert_eq!((zune.channels, zune.pixels.len()), (4, 8));
}

/// Unpack `depth` bit gray samples and scale them to 8 bits
fn expand_gray(rows: &[u8], width: usize, depth: u8) -> Vec<u8> {
    let per_byte = 8 / depth as usize;
    let row_bytes = width.div_ceil(per_byte);
    let max = (1_u16 << depth) - 1;
    let mut out = Vec::new();

    for row in rows.chunks_exact(row_bytes) {
        for x in 0..width {
            let byte = row[x / per_byte];
            let shift = 8 - depth as usize * (x % per_byte + 1);
            let value = u16::from(byte >> shift) & max;

            out.push((value * 255 / max) as u8);
            out.push(0xFF);
        }
    }
    out
}

#[test]
fn low_bit_gray_expands_to_eight() {
    let cases: [(u32, BitDepth, u8, &[u8]); 3] = [
        (16, BitDepth::One, 1, &[0xAA, 0x55, 0xF0, 0x0F]),
        (5, BitDepth::Two, 2, &[0b0001_1011, 0b1100_0000, 0b1110_0100, 0b0100_0000]),
        (4, BitDepth::Four, 4, &[0x0F, 0x8A, 0xF0, 0x31])
    ];

    for (width, depth, bits, rows) in cases {
        let data = make_png(width, 2, ColorType::Grayscale, depth, rows, None, None);
        let image = decode(&data, Backend::ImageRs);

        assert_eq!(image.channels, 2);
        assert_eq!(image.pixels, expand_gray(rows, width as usize, bits), "{bits} bit");
    }
    // second row, first pixels of the 1 bit image
    let data = make_png(16, 2, ColorType::Grayscale, BitDepth::One, cases[0].3, None, None);
    let image = decode(&data, Backend::ImageRs);
    assert_eq!(&image.pixels[32..36], [255, 255, 255, 255]);
}

#[test]
fn zune_rejects_low_bit_images() {
    let rows = [0xAA, 0x55, 0xF0, 0x0F];
    let gray = make_png(16, 2, ColorType::Grayscale, BitDepth::One, &rows, None, None);

    let plte = [0, 0, 0, 255, 255, 255];
    let indexed =
        make_png(8, 1, ColorType::Indexed, BitDepth::One, &[0b1010_0101], Some(&plte), None);

    for data in [gray, indexed] {
        let mut source = BlobSource::from_vec(data);
        let err = decode_pass(&mut source, Backend::Zune).unwrap_err();

        assert!(matches!(err, BenchErrors::Unsupported(_)));
    }
}

#[test]
fn interlaced_matches_progressive() {
    let pixels = sample_pixels(13, 9, 3, 11);
    let progressive = make_png(13, 9, ColorType::Rgb, BitDepth::Eight, &pixels, None, None);
    let interlaced = make_interlaced_png(13, 9, ColorType::Rgb, &pixels);

    assert!(PngHeader::read(&interlaced).unwrap().interlaced);

    let expected = decode(&progressive, Backend::ImageRs);
    for backend in [Backend::ImageRs, Backend::Zune] {
        let image = decode(&interlaced, backend);

        assert_eq!((image.width, image.height, image.channels), (13, 9, 4));
        assert_eq!(hash(&image.pixels), hash(&expected.pixels), "{}", backend.name());
    }

    let frame = Framebuffer::from_png(&interlaced).unwrap();
    assert!(frame.is_interlaced());
    assert_eq!(frame.data(), &pixels[..]);
}

#[test]
fn sixteen_bit_is_stripped_to_eight() {
    let pixels = sample_pixels(13, 11, 6, 3);
    let data = make_png(13, 11, ColorType::Rgb, BitDepth::Sixteen, &pixels, None, None);

    let reference = decode(&data, Backend::ImageRs);
    // high byte of every big endian sample
    for (rgba, rgb16) in reference.pixels.chunks_exact(4).zip(pixels.chunks_exact(6)) {
        assert_eq!(&rgba[..3], [rgb16[0], rgb16[2], rgb16[4]]);
        assert_eq!(rgba[3], 0xFF);
    }

    let zune = decode(&data, Backend::Zune);
    assert_eq!((zune.width, zune.height, zune.channels), (13, 11, 4));
    assert_eq!(hash(&zune.pixels), hash(&reference.pixels));
}

#[test]
fn truncated_input_fails() {
    let data = sample_png(50, 50, ColorType::Rgb);
    let half = &data[..data.len() / 2];

    let mut source = BlobSource::from_vec(half.to_vec());
    assert!(decode_pass(&mut source, Backend::ImageRs).is_err());
}

#[test]
fn decode_trials_from_file() {
    let path = temp_path("decode-trials.png");
    std::fs::write(&path, sample_png(32, 32, ColorType::Rgba)).unwrap();

    let mut source = BlobSource::load(&path).unwrap();
    let options = BenchOptions::new_fast()
        .set_trials(3)
        .set_clock(ClockKind::Wall);

    let report = run_decode_trials(&mut source, &options).unwrap();

    assert_eq!(report.timings_ms.len(), 3);
    assert!(report.output_size.is_none());
    assert_eq!(report.summary.unwrap().trials, 3);

    let line = report.legacy_line();
    assert!(line.ends_with(" \n"));
    assert_eq!(line.split_whitespace().count(), 3);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["operation"], "decode");
    assert_eq!(json["codec"], "png");
    assert_eq!(json["clock"], "wall");
    assert!(json.get("level").is_none());

    std::fs::remove_file(path).unwrap();
}

#[test]
fn zero_trials_print_empty_line() {
    let mut source = BlobSource::from_vec(sample_png(4, 4, ColorType::Rgb));
    let options = BenchOptions::new_fast().set_trials(0);

    let report = run_decode_trials(&mut source, &options).unwrap();

    assert!(report.timings_ms.is_empty());
    assert!(report.summary.is_none());
    assert_eq!(report.legacy_line(), "\n");
}
