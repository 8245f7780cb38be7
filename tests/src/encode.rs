/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use png::{BitDepth, ColorType};
use pngbench_core::{
    decode_pass, encode_pass, run_encode_trials, Backend, BenchErrors, BenchOptions, BlobSource,
    CompressionLevel, Framebuffer, PngHeader
};

use crate::{hash, make_png, sample_png};

fn level(value: u8) -> CompressionLevel {
    CompressionLevel::new(value).unwrap()
}

#[test]
fn encoded_output_decodes_to_same_pixels() {
    let data = sample_png(48, 40, ColorType::Rgba);
    let frame = Framebuffer::from_png(&data).unwrap();

    let mut original = BlobSource::from_vec(data);
    let expected = decode_pass(&mut original, Backend::ImageRs).unwrap();

    for value in [0, 4, 9] {
        let blob = encode_pass(&frame, level(value), Backend::ImageRs).unwrap();

        let mut source = BlobSource::from_vec(blob.into_inner());
        let image = decode_pass(&mut source, Backend::ImageRs).unwrap();

        assert_eq!(hash(&image.pixels), hash(&expected.pixels), "level {value}");
    }
}

#[test]
fn encode_trials_report_last_size() {
    let frame = Framebuffer::from_png(&sample_png(64, 48, ColorType::Rgb)).unwrap();
    let options = BenchOptions::new_fast().set_trials(4);

    let report = run_encode_trials(&frame, level(6), &options).unwrap();

    let size = encode_pass(&frame, level(6), Backend::ImageRs).unwrap().len();
    assert_eq!(report.output_size, Some(size));
    assert_eq!(report.timings_ms.len(), 4);

    let line = report.legacy_line();
    assert!(line.ends_with(&format!(", {size} \n")));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["operation"], "encode");
    assert_eq!(json["level"], 6);
    assert_eq!(json["output_size"], size);
}

#[test]
fn palette_survives_reencoding() {
    let plte = [0, 0, 0, 128, 128, 128, 255, 255, 255];
    let indices = [0_u8, 1, 2, 1, 0, 2, 2, 1, 0];
    let data = make_png(3, 3, ColorType::Indexed, BitDepth::Eight, &indices, Some(&plte), None);

    let frame = Framebuffer::from_png(&data).unwrap();
    assert_eq!(frame.palette(), Some(&plte[..]));

    let blob = encode_pass(&frame, level(9), Backend::ImageRs).unwrap();
    let header = PngHeader::read(blob.as_slice()).unwrap();

    assert_eq!(header.color_type, "indexed");
    assert_eq!(header.palette_entries, 3);
    assert!(!header.has_transparency);

    let back = Framebuffer::from_png(blob.as_slice()).unwrap();
    assert_eq!(back.data(), &indices[..]);
}

#[test]
fn low_bit_depth_stays_packed() {
    // 8 gray pixels per byte, two rows of 16 pixels
    let rows = [0b1010_1010, 0b0101_0101, 0b1111_0000, 0b0000_1111];
    let data = make_png(16, 2, ColorType::Grayscale, BitDepth::One, &rows, None, None);

    let frame = Framebuffer::from_png(&data).unwrap();
    assert_eq!(frame.bit_depth(), BitDepth::One);

    let blob = encode_pass(&frame, level(1), Backend::ImageRs).unwrap();
    let header = PngHeader::read(blob.as_slice()).unwrap();

    assert_eq!(header.bit_depth, 1);
    assert_eq!(Framebuffer::from_png(blob.as_slice()).unwrap().data(), &rows[..]);
}

#[test]
fn zune_cannot_encode() {
    let frame = Framebuffer::from_png(&sample_png(8, 8, ColorType::Rgb)).unwrap();
    let options = BenchOptions::new_fast().set_backend(Backend::Zune);

    let err = run_encode_trials(&frame, level(3), &options).unwrap_err();
    assert!(matches!(err, BenchErrors::Unsupported(_)));
}
