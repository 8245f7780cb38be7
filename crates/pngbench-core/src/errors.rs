/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when preparing or running benchmark trials
use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

/// All errors that can occur while loading inputs,
/// parsing arguments or driving a codec
pub enum BenchErrors {
    /// Underlying I/O error when loading or writing a file
    IoErrors(std::io::Error),
    /// The file could not be opened at all
    CannotOpen(PathBuf, std::io::Error),
    /// The path exists but is not a regular file
    NotAFile(PathBuf),
    /// Fewer bytes than the file length could be read
    ShortRead(usize, usize),
    /// Compression level was not an integer between 0 and 9
    BadCompressionLevel(String),
    /// Trial count was not a valid integer
    BadTrialCount(String),
    /// The `png` crate could not decode the input
    PngDecode(png::DecodingError),
    /// The `png` crate could not encode the framebuffer
    PngEncode(png::EncodingError),
    /// `zune-png` could not decode the input
    ZuneDecode(String),
    /// The requested codec does not support this operation
    Unsupported(&'static str),
    GenericStatic(&'static str),
    Generic(String)
}

impl Debug for BenchErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IoErrors(err) => write!(f, "I/O error: {err}"),
            Self::CannotOpen(path, err) => {
                write!(f, "failed to open file '{}' ({err})", path.display())
            }
            Self::NotAFile(path) => write!(f, "'{}' is not a regular file", path.display()),
            Self::ShortRead(expected, found) => {
                write!(f, "short read, expected {expected} bytes but read {found}")
            }
            Self::BadCompressionLevel(arg) => {
                write!(f, "fatal error: '{arg}' is not a valid integer from 0 to 9")
            }
            Self::BadTrialCount(arg) => write!(f, "fatal error: '{arg}' is not a valid integer"),
            Self::PngDecode(err) => write!(f, "png decoding error: {err}"),
            Self::PngEncode(err) => write!(f, "png encoding error: {err}"),
            Self::ZuneDecode(err) => write!(f, "zune-png decoding error: {}", err.trim_end()),
            Self::Unsupported(what) => write!(f, "unsupported operation: {what}"),
            Self::GenericStatic(val) => write!(f, "{val}"),
            Self::Generic(val) => write!(f, "{val}")
        }
    }
}

impl Display for BenchErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

impl std::error::Error for BenchErrors {}

impl From<std::io::Error> for BenchErrors {
    fn from(value: std::io::Error) -> Self {
        Self::IoErrors(value)
    }
}

impl From<png::DecodingError> for BenchErrors {
    fn from(value: png::DecodingError) -> Self {
        Self::PngDecode(value)
    }
}

impl From<png::EncodingError> for BenchErrors {
    fn from(value: png::EncodingError) -> Self {
        Self::PngEncode(value)
    }
}

impl From<&'static str> for BenchErrors {
    fn from(value: &'static str) -> Self {
        Self::GenericStatic(value)
    }
}

impl From<String> for BenchErrors {
    fn from(value: String) -> Self {
        Self::Generic(value)
    }
}
