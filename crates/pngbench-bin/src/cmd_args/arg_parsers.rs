/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValue;
use clap::ValueEnum;
use pngbench_core::{parse_trials, Backend, ClockKind, CompressionLevel};

#[derive(Copy, Clone, Debug)]
pub enum ICodec {
    Png,
    Zune
}

impl ICodec {
    pub const fn to_backend(self) -> Backend {
        match self {
            ICodec::Png => Backend::ImageRs,
            ICodec::Zune => Backend::Zune
        }
    }
}

impl ValueEnum for ICodec {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Png, Self::Zune]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Png => PossibleValue::new("png").help("image-rs png crate"),
            Self::Zune => PossibleValue::new("zune").help("zune-png, decoding only")
        })
    }
}

#[derive(Copy, Clone, Debug)]
pub enum IClock {
    Cpu,
    Wall
}

impl IClock {
    pub const fn to_clock_kind(self) -> ClockKind {
        match self {
            IClock::Cpu => ClockKind::Cpu,
            IClock::Wall => ClockKind::Wall
        }
    }
}

impl ValueEnum for IClock {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Cpu, Self::Wall]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        Some(match self {
            Self::Cpu => PossibleValue::new("cpu"),
            Self::Wall => PossibleValue::new("wall")
        })
    }
}

pub fn parse_level_arg(arg: &str) -> Result<CompressionLevel, String> {
    CompressionLevel::parse(arg).map_err(|err| err.to_string())
}

pub fn parse_trials_arg(arg: &str) -> Result<usize, String> {
    parse_trials(arg).map_err(|err| err.to_string())
}
