/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::{Path, PathBuf};

use clap::ArgMatches;
use log::warn;
use pngbench_core::{BenchErrors, BlobSource, PngHeader};

use crate::serde::Metadata;

/// Probe input files, extract header information, and print to standard output.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), BenchErrors> {
    let Some(files) = args.get_many::<PathBuf>("images") else {
        return Ok(());
    };
    let mut failed = 0;

    for in_file in files {
        match probe_file(in_file) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                warn!("Could not probe {:?}: {}", in_file, err);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        return Err(BenchErrors::Generic(format!("{failed} file(s) could not be probed")));
    }
    Ok(())
}

fn probe_file(in_file: &Path) -> Result<String, BenchErrors> {
    let source = BlobSource::load(in_file)?;
    let header = PngHeader::read(source.as_slice())?;

    let metadata = Metadata::new(
        in_file.as_os_str().to_os_string(),
        source.capacity() as u64,
        &header
    );
    serde_json::to_string_pretty(&metadata).map_err(|err| BenchErrors::Generic(err.to_string()))
}
