/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{canonicalize, OpenOptions};
use std::io::{stdin, BufRead, BufWriter, Write};
use std::path::Path;

use log::info;
use pngbench_core::BenchErrors;

/// Check that `input` can be read and `output` may be written,
/// asking on the terminal before replacing an existing output
/// unless `override_files` is set.
pub fn verify_file_paths(
    input: &Path, output: &Path, override_files: bool
) -> Result<(), BenchErrors> {
    if input == output {
        return Err(BenchErrors::Generic(format!(
            "Cannot use {:?} as both input and output",
            input
        )));
    }
    if !input.exists() {
        return Err(BenchErrors::Generic(format!(
            "Path {:?}, does not exist",
            input
        )));
    }
    if !input.is_file() {
        return Err(BenchErrors::NotAFile(input.to_path_buf()));
    }

    if output.exists() {
        // different spellings or links may still name the input
        if canonicalize(input)? == canonicalize(output)? {
            return Err(BenchErrors::Generic(format!(
                "Output {:?} is the same file as input {:?}",
                output, input
            )));
        }
        if override_files {
            info!("Overwriting path {:?} ", output);
        } else {
            println!("File {:?} exists, overwrite [y/N]", output);
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(BenchErrors::Generic(format!(
                    "Not overwriting file {:?}",
                    output
                )));
            }
        }
    }
    Ok(())
}

/// Write `bytes` to `path`, truncating anything already there
pub fn write_output(path: &Path, bytes: &[u8]) -> Result<(), BenchErrors> {
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    writer.write_all(bytes)?;
    writer.flush()?;

    info!("Wrote {} bytes to {:?}", bytes.len(), path);
    Ok(())
}
