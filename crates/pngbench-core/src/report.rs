/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::Write;

use serde::Serialize;

use crate::clock::ClockKind;
use crate::codec::Backend;
use crate::options::CompressionLevel;

/// What a set of trials measured
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Decode,
    Encode
}

/// Timings collected by a trial loop
#[derive(Clone, Debug, Serialize)]
pub struct TrialReport {
    pub operation:   Operation,
    pub codec:       Backend,
    pub clock:       ClockKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level:       Option<CompressionLevel>,
    /// Duration of every trial in milliseconds, in the order they ran
    pub timings_ms:  Vec<f64>,
    /// Encoded size of the last trial
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_size: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary:     Option<Summary>
}

impl TrialReport {
    pub(crate) fn new(
        operation: Operation, codec: Backend, clock: ClockKind, trials: usize
    ) -> TrialReport {
        TrialReport {
            operation,
            codec,
            clock,
            level: None,
            timings_ms: Vec::with_capacity(trials),
            output_size: None,
            summary: None
        }
    }

    /// Fill in [`summary`](Self::summary) from the recorded timings
    pub(crate) fn finish(mut self) -> TrialReport {
        self.summary = Summary::from_timings(&self.timings_ms);
        self
    }

    /// The line the drivers print on standard output.
    ///
    /// Times are printed with six decimals each followed by a space, encoding
    /// replaces the space after the last time with `, <size> `.
    ///
    /// ```
    /// use pngbench_core::{Backend, ClockKind, Operation, TrialReport};
    ///
    /// let report = TrialReport {
    ///     operation:   Operation::Encode,
    ///     codec:       Backend::ImageRs,
    ///     clock:       ClockKind::Cpu,
    ///     level:       None,
    ///     timings_ms:  vec![1.5, 2.25],
    ///     output_size: Some(1024),
    ///     summary:     None
    /// };
    /// assert_eq!(report.legacy_line(), "1.500000 2.250000, 1024 \n");
    /// ```
    pub fn legacy_line(&self) -> String {
        let mut line = String::new();
        let last = self.timings_ms.len().saturating_sub(1);

        for (trial, time) in self.timings_ms.iter().enumerate() {
            // writing into a String cannot fail
            let _ = write!(line, "{time:.6}");

            match (self.operation, self.output_size) {
                (Operation::Encode, Some(size)) if trial == last => {
                    let _ = write!(line, ", {size} ");
                }
                _ => line.push(' ')
            }
        }
        line.push('\n');
        line
    }
}

/// Statistics over a non-empty list of trial timings
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct Summary {
    pub trials: usize,
    pub min:    f64,
    pub max:    f64,
    pub mean:   f64,
    /// Upper median, `sorted[n / 2]`
    pub median: f64,
    /// Population standard deviation
    pub stddev: f64
}

impl Summary {
    /// Returns `None` when there are no timings
    pub fn from_timings(timings: &[f64]) -> Option<Summary> {
        if timings.is_empty() {
            return None;
        }
        let mut sorted = timings.to_vec();
        sorted.sort_by(f64::total_cmp);

        let trials = sorted.len();
        let mean = sorted.iter().sum::<f64>() / trials as f64;
        let variance = sorted.iter().map(|t| (t - mean) * (t - mean)).sum::<f64>() / trials as f64;

        Some(Summary {
            trials,
            min: sorted[0],
            max: sorted[trials - 1],
            mean,
            median: sorted[trials / 2],
            stddev: variance.sqrt()
        })
    }
}
