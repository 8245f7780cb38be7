/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::time::{Duration, Instant};

use log::warn;
use serde::Serialize;

/// Which clock a trial is measured with
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ClockKind {
    /// Cpu time consumed by the whole process
    #[default]
    Cpu,
    /// Monotonic wall clock time
    Wall
}

/// A started measurement
pub struct Stopwatch {
    kind: ClockKind,
    wall: Instant,
    /// Process cpu time at start, `None` when timing with the wall clock
    cpu:  Option<Duration>
}

impl Stopwatch {
    pub fn start(kind: ClockKind) -> Stopwatch {
        let cpu = match kind {
            ClockKind::Cpu => {
                let start = process_cpu_time();
                if start.is_none() {
                    warn!("Process cpu time is not available, using the wall clock");
                }
                start
            }
            ClockKind::Wall => None
        };
        Stopwatch {
            kind,
            wall: Instant::now(),
            cpu
        }
    }

    /// Clock this stopwatch was asked to use
    pub const fn kind(&self) -> ClockKind {
        self.kind
    }

    /// Time since [`start`](Self::start) was called
    pub fn elapsed(&self) -> Duration {
        match self.cpu {
            Some(start) => cpu_elapsed(start, process_cpu_time(), self.wall),
            None => self.wall.elapsed()
        }
    }

    /// Time since [`start`](Self::start) was called, in milliseconds
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1000.0
    }
}

fn cpu_elapsed(start: Duration, now: Option<Duration>, wall: Instant) -> Duration {
    match now {
        Some(now) => now.saturating_sub(start),
        None => {
            warn!("Reading process cpu time failed, reporting wall clock time");
            wall.elapsed()
        }
    }
}

#[cfg(unix)]
fn process_cpu_time() -> Option<Duration> {
    let mut time = libc::timespec {
        tv_sec:  0,
        tv_nsec: 0
    };
    // SAFETY: `time` is a valid, writable timespec for the duration of the call
    let status = unsafe { libc::clock_gettime(libc::CLOCK_PROCESS_CPUTIME_ID, &mut time) };

    if status != 0 {
        return None;
    }
    let secs = u64::try_from(time.tv_sec).ok()?;
    let nanos = u32::try_from(time.tv_nsec).ok()?;

    Some(Duration::new(secs, nanos))
}

#[cfg(not(unix))]
fn process_cpu_time() -> Option<Duration> {
    None
}
