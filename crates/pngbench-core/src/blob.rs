/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! In-memory byte buffers handed to codecs as their I/O hooks
//!
//! The encoder writes into a [`Blob`] and the decoder reads from a [`BlobSource`],
//! so a timed trial never touches the file system.
//!
//! Both implement the `std::io` traits, which is all the codecs need to
//! use them in place of a file.
use std::fs::File;
use std::io::{BufRead, Read, Write};
use std::path::Path;

use log::trace;

use crate::errors::BenchErrors;

/// Bytes added on top of the half-capacity step whenever a [`Blob`] grows.
const GROWTH_PAD: usize = 16;

/// Return the capacity a blob holding `capacity` bytes should grow to
/// in order to fit `required` bytes.
///
/// Capacity grows by half of itself plus [`GROWTH_PAD`] until it fits, so
/// an empty blob steps through `16, 40, 76, 130, ...`
///
/// ```
/// use pngbench_core::blob::grown_capacity;
/// assert_eq!(grown_capacity(0, 1), 16);
/// assert_eq!(grown_capacity(0, 17), 40);
/// assert_eq!(grown_capacity(40, 40), 40);
/// ```
pub const fn grown_capacity(capacity: usize, required: usize) -> usize {
    let mut capacity = capacity;

    while capacity < required {
        capacity += (capacity >> 1) + GROWTH_PAD;
    }
    capacity
}

/// A growable sink for encoder output
///
/// Writes always succeed and always consume the whole input,
/// the buffer grows geometrically as described in [`grown_capacity`]
///
/// # Example
/// ```
/// use std::io::Write;
/// use pngbench_core::Blob;
///
/// let mut blob = Blob::new();
/// blob.write_all(b"\x89PNG").unwrap();
///
/// assert_eq!(blob.len(), 4);
/// assert_eq!(blob.capacity(), 16);
/// ```
#[derive(Default, Debug)]
pub struct Blob {
    buffer:   Vec<u8>,
    capacity: usize
}

impl Blob {
    /// Create an empty blob with no allocated storage
    pub const fn new() -> Blob {
        Blob {
            buffer:   Vec::new(),
            capacity: 0
        }
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Capacity as tracked by the growth policy.
    ///
    /// The allocator may hand out more than this, the value here is the
    /// one the policy asked for.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// The bytes written so far
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    /// Append `data` to the end of the blob, growing it if needed
    pub fn write_bytes(&mut self, data: &[u8]) {
        let total = self.buffer.len() + data.len();

        if total > self.capacity {
            let new_capacity = grown_capacity(self.capacity, total);

            trace!("Growing blob from {} to {} bytes", self.capacity, new_capacity);

            self.buffer.reserve_exact(new_capacity - self.buffer.len());
            self.capacity = new_capacity;
        }
        self.buffer.extend_from_slice(data);
    }

    /// Free the storage and reset the blob to its empty state
    pub fn release(&mut self) {
        self.buffer = Vec::new();
        self.capacity = 0;
    }

    /// Consume the blob returning the written bytes
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }
}

impl Write for Blob {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.write_bytes(buf);
        Ok(buf.len())
    }

    fn write_all(&mut self, buf: &[u8]) -> std::io::Result<()> {
        self.write_bytes(buf);
        Ok(())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        // nothing buffered outside the blob itself
        Ok(())
    }
}

/// An in-memory copy of an input file that decoders read from
///
/// The source keeps a count of unread bytes, [`reload`](Self::reload)
/// resets it so the same bytes can be decoded again in the next trial.
///
/// # Example
/// ```
/// use std::io::Read;
/// use pngbench_core::BlobSource;
///
/// let mut source = BlobSource::from_vec(vec![1, 2, 3]);
/// let mut out = Vec::new();
///
/// source.read_to_end(&mut out).unwrap();
/// assert_eq!(out, [1, 2, 3]);
/// assert_eq!(source.remaining().len(), 0);
///
/// source.reload();
/// assert_eq!(source.remaining(), &[1, 2, 3]);
/// ```
#[derive(Debug, Clone)]
pub struct BlobSource {
    buffer: Vec<u8>,
    count:  usize
}

impl BlobSource {
    /// Read the whole of the file at `path` into memory.
    ///
    /// The path must resolve to a regular file, directories, pipes
    /// and devices are rejected since their size cannot be known upfront.
    ///
    /// # Errors
    /// - [`BenchErrors::CannotOpen`] if the file cannot be opened
    /// - [`BenchErrors::NotAFile`] if it is not a regular file
    /// - [`BenchErrors::ShortRead`] if fewer bytes than the file length were read
    pub fn load<P: AsRef<Path>>(path: P) -> Result<BlobSource, BenchErrors> {
        let path = path.as_ref();

        let file =
            File::open(path).map_err(|err| BenchErrors::CannotOpen(path.to_path_buf(), err))?;

        // metadata of the open handle, symlinks are already resolved here
        let metadata = file.metadata()?;

        if !metadata.is_file() {
            return Err(BenchErrors::NotAFile(path.to_path_buf()));
        }
        let size = usize::try_from(metadata.len())
            .map_err(|_| BenchErrors::GenericStatic("File too large to fit in memory"))?;

        let mut buffer = Vec::with_capacity(size);
        let found = file.take(size as u64).read_to_end(&mut buffer)?;

        if found != size {
            return Err(BenchErrors::ShortRead(size, found));
        }
        trace!("Loaded {} bytes from {:?}", size, path);

        Ok(BlobSource::from_vec(buffer))
    }

    /// Create a source over bytes already in memory
    pub fn from_vec(buffer: Vec<u8>) -> BlobSource {
        let count = buffer.len();

        BlobSource { buffer, count }
    }

    /// Total number of bytes held
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Rewind to the start of the buffer
    pub fn reload(&mut self) {
        self.count = self.buffer.len();
    }

    /// Bytes not yet handed out to a reader
    pub fn remaining(&self) -> &[u8] {
        &self.buffer[self.position()..]
    }

    /// The whole buffer regardless of the read position
    pub fn as_slice(&self) -> &[u8] {
        &self.buffer
    }

    fn position(&self) -> usize {
        self.buffer.len() - self.count
    }

    /// Free the storage, the source becomes empty
    pub fn release(&mut self) {
        self.buffer = Vec::new();
        self.count = 0;
    }
}

impl Read for BlobSource {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let size = buf.len().min(self.count);
        let start = self.position();

        buf[..size].copy_from_slice(&self.buffer[start..start + size]);
        self.count -= size;

        Ok(size)
    }
}

impl BufRead for BlobSource {
    fn fill_buf(&mut self) -> std::io::Result<&[u8]> {
        Ok(self.remaining())
    }

    fn consume(&mut self, amt: usize) {
        self.count -= amt.min(self.count);
    }
}
