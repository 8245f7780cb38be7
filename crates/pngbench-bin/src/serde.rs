use std::ffi::OsString;

use pngbench_core::PngHeader;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata<'a> {
    file:   OsString,
    size:   u64,
    header: &'a PngHeader
}

impl<'a> Metadata<'a> {
    pub fn new(file: OsString, size: u64, header: &'a PngHeader) -> Metadata<'a> {
        Metadata { file, size, header }
    }
}

impl<'a> Serialize for Metadata<'a> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("PngMetadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("header", &self.header)?;

        state.end()
    }
}
