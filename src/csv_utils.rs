//! CSV deserialization utilities for seed ingestion.

use serde::de::DeserializeOwned;
use std::io::Read;

/// Creates an iterator that reads CSV records (with a header row) from
/// any reader. Each record is deserialized into type T.
pub fn read_csv<T, R>(reader: R) -> impl Iterator<Item = csv::Result<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader)
        .into_deserialize()
}
