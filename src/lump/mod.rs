//! Generic lump decoding: stride lookup, slicing, ordered record output.
//!
//! Every record kind in a BSP container follows the same recipe.  Pick a
//! byte stride by dialect, cut the lump into stride-sized pieces, decode each
//! piece at dialect-specific offsets.  [`LumpObject`] is that recipe's seam;
//! [`decode_lump`] and [`lump_index`] are written once against it.
//!
//! ```
//! use bsplump::{BrushSide, MapType};
//! use bsplump::lump::{decode_lump, DecodeOptions};
//!
//! let data = [0x05, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF];
//! let sides = decode_lump::<BrushSide>(&data, MapType::Quake3, &DecodeOptions::default())?;
//! assert_eq!(sides[0].plane, 5);
//! assert_eq!(sides[0].texture, -1);
//! # Ok::<(), bsplump::lump::LumpError>(())
//! ```

pub mod parallel;

use std::ops::Deref;

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::map_type::MapType;

/// Record count at which [`decode_lump`] switches to the rayon path
/// (only with the `parallel` feature).
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

// ── Error type ───────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LumpError {
    /// The dialect is unknown, or known but has no decoder for this record
    /// kind.  Raised before any record byte is read.
    #[error("Unsupported format '{map_type}' for {kind}")]
    UnsupportedFormat { map_type: String, kind: &'static str },
    /// A single-record slice does not match the dialect's stride.
    #[error("Invalid input for {kind}: expected {expected} bytes, got {found}")]
    InvalidInput { kind: &'static str, expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, LumpError>;

// ── LumpObject trait ─────────────────────────────────────────────────────────

/// A fixed-stride record kind whose layout depends on the map dialect.
///
/// `version` is the container's format-version field.  It is passed through
/// every call so a dialect can refine its layout by version later; no current
/// implementation reads it.
pub trait LumpObject: Sized + Send {
    /// Human-readable record kind, for errors and logs.
    const NAME: &'static str;

    /// Byte length of one record.
    fn struct_length(map_type: MapType, version: i32) -> Result<usize>;

    /// Directory slot of this kind's lump.  `Ok(None)` when the dialect has no
    /// such lump.
    fn lump_index(map_type: MapType, version: i32) -> Result<Option<usize>>;

    /// Decode one record from exactly `struct_length` bytes.
    fn from_bytes(data: &[u8], map_type: MapType, version: i32) -> Result<Self>;
}

// ── DecodeOptions ────────────────────────────────────────────────────────────

/// Configuration for [`decode_lump`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeOptions {
    /// Container format version.  Reserved; accepted and forwarded but does
    /// not change any layout today.
    pub version:            i32,
    /// Minimum record count before records are decoded on the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            version:            0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl DecodeOptions {
    pub fn with_version(version: i32) -> Self {
        Self { version, ..Self::default() }
    }
}

// ── Lump ─────────────────────────────────────────────────────────────────────

/// Decoded records of one lump, in file order.
///
/// A record's position is its identity: other lumps refer to records by
/// ordinal, so the order here is exactly the order in the source bytes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lump<T> {
    map_type:       MapType,
    records:        Vec<T>,
    trailing_bytes: usize,
}

impl<T> Lump<T> {
    pub fn map_type(&self) -> MapType { self.map_type }

    /// Bytes past the last whole record that were dropped while decoding.
    pub fn trailing_bytes(&self) -> usize { self.trailing_bytes }

    pub fn as_slice(&self) -> &[T] { &self.records }

    pub fn into_vec(self) -> Vec<T> { self.records }
}

impl<T: Serialize> Lump<T> {
    /// JSON dump of the records (diagnostics only).
    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.records)
    }
}

impl<T> Deref for Lump<T> {
    type Target = [T];
    fn deref(&self) -> &[T] { &self.records }
}

impl<T> IntoIterator for Lump<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;
    fn into_iter(self) -> Self::IntoIter { self.records.into_iter() }
}

impl<'a, T> IntoIterator for &'a Lump<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter { self.records.iter() }
}

// ── Decoding ─────────────────────────────────────────────────────────────────

/// Decode a whole lump of `T` records.
///
/// The record count is `data.len() / stride`.  A short trailing partial
/// record is dropped, not reported as an error.  The only failure is an
/// unsupported `map_type`, which is detected before any record is read.
pub fn decode_lump<T: LumpObject>(
    data:     &[u8],
    map_type: MapType,
    opts:     &DecodeOptions,
) -> Result<Lump<T>> {
    let stride = T::struct_length(map_type, opts.version)?;
    // A zero stride from a LumpObject impl would divide by zero below.
    if stride == 0 {
        return Err(LumpError::UnsupportedFormat {
            map_type: map_type.name().to_owned(),
            kind:     T::NAME,
        });
    }

    let count          = data.len() / stride;
    let trailing_bytes = data.len() % stride;
    debug!(
        "Decoding {count} {} record(s) of {stride} B from {} B {map_type} lump",
        T::NAME,
        data.len(),
    );
    if trailing_bytes != 0 {
        debug!("Dropping {trailing_bytes} trailing byte(s) after the last whole {}", T::NAME);
    }

    let records = parallel::decode_records(&data[..count * stride], stride, map_type, opts)?;
    Ok(Lump { map_type, records, trailing_bytes })
}

/// Directory slot holding `T`'s lump in `map_type`.
///
/// `Ok(None)`: the dialect has no such lump.  `Err(UnsupportedFormat)`: the
/// dialect is not decodable for `T`.  Callers must keep the two apart.
pub fn lump_index<T: LumpObject>(map_type: MapType, version: i32) -> Result<Option<usize>> {
    T::lump_index(map_type, version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brush_side::BrushSide;

    #[test]
    fn empty_lump_decodes_to_nothing() {
        let lump = decode_lump::<BrushSide>(&[], MapType::Quake3, &DecodeOptions::default()).unwrap();
        assert!(lump.is_empty());
        assert_eq!(lump.trailing_bytes(), 0);
    }

    #[test]
    fn short_lump_is_all_trailing() {
        let lump = decode_lump::<BrushSide>(&[1, 2, 3], MapType::Quake2, &DecodeOptions::default()).unwrap();
        assert_eq!(lump.len(), 0);
        assert_eq!(lump.trailing_bytes(), 3);
    }

    #[test]
    fn unsupported_map_type_fails_before_reading() {
        let err = decode_lump::<BrushSide>(&[0u8; 64], MapType::Titanfall, &DecodeOptions::default())
            .unwrap_err();
        assert_eq!(err, LumpError::UnsupportedFormat {
            map_type: "titanfall".into(),
            kind:     "brush side",
        });
    }

    #[test]
    fn version_is_accepted_and_inert() {
        let data = [0x05, 0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00];
        let a = decode_lump::<BrushSide>(&data, MapType::Quake3, &DecodeOptions::with_version(0)).unwrap();
        let b = decode_lump::<BrushSide>(&data, MapType::Quake3, &DecodeOptions::with_version(47)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn lump_index_distinguishes_absent_from_unsupported() {
        assert_eq!(lump_index::<BrushSide>(MapType::Quake, 0), Ok(None));
        assert_eq!(lump_index::<BrushSide>(MapType::Source20, 0), Ok(Some(19)));
        assert!(lump_index::<BrushSide>(MapType::Titanfall, 0).is_err());
    }

    #[test]
    fn json_dump_keeps_order() {
        let data = [1, 0, 2, 0, 3, 0, 4, 0];
        let lump = decode_lump::<BrushSide>(&data, MapType::Quake2, &DecodeOptions::default()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&lump.to_json().unwrap()).unwrap();
        assert_eq!(json[0]["plane"], 1);
        assert_eq!(json[1]["plane"], 3);
    }

    /// Record kind with no bytes per record.
    #[derive(Debug)]
    struct Empty;

    impl LumpObject for Empty {
        const NAME: &'static str = "empty";

        fn struct_length(_: MapType, _: i32) -> Result<usize> { Ok(0) }

        fn lump_index(_: MapType, _: i32) -> Result<Option<usize>> { Ok(None) }

        fn from_bytes(_: &[u8], _: MapType, _: i32) -> Result<Self> { Ok(Empty) }
    }

    #[test]
    fn zero_stride_is_unsupported() {
        let err = decode_lump::<Empty>(&[0u8; 8], MapType::Quake3, &DecodeOptions::default())
            .unwrap_err();
        assert_eq!(err, LumpError::UnsupportedFormat {
            map_type: "quake3".into(),
            kind:     "empty",
        });
    }
}
