//! Brush-side layout registry: family, stride and lump slot per dialect.
//!
//! Three tables, each an exhaustive `match` over [`MapType`]:
//!
//! | Table            | Answers                                           |
//! |------------------|---------------------------------------------------|
//! | [`family`]       | which field-offset rule decodes a record          |
//! | [`stride_for`]   | byte length of one record                         |
//! | [`slot_index_for`] | position of the lump in the container directory |
//!
//! They are deliberately separate.  Stride does not follow family (SiN uses
//! the 4-byte Quake 2 fields inside an 8-byte record) and slot follows
//! neither (Quake3 and Raven share slot 9 at different strides; Quake3 and
//! FAKK share a stride at different slots).
//!
//! These values are a compatibility contract with existing map files.  Never
//! change a row without a fixture that proves the old one wrong.

use serde::{Deserialize, Serialize};

use crate::lump::{LumpError, Result};
use crate::map_type::MapType;

/// Record kind name used in errors and logs.
pub(crate) const BRUSH_SIDE: &str = "brush side";

// ── Families ─────────────────────────────────────────────────────────────────

/// A group of dialects that share field offsets for brush sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Family {
    /// `u16` plane @0, `i16` texture @2.
    Compact16,
    /// `i32` plane @0, `i32` texture @4.
    Quake3,
    /// Quake3 layout plus an `f32` reading of bytes 0..4 as distance.
    CoD,
    /// `i32` texture @0, `i32` plane @4.
    Stef2,
    /// `i32` plane @0, `i32` texture @4, `i32` face @8.
    Raven,
    /// `i16` displacement @4, bevel byte @6, then the Compact16 fields.
    Source,
    /// `i32` plane, texture, displacement, then bevel byte @12.
    HighPrecision,
    /// `i32` face @0, `i32` plane @4.
    Nightfire,
}

/// A field of the canonical brush side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrushSideField {
    Plane,
    Distance,
    Texture,
    Face,
    Displacement,
    Bevel,
}

impl Family {
    /// Fields this family writes.  Anything not listed stays at its sentinel.
    pub fn encoded_fields(self) -> &'static [BrushSideField] {
        use BrushSideField::*;
        match self {
            Family::Compact16     => &[Plane, Texture],
            Family::Quake3        => &[Plane, Texture],
            Family::CoD           => &[Plane, Distance, Texture],
            Family::Stef2         => &[Plane, Texture],
            Family::Raven         => &[Plane, Texture, Face],
            Family::Source        => &[Plane, Texture, Displacement, Bevel],
            Family::HighPrecision => &[Plane, Texture, Displacement, Bevel],
            Family::Nightfire     => &[Plane, Face],
        }
    }

    pub fn encodes(self, field: BrushSideField) -> bool {
        self.encoded_fields().contains(&field)
    }
}

fn unsupported(map_type: MapType) -> LumpError {
    LumpError::UnsupportedFormat {
        map_type: map_type.name().to_owned(),
        kind:     BRUSH_SIDE,
    }
}

// ── Tables ───────────────────────────────────────────────────────────────────

/// Layout family that decodes brush sides for `map_type`.
pub fn family(map_type: MapType) -> Result<Family> {
    match map_type {
        MapType::Quake2
        | MapType::Daikatana
        | MapType::SoF
        | MapType::SiN => Ok(Family::Compact16),

        MapType::Quake3
        | MapType::Alice
        | MapType::FAKK
        | MapType::STEF2Demo => Ok(Family::Quake3),

        MapType::CoD
        | MapType::CoD2
        | MapType::CoD4 => Ok(Family::CoD),

        MapType::STEF2 => Ok(Family::Stef2),

        MapType::Raven
        | MapType::MOHAA => Ok(Family::Raven),

        MapType::Source17
        | MapType::Source18
        | MapType::Source19
        | MapType::Source20
        | MapType::Source21
        | MapType::Source22
        | MapType::Source23
        | MapType::Source27
        | MapType::L4D2
        | MapType::DMoMaM => Ok(Family::Source),

        MapType::Vindictus => Ok(Family::HighPrecision),

        MapType::Nightfire => Ok(Family::Nightfire),

        MapType::Quake
        | MapType::Titanfall => Err(unsupported(map_type)),
    }
}

/// Byte length of one brush side in `map_type`.
pub fn stride_for(map_type: MapType) -> Result<usize> {
    match map_type {
        MapType::Quake2
        | MapType::Daikatana
        | MapType::SoF => Ok(4),

        MapType::SiN
        | MapType::Quake3
        | MapType::Alice
        | MapType::FAKK
        | MapType::STEF2Demo
        | MapType::STEF2
        | MapType::CoD
        | MapType::CoD2
        | MapType::CoD4
        | MapType::Nightfire
        | MapType::Source17
        | MapType::Source18
        | MapType::Source19
        | MapType::Source20
        | MapType::Source21
        | MapType::Source22
        | MapType::Source23
        | MapType::Source27
        | MapType::L4D2
        | MapType::DMoMaM => Ok(8),

        MapType::Raven
        | MapType::MOHAA => Ok(12),

        MapType::Vindictus => Ok(16),

        MapType::Quake
        | MapType::Titanfall => Err(unsupported(map_type)),
    }
}

/// Directory slot of the brush-side lump in `map_type`.
///
/// `Ok(None)` means the dialect is known but has no brush-side lump at all.
/// That is a normal answer, not an error; only dialects whose lump exists in
/// a layout this crate does not decode report `UnsupportedFormat`.
pub fn slot_index_for(map_type: MapType) -> Result<Option<usize>> {
    match map_type {
        MapType::CoD => Ok(Some(3)),

        MapType::CoD2
        | MapType::CoD4 => Ok(Some(5)),

        MapType::Quake3
        | MapType::Raven => Ok(Some(9)),

        MapType::Alice
        | MapType::FAKK => Ok(Some(10)),

        MapType::MOHAA => Ok(Some(11)),

        MapType::STEF2
        | MapType::STEF2Demo => Ok(Some(12)),

        MapType::Quake2
        | MapType::Daikatana
        | MapType::SoF
        | MapType::SiN => Ok(Some(15)),

        MapType::Nightfire => Ok(Some(16)),

        MapType::Source17
        | MapType::Source18
        | MapType::Source19
        | MapType::Source20
        | MapType::Source21
        | MapType::Source22
        | MapType::Source23
        | MapType::Source27
        | MapType::L4D2
        | MapType::DMoMaM
        | MapType::Vindictus => Ok(Some(19)),

        MapType::Quake => Ok(None),

        MapType::Titanfall => Err(unsupported(map_type)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stride_and_family_cover_the_same_dialects() {
        for t in MapType::ALL {
            assert_eq!(family(t).is_ok(), stride_for(t).is_ok(), "{t}");
        }
    }

    #[test]
    fn family_strides_fit_their_reads() {
        // Highest byte offset read by each family, exclusive.
        let extent = |f: Family| match f {
            Family::Compact16     => 4,
            Family::Quake3        => 8,
            Family::CoD           => 8,
            Family::Stef2         => 8,
            Family::Raven         => 12,
            Family::Source        => 7,
            Family::HighPrecision => 13,
            Family::Nightfire     => 8,
        };
        for t in MapType::ALL {
            if let (Ok(f), Ok(s)) = (family(t), stride_for(t)) {
                assert!(extent(f) <= s, "{t}: {f:?} reads past stride {s}");
            }
        }
    }

    #[test]
    fn slot_does_not_follow_stride() {
        assert_eq!(stride_for(MapType::Quake3).unwrap(), stride_for(MapType::FAKK).unwrap());
        assert_ne!(slot_index_for(MapType::Quake3).unwrap(), slot_index_for(MapType::FAKK).unwrap());

        assert_ne!(stride_for(MapType::Quake3).unwrap(), stride_for(MapType::Raven).unwrap());
        assert_eq!(slot_index_for(MapType::Quake3).unwrap(), slot_index_for(MapType::Raven).unwrap());
    }

    #[test]
    fn quake_has_no_slot_but_is_not_decodable() {
        assert_eq!(slot_index_for(MapType::Quake).unwrap(), None);
        assert!(matches!(stride_for(MapType::Quake), Err(LumpError::UnsupportedFormat { .. })));
    }

    #[test]
    fn titanfall_is_unsupported_everywhere() {
        assert!(family(MapType::Titanfall).is_err());
        assert!(stride_for(MapType::Titanfall).is_err());
        assert!(slot_index_for(MapType::Titanfall).is_err());
    }

    #[test]
    fn encoded_fields() {
        assert!(Family::CoD.encodes(BrushSideField::Distance));
        assert!(!Family::Quake3.encodes(BrushSideField::Distance));
        assert!(Family::Nightfire.encodes(BrushSideField::Face));
        assert!(!Family::Nightfire.encodes(BrushSideField::Texture));
        assert!(Family::Source.encodes(BrushSideField::Bevel));
    }
}
