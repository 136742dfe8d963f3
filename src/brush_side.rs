//! Brush sides: one half-space of a convex brush, in every supported dialect.
//!
//! # Sentinels
//! A field the dialect does not encode is `-1` (`-1.0` for `distance`,
//! `false` for `bevel`).  `-1` is also a legitimate stored texture index in
//! some dialects, so never test a field against its sentinel to learn whether
//! it was encoded.  Ask [`BrushSide::encodes`] instead; the answer depends
//! only on the map type.
//!
//! # Call of Duty distance
//! CoD-family sides store either a plane index or a plane distance in bytes
//! 0..4, depending on the side's position within its brush.  That position is
//! not known here, so both readings are kept: `plane` is the `i32` reading
//! and `distance` the `f32` reading of the same four bytes.  Choosing one is
//! the brush compiler's job.

use byteorder::{ByteOrder, LittleEndian};
use serde::Serialize;

use crate::layout::{self, BrushSideField, Family, BRUSH_SIDE};
use crate::lump::{self, DecodeOptions, Lump, LumpError, LumpObject, Result};
use crate::map_type::MapType;

/// Canonical brush side, independent of the source dialect.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BrushSide {
    /// Index into the plane lump.
    pub plane:        i32,
    /// Plane distance (CoD family only).
    pub distance:     f32,
    /// Index into the texture (or texinfo / shader) lump.
    pub texture:      i32,
    /// Index into the face lump.
    pub face:         i32,
    /// Index into the displacement-info lump.  Compilers often strip the
    /// referenced entries; the value is kept as stored.
    pub displacement: i32,
    pub bevel:        bool,
}

impl Default for BrushSide {
    /// Every field at its "not encoded" sentinel.
    fn default() -> Self {
        Self {
            plane:        -1,
            distance:     -1.0,
            texture:      -1,
            face:         -1,
            displacement: -1,
            bevel:        false,
        }
    }
}

impl BrushSide {
    /// Decode one brush side.  `data` must be exactly one stride long.
    pub fn from_bytes(data: &[u8], map_type: MapType, _version: i32) -> Result<Self> {
        let family = layout::family(map_type)?;
        let stride = layout::stride_for(map_type)?;
        if data.len() != stride {
            return Err(LumpError::InvalidInput {
                kind:     BRUSH_SIDE,
                expected: stride,
                found:    data.len(),
            });
        }
        Ok(Self::decode_family(family, data))
    }

    /// Decode every brush side in a lump with default options.
    pub fn decode_lump(data: &[u8], map_type: MapType) -> Result<Lump<BrushSide>> {
        lump::decode_lump(data, map_type, &DecodeOptions::default())
    }

    /// Whether `map_type` stores `field` at all.
    pub fn encodes(map_type: MapType, field: BrushSideField) -> Result<bool> {
        Ok(layout::family(map_type)?.encodes(field))
    }

    fn decode_family(family: Family, data: &[u8]) -> Self {
        let mut side = Self::default();
        match family {
            Family::Compact16     => side.read_compact16(data),
            Family::Quake3        => side.read_quake3(data),
            Family::CoD           => side.read_cod(data),
            Family::Stef2         => side.read_stef2(data),
            Family::Raven         => side.read_raven(data),
            Family::Source        => side.read_source(data),
            Family::HighPrecision => side.read_high_precision(data),
            Family::Nightfire     => side.read_nightfire(data),
        }
        side
    }

    // ── Family rules ─────────────────────────────────────────────────────────
    //
    // Callers guarantee `data` is one whole record for a dialect of the
    // family, which always covers the offsets read below.

    fn read_quake3(&mut self, data: &[u8]) {
        self.plane   = LittleEndian::read_i32(&data[0..4]);
        self.texture = LittleEndian::read_i32(&data[4..8]);
    }

    fn read_cod(&mut self, data: &[u8]) {
        self.distance = LittleEndian::read_f32(&data[0..4]);
        self.read_quake3(data);
    }

    fn read_stef2(&mut self, data: &[u8]) {
        self.texture = LittleEndian::read_i32(&data[0..4]);
        self.plane   = LittleEndian::read_i32(&data[4..8]);
    }

    fn read_raven(&mut self, data: &[u8]) {
        self.plane   = LittleEndian::read_i32(&data[0..4]);
        self.texture = LittleEndian::read_i32(&data[4..8]);
        self.face    = LittleEndian::read_i32(&data[8..12]);
    }

    fn read_compact16(&mut self, data: &[u8]) {
        self.plane   = i32::from(LittleEndian::read_u16(&data[0..2]));
        self.texture = i32::from(LittleEndian::read_i16(&data[2..4]));
    }

    fn read_source(&mut self, data: &[u8]) {
        self.displacement = i32::from(LittleEndian::read_i16(&data[4..6]));
        self.bevel        = bevel_flag(data[6]);
        self.read_compact16(data);
    }

    fn read_high_precision(&mut self, data: &[u8]) {
        self.plane        = LittleEndian::read_i32(&data[0..4]);
        self.texture      = LittleEndian::read_i32(&data[4..8]);
        self.displacement = LittleEndian::read_i32(&data[8..12]);
        self.bevel        = bevel_flag(data[12]);
    }

    fn read_nightfire(&mut self, data: &[u8]) {
        self.face  = LittleEndian::read_i32(&data[0..4]);
        self.plane = LittleEndian::read_i32(&data[4..8]);
    }
}

/// Bevel is set only for a strictly positive signed byte: 0x80..=0xFF read
/// as false.  Matches existing tools; not a bitmask test.
fn bevel_flag(byte: u8) -> bool {
    (byte as i8) > 0
}

impl LumpObject for BrushSide {
    const NAME: &'static str = BRUSH_SIDE;

    fn struct_length(map_type: MapType, _version: i32) -> Result<usize> {
        layout::stride_for(map_type)
    }

    fn lump_index(map_type: MapType, _version: i32) -> Result<Option<usize>> {
        layout::slot_index_for(map_type)
    }

    fn from_bytes(data: &[u8], map_type: MapType, version: i32) -> Result<Self> {
        BrushSide::from_bytes(data, map_type, version)
    }
}
