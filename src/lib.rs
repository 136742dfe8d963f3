//! Dialect-aware decoding of fixed-stride BSP map lumps.
//!
//! A lump is a packed array of fixed-size records whose byte layout depends on
//! the engine that wrote the map.  Given the raw lump bytes and a [`MapType`],
//! this crate picks the record stride, slices the lump and decodes each slice
//! into a canonical record, keeping file order.

pub mod map_type;
pub mod layout;
pub mod brush_side;
pub mod lump;

pub use map_type::MapType;
pub use layout::{BrushSideField, Family, stride_for, slot_index_for};
pub use brush_side::BrushSide;
pub use lump::{DecodeOptions, Lump, LumpError, LumpObject, decode_lump, lump_index};
