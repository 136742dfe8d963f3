//! Closed enumeration of BSP format dialects.
//!
//! A [`MapType`] names the engine fork (or tool version) that produced a map
//! file.  It is determined upstream from the container header; this crate only
//! consumes it.  The set is closed: there is no "unknown" variant.  Anything a
//! caller cannot map onto a variant is rejected at parse time with
//! [`LumpError::UnsupportedFormat`].
//!
//! # Adding a dialect
//! Every table keyed by `MapType` is an exhaustive `match` with no wildcard
//! arm.  Adding a variant here fails compilation until `ALL`, `name`, and each
//! layout table in [`crate::layout`] cover it.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::lump::LumpError;

// ── MapType enum ─────────────────────────────────────────────────────────────

/// BSP format dialect identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MapType {
    /// Quake 1 (BSP29).  Has no brush lumps.
    Quake,
    Quake2,
    Daikatana,
    /// Soldier of Fortune.
    SoF,
    SiN,
    Quake3,
    /// American McGee's Alice, built on the FAKK2 toolchain.
    Alice,
    /// Heavy Metal: F.A.K.K.²
    FAKK,
    /// Star Trek: Elite Force II demo build.
    STEF2Demo,
    /// Star Trek: Elite Force II retail.
    STEF2,
    /// Raven BSP (Jedi Outcast, Soldier of Fortune II).
    Raven,
    /// Medal of Honor: Allied Assault.
    MOHAA,
    CoD,
    CoD2,
    CoD4,
    /// James Bond 007: Nightfire.
    Nightfire,
    Source17,
    Source18,
    Source19,
    Source20,
    Source21,
    Source22,
    Source23,
    Source27,
    /// Left 4 Dead 2.
    L4D2,
    /// Dark Messiah of Might and Magic.
    DMoMaM,
    Vindictus,
    Titanfall,
}

impl MapType {
    /// Every dialect, in declaration order.
    pub const ALL: [MapType; 28] = [
        MapType::Quake,
        MapType::Quake2,
        MapType::Daikatana,
        MapType::SoF,
        MapType::SiN,
        MapType::Quake3,
        MapType::Alice,
        MapType::FAKK,
        MapType::STEF2Demo,
        MapType::STEF2,
        MapType::Raven,
        MapType::MOHAA,
        MapType::CoD,
        MapType::CoD2,
        MapType::CoD4,
        MapType::Nightfire,
        MapType::Source17,
        MapType::Source18,
        MapType::Source19,
        MapType::Source20,
        MapType::Source21,
        MapType::Source22,
        MapType::Source23,
        MapType::Source27,
        MapType::L4D2,
        MapType::DMoMaM,
        MapType::Vindictus,
        MapType::Titanfall,
    ];

    /// Stable lowercase name (diagnostics and [`FromStr`]).
    pub fn name(self) -> &'static str {
        match self {
            MapType::Quake     => "quake",
            MapType::Quake2    => "quake2",
            MapType::Daikatana => "daikatana",
            MapType::SoF       => "sof",
            MapType::SiN       => "sin",
            MapType::Quake3    => "quake3",
            MapType::Alice     => "alice",
            MapType::FAKK      => "fakk",
            MapType::STEF2Demo => "stef2demo",
            MapType::STEF2     => "stef2",
            MapType::Raven     => "raven",
            MapType::MOHAA     => "mohaa",
            MapType::CoD       => "cod",
            MapType::CoD2      => "cod2",
            MapType::CoD4      => "cod4",
            MapType::Nightfire => "nightfire",
            MapType::Source17  => "source17",
            MapType::Source18  => "source18",
            MapType::Source19  => "source19",
            MapType::Source20  => "source20",
            MapType::Source21  => "source21",
            MapType::Source22  => "source22",
            MapType::Source23  => "source23",
            MapType::Source27  => "source27",
            MapType::L4D2      => "l4d2",
            MapType::DMoMaM    => "dmomam",
            MapType::Vindictus => "vindictus",
            MapType::Titanfall => "titanfall",
        }
    }
}

impl fmt::Display for MapType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MapType {
    type Err = LumpError;

    /// Case-insensitive parse of [`MapType::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        MapType::ALL
            .iter()
            .copied()
            .find(|t| t.name() == wanted)
            .ok_or_else(|| LumpError::UnsupportedFormat {
                map_type: s.to_owned(),
                kind:     "map type",
            })
    }
}
