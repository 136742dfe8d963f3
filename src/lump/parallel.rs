//! Record-level decoding, optionally spread across the rayon pool.
//!
//! Records are independent fixed-size slices, so with the `parallel` feature
//! large lumps are decoded with `par_chunks_exact`.  The indexed collect puts
//! every record back at its original ordinal; the output is identical to the
//! sequential path.

use log::{log_enabled, trace, Level};

use super::{DecodeOptions, LumpObject, Result};
use crate::map_type::MapType;

/// Decode `body` as back-to-back records of `stride` bytes.
///
/// `body.len()` must be a multiple of `stride`; [`super::decode_lump`]
/// trims the trailing partial record before calling this.
pub fn decode_records<T: LumpObject>(
    body:     &[u8],
    stride:   usize,
    map_type: MapType,
    opts:     &DecodeOptions,
) -> Result<Vec<T>> {
    #[cfg(feature = "parallel")]
    {
        if body.len() / stride >= opts.parallel_threshold {
            use rayon::prelude::*;

            trace!("Decoding {} {} record(s) on the rayon pool", body.len() / stride, T::NAME);
            return body
                .par_chunks_exact(stride)
                .map(|chunk| T::from_bytes(chunk, map_type, opts.version))
                .collect();
        }
    }

    let dump = log_enabled!(Level::Trace);
    body.chunks_exact(stride)
        .enumerate()
        .map(|(i, chunk)| {
            if dump {
                trace!("{} {i}: {}", T::NAME, hex::encode(chunk));
            }
            T::from_bytes(chunk, map_type, opts.version)
        })
        .collect()
}
