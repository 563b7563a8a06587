//! # Cinematch
//!
//! Typo-tolerant movie title lookup with recommendations read from a
//! precomputed similarity matrix.
//!
//! The engine lives in [`cinematch_core`]; [`store`] loads the catalog and
//! matrix from disk.

pub use cinematch_core::*;
pub use cinematch_store as store;
