//! Core data types for read triage.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`read::AlignedRead`]: An aligned read with its stored sequence, edit script, and mapping quality
//! - [`read::CigarOp`], [`read::CigarOpKind`]: Edit-script steps as decoded from a record's CIGAR
//! - [`types::GroupLabel`]: The name of a read group from the target definition list
//! - [`types::Outcome`]: Terminal classification result (group, "others", or "bad_quality")
//! - [`sequence`]: Reverse complement and the gap placeholder character
//!
//! ## Alphabet
//!
//! Target sequences are normalized to uppercase {A,C,G,T,N} on ingestion.
//! Reconstructed read sequences additionally use `-` as the gap placeholder
//! for deleted positions.

pub mod read;
pub mod sequence;
pub mod types;
