//! Proof module: canonical JSON bytes and domain-separated content hashing.
//!
//! Depends on nothing else in the kernel. Used by the harness to fingerprint
//! trial reports so that a seed-for-seed rerun can be checked byte for byte.

pub mod canon;
pub mod hash;
pub mod hash_domain;
