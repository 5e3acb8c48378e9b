//! # Curve Arithmetic
//!
//! The arithmetic surface the benchmark harness measures: BN254 scalar-field
//! elements and multi-scalar multiplication over the two pairing groups.
//! The arithmetic itself comes from arkworks; this crate pins down the
//! contract the harness relies on.
//!
//! ## Components
//!
//! - [`library`]: one-time initialization and the [`Arith`] handle
//! - [`field`]: long-form field-element fixtures and the `Fr` operations
//! - [`groups`]: the [`BenchGroup`] abstraction implemented for [`G1`] and [`G2`],
//!   plus the pairing and its target group [`Gt`]
//! - [`counters`]: operation counters, only with the `count-ops` feature

#![forbid(unsafe_code)]

pub mod library;
pub mod field;
pub mod groups;
pub mod errors;

#[cfg(feature = "count-ops")]
pub mod counters;

// Re-export key types
pub use library::{init, Arith};
pub use field::{FieldElement, Representation, FrRepr, FR_LIMBS, SCALAR_WIDTH};
pub use groups::{BenchGroup, Gt, G1, G2};
pub use errors::{ArithError, Result};

#[cfg(feature = "count-ops")]
pub use counters::{OpCounters, OpCounts};

/// BN254 scalar field
pub type Fr = ark_bn254::Fr;

/// Pairing engine over both groups
pub type Engine = ark_bn254::Bn254;
