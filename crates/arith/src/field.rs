//! Scalar-field elements in long form
//!
//! A [`FieldElement`] is a tagged limb array. The tag says how the limbs are
//! to be read when the element is loaded into an [`Fr`]. Fixtures only ever
//! use `LongMontgomery`, whose limbs are the internal Montgomery value as-is.

use crate::{Arith, ArithError, Fr, Result};
use ark_ff::{BigInt, PrimeField};

/// Number of 64-bit limbs in an `Fr` element
pub const FR_LIMBS: usize = 4;

/// Raw limb representation of an `Fr` element
pub type FrRepr = BigInt<FR_LIMBS>;

/// Byte width of one packed scalar accepted by the MSM entry points
pub const SCALAR_WIDTH: usize = FR_LIMBS * 8;

/// How the limbs of a [`FieldElement`] are encoded
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Representation {
    /// Limbs already hold the Montgomery form
    LongMontgomery,
}

/// Field element given by its limbs and their encoding
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement {
    pub repr: Representation,
    pub limbs: [u64; FR_LIMBS],
}

impl FieldElement {
    pub const fn new(repr: Representation, limbs: [u64; FR_LIMBS]) -> Self {
        Self { repr, limbs }
    }

    /// Element with every limb set to `limb`
    pub const fn splat(repr: Representation, limb: u64) -> Self {
        Self::new(repr, [limb; FR_LIMBS])
    }

    /// Loads the element into the library's `Fr` type.
    ///
    /// Montgomery limbs are taken verbatim without any reduction check.
    pub fn load(&self, _arith: &Arith) -> Fr {
        match self.repr {
            Representation::LongMontgomery => Fr::new_unchecked(FrRepr::new(self.limbs)),
        }
    }
}

/// Field addition
#[inline]
pub fn add(a: &Fr, b: &Fr) -> Fr {
    *a + b
}

/// Field multiplication
#[inline]
pub fn mul(a: &Fr, b: &Fr) -> Fr {
    *a * b
}

/// Computes `sum(scalar_i * bases_i)` over the field into `dst`.
///
/// Same scalar packing as the group MSM entry points.
pub fn multi_mul_by_scalar(
    dst: &mut Fr,
    bases: &[Fr],
    scalars: &[u8],
    scalar_width: usize,
) -> Result<()> {
    let scalars = unpack_scalars(bases.len(), scalars, scalar_width)?;

    *dst = bases.iter().zip(scalars.iter()).map(|(base, scalar)| *base * scalar).sum();
    Ok(())
}

/// Splits packed scalar bytes into field elements.
///
/// Each chunk is read as a little-endian integer and reduced modulo the group
/// order, so every byte pattern is a valid scalar.
pub(crate) fn unpack_scalars(terms: usize, scalars: &[u8], scalar_width: usize) -> Result<Vec<Fr>> {
    if scalar_width != SCALAR_WIDTH {
        return Err(ArithError::InvalidScalarWidth {
            expected: SCALAR_WIDTH,
            actual: scalar_width,
        });
    }

    if scalars.len() != terms * scalar_width {
        return Err(ArithError::LengthMismatch {
            bases: terms,
            scalar_bytes: scalars.len(),
        });
    }

    Ok(scalars
        .chunks_exact(SCALAR_WIDTH)
        .map(Fr::from_le_bytes_mod_order)
        .collect())
}
