//! The two pairing groups behind one interface
//!
//! [`G1`] lives over the base field and [`G2`] over its degree-2 extension.
//! Both expose the same small vocabulary through [`BenchGroup`], which is all
//! the harness needs to build inputs and time multi-scalar multiplication.

use crate::field::unpack_scalars;
use crate::{Arith, Engine, Fr, FrRepr, Result};
use ark_ec::pairing::{Pairing, PairingOutput};
use ark_ec::{AffineRepr, CurveGroup, VariableBaseMSM};
use ark_ff::{PrimeField, Zero};

#[cfg(feature = "count-ops")]
use crate::counters::OpCounters;

/// Target group of the pairing
pub type Gt = PairingOutput<Engine>;

/// Operations a curve group offers to the harness
pub trait BenchGroup {
    /// Short lowercase name used in benchmark labels
    const NAME: &'static str;

    type Affine: AffineRepr;
    type Projective: CurveGroup<Affine = Self::Affine>;

    /// The group's designated canonical element (its generator)
    fn one(arith: &Arith) -> Self::Affine;

    /// Identity element, used to declare accumulators
    fn identity() -> Self::Projective;

    fn copy(dst: &mut Self::Affine, src: &Self::Affine) {
        *dst = *src;
    }

    /// Affine addition; the sum comes back in projective form
    fn add(a: &Self::Affine, b: &Self::Affine) -> Self::Projective;

    /// Single scalar multiplication
    fn mul(base: &Self::Affine, scalar: &Fr) -> Self::Projective;

    fn to_affine(point: &Self::Projective) -> Self::Affine {
        point.into_affine()
    }

    /// Computes `sum(scalar_i * bases_i)` into `dst`.
    ///
    /// `scalars` packs one little-endian scalar of `scalar_width` bytes per
    /// base. Each scalar is reduced modulo the group order first, so every
    /// byte pattern is accepted.
    fn multi_mul_by_scalar(
        dst: &mut Self::Projective,
        bases: &[Self::Affine],
        scalars: &[u8],
        scalar_width: usize,
    ) -> Result<()>;

    #[cfg(feature = "count-ops")]
    fn counters() -> &'static OpCounters;

    #[cfg(feature = "count-ops")]
    fn reset_counters() {
        Self::counters().reset();
    }
}

/// Base-field group
#[derive(Clone, Copy, Debug)]
pub struct G1;

/// Extension-field group
#[derive(Clone, Copy, Debug)]
pub struct G2;

#[cfg(feature = "count-ops")]
static G1_COUNTERS: OpCounters = OpCounters::new();

#[cfg(feature = "count-ops")]
static G2_COUNTERS: OpCounters = OpCounters::new();

macro_rules! impl_bench_group {
    ($group:ty, $name:literal, $affine:ty, $projective:ty, $one:ident, $counters:ident) => {
        impl BenchGroup for $group {
            const NAME: &'static str = $name;

            type Affine = $affine;
            type Projective = $projective;

            fn one(arith: &Arith) -> $affine {
                arith.$one()
            }

            fn identity() -> $projective {
                <$projective>::zero()
            }

            fn add(a: &$affine, b: &$affine) -> $projective {
                #[cfg(feature = "count-ops")]
                $counters.record_addition();
                a.into_group() + b
            }

            fn mul(base: &$affine, scalar: &Fr) -> $projective {
                base.into_group() * scalar
            }

            fn multi_mul_by_scalar(
                dst: &mut $projective,
                bases: &[$affine],
                scalars: &[u8],
                scalar_width: usize,
            ) -> Result<()> {
                let bigints: Vec<FrRepr> = unpack_scalars(bases.len(), scalars, scalar_width)?
                    .iter()
                    .map(|scalar| scalar.into_bigint())
                    .collect();

                #[cfg(feature = "count-ops")]
                $counters.record_msm(bases.len());

                *dst = <$projective>::msm_bigint(bases, &bigints);
                Ok(())
            }

            #[cfg(feature = "count-ops")]
            fn counters() -> &'static OpCounters {
                &$counters
            }
        }
    };
}

impl_bench_group!(G1, "g1", ark_bn254::G1Affine, ark_bn254::G1Projective, g1_one, G1_COUNTERS);
impl_bench_group!(G2, "g2", ark_bn254::G2Affine, ark_bn254::G2Projective, g2_one, G2_COUNTERS);

/// Bilinear pairing of a G1 and a G2 point
pub fn pairing(p: &ark_bn254::G1Affine, q: &ark_bn254::G2Affine) -> Gt {
    Engine::pairing(*p, *q)
}

/// Group operation in the target group, written additively
pub fn add_gt(a: &Gt, b: &Gt) -> Gt {
    *a + b
}

/// Scalar multiplication in the target group
pub fn mul_gt(a: &Gt, scalar: &Fr) -> Gt {
    *a * scalar
}
