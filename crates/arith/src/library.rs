//! Process-wide library initialization
//!
//! The library is set up exactly once per process. [`init`] hands out an
//! [`Arith`] handle, and everything that depends on the setup takes that
//! handle, so nothing can run before initialization has completed.

use crate::{ArithError, Result};
use ark_bn254::{G1Affine, G2Affine};
use ark_ec::AffineRepr;
use std::sync::OnceLock;

static LIBRARY: OnceLock<Library> = OnceLock::new();

/// State computed once at initialization
#[derive(Debug)]
struct Library {
    g1_one: G1Affine,
    g2_one: G2Affine,
}

impl Library {
    fn setup() -> Self {
        Self {
            g1_one: G1Affine::generator(),
            g2_one: G2Affine::generator(),
        }
    }
}

/// Proof that the library has been initialized
#[derive(Clone, Copy, Debug)]
pub struct Arith {
    library: &'static Library,
}

/// Initializes the library.
///
/// Fails with [`ArithError::AlreadyInitialized`] on every call after the first.
pub fn init() -> Result<Arith> {
    let mut fresh = false;
    let library = LIBRARY.get_or_init(|| {
        fresh = true;
        Library::setup()
    });

    if !fresh {
        return Err(ArithError::AlreadyInitialized);
    }

    log::debug!("arithmetic library initialized");
    Ok(Arith { library })
}

impl Arith {
    /// Handle to an already initialized library
    pub fn instance() -> Result<Self> {
        LIBRARY
            .get()
            .map(|library| Arith { library })
            .ok_or(ArithError::NotInitialized)
    }

    pub(crate) fn g1_one(&self) -> G1Affine {
        self.library.g1_one
    }

    pub(crate) fn g2_one(&self) -> G2Affine {
        self.library.g2_one
    }
}

#[cfg(test)]
pub(crate) fn test_arith() -> Arith {
    init().or_else(|_| Arith::instance()).unwrap()
}
