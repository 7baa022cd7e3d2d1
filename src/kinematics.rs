//! Four-momentum type and the vertex-corrected tower projection
//!
//! A tower is projected as a massless ray from the event vertex through
//! the tower's physical center. Shifting the ray origin by the vertex z
//! gives a vertex-corrected pseudorapidity; the azimuth comes straight
//! from the tower center.
//!
//! ```text
//!              tower center (x, y, z0), radius r
//!                    ●
//!                   ╱
//!                  ╱   eta = asinh((z0 - vz) / r)
//!                 ╱
//!   ──────●──────┼────────────────► beam axis (z)
//!       vertex (vz)
//! ```

use crate::store::TowerGeometry;
use serde::{Deserialize, Serialize};
use std::ops::Add;

// ═══════════════════════════════════════════════════════════════════════════
// FOUR-MOMENTUM
// ═══════════════════════════════════════════════════════════════════════════

/// Four-momentum vector in natural units (c = 1): p^μ = (E, p_x, p_y, p_z).
///
/// Tower-derived momenta are built with `E` set to the raw calibrated
/// tower energy, so they may sit slightly off the mass shell relative to
/// (px, py, pz).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FourMomentum {
    /// Energy component (timelike)
    pub e: f64,
    pub px: f64,
    pub py: f64,
    pub pz: f64,
}

impl FourMomentum {
    pub fn new(e: f64, px: f64, py: f64, pz: f64) -> Self {
        Self { e, px, py, pz }
    }

    /// 3-momentum magnitude: |p| = √(p_x² + p_y² + p_z²)
    pub fn three_momentum_magnitude(&self) -> f64 {
        (self.px.powi(2) + self.py.powi(2) + self.pz.powi(2)).sqrt()
    }

    /// Transverse momentum: p_T = √(p_x² + p_y²)
    pub fn transverse_momentum(&self) -> f64 {
        (self.px.powi(2) + self.py.powi(2)).sqrt()
    }

    /// Azimuthal angle: φ = atan2(p_y, p_x)
    pub fn phi(&self) -> f64 {
        self.py.atan2(self.px)
    }

    /// Pseudorapidity: η = asinh(p_z / p_T)
    pub fn pseudorapidity(&self) -> f64 {
        (self.pz / self.transverse_momentum()).asinh()
    }

    /// Invariant mass squared: m² = E² - |p|²
    pub fn mass_squared(&self) -> f64 {
        self.e.powi(2) - self.px.powi(2) - self.py.powi(2) - self.pz.powi(2)
    }
}

impl Add for FourMomentum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            e: self.e + rhs.e,
            px: self.px + rhs.px,
            py: self.py + rhs.py,
            pz: self.pz + rhs.pz,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TOWER PROJECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Project one calibrated tower into a four-momentum, correcting the
/// pseudorapidity for the event vertex position along the beam axis.
///
/// The energy component keeps the raw calibrated tower energy rather than
/// being recomputed from the momentum vector; downstream consumers depend
/// on that convention. A zero `center_radius` propagates a non-finite eta
/// through the result unguarded, matching the legacy numeric behavior.
pub fn project_tower(energy: f64, geometry: &TowerGeometry, vertex_z: f64) -> FourMomentum {
    let phi = geometry.center_y.atan2(geometry.center_x);
    let z_shifted = geometry.center_z - vertex_z;
    // eta of a massless ray from the shifted vertex through the tower center
    let eta = (z_shifted / geometry.center_radius).asinh();

    let pt = energy / eta.cosh();
    FourMomentum::new(energy, pt * phi.cos(), pt * phi.sin(), pt * eta.sinh())
}
