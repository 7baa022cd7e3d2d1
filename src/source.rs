//! Subdetector source selection and the container-key registry
//!
//! A jet-input pipeline is configured with one [`InputSelector`] at
//! construction. The registry maps each tower-backed selector to the pair
//! of data-product keys it reads: the calibrated tower container and the
//! static geometry container. Keys follow the detector node-name
//! convention `TOWER_CALIB_<DET>` / `TOWERGEOM_<DET>`.
//!
//! The pedestal-subtracted sources carry two quirks worth knowing:
//! the retowered CEMC (`CemcTowerSub1`) is binned onto the inner-HCAL
//! grid and therefore reads `TOWERGEOM_HCALIN`, and both HCAL `Sub1`
//! variants reuse the geometry node of their unsubtracted detector.

use crate::error::JetInputError;
use crate::JetInputResult;
use serde::{Deserialize, Serialize};

// ═══════════════════════════════════════════════════════════════════════════
// INPUT SELECTOR
// ═══════════════════════════════════════════════════════════════════════════

/// Which subdetector source feeds the jet-input pipeline.
///
/// Fixed at construction; never derived from the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputSelector {
    /// Electromagnetic calorimeter towers
    CemcTower,
    /// Inner hadronic calorimeter towers
    HcalInTower,
    /// Outer hadronic calorimeter towers
    HcalOutTower,
    /// Forward electromagnetic calorimeter towers
    FemcTower,
    /// Forward hadronic calorimeter towers
    FhcalTower,
    /// CEMC retowered onto the inner-HCAL grid, pedestal subtracted
    CemcTowerSub1,
    /// Inner HCAL towers, pedestal subtracted
    HcalInTowerSub1,
    /// Outer HCAL towers, pedestal subtracted
    HcalOutTowerSub1,
    /// CEMC clusters; not backed by calibrated towers, rejected by the registry
    CemcCluster,
    /// Charged tracks; not backed by calibrated towers, rejected by the registry
    Track,
}

impl InputSelector {
    /// All selector variants, tower-backed first.
    pub fn all() -> [Self; 10] {
        [
            Self::CemcTower,
            Self::HcalInTower,
            Self::HcalOutTower,
            Self::FemcTower,
            Self::FhcalTower,
            Self::CemcTowerSub1,
            Self::HcalInTowerSub1,
            Self::HcalOutTowerSub1,
            Self::CemcCluster,
            Self::Track,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::CemcTower => "CEMC_TOWER",
            Self::HcalInTower => "HCALIN_TOWER",
            Self::HcalOutTower => "HCALOUT_TOWER",
            Self::FemcTower => "FEMC_TOWER",
            Self::FhcalTower => "FHCAL_TOWER",
            Self::CemcTowerSub1 => "CEMC_TOWER_SUB1",
            Self::HcalInTowerSub1 => "HCALIN_TOWER_SUB1",
            Self::HcalOutTowerSub1 => "HCALOUT_TOWER_SUB1",
            Self::CemcCluster => "CEMC_CLUSTER",
            Self::Track => "TRACK",
        }
    }

    /// Whether the registry carries a tower/geometry row for this selector.
    pub fn is_tower_source(&self) -> bool {
        resolve(*self).is_ok()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// SOURCE REGISTRY
// ═══════════════════════════════════════════════════════════════════════════

/// The pair of data-product keys a tower source reads per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceKeys {
    /// Calibrated tower container node
    pub towers: &'static str,
    /// Static tower-geometry container node
    pub geometry: &'static str,
}

/// One row per tower-backed selector. Adding a subdetector source means
/// adding a row here, nothing else.
const REGISTRY: &[(InputSelector, SourceKeys)] = &[
    (
        InputSelector::CemcTower,
        SourceKeys { towers: "TOWER_CALIB_CEMC", geometry: "TOWERGEOM_CEMC" },
    ),
    (
        InputSelector::HcalInTower,
        SourceKeys { towers: "TOWER_CALIB_HCALIN", geometry: "TOWERGEOM_HCALIN" },
    ),
    (
        InputSelector::HcalOutTower,
        SourceKeys { towers: "TOWER_CALIB_HCALOUT", geometry: "TOWERGEOM_HCALOUT" },
    ),
    (
        InputSelector::FemcTower,
        SourceKeys { towers: "TOWER_CALIB_FEMC", geometry: "TOWERGEOM_FEMC" },
    ),
    (
        InputSelector::FhcalTower,
        SourceKeys { towers: "TOWER_CALIB_FHCAL", geometry: "TOWERGEOM_FHCAL" },
    ),
    (
        InputSelector::CemcTowerSub1,
        SourceKeys { towers: "TOWER_CALIB_CEMC_RETOWER_SUB1", geometry: "TOWERGEOM_HCALIN" },
    ),
    (
        InputSelector::HcalInTowerSub1,
        SourceKeys { towers: "TOWER_CALIB_HCALIN_SUB1", geometry: "TOWERGEOM_HCALIN" },
    ),
    (
        InputSelector::HcalOutTowerSub1,
        SourceKeys { towers: "TOWER_CALIB_HCALOUT_SUB1", geometry: "TOWERGEOM_HCALOUT" },
    ),
];

/// Resolve a selector to its container keys.
///
/// Selectors without a registry row (clusters, tracks) signal
/// [`JetInputError::UnknownSource`]; callers treat that as "produce
/// nothing", not as a crash.
pub fn resolve(selector: InputSelector) -> JetInputResult<SourceKeys> {
    REGISTRY
        .iter()
        .find(|(s, _)| *s == selector)
        .map(|(_, keys)| *keys)
        .ok_or(JetInputError::UnknownSource(selector))
}
