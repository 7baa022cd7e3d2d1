//! Jet-input objects with provenance

use crate::kinematics::FourMomentum;
use crate::source::InputSelector;
use crate::store::TowerId;
use serde::{Deserialize, Serialize};

/// Identifies the detector element a jet constituent came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProvenanceTag {
    pub source: InputSelector,
    pub tower_id: TowerId,
}

/// One four-momentum handed to the jet-clustering stage.
///
/// Freshly created per tower per event and owned by the caller. At
/// creation the provenance list holds exactly one tag; clustering may
/// later merge constituents and extend it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JetInputObject {
    momentum: FourMomentum,
    provenance: Vec<ProvenanceTag>,
}

impl JetInputObject {
    /// Tag a projected tower momentum with its origin.
    pub fn from_tower(source: InputSelector, tower_id: TowerId, momentum: FourMomentum) -> Self {
        Self {
            momentum,
            provenance: vec![ProvenanceTag { source, tower_id }],
        }
    }

    pub fn momentum(&self) -> FourMomentum {
        self.momentum
    }

    pub fn px(&self) -> f64 {
        self.momentum.px
    }

    pub fn py(&self) -> f64 {
        self.momentum.py
    }

    pub fn pz(&self) -> f64 {
        self.momentum.pz
    }

    pub fn e(&self) -> f64 {
        self.momentum.e
    }

    pub fn provenance(&self) -> &[ProvenanceTag] {
        &self.provenance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tag_at_creation() {
        let p = FourMomentum::new(10.0, 1.0, 2.0, 3.0);
        let jet_input = JetInputObject::from_tower(InputSelector::CemcTower, 17, p);

        assert_eq!(
            jet_input.provenance(),
            &[ProvenanceTag { source: InputSelector::CemcTower, tower_id: 17 }]
        );
        assert_eq!(jet_input.e(), 10.0);
        assert_eq!(jet_input.pz(), 3.0);
    }

    #[test]
    fn test_serde_round_trip() {
        let p = FourMomentum::new(5.0, 0.5, -0.5, 4.0);
        let jet_input = JetInputObject::from_tower(InputSelector::FhcalTower, 3, p);

        let json = serde_json::to_string(&jet_input).unwrap();
        let back: JetInputObject = serde_json::from_str(&json).unwrap();
        assert_eq!(jet_input, back);
    }
}
