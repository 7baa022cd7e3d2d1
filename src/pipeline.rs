//! Per-event pipeline: registry → containers → vertex → tower loop
//!
//! [`TowerJetInput`] is configured with one subdetector selector and turns
//! one event's calibrated towers into vertex-corrected, provenance-tagged
//! four-momenta. Recoverable failures degrade to an empty result so event
//! processing keeps going; fatal ones surface as errors for the enclosing
//! framework to abort on.

use crate::error::JetInputError;
use crate::jet::JetInputObject;
use crate::kinematics::project_tower;
use crate::source::{self, InputSelector};
use crate::store::EventDataStore;
use crate::vertex::VertexResolver;
use crate::JetInputResult;
use std::fmt;
use tracing::debug;

/// Tower-to-jet-input pipeline for one subdetector source.
///
/// Holds no per-event state across calls; the only state surviving a call
/// is the resolver's warn-once flag.
#[derive(Debug, Clone)]
pub struct TowerJetInput {
    selector: InputSelector,
    vertex_resolver: VertexResolver,
}

impl TowerJetInput {
    pub fn new(selector: InputSelector) -> Self {
        Self {
            selector,
            vertex_resolver: VertexResolver::new(),
        }
    }

    pub fn selector(&self) -> InputSelector {
        self.selector
    }

    pub fn vertex_resolver(&self) -> &VertexResolver {
        &self.vertex_resolver
    }

    pub fn vertex_resolver_mut(&mut self) -> &mut VertexResolver {
        &mut self.vertex_resolver
    }

    /// Produce the event's jet inputs, in tower enumeration order.
    ///
    /// An empty vector is a first-class result: it covers genuinely empty
    /// events and every recoverable failure alike. `Err` is reserved for
    /// the fatal conditions (missing vertex collection, geometry entry
    /// missing for an existing tower).
    pub fn process_event(&mut self, store: &impl EventDataStore) -> JetInputResult<Vec<JetInputObject>> {
        match self.collect(store) {
            Ok(inputs) => Ok(inputs),
            Err(err) if err.is_fatal() => Err(err),
            Err(err) => {
                debug!(
                    selector = self.selector.name(),
                    %err,
                    "no jet inputs for this event"
                );
                Ok(Vec::new())
            }
        }
    }

    fn collect(&mut self, store: &impl EventDataStore) -> JetInputResult<Vec<JetInputObject>> {
        // registry first: an unrecognized selector performs no store lookup
        let keys = source::resolve(self.selector)?;

        let towers = store
            .towers(keys.towers)
            .ok_or(JetInputError::MissingDataProduct(keys.towers))?;
        let geometry = store
            .tower_geometry(keys.geometry)
            .ok_or(JetInputError::MissingDataProduct(keys.geometry))?;

        let Some(vertex_z) = self.vertex_resolver.resolve(store)? else {
            return Ok(Vec::new());
        };

        let mut inputs = Vec::with_capacity(towers.len());
        for tower in towers.iter() {
            let tower_geometry = geometry
                .lookup(tower.id)
                .ok_or(JetInputError::MissingGeometryForTower { tower_id: tower.id })?;

            let momentum = project_tower(tower.energy, tower_geometry, vertex_z);
            inputs.push(JetInputObject::from_tower(self.selector, tower.id, momentum));
        }

        Ok(inputs)
    }
}

impl fmt::Display for TowerJetInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match source::resolve(self.selector) {
            Ok(keys) => write!(f, "TowerJetInput: {} to {}", keys.towers, self.selector.name()),
            Err(_) => write!(
                f,
                "TowerJetInput: {} (no tower source registered)",
                self.selector.name()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_reports_nodes() {
        let pipeline = TowerJetInput::new(InputSelector::HcalOutTower);
        assert_eq!(
            pipeline.to_string(),
            "TowerJetInput: TOWER_CALIB_HCALOUT to HCALOUT_TOWER"
        );

        let pipeline = TowerJetInput::new(InputSelector::Track);
        assert_eq!(
            pipeline.to_string(),
            "TowerJetInput: TRACK (no tower source registered)"
        );
    }
}
