//! Error types for jet-input construction
//!
//! The error set mirrors the failure table of the tower pipeline: most
//! conditions are recoverable and degrade to "no jet inputs this event",
//! while structural inconsistencies are fatal because continuing would
//! manufacture physically wrong momenta.

use crate::source::InputSelector;
use crate::store::TowerId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum JetInputError {
    /// The selector has no (tower, geometry) row in the source registry.
    #[error("no tower source registered for {0:?}")]
    UnknownSource(InputSelector),

    /// A tower or geometry container is absent from the event store.
    /// Absence of an optional data product is a normal outcome.
    #[error("data product {0} is missing from the event store")]
    MissingDataProduct(&'static str),

    /// The global vertex map node is absent. Without it no vertex
    /// correction is possible for any event, so this is fatal.
    #[error("GlobalVertexMap is missing; enable global vertex reconstruction upstream")]
    MissingVertexCollection,

    /// The event's reconstructed vertex has a non-finite z coordinate.
    #[error("event vertex z is not finite: {z}")]
    InvalidVertex { z: f64 },

    /// A tower id present in the tower container has no entry in the
    /// geometry container. The static tower-to-geometry mapping is
    /// internally inconsistent, so this is fatal.
    #[error("tower {tower_id} has no entry in the geometry container")]
    MissingGeometryForTower { tower_id: TowerId },
}

impl JetInputError {
    /// Fatal errors indicate a broken pipeline configuration and must
    /// abort event processing; recoverable ones yield an empty result.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::MissingVertexCollection | Self::MissingGeometryForTower { .. }
        )
    }

    pub fn is_recoverable(&self) -> bool {
        !self.is_fatal()
    }
}
