//! # Tower Jet Input
//!
//! Turns calibrated calorimeter tower energies into vertex-corrected
//! four-momentum objects for a downstream jet-finding algorithm.
//!
//! ## Pipeline
//!
//! ```text
//!   InputSelector ──► Source Registry ──► (tower key, geometry key)
//!                                               │
//!        EventDataStore ◄───────────────────────┤ per-event lookup
//!             │                                 │
//!             ├── TowerContainer ───────────────┤
//!             ├── TowerGeometryContainer ───────┤
//!             └── VertexCollection ──► VertexResolver ──► vertex z
//!                                               │
//!                      for each tower:          ▼
//!                      project_tower(E, geometry, vertex z)
//!                                               │
//!                                               ▼
//!                      JetInputObject { p^μ, (selector, tower id) }
//! ```
//!
//! Recoverable failures (unknown selector, missing optional containers,
//! an event's bad vertex) degrade to an empty result; structural
//! inconsistencies (missing vertex collection, a tower with no geometry
//! entry) are fatal errors the enclosing framework should abort on.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tower_jet_input::prelude::*;
//!
//! let mut pipeline = TowerJetInput::new(InputSelector::CemcTower);
//! let jet_inputs = pipeline.process_event(&store)?;
//! // hand jet_inputs to the clustering stage
//! ```

pub mod error;
pub mod jet;
pub mod kinematics;
pub mod pipeline;
pub mod source;
pub mod store;
pub mod vertex;


pub use error::JetInputError;
pub use jet::{JetInputObject, ProvenanceTag};
pub use kinematics::{project_tower, FourMomentum};
pub use pipeline::TowerJetInput;
pub use source::{resolve, InputSelector, SourceKeys};
pub use store::{
    EventDataStore, EventVertex, InMemoryEventStore, TowerContainer, TowerGeometry,
    TowerGeometryContainer, TowerId, TowerRecord, VertexCollection, GLOBAL_VERTEX_MAP,
};
pub use vertex::{VertexResolver, WarnOnce};

/// Result type for jet-input operations
pub type JetInputResult<T> = Result<T, JetInputError>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::JetInputError;
    pub use crate::jet::{JetInputObject, ProvenanceTag};
    pub use crate::kinematics::FourMomentum;
    pub use crate::pipeline::TowerJetInput;
    pub use crate::source::InputSelector;
    pub use crate::store::{
        EventDataStore, EventVertex, InMemoryEventStore, TowerContainer, TowerGeometry,
        TowerGeometryContainer, VertexCollection, GLOBAL_VERTEX_MAP,
    };
    pub use crate::JetInputResult;
}
