//! Primary-vertex resolution with a rate-limited diagnostic
//!
//! A bad vertex reconstruction shows up as a NaN z coordinate and can
//! repeat for many events in a row. The resolver warns on the first
//! occurrence and stays quiet afterwards; every occurrence still drops
//! the event's tower inputs. The limiter is owned by the resolver
//! instance, so concurrent pipelines do not share it and tests can reset
//! it.

use crate::error::JetInputError;
use crate::store::{EventDataStore, GLOBAL_VERTEX_MAP};
use crate::JetInputResult;
use tracing::warn;

/// One-shot diagnostic limiter. Suppresses duplicate log lines only;
/// never affects the result of a call.
#[derive(Debug, Clone, Default)]
pub struct WarnOnce {
    fired: bool,
}

impl WarnOnce {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` exactly once, on the first call after creation or
    /// reset.
    pub fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn reset(&mut self) {
        self.fired = false;
    }
}

/// Resolves and validates the event's primary vertex z coordinate.
#[derive(Debug, Clone, Default)]
pub struct VertexResolver {
    invalid_vertex_warning: WarnOnce,
}

impl VertexResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch the vertex collection and pick the primary vertex.
    ///
    /// - missing collection: [`JetInputError::MissingVertexCollection`],
    ///   fatal for the pipeline
    /// - collection present but empty: `Ok(None)`, a valid no-vertex event
    /// - non-finite z: [`JetInputError::InvalidVertex`], recoverable,
    ///   warned at most once per resolver
    pub fn resolve(&mut self, store: &impl EventDataStore) -> JetInputResult<Option<f64>> {
        let map = store
            .vertex_map(GLOBAL_VERTEX_MAP)
            .ok_or(JetInputError::MissingVertexCollection)?;

        let Some(vertex) = map.primary() else {
            return Ok(None);
        };

        let z = vertex.z;
        if !z.is_finite() {
            if self.invalid_vertex_warning.fire() {
                warn!(
                    z,
                    "event vertex is not finite; dropping all tower inputs \
                     (further warnings suppressed)"
                );
            }
            return Err(JetInputError::InvalidVertex { z });
        }

        Ok(Some(z))
    }

    pub fn has_warned(&self) -> bool {
        self.invalid_vertex_warning.has_fired()
    }

    pub fn reset_warning(&mut self) {
        self.invalid_vertex_warning.reset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{EventVertex, InMemoryEventStore, VertexCollection};

    fn store_with_vertices(vertices: Vec<EventVertex>) -> InMemoryEventStore {
        InMemoryEventStore::new()
            .with_vertex_map(GLOBAL_VERTEX_MAP, vertices.into_iter().collect())
    }

    #[test]
    fn test_missing_collection_is_fatal() {
        let store = InMemoryEventStore::new();
        let mut resolver = VertexResolver::new();

        let err = resolver.resolve(&store).unwrap_err();
        assert_eq!(err, JetInputError::MissingVertexCollection);
        assert!(err.is_fatal());
    }

    #[test]
    fn test_empty_collection_is_a_valid_no_vertex_event() {
        let store = store_with_vertices(vec![]);
        let mut resolver = VertexResolver::new();

        assert_eq!(resolver.resolve(&store).unwrap(), None);
        assert!(!resolver.has_warned());
    }

    #[test]
    fn test_first_vertex_wins() {
        let store =
            store_with_vertices(vec![EventVertex::at_z(-2.5), EventVertex::at_z(10.0)]);
        let mut resolver = VertexResolver::new();

        assert_eq!(resolver.resolve(&store).unwrap(), Some(-2.5));
    }

    #[test]
    fn test_nan_vertex_is_recoverable_and_warned_once() {
        let store = store_with_vertices(vec![EventVertex::at_z(f64::NAN)]);
        let mut resolver = VertexResolver::new();

        let err = resolver.resolve(&store).unwrap_err();
        assert!(matches!(err, JetInputError::InvalidVertex { .. }));
        assert!(err.is_recoverable());
        assert!(resolver.has_warned());

        // second occurrence: same outcome, limiter already fired
        let err = resolver.resolve(&store).unwrap_err();
        assert!(matches!(err, JetInputError::InvalidVertex { .. }));
        assert!(resolver.has_warned());
    }

    #[test]
    fn test_infinite_vertex_is_invalid_too() {
        let store = store_with_vertices(vec![EventVertex::at_z(f64::INFINITY)]);
        let mut resolver = VertexResolver::new();

        assert!(matches!(
            resolver.resolve(&store),
            Err(JetInputError::InvalidVertex { .. })
        ));
    }

    #[test]
    fn test_warn_once_reset() {
        let mut once = WarnOnce::new();
        assert!(once.fire());
        assert!(!once.fire());
        assert!(once.has_fired());

        once.reset();
        assert!(!once.has_fired());
        assert!(once.fire());
    }
}
