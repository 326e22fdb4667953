//! Weighted undirected edge record.
//!
//! An edge is an unordered pair of endpoints plus a non-negative length.
//! Identity covers the endpoint pair only: two edges connecting the same
//! pair are equal regardless of length, and hashing is consistent with that
//! by combining the endpoint hashes order-insensitively. Within a single
//! store at most one edge exists per pair, so mixed lengths never arise.

use std::hash::{DefaultHasher, Hash, Hasher};

use crate::error::GraphError;

/// An undirected edge `{v1, v2}` with an integer length.
///
/// # Examples
/// ```
/// use skein_core::{Edge, Vertex};
///
/// let a = Vertex::new(1, "a");
/// let b = Vertex::new(2, "b");
/// let ab = Edge::with_length(a.clone(), b.clone(), 5)?;
/// let ba = Edge::with_length(b, a, 9)?;
/// // Same unordered pair: equal, despite differing lengths.
/// assert_eq!(ab, ba);
/// assert_eq!(ab.length(), 5);
/// # Ok::<(), skein_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Edge<V> {
    v1: V,
    v2: V,
    length: u32,
}

impl<V: Eq> Edge<V> {
    /// Length assigned when none is supplied at construction.
    pub const DEFAULT_LENGTH: u32 = 1;

    /// Creates an edge with the default length.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when the endpoints are equal.
    pub fn new(v1: V, v2: V) -> Result<Self, GraphError> {
        Self::with_length(v1, v2, Self::DEFAULT_LENGTH)
    }

    /// Creates an edge with an explicit length.
    ///
    /// # Errors
    /// Returns [`GraphError::SelfLoop`] when the endpoints are equal.
    pub fn with_length(v1: V, v2: V, length: u32) -> Result<Self, GraphError> {
        if v1 == v2 {
            return Err(GraphError::SelfLoop);
        }
        Ok(Self { v1, v2, length })
    }

    /// Builds an edge whose endpoints are already known to be distinct.
    ///
    /// Used by the matrix store when reconstructing edges from cells; the
    /// store never writes the diagonal, so the invariant holds.
    pub(crate) fn from_known_distinct(v1: V, v2: V, length: u32) -> Self {
        debug_assert!(v1 != v2, "edge endpoints must be distinct");
        Self { v1, v2, length }
    }

    /// Returns the first endpoint as supplied at construction.
    #[must_use]
    pub fn v1(&self) -> &V {
        &self.v1
    }

    /// Returns the second endpoint as supplied at construction.
    #[must_use]
    pub fn v2(&self) -> &V {
        &self.v2
    }

    /// Returns the edge length.
    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Returns `true` when `v` is one of the two endpoints.
    #[must_use]
    pub fn incident_to(&self, v: &V) -> bool {
        self.v1 == *v || self.v2 == *v
    }

    /// Returns `true` when this edge connects the unordered pair `{a, b}`.
    #[must_use]
    pub fn connects(&self, a: &V, b: &V) -> bool {
        (self.v1 == *a && self.v2 == *b) || (self.v1 == *b && self.v2 == *a)
    }

    /// Returns the endpoint opposite `v`, or `None` when `v` is not an
    /// endpoint.
    #[must_use]
    pub fn other_endpoint(&self, v: &V) -> Option<&V> {
        if self.v1 == *v {
            Some(&self.v2)
        } else if self.v2 == *v {
            Some(&self.v1)
        } else {
            None
        }
    }
}

impl<V: Eq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.connects(&other.v1, &other.v2)
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Endpoint order must not influence the hash, and length is not
        // part of identity. Hash each endpoint independently and feed the
        // pair in sorted order.
        let left = endpoint_hash(&self.v1);
        let right = endpoint_hash(&self.v2);
        state.write_u64(left.min(right));
        state.write_u64(left.max(right));
    }
}

fn endpoint_hash<V: Hash>(v: &V) -> u64 {
    let mut hasher = DefaultHasher::new();
    v.hash(&mut hasher);
    hasher.finish()
}
