//! Concrete vertex record used by callers of the graph engine.
//!
//! The stores and algorithms are generic over any `V: Clone + Eq + Hash`;
//! [`Vertex`] is the record most callers (and the test suites) use.

use std::fmt;

/// An identified, named vertex. Immutable after construction.
///
/// Both the identifier and the name participate in equality and hashing, so
/// a `Vertex` behaves as a plain value when used as a map or set key.
///
/// # Examples
/// ```
/// use skein_core::Vertex;
///
/// let a = Vertex::new(1, "amsterdam");
/// assert_eq!(a.id(), 1);
/// assert_eq!(a.name(), "amsterdam");
/// assert_eq!(a, a.clone());
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Vertex {
    id: u32,
    name: String,
}

impl Vertex {
    /// Creates a vertex with the given identifier and display name.
    #[must_use]
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the vertex identifier.
    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Returns the vertex display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.id)
    }
}
