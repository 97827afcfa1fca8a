//! Seams to the host environment and their in-memory implementations.

use indexmap::IndexMap;

use crate::errors::SinkError;
use crate::geometry::OuterSize;

/// Document-wide style state that accepts custom property writes.
pub trait StyleSink {
    /// Set `name` to `value` on the root style scope, replacing any prior value.
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), SinkError>;
}

/// Looks elements up by id and reports their rendered outer size.
pub trait GeometrySource {
    /// `None` when no element with `id` is present.
    fn outer_size(&self, id: &str) -> Option<OuterSize>;
}

impl<T: StyleSink + ?Sized> StyleSink for &mut T {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), SinkError> {
        (**self).set_property(name, value)
    }
}

impl<T: GeometrySource + ?Sized> GeometrySource for &T {
    fn outer_size(&self, id: &str) -> Option<OuterSize> {
        (**self).outer_size(id)
    }
}

/// In-memory style scope.
///
/// Properties keep their first insertion order; overwriting a property
/// updates it in place.
#[derive(Debug, Clone, Default)]
pub struct MemoryStyle {
    properties: IndexMap<String, String>,
    writes: usize,
}

impl MemoryStyle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Total number of successful writes, including overwrites.
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl StyleSink for MemoryStyle {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), SinkError> {
        self.properties.insert(name.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

/// In-memory element geometry keyed by id.
#[derive(Debug, Clone, Default)]
pub struct StaticGeometry {
    elements: IndexMap<String, OuterSize>,
}

impl StaticGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or resize an element.
    pub fn insert(&mut self, id: impl Into<String>, size: OuterSize) {
        self.elements.insert(id.into(), size);
    }

    pub fn remove(&mut self, id: &str) -> Option<OuterSize> {
        self.elements.shift_remove(id)
    }
}

impl GeometrySource for StaticGeometry {
    fn outer_size(&self, id: &str) -> Option<OuterSize> {
        self.elements.get(id).copied()
    }
}
