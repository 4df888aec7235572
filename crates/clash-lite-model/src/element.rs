// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building elements and their mesh geometry

use crate::{ElementCategory, ElementId};
use serde::{Deserialize, Serialize};

/// Triangle mesh data for one element
///
/// Flattened vertex data as produced by an upstream geometry extractor.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Vertex positions as flattened [x, y, z, x, y, z, ...]
    pub positions: Vec<f32>,
    /// Triangle indices
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create mesh with pre-allocated capacity
    pub fn with_capacity(vertex_count: usize, index_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count * 3),
            indices: Vec::with_capacity(index_count),
        }
    }

    /// Check if mesh is empty
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Get vertex count
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Get triangle count
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

/// A building element submitted to clash detection
///
/// Identity is `id`. Geometry is optional: an element without geometry takes
/// part in no pairwise check, which is expected (spatial containers, parse
/// failures upstream) rather than an error.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Element id
    pub id: ElementId,
    /// Element category
    pub category: ElementCategory,
    /// Display name
    pub name: String,
    /// Mesh geometry, if the upstream parser produced any
    pub geometry: Option<MeshData>,
}

impl Element {
    /// Create a new element without geometry
    pub fn new(id: ElementId, category: ElementCategory, name: impl Into<String>) -> Self {
        Self {
            id,
            category,
            name: name.into(),
            geometry: None,
        }
    }

    /// Set mesh geometry
    pub fn with_geometry(mut self, geometry: MeshData) -> Self {
        self.geometry = Some(geometry);
        self
    }

    /// Check if this element has geometry
    pub fn has_geometry(&self) -> bool {
        self.geometry.as_ref().is_some_and(|g| !g.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mesh_counts() {
        let mesh = MeshData {
            positions: vec![0.0; 12],
            indices: vec![0, 1, 2, 0, 2, 3],
        };
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.is_empty());
    }

    #[test]
    fn test_element_builder() {
        let el = Element::new(ElementId(7), ElementCategory::Beam, "B-07");
        assert!(!el.has_geometry());

        let el = el.with_geometry(MeshData {
            positions: vec![0.0, 0.0, 0.0],
            indices: vec![],
        });
        assert!(el.has_geometry());
    }

    #[test]
    fn test_empty_mesh_is_no_geometry() {
        let el = Element::new(ElementId(1), ElementCategory::Wall, "W").with_geometry(MeshData::new());
        assert!(!el.has_geometry());
    }
}
