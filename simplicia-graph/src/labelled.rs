use simplicia_core::Set;

use crate::edge::DirectedLabelledEdge;

/// A directed graph whose edges carry labels, supporting label-based
/// transition lookup.
///
/// Several out-edges may leave one vertex; `terminal_vertex` resolves the
/// first edge carrying the requested label, which is unique for the
/// deterministic machines built on top of this structure.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DirectedLabelledGraph<V, L> {
    vertices: Set<V>,
    edges: Set<DirectedLabelledEdge<V, L>>,
}

impl<V: PartialEq + Clone, L: PartialEq + Clone> DirectedLabelledGraph<V, L> {
    pub fn new() -> Self {
        Self {
            vertices: Set::new(),
            edges: Set::new(),
        }
    }

    pub fn from_parts(vertices: Set<V>, edges: Set<DirectedLabelledEdge<V, L>>) -> Self {
        Self { vertices, edges }
    }

    #[inline]
    pub fn vertices(&self) -> &Set<V> {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &Set<DirectedLabelledEdge<V, L>> {
        &self.edges
    }

    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    pub fn add_edge(&mut self, edge: DirectedLabelledEdge<V, L>) -> bool {
        self.edges.insert(edge)
    }

    /// Every label appearing on some edge.
    pub fn labels(&self) -> Set<L> {
        self.edges.iter().map(|e| e.label().clone()).collect()
    }

    /// Edges whose source is `vertex`.
    pub fn out_edges(&self, vertex: &V) -> Set<DirectedLabelledEdge<V, L>> {
        self.edges
            .iter()
            .filter(|e| e.initial() == vertex)
            .cloned()
            .collect()
    }

    /// Edges whose target is `vertex`.
    pub fn in_edges(&self, vertex: &V) -> Set<DirectedLabelledEdge<V, L>> {
        self.edges
            .iter()
            .filter(|e| e.terminal() == vertex)
            .cloned()
            .collect()
    }

    pub fn out_labels(&self, vertex: &V) -> Set<L> {
        self.edges
            .iter()
            .filter(|e| e.initial() == vertex)
            .map(|e| e.label().clone())
            .collect()
    }

    pub fn in_labels(&self, vertex: &V) -> Set<L> {
        self.edges
            .iter()
            .filter(|e| e.terminal() == vertex)
            .map(|e| e.label().clone())
            .collect()
    }

    pub fn all_labels(&self, vertex: &V) -> Set<L> {
        self.in_labels(vertex).union(&self.out_labels(vertex))
    }

    /// Some edge labelled `label` leaves `vertex`.
    pub fn has_out_edge(&self, vertex: &V, label: &L) -> bool {
        self.edges
            .iter()
            .any(|e| e.initial() == vertex && e.label() == label)
    }

    /// Target of the out-edge from `vertex` carrying `label`, if any.
    pub fn terminal_vertex(&self, vertex: &V, label: &L) -> Option<&V> {
        self.edges
            .iter()
            .find(|e| e.initial() == vertex && e.label() == label)
            .map(|e| e.terminal())
    }
}
