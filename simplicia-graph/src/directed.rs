use std::fmt;

use simplicia_core::Set;
use thiserror::Error;

use crate::edge::DirectedEdge;

/// Errors raised by graph queries that reference missing vertices.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GraphError<V: fmt::Debug> {
    /// The named vertex is not in the graph's vertex set.
    #[error("vertex {0:?} is not a vertex of this graph")]
    NonexistentVertex(V),
}

/// A directed graph: a vertex set together with a set of ordered edges.
///
/// Edge endpoints are expected to be drawn from the vertex set; this is
/// not enforced at insertion, but every query that names a vertex outside
/// the graph fails with [`GraphError::NonexistentVertex`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct DirectedGraph<V> {
    vertices: Set<V>,
    edges: Set<DirectedEdge<V>>,
}

impl<V: PartialEq + Clone> DirectedGraph<V> {
    pub fn new() -> Self {
        Self {
            vertices: Set::new(),
            edges: Set::new(),
        }
    }

    pub fn from_parts(vertices: Set<V>, edges: Set<DirectedEdge<V>>) -> Self {
        Self { vertices, edges }
    }

    #[inline]
    pub fn vertices(&self) -> &Set<V> {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &Set<DirectedEdge<V>> {
        &self.edges
    }

    pub fn add_vertex(&mut self, vertex: V) -> bool {
        self.vertices.insert(vertex)
    }

    pub fn add_edge(&mut self, edge: DirectedEdge<V>) -> bool {
        self.edges.insert(edge)
    }

    /// The ordered pair `(initial, terminal)` is an edge.
    pub fn has_edge(&self, initial: &V, terminal: &V) -> bool {
        self.edges
            .contains(&DirectedEdge::new(initial.clone(), terminal.clone()))
    }

    /// Removes `vertex` together with every edge incident to it.
    pub fn remove_vertex(&mut self, vertex: &V) -> Result<(), GraphError<V>>
    where
        V: fmt::Debug,
    {
        if !self.vertices.contains(vertex) {
            return Err(GraphError::NonexistentVertex(vertex.clone()));
        }
        self.vertices.remove(vertex);
        self.edges = self
            .edges
            .iter()
            .filter(|e| !e.is_incident_to(vertex))
            .cloned()
            .collect();
        Ok(())
    }

    /// Some edge joins the two vertices, in either direction.
    pub fn are_adjacent(&self, a: &V, b: &V) -> Result<bool, GraphError<V>>
    where
        V: fmt::Debug,
    {
        self.require_vertex(a)?;
        self.require_vertex(b)?;
        Ok(self
            .edges
            .iter()
            .any(|e| e.is_incident_to(a) && e.is_incident_to(b)))
    }

    /// Vertices joined to `vertex` by an edge in either direction,
    /// excluding `vertex` itself.
    pub fn adjacent_vertices(&self, vertex: &V) -> Result<Set<V>, GraphError<V>>
    where
        V: fmt::Debug,
    {
        self.require_vertex(vertex)?;
        let mut result = Set::new();
        for edge in self.edges.iter() {
            if edge.initial() == vertex && edge.terminal() != vertex {
                result.insert(edge.terminal().clone());
            }
            if edge.terminal() == vertex && edge.initial() != vertex {
                result.insert(edge.initial().clone());
            }
        }
        Ok(result)
    }

    /// Union of `adjacent_vertices` over a set of vertices.
    pub fn adjacent_vertices_of(&self, set: &Set<V>) -> Result<Set<V>, GraphError<V>>
    where
        V: fmt::Debug,
    {
        let mut result = Set::new();
        for vertex in set.iter() {
            result.extend(self.adjacent_vertices(vertex)?);
        }
        Ok(result)
    }

    /// Edges incident to `vertex` in either direction.
    pub fn adjacent_edges(&self, vertex: &V) -> Result<Set<DirectedEdge<V>>, GraphError<V>>
    where
        V: fmt::Debug,
    {
        self.require_vertex(vertex)?;
        Ok(self
            .edges
            .iter()
            .filter(|e| e.is_incident_to(vertex))
            .cloned()
            .collect())
    }

    /// Union of `adjacent_edges` over a set of vertices.
    pub fn adjacent_edges_of(&self, set: &Set<V>) -> Result<Set<DirectedEdge<V>>, GraphError<V>>
    where
        V: fmt::Debug,
    {
        let mut result = Set::new();
        for vertex in set.iter() {
            result.extend(self.adjacent_edges(vertex)?);
        }
        Ok(result)
    }

    /// The subgraph on `vertices` keeping only the edges with both
    /// endpoints inside it.
    pub fn induced_subgraph(&self, vertices: &Set<V>) -> Result<Self, GraphError<V>>
    where
        V: fmt::Debug,
    {
        for vertex in vertices.iter() {
            self.require_vertex(vertex)?;
        }
        let edges = self
            .edges
            .iter()
            .filter(|e| vertices.contains(e.initial()) && vertices.contains(e.terminal()))
            .cloned()
            .collect();
        Ok(Self::from_parts(vertices.clone(), edges))
    }

    /// Edges whose source is `vertex`.
    pub fn restrict_to_initial_vertex(&self, vertex: &V) -> Set<DirectedEdge<V>> {
        self.edges
            .iter()
            .filter(|e| e.initial() == vertex)
            .cloned()
            .collect()
    }

    /// Edges whose target is `vertex`.
    pub fn restrict_to_final_vertex(&self, vertex: &V) -> Set<DirectedEdge<V>> {
        self.edges
            .iter()
            .filter(|e| e.terminal() == vertex)
            .cloned()
            .collect()
    }

    /// One closure step: the frontier plus every vertex an edge joins to
    /// it, in either direction.
    pub fn star(&self, frontier: &Set<V>) -> Set<V> {
        let mut result = frontier.clone();
        for edge in self.edges.iter() {
            if frontier.contains(edge.initial()) {
                result.insert(edge.terminal().clone());
            }
            if frontier.contains(edge.terminal()) {
                result.insert(edge.initial().clone());
            }
        }
        result
    }

    /// Vertices reachable from `vertex` (ignoring edge direction) within
    /// `max_steps` closure steps, stopping early once no growth occurs.
    pub fn component_bounded(&self, vertex: &V, max_steps: usize) -> Set<V> {
        let mut current = Set::from_iter([vertex.clone()]);
        for _ in 0..max_steps {
            let next = self.star(&current);
            if next.len() == current.len() {
                break;
            }
            current = next;
        }
        current
    }

    /// The connected component of `vertex`; `|V|` steps always suffice.
    pub fn component(&self, vertex: &V) -> Set<V> {
        self.component_bounded(vertex, self.vertices.len())
    }

    pub fn component_size(&self, vertex: &V) -> usize {
        self.component(vertex).len()
    }

    fn require_vertex(&self, vertex: &V) -> Result<(), GraphError<V>>
    where
        V: fmt::Debug,
    {
        if self.vertices.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::NonexistentVertex(vertex.clone()))
        }
    }
}

impl<V: fmt::Display> fmt::Display for DirectedGraph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in self.edges.iter() {
            writeln!(f, "{edge}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{DirectedGraph, GraphError};
    use crate::edge::DirectedEdge;
    use simplicia_core::Set;

    /// 1 -> 2 -> 3, 1 -> 3, isolated 4.
    fn sample() -> DirectedGraph<i32> {
        DirectedGraph::from_parts(
            Set::from_iter([1, 2, 3, 4]),
            Set::from_iter([
                DirectedEdge::new(1, 2),
                DirectedEdge::new(2, 3),
                DirectedEdge::new(1, 3),
            ]),
        )
    }

    #[test]
    fn has_edge_is_order_sensitive() {
        let graph = sample();
        assert!(graph.has_edge(&1, &2));
        assert!(!graph.has_edge(&2, &1));
        assert!(!graph.has_edge(&1, &4));
    }

    #[test]
    fn remove_vertex_cascades_to_incident_edges() {
        let mut graph = sample();
        graph.remove_vertex(&2).unwrap();
        assert!(!graph.vertices().contains(&2));
        assert!(!graph.has_edge(&1, &2));
        assert!(!graph.has_edge(&2, &3));
        assert!(graph.has_edge(&1, &3));
    }

    #[test]
    fn remove_missing_vertex_fails() {
        let mut graph = sample();
        assert_eq!(
            graph.remove_vertex(&9),
            Err(GraphError::NonexistentVertex(9))
        );
    }

    #[test]
    fn adjacency_queries() {
        let graph = sample();
        assert!(graph.are_adjacent(&1, &2).unwrap());
        assert!(graph.are_adjacent(&3, &1).unwrap());
        assert!(!graph.are_adjacent(&1, &4).unwrap());
        assert_eq!(
            graph.are_adjacent(&1, &9),
            Err(GraphError::NonexistentVertex(9))
        );
        assert_eq!(graph.adjacent_vertices(&1).unwrap(), Set::from_iter([2, 3]));
        assert_eq!(graph.adjacent_edges(&3).unwrap().len(), 2);
        assert_eq!(graph.adjacent_vertices(&4).unwrap(), Set::new());
    }

    #[test]
    fn adjacency_over_sets_validates_every_member() {
        let graph = sample();
        assert_eq!(
            graph
                .adjacent_vertices_of(&Set::from_iter([1, 4]))
                .unwrap(),
            Set::from_iter([2, 3])
        );
        assert_eq!(
            graph.adjacent_vertices_of(&Set::from_iter([1, 9])),
            Err(GraphError::NonexistentVertex(9))
        );
    }

    #[test]
    fn induced_subgraph_keeps_only_internal_edges() {
        let graph = sample();
        let sub = graph.induced_subgraph(&Set::from_iter([1, 2])).unwrap();
        assert_eq!(sub.vertices().len(), 2);
        assert!(sub.has_edge(&1, &2));
        assert!(!sub.has_edge(&2, &3));
        assert_eq!(sub.edges().len(), 1);
        assert_eq!(
            graph.induced_subgraph(&Set::from_iter([1, 9])),
            Err(GraphError::NonexistentVertex(9))
        );
    }

    #[test]
    fn edge_restrictions() {
        let graph = sample();
        assert_eq!(graph.restrict_to_initial_vertex(&1).len(), 2);
        assert_eq!(graph.restrict_to_final_vertex(&3).len(), 2);
        assert_eq!(graph.restrict_to_initial_vertex(&4).len(), 0);
    }

    #[test]
    fn components_ignore_edge_direction() {
        let graph = sample();
        assert_eq!(graph.component(&3), Set::from_iter([1, 2, 3]));
        assert_eq!(graph.component(&4), Set::from_iter([4]));
        assert_eq!(graph.component_size(&1), 3);
        // a bounded expansion can stop short of the full component
        assert_eq!(graph.component_bounded(&3, 1), Set::from_iter([3, 2, 1]));
        assert_eq!(graph.component_bounded(&3, 0), Set::from_iter([3]));
    }

    #[test]
    fn display_lists_edges() {
        let graph = DirectedGraph::from_parts(
            Set::from_iter(["a", "b"]),
            Set::from_iter([DirectedEdge::new("a", "b")]),
        );
        assert_eq!(graph.to_string(), "(a,b)\n");
    }
}
