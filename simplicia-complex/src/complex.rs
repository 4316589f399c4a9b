use std::fmt;

use simplicia_core::Set;
use thiserror::Error;

/// Errors raised by complex operations.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ComplexError<V: fmt::Debug> {
    /// The named vertex is not a vertex of this complex.
    #[error("vertex {0:?} is not a vertex of this complex")]
    NonexistentVertex(V),
    /// A disjoint union was requested between complexes whose vertex
    /// sets intersect.
    #[error("factors of a disjoint union must have disjoint vertex sets")]
    NotDisjoint,
}

/// A downward-closed family of finite vertex sets ("faces").
///
/// Whenever a face of size ≥ 2 is inserted, every proper subset of it is
/// inserted too, so the closure invariant holds at all times. The face
/// family is held by composition rather than exposed for direct mutation,
/// which keeps the invariant impossible to bypass.
///
/// A complex all of whose faces have size ≤ 2 models a simple graph:
/// 1-element faces are vertices, 2-element faces are edges.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct SimplicialComplex<V> {
    faces: Set<Set<V>>,
}

impl<V: PartialEq + Clone> SimplicialComplex<V> {
    pub fn new() -> Self {
        Self { faces: Set::new() }
    }

    pub fn from_faces<I: IntoIterator<Item = Set<V>>>(faces: I) -> Self {
        let mut complex = Self::new();
        for face in faces {
            complex.insert(face);
        }
        complex
    }

    /// Inserts `face` and, transitively, every proper subset of it.
    ///
    /// Closure is maintained with an explicit worklist rather than
    /// recursion; faces already present are skipped, which both bounds
    /// the work by the face's subset lattice and guarantees termination.
    pub fn insert(&mut self, face: Set<V>) {
        let mut pending = vec![face];
        while let Some(face) = pending.pop() {
            if self.faces.contains(&face) {
                continue;
            }
            if face.len() >= 2 {
                for excluded in face.iter() {
                    let mut boundary = face.clone();
                    boundary.remove(excluded);
                    pending.push(boundary);
                }
            }
            self.faces.insert(face);
        }
    }

    /// Exact membership: `face` is one of the stored faces.
    #[inline]
    pub fn contains(&self, face: &Set<V>) -> bool {
        self.faces.contains(face)
    }

    /// `candidate` is properly contained in some stored face.
    ///
    /// A stored face is not a "face of" itself under this definition; in
    /// particular the empty set is a face of any nonempty complex but not
    /// of the empty complex.
    pub fn is_face(&self, candidate: &Set<V>) -> bool {
        self.faces.iter().any(|face| candidate < face)
    }

    /// The maximal faces: those not properly contained in another.
    ///
    /// Since closure makes every subset implicit, the maximal faces are a
    /// complete compact description of the complex.
    pub fn non_faces(&self) -> Set<Set<V>> {
        self.faces
            .iter()
            .filter(|face| !self.is_face(face))
            .cloned()
            .collect()
    }

    /// Largest face size minus one; −1 for the empty complex.
    pub fn dimension(&self) -> i64 {
        self.faces
            .iter()
            .map(|face| face.len())
            .max()
            .map_or(-1, |largest| largest as i64 - 1)
    }

    #[inline]
    pub fn faces(&self) -> &Set<Set<V>> {
        &self.faces
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Set<V>> {
        self.faces.iter()
    }

    /// Total number of stored faces, implicit subsets included.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    pub fn vertices(&self) -> Set<V> {
        self.faces.vertices()
    }

    pub fn edges(&self) -> Set<Set<V>> {
        self.faces.edges()
    }

    pub fn cells(&self, n: usize) -> Set<Set<V>> {
        self.faces.cells(n)
    }

    pub fn skeleton(&self, n: usize) -> Set<Set<V>> {
        self.faces.skeleton(n)
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.faces.order()
    }

    /// Number of edges.
    pub fn size(&self) -> usize {
        self.faces.size()
    }

    /// The subcomplex of faces containing `vertex` (closed downward
    /// again, so the star's own vertices and edges are queryable).
    pub fn star(&self, vertex: &V) -> Result<Self, ComplexError<V>>
    where
        V: fmt::Debug,
    {
        self.require_vertex(vertex)?;
        Ok(Self::from_faces(
            self.faces
                .iter()
                .filter(|face| face.contains(vertex))
                .cloned(),
        ))
    }

    /// Number of edges meeting `vertex`.
    pub fn degree(&self, vertex: &V) -> Result<usize, ComplexError<V>>
    where
        V: fmt::Debug,
    {
        self.require_vertex(vertex)?;
        Ok(self.edge_count_at(vertex))
    }

    /// Vertices joined to `vertex` by a 2-element face.
    pub fn neighbours(&self, vertex: &V) -> Result<Set<V>, ComplexError<V>>
    where
        V: fmt::Debug,
    {
        self.require_vertex(vertex)?;
        let mut result = Set::new();
        for face in self.faces.iter().filter(|f| f.len() == 2) {
            if face.contains(vertex) {
                for other in face.iter().filter(|other| *other != vertex) {
                    result.insert(other.clone());
                }
            }
        }
        Ok(result)
    }

    /// Vertex degrees in nondecreasing order.
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = self
            .vertices()
            .iter()
            .map(|vertex| self.edge_count_at(vertex))
            .collect();
        degrees.sort_unstable();
        degrees
    }

    /// Vertices in nondecreasing graph distance from `basepoints`,
    /// traversing the 1-skeleton only.
    ///
    /// The basepoints come first in their given order; each later layer
    /// lists vertices in discovery order; vertices unreachable from every
    /// basepoint are appended last in storage order.
    pub fn distance_sort(&self, basepoints: &[V]) -> Result<Vec<V>, ComplexError<V>>
    where
        V: fmt::Debug,
    {
        let vertices = self.vertices();
        for basepoint in basepoints {
            if !vertices.contains(basepoint) {
                return Err(ComplexError::NonexistentVertex(basepoint.clone()));
            }
        }

        let mut result: Vec<V> = Vec::with_capacity(vertices.len());
        let mut boundary: Vec<V> = Vec::new();
        for basepoint in basepoints {
            if !result.contains(basepoint) {
                result.push(basepoint.clone());
                boundary.push(basepoint.clone());
            }
        }

        while !boundary.is_empty() {
            let mut next_boundary = Vec::new();
            for vertex in &boundary {
                for face in self.faces.iter().filter(|f| f.len() == 2) {
                    if !face.contains(vertex) {
                        continue;
                    }
                    for neighbour in face.iter().filter(|other| *other != vertex) {
                        if !result.contains(neighbour) {
                            result.push(neighbour.clone());
                            next_boundary.push(neighbour.clone());
                        }
                    }
                }
            }
            boundary = next_boundary;
        }

        for vertex in vertices.iter() {
            if !result.contains(vertex) {
                result.push(vertex.clone());
            }
        }
        Ok(result)
    }

    /// The faces that are subsets of `vertices`.
    pub fn induced_subcomplex(&self, vertices: &Set<V>) -> Self {
        Self::from_faces(
            self.faces
                .iter()
                .filter(|face| face.is_subset(vertices))
                .cloned(),
        )
    }

    /// Union of two complexes with disjoint vertex sets.
    pub fn disjoint_union(&self, other: &Self) -> Result<Self, ComplexError<V>>
    where
        V: fmt::Debug,
    {
        if self.vertices().meets(&other.vertices()) {
            return Err(ComplexError::NotDisjoint);
        }
        Ok(Self::from_faces(
            self.faces.iter().chain(other.faces.iter()).cloned(),
        ))
    }

    /// A human-readable name for a handful of recognisable shapes.
    pub fn recognise(&self) -> Option<String> {
        if self.is_empty() {
            return Some("the empty complex".to_string());
        }
        if self.is_complete_graph() {
            return Some(format!("complete graph of order {}", self.order()));
        }
        if self.dimension() == 0 {
            let order = self.order();
            let noun = if order == 1 { "vertex" } else { "vertices" };
            return Some(format!(
                "totally disconnected graph on {order} {noun}"
            ));
        }
        None
    }

    pub(crate) fn edge_count_at(&self, vertex: &V) -> usize {
        self.faces
            .iter()
            .filter(|face| face.len() == 2 && face.contains(vertex))
            .count()
    }

    pub(crate) fn require_vertex(&self, vertex: &V) -> Result<(), ComplexError<V>>
    where
        V: fmt::Debug,
    {
        if self.vertices().contains(vertex) {
            Ok(())
        } else {
            Err(ComplexError::NonexistentVertex(vertex.clone()))
        }
    }
}

impl<V: PartialEq + Clone> Default for SimplicialComplex<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: PartialEq + Clone> FromIterator<Set<V>> for SimplicialComplex<V> {
    fn from_iter<I: IntoIterator<Item = Set<V>>>(iter: I) -> Self {
        Self::from_faces(iter)
    }
}

/// Renders only the maximal faces, each with a `Δ` marker; the closure
/// makes everything else implicit. The empty complex renders as `{}`.
impl<V: fmt::Display + PartialEq + Clone> fmt::Display for SimplicialComplex<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, face) in self.non_faces().iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "Δ{face}")?;
        }
        f.write_str("}")
    }
}
