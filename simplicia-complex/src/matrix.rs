//! `{0,1}`-valued adjacency matrices over an abstract field.

use std::hash::Hash;

use ahash::AHashMap;
use simplicia_core::Field;

use crate::complex::SimplicialComplex;

impl<V: Eq + Hash + Clone> SimplicialComplex<V> {
    /// The adjacency matrix of the 1-skeleton, as a dense map from vertex
    /// pairs to field values: `unit` on symmetric edge entries, `zero`
    /// everywhere else, including the diagonal.
    pub fn adjacency_matrix<F: Field>(&self) -> AHashMap<(V, V), F> {
        let vertices = self.vertices();
        let mut matrix = AHashMap::with_capacity(vertices.len() * vertices.len());
        for v in vertices.iter() {
            for w in vertices.iter() {
                matrix.insert((v.clone(), w.clone()), F::zero());
            }
        }
        for edge in self.edges().iter() {
            let mut endpoints = edge.iter();
            if let (Some(a), Some(b)) = (endpoints.next(), endpoints.next()) {
                matrix.insert((a.clone(), b.clone()), F::unit());
                matrix.insert((b.clone(), a.clone()), F::unit());
            }
        }
        matrix
    }
}

/// The matrix equals its transpose.
pub fn is_symmetric<V: Eq + Hash + Clone, F: Field>(matrix: &AHashMap<(V, V), F>) -> bool {
    matrix
        .iter()
        .all(|((v, w), value)| matrix.get(&(w.clone(), v.clone())) == Some(value))
}
