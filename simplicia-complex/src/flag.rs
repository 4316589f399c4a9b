//! Flag-complex closure and clique machinery.

use simplicia_core::Set;

use crate::complex::SimplicialComplex;

impl<V: PartialEq + Clone> SimplicialComplex<V> {
    /// The complex is (at most) a graph in which every pair of distinct
    /// vertices is joined, or is trivially small.
    pub fn is_complete_graph(&self) -> bool {
        if self.dimension() <= 0 && self.order() <= 1 {
            return true;
        }
        if self.dimension() != 1 {
            return false;
        }
        let order = self.order();
        self.size() == order * (order - 1) / 2
    }

    /// The clique complex of the 1-skeleton: a fixed-point closure that
    /// keeps filling in simplices until none can be added.
    ///
    /// A candidate face of size n ≥ 3 is added once all of its
    /// (n−1)-subsets are present, which inductively means its vertices
    /// are pairwise joined. The 1-skeleton itself is left untouched: no
    /// new edges appear, only higher simplices.
    pub fn flag_complex(&self) -> Self {
        let mut result = self.clone();
        loop {
            let vertices = result.vertices();
            let mut extra: Vec<Set<V>> = Vec::new();
            for face in result.iter() {
                if face.len() < 2 {
                    continue;
                }
                for vertex in vertices.iter() {
                    if face.contains(vertex) {
                        continue;
                    }
                    let mut candidate = face.clone();
                    candidate.insert(vertex.clone());
                    if result.contains(&candidate) || extra.contains(&candidate) {
                        continue;
                    }
                    let closed = candidate.iter().all(|excluded| {
                        let mut boundary = candidate.clone();
                        boundary.remove(excluded);
                        result.contains(&boundary)
                    });
                    if closed {
                        extra.push(candidate);
                    }
                }
            }
            if extra.is_empty() {
                return result;
            }
            for simplex in extra {
                result.insert(simplex);
            }
        }
    }

    /// The intersection graph of the maximal cliques.
    ///
    /// The maximal faces of the flag complex that induce complete
    /// subgraphs are the maximal cliques; each becomes a vertex, joined
    /// whenever two cliques share a vertex.
    pub fn clique_graph(&self) -> SimplicialComplex<Set<V>> {
        let cliques: Set<Set<V>> = self
            .flag_complex()
            .non_faces()
            .into_iter()
            .filter(|face| self.induced_subcomplex(face).is_complete_graph())
            .collect();
        SimplicialComplex::intersection_graph(&cliques)
    }

    /// Same vertices; exactly the edges this complex lacks.
    pub fn complement(&self) -> Self {
        let vertices = self.vertices();
        let mut result = SimplicialComplex::new();
        for vertex in vertices.iter() {
            result.insert(Set::from_iter([vertex.clone()]));
        }
        for v in vertices.iter() {
            for w in vertices.iter() {
                if v == w {
                    continue;
                }
                let edge = Set::from_iter([v.clone(), w.clone()]);
                if !self.contains(&edge) {
                    result.insert(edge);
                }
            }
        }
        result
    }

    /// The graph whose vertices are the given sets, joined whenever two
    /// of them intersect.
    pub fn intersection_graph(sets: &Set<Set<V>>) -> SimplicialComplex<Set<V>> {
        let mut result = SimplicialComplex::new();
        for set in sets.iter() {
            result.insert(Set::from_iter([set.clone()]));
        }
        for s in sets.iter() {
            for t in sets.iter() {
                if s != t && s.meets(t) {
                    result.insert(Set::from_iter([s.clone(), t.clone()]));
                }
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::SimplicialComplex;
    use crate::catalogue::{complete_graph, cycle_graph, edgeless_graph, path_graph};
    use simplicia_core::Set;

    #[test]
    fn complete_graph_detection() {
        assert!(complete_graph(1).is_complete_graph());
        assert!(complete_graph(4).is_complete_graph());
        assert!(!path_graph(3).is_complete_graph());
        assert!(!edgeless_graph(2).is_complete_graph());
        let empty: SimplicialComplex<i32> = SimplicialComplex::new();
        assert!(empty.is_complete_graph());
    }

    #[test]
    fn flag_complex_fills_the_hollow_triangle() {
        let hollow: SimplicialComplex<&str> = SimplicialComplex::from_faces([
            Set::from_iter(["a", "b"]),
            Set::from_iter(["b", "c"]),
            Set::from_iter(["a", "c"]),
        ]);
        assert_eq!(hollow.dimension(), 1);

        let flag = hollow.flag_complex();
        assert_eq!(flag.dimension(), 2);
        assert!(flag.contains(&Set::from_iter(["a", "b", "c"])));
    }

    #[test]
    fn flag_complex_adds_no_edges() {
        let path = path_graph(3);
        let flag = path.flag_complex();
        assert_eq!(flag.size(), path.size());
        assert_eq!(flag.dimension(), 1);
    }

    #[test]
    fn flag_complex_of_k4_is_the_full_simplex() {
        let flag = complete_graph(4).flag_complex();
        assert_eq!(flag.dimension(), 3);
        // 2^4 - 1 nonempty subsets of the vertex set
        assert_eq!(flag.face_count(), 15);
    }

    #[test]
    fn clique_graph_of_complete_graphs_is_a_point() {
        for n in 1..=4 {
            assert_eq!(complete_graph(n).clique_graph().order(), 1);
        }
    }

    #[test]
    fn clique_graph_of_a_path() {
        // maximal cliques of P3 are its two edges, which share the middle
        // vertex, so the clique graph is a single edge
        let cliques = path_graph(3).clique_graph();
        assert_eq!(cliques.order(), 2);
        assert_eq!(cliques.size(), 1);
    }

    #[test]
    fn complement_swaps_edges_and_non_edges() {
        let complement = path_graph(3).complement();
        assert_eq!(complement.order(), 3);
        assert_eq!(complement.size(), 1);

        assert_eq!(complete_graph(3).complement().size(), 0);
        assert_eq!(edgeless_graph(3).complement().size(), 3);
    }

    #[test]
    fn intersection_graph_joins_meeting_sets() {
        let sets: Set<Set<i32>> = Set::from_iter([
            Set::from_iter([1, 2]),
            Set::from_iter([2, 3]),
            Set::from_iter([4]),
        ]);
        let graph = SimplicialComplex::intersection_graph(&sets);
        assert_eq!(graph.order(), 3);
        assert_eq!(graph.size(), 1);
    }
}
