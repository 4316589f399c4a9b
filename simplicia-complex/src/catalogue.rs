//! Deterministic constructors for the standard example graphs.
//!
//! Vertices are labelled `v_1 .. v_n`; the generic builder connects the
//! ordered pairs satisfying a predicate, so every named family below is a
//! one-line specialization.

use rand::Rng;
use simplicia_core::Set;

use crate::complex::SimplicialComplex;

/// The label of the `i`-th generated vertex.
pub fn vertex_label(i: usize) -> String {
    format!("v_{i}")
}

/// `n` labelled vertices, with an edge `{v_i, v_j}` for every ordered
/// pair `(i, j)` of distinct indices satisfying `predicate`.
pub fn predicate_graph<P>(n: usize, mut predicate: P) -> SimplicialComplex<String>
where
    P: FnMut(usize, usize) -> bool,
{
    let mut graph = SimplicialComplex::new();
    for i in 1..=n {
        graph.insert(Set::from_iter([vertex_label(i)]));
    }
    for i in 1..=n {
        for j in 1..=n {
            if i != j && predicate(i, j) {
                graph.insert(Set::from_iter([vertex_label(i), vertex_label(j)]));
            }
        }
    }
    graph
}

pub fn complete_graph(n: usize) -> SimplicialComplex<String> {
    predicate_graph(n, |_, _| true)
}

pub fn edgeless_graph(n: usize) -> SimplicialComplex<String> {
    predicate_graph(n, |_, _| false)
}

pub fn path_graph(n: usize) -> SimplicialComplex<String> {
    predicate_graph(n, |i, j| j == i + 1)
}

pub fn cycle_graph(n: usize) -> SimplicialComplex<String> {
    predicate_graph(n, |i, j| j % n == (i + 1) % n)
}

/// Independent coin flips decide the edges; the generator is a parameter
/// so constructions can be reproduced from a seed.
pub fn random_graph(
    n: usize,
    edge_probability: f64,
    rng: &mut impl Rng,
) -> SimplicialComplex<String> {
    predicate_graph(n, |_, _| rng.gen_bool(edge_probability))
}

/// Vertices `1..=n` on one side, `n+1..=n+m` on the other, all edges
/// across.
pub fn complete_bipartite_graph(n: usize, m: usize) -> SimplicialComplex<String> {
    predicate_graph(n + m, |i, j| i <= n && j > n)
}

pub fn star_graph(n: usize) -> SimplicialComplex<String> {
    complete_bipartite_graph(1, n)
}

pub fn grid_graph(n: usize, m: usize) -> SimplicialComplex<(String, String)> {
    path_graph(n).cartesian_product(&path_graph(m))
}

pub fn ladder_graph(n: usize) -> SimplicialComplex<(String, String)> {
    grid_graph(n, 2)
}

pub fn prism_graph(n: usize, m: usize) -> SimplicialComplex<(String, String)> {
    cycle_graph(n).cartesian_product(&path_graph(m))
}

pub fn stacked_book_graph(n: usize, m: usize) -> SimplicialComplex<(String, String)> {
    star_graph(n).cartesian_product(&path_graph(m))
}

pub fn book_graph(n: usize) -> SimplicialComplex<(String, String)> {
    stacked_book_graph(n, 2)
}

/// The Kneser graph: vertices are the `m`-element subsets of an
/// `order`-element ground set, joined exactly when disjoint.
pub fn kneser_graph(order: usize, m: usize) -> SimplicialComplex<Set<String>> {
    let ground: Set<String> = (1..=order).map(vertex_label).collect();
    let subsets = ground.subsets_of_size(m);
    SimplicialComplex::intersection_graph(&subsets).complement()
}

pub fn petersen_graph() -> SimplicialComplex<Set<String>> {
    kneser_graph(5, 2)
}
