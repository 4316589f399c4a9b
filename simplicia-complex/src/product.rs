//! Graph products over the Cartesian product of vertex sets.
//!
//! Every product shares one skeleton: the product vertices are all pairs
//! of factor vertices, and a caller-supplied predicate on ordered pairs
//! of product vertices decides the edges. The Cartesian and tensor
//! products, and the bipartite double cover, are specializations of that
//! predicate, phrased through face-membership tests on the factors.

use simplicia_core::Set;

use crate::catalogue;
use crate::complex::SimplicialComplex;

impl<V: PartialEq + Clone> SimplicialComplex<V> {
    /// The general binary graph product.
    ///
    /// Builds one vertex per pair in `self.vertices() × other.vertices()`
    /// and one edge `{p, q}` for each ordered pair of product vertices
    /// satisfying `adjacent`. A pair that the predicate relates to itself
    /// collapses to a singleton face and adds nothing.
    pub fn graph_product<W, P>(
        &self,
        other: &SimplicialComplex<W>,
        adjacent: P,
    ) -> SimplicialComplex<(V, W)>
    where
        W: PartialEq + Clone,
        P: Fn(&(V, W), &(V, W)) -> bool,
    {
        let pairs = self.vertices().cartesian_product(&other.vertices());
        let mut product = SimplicialComplex::new();
        for pair in pairs.iter() {
            product.insert(Set::from_iter([pair.clone()]));
        }
        for p in pairs.iter() {
            for q in pairs.iter() {
                if adjacent(p, q) {
                    product.insert(Set::from_iter([p.clone(), q.clone()]));
                }
            }
        }
        product
    }

    /// The Cartesian product: move along an edge in one factor while
    /// standing still in the other.
    pub fn cartesian_product<W>(&self, other: &SimplicialComplex<W>) -> SimplicialComplex<(V, W)>
    where
        W: PartialEq + Clone,
    {
        self.graph_product(other, |p, q| {
            (p.0 == q.0 && other.contains(&Set::from_iter([p.1.clone(), q.1.clone()])))
                || (self.contains(&Set::from_iter([p.0.clone(), q.0.clone()])) && p.1 == q.1)
        })
    }

    /// The tensor product: both coordinates must be joined in their
    /// factors.
    ///
    /// A coordinate pair `{x, x}` collapses to the singleton `{x}`, which
    /// is a stored face, so staying still in one factor counts as joined.
    pub fn tensor_product<W>(&self, other: &SimplicialComplex<W>) -> SimplicialComplex<(V, W)>
    where
        W: PartialEq + Clone,
    {
        self.graph_product(other, |p, q| {
            self.contains(&Set::from_iter([p.0.clone(), q.0.clone()]))
                && other.contains(&Set::from_iter([p.1.clone(), q.1.clone()]))
        })
    }

    /// The tensor product with the 2-vertex complete graph.
    pub fn bipartite_double_cover(&self) -> SimplicialComplex<(V, String)> {
        self.tensor_product(&catalogue::complete_graph(2))
    }
}

#[cfg(test)]
mod tests {
    use crate::catalogue::{cycle_graph, path_graph};

    #[test]
    fn cartesian_product_of_p2_and_p3() {
        let grid = path_graph(2).cartesian_product(&path_graph(3));
        assert_eq!(grid.order(), 6);
        assert_eq!(grid.size(), 7);
    }

    #[test]
    fn tensor_product_of_c3_and_c4() {
        let product = cycle_graph(3).tensor_product(&cycle_graph(4));
        assert_eq!(product.order(), 12);
        assert_eq!(product.size(), 48);
    }

    #[test]
    fn bipartite_double_cover_of_c4() {
        let cover = cycle_graph(4).bipartite_double_cover();
        assert_eq!(cover.order(), 8);
        assert_eq!(cover.size(), 20);
    }

    #[test]
    fn product_dimension_stays_graphical() {
        let grid = path_graph(2).cartesian_product(&path_graph(2));
        assert_eq!(grid.dimension(), 1);
    }
}
