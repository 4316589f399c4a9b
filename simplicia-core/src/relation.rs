//! Binary relations represented as sets of ordered pairs.
//!
//! A `Set<(T, S)>` is a relation between `T` and `S`; the predicates below
//! classify it as a map, injection, surjection or bijection, and a
//! homogeneous `Set<(T, T)>` additionally as an equivalence relation.

use crate::set::Set;

impl<T: PartialEq + Clone, S: PartialEq + Clone> Set<(T, S)> {
    /// Second components of all pairs.
    pub fn image(&self) -> Set<S> {
        self.iter().map(|(_, s)| s.clone()).collect()
    }

    /// First components of all pairs.
    pub fn preimage(&self) -> Set<T> {
        self.iter().map(|(t, _)| t.clone()).collect()
    }

    /// Second components of pairs whose first component lies in `domain`.
    pub fn image_of_set(&self, domain: &Set<T>) -> Set<S> {
        self.iter()
            .filter(|(t, _)| domain.contains(t))
            .map(|(_, s)| s.clone())
            .collect()
    }

    /// First components of pairs whose second component lies in `codomain`.
    pub fn preimage_of_set(&self, codomain: &Set<S>) -> Set<T> {
        self.iter()
            .filter(|(_, s)| codomain.contains(s))
            .map(|(t, _)| t.clone())
            .collect()
    }

    /// Second components of the pairs with first component `t`.
    pub fn image_of(&self, t: &T) -> Set<S> {
        self.iter()
            .filter(|(a, _)| a == t)
            .map(|(_, s)| s.clone())
            .collect()
    }

    /// First components of the pairs with second component `s`.
    pub fn preimage_of(&self, s: &S) -> Set<T> {
        self.iter()
            .filter(|(_, b)| b == s)
            .map(|(t, _)| t.clone())
            .collect()
    }

    /// Each first component relates to exactly one second component.
    pub fn is_map(&self) -> bool {
        self.iter().all(|(t, _)| self.image_of(t).len() == 1)
    }

    /// A map under which distinct inputs have distinct outputs.
    pub fn is_injective(&self) -> bool {
        self.is_map() && self.image().iter().all(|s| self.preimage_of(s).len() == 1)
    }

    /// A map whose image covers `codomain`.
    pub fn is_surjective(&self, codomain: &Set<S>) -> bool {
        self.is_map() && self.image().is_superset(codomain)
    }

    pub fn is_bijective(&self, codomain: &Set<S>) -> bool {
        self.is_surjective(codomain) && self.is_injective()
    }
}

impl<T: PartialEq + Clone> Set<(T, T)> {
    /// Every element mentioned on either side relates to itself.
    pub fn is_reflexive(&self) -> bool {
        self.preimage()
            .union(&self.image())
            .iter()
            .all(|t| self.contains(&(t.clone(), t.clone())))
    }

    pub fn is_symmetric(&self) -> bool {
        self.iter()
            .all(|(a, b)| self.contains(&(b.clone(), a.clone())))
    }

    pub fn is_transitive(&self) -> bool {
        self.iter().all(|(a, b)| {
            self.iter()
                .all(|(c, d)| b != c || self.contains(&(a.clone(), d.clone())))
        })
    }

    pub fn is_equivalence(&self) -> bool {
        self.is_reflexive() && self.is_symmetric() && self.is_transitive()
    }
}

#[cfg(test)]
mod tests {
    use crate::set::Set;

    fn pairs(list: &[(i32, i32)]) -> Set<(i32, i32)> {
        list.iter().copied().collect()
    }

    #[test]
    fn images_and_preimages() {
        let rel = pairs(&[(1, 10), (2, 20), (3, 20)]);
        assert_eq!(rel.image(), Set::from_iter([10, 20]));
        assert_eq!(rel.preimage(), Set::from_iter([1, 2, 3]));
        assert_eq!(rel.image_of(&2), Set::from_iter([20]));
        assert_eq!(rel.preimage_of(&20), Set::from_iter([2, 3]));
        assert_eq!(
            rel.image_of_set(&Set::from_iter([1, 3])),
            Set::from_iter([10, 20])
        );
        assert_eq!(
            rel.preimage_of_set(&Set::from_iter([10])),
            Set::from_iter([1])
        );
    }

    #[test]
    fn map_classification() {
        let map = pairs(&[(1, 10), (2, 20), (3, 20)]);
        assert!(map.is_map());
        assert!(!map.is_injective());
        assert!(map.is_surjective(&Set::from_iter([10, 20])));
        assert!(!map.is_surjective(&Set::from_iter([10, 20, 30])));

        let not_map = pairs(&[(1, 10), (1, 20)]);
        assert!(!not_map.is_map());

        let bijection = pairs(&[(1, 10), (2, 20)]);
        assert!(bijection.is_bijective(&Set::from_iter([10, 20])));
    }

    #[test]
    fn equivalence_relations() {
        let identity = pairs(&[(1, 1), (2, 2)]);
        assert!(identity.is_equivalence());

        let symmetric_pair = pairs(&[(1, 1), (2, 2), (1, 2), (2, 1)]);
        assert!(symmetric_pair.is_equivalence());

        let missing_reflexive = pairs(&[(1, 2), (2, 1)]);
        assert!(!missing_reflexive.is_reflexive());

        let missing_transitive = pairs(&[(1, 1), (2, 2), (3, 3), (1, 2), (2, 1), (2, 3), (3, 2)]);
        assert!(missing_transitive.is_reflexive());
        assert!(missing_transitive.is_symmetric());
        assert!(!missing_transitive.is_transitive());
    }
}
