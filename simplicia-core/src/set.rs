use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

/// An insertion-ordered, duplicate-free collection with set semantics.
///
/// Elements are kept in the order they were first inserted, which makes
/// iteration deterministic, but equality ignores order entirely: two sets
/// are equal exactly when each contains the other. Only `PartialEq` is
/// required of the element type; no hashing or total order is imposed, so
/// sets of sets (and sets of sets of sets) compose freely.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct Set<T> {
    elements: Vec<T>,
}

impl<T> Set<T> {
    #[inline]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Element at `index` in insertion order.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.elements.clear();
    }
}

impl<T: PartialEq> Set<T> {
    /// Inserts `element` unless an equal one is already present.
    ///
    /// Returns whether the set grew. Insertion order of elements already
    /// present is unaffected.
    pub fn insert(&mut self, element: T) -> bool {
        if self.elements.contains(&element) {
            return false;
        }
        self.elements.push(element);
        true
    }

    /// Removes the element equal to `element`, if present.
    pub fn remove(&mut self, element: &T) -> bool {
        match self.elements.iter().position(|e| e == element) {
            Some(index) => {
                self.elements.remove(index);
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        self.elements.contains(element)
    }

    /// Every element of `self` is an element of `other`.
    pub fn is_subset(&self, other: &Set<T>) -> bool {
        self.elements.iter().all(|e| other.contains(e))
    }

    /// Every element of `other` is an element of `self`.
    #[inline]
    pub fn is_superset(&self, other: &Set<T>) -> bool {
        other.is_subset(self)
    }

    /// `self ⊂ other`: subset and not equal.
    #[inline]
    pub fn is_proper_subset(&self, other: &Set<T>) -> bool {
        self.is_subset(other) && !other.is_subset(self)
    }

    /// `self ⊃ other`: superset and not equal.
    #[inline]
    pub fn is_proper_superset(&self, other: &Set<T>) -> bool {
        other.is_proper_subset(self)
    }

    /// The two sets have at least one common element.
    pub fn meets(&self, other: &Set<T>) -> bool {
        self.elements.iter().any(|e| other.contains(e))
    }
}

impl<T: PartialEq + Clone> Set<T> {
    /// Elements of either operand, each exactly once.
    pub fn union(&self, other: &Set<T>) -> Set<T> {
        let mut result = self.clone();
        for element in &other.elements {
            result.insert(element.clone());
        }
        result
    }

    /// Elements present in both operands.
    pub fn intersection(&self, other: &Set<T>) -> Set<T> {
        Set {
            elements: self
                .elements
                .iter()
                .filter(|e| other.contains(e))
                .cloned()
                .collect(),
        }
    }

    /// Elements of `self` not present in `other`.
    pub fn difference(&self, other: &Set<T>) -> Set<T> {
        Set {
            elements: self
                .elements
                .iter()
                .filter(|e| !other.contains(e))
                .cloned()
                .collect(),
        }
    }

    /// Elements in exactly one operand.
    pub fn symmetric_difference(&self, other: &Set<T>) -> Set<T> {
        self.union(other).difference(&self.intersection(other))
    }

    /// The set of single-element sets, one per element.
    pub fn singletons(&self) -> Set<Set<T>> {
        Set {
            elements: self
                .elements
                .iter()
                .map(|e| Set::from_iter([e.clone()]))
                .collect(),
        }
    }

    /// The set of all subsets, including the empty set and `self`.
    ///
    /// Generated iteratively: the set bits of each integer in
    /// `0..2^n` select the elements of one subset, so the result has
    /// exactly `2^n` members and the empty set comes first.
    pub fn power_set(&self) -> Set<Set<T>> {
        let n = self.elements.len();
        assert!(
            n < usize::BITS as usize,
            "power set of {n} elements cannot be enumerated"
        );
        let mut subsets = Vec::with_capacity(1usize << n);
        for mask in 0..(1usize << n) {
            let mut subset = Vec::new();
            for (bit, element) in self.elements.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    subset.push(element.clone());
                }
            }
            subsets.push(Set { elements: subset });
        }
        Set { elements: subsets }
    }

    /// The subsets satisfying `predicate`.
    pub fn power_set_filtered<P>(&self, predicate: P) -> Set<Set<T>>
    where
        P: FnMut(&Set<T>) -> bool,
    {
        let mut predicate = predicate;
        Set {
            elements: self
                .power_set()
                .elements
                .into_iter()
                .filter(|s| predicate(s))
                .collect(),
        }
    }

    /// All subsets of cardinality exactly `size` (the Kneser family).
    pub fn subsets_of_size(&self, size: usize) -> Set<Set<T>> {
        self.power_set_filtered(|s| s.len() == size)
    }

    /// All ordered pairs `(a, b)` with `a ∈ self`, `b ∈ other`.
    pub fn cartesian_product<U: PartialEq + Clone>(&self, other: &Set<U>) -> Set<(T, U)> {
        let mut pairs = Vec::with_capacity(self.len() * other.len());
        for a in &self.elements {
            for b in &other.elements {
                pairs.push((a.clone(), b.clone()));
            }
        }
        Set { elements: pairs }
    }
}

impl<T> Default for Set<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Set equality is mutual containment; insertion order is irrelevant.
impl<T: PartialEq> PartialEq for Set<T> {
    fn eq(&self, other: &Self) -> bool {
        self.is_subset(other) && other.is_subset(self)
    }
}

impl<T: Eq> Eq for Set<T> {}

/// The subset partial order: `a < b` means `a` is a proper subset of `b`.
///
/// Incomparable sets (neither contains the other) yield `None`; this is
/// mathematical containment, not a lexicographic comparison.
impl<T: PartialEq> PartialOrd for Set<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_subset(other), other.is_subset(self)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

/// Order-independent hash, consistent with set equality: each element is
/// hashed on its own and the 64-bit results are summed with wrapping
/// arithmetic, so equal sets hash equally whatever their insertion order.
impl<T: Hash> Hash for Set<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sum = 0u64;
        for element in &self.elements {
            let mut hasher = ahash::AHasher::default();
            element.hash(&mut hasher);
            sum = sum.wrapping_add(hasher.finish());
        }
        state.write_u64(sum);
    }
}

impl<T: fmt::Display> fmt::Display for Set<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (index, element) in self.elements.iter().enumerate() {
            if index > 0 {
                f.write_str(",")?;
            }
            write!(f, "{element}")?;
        }
        f.write_str("}")
    }
}

impl<T: PartialEq> FromIterator<T> for Set<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Set::new();
        for element in iter {
            set.insert(element);
        }
        set
    }
}

impl<T: PartialEq> Extend<T> for Set<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.insert(element);
        }
    }
}

impl<T> IntoIterator for Set<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Set<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl<T: PartialEq + Clone> BitOr for &Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: Self) -> Set<T> {
        self.union(rhs)
    }
}

impl<T: PartialEq + Clone> BitAnd for &Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: Self) -> Set<T> {
        self.intersection(rhs)
    }
}

impl<T: PartialEq + Clone> Sub for &Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: Self) -> Set<T> {
        self.difference(rhs)
    }
}

impl<T: PartialEq + Clone> BitXor for &Set<T> {
    type Output = Set<T>;

    fn bitxor(self, rhs: Self) -> Set<T> {
        self.symmetric_difference(rhs)
    }
}

impl<T: PartialEq + Clone> BitOr for Set<T> {
    type Output = Set<T>;

    fn bitor(self, rhs: Set<T>) -> Set<T> {
        self.union(&rhs)
    }
}

impl<T: PartialEq + Clone> BitAnd for Set<T> {
    type Output = Set<T>;

    fn bitand(self, rhs: Set<T>) -> Set<T> {
        self.intersection(&rhs)
    }
}

impl<T: PartialEq + Clone> Sub for Set<T> {
    type Output = Set<T>;

    fn sub(self, rhs: Set<T>) -> Set<T> {
        self.difference(&rhs)
    }
}

impl<T: PartialEq + Clone> BitXor for Set<T> {
    type Output = Set<T>;

    fn bitxor(self, rhs: Set<T>) -> Set<T> {
        self.symmetric_difference(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::Set;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn set(range: std::ops::RangeInclusive<i32>) -> Set<i32> {
        range.collect()
    }

    #[test]
    fn insert_ignores_duplicates() {
        let mut s = set(1..=2);
        assert!(!s.insert(2));
        assert_eq!(s.len(), 2);
        assert!(s.insert(3));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn binary_operations() {
        assert_eq!(set(1..=3).intersection(&set(2..=5)), set(2..=3));
        assert_eq!(set(1..=3).union(&set(2..=5)), set(1..=5));
        assert_eq!(set(1..=4).difference(&set(3..=4)), set(1..=2));
        assert_eq!(
            set(1..=4).symmetric_difference(&set(3..=6)),
            Set::from_iter([1, 2, 5, 6])
        );
    }

    #[test]
    fn operator_forms_match_named_methods() {
        assert_eq!(&set(1..=3) & &set(2..=5), set(2..=3));
        assert_eq!(&set(1..=3) | &set(2..=5), set(1..=5));
        assert_eq!(&set(1..=4) - &set(3..=4), set(1..=2));
        assert_eq!(&set(1..=4) ^ &set(3..=6), Set::from_iter([1, 2, 5, 6]));
    }

    #[test]
    fn subset_relations_are_the_partial_order() {
        assert!(set(3..=4) < set(1..=4));
        assert!(set(3..=4) <= set(1..=4));
        assert!(set(1..=4) > set(3..=4));
        assert!(!(set(1..=4) < set(3..=4)));
        assert!(!(set(1..=4) <= set(3..=4)));
        assert!(!(set(1..=4) < set(1..=4)));
        assert!(set(1..=4) <= set(1..=4));
        assert!(set(1..=4) >= set(1..=4));
        // incomparable sets admit no ordering at all
        assert_eq!(set(1..=2).partial_cmp(&set(2..=3)), None);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        assert_eq!(Set::from_iter([1, 2, 3]), Set::from_iter([3, 1, 2]));
        assert_ne!(set(1..=2), set(1..=3));
        assert_ne!(set(1..=3), set(1..=2));
    }

    #[test]
    fn hash_is_order_independent() {
        let hash = |s: &Set<i32>| {
            let mut hasher = DefaultHasher::new();
            s.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(
            hash(&Set::from_iter([1, 2, 3])),
            hash(&Set::from_iter([3, 2, 1]))
        );
        assert_eq!(hash(&Set::<i32>::new()), hash(&Set::from_iter([])));
    }

    #[test]
    fn power_set_has_cardinality_two_to_the_n() {
        for n in 0..=7 {
            let s: Set<i32> = (0..n).collect();
            assert_eq!(s.power_set().len(), 1 << n);
        }
    }

    #[test]
    fn power_set_contains_empty_set_and_whole_set() {
        let s = set(1..=3);
        let power = s.power_set();
        assert!(power.contains(&Set::new()));
        assert!(power.contains(&s));
        assert!(power.iter().all(|subset| subset.is_subset(&s)));
    }

    #[test]
    fn filtered_power_set() {
        let s = set(1..=3);
        let singletons = s.power_set_filtered(|x| x.len() == 1);
        assert_eq!(singletons.len(), 3);
        assert!(singletons.contains(&Set::from_iter([2])));
        assert_eq!(s.subsets_of_size(2).len(), 3);
    }

    #[test]
    fn cartesian_product_cardinality() {
        assert_eq!(Set::<i32>::new().cartesian_product(&Set::<i32>::new()).len(), 0);
        assert_eq!(set(1..=2).cartesian_product(&Set::<i32>::new()).len(), 0);
        assert_eq!(set(1..=2).cartesian_product(&set(1..=3)).len(), 6);
        assert!(set(1..=2)
            .cartesian_product(&set(1..=3))
            .contains(&(2, 3)));
    }

    #[test]
    fn meets_detects_common_elements() {
        assert!(set(1..=2).meets(&set(2..=3)));
        assert!(!Set::<i32>::new().meets(&Set::new()));
        assert!(!set(1..=1).meets(&set(2..=2)));
    }

    #[test]
    fn singletons_are_one_per_element() {
        let singles = set(1..=3).singletons();
        assert_eq!(singles.len(), 3);
        assert!(singles.contains(&Set::from_iter([1])));
    }

    #[test]
    fn remove_and_clear() {
        let mut s = set(1..=3);
        assert!(s.remove(&2));
        assert!(!s.remove(&2));
        assert_eq!(s, Set::from_iter([1, 3]));
        s.clear();
        assert!(s.is_empty());
    }

    #[test]
    fn display_renders_in_insertion_order() {
        assert_eq!(set(1..=3).to_string(), "{1,2,3}");
        assert_eq!(Set::<i32>::new().to_string(), "{}");
    }
}
