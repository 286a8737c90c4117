//! Bijection between external vertex labels and dense indices.
//!
//! Input files name vertices with arbitrary integers. Every algorithm in this
//! crate works on dense indices `0..n`, so the loader sorts the distinct labels
//! ascending and numbers them in that order. The map is kept around so results
//! can be reported in the labels the user wrote.

/// External vertex identifier, as written in the input.
pub type ExternalId = i64;

/// Sorted external identifiers; position in the vector is the dense index.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct VertexMap {
    ids: Vec<ExternalId>,
}

impl VertexMap {
    /// Builds a map from identifiers that are already sorted and distinct.
    ///
    /// # Panics
    /// Panics if `ids` is not strictly increasing.
    pub fn from_sorted_ids(ids: Vec<ExternalId>) -> Self {
        assert!(
            ids.windows(2).all(|w| w[0] < w[1]),
            "external ids must be strictly increasing"
        );
        Self { ids }
    }

    /// Builds the identity map `i -> i` for `n` vertices.
    pub fn identity(n: usize) -> Self {
        let ids = (0..n)
            .map(|i| ExternalId::try_from(i).unwrap_or(ExternalId::MAX))
            .collect();
        Self { ids }
    }

    /// Number of mapped vertices.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if no vertex is mapped.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Dense index of an external identifier, if it is part of the graph.
    ///
    /// \(O(\log n)\): binary search over the sorted labels.
    pub fn index_of(&self, external: ExternalId) -> Option<usize> {
        self.ids.binary_search(&external).ok()
    }

    /// External identifier of a dense index.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn external(&self, index: usize) -> ExternalId {
        assert!(index < self.ids.len(), "vertex {index} out of bounds");
        self.ids[index]
    }

    /// Iterates external identifiers in dense-index order.
    pub fn iter(&self) -> impl Iterator<Item = ExternalId> + '_ {
        self.ids.iter().copied()
    }

    /// The sorted identifiers as a slice.
    pub fn as_slice(&self) -> &[ExternalId] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_labels_map_in_ascending_order() {
        let map = VertexMap::from_sorted_ids(vec![-4, 3, 10, 200]);
        assert_eq!(map.len(), 4);
        assert_eq!(map.index_of(-4), Some(0));
        assert_eq!(map.index_of(200), Some(3));
        assert_eq!(map.index_of(4), None);
        assert_eq!(map.external(2), 10);
        assert_eq!(map.iter().collect::<Vec<_>>(), vec![-4, 3, 10, 200]);
    }

    #[test]
    fn identity_map() {
        let map = VertexMap::identity(3);
        assert_eq!(map.as_slice(), &[0, 1, 2]);
        assert!(VertexMap::identity(0).is_empty());
    }

    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn rejects_unsorted_ids() {
        let _ = VertexMap::from_sorted_ids(vec![2, 1]);
    }
}
