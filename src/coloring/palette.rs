//! Smallest-free-color lookup shared by the greedy strategies.

/// Marker for a vertex that has no color yet.
pub(crate) const UNCOLORED: usize = usize::MAX;

/// Reusable scratch buffer for "smallest color not used by any neighbor".
///
/// Each query stamps the neighbor colors with a fresh generation number, so
/// the buffer never needs clearing between vertices.
#[derive(Debug, Default)]
pub(crate) struct FreeColors {
    marks: Vec<usize>,
    stamp: usize,
}

impl FreeColors {
    pub(crate) fn with_capacity(colors: usize) -> Self {
        Self {
            marks: vec![0; colors],
            stamp: 0,
        }
    }

    /// Smallest color absent from `colors[w]` for every `w` in `neighbors`.
    /// Uncolored neighbors are ignored.
    pub(crate) fn smallest_free(&mut self, colors: &[usize], neighbors: &[usize]) -> usize {
        self.stamp += 1;
        for &w in neighbors {
            let c = colors[w];
            if c == UNCOLORED {
                continue;
            }
            if c >= self.marks.len() {
                self.marks.resize(c + 1, 0);
            }
            self.marks[c] = self.stamp;
        }
        (0..self.marks.len())
            .find(|&c| self.marks[c] != self.stamp)
            .unwrap_or(self.marks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_used_colors_and_ignores_uncolored() {
        let colors = [0, 1, UNCOLORED, 3];
        let mut free = FreeColors::default();

        assert_eq!(free.smallest_free(&colors, &[0, 1, 2, 3]), 2);
        assert_eq!(free.smallest_free(&colors, &[1, 3]), 0);
        assert_eq!(free.smallest_free(&colors, &[]), 0);
        assert_eq!(free.smallest_free(&colors, &[2]), 0);
    }

    #[test]
    fn grows_past_initial_capacity() {
        let colors = [0, 1, 2];
        let mut free = FreeColors::with_capacity(1);
        assert_eq!(free.smallest_free(&colors, &[0, 1, 2]), 3);
    }
}
