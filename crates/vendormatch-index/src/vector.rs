/// Sparse weight vector as `(column, weight)` pairs sorted by column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds from pairs in any order. Columns must be unique.
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_unstable_by_key(|&(col, _)| col);
        Self { entries }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|&(_, w)| w == 0.0)
    }

    pub fn get(&self, col: usize) -> f64 {
        self.entries
            .binary_search_by_key(&col, |&(c, _)| c)
            .map(|i| self.entries[i].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|&(_, w)| w * w).sum::<f64>().sqrt()
    }

    /// Scales to unit length. The zero vector stays zero.
    pub fn l2_normalize(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }

    // merge join over sorted columns
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (a, b) = (&self.entries, &other.entries);
        let (mut i, mut j, mut sum) = (0, 0, 0.0);
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}
