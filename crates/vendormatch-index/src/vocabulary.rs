use std::collections::HashMap;

/// Term to column mapping, columns assigned in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    columns: HashMap<String, usize>,
    terms: Vec<String>,
}

impl Vocabulary {
    /// Returns the column for `term`, allocating the next one if unseen.
    pub(crate) fn intern(&mut self, term: &str) -> usize {
        if let Some(&col) = self.columns.get(term) {
            return col;
        }
        let col = self.terms.len();
        self.columns.insert(term.to_string(), col);
        self.terms.push(term.to_string());
        col
    }

    pub fn column(&self, term: &str) -> Option<usize> {
        self.columns.get(term).copied()
    }

    pub fn term(&self, column: usize) -> Option<&str> {
        self.terms.get(column).map(String::as_str)
    }

    /// Terms ordered by column.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interning_is_stable() {
        let mut v = Vocabulary::default();
        assert_eq!(v.intern("payroll"), 0);
        assert_eq!(v.intern("search"), 1);
        assert_eq!(v.intern("payroll"), 0);
        assert_eq!(v.len(), 2);
        assert_eq!(v.term(1), Some("search"));
        assert_eq!(v.column("missing"), None);
    }
}
