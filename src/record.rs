//! Core record type shared by all extractor tools.

use std::fmt;

/// Position of a record in an accessor's sequence.
///
/// The status-log tool numbers scans starting at 1, the tune-method tool numbers
/// segments starting at 0. Downstream consumers parse the literal boundary text, so
/// both conventions are preserved exactly.
pub type RecordIndex = u64;

/// An ordered sequence of label/value pairs describing one scan, tuning segment,
/// or metadata unit.
///
/// Labels may repeat within a record (instruments report some status fields more
/// than once), and pair order is significant: output must reproduce the pairs
/// exactly as the instrument reported them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pairs: Vec<(String, String)>,
}

impl Record {
    /// Create a new empty record.
    pub fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Append a label/value pair, preserving insertion order.
    pub fn push(&mut self, label: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((label.into(), value.into()));
    }

    /// Append a label/value pair (builder pattern).
    pub fn with(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(label, value);
        self
    }

    /// Iterate over the pairs in original order.
    pub fn pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(l, v)| (l.as_str(), v.as_str()))
    }

    /// Number of label/value pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the record has no pairs.
    ///
    /// An empty record is still a record: the frame writer emits its boundary
    /// line even when there are no data lines.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<L: Into<String>, V: Into<String>> FromIterator<(L, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (L, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(l, v)| (l.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({} pairs)", self.pairs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_pair_order_and_duplicates() {
        let record = Record::new()
            .with("Ion Gauge", "1.2e-5")
            .with("Vacuum", "OK")
            .with("Ion Gauge", "1.3e-5");

        let pairs: Vec<_> = record.pairs().collect();
        assert_eq!(
            pairs,
            vec![
                ("Ion Gauge", "1.2e-5"),
                ("Vacuum", "OK"),
                ("Ion Gauge", "1.3e-5"),
            ]
        );
    }

    #[test]
    fn from_iterator_keeps_order() {
        let record: Record = vec![("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(record.len(), 2);
        assert!(!record.is_empty());
    }

    #[test]
    fn empty_record() {
        let record = Record::new();
        assert!(record.is_empty());
        assert_eq!(record.pairs().count(), 0);
    }
}
