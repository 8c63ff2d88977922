//! Sequential extraction: a monotonic probe loop with no upper bound known in
//! advance.
//!
//! The vendor source cannot report a total record count cheaply, so rather than
//! querying metadata the extractor simply probes successive indices and treats
//! the first [`Fetch::EndOfSequence`](crate::accessor::Fetch::EndOfSequence)
//! result as the natural terminator.

use std::iter::FusedIterator;

use log::debug;

use crate::accessor::{AccessorError, Fetch, RecordAccessor};
use crate::record::{Record, RecordIndex};

/// Lazy iterator over an accessor's records, starting at a fixed origin.
///
/// Yields `(index, record)` pairs so the caller can frame each record with the
/// numbering convention the index was probed under. Ends silently on the first
/// end-of-sequence probe; a hard read failure is yielded once as an `Err`,
/// after which the iterator is fused.
pub struct Records<'a, A: RecordAccessor> {
    accessor: &'a mut A,
    next_index: RecordIndex,
    origin: RecordIndex,
    done: bool,
}

impl<'a, A: RecordAccessor> Records<'a, A> {
    pub(crate) fn new(accessor: &'a mut A, origin: RecordIndex) -> Self {
        Self {
            accessor,
            next_index: origin,
            origin,
            done: false,
        }
    }

    /// Index of the next record to probe.
    pub fn position(&self) -> RecordIndex {
        self.next_index
    }
}

impl<A: RecordAccessor> Iterator for Records<'_, A> {
    type Item = Result<(RecordIndex, Record), AccessorError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.accessor.record_at(self.next_index) {
            Ok(Fetch::Found(record)) => {
                let index = self.next_index;
                self.next_index += 1;
                Some(Ok((index, record)))
            }
            Ok(Fetch::EndOfSequence) => {
                self.done = true;
                debug!(
                    "end of sequence at index {} ({} records)",
                    self.next_index,
                    self.next_index - self.origin
                );
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<A: RecordAccessor> FusedIterator for Records<'_, A> {}
