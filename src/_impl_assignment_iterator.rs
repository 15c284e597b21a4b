use crate::{Assignment, AssignmentIterator, Variable};
use std::mem::swap;

impl AssignmentIterator {
    /// Create a new iterator over all assignments of the given variables.
    ///
    /// *Panics:* there can be at most `usize::BITS - 1` variables.
    pub fn new(variables: &[Variable]) -> AssignmentIterator {
        let first = Assignment::all_false(variables);
        if first.len() >= usize::BITS as usize {
            panic!(
                "Cannot enumerate assignments of {} variables.",
                first.len()
            );
        }
        AssignmentIterator {
            remaining: 1 << first.len(),
            next_assignment: Some(first),
        }
    }
}

impl Iterator for AssignmentIterator {
    type Item = Assignment;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        // Produce the successor of the current assignment and swap the two,
        // unless this was the last one.
        let mut result = if self.remaining == 0 {
            None
        } else {
            self.next_assignment.as_ref().map(|current| {
                let mut successor = current.clone();
                successor.advance();
                successor
            })
        };
        swap(&mut result, &mut self.next_assignment);
        result
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for AssignmentIterator {}
