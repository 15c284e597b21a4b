use super::{Assignment, Variable};
use std::fmt::{Display, Error, Formatter};
use std::ops::Index;

impl Assignment {
    /// Creates an empty assignment without any variables.
    pub fn empty() -> Assignment {
        Assignment::default()
    }

    /// Create an assignment with all the given variables set to `false`.
    ///
    /// Duplicate variables are only inserted once, at their first position.
    pub fn all_false(variables: &[Variable]) -> Assignment {
        let mut result = Assignment::empty();
        for variable in variables {
            result.insert_if_absent(*variable, false);
        }
        result
    }

    /// Create an assignment from a list of variables and values.
    ///
    /// The variables keep the order of the slice. If the slice contains multiple copies of
    /// the same variable, the variable keeps its first position, but the last value is accepted.
    pub fn from_values(values: &[(Variable, bool)]) -> Assignment {
        let mut result = Assignment::empty();
        for (variable, value) in values {
            result.set_value(*variable, *value);
        }
        result
    }

    /// Create the assignment which corresponds to the given truth table row.
    ///
    /// The first variable is the most significant bit of `row`, the last variable
    /// the least significant one.
    pub fn from_row(variables: &[Variable], row: usize) -> Assignment {
        let num_vars = variables.len();
        let mut result = Assignment::empty();
        for (i, variable) in variables.iter().enumerate() {
            let bit = (row >> (num_vars - 1 - i)) & 1 == 1;
            result.insert_if_absent(*variable, bit);
        }
        result
    }

    /// The truth table row of this assignment (inverse of `Assignment::from_row`).
    pub fn row(&self) -> usize {
        self.entries
            .iter()
            .fold(0, |row, (_, value)| (row << 1) | usize::from(*value))
    }

    /// Number of variables in this assignment.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the value of the given variable, if it is assigned.
    pub fn get(&self, variable: Variable) -> Option<bool> {
        self.positions
            .get(&variable)
            .map(|position| self.entries[*position].1)
    }

    /// Returns `true` if the variable has a value in this assignment.
    pub fn contains(&self, variable: Variable) -> bool {
        self.positions.contains_key(&variable)
    }

    /// Update the value of `variable`, appending it as the last (least significant)
    /// variable if it is not assigned yet.
    pub fn set_value(&mut self, variable: Variable, value: bool) {
        match self.positions.get(&variable) {
            Some(position) => self.entries[*position].1 = value,
            None => self.push(variable, value),
        }
    }

    /// Append `variable` with the given value, unless it is already assigned.
    ///
    /// Returns `true` if the variable was inserted.
    pub fn insert_if_absent(&mut self, variable: Variable, value: bool) -> bool {
        if self.contains(variable) {
            false
        } else {
            self.push(variable, value);
            true
        }
    }

    /// Variables of this assignment, in insertion order.
    pub fn variables(&self) -> Vec<Variable> {
        self.entries.iter().map(|(variable, _)| *variable).collect()
    }

    /// Values of this assignment, in insertion order.
    pub fn values(&self) -> Vec<bool> {
        self.entries.iter().map(|(_, value)| *value).collect()
    }

    /// Iterate over `(variable, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Variable, bool)> + '_ {
        self.entries.iter().copied()
    }

    /// Move to the next assignment in the enumeration order.
    ///
    /// The assignment is treated as a binary number with the last variable as the least
    /// significant bit and incremented by one. Starting from all-`false`, `2^N - 1` calls
    /// visit every assignment exactly once. The next call overflows back to all-`false`,
    /// so callers have to count the visited assignments themselves.
    pub fn advance(&mut self) {
        for (_, value) in self.entries.iter_mut().rev() {
            if *value {
                *value = false; // carry
            } else {
                *value = true;
                return;
            }
        }
    }

    fn push(&mut self, variable: Variable, value: bool) {
        self.positions.insert(variable, self.entries.len());
        self.entries.push((variable, value));
    }
}

impl Display for Assignment {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "[")?;
        for (i, (_, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", if *value { 1 } else { 0 })?;
        }
        write!(f, "]")
    }
}

/// Allow indexing of `Assignment` using `Variable`s.
///
/// *Panics:* the variable must be assigned.
impl Index<Variable> for Assignment {
    type Output = bool;

    fn index(&self, index: Variable) -> &Self::Output {
        match self.positions.get(&index) {
            Some(position) => &self.entries[*position].1,
            None => panic!("Variable {} is not assigned.", index),
        }
    }
}
