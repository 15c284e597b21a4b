use crate::parser::parse_formula;
use crate::{
    Assignment, BooleanExpression, FormulaNode, ParseError, TruthTableDisplay,
    UnboundVariableError, Variable, MAX_VARIABLES,
};
use std::cell::OnceCell;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};
use std::str::FromStr;
use tracing::{debug, trace};

impl BooleanExpression {
    /// Parse a formula string into a new `BooleanExpression`.
    pub fn parse(text: &str) -> Result<BooleanExpression, ParseError> {
        let root = parse_formula(text)?;
        let variables = root.variables();
        if variables.len() > MAX_VARIABLES {
            return Err(ParseError::TooManyVariables {
                count: variables.len(),
                limit: MAX_VARIABLES,
            });
        }
        debug!(formula = %root, num_vars = variables.len(), "parsed formula");
        Ok(BooleanExpression::with_variables(root, variables))
    }

    /// Create an expression from an existing tree.
    ///
    /// *Panics:* the tree can contain at most `MAX_VARIABLES` distinct variables.
    pub fn from_tree(root: FormulaNode) -> BooleanExpression {
        let variables = root.variables();
        if variables.len() > MAX_VARIABLES {
            panic!(
                "Too many variables. There can be at most {} variables, but the formula has {}.",
                MAX_VARIABLES,
                variables.len()
            );
        }
        BooleanExpression::with_variables(root, variables)
    }

    fn with_variables(root: FormulaNode, variables: Vec<Variable>) -> BooleanExpression {
        BooleanExpression {
            root,
            variables,
            truth_table: OnceCell::new(),
            zhegalkin: OnceCell::new(),
        }
    }

    /// The root of the syntax tree.
    pub fn root(&self) -> &FormulaNode {
        &self.root
    }

    /// Consume the expression, returning its syntax tree.
    pub fn into_tree(self) -> FormulaNode {
        self.root
    }

    /// Variables of this expression, in the order of their first occurrence. This is
    /// also the column order of the truth table.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    /// A fresh assignment of this expression's variables, all set to `false`.
    pub fn assignment(&self) -> Assignment {
        Assignment::all_false(&self.variables)
    }

    /// Evaluate the expression in the given assignment.
    ///
    /// The assignment may contain additional variables. A missing variable results in
    /// `UnboundVariableError` and it is up to the caller to provide a value for it.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, UnboundVariableError> {
        self.root.eval(assignment)
    }

    /// Evaluate the expression with every variable set to `default`.
    pub fn eval_with_default(&self, default: bool) -> bool {
        let table = self.truth_table();
        if default {
            table[table.len() - 1]
        } else {
            table[0]
        }
    }

    /// The value of the expression in each of the `2^N` assignments of its variables.
    ///
    /// Row `i` corresponds to `Assignment::from_row(self.variables(), i)`: the first variable
    /// is the most significant bit. The table is computed on first use and cached.
    pub fn truth_table(&self) -> &[bool] {
        self.truth_table.get_or_init(|| self.compute_truth_table())
    }

    /// **(internal)** Evaluate the tree in every assignment, following `Assignment::advance`.
    fn compute_truth_table(&self) -> Vec<bool> {
        let rows = 1usize << self.num_vars();
        let mut assignment = self.assignment();
        let mut table = Vec::with_capacity(rows);
        for _ in 0..rows {
            match self.root.eval(&assignment) {
                Ok(value) => table.push(value),
                Err(e) => unreachable!("Assignment built from the tree misses a variable: {}", e),
            }
            assignment.advance();
        }
        if cfg!(feature = "shields_up") && assignment.row() != 0 {
            panic!("Enumeration did not wrap around: {}", assignment);
        }
        trace!(formula = %self.root, rows, "computed truth table");
        table
    }

    /// Returns `true` if the expression is true in every assignment.
    pub fn is_tautology(&self) -> bool {
        self.truth_table().iter().all(|value| *value)
    }

    /// Returns `true` if the expression is false in every assignment.
    pub fn is_contradiction(&self) -> bool {
        self.truth_table().iter().all(|value| !*value)
    }

    /// Number of assignments in which the expression is true.
    pub fn cardinality(&self) -> usize {
        self.truth_table().iter().filter(|value| **value).count()
    }

    /// Variables whose value actually influences the result, in the order of
    /// `self.variables()`.
    ///
    /// A variable is essential if flipping it changes the value in at least one row. This
    /// reads the whole truth table once per variable.
    pub fn essential_variables(&self) -> Vec<Variable> {
        let table = self.truth_table();
        let num_vars = self.num_vars();
        self.variables
            .iter()
            .enumerate()
            .filter(|(position, _)| {
                let bit = 1usize << (num_vars - 1 - position);
                (0..table.len())
                    .filter(|row| row & bit == 0)
                    .any(|row| table[row] != table[row | bit])
            })
            .map(|(_, variable)| *variable)
            .collect()
    }

    /// Returns `true` if both expressions have the same value in every assignment of
    /// the union of their variables.
    ///
    /// Both truth tables are computed, and the expressions are then compared only over their
    /// essential variables, so the cost is bounded by the larger of the two tables even when
    /// the union has more than `MAX_VARIABLES` variables.
    pub fn is_equivalent(&self, other: &BooleanExpression) -> bool {
        let essential = self.essential_variables();
        let mut sorted = essential.clone();
        let mut other_sorted = other.essential_variables();
        sorted.sort();
        other_sorted.sort();
        if sorted != other_sorted {
            return false;
        }
        // Inessential variables can have any value, so they stay `false`.
        (0..(1usize << essential.len())).all(|row| {
            let mut assignment = Assignment::from_row(&essential, row);
            self.root.fill_assignment(&mut assignment);
            other.root.fill_assignment(&mut assignment);
            self.eval(&assignment) == other.eval(&assignment)
        })
    }

    /// A value that renders the truth table with one row per assignment.
    ///
    /// ```rust
    /// use boolcalc::BooleanExpression;
    /// let expression = BooleanExpression::parse("x1 > x10").unwrap();
    /// let expected = "x1 x10 F\n0  0   1\n0  1   1\n1  0   0\n1  1   1\n";
    /// assert_eq!(expected, expression.truth_table_display().to_string());
    /// ```
    pub fn truth_table_display(&self) -> TruthTableDisplay<'_> {
        TruthTableDisplay { expression: self }
    }
}

impl Display for TruthTableDisplay<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let names: Vec<String> = self
            .expression
            .variables()
            .iter()
            .map(|v| v.to_string())
            .collect();
        for name in &names {
            write!(f, "{} ", name)?;
        }
        writeln!(f, "F")?;

        let mut assignment = self.expression.assignment();
        for value in self.expression.truth_table() {
            for (name, (_, bit)) in names.iter().zip(assignment.iter()) {
                write!(f, "{:<width$} ", u8::from(bit), width = name.len())?;
            }
            writeln!(f, "{}", u8::from(*value))?;
            assignment.advance();
        }
        Ok(())
    }
}

impl Display for BooleanExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.root)
    }
}

impl From<FormulaNode> for BooleanExpression {
    fn from(root: FormulaNode) -> Self {
        BooleanExpression::from_tree(root)
    }
}

impl TryFrom<&str> for BooleanExpression {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        BooleanExpression::parse(value)
    }
}

impl FromStr for BooleanExpression {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BooleanExpression::parse(s)
    }
}
