use crate::{Assignment, BinaryOp, BooleanExpression, FormulaNode};
use tracing::debug;

/// Methods for constructing canonical normal forms from the truth table.
impl BooleanExpression {
    /// The canonical disjunctive normal form: a disjunction of one minterm for every
    /// row of the truth table where the expression is `true`.
    ///
    /// Every minterm is a conjunction of all variables (negated where the row assigns `false`),
    /// in the order of `BooleanExpression::variables`. A contradiction yields the constant `0`.
    pub fn dnf(&self) -> BooleanExpression {
        let minterms = self
            .rows_with_value(true)
            .map(|row| self.minterm(row))
            .collect::<Vec<_>>();
        debug!(formula = %self, minterms = minterms.len(), "building DNF");
        let root = FormulaNode::mk_left_fold(BinaryOp::Or, minterms)
            .unwrap_or(FormulaNode::Const(false));
        BooleanExpression::from_tree(root)
    }

    /// The canonical conjunctive normal form: a conjunction of one maxterm for every
    /// row of the truth table where the expression is `false`.
    ///
    /// Every maxterm is a disjunction of all variables (negated where the row assigns `true`),
    /// in the order of `BooleanExpression::variables`. A tautology yields the constant `1`.
    pub fn cnf(&self) -> BooleanExpression {
        let maxterms = self
            .rows_with_value(false)
            .map(|row| self.maxterm(row))
            .collect::<Vec<_>>();
        debug!(formula = %self, maxterms = maxterms.len(), "building CNF");
        let root = FormulaNode::mk_left_fold(BinaryOp::And, maxterms)
            .unwrap_or(FormulaNode::Const(true));
        BooleanExpression::from_tree(root)
    }

    /// The conjunction that is `true` exactly in the given truth table row.
    ///
    /// With no variables, this is the constant `1`.
    pub fn minterm(&self, row: usize) -> FormulaNode {
        let literals = Assignment::from_row(self.variables(), row)
            .iter()
            .map(|(variable, value)| FormulaNode::mk_literal(variable, value))
            .collect::<Vec<_>>();
        FormulaNode::mk_left_fold(BinaryOp::And, literals).unwrap_or(FormulaNode::Const(true))
    }

    /// The disjunction that is `false` exactly in the given truth table row.
    ///
    /// With no variables, this is the constant `0`.
    pub fn maxterm(&self, row: usize) -> FormulaNode {
        let literals = Assignment::from_row(self.variables(), row)
            .iter()
            .map(|(variable, value)| FormulaNode::mk_literal(variable, !value))
            .collect::<Vec<_>>();
        FormulaNode::mk_left_fold(BinaryOp::Or, literals).unwrap_or(FormulaNode::Const(false))
    }

    /// **(internal)** Indices of truth table rows where the expression has the given value.
    fn rows_with_value(&self, value: bool) -> impl Iterator<Item = usize> + '_ {
        self.truth_table()
            .iter()
            .enumerate()
            .filter(move |(_, v)| **v == value)
            .map(|(row, _)| row)
    }
}
