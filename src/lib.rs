//! # Boolcalc
//!
//! This crate provides a small calculator for propositional formulas over numbered boolean
//! variables `x0, x1, ...`. A formula is parsed from its infix form into an explicit
//! expression tree, which can then be evaluated, tabulated and converted into canonical
//! normal forms.
//!
//! At the moment, we support:
//!
//!  - Nine logical operators: negation `~`, conjunction `&`, disjunction `v`, implication `>`,
//!    converse implication `<`, exclusive or `+`, equivalence `=`, NAND `|` and NOR `^`.
//!  - Evaluation in an explicit `Assignment` of variables.
//!  - Truth tables, with rows enumerated by a carry-propagating `Assignment::advance`.
//!  - Canonical disjunctive and conjunctive normal forms and the Zhegalkin polynomial.
//!  - Classification of a formula with respect to the five Post classes and the
//!    functional completeness test for a system of formulas.
//!
//! ```rust
//! use boolcalc::*;
//!
//! let expression = BooleanExpression::parse("x1 + x2").unwrap();
//! assert_eq!(&[false, true, true, false], expression.truth_table());
//! assert_eq!("((x1 v x2) & (~x1 v ~x2))", expression.cnf().to_string());
//! assert_eq!("((~x1 & x2) v (x1 & ~x2))", expression.dnf().to_string());
//! assert_eq!("x1 + x2", expression.zhegalkin_string());
//!
//! let classes = expression.post_classes();
//! assert!(classes.is_linear());
//! assert!(!classes.is_monotone());
//!
//! let system = vec![
//!     BooleanExpression::parse("x1 & x2").unwrap(),
//!     BooleanExpression::parse("~x1").unwrap(),
//! ];
//! assert!(is_functionally_complete(&system));
//! ```
//!

use fxhash::FxHashMap;
use std::cell::OnceCell;

pub mod batch;
pub mod error;
pub mod op_function;
pub mod parser;

pub use error::{ParseError, UnboundVariableError};

/// **(internal)** Implementation of the `Variable`.
mod _impl_variable;

/// **(internal)** Implementation of the `BinaryOp` and its textual symbols.
mod _impl_binary_op;

/// **(internal)** Evaluation, rendering and traversal of `FormulaNode` trees.
mod _impl_formula_node;

/// **(internal)** Implementation of the `Assignment` and its enumeration order.
mod _impl_assignment;

/// **(internal)** Implementation of the `AssignmentIterator`.
mod _impl_assignment_iterator;

/// **(internal)** Construction, evaluation and truth tables of `BooleanExpression`s.
mod _impl_boolean_expression;

/// **(internal)** Canonical disjunctive and conjunctive normal forms.
mod _impl_normal_forms;

/// **(internal)** Zhegalkin coefficients and polynomials.
mod _impl_zhegalkin;

/// **(internal)** Post classes and the functional completeness test.
mod _impl_post_classes;

/// **(internal)** Several complex test scenarios for `BooleanExpression`s.
#[cfg(test)]
mod _test_expression;

/// Several basic utility methods for testing `BooleanExpression`s.
#[cfg(test)]
mod _test_util;

pub use _impl_post_classes::is_functionally_complete;
pub use _impl_zhegalkin::zhegalkin_transform;

/// The largest number of distinct variables a single `BooleanExpression` can contain.
///
/// Every expression materialises its truth table, so the limit keeps the table
/// (`2^MAX_VARIABLES` entries) within a reasonable amount of memory.
pub const MAX_VARIABLES: usize = 24;

/// Identifies one variable `x<id>` of a formula.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable(u32);

/// The eight binary logical operators supported by the formula syntax.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BinaryOp {
    /// Conjunction, `&`.
    And,
    /// Disjunction, `v`.
    Or,
    /// Implication, `>`.
    Imp,
    /// Converse implication, `<`.
    ConverseImp,
    /// Exclusive or, `+`.
    Xor,
    /// Equivalence, `=`.
    Iff,
    /// Sheffer stroke, `|`.
    Nand,
    /// Peirce arrow, `^`.
    Nor,
}

/// Recursive type for the formula syntax tree.
///
/// Every node owns its children, so `Clone` creates a fully independent deep copy.
/// Traversals (evaluation, printing, cloning, comparison and dropping) use explicit
/// stacks, so the depth of a tree is limited by memory, not by the call stack.
pub enum FormulaNode {
    Const(bool),
    Var(Variable),
    Not(Box<FormulaNode>),
    Binary(BinaryOp, Box<FormulaNode>, Box<FormulaNode>),
}

/// An ordered mapping from variables to their current values.
///
/// The order of variables is the order in which they were inserted. It determines the columns
/// of a truth table and the significance of each variable when the assignment is advanced:
/// the first variable is the most significant one, the last variable the least significant.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Assignment {
    entries: Vec<(Variable, bool)>,
    positions: FxHashMap<Variable, usize>,
}

/// Exhaustively iterates over all `2^N` assignments of a fixed list of variables,
/// starting from the all-`false` assignment.
///
/// Be aware of the exponential number of iterations!
#[derive(Clone, Debug)]
pub struct AssignmentIterator {
    next_assignment: Option<Assignment>,
    remaining: usize,
}

/// A parsed formula together with its (lazily computed) truth table and Zhegalkin
/// coefficients.
///
/// The expression owns everything it needs: its tree, the list of its variables (in the order
/// of first occurrence) and the cached tables. Nothing is shared between expressions.
#[derive(Clone, Debug)]
pub struct BooleanExpression {
    root: FormulaNode,
    variables: Vec<Variable>,
    truth_table: OnceCell<Vec<bool>>,
    zhegalkin: OnceCell<Vec<bool>>,
}

/// Membership of a boolean function in each of the five Post classes.
///
/// A set bit means the function *belongs* to the class.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct PostClasses(u8);

/// Renders the truth table of a `BooleanExpression` (see
/// `BooleanExpression::truth_table_display`).
pub struct TruthTableDisplay<'a> {
    expression: &'a BooleanExpression,
}
