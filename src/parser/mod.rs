//! Parsing of infix formulas into `FormulaNode` trees.
//!
//! Parsing proceeds in three stages:
//!
//!  1. The lexer drops all whitespace and classifies the remaining characters into tokens
//!     (`tokenize`). Variables are written as `x` followed by a decimal id, constants as
//!     `0` and `1`.
//!  2. The tokens are rewritten into postfix order (`infix_to_postfix`) using an operator stack
//!     driven by a constant precedence matrix (`action`).
//!  3. The postfix sequence is folded into a tree using a stack of subtrees (`postfix_to_tree`).
//!
//! Operator precedence, from the strongest: `~`, then `&` and `|` (NAND), then `v`, `+` and
//! `^` (NOR), then `>` and `<`, and finally `=`. All binary operators are left-associative:
//!
//! ```rust
//! use boolcalc::parser::parse_formula;
//! let tree = parse_formula("~x1 & x2 v x3 > x1 = x2").unwrap();
//! assert_eq!("((((~x1 & x2) v x3) > x1) = x2)", tree.to_string());
//! let tree = parse_formula("x1 > x2 > x3").unwrap();
//! assert_eq!("((x1 > x2) > x3)", tree.to_string());
//! ```

use crate::{BinaryOp, FormulaNode, ParseError, Variable};

/// **(internal)** Character classification and whitespace filtering.
mod _impl_lexer;

/// **(internal)** The precedence matrix of the operator-stack parser.
mod _impl_precedence_table;

/// **(internal)** Conversion of infix token sequences into postfix order.
mod _impl_postfix;

/// **(internal)** Construction of `FormulaNode` trees from postfix sequences.
mod _impl_tree_builder;

pub use _impl_lexer::tokenize;
pub use _impl_postfix::infix_to_postfix;
pub use _impl_precedence_table::action;
pub use _impl_tree_builder::postfix_to_tree;

/// Tokens that can appear in a formula.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Token {
    Const(bool),        // '0' or '1'
    Var(Variable),      // 'x<id>'
    Not,                // '~'
    Binary(BinaryOp),   // one of '&', 'v', '>', '<', '+', '=', '|', '^'
    Open,               // '('
    Close,              // ')'
    End,                // end of the formula
}

/// A `Token` together with the character offset where it starts.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct LocatedToken {
    pub token: Token,
    pub position: usize,
}

/// What the operator-stack parser should do when an incoming token meets the top of
/// the operator stack.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Action {
    /// Shift the incoming token onto the stack.
    Push,
    /// Move the stack top to the output and compare again.
    Pop,
    /// The stack top and the incoming token form a matching pair; drop both.
    Match,
    /// The combination is malformed (unmatched parenthesis).
    Error,
}

/// Classes of tokens that can be on top of the operator stack. `Bottom` stands for
/// an empty stack.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StackClass {
    Bottom,
    Open,
    Not,
    Conjunction,
    Disjunction,
    Implication,
    Equivalence,
}

/// Classes of tokens arriving at the operator stack. Operands never reach the stack.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InputClass {
    End,
    Open,
    Close,
    Not,
    Conjunction,
    Disjunction,
    Implication,
    Equivalence,
}

/// Takes a `str` and turns it into a `FormulaNode` tree or a `ParseError` if the
/// string is not a valid formula.
pub fn parse_formula(text: &str) -> Result<FormulaNode, ParseError> {
    let tokens = tokenize(text)?;
    let postfix = infix_to_postfix(&tokens)?;
    postfix_to_tree(&postfix)
}
