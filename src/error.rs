//! Error types reported by the parser and by evaluation.
//!
//! All positions are zero-based character offsets into the original (unfiltered) formula
//! string.

use crate::Variable;
use thiserror::Error;

/// Reasons why a formula string cannot be turned into a `BooleanExpression`.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ParseError {
    /// The character is not part of the formula syntax.
    #[error("unexpected character '{character}' at position {position}")]
    UnexpectedCharacter { character: char, position: usize },

    /// An opening parenthesis is never closed.
    #[error("unmatched '(' at position {position}")]
    UnmatchedOpen { position: usize },

    /// A closing parenthesis has no opening counterpart.
    #[error("unmatched ')' at position {position}")]
    UnmatchedClose { position: usize },

    /// An operator, `)` or the end of the formula appears where an operand is required.
    #[error("expected an operand at position {position}")]
    MissingOperand { position: usize },

    /// Two operands (or an operand and `~`/`(`) are adjacent without an operator.
    #[error("expected a binary operator at position {position}")]
    MissingOperator { position: usize },

    /// The postfix form does not describe exactly one tree.
    #[error("malformed expression: {remaining} subtrees on the stack instead of one")]
    MalformedPostfix { remaining: usize },

    /// The formula mentions more variables than a truth table can hold.
    #[error("formula uses {count} variables, but at most {limit} are supported")]
    TooManyVariables { count: usize, limit: usize },
}

/// Evaluation reached a variable that has no value in the given assignment.
#[derive(Clone, Copy, Debug, Error, Eq, PartialEq)]
#[error("variable {0} has no assigned value")]
pub struct UnboundVariableError(pub Variable);

impl ParseError {
    /// The character offset associated with this error, if it has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedCharacter { position, .. }
            | ParseError::UnmatchedOpen { position }
            | ParseError::UnmatchedClose { position }
            | ParseError::MissingOperand { position }
            | ParseError::MissingOperator { position } => Some(*position),
            ParseError::MalformedPostfix { .. } | ParseError::TooManyVariables { .. } => None,
        }
    }
}
