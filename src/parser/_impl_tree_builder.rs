use super::{LocatedToken, Token};
use crate::{FormulaNode, ParseError};

/// Fold a postfix token sequence into a single `FormulaNode` tree.
///
/// Every operand pushes a leaf onto a stack of subtrees, `~` replaces the top subtree with its
/// negation and a binary operator combines the two top subtrees (the top one being the right
/// operand). The sequence is valid if exactly one tree remains.
pub fn postfix_to_tree(postfix: &[LocatedToken]) -> Result<FormulaNode, ParseError> {
    let mut stack: Vec<FormulaNode> = Vec::new();
    for located in postfix {
        match located.token {
            Token::Const(value) => stack.push(FormulaNode::Const(value)),
            Token::Var(variable) => stack.push(FormulaNode::Var(variable)),
            Token::Not => {
                let inner = pop_operand(&mut stack)?;
                stack.push(FormulaNode::Not(Box::new(inner)));
            }
            Token::Binary(op) => {
                let right = pop_operand(&mut stack)?;
                let left = pop_operand(&mut stack)?;
                stack.push(FormulaNode::Binary(op, Box::new(left), Box::new(right)));
            }
            Token::Open | Token::Close | Token::End => {
                if cfg!(feature = "shields_up") {
                    panic!("Unexpected {:?} in a postfix sequence.", located);
                }
                return Err(ParseError::MalformedPostfix {
                    remaining: stack.len(),
                });
            }
        }
    }

    if stack.len() != 1 {
        return Err(ParseError::MalformedPostfix {
            remaining: stack.len(),
        });
    }
    stack
        .pop()
        .ok_or(ParseError::MalformedPostfix { remaining: 0 })
}

/// **(internal)** Pop one operand subtree or report a malformed sequence.
fn pop_operand(stack: &mut Vec<FormulaNode>) -> Result<FormulaNode, ParseError> {
    stack
        .pop()
        .ok_or(ParseError::MalformedPostfix { remaining: 0 })
}
