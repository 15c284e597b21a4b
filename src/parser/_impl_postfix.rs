use super::{action, Action, InputClass, LocatedToken, StackClass};
use crate::ParseError;

/// Rewrite an infix token sequence (terminated by `Token::End`) into postfix order.
///
/// Operands go straight to the output, operators are shifted onto an operator stack or
/// moved from it to the output according to the precedence matrix (see `action`).
/// The output contains only operands, `Token::Not` and `Token::Binary`.
///
/// Apart from unmatched parentheses, the conversion also validates that operands and
/// operators alternate correctly.
pub fn infix_to_postfix(tokens: &[LocatedToken]) -> Result<Vec<LocatedToken>, ParseError> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<LocatedToken> = Vec::new();
    let mut expect_operand = true;
    for located in tokens {
        let position = located.position;
        let incoming = match InputClass::of(located.token) {
            None => {
                // `Const` or `Var`
                if !expect_operand {
                    return Err(ParseError::MissingOperator { position });
                }
                output.push(*located);
                expect_operand = false;
                continue;
            }
            Some(class) => class,
        };

        match incoming {
            InputClass::Not | InputClass::Open if !expect_operand => {
                return Err(ParseError::MissingOperator { position });
            }
            InputClass::Not | InputClass::Open => {}
            _ if expect_operand => return Err(ParseError::MissingOperand { position }),
            _ => {}
        }

        loop {
            let top = stack
                .last()
                .and_then(|t| StackClass::of(t.token))
                .unwrap_or(StackClass::Bottom);
            match action(top, incoming) {
                Action::Push => {
                    stack.push(*located);
                    break;
                }
                Action::Pop => {
                    if let Some(operator) = stack.pop() {
                        output.push(operator);
                    }
                }
                Action::Match => {
                    stack.pop();
                    break;
                }
                Action::Error => {
                    return Err(match (top, stack.last()) {
                        (StackClass::Open, Some(open)) => ParseError::UnmatchedOpen {
                            position: open.position,
                        },
                        _ => ParseError::UnmatchedClose { position },
                    });
                }
            }
        }

        expect_operand = incoming != InputClass::Close;
        if incoming == InputClass::End {
            break;
        }
    }

    if cfg!(feature = "shields_up") && !stack.is_empty() {
        panic!("Operator stack not empty after conversion: {:?}", stack);
    }

    Ok(output)
}
