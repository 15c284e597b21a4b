use super::{LocatedToken, Token};
use crate::{BinaryOp, ParseError, Variable};

/// Process a formula into a vector of `LocatedToken`s terminated by `Token::End`.
///
/// All whitespace is removed before classification, so `x 1 2` denotes the variable `x12`.
/// Positions always refer to the original string (counted in characters).
pub fn tokenize(text: &str) -> Result<Vec<LocatedToken>, ParseError> {
    let filtered = filter_whitespace(text);
    let mut output = Vec::with_capacity(filtered.len() + 1);
    let mut data = filtered.into_iter().peekable();
    while let Some((position, c)) = data.next() {
        let token = match c {
            '~' => Token::Not,
            '(' => Token::Open,
            ')' => Token::Close,
            '0' => Token::Const(false),
            '1' => Token::Const(true),
            'x' | 'X' => {
                // start of a variable id
                let mut id = String::new();
                while let Some((_, digit)) = data.peek() {
                    if digit.is_ascii_digit() {
                        id.push(*digit);
                        data.next(); // advance iterator
                    } else {
                        break;
                    }
                }
                let id = id
                    .parse::<u32>()
                    .map_err(|_| ParseError::UnexpectedCharacter {
                        character: c,
                        position,
                    })?;
                Token::Var(Variable(id))
            }
            _ => match BinaryOp::from_symbol(c) {
                Some(op) => Token::Binary(op),
                None => {
                    return Err(ParseError::UnexpectedCharacter {
                        character: c,
                        position,
                    })
                }
            },
        };
        output.push(LocatedToken { token, position });
    }
    output.push(LocatedToken {
        token: Token::End,
        position: text.chars().count(),
    });
    Ok(output)
}

/// **(internal)** Remove whitespace, but remember the original position of every character.
fn filter_whitespace(text: &str) -> Vec<(usize, char)> {
    text.chars()
        .enumerate()
        .filter(|(_, c)| !c.is_whitespace())
        .collect()
}
