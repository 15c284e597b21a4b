use super::Action::{self, Error as E, Match as M, Pop as O, Push as P};
use super::{InputClass, StackClass, Token};
use crate::BinaryOp;

/// Rows are indexed by `StackClass`, columns by `InputClass`.
///
/// Binary operators pop everything of equal or stronger precedence (left associativity),
/// `~` and `(` are always pushed.
const ACTIONS: [[Action; 8]; 7] = [
    //            end  (  )  ~  &  v  >  =
    /* bottom */ [M, P, E, P, P, P, P, P],
    /* (      */ [E, P, M, P, P, P, P, P],
    /* ~      */ [O, P, O, P, O, O, O, O],
    /* &      */ [O, P, O, P, O, O, O, O],
    /* v      */ [O, P, O, P, P, O, O, O],
    /* >      */ [O, P, O, P, P, P, O, O],
    /* =      */ [O, P, O, P, P, P, P, O],
];

/// Decide what to do when `incoming` meets `top` on the operator stack.
pub fn action(top: StackClass, incoming: InputClass) -> Action {
    ACTIONS[top.row()][incoming.column()]
}

/// **(internal)** Precedence level shared by the stack and input classes.
#[derive(Clone, Copy)]
enum Level {
    Conjunction,
    Disjunction,
    Implication,
    Equivalence,
}

fn level_of(op: BinaryOp) -> Level {
    match op {
        BinaryOp::And | BinaryOp::Nand => Level::Conjunction,
        BinaryOp::Or | BinaryOp::Xor | BinaryOp::Nor => Level::Disjunction,
        BinaryOp::Imp | BinaryOp::ConverseImp => Level::Implication,
        BinaryOp::Iff => Level::Equivalence,
    }
}

impl StackClass {
    /// Classify a token stored on the operator stack. Operands, `)` and the end marker
    /// never appear on the stack.
    pub fn of(token: Token) -> Option<StackClass> {
        match token {
            Token::Open => Some(StackClass::Open),
            Token::Not => Some(StackClass::Not),
            Token::Binary(op) => Some(match level_of(op) {
                Level::Conjunction => StackClass::Conjunction,
                Level::Disjunction => StackClass::Disjunction,
                Level::Implication => StackClass::Implication,
                Level::Equivalence => StackClass::Equivalence,
            }),
            Token::Const(_) | Token::Var(_) | Token::Close | Token::End => None,
        }
    }

    fn row(self) -> usize {
        match self {
            StackClass::Bottom => 0,
            StackClass::Open => 1,
            StackClass::Not => 2,
            StackClass::Conjunction => 3,
            StackClass::Disjunction => 4,
            StackClass::Implication => 5,
            StackClass::Equivalence => 6,
        }
    }
}

impl InputClass {
    /// Classify an incoming token. Operands have no class since they go directly
    /// to the output.
    pub fn of(token: Token) -> Option<InputClass> {
        match token {
            Token::End => Some(InputClass::End),
            Token::Open => Some(InputClass::Open),
            Token::Close => Some(InputClass::Close),
            Token::Not => Some(InputClass::Not),
            Token::Binary(op) => Some(match level_of(op) {
                Level::Conjunction => InputClass::Conjunction,
                Level::Disjunction => InputClass::Disjunction,
                Level::Implication => InputClass::Implication,
                Level::Equivalence => InputClass::Equivalence,
            }),
            Token::Const(_) | Token::Var(_) => None,
        }
    }

    fn column(self) -> usize {
        match self {
            InputClass::End => 0,
            InputClass::Open => 1,
            InputClass::Close => 2,
            InputClass::Not => 3,
            InputClass::Conjunction => 4,
            InputClass::Disjunction => 5,
            InputClass::Implication => 6,
            InputClass::Equivalence => 7,
        }
    }
}
