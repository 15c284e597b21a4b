use super::BinaryOp;
use super::BinaryOp::*;
use crate::op_function;
use std::fmt::{Display, Error, Formatter};

impl BinaryOp {
    /// All binary operators, in the order of their declaration.
    pub const ALL: [BinaryOp; 8] = [And, Or, Imp, ConverseImp, Xor, Iff, Nand, Nor];

    /// Apply the operator to the values of its two operands.
    pub fn apply(self, left: bool, right: bool) -> bool {
        let function: fn(bool, bool) -> bool = match self {
            And => op_function::and,
            Or => op_function::or,
            Imp => op_function::imp,
            ConverseImp => op_function::converse_imp,
            Xor => op_function::xor,
            Iff => op_function::iff,
            Nand => op_function::nand,
            Nor => op_function::nor,
        };
        function(left, right)
    }

    /// The character which denotes this operator in formulas.
    pub fn symbol(self) -> char {
        match self {
            And => '&',
            Or => 'v',
            Imp => '>',
            ConverseImp => '<',
            Xor => '+',
            Iff => '=',
            Nand => '|',
            Nor => '^',
        }
    }

    /// Find the operator denoted by the given character, if any.
    pub fn from_symbol(symbol: char) -> Option<BinaryOp> {
        BinaryOp::ALL.iter().copied().find(|op| op.symbol() == symbol)
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "{}", self.symbol())
    }
}
