//!
//! Here, we have a small toolbox for fuzzing the expression engine.
//! It allows us to create an evaluable binary tree of operations, where
//! each leaf is a random variable and each tree node represents one
//! binary boolean operation, possibly negated.
//!
//! Each tree is printed, parsed back and then exhaustively compared with the
//! truth table of the parsed expression. All derived forms (DNF, CNF, Zhegalkin
//! polynomial) and the Post classes are then checked against the truth table.
//! To get predictable test cases, we use a predefined set of randomness seeds.

use crate::*;
use rand::prelude::StdRng;
use rand::{RngCore, SeedableRng};

#[derive(Debug)]
struct Op {
    op: BinaryOp,
    negate: bool,
}

#[derive(Debug)]
struct OpTree {
    leaves: Vec<Variable>,
    ops: Vec<Vec<Op>>,
}

impl OpTree {
    /// Create a new random tree. The `tree_height` is the number of levels in the tree
    /// (so the number of leaves will be `2^tree_height`).
    fn new_random(tree_height: u8, num_vars: u32, seed: u64) -> OpTree {
        let mut rand = StdRng::seed_from_u64(seed);
        let num_leaves = 1 << (tree_height as usize);
        let mut levels: Vec<Vec<Op>> = Vec::new();

        let leaves: Vec<Variable> = (0..num_leaves)
            .map(|_| Variable(rand.next_u32() % num_vars))
            .collect();

        let mut level_width = num_leaves / 2;
        for _ in 0..tree_height {
            let level: Vec<Op> = (0..level_width)
                .map(|_| {
                    let negate = rand.next_u32() % 2 == 0;
                    let op = BinaryOp::ALL[(rand.next_u32() % 8) as usize];
                    Op { op, negate }
                })
                .collect();
            levels.push(level);
            level_width /= 2;
        }

        OpTree {
            leaves,
            ops: levels,
        }
    }

    /// Build the `FormulaNode` represented by this op tree.
    fn to_formula(&self) -> FormulaNode {
        let mut formulas: Vec<FormulaNode> =
            self.leaves.iter().map(|v| FormulaNode::mk_var(*v)).collect();

        for level in self.ops.iter() {
            let mut new_formulas = Vec::new();
            let mut operands = formulas.into_iter();
            for op in level {
                let (Some(a), Some(b)) = (operands.next(), operands.next()) else {
                    panic!("Op tree level is wider than its operands.");
                };
                let result = FormulaNode::mk_binary(op.op, a, b);
                if op.negate {
                    new_formulas.push(FormulaNode::mk_not(result));
                } else {
                    new_formulas.push(result);
                }
            }
            formulas = new_formulas;
        }

        formulas.remove(0)
    }

    /// Evaluate this op tree in the given `Assignment`, independently of `FormulaNode::eval`.
    fn eval_in(&self, assignment: &Assignment) -> bool {
        let mut values: Vec<bool> = self.leaves.iter().map(|v| assignment[*v]).collect();

        for level in self.ops.iter() {
            let mut i = 0;
            let mut new_values = Vec::new();
            while i < values.len() {
                let a = values[i];
                let b = values[i + 1];
                let op = &level[i / 2];
                let result = match op.op {
                    BinaryOp::And => a && b,
                    BinaryOp::Or => a || b,
                    BinaryOp::Imp => (!a) || b,
                    BinaryOp::ConverseImp => a || (!b),
                    BinaryOp::Xor => a ^ b,
                    BinaryOp::Iff => a == b,
                    BinaryOp::Nand => !(a && b),
                    BinaryOp::Nor => !(a || b),
                };
                if op.negate {
                    new_values.push(!result)
                } else {
                    new_values.push(result);
                }
                i += 2;
            }
            values = new_values;
        }

        values[0]
    }
}

const FUZZ_SEEDS: [u64; 10] = [
    1, 12, 123, 1234, 12345, 123456, 1234567, 12345678, 123456789, 1234567890,
];

/// Brute-force monotonicity over all comparable pairs of rows.
fn is_monotone_by_definition(table: &[bool]) -> bool {
    (0..table.len()).all(|low| {
        (0..table.len()).all(|high| low & high != low || !table[low] || table[high])
    })
}

/// Brute-force self-duality by evaluating the expression in complemented assignments.
fn is_self_dual_by_definition(expression: &BooleanExpression) -> bool {
    AssignmentIterator::new(expression.variables()).all(|assignment| {
        let complement = Assignment::from_values(
            &assignment
                .iter()
                .map(|(v, value)| (v, !value))
                .collect::<Vec<_>>(),
        );
        expression.eval(&assignment) != expression.eval(&complement)
    })
}

fn fuzz_test(num_vars: u32, tree_height: u8, seed: u64) -> bool {
    let op_tree = OpTree::new_random(tree_height, num_vars, seed);
    let formula = op_tree.to_formula();
    let expression = BooleanExpression::parse(&formula.to_string()).unwrap();
    assert_eq!(&formula, expression.root());

    let table = expression.truth_table();
    for (row, assignment) in AssignmentIterator::new(expression.variables()).enumerate() {
        assert_eq!(
            op_tree.eval_in(&assignment),
            table[row],
            "Error in assignment {}",
            assignment
        );
    }

    if expression.is_tautology() || expression.is_contradiction() {
        return false;
    }

    assert!(expression.is_equivalent(&expression.dnf()));
    assert!(expression.is_equivalent(&expression.cnf()));
    assert!(expression.is_equivalent(&expression.zhegalkin()));
    assert_eq!(
        table,
        zhegalkin_transform(expression.zhegalkin_coefficients()).as_slice()
    );

    let classes = expression.post_classes();
    assert_eq!(is_monotone_by_definition(table), classes.is_monotone());
    assert_eq!(is_self_dual_by_definition(&expression), classes.is_self_dual());
    assert_eq!(
        expression.zhegalkin_monomials().iter().all(|m| m.len() <= 1),
        classes.is_linear()
    );

    true
}

fn fuzz_vars(num_vars: u32, max_height: u8) {
    let mut non_trivial = 0;

    for height in 1..max_height {
        for seed in FUZZ_SEEDS.iter() {
            if fuzz_test(num_vars, height, *seed) {
                non_trivial += 1;
            }
        }
    }

    println!(
        "Check {}/{} non-trivial expressions.",
        non_trivial,
        (max_height as usize - 1) * FUZZ_SEEDS.len()
    );
}

#[test]
fn fuzz_var_2() {
    fuzz_vars(2, 8);
}

#[test]
fn fuzz_var_4() {
    fuzz_vars(4, 8);
}

#[test]
fn fuzz_var_8() {
    fuzz_vars(8, 7);
}
