use super::FormulaNode::*;
use super::{Assignment, BinaryOp, FormulaNode, UnboundVariableError, Variable};
use crate::parser::parse_formula;
use crate::ParseError;
use std::convert::{Infallible, TryFrom};
use std::fmt::{Debug, Display, Error, Formatter};
use std::hash::{Hash, Hasher};
use std::mem::replace;
use std::str::FromStr;

impl TryFrom<&str> for FormulaNode {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        parse_formula(value)
    }
}

impl FromStr for FormulaNode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_formula(s)
    }
}

/// **(internal)** One pending action of a stack-based tree walk.
enum Step<'a> {
    Visit(&'a FormulaNode),
    Negate,
    Apply(BinaryOp),
}

/// **(internal)** One pending piece of output when printing a tree.
enum Piece<'a> {
    Node(&'a FormulaNode),
    Operator(BinaryOp),
    Close,
}

impl Display for FormulaNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        let mut pending = vec![Piece::Node(self)];
        while let Some(piece) = pending.pop() {
            match piece {
                Piece::Node(Const(value)) => write!(f, "{}", if *value { 1 } else { 0 })?,
                Piece::Node(Var(variable)) => write!(f, "{}", variable)?,
                Piece::Node(Not(inner)) => {
                    write!(f, "~")?;
                    pending.push(Piece::Node(inner.as_ref()));
                }
                Piece::Node(Binary(op, l, r)) => {
                    write!(f, "(")?;
                    pending.push(Piece::Close);
                    pending.push(Piece::Node(r.as_ref()));
                    pending.push(Piece::Operator(*op));
                    pending.push(Piece::Node(l.as_ref()));
                }
                Piece::Operator(op) => write!(f, " {} ", op)?,
                Piece::Close => write!(f, ")")?,
            }
        }
        Ok(())
    }
}

impl Debug for FormulaNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "FormulaNode({})", self)
    }
}

impl Clone for FormulaNode {
    fn clone(&self) -> Self {
        let copy: Result<FormulaNode, Infallible> = self.fold(
            |leaf| match leaf {
                Var(variable) => Ok(Var(*variable)),
                Const(value) => Ok(Const(*value)),
                Not(_) | Binary(..) => unreachable!("Inner node {} visited as a leaf.", leaf),
            },
            FormulaNode::mk_not,
            FormulaNode::mk_binary,
        );
        match copy {
            Ok(node) => node,
            Err(never) => match never {},
        }
    }
}

/// Two trees are equal when their pre-order sequences of node labels are equal. The arity
/// of every label is fixed, so the sequence determines the shape of the tree.
impl PartialEq for FormulaNode {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.nodes();
        let mut right = other.nodes();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) if a.same_label(b) => {}
                _ => return false,
            }
        }
    }
}

impl Eq for FormulaNode {}

impl Hash for FormulaNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for node in self.nodes() {
            match node {
                Const(value) => (0u8, *value).hash(state),
                Var(variable) => (1u8, *variable).hash(state),
                Not(_) => 2u8.hash(state),
                Binary(op, _, _) => (3u8, *op).hash(state),
            }
        }
    }
}

/// Children are detached into a work list before a node is released, so dropping a deep
/// tree does not recurse.
impl Drop for FormulaNode {
    fn drop(&mut self) {
        let mut pending: Vec<FormulaNode> = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

/// Methods for building formula trees.
impl FormulaNode {
    pub fn mk_var(variable: Variable) -> FormulaNode {
        Var(variable)
    }

    /// A literal: the variable itself if `value` is `true`, its negation otherwise.
    pub fn mk_literal(variable: Variable, value: bool) -> FormulaNode {
        if value {
            Var(variable)
        } else {
            Not(Box::new(Var(variable)))
        }
    }

    pub fn mk_not(inner: FormulaNode) -> FormulaNode {
        Not(Box::new(inner))
    }

    pub fn mk_binary(op: BinaryOp, left: FormulaNode, right: FormulaNode) -> FormulaNode {
        Binary(op, Box::new(left), Box::new(right))
    }

    /// Combine `operands` with `op` from the left: `((a op b) op c) ...`.
    ///
    /// Returns `None` if there are no operands.
    pub fn mk_left_fold<I>(op: BinaryOp, operands: I) -> Option<FormulaNode>
    where
        I: IntoIterator<Item = FormulaNode>,
    {
        operands
            .into_iter()
            .reduce(|left, right| FormulaNode::mk_binary(op, left, right))
    }
}

/// Methods for evaluation and inspection of formula trees.
impl FormulaNode {
    /// Evaluate this tree, reading variable values from the given `Assignment`.
    ///
    /// Fails with `UnboundVariableError` on the first variable (in evaluation order) that
    /// has no value in the assignment.
    pub fn eval(&self, assignment: &Assignment) -> Result<bool, UnboundVariableError> {
        self.fold(
            |leaf| match leaf {
                Var(variable) => assignment
                    .get(*variable)
                    .ok_or(UnboundVariableError(*variable)),
                Const(value) => Ok(*value),
                Not(_) | Binary(..) => unreachable!("Inner node {} visited as a leaf.", leaf),
            },
            |value| !value,
            |op, left, right| op.apply(left, right),
        )
    }

    /// Insert every variable of this tree that is not in the `assignment` yet, with
    /// the value `false`. Variables are visited from left to right.
    pub fn fill_assignment(&self, assignment: &mut Assignment) {
        for node in self.nodes() {
            if let Var(variable) = node {
                assignment.insert_if_absent(*variable, false);
            }
        }
    }

    /// All distinct variables of this tree, in the order of their first occurrence.
    pub fn variables(&self) -> Vec<Variable> {
        let mut assignment = Assignment::empty();
        self.fill_assignment(&mut assignment);
        assignment.variables()
    }

    /// Number of nodes in this tree.
    pub fn size(&self) -> usize {
        self.nodes().count()
    }

    /// All nodes of this tree in pre-order (a node before its children, left child first).
    pub fn nodes(&self) -> impl Iterator<Item = &FormulaNode> + '_ {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            match node {
                Not(inner) => stack.push(inner.as_ref()),
                Binary(_, l, r) => {
                    stack.push(r.as_ref());
                    stack.push(l.as_ref());
                }
                Const(_) | Var(_) => {}
            }
            Some(node)
        })
    }

    /// **(internal)** Compute a value for this tree bottom-up, from left to right.
    ///
    /// The `leaf` function is only called for `Const` and `Var` nodes; its first error
    /// stops the walk.
    fn fold<T, E>(
        &self,
        mut leaf: impl FnMut(&FormulaNode) -> Result<T, E>,
        mut negate: impl FnMut(T) -> T,
        mut apply: impl FnMut(BinaryOp, T, T) -> T,
    ) -> Result<T, E> {
        let mut steps = vec![Step::Visit(self)];
        let mut values: Vec<T> = Vec::new();
        while let Some(step) = steps.pop() {
            match step {
                Step::Visit(Not(inner)) => {
                    steps.push(Step::Negate);
                    steps.push(Step::Visit(inner.as_ref()));
                }
                Step::Visit(Binary(op, l, r)) => {
                    steps.push(Step::Apply(*op));
                    steps.push(Step::Visit(r.as_ref()));
                    steps.push(Step::Visit(l.as_ref()));
                }
                Step::Visit(node) => values.push(leaf(node)?),
                Step::Negate => {
                    let value = pop_value(&mut values);
                    values.push(negate(value));
                }
                Step::Apply(op) => {
                    let right = pop_value(&mut values);
                    let left = pop_value(&mut values);
                    values.push(apply(op, left, right));
                }
            }
        }
        Ok(pop_value(&mut values))
    }

    /// **(internal)** Labels are equal when constants, variables or operators match,
    /// ignoring children.
    fn same_label(&self, other: &FormulaNode) -> bool {
        match (self, other) {
            (Const(a), Const(b)) => a == b,
            (Var(a), Var(b)) => a == b,
            (Not(_), Not(_)) => true,
            (Binary(a, _, _), Binary(b, _, _)) => a == b,
            _ => false,
        }
    }

    /// **(internal)** Move every inner child of this node into `pending`, leaving a
    /// constant in its place. Leaf children stay where they are.
    fn detach_children(&mut self, pending: &mut Vec<FormulaNode>) {
        let mut detach = |child: &mut Box<FormulaNode>| {
            if matches!(**child, Not(_) | Binary(..)) {
                pending.push(replace(child.as_mut(), Const(false)));
            }
        };
        match self {
            Not(inner) => detach(inner),
            Binary(_, l, r) => {
                detach(l);
                detach(r);
            }
            Const(_) | Var(_) => {}
        }
    }
}

/// **(internal)** Every `Negate`/`Apply` step follows the steps that produce its operands.
fn pop_value<T>(values: &mut Vec<T>) -> T {
    match values.pop() {
        Some(value) => value,
        None => unreachable!("Tree walk is missing an operand value."),
    }
}
