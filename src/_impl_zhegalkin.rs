use crate::{BinaryOp, BooleanExpression, FormulaNode, Variable};
use std::cmp::Ordering;

/// Compute the mod-2 Möbius transform of a vector indexed by subsets of an `N`-element set.
///
/// The result satisfies `result[S] = XOR of values[T] for all T ⊆ S`, where subsets are
/// encoded as bit masks. Applied to a truth table, it yields the coefficients of the Zhegalkin
/// polynomial and vice versa: the transform is its own inverse.
///
/// *Panics:* the length of `values` must be a power of two.
pub fn zhegalkin_transform(values: &[bool]) -> Vec<bool> {
    if !values.len().is_power_of_two() {
        panic!(
            "Expected a vector of length 2^N, but the length is {}.",
            values.len()
        );
    }
    let mut result = values.to_vec();
    let mut bit = 1;
    while bit < result.len() {
        // Entries without `bit` are final for this step, so each entry with `bit`
        // absorbs its counterpart without `bit`.
        for mask in 0..result.len() {
            if mask & bit != 0 {
                result[mask] ^= result[mask ^ bit];
            }
        }
        bit <<= 1;
    }
    result
}

/// Methods for working with the Zhegalkin polynomial (algebraic normal form).
impl BooleanExpression {
    /// Coefficients of the Zhegalkin polynomial, indexed by variable subsets.
    ///
    /// A subset is a bit mask using the same convention as truth table rows: the first variable
    /// is the most significant bit. The coefficients are computed on first use and cached.
    pub fn zhegalkin_coefficients(&self) -> &[bool] {
        self.zhegalkin
            .get_or_init(|| zhegalkin_transform(self.truth_table()))
    }

    /// Monomials of the Zhegalkin polynomial. Each monomial is the list of its variables,
    /// the empty list stands for the constant `1`.
    ///
    /// Monomials are ordered by degree first and then lexicographically by the positions
    /// of their variables in `BooleanExpression::variables`.
    pub fn zhegalkin_monomials(&self) -> Vec<Vec<Variable>> {
        let num_vars = self.num_vars();
        let mut monomials: Vec<Vec<usize>> = self
            .zhegalkin_coefficients()
            .iter()
            .enumerate()
            .filter(|(_, coefficient)| **coefficient)
            .map(|(mask, _)| {
                (0..num_vars)
                    .filter(|k| (mask >> (num_vars - 1 - k)) & 1 == 1)
                    .collect()
            })
            .collect();
        monomials.sort_by(|a, b| match a.len().cmp(&b.len()) {
            Ordering::Equal => a.cmp(b),
            ordering => ordering,
        });
        monomials
            .into_iter()
            .map(|positions| positions.into_iter().map(|k| self.variables[k]).collect())
            .collect()
    }

    /// The Zhegalkin polynomial as a new expression: a left-nested exclusive or of
    /// conjunctions of variables, `1` standing for the empty conjunction.
    ///
    /// An expression that is always false yields the constant `0`.
    pub fn zhegalkin(&self) -> BooleanExpression {
        let terms = self.zhegalkin_monomials().into_iter().map(|monomial| {
            let factors = monomial.into_iter().map(FormulaNode::mk_var);
            FormulaNode::mk_left_fold(BinaryOp::And, factors).unwrap_or(FormulaNode::Const(true))
        });
        let root =
            FormulaNode::mk_left_fold(BinaryOp::Xor, terms).unwrap_or(FormulaNode::Const(false));
        BooleanExpression::from_tree(root)
    }

    /// Compact rendering of the Zhegalkin polynomial: monomials are separated by ` + `
    /// and the variables of a monomial by `&`.
    ///
    /// ```rust
    /// use boolcalc::BooleanExpression;
    /// let expression = BooleanExpression::parse("x1 > x2").unwrap();
    /// assert_eq!("1 + x1 + x1&x2", expression.zhegalkin_string());
    /// ```
    pub fn zhegalkin_string(&self) -> String {
        let monomials = self.zhegalkin_monomials();
        if monomials.is_empty() {
            return "0".to_string();
        }
        monomials
            .iter()
            .map(|monomial| {
                if monomial.is_empty() {
                    "1".to_string()
                } else {
                    monomial
                        .iter()
                        .map(|v| v.to_string())
                        .collect::<Vec<_>>()
                        .join("&")
                }
            })
            .collect::<Vec<_>>()
            .join(" + ")
    }
}
