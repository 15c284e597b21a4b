use super::*;

/// Parse a formula that is known to be valid.
pub fn mk_expression(formula: &str) -> BooleanExpression {
    BooleanExpression::parse(formula)
        .unwrap_or_else(|e| panic!("Invalid test formula `{}`: {}", formula, e))
}

/// Parse a system of formulas that are known to be valid.
pub fn mk_system(formulas: &[&str]) -> Vec<BooleanExpression> {
    formulas.iter().map(|f| mk_expression(f)).collect()
}

/// Truth table written as a string of `0`s and `1`s, e.g. `"0001"` for $x_1 \land x_2$.
pub fn table_string(expression: &BooleanExpression) -> String {
    expression
        .truth_table()
        .iter()
        .map(|value| if *value { '1' } else { '0' })
        .collect()
}

/// Check that `derived` has the same value as `original` in every assignment of the
/// variables of `original`.
pub fn assert_same_function(original: &BooleanExpression, derived: &BooleanExpression) {
    let mut assignment = original.assignment();
    for row in 0..original.truth_table().len() {
        assert_eq!(
            Ok(original.truth_table()[row]),
            derived.eval(&assignment),
            "`{}` and `{}` differ in {}",
            original,
            derived,
            assignment
        );
        assignment.advance();
    }
}
