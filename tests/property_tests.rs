//! Property-based tests for the expression engine
//!
//! Random formulas are generated as strings, parsed and checked against the algebraic
//! laws of canonical normal forms, the Zhegalkin transform and Post's classes.

use boolcalc::batch::parse_lines;
use boolcalc::{
    is_functionally_complete, zhegalkin_transform, Assignment, AssignmentIterator,
    BooleanExpression, ParseError,
};
use proptest::prelude::*;

// ============================================================================
// Helper functions
// ============================================================================

const OPERATORS: [&str; 8] = ["&", "v", ">", "<", "+", "=", "|", "^"];

/// Strategy producing syntactically valid formulas over `x0..x4`.
fn formula() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0u32..5).prop_map(|i| format!("x{}", i)),
        Just("0".to_string()),
        Just("1".to_string()),
    ];
    leaf.prop_recursive(5, 32, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|f| format!("~{}", f)),
            (inner.clone(), 0usize..8, inner).prop_map(|(l, op, r)| {
                format!("({} {} {})", l, OPERATORS[op], r)
            }),
        ]
    })
}

fn parse(text: &str) -> BooleanExpression {
    BooleanExpression::parse(text).unwrap()
}

/// Value of `derived` in every row of the truth table of `original`.
fn values_in_rows(original: &BooleanExpression, derived: &BooleanExpression) -> Vec<bool> {
    AssignmentIterator::new(original.variables())
        .map(|assignment| derived.eval(&assignment).unwrap())
        .collect()
}

// ============================================================================
// Normal form properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn dnf_reproduces_truth_table(text in formula()) {
        let expression = parse(&text);
        prop_assert_eq!(expression.truth_table().to_vec(), values_in_rows(&expression, &expression.dnf()));
    }

    #[test]
    fn cnf_reproduces_truth_table(text in formula()) {
        let expression = parse(&text);
        prop_assert_eq!(expression.truth_table().to_vec(), values_in_rows(&expression, &expression.cnf()));
    }

    #[test]
    fn zhegalkin_reproduces_truth_table(text in formula()) {
        let expression = parse(&text);
        prop_assert_eq!(expression.truth_table().to_vec(), values_in_rows(&expression, &expression.zhegalkin()));
    }

    #[test]
    fn normal_forms_are_idempotent(text in formula()) {
        let expression = parse(&text);
        let dnf = expression.dnf();
        let cnf = expression.cnf();
        prop_assert!(expression.is_equivalent(&dnf.dnf()));
        prop_assert!(expression.is_equivalent(&cnf.cnf()));
        prop_assert!(expression.is_equivalent(&dnf.cnf()));
    }

    #[test]
    fn zhegalkin_transform_is_self_inverse(values in prop::collection::vec(any::<bool>(), 16)) {
        prop_assert_eq!(values.clone(), zhegalkin_transform(&zhegalkin_transform(&values)));
    }

    #[test]
    fn printed_formula_parses_to_same_tree(text in formula()) {
        let expression = parse(&text);
        let reparsed = parse(&expression.to_string());
        prop_assert_eq!(expression.root(), reparsed.root());
    }

    #[test]
    fn assignment_rows_round_trip(row in 0usize..32) {
        let expression = parse("x4 & x3 & x2 & x1 & x0");
        let assignment = Assignment::from_row(expression.variables(), row);
        prop_assert_eq!(row, assignment.row());
    }
}

// ============================================================================
// Post class properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn negated_formula_swaps_preservation(text in formula()) {
        let expression = parse(&text);
        let negated = parse(&format!("~({})", text));
        let classes = expression.post_classes();
        let negated_classes = negated.post_classes();
        prop_assert_eq!(classes.preserves_zero(), !negated_classes.preserves_zero());
        prop_assert_eq!(classes.preserves_one(), !negated_classes.preserves_one());
        prop_assert_eq!(classes.is_linear(), negated_classes.is_linear());
        prop_assert_eq!(classes.is_self_dual(), negated_classes.is_self_dual());
    }

    #[test]
    fn adding_nand_makes_system_complete(texts in prop::collection::vec(formula(), 0..4)) {
        let mut system: Vec<BooleanExpression> = texts.iter().map(|t| parse(t)).collect();
        system.push(parse("x1 | x2"));
        prop_assert!(is_functionally_complete(&system));
    }

    #[test]
    fn monotone_formulas_are_monotone(text in monotone_formula()) {
        prop_assert!(parse(&text).post_classes().is_monotone());
    }
}

/// Strategy producing formulas built from variables with `&` and `v` only.
fn monotone_formula() -> impl Strategy<Value = String> {
    let leaf = (0u32..5).prop_map(|i| format!("x{}", i));
    leaf.prop_recursive(4, 16, 2, |inner| {
        (inner.clone(), prop::bool::ANY, inner).prop_map(|(l, and, r)| {
            format!("({} {} {})", l, if and { "&" } else { "v" }, r)
        })
    })
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn malformed_formulas_are_rejected() {
    assert!(matches!(
        BooleanExpression::parse("x1 &"),
        Err(ParseError::MissingOperand { .. })
    ));
    assert!(matches!(
        BooleanExpression::parse("(x1 & x2"),
        Err(ParseError::UnmatchedOpen { position: 0 })
    ));
}

#[test]
fn malformed_lines_are_isolated() {
    let results = parse_lines("x1 & x2\nx1 & & x2\n~x1\n");
    assert_eq!(3, results.len());
    assert!(results[0].1.is_ok());
    assert_eq!(2, results[1].1.as_ref().err().unwrap().line);
    assert!(results[2].1.is_ok());
}
