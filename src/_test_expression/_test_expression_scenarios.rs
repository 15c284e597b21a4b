use crate::_test_util::{assert_same_function, mk_expression, mk_system, table_string};
use crate::*;
use std::collections::HashSet;

#[test]
fn scenario_conjunction() {
    let expression = mk_expression("x1 & x2");
    assert_eq!("0001", table_string(&expression));
    assert_eq!("(x1 & x2)", expression.dnf().to_string());
    assert_eq!("x1&x2", expression.zhegalkin_string());
}

#[test]
fn scenario_exclusive_or() {
    let expression = mk_expression("x1 + x2");
    assert_eq!("((x1 v x2) & (~x1 v ~x2))", expression.cnf().to_string());
    let classes = expression.post_classes();
    assert!(classes.is_linear());
    assert!(!classes.is_monotone());
}

#[test]
fn scenario_negation() {
    let classes = mk_expression("~x1").post_classes();
    assert!(!classes.preserves_zero());
    assert!(!classes.preserves_one());
    assert!(classes.is_self_dual());
    assert!(classes.is_linear());
    assert!(!classes.is_monotone());
}

#[test]
fn scenario_complete_system() {
    assert!(is_functionally_complete(&mk_system(&["x1 & x2", "~x1"])));
}

#[test]
fn scenario_malformed_input() {
    assert!(BooleanExpression::parse("x1 &").is_err());
    assert!(BooleanExpression::parse("(x1 & x2").is_err());
}

const FORMULAS: [&str; 10] = [
    "x1",
    "~x1 & x2",
    "x1 > x2 > x3",
    "x3 < x1 + x2",
    "(x1 = x2) | (x2 ^ x3)",
    "x1 v x2 v x3 v x4",
    "~(x0 & x1 & x2 & x3 & x4)",
    "x2 & (x1 v 0) = 1",
    "x10 + x20 + x30 & x10",
    "(x1 | (x2 | x3)) > ~x4 ^ x1",
];

#[test]
fn normal_forms_round_trip() {
    for formula in FORMULAS.iter() {
        let expression = mk_expression(formula);
        assert_same_function(&expression, &expression.dnf());
        assert_same_function(&expression, &expression.cnf());
        assert_same_function(&expression, &expression.zhegalkin());
    }
}

#[test]
fn normal_forms_idempotence() {
    for formula in FORMULAS.iter() {
        let expression = mk_expression(formula);
        let dnf = expression.dnf();
        let cnf = expression.cnf();
        assert!(expression.is_equivalent(&dnf.dnf()));
        assert!(expression.is_equivalent(&dnf.cnf()));
        assert!(expression.is_equivalent(&cnf.dnf()));
        assert!(expression.is_equivalent(&cnf.cnf()));
        assert!(expression.is_equivalent(&expression.zhegalkin().zhegalkin()));
        // Canonical forms are already canonical.
        assert_eq!(dnf.to_string(), dnf.dnf().to_string());
        assert_eq!(cnf.to_string(), cnf.cnf().to_string());
    }
}

#[test]
fn normal_forms_do_not_share_state() {
    // Variables of one formula never leak into another one.
    let first = mk_expression("x1 & x2");
    let second = mk_expression("x3");
    assert_eq!(4, first.truth_table().len());
    assert_eq!(2, second.truth_table().len());
    assert_eq!("x3", second.dnf().to_string());
    assert_eq!(vec![Variable(1), Variable(2)], first.variables());
}

#[test]
fn zhegalkin_transform_inverts_truth_tables() {
    for formula in FORMULAS.iter() {
        let expression = mk_expression(formula);
        assert_eq!(
            expression.truth_table(),
            zhegalkin_transform(expression.zhegalkin_coefficients()).as_slice()
        );
    }
}

#[test]
fn enumerator_visits_every_assignment_once() {
    let expression = mk_expression("x1 & x2 v x3 > x4");
    let mut assignment = expression.assignment();
    let mut seen = HashSet::new();
    let rows = 1 << expression.num_vars();
    for _ in 0..rows {
        assert!(seen.insert(assignment.values()));
        assignment.advance();
    }
    assert_eq!(rows, seen.len());
    assert_eq!(expression.assignment(), assignment);
}

#[test]
fn post_classes_of_all_binary_operators() {
    use PostClasses as P;
    let expected = [
        ("x1 & x2", P::PRESERVES_ZERO | P::PRESERVES_ONE | P::MONOTONE),
        ("x1 v x2", P::PRESERVES_ZERO | P::PRESERVES_ONE | P::MONOTONE),
        ("x1 > x2", P::PRESERVES_ONE),
        ("x1 < x2", P::PRESERVES_ONE),
        ("x1 + x2", P::PRESERVES_ZERO | P::LINEAR),
        ("x1 = x2", P::PRESERVES_ONE | P::LINEAR),
        ("x1 | x2", P::NONE),
        ("x1 ^ x2", P::NONE),
    ];
    for (formula, classes) in expected.iter() {
        assert_eq!(*classes, mk_expression(formula).post_classes(), "{}", formula);
    }
}
