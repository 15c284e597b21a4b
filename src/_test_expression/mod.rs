/// **(internal)** Explicitly test the documented scenarios and properties of normal forms
/// and Post classes.
mod _test_expression_scenarios;

/// **(internal)** Generate pseudo-random formula trees, print and re-parse them and
/// exhaustively verify all derived tables and normal forms.
mod _test_expression_fuzzing;
