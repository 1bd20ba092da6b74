//! End-to-end evaluation tests over source programs
//!
//! Covers the observable contract of the evaluator: output bytes, operand
//! evaluation order, the absence of short-circuiting, and chained assignment.

mod common;

use common::{run_ok, run_with_input};
use pretty_assertions::assert_eq;

#[test]
fn test_print_literal() {
    assert_eq!(run_ok("print 42;"), "42\n");
}

#[test]
fn test_print_arithmetic() {
    assert_eq!(run_ok("print 7 * 6;"), "42\n");
}

#[test]
fn test_assign_then_print() {
    assert_eq!(run_ok("x = 42; print x;"), "42\n");
}

#[test]
fn test_if_with_comparison() {
    assert_eq!(run_ok("if (1 != 2) print 42;"), "42\n");
}

#[test]
fn test_while_counting_loop() {
    assert_eq!(
        run_ok("x = 0; while (x < 3) { print x; x = x + 1; }"),
        "0\n1\n2\n"
    );
}

#[test]
fn test_negative_numbers() {
    assert_eq!(run_ok("print -42;"), "-42\n");
    assert_eq!(run_ok("print 0 - 50 + 8;"), "-42\n");
}

#[test]
fn test_operator_precedence() {
    assert_eq!(run_ok("print 2 + 3 * 4;"), "14\n");
    assert_eq!(run_ok("print (2 + 3) * 4;"), "20\n");
    assert_eq!(run_ok("print 10 - 4 - 3;"), "3\n");
    assert_eq!(run_ok("print 17 % 5 + 20 / 4;"), "7\n");
}

#[test]
fn test_unary_operators() {
    assert_eq!(run_ok("print !0;"), "1\n");
    assert_eq!(run_ok("print !7;"), "0\n");
    assert_eq!(run_ok("print --5;"), "5\n");
    assert_eq!(run_ok("print +5;"), "5\n");
}

#[test]
fn test_comparisons_yield_zero_or_one() {
    assert_eq!(run_ok("print 2 < 3;"), "1\n");
    assert_eq!(run_ok("print 3 <= 3;"), "1\n");
    assert_eq!(run_ok("print 2 > 3;"), "0\n");
    assert_eq!(run_ok("print 3 >= 4;"), "0\n");
    assert_eq!(run_ok("print 5 == 5;"), "1\n");
    assert_eq!(run_ok("print 5 != 5;"), "0\n");
}

#[test]
fn test_boolean_operators_normalize_operands() {
    assert_eq!(run_ok("print 5 && 7;"), "1\n");
    assert_eq!(run_ok("print 5 && 0;"), "0\n");
    assert_eq!(run_ok("print 0 || 9;"), "1\n");
    assert_eq!(run_ok("print 0 || 0;"), "0\n");
    assert_eq!(run_ok("print 5 ^ 0;"), "1\n");
    assert_eq!(run_ok("print 5 ^ 7;"), "0\n");
}

#[test]
fn test_and_does_not_short_circuit() {
    // The right operand's assignment must fire even though the left operand
    // already decides the result.
    assert_eq!(
        run_ok("x = 0; y = (x == 1) && (x = 5); print x; print y;"),
        "5\n0\n"
    );
}

#[test]
fn test_or_does_not_short_circuit() {
    assert_eq!(
        run_ok("x = 1; y = (x == 1) || (x = 9); print x; print y;"),
        "9\n1\n"
    );
}

#[test]
fn test_operands_evaluate_left_to_right() {
    // Left assignment runs first, so the right one sees its effect.
    assert_eq!(
        run_ok("y = (x = 2) + (x = x * 10); print x; print y;"),
        "20\n22\n"
    );
}

#[test]
fn test_chained_assignment_threads_one_value() {
    assert_eq!(run_ok("x = y = 5; print x; print y;"), "5\n5\n");
}

#[test]
fn test_chained_assignment_expression_value() {
    // The whole chain is an expression yielding the assigned value.
    assert_eq!(run_ok("z = (x = y = 5) + 1; print z;"), "6\n");
}

#[test]
fn test_read_feeds_expressions() {
    assert_eq!(run_with_input("x = ?; y = ?; print x + y;", "40 2"), "42\n");
}

#[test]
fn test_read_accepts_newline_delimited_input() {
    assert_eq!(run_with_input("print ?; print ?;", "1\n2\n"), "1\n2\n");
}

#[test]
fn test_if_else_branches() {
    assert_eq!(run_ok("if (0) print 1; else print 2;"), "2\n");
    assert_eq!(run_ok("if (3) print 1; else print 2;"), "1\n");
}

#[test]
fn test_nested_loops() {
    assert_eq!(
        run_ok(
            "i = 0;
             while (i < 2) {
                 j = 0;
                 while (j < 2) {
                     print i * 10 + j;
                     j = j + 1;
                 }
                 i = i + 1;
             }"
        ),
        "0\n1\n10\n11\n"
    );
}

#[test]
fn test_repeat_runs_are_byte_identical() {
    let source = "n = 10;
                  f = 1;
                  i = 1;
                  while (i <= n) {
                      f = f * i;
                      print f;
                      i = i + 1;
                  }";
    let first = run_ok(source);
    let second = run_ok(source);
    assert_eq!(first, second);
    assert!(first.ends_with("3628800\n"));
}

#[test]
fn test_comments_are_ignored() {
    assert_eq!(run_ok("// header\nprint 1; // trailing\n// footer"), "1\n");
}
