use indoc::indoc;
use pretty_assertions::assert_eq;
use setta::{
    Context, RunStatus,
    ast::Statement,
    interpreter::value::core::Value,
    parse_source,
    report::{Diagnostic, Phase},
    run,
};

struct Outcome {
    status:      RunStatus,
    output:      Vec<String>,
    diagnostics: Vec<Diagnostic>,
}

fn run_in(context: &mut Context, source: &str) -> Outcome {
    let mut output: Vec<String> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let status = run(source, context, &mut output, &mut diagnostics);
    Outcome { status,
              output,
              diagnostics }
}

fn run_fresh(source: &str) -> Outcome {
    run_in(&mut Context::new(), source)
}

#[test]
fn squares_of_a_domain() {
    let outcome = run_fresh("let A = {1, 2, 3, 4, 5}; print {x * x | x in A};");

    assert_eq!(outcome.status, RunStatus::Ok);
    assert_eq!(outcome.output, ["{1,4,9,16,25}"]);
}

#[test]
fn filtered_comprehension_and_cardinality() {
    let outcome = run_fresh(indoc! {"
        let A = {1, 2, 3, 4, 5};
        print {x | x in A, x % 2 == 0};
        print |{1, 2, 2, 3}|;
    "});

    assert_eq!(outcome.output, ["{2,4}", "3"]);
}

#[test]
fn set_operators() {
    let outcome = run_fresh(indoc! {"
        print {1, 2} union {2, 3};
        print {1, 2} intersect {2, 3};
        print {1} subseteq {1, 2};
        print 4 in {1, 2};
    "});

    assert_eq!(outcome.output, ["{1,2,3}", "{2}", "true", "false"]);
}

#[test]
fn scalars_print_in_their_plain_form() {
    let outcome = run_fresh(indoc! {r#"
        print "hello";
        print 10 / 4;
        print 2 * 3;
        print assert(true);
        print sqrt;
        print {};
        print {{1}, {}};
    "#});

    assert_eq!(outcome.output,
               ["hello", "2.5", "6", "nil", "<builtin sqrt>", "{}", "{{1},{}}"]);
}

#[test]
fn type_mismatch_prints_nothing() {
    let outcome = run_fresh("print 1 + true;");

    assert_eq!(outcome.status, RunStatus::RuntimeError);
    assert!(outcome.output.is_empty());
    assert_eq!(outcome.diagnostics,
               [Diagnostic { phase:   Phase::Runtime,
                             line:    1,
                             message: "Operands must be numbers.".to_string(), }]);
}

#[test]
fn runtime_error_skips_remaining_statements() {
    let outcome = run_fresh(indoc! {"
        print 1;

        print {1} union 2;
        print 3;
    "});

    assert_eq!(outcome.output, ["1"]);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].line, 3);
    assert_eq!(outcome.diagnostics[0].message, "Operands must be sets.");
}

#[test]
fn runtime_errors_name_the_problem() {
    let cases = [("print nope;", "Undefined variable 'nope'."),
                 ("nope = 1;", "Undefined variable 'nope'."),
                 ("print 1(2);", "Can only call functions."),
                 ("print sqrt(1, 2);", "Expected 1 arguments but got 2."),
                 ("print max(1, 2, 3);", "Expected 1 or 2 arguments but got 3."),
                 ("print 1 in 2;", "Right operand must be a set for 'in'."),
                 ("print {x | x in 1};", "Right operand of 'in' must be a set."),
                 ("print !1 < {};", "Operands must be numbers."),
                 ("assert({});", "Assertion failed.")];

    for (source, message) in cases {
        let outcome = run_fresh(source);
        assert_eq!(outcome.status, RunStatus::RuntimeError, "{source}");
        assert_eq!(outcome.diagnostics[0].message, message, "{source}");
    }
}

#[test]
fn non_set_domain_is_reported_at_the_bound_variable() {
    let outcome = run_fresh(indoc! {"
        print {x
        | y
        in 1};
    "});

    assert_eq!(outcome.status, RunStatus::RuntimeError);
    assert_eq!(outcome.diagnostics[0].line, 2);
    assert_eq!(outcome.diagnostics[0].message, "Right operand of 'in' must be a set.");
}

#[test]
fn syntax_errors_prevent_any_evaluation() {
    let outcome = run_fresh("print 1; print 2 print 3;");

    assert_eq!(outcome.status, RunStatus::SyntaxError);
    assert!(outcome.output.is_empty());
    assert!(outcome.diagnostics.iter().all(|d| d.phase == Phase::Syntax));
}

#[test]
fn evaluating_twice_gives_the_same_value() {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let parsed = parse_source("{x * 2 | x in {1, 2, 3}, x != 2} union {10};",
                              &mut diagnostics);
    let [Statement::Expression { expr }] = parsed.statements.as_slice() else {
        panic!("expected one expression statement");
    };

    let mut context = Context::new();
    let first = context.eval(expr).expect("first evaluation");
    let second = context.eval(expr).expect("second evaluation");

    assert_eq!(first, second);
    assert_eq!(first.to_string(), "{2,6,10}");
}

#[test]
fn comprehension_variable_outlives_the_comprehension() {
    let outcome = run_fresh("let x = 100; let S = {x | x in {1, 2, 3}}; print x;");
    assert_eq!(outcome.output, ["3"]);

    let outcome = run_fresh("let x = 100; let S = {x | x in {}}; print x;");
    assert_eq!(outcome.output, ["100"]);
}

#[test]
fn comprehension_binds_its_variable_in_the_context() {
    let mut context = Context::new();
    run_in(&mut context, "let S = {y | y in {7}};");

    assert!(context.environment.contains("y"));
}

#[test]
fn bindings_persist_across_runs() {
    let mut context = Context::new();

    let first = run_in(&mut context, "let A = {1, 2};");
    let second = run_in(&mut context, "print A union {3};");
    let broken = run_in(&mut context, "print B;");
    let after = run_in(&mut context, "A = {9}; print |A|;");

    assert_eq!(first.status, RunStatus::Ok);
    assert_eq!(second.output, ["{1,2,3}"]);
    assert_eq!(broken.status, RunStatus::RuntimeError);
    assert_eq!(after.output, ["1"]);
}

#[test]
fn partial_run_keeps_earlier_bindings() {
    let mut context = Context::new();
    run_in(&mut context, "let a = 1; print -{}; let b = 2;");

    assert!(context.environment.contains("a"));
    assert!(!context.environment.contains("b"));
}

#[test]
fn builtins_can_be_shadowed() {
    let outcome = run_fresh("let max = 3; print max; print max(1);");

    assert_eq!(outcome.output, ["3"]);
    assert_eq!(outcome.diagnostics[0].message, "Can only call functions.");
}

#[test]
fn builtin_values_compare_by_identity() {
    let outcome = run_fresh("let m = max; print m == max; print m == min; print {m, max};");

    assert_eq!(outcome.output, ["true", "false", "{<builtin max>}"]);
}

#[test]
fn set_equality_ignores_order_and_kind_mixing() {
    let outcome = run_fresh(indoc! {r#"
        print {3, 1, 2} == {1, 2, 3};
        print {1, "1", true} == {true, 1, "1"};
        print |{1, "1", true}|;
        print {{1, 2}} == {{2, 1}};
    "#});

    assert_eq!(outcome.output, ["true", "true", "3", "true"]);
}

#[test]
fn signed_zeros_are_one_element() {
    let outcome = run_fresh("print 0 == -0; print {0, -0}; print |{-0, 0}|;");

    assert_eq!(outcome.output, ["true", "{0}", "1"]);
}

#[test]
fn deep_grouping_below_the_nesting_cap_evaluates() {
    let depth = 90;
    let source = format!("print {}{{1}} union {{2}}{};", "(".repeat(depth), ")".repeat(depth));
    let outcome = run_fresh(&source);

    assert_eq!(outcome.status, RunStatus::Ok);
    assert_eq!(outcome.output, ["{1,2}"]);
}

#[test]
fn runaway_nesting_is_a_syntax_error_not_a_crash() {
    let depth = 10_000;
    let source = format!("print {}1{};", "(".repeat(depth), ")".repeat(depth));
    let outcome = run_fresh(&source);

    assert_eq!(outcome.status, RunStatus::SyntaxError);
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.diagnostics[0].message,
               "Expression nested more than 100 levels deep.");
}

#[test]
fn numbers_follow_float_semantics() {
    let outcome = run_fresh("print 7 % 3; print -7 % 3; print 0.1 + 0.2 == 0.3;");

    assert_eq!(outcome.output, ["1", "-1", "false"]);
}

#[test]
fn values_convert_from_rust() {
    assert_eq!(Value::from(2.0).to_string(), "2");
    assert!(Value::from(true).is_truthy());
    assert!(!Value::Nil.is_truthy());
}
