use indoc::indoc;
use pretty_assertions::assert_eq;
use setta::{
    Parsed,
    ast::{BinaryOperator, Expr, Statement},
    parse_source,
    report::{Diagnostic, Phase},
};

fn parse_program(source: &str) -> (Parsed, Vec<Diagnostic>) {
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    let parsed = parse_source(source, &mut diagnostics);
    (parsed, diagnostics)
}

fn single_expression(source: &str) -> Expr {
    let (parsed, diagnostics) = parse_program(source);
    assert!(diagnostics.is_empty(), "{diagnostics:?}");
    match parsed.statements.as_slice() {
        [Statement::Print { expr } | Statement::Expression { expr }] => expr.clone(),
        other => panic!("expected one expression statement, got {other:?}"),
    }
}

fn binary_parts(expr: &Expr) -> (&Expr, BinaryOperator, &Expr) {
    match expr {
        Expr::Binary { left, op, right, .. } => (left, *op, right),
        other => panic!("expected a binary node, got {other}"),
    }
}

#[test]
fn union_groups_before_subseteq() {
    let expr = single_expression("A union B subseteq C;");
    let (left, op, right) = binary_parts(&expr);

    assert_eq!(op, BinaryOperator::SubsetEq);
    assert_eq!(right.to_string(), "C");
    let (a, inner, b) = binary_parts(left);
    assert_eq!((a.to_string(), inner, b.to_string()),
               ("A".to_string(), BinaryOperator::Union, "B".to_string()));
}

#[test]
fn multiplication_groups_before_addition() {
    let expr = single_expression("1 + 2 * 3;");
    let (left, op, right) = binary_parts(&expr);

    assert_eq!(op, BinaryOperator::Add);
    assert_eq!(left.to_string(), "1");
    assert_eq!(binary_parts(right).1, BinaryOperator::Mul);
}

#[test]
fn set_forms_are_told_apart() {
    assert!(matches!(single_expression("{x | x in A};"), Expr::Comprehension { .. }));
    assert!(matches!(single_expression("{1, 2, 3};"),
                     Expr::SetLiteral { ref elements } if elements.len() == 3));
    assert!(matches!(single_expression("{};"),
                     Expr::SetLiteral { ref elements } if elements.is_empty()));
    assert!(matches!(single_expression("{x};"),
                     Expr::SetLiteral { ref elements } if elements.len() == 1));
}

#[test]
fn two_missing_semicolons_are_two_errors() {
    let source = indoc! {"
        let a = 1
        print a
        let b = 2;
        print b;
    "};
    let (parsed, diagnostics) = parse_program(source);

    let found: Vec<_> = diagnostics.iter()
                                   .map(|d| (d.phase, d.line, d.message.as_str()))
                                   .collect();
    assert_eq!(found,
               [(Phase::Syntax, 2, "Expect ';' after value, found 'print'."),
                (Phase::Syntax, 3, "Expect ';' after value, found 'let'.")]);
    assert!(parsed.had_syntax_error);
    assert_eq!(parsed.statements.len(), 2);
}

#[test]
fn each_broken_statement_is_reported_once() {
    let source = indoc! {"
        let = 1;
        print (2;
        def f(x y) = x;
        print {1, 2;
        print 5;
    "};
    let (parsed, diagnostics) = parse_program(source);

    let lines: Vec<_> = diagnostics.iter().map(|d| d.line).collect();
    assert_eq!(lines, [1, 2, 3, 4]);
    assert_eq!(parsed.statements.len(), 1);
    assert_eq!(parsed.statements[0].to_string(), "print 5;");
}

#[test]
fn lexical_errors_block_evaluation() {
    let (parsed, diagnostics) = parse_program("print 1 # 2;");

    assert!(parsed.had_syntax_error);
    assert_eq!(diagnostics[0].message, "Unexpected character '#'.");
    assert_eq!(diagnostics[1].message, "Expect ';' after value, found '2'.");
}

#[test]
fn printed_programs_parse_back_to_the_same_tree() {
    let programs = ["let A = {1, 2, 3};",
                    "print {x * x | x in A, x % 2 == 0};",
                    "print |A union {4}| - (2 + 3) * 4;",
                    "print !(1 in A) == false;",
                    "print -(-2.5) <= 7 / 3;",
                    "def f(a, b) = a + b;",
                    "a = b = {};",
                    "print max({1, {2}}, \"text\")(0);",
                    "print {{x} | x in {1, 2}} intersect B subseteq C != true;",
                    "print {x | x in {}};"];

    for program in programs {
        let (first, diagnostics) = parse_program(program);
        assert!(diagnostics.is_empty(), "{program}: {diagnostics:?}");

        let printed: Vec<String> = first.statements.iter().map(ToString::to_string).collect();
        let (second, diagnostics) = parse_program(&printed.join(" "));
        assert!(diagnostics.is_empty(), "{printed:?}: {diagnostics:?}");

        assert_eq!(first.statements, second.statements, "{program}");
    }
}

#[test]
fn printer_emits_source_syntax() {
    let (parsed, _) = parse_program("print {x*x|x in A,x>1};let B=(A union{2});");
    let printed: Vec<String> = parsed.statements.iter().map(ToString::to_string).collect();

    assert_eq!(printed,
               ["print {x * x | x in A, x > 1};", "let B = (A union {2});"]);
}

#[test]
fn literals_too_large_for_a_double_are_syntax_errors() {
    let digits = "9".repeat(320);
    let (parsed, diagnostics) = parse_program(&format!("print {digits};"));

    assert!(parsed.had_syntax_error);
    assert_eq!(diagnostics[0].message, format!("Number literal '{digits}' is too large."));
}
