/// The environment module stores variable bindings.
///
/// A single flat, mutable map from names to values. There are no nested
/// scopes: `let` and comprehension variables both write into the same table.
pub mod environment;
/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and statements,
/// performs arithmetic, comparison and set operations, manages variable state,
/// and produces printed output.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Builds sets from rosters and comprehensions.
/// - Reports runtime errors such as operand kind mismatches or unknown names.
pub mod evaluator;
/// Turns source text into tokens.
///
/// Built on `logos`. Keywords such as `union` and `subseteq` win over
/// identifiers; newlines are skipped but counted so every token knows its
/// line. Stray characters and unterminated strings are collected as errors
/// without stopping the scan.
pub mod lexer;
/// Recursive-descent parser producing statements and expressions.
///
/// Syntax errors are reported as they are found and the parser
/// resynchronizes at the next statement, so one pass surfaces all of them.
/// After an opening `{` it decides between a roster and a comprehension by
/// the token that follows the first element.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the value types used during interpretation: numbers,
/// booleans, strings, sets, builtin callables and `nil`. It also provides
/// equality, hashing, truthiness and printing for them.
///
/// # Responsibilities
/// - Defines the `Value` enum and all supported value variants.
/// - Defines the insertion-ordered, deduplicated `SetValue`.
/// - Implements the printed form used by `print`.
pub mod value;
