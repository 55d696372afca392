/// Binary operator evaluation logic.
///
/// Handles the execution of all binary operations in expressions: arithmetic,
/// ordering, equality and set algebra.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation and logical NOT.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the main evaluation engine, the runtime context and statement
/// execution.
pub mod core;

/// Evaluation of set comprehensions.
///
/// Iterates the domain set, binds the loop variable and collects results.
pub mod comprehension;

/// Utility functions for evaluation.
///
/// Provides operand checks shared by operators and builtins.
pub mod utils;

/// Function evaluation.
///
/// Handles calls, argument checking and the builtin function table.
pub mod function;
