/// Parser state, the program entry point and error recovery.
///
/// Holds the token cursor, reports syntax errors and resynchronizes at the
/// next statement boundary.
pub mod core;

/// Statement parsing.
///
/// Parses `def`, `let`, `print` and expression statements.
pub mod statement;

/// Binary operator parsing.
///
/// One function per precedence layer, from assignment down to factors.
pub mod binary;

/// Unary operator, call and primary parsing.
///
/// Handles prefix operators, call suffixes, literals, names, grouping and
/// cardinality bars.
pub mod unary;

/// Set literal parsing.
///
/// Tells rosters and comprehensions apart after the opening brace.
pub mod set;

/// Utility functions for the parser.
pub mod utils;
