//! Compile-time limits enforced while lexing and parsing.
//!
//! Small, fixed bounds rather than configurable ones: they exist to turn
//! pathological input (deeply nested blocks, absurdly long identifiers)
//! into a clean parse error instead of a stack overflow.

/// Maximum nesting depth of blocks/lists/maps the parser will descend into.
pub const MAX_NESTING_DEPTH: usize = 128;

/// Maximum byte length of a single identifier or label.
pub const MAX_IDENTIFIER_LENGTH: usize = 512;

/// Maximum byte length of a single string literal.
pub const MAX_STRING_LENGTH: usize = 1 << 20;

/// Maximum number of reference segments the evaluator will chase before
/// giving up and returning `Unknown` (guards against pathological `var.`
/// chains even though the grammar doesn't support recursive references).
pub const MAX_REFERENCE_DEPTH: usize = 64;
