//! Stable event codes for the structured logging macros.
//!
//! Grouped by stage, the way the teacher groups `logging::codes` by pass.
//! These are for operator-facing diagnostics only; they are unrelated to
//! the public `rule_id` codes emitted in scan `Result`s.

pub mod lexer {
    pub const UNTERMINATED_STRING: &str = "LEX001";
    pub const INVALID_ESCAPE: &str = "LEX002";
}

pub mod parser {
    pub const UNEXPECTED_TOKEN: &str = "PAR001";
    pub const UNBALANCED_BRACE: &str = "PAR002";
    pub const RECOVERED: &str = "PAR003";
}

pub mod scope {
    pub const CYCLE_DETECTED: &str = "SCP001";
}

pub mod registry {
    pub const DUPLICATE_CHECK: &str = "REG001";
}

pub mod driver {
    pub const IO_ERROR: &str = "DRV001";
}
