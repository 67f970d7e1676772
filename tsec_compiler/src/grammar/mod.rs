//! Block/attribute/expression tree, the parser's output (spec.md §3).

pub mod ast;

pub use ast::{Attribute, Block, Expression};
