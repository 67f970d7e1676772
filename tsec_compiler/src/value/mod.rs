//! The dynamically-typed value model resolved values carry (spec.md §3, §4.3).
//!
//! An explicit tagged union with constructor and projection methods,
//! no raw interface-to-any punning (spec.md §9). Coercions are total:
//! they never fail, they return `Unknown` when a conversion can't be
//! made statically.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Kind {
    String,
    Number,
    Bool,
    List,
    Map,
    Null,
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Value {
    String(String),
    Number(Decimal),
    Bool(bool),
    List(Vec<Value>),
    Map(Vec<(String, Value)>),
    Null,
    /// Could not be determined statically (spec.md §3 Invariants).
    Unknown,
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::String(_) => Kind::String,
            Value::Number(_) => Kind::Number,
            Value::Bool(_) => Kind::Bool,
            Value::List(_) => Kind::List,
            Value::Map(_) => Kind::Map,
            Value::Null => Kind::Null,
            Value::Unknown => Kind::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Bool accepts string forms `"true"`/`"false"` via this explicit
    /// coercion; any other string (or other kind) is `Unknown`. Checks
    /// that compare booleans MUST go through this, per spec.md §4.3, so
    /// that `enable_shielded_nodes = "false"` is caught the same as
    /// `= false`.
    pub fn as_bool(&self) -> Value {
        match self {
            Value::Bool(b) => Value::Bool(*b),
            Value::String(s) if s == "true" => Value::Bool(true),
            Value::String(s) if s == "false" => Value::Bool(false),
            _ => Value::Unknown,
        }
    }

    /// True iff `Bool(true)` or `String("true")`.
    pub fn is_true(&self) -> bool {
        matches!(self.as_bool(), Value::Bool(true))
    }

    /// True iff `Bool(false)` or `String("false")`.
    pub fn is_false(&self) -> bool {
        matches!(self.as_bool(), Value::Bool(false))
    }

    /// Canonical textual form for String/Number/Bool; anything else is
    /// treated as missing by the caller (per spec.md §4.3, checks treat
    /// List/Map/Unknown/Null as "no string form").
    pub fn as_string(&self) -> Option<String> {
        match self {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(String, Value)]> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a single field on a Map value by name.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_map()?.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// `contains(list, predicate)`: true if any element satisfies `pred`.
    pub fn contains(&self, pred: impl Fn(&Value) -> bool) -> bool {
        self.as_list().map(|items| items.iter().any(pred)).unwrap_or(false)
    }

    /// String `ends_with`; `Unknown`/non-string values never match.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.as_string().map(|s| s.ends_with(suffix)).unwrap_or(false)
    }

    /// String equality; `Unknown` compares unequal to every literal
    /// (spec.md §3 Invariants).
    pub fn equals(&self, other: &str) -> bool {
        self.as_string().map(|s| s == other).unwrap_or(false)
    }

    /// String `is_any_of` a set of candidates.
    pub fn is_any_of(&self, candidates: &[&str]) -> bool {
        self.as_string()
            .map(|s| candidates.iter().any(|c| *c == s))
            .unwrap_or(false)
    }

    pub fn number(n: impl Into<Decimal>) -> Value {
        Value::Number(n.into())
    }

    pub fn parse_number(text: &str) -> Option<Value> {
        Decimal::from_str(text).ok().map(Value::Number)
    }
}

impl PartialEq for Value {
    /// `Unknown` compares unequal to everything, including itself, so
    /// predicates never mistake "can't tell" for a match (spec.md §3).
    fn eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Unknown, _) | (_, Value::Unknown) => false,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            (Value::Map(a), Value::Map(b)) => a == b,
            (Value::Null, Value::Null) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{s}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Value::Map(_) => write!(f, "<map>"),
            Value::Null => write!(f, "null"),
            Value::Unknown => write!(f, "<unknown>"),
        }
    }
}
