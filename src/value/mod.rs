pub mod error;
pub mod formatter;

use compact_str::CompactString;
use std::cmp::Ordering;

/// A decimal literal. The literal text is kept so that printing reproduces
/// what the script wrote.
#[derive(Debug, Clone)]
pub struct Decimal {
    value: f64,
    literal: CompactString,
}

impl Decimal {
    pub fn new(value: f64, literal: impl Into<CompactString>) -> Self {
        Self {
            value,
            literal: literal.into(),
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn literal(&self) -> &str {
        &self.literal
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Decimal(Decimal),
    Boolean(bool),
    String(CompactString),
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "none"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Decimal(v) => write!(f, "{}", v.literal),
            Self::Boolean(v) => write!(f, "{v}"),
            Self::String(v) => write!(f, "{v}"),
        }
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

impl Value {
    /// Build a value from a literal lexeme: quoted text, an integer, a decimal
    /// or one of the boolean keywords. Anything else is not a literal.
    pub fn from_literal(lexeme: &str) -> Option<Value> {
        if let Some(text) = Self::string_literal(lexeme) {
            return Some(Value::String(text.into()));
        }
        if is_digits(lexeme) {
            // Digit runs too large for an i64 are not integer literals.
            return lexeme.parse().ok().map(Value::Integer);
        }
        if let Some((whole, fraction)) = lexeme.split_once('.') {
            if is_digits(whole) && is_digits(fraction) {
                return lexeme
                    .parse()
                    .ok()
                    .map(|v| Value::Decimal(Decimal::new(v, lexeme)));
            }
        }
        match lexeme {
            "true" => Some(Value::Boolean(true)),
            "false" => Some(Value::Boolean(false)),
            _ => None,
        }
    }

    /// The contents of a `"..."` lexeme.
    pub fn string_literal(lexeme: &str) -> Option<&str> {
        if lexeme.len() >= 2 && lexeme.starts_with('"') && lexeme.ends_with('"') {
            Some(&lexeme[1..lexeme.len() - 1])
        } else {
            None
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Natural ordering between two values, or `None` when they are not
    /// comparable. Null is never comparable, not even with itself.
    pub fn partial_compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Integer(lhs), Value::Integer(rhs)) => Some(lhs.cmp(rhs)),
            (Value::Decimal(lhs), Value::Decimal(rhs)) => lhs.value.partial_cmp(&rhs.value),
            (Value::Integer(lhs), Value::Decimal(rhs)) => (*lhs as f64).partial_cmp(&rhs.value),
            (Value::Decimal(lhs), Value::Integer(rhs)) => lhs.value.partial_cmp(&(*rhs as f64)),
            (Value::Boolean(lhs), Value::Boolean(rhs)) => Some(lhs.cmp(rhs)),
            (Value::String(lhs), Value::String(rhs)) => Some(lhs.as_bytes().cmp(rhs.as_bytes())),
            _ => None,
        }
    }
}

// Comparison
impl Value {
    pub fn greater_than(&self, other: &Value) -> bool {
        matches!(self.partial_compare(other), Some(Ordering::Greater))
    }

    pub fn less_than(&self, other: &Value) -> bool {
        matches!(self.partial_compare(other), Some(Ordering::Less))
    }

    pub fn is_equal(&self, other: &Value) -> bool {
        matches!(self.partial_compare(other), Some(Ordering::Equal))
    }
}
