use crate::environment::Environment;
use crate::parser::{
    parse_condition, parse_property_access,
    statement::{Comparator, Condition},
};
use crate::value::Value;

/// Resolves phrases against an environment. Resolution never fails: anything
/// that can't be resolved becomes `Null`.
pub struct ExpressionEvaluator;

impl ExpressionEvaluator {
    pub fn evaluate_expression(expr: &str, environment: &Environment) -> Value {
        let expr = expr.trim();

        if let Some(text) = Value::string_literal(expr) {
            return Value::String(text.into());
        }

        if let Some((property, object)) = parse_property_access(expr) {
            return match environment.lookup_object(object) {
                Some(instance) => instance.get_property(property),
                None => {
                    tracing::debug!(object, property, "property read on unknown object");
                    Value::Null
                }
            };
        }

        if let Some(value) = Value::from_literal(expr) {
            return value;
        }

        match environment.lookup_variable(expr) {
            Some(value) => value.clone(),
            None => {
                tracing::debug!(expr, "unresolved expression");
                Value::Null
            }
        }
    }

    /// Evaluate `<lhs> is <comparator> than <rhs>`. A phrase of any other
    /// shape, or a `Null` operand, is false.
    pub fn evaluate_condition(text: &str, environment: &Environment) -> bool {
        match parse_condition(text.trim()) {
            Some(condition) => Self::evaluate_parsed_condition(&condition, environment),
            None => {
                tracing::debug!(condition = text, "malformed condition");
                false
            }
        }
    }

    pub fn evaluate_parsed_condition(condition: &Condition, environment: &Environment) -> bool {
        let lhs = Self::evaluate_expression(condition.lhs, environment);
        let rhs = Self::evaluate_expression(condition.rhs, environment);
        Self::compare(condition.comparator, &lhs, &rhs)
    }

    pub fn compare(comparator: Comparator, lhs: &Value, rhs: &Value) -> bool {
        // Null on either side short-circuits, so even two Nulls are not equal.
        if lhs.is_null() || rhs.is_null() {
            return false;
        }
        match comparator {
            Comparator::Greater => lhs.greater_than(rhs),
            Comparator::Less => lhs.less_than(rhs),
            Comparator::Equal => lhs.is_equal(rhs),
        }
    }
}
