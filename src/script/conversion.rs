// Author: Dustin Pilgrim
// License: MIT

use crate::ast::{Date, Scalar, Value};
use crate::ScriptError;

fn type_error(expected: &str, value: &Value, code: u32) -> ScriptError {
    ScriptError::TypeError {
        message: format!("Expected {}, got {:?}", expected, value),
        path: String::new(),
        hint: Some(format!("Use a {} value in your script", expected)),
        code: Some(code),
    }
}

impl TryFrom<&Value> for String {
    type Error = ScriptError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Scalar(Scalar::String(s)) => Ok(s.clone()),
            _ => Err(type_error("string", value, 401)),
        }
    }
}

impl<'a> TryFrom<&'a Value> for &'a str {
    type Error = ScriptError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        value.as_str().ok_or_else(|| type_error("string", value, 401))
    }
}

impl TryFrom<&Value> for i64 {
    type Error = ScriptError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Scalar(Scalar::Integer(n)) => Ok(*n),
            _ => Err(type_error("integer", value, 402)),
        }
    }
}

impl TryFrom<&Value> for f64 {
    type Error = ScriptError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Scalar(Scalar::Float(x)) => Ok(*x),
            Value::Scalar(Scalar::Integer(n)) => Ok(*n as f64),
            _ => Err(type_error("number", value, 403)),
        }
    }
}

impl TryFrom<&Value> for bool {
    type Error = ScriptError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Scalar(Scalar::Bool(b)) => Ok(*b),
            _ => Err(type_error("yes/no", value, 404)),
        }
    }
}

impl TryFrom<&Value> for Date {
    type Error = ScriptError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Scalar(Scalar::Date(d)) => Ok(*d),
            _ => Err(type_error("date", value, 405)),
        }
    }
}

impl<'a, T> TryFrom<&'a Value> for Vec<T>
where
    T: TryFrom<&'a Value, Error = ScriptError>,
{
    type Error = ScriptError;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Array(items) => items.iter().map(T::try_from).collect(),
            _ => Err(type_error("list", value, 406)),
        }
    }
}
