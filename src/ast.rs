use std::fmt;

/// A `year.month.day` literal. Components are stored as written, no calendar
/// validation happens here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl Date {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Date { year, month, day }
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.year, self.month, self.day)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Bool(bool),
    Date(Date),
    /// Bare identifier or quoted literal. Quoted literals containing a space
    /// keep their quotes, all others are stored without them.
    String(String),
}

impl Scalar {
    pub fn as_str(&self) -> Option<&str> {
        if let Scalar::String(s) = self {
            Some(s)
        } else {
            None
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Integer(n)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(n) => write!(f, "{}", n),
            Scalar::Float(x) => {
                let s = x.to_string();
                if s.contains('.') {
                    write!(f, "{}", s)
                } else {
                    write!(f, "{}.0", s)
                }
            }
            Scalar::Bool(true) => write!(f, "yes"),
            Scalar::Bool(false) => write!(f, "no"),
            Scalar::Date(d) => write!(f, "{}", d),
            Scalar::String(s) => {
                if (s.len() >= 2 && s.starts_with('"') && s.ends_with('"')) || is_bare_word(s) {
                    write!(f, "{}", s)
                } else {
                    write!(f, "\"{}\"", s)
                }
            }
        }
    }
}

/// True when `s` lexes back as a bare String token.
fn is_bare_word(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    s != "yes"
        && s != "no"
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '%' | ':' | '-'))
}

/// The left-hand side of a pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    String(String),
    Integer(i64),
}

impl Key {
    pub fn as_str(&self) -> Option<&str> {
        if let Key::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    /// Case-insensitive comparison against a string key. Integer keys
    /// never match.
    pub fn matches(&self, name: &str) -> bool {
        self.as_str().is_some_and(|s| s.eq_ignore_ascii_case(name))
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}

impl From<i64> for Key {
    fn from(n: i64) -> Self {
        Key::Integer(n)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::String(s) => write!(f, "{}", Scalar::String(s.clone())),
            Key::Integer(n) => write!(f, "{}", n),
        }
    }
}

/// A node of the parse tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    /// Ordered pairs. Repeated keys are kept, in source order.
    Object(Vec<(Key, Value)>),
    /// Ordered bare values. An empty block is always an empty array.
    Array(Vec<Value>),
}

impl Value {
    pub fn as_object(&self) -> Option<&Vec<(Key, Value)>> {
        if let Value::Object(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        if let Value::Array(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        if let Value::Scalar(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// True for an object, or for an empty block.
    pub fn is_block(&self) -> bool {
        matches!(self, Value::Object(_) | Value::Array(_))
    }

    /// First value stored under `key` when this is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|items| find(items, key))
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Value::Scalar(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::from(s))
    }
}

/// First value stored under `key`, exact match.
pub fn find<'a>(items: &'a [(Key, Value)], key: &str) -> Option<&'a Value> {
    items
        .iter()
        .find(|(k, _)| k.as_str() == Some(key))
        .map(|(_, v)| v)
}

/// Every value stored under `key`, in source order.
pub fn find_all<'a>(items: &'a [(Key, Value)], key: &str) -> Vec<&'a Value> {
    items
        .iter()
        .filter(|(k, _)| k.as_str() == Some(key))
        .map(|(_, v)| v)
        .collect()
}

/// A parsed file: an implicit object without enclosing braces.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    pub pairs: Vec<(Key, Value)>,
}

impl Document {
    pub fn new(pairs: Vec<(Key, Value)>) -> Self {
        Document { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        find(&self.pairs, key)
    }

    pub fn get_all(&self, key: &str) -> Vec<&Value> {
        find_all(&self.pairs, key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (Key, Value)> {
        self.pairs.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a (Key, Value);
    type IntoIter = std::slice::Iter<'a, (Key, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}
