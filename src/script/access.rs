use super::*;
use crate::ast::{Key, Value};

fn segment_matches(key: &Key, seg: &str) -> bool {
    match key {
        Key::String(s) => s == seg,
        Key::Integer(n) => n.to_string() == seg,
    }
}

impl ScriptFile {
    /// Get a typed value using dot notation. Each segment follows the first
    /// pair with that key.
    ///
    /// # Examples
    /// ```no_run
    /// # use pdx_script::ScriptFile;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// # let script = ScriptFile::from_file("missions.txt")?;
    /// let slot: i64 = script.get("fra_missions.slot")?;
    /// let generic: bool = script.get("fra_missions.generic")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// # Errors
    /// `MissingKey` if the path doesn't exist, `TypeError` if the value can't
    /// be converted to `T`.
    pub fn get<'a, T>(&'a self, path: &str) -> Result<T, ScriptError>
    where
        T: TryFrom<&'a Value, Error = ScriptError>,
    {
        let value = self.get_value(path)?;
        T::try_from(value).map_err(|e| self.enhance_error(e, path))
    }

    /// Like [`ScriptFile::get`], but a missing path is `Ok(None)`.
    pub fn get_optional<'a, T>(&'a self, path: &str) -> Result<Option<T>, ScriptError>
    where
        T: TryFrom<&'a Value, Error = ScriptError>,
    {
        match self.get_value(path) {
            Ok(value) => T::try_from(value)
                .map(Some)
                .map_err(|e| self.enhance_error(e, path)),
            Err(ScriptError::MissingKey { .. }) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Get a value with a fallback default.
    pub fn get_or<'a, T>(&'a self, path: &str, default: T) -> T
    where
        T: TryFrom<&'a Value, Error = ScriptError>,
    {
        self.get(path).unwrap_or(default)
    }

    /// Get the raw value at `path`.
    pub fn get_value(&self, path: &str) -> Result<&Value, ScriptError> {
        let mut segs = path.split('.');
        let first = segs.next().unwrap_or("");

        let mut current = self
            .document
            .pairs
            .iter()
            .find(|(k, _)| segment_matches(k, first))
            .map(|(_, v)| v)
            .ok_or_else(|| self.missing(path))?;

        for seg in segs {
            current = current
                .as_object()
                .and_then(|items| items.iter().find(|(k, _)| segment_matches(k, seg)))
                .map(|(_, v)| v)
                .ok_or_else(|| self.missing(path))?;
        }

        Ok(current)
    }

    /// Every value stored under the last segment of `path`, in source order.
    /// Repeated keys are the norm in game scripts.
    pub fn get_all(&self, path: &str) -> Vec<&Value> {
        let (parent, last) = match path.rsplit_once('.') {
            Some((parent, last)) => (Some(parent), last),
            None => (None, path),
        };

        let items: &[(Key, Value)] = match parent {
            None => &self.document.pairs,
            Some(parent) => match self.get_value(parent).ok().and_then(Value::as_object) {
                Some(items) => items,
                None => return Vec::new(),
            },
        };

        items
            .iter()
            .filter(|(k, _)| segment_matches(k, last))
            .map(|(_, v)| v)
            .collect()
    }

    /// Keys at a given path, in order, repeats included. An empty path lists
    /// the top level.
    pub fn keys(&self, path: &str) -> Result<Vec<Key>, ScriptError> {
        if path.trim().is_empty() {
            return Ok(self.document.pairs.iter().map(|(k, _)| k.clone()).collect());
        }

        match self.get_value(path)? {
            Value::Object(items) => Ok(items.iter().map(|(k, _)| k.clone()).collect()),
            // `{ }` parses as an empty array
            Value::Array(items) if items.is_empty() => Ok(Vec::new()),
            _ => Err(ScriptError::TypeError {
                message: "not an object".into(),
                path: path.to_string(),
                hint: Some("Only objects have keys".into()),
                code: Some(306),
            }),
        }
    }

    /// Check if a path exists.
    pub fn has(&self, path: &str) -> bool {
        self.get_value(path).is_ok()
    }

    fn missing(&self, path: &str) -> ScriptError {
        ScriptError::MissingKey {
            path: path.to_string(),
            hint: Some("Check that the path exists in your script".into()),
            code: Some(304),
        }
    }

    /// Attach the path, and the source line when one can be found.
    fn enhance_error(&self, e: ScriptError, path: &str) -> ScriptError {
        match e {
            ScriptError::TypeError { message, hint, code, .. } => {
                let (line, snippet) = helpers::find_script_line(path, &self.raw_content);
                let message = if line > 0 {
                    format!("{} (line {}: {})", message, line, snippet)
                } else {
                    message
                };
                ScriptError::TypeError {
                    message,
                    path: path.to_string(),
                    hint,
                    code,
                }
            }
            other => other,
        }
    }
}
