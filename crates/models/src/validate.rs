//! Boundary checks shared by the entity payloads.

use serde::{Deserialize, Deserializer};
use serde_json::Value as Json;

use crate::errors::ModelError;

/// Trimmed value of a required text field; blank is a validation error.
pub fn required(field: &str, value: &str) -> Result<String, ModelError> {
    let v = value.trim();
    if v.is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    Ok(v.to_string())
}

/// Trimmed optional text; blank collapses to `None`.
pub fn optional(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let t = v.trim();
        if t.is_empty() { None } else { Some(t.to_string()) }
    })
}

pub fn email(field: &str, value: &str) -> Result<String, ModelError> {
    let v = required(field, value)?;
    let valid = match v.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    };
    if !valid || v.contains(char::is_whitespace) {
        return Err(ModelError::Validation(format!("{field} is not a valid email")));
    }
    Ok(v)
}

pub fn optional_email(field: &str, value: Option<String>) -> Result<Option<String>, ModelError> {
    match optional(value) {
        Some(v) => email(field, &v).map(Some),
        None => Ok(None),
    }
}

/// Lowercase ASCII slug: runs of anything other than `[a-z0-9]` become one `-`.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut dash = false;
    for c in input.trim().chars().flat_map(char::to_lowercase) {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            dash = false;
        } else if !dash && !out.is_empty() {
            out.push('-');
            dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

/// Explicit slug if given (must already be a valid slug), otherwise derived from `source`.
pub fn slug_or_derive(explicit: Option<String>, source: &str) -> Result<String, ModelError> {
    match optional(explicit) {
        Some(s) => slug(&s),
        None => {
            let derived = slugify(source);
            if derived.is_empty() {
                return Err(ModelError::Validation("slug could not be derived from title".into()));
            }
            Ok(derived)
        }
    }
}

pub fn slug(value: &str) -> Result<String, ModelError> {
    let v = value.trim();
    let ok = !v.is_empty()
        && !v.starts_with('-')
        && !v.ends_with('-')
        && v.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if !ok {
        return Err(ModelError::Validation(format!("invalid slug: {v}")));
    }
    Ok(v.to_string())
}

/// One of `allowed`, compared case-insensitively, returned lowercase.
pub fn one_of(field: &str, value: &str, allowed: &[&str]) -> Result<String, ModelError> {
    let v = value.trim().to_ascii_lowercase();
    if allowed.contains(&v.as_str()) {
        Ok(v)
    } else {
        Err(ModelError::Validation(format!("{field} must be one of: {}", allowed.join(", "))))
    }
}

/// Store a list of strings as a JSON array, dropping blank entries.
pub fn string_list(items: Vec<String>) -> Json {
    Json::Array(
        items
            .into_iter()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(Json::String)
            .collect(),
    )
}

/// Read back a JSON list column, skipping anything that is not a string.
pub fn read_list(value: &Json) -> Vec<String> {
    match value {
        Json::Array(items) => items.iter().filter_map(|v| v.as_str().map(str::to_string)).collect(),
        _ => Vec::new(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListInput {
    List(Vec<String>),
    Text(String),
}

impl From<ListInput> for Vec<String> {
    fn from(v: ListInput) -> Self {
        match v {
            ListInput::List(items) => items,
            // admin forms submit one entry per line
            ListInput::Text(text) => text.lines().map(str::to_string).collect(),
        }
    }
}

/// Accepts a JSON array of strings or a newline separated string.
/// Arrays with non-string elements are rejected.
pub fn list_field<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ListInput>::deserialize(d)?.map(Vec::from).unwrap_or_default())
}

/// `list_field` for patch payloads: absent or `null` leaves the column untouched.
pub fn opt_list_field<'de, D>(d: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ListInput>::deserialize(d)?.map(Vec::from))
}

pub fn non_negative(field: &str, value: f64) -> Result<f64, ModelError> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::Validation(format!("{field} must be a non-negative number")));
    }
    Ok(value)
}

pub fn rating(value: Option<f64>) -> Result<Option<f64>, ModelError> {
    match value {
        Some(r) if !(1.0..=5.0).contains(&r) => Err(ModelError::Validation("rating must be between 1 and 5".into())),
        other => Ok(other),
    }
}

pub fn at_least_one(field: &str, value: i32) -> Result<i32, ModelError> {
    if value < 1 {
        return Err(ModelError::Validation(format!("{field} must be at least 1")));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_separators() {
        assert_eq!(slugify("  Kilimanjaro: 7 Days / Machame!  "), "kilimanjaro-7-days-machame");
        assert_eq!(slugify("---"), "");
    }

    #[test]
    fn explicit_slug_must_be_clean() {
        assert!(slug_or_derive(Some("Bad Slug".into()), "x").is_err());
        assert_eq!(slug_or_derive(Some("good-slug".into()), "x").unwrap(), "good-slug");
        assert_eq!(slug_or_derive(None, "Serengeti Safari").unwrap(), "serengeti-safari");
    }

    #[test]
    fn list_field_accepts_array_or_lines() {
        #[derive(Deserialize)]
        struct P {
            #[serde(default, deserialize_with = "list_field")]
            items: Vec<String>,
        }
        let a: P = serde_json::from_str(r#"{"items":["a","b"]}"#).unwrap();
        assert_eq!(a.items, vec!["a", "b"]);
        let b: P = serde_json::from_str(r#"{"items":"a\nb"}"#).unwrap();
        assert_eq!(b.items, vec!["a", "b"]);
        let c: P = serde_json::from_str("{}").unwrap();
        assert!(c.items.is_empty());
        assert!(serde_json::from_str::<P>(r#"{"items":[1,2]}"#).is_err());
    }

    #[test]
    fn string_list_drops_blanks() {
        let v = string_list(vec![" a ".into(), "".into(), "b".into()]);
        assert_eq!(read_list(&v), vec!["a", "b"]);
    }

    #[test]
    fn email_shape() {
        assert!(email("email", "jane@example.com").is_ok());
        assert!(email("email", "jane@example").is_err());
        assert!(email("email", "  ").is_err());
    }

    #[test]
    fn rating_bounds() {
        assert!(rating(Some(0.5)).is_err());
        assert!(rating(Some(4.5)).is_ok());
        assert!(rating(None).is_ok());
    }
}
