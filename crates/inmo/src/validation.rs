//! Field-level validation shared by the catalog forms and the property editor.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Field name → message map shown inline next to each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FormErrors(BTreeMap<String, String>);

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn remove(&mut self, field: &str) -> Option<String> {
        self.0.remove(field)
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(())` when nothing was recorded.
    pub fn into_result(self) -> Result<(), FormErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for FormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for FormErrors {}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub(crate) fn char_len(value: &str) -> usize {
    value.trim().chars().count()
}

/// Loose shape check, the backend owns real address verification.
pub(crate) fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
                    .unwrap_or(false)
        }
        None => false,
    }
}

pub(crate) fn require_name(errors: &mut FormErrors, name: &str) {
    if is_blank(name) {
        errors.insert("name", "El nombre es obligatorio");
    }
}

pub(crate) fn check_optional_email(errors: &mut FormErrors, field: &str, email: Option<&str>) {
    if let Some(email) = email.filter(|email| !is_blank(email)) {
        if !is_valid_email(email) {
            errors.insert(field, "El correo electrónico no es válido");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert!(is_valid_email("ana@inmo.com"));
        assert!(is_valid_email(" ana.perez@mail.co "));
        assert!(!is_valid_email("ana@inmo"));
        assert!(!is_valid_email("@inmo.com"));
        assert!(!is_valid_email("ana perez@inmo.com"));
        assert!(!is_valid_email("ana@@inmo.com"));
    }

    #[test]
    fn display_lists_fields_in_order() {
        let mut errors = FormErrors::new();
        errors.insert("title", "obligatorio");
        errors.insert("price", "debe ser mayor a 0");
        assert_eq!(
            errors.to_string(),
            "price: debe ser mayor a 0; title: obligatorio"
        );
        assert!(errors.clone().into_result().is_err());
        errors.clear();
        assert!(errors.into_result().is_ok());
    }
}
