use regex::Regex;
use serde::Serialize;
use std::{collections::BTreeMap, sync::LazyLock};

static ACCOUNT_ID: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d{17,19}$").unwrap());
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub const MIN_ACCESS_TOKEN_LEN: usize = 59;

/// Field name to message, rendered next to the offending input.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: &'static str, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.0.keys().copied()
    }

    /// `Ok(value)` when no error was recorded.
    pub fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

/// Counts `char`s, so an emoji outside the BMP is one character.
pub fn min_chars(value: &str, min: usize) -> bool {
    value.chars().count() >= min
}

pub fn is_account_id(value: &str) -> bool {
    ACCOUNT_ID.is_match(value)
}

pub fn is_email(value: &str) -> bool {
    EMAIL.is_match(value)
}
