use chrono::NaiveDate;
use std::fmt;

use super::Location;

/// User input for creating or editing an item, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFields {
    pub name: String,
    pub location: Location,
    pub date: Option<NaiveDate>,
}

impl ItemFields {
    pub fn new(name: impl Into<String>, location: Location, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            location,
            date: Some(date),
        }
    }

    /// Trim the name and check that both name and date are present.
    ///
    /// Returns the normalized name and date on success.
    pub fn validate(&self) -> Result<(String, NaiveDate), ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        let date = self.date.ok_or(ValidationError::MissingDate)?;
        Ok((name.to_string(), date))
    }
}

/// Rejected user input. Never changes any state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    EmptyName,
    MissingDate,
    InvalidDate(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyName => write!(f, "Please enter an item name"),
            ValidationError::MissingDate => write!(f, "Please select a date"),
            ValidationError::InvalidDate(text) => {
                write!(f, "Invalid date '{}': expected YYYY-MM-DD", text)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
