//! Persisted object records.

use std::fmt;

use crate::domain::errors::ValidationError;

/// Identifier assigned by the record store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RecordId(pub i64);

impl RecordId {
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A stored name/description pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    id: RecordId,
    name: String,
    description: String,
}

impl Record {
    #[must_use]
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> RecordId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

/// Validated input for a record insert. The id is left to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    name: String,
    description: String,
}

impl NewRecord {
    /// Trims both fields and rejects a blank name.
    ///
    /// # Errors
    /// Returns [`ValidationError::BlankField`] when the name is blank.
    pub fn new(name: &str, description: &str) -> Result<Self, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::blank("nombre"));
        }

        Ok(Self {
            name: name.to_string(),
            description: description.trim().to_string(),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Attaches the id the store assigned.
    #[must_use]
    pub fn into_record(self, id: RecordId) -> Record {
        Record {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_trims_fields() {
        let record = NewRecord::new("  Collar ", " rojo  ").unwrap();
        assert_eq!(record.name(), "Collar");
        assert_eq!(record.description(), "rojo");
    }

    #[test]
    fn test_blank_name_rejected() {
        let err = NewRecord::new("   ", "algo").unwrap_err();
        assert!(matches!(err, ValidationError::BlankField { field: "nombre" }));
    }

    #[test]
    fn test_empty_description_allowed() {
        let record = NewRecord::new("Cama", "").unwrap();
        assert_eq!(record.description(), "");
    }

    #[test]
    fn test_into_record_keeps_fields() {
        let record = NewRecord::new("Cama", "suave")
            .unwrap()
            .into_record(RecordId(7));
        assert_eq!(record, Record::new(7, "Cama", "suave"));
    }
}
