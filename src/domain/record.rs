//! Member record model.
//!
//! A [`Record`] is one row of the admin table. Its `id` is the identity used by
//! selection and editing; every other field can be rewritten through an
//! [`EditBuffer`]. The serde representation matches the JSON objects served by the
//! members endpoint (`{"id","name","email","role"}`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Access level of a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    /// Wire and display name of the role.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    /// Returns the other role. Used by the edit row's role toggle.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Admin => Self::Member,
            Self::Member => Self::Admin,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "member" => Ok(Self::Member),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

/// One member row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Record {
    /// Builds a record from its parts.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Case-insensitive substring match against every visible field.
    ///
    /// An empty term matches every record.
    #[must_use]
    pub fn matches(&self, term: &str) -> bool {
        self.matches_folded(&term.to_lowercase())
    }

    /// Same as [`Record::matches`] for a term that is already lowercased.
    #[must_use]
    pub fn matches_folded(&self, folded_term: &str) -> bool {
        if folded_term.is_empty() {
            return true;
        }
        [
            self.id.as_str(),
            self.name.as_str(),
            self.email.as_str(),
            self.role.as_str(),
        ]
        .iter()
        .any(|value| value.to_lowercase().contains(folded_term))
    }
}

/// Editable column of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Name,
    Email,
    Role,
}

impl EditField {
    /// Next field in tab order, wrapping after `Role`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Role,
            Self::Role => Self::Name,
        }
    }

    /// Previous field in tab order, wrapping before `Name`.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Name => Self::Role,
            Self::Email => Self::Name,
            Self::Role => Self::Email,
        }
    }
}

/// Staged, uncommitted copy of a record's editable fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl EditBuffer {
    /// Seeds a buffer from the record's current values.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            name: record.name.clone(),
            email: record.email.clone(),
            role: record.role,
        }
    }

    /// Current text of a field.
    #[must_use]
    pub fn value(&self, field: EditField) -> &str {
        match field {
            EditField::Name => &self.name,
            EditField::Email => &self.email,
            EditField::Role => self.role.as_str(),
        }
    }

    /// Replaces one field. Returns `true` if the buffer changed.
    ///
    /// A role value that is neither `admin` nor `member` is rejected and leaves the
    /// buffer untouched.
    pub fn set(&mut self, field: EditField, value: &str) -> bool {
        match field {
            EditField::Name => replace_if_changed(&mut self.name, value),
            EditField::Email => replace_if_changed(&mut self.email, value),
            EditField::Role => match value.parse::<Role>() {
                Ok(role) if role != self.role => {
                    self.role = role;
                    true
                }
                Ok(_) => false,
                Err(e) => {
                    tracing::debug!(error = %e, "ignoring role edit");
                    false
                }
            },
        }
    }

    /// Writes the staged values onto `record`, leaving its id untouched.
    pub fn apply_to(&self, record: &mut Record) {
        record.name.clone_from(&self.name);
        record.email.clone_from(&self.email);
        record.role = self.role;
    }
}

fn replace_if_changed(slot: &mut String, value: &str) -> bool {
    if slot == value {
        return false;
    }
    value.clone_into(slot);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ada() -> Record {
        Record::new("42", "Ada Lovelace", "ada@example.com", Role::Admin)
    }

    #[test]
    fn deserializes_endpoint_shape() {
        let json = r#"{"id":"1","name":"Aaron Miles","email":"aaron@mailinator.com","role":"member"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record, Record::new("1", "Aaron Miles", "aaron@mailinator.com", Role::Member));
    }

    #[test]
    fn rejects_unknown_role_on_the_wire() {
        let json = r#"{"id":"1","name":"x","email":"y","role":"owner"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn matches_is_case_insensitive_across_fields() {
        let record = ada();
        assert!(record.matches("LOVE"));
        assert!(record.matches("example.COM"));
        assert!(record.matches("42"));
        assert!(record.matches("Admin"));
        assert!(!record.matches("member"));
        assert!(record.matches(""));
    }

    #[test]
    fn role_parses_loosely_and_toggles() {
        assert_eq!(" Admin ".parse::<Role>(), Ok(Role::Admin));
        assert!("root".parse::<Role>().is_err());
        assert_eq!(Role::Admin.toggled(), Role::Member);
        assert_eq!(Role::Member.to_string(), "member");
    }

    #[test]
    fn edit_field_tab_order_wraps() {
        assert_eq!(EditField::Role.next(), EditField::Name);
        assert_eq!(EditField::Name.prev(), EditField::Role);
        assert_eq!(EditField::Email.next().prev(), EditField::Email);
    }

    #[test]
    fn buffer_set_reports_changes_only() {
        let mut buffer = EditBuffer::from_record(&ada());
        assert!(!buffer.set(EditField::Name, "Ada Lovelace"));
        assert!(buffer.set(EditField::Name, "Ada King"));
        assert!(buffer.set(EditField::Role, "member"));
        assert!(!buffer.set(EditField::Role, "superuser"));
        assert_eq!(buffer.role, Role::Member);
        assert_eq!(buffer.value(EditField::Name), "Ada King");
    }

    #[test]
    fn apply_keeps_identity() {
        let mut record = ada();
        let mut buffer = EditBuffer::from_record(&record);
        buffer.set(EditField::Email, "countess@example.com");
        buffer.apply_to(&mut record);
        assert_eq!(record.id, "42");
        assert_eq!(record.email, "countess@example.com");
    }
}
