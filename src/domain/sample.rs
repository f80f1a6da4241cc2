//! Deterministic fixture records.
//!
//! Used by the `sample` configuration option (demo without network access) and by
//! the test suite.

use super::record::{Record, Role};

/// Generates `count` records with ids `"1"..="count"`.
///
/// Even ids are admins, odd ids are members.
///
/// ```
/// use memberdesk::domain::{generate_sample_records, Role};
///
/// let records = generate_sample_records(3);
/// assert_eq!(records[1].id, "2");
/// assert_eq!(records[1].email, "user2@mailinator.com");
/// assert_eq!(records[1].role, Role::Admin);
/// ```
#[must_use]
pub fn generate_sample_records(count: usize) -> Vec<Record> {
    (1..=count)
        .map(|i| {
            let role = if i % 2 == 0 { Role::Admin } else { Role::Member };
            Record::new(
                i.to_string(),
                format!("User {i} Name"),
                format!("user{i}@mailinator.com"),
                role,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alternates_roles_by_parity() {
        let records = generate_sample_records(50);
        assert_eq!(records.len(), 50);
        assert_eq!(records[0].role, Role::Member);
        assert_eq!(records[49].id, "50");
        assert_eq!(records[49].role, Role::Admin);
        assert_eq!(records[9].name, "User 10 Name");
    }

    #[test]
    fn zero_count_is_empty() {
        assert!(generate_sample_records(0).is_empty());
    }
}
