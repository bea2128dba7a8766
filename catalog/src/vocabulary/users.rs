//! Seed user accounts.
//!
//! One admin and one normal user, published with the ontology so a fresh
//! deployment has accounts to log in with.

use crate::model::UserRecord;

/// Returns the fixed user instances in document order.
#[must_use]
pub fn users() -> Vec<UserRecord> {
    vec![
        UserRecord {
            curie: ":Admin1",
            class: ":AdminUser",
            fields: &[
                (":hasName", "Vasilis"),
                (":hasSurname", "Voudrislis"),
                (":hasUsername", "admin"),
                (":hasPassword", "password"),
            ],
        },
        UserRecord {
            curie: ":User1",
            class: ":NormalUser",
            fields: &[
                (":hasName", "Vasilis"),
                (":hasSurname", "Voudrislis"),
                (":hasUsername", "user"),
                (":hasPassword", "password"),
                (":hasAddress", "123 Main Street, Cityville"),
            ],
        },
    ]
}
