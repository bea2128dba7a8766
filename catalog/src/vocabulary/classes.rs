//! Top-level classes: the product root, orders, and users.

use crate::model::StaticClass;
use crate::vocabulary::terms::PRODUCT_OR_SERVICE;

/// Returns the fixed class declarations in document order.
#[must_use]
pub fn classes() -> Vec<StaticClass> {
    vec![
        StaticClass {
            curie: PRODUCT_OR_SERVICE,
            subclass_of: None,
            comment: None,
        },
        StaticClass {
            curie: ":Order",
            subclass_of: None,
            comment: Some("Represents an order in the e-shop."),
        },
        StaticClass {
            curie: ":OrderItem",
            subclass_of: None,
            comment: Some("Represents an item in an order in the e-shop."),
        },
        StaticClass {
            curie: ":User",
            subclass_of: None,
            comment: Some("Represents a user of the e-shop."),
        },
        StaticClass {
            curie: ":NormalUser",
            subclass_of: Some(":User"),
            comment: Some("Represents a normal user of the e-shop."),
        },
        StaticClass {
            curie: ":AdminUser",
            subclass_of: Some(":User"),
            comment: Some("Represents an admin user of the e-shop."),
        },
    ]
}
