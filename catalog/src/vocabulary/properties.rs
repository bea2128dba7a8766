//! Property schema.
//!
//! Product properties are scoped to `gr:ProductOrService`; account, order and
//! order-item properties to the shop's own classes. None of these depend on
//! the input.

use crate::model::{Property, PropertyKind};
use crate::vocabulary::terms::{self, PRODUCT_OR_SERVICE};

/// Returns the fixed property declarations in document order.
#[must_use]
pub fn properties() -> Vec<Property> {
    vec![
        Property {
            curie: terms::NAME,
            kind: PropertyKind::Datatype,
            domain: PRODUCT_OR_SERVICE,
            range: "rdfs:Literal",
            comment: None,
            see_also: None,
        },
        Property {
            curie: terms::HAS_BRAND,
            kind: PropertyKind::Datatype,
            domain: PRODUCT_OR_SERVICE,
            range: "rdfs:Literal",
            comment: Some(
                "This property is inspired by gr:hasBrand from the GoodRelations \
                 ontology. However, its range has been changed from gr:Brand to \
                 rdfs:Literal to simplify the representation of brands as literal \
                 values rather than requiring the creation of separate instances \
                 of gr:Brand. This approach was chosen for ease of use and to \
                 align with the structure of the current dataset, which lists \
                 brands as plain text rather than as linked data entities.",
            ),
            see_also: Some("http://purl.org/goodrelations/v1#hasBrand"),
        },
        Property {
            curie: terms::HAS_DISCOUNT_PRICE,
            kind: PropertyKind::Datatype,
            domain: PRODUCT_OR_SERVICE,
            range: "xsd:double",
            comment: None,
            see_also: None,
        },
        Property {
            curie: terms::HAS_PRICE,
            kind: PropertyKind::Datatype,
            domain: PRODUCT_OR_SERVICE,
            range: "xsd:double",
            comment: Some("The price is in euro."),
            see_also: None,
        },
        Property {
            curie: terms::HAS_PRODUCT_ID,
            kind: PropertyKind::Datatype,
            domain: PRODUCT_OR_SERVICE,
            range: "rdfs:Literal",
            comment: Some(
                "A unique identifier for a product, specific to this ontology. \
                 This property is used when existing identifiers such as EAN or \
                 GTIN are not applicable.",
            ),
            see_also: None,
        },
        Property {
            curie: terms::HAS_QUANTITY,
            kind: PropertyKind::Datatype,
            domain: PRODUCT_OR_SERVICE,
            range: "rdfs:Literal",
            comment: Some("The quantity of the product."),
            see_also: None,
        },
        Property {
            curie: terms::IS_AVAILABLE,
            kind: PropertyKind::Datatype,
            domain: PRODUCT_OR_SERVICE,
            range: "xsd:boolean",
            comment: None,
            see_also: None,
        },
        Property {
            curie: terms::HAS_STOCK,
            kind: PropertyKind::Datatype,
            domain: PRODUCT_OR_SERVICE,
            range: "xsd:integer",
            comment: Some("The stock quantity of the product in the store."),
            see_also: None,
        },
        Property {
            curie: ":hasUsername",
            kind: PropertyKind::Datatype,
            domain: ":User",
            range: "rdfs:Literal",
            comment: Some("The username of a user."),
            see_also: None,
        },
        Property {
            curie: ":hasPassword",
            kind: PropertyKind::Datatype,
            domain: ":User",
            range: "rdfs:Literal",
            comment: Some("The password of a user."),
            see_also: None,
        },
        Property {
            curie: ":hasName",
            kind: PropertyKind::Datatype,
            domain: ":User",
            range: "rdfs:Literal",
            comment: Some("The first name of a user."),
            see_also: None,
        },
        Property {
            curie: ":hasSurname",
            kind: PropertyKind::Datatype,
            domain: ":User",
            range: "rdfs:Literal",
            comment: Some("The surname of a user."),
            see_also: None,
        },
        Property {
            curie: ":hasAddress",
            kind: PropertyKind::Datatype,
            domain: ":User",
            range: "rdfs:Literal",
            comment: Some("The address of a user."),
            see_also: None,
        },
        Property {
            curie: ":hasOrderID",
            kind: PropertyKind::Datatype,
            domain: ":Order",
            range: "rdfs:Literal",
            comment: Some("Unique id of the order."),
            see_also: None,
        },
        Property {
            curie: ":hasOrderDate",
            kind: PropertyKind::Datatype,
            domain: ":Order",
            range: "xsd:dateTime",
            comment: Some("The date of the order."),
            see_also: None,
        },
        Property {
            curie: ":hasTotalPrice",
            kind: PropertyKind::Datatype,
            domain: ":Order",
            range: "xsd:double",
            comment: Some("The total price of the order."),
            see_also: None,
        },
        Property {
            curie: ":isFinalized",
            kind: PropertyKind::Datatype,
            domain: ":Order",
            range: "xsd:boolean",
            comment: Some("If an order is finalized or not"),
            see_also: None,
        },
        Property {
            curie: ":hasNormalUser",
            kind: PropertyKind::Object,
            domain: ":Order",
            range: ":NormalUser",
            comment: Some("Connects the order with the NormalUser that made it."),
            see_also: None,
        },
        Property {
            curie: ":hasOrderItem",
            kind: PropertyKind::Object,
            domain: ":Order",
            range: ":OrderItem",
            comment: Some("Connects the order with the items."),
            see_also: None,
        },
        Property {
            curie: ":hasProduct",
            kind: PropertyKind::Object,
            domain: ":OrderItem",
            range: PRODUCT_OR_SERVICE,
            comment: Some("Connects the OrderItem with the product it represents."),
            see_also: None,
        },
        Property {
            curie: ":hasOrderQuantity",
            kind: PropertyKind::Datatype,
            domain: ":OrderItem",
            range: "xsd:integer",
            comment: Some("The quantity of the product in the order."),
            see_also: None,
        },
        Property {
            curie: ":hasOrderPrice",
            kind: PropertyKind::Datatype,
            domain: ":OrderItem",
            range: "xsd:double",
            comment: Some("The price the product had at the time of the order."),
            see_also: None,
        },
        Property {
            curie: ":hasOrderItemID",
            kind: PropertyKind::Datatype,
            domain: ":OrderItem",
            range: "rdfs:Literal",
            comment: Some("Unique id of the orderItem."),
            see_also: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_inventory() {
        let all = properties();
        assert_eq!(all.len(), 23);
        let objects = all
            .iter()
            .filter(|p| p.kind == PropertyKind::Object)
            .count();
        assert_eq!(objects, 3);
    }

    #[test]
    fn instance_terms_are_declared_on_products() {
        let all = properties();
        for term in [
            terms::HAS_PRODUCT_ID,
            terms::IS_AVAILABLE,
            terms::HAS_STOCK,
            terms::HAS_BRAND,
            terms::HAS_PRICE,
            terms::HAS_DISCOUNT_PRICE,
            terms::HAS_QUANTITY,
            terms::NAME,
        ] {
            let prop = all.iter().find(|p| p.curie == term);
            assert_eq!(prop.map(|p| p.domain), Some(PRODUCT_OR_SERVICE), "{term}");
        }
    }
}
