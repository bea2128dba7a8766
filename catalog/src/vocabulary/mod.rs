//! Fixed vocabulary shared by every generated ontology.
//!
//! Each sub-module encodes one block of the document as static Rust data:
//! the property schema, the top-level classes, the user accounts, and the
//! cross-references for product types whose product-type IRIs moved.

pub mod classes;
pub mod properties;
pub mod see_also;
pub mod users;

/// CURIEs of the properties asserted on every product instance.
pub mod terms {
    /// Product id.
    pub const HAS_PRODUCT_ID: &str = ":hasProductID";
    /// Availability flag.
    pub const IS_AVAILABLE: &str = ":isAvailable";
    /// Stock count.
    pub const HAS_STOCK: &str = ":hasStock";
    /// Brand.
    pub const HAS_BRAND: &str = ":hasBrand";
    /// Price.
    pub const HAS_PRICE: &str = ":hasPrice";
    /// Discount.
    pub const HAS_DISCOUNT_PRICE: &str = ":hasDiscountPrice";
    /// Quantity.
    pub const HAS_QUANTITY: &str = ":hasQuantity";
    /// Display name.
    pub const NAME: &str = "gr:name";
    /// Root class of every category.
    pub const PRODUCT_OR_SERVICE: &str = "gr:ProductOrService";
}
