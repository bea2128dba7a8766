//! Turtle 1.1 serializer for the catalog ontology.
//!
//! Produces the ontology document in a fixed section order: prefixes and the
//! ontology header, the property schema, the fixed classes followed by the
//! taxonomy, one block per product instance, the user accounts, and the
//! product-type cross-references. Every declaration block is preceded by a
//! `###` comment naming its full IRI.

use std::fmt::Write as FmtWrite;

use crate::config::Prefixes;
use crate::model::prefixes::PTO;
use crate::model::{ClassNode, Identifier, Instance, SeeAlsoTarget};
use crate::sanitize::sanitize;
use crate::vocabulary::terms::{self, PRODUCT_OR_SERVICE};
use crate::vocabulary::{classes, properties, see_also, users};
use crate::Catalog;

const BANNER: &str = "#################################################################";

/// Serializes a catalog to a Turtle string.
#[must_use]
pub fn to_turtle(catalog: &Catalog, prefixes: &Prefixes) -> String {
    let mut out = String::with_capacity(16 * 1024 + catalog.instances.len() * 512);

    // Prefix declarations
    for (prefix, iri) in prefixes.entries() {
        let _ = writeln!(out, "@prefix {prefix}: <{iri}> .");
    }
    let _ = writeln!(out, "@base <{}> .", prefixes.base());
    out.push('\n');

    // Root ontology
    let _ = writeln!(out, "<{}> a owl:Ontology .", prefixes.ontology());
    out.push('\n');

    // Property schema
    banner(&mut out, "Data properties");
    for prop in properties::properties() {
        let mut statements = vec![
            ("a", prop.kind.as_curie().to_owned()),
            ("rdfs:domain", prop.domain.to_owned()),
            ("rdfs:range", prop.range.to_owned()),
        ];
        if let Some(comment) = prop.comment {
            statements.push(("rdfs:comment", turtle_string(comment)));
        }
        if let Some(related) = prop.see_also {
            statements.push(("rdfs:seeAlso", turtle_string(related)));
        }
        block(&mut out, prefixes, prop.curie, &statements);
    }

    // Fixed classes, then the taxonomy
    banner(&mut out, "Classes");
    for class in classes::classes() {
        let mut statements = vec![("a", "owl:Class".to_owned())];
        if let Some(parent) = class.subclass_of {
            statements.push(("rdfs:subClassOf", parent.to_owned()));
        }
        if let Some(comment) = class.comment {
            statements.push(("rdfs:comment", turtle_string(comment)));
        }
        block(&mut out, prefixes, class.curie, &statements);
    }
    for node in catalog.taxonomy.nodes() {
        class_node(&mut out, prefixes, node);
    }

    // Product instances
    banner(&mut out, "Instances");
    for instance in &catalog.instances {
        product(&mut out, prefixes, instance);
    }

    // User accounts
    banner(&mut out, "User Instances");
    for user in users::users() {
        let mut statements = vec![("a", user.class.to_owned())];
        for &(property, value) in user.fields {
            statements.push((property, string_literal(value)));
        }
        block(&mut out, prefixes, user.curie, &statements);
    }

    // Cross-references
    banner(&mut out, "See Also References for Classes");
    for reference in see_also::see_also() {
        let subject = Identifier::new(PTO, sanitize(reference.class_label));
        let object = match reference.target {
            SeeAlsoTarget::Iri(iri) => format!("<{iri}>"),
            SeeAlsoTarget::Literal(text) => string_literal(text),
        };
        let _ = writeln!(out, "{subject} rdfs:seeAlso {object} .");
        out.push('\n');
    }

    out
}

fn class_node(out: &mut String, prefixes: &Prefixes, node: &ClassNode) {
    let parent = node
        .parent
        .as_ref()
        .map_or_else(|| PRODUCT_OR_SERVICE.to_owned(), ToString::to_string);
    let statements = [
        ("a", "owl:Class".to_owned()),
        ("rdfs:subClassOf", parent),
    ];
    block(out, prefixes, &node.id.to_string(), &statements);
}

fn product(out: &mut String, prefixes: &Prefixes, instance: &Instance) {
    let statements = [
        ("a", instance.type_id.to_string()),
        ("a", "owl:NamedIndividual".to_owned()),
        (terms::HAS_PRODUCT_ID, string_literal(&instance.product_id)),
        (
            terms::IS_AVAILABLE,
            format!("\"{}\"^^xsd:boolean", instance.available),
        ),
        (terms::HAS_STOCK, format!("\"{}\"^^xsd:integer", instance.stock)),
        (terms::HAS_BRAND, string_literal(&instance.brand)),
        (
            terms::HAS_PRICE,
            format!("\"{}\"^^xsd:double", format_double(instance.price)),
        ),
        (
            terms::HAS_DISCOUNT_PRICE,
            format!("\"{}\"^^xsd:double", instance.discount),
        ),
        (terms::HAS_QUANTITY, string_literal(&instance.quantity)),
        (terms::NAME, string_literal(&instance.name)),
    ];
    block(out, prefixes, &instance.id.to_string(), &statements);
}

fn banner(out: &mut String, title: &str) {
    let _ = writeln!(out, "{BANNER}\n#    {title}\n{BANNER}\n");
}

/// Writes one subject with its predicate-object list, continuation lines
/// aligned under the first predicate.
fn block(out: &mut String, prefixes: &Prefixes, subject: &str, statements: &[(&str, String)]) {
    let Some((last, leading)) = statements.split_last() else {
        return;
    };
    let iri = prefixes
        .expand(subject)
        .unwrap_or_else(|| subject.to_owned());
    let _ = writeln!(out, "###  {iri}");

    let indent = " ".repeat(subject.chars().count() + 1);
    let mut lead = format!("{subject} ");
    for (predicate, object) in leading {
        let _ = writeln!(out, "{lead}{predicate} {object} ;");
        lead.clone_from(&indent);
    }
    let _ = writeln!(out, "{lead}{} {} .", last.0, last.1);
    out.push('\n');
}

fn string_literal(value: &str) -> String {
    format!("{}^^xsd:string", turtle_string(value))
}

fn turtle_string(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len() + 2);
    escaped.push('"');
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(c),
        }
    }
    escaped.push('"');
    escaped
}

/// Shortest round-trip decimal with at least one fractional digit.
fn format_double(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::testing::row;
    use crate::{CatalogConfig, Row};

    fn render(rows: &[Row]) -> String {
        let catalog =
            Catalog::build(rows, &CatalogConfig::default(), &mut StdRng::seed_from_u64(9))
                .unwrap();
        to_turtle(&catalog, &Prefixes::standard())
    }

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?}"))
    }

    #[test]
    fn starts_with_prefixes_and_ontology() {
        let turtle = render(&[]);
        assert!(turtle.starts_with("@prefix : <http://www.semanticweb.org/My_Super/> .\n"));
        assert!(turtle.contains("@prefix pto: <http://www.productontology.org/id/> .\n"));
        assert!(turtle.contains("@base <http://www.semanticweb.org/My_Super/> .\n"));
        assert!(turtle.contains("<http://www.semanticweb.org/My_Super> a owl:Ontology .\n"));
    }

    #[test]
    fn sections_are_ordered() {
        let turtle = render(&[row("P1", "Fuji Apple", "Fruit", "Apple", "Apple")]);
        let order = [
            "#    Data properties",
            ":hasBrand a owl:DatatypeProperty",
            "#    Classes",
            "gr:ProductOrService a owl:Class .",
            ":AdminUser a owl:Class",
            ":Fruit a owl:Class",
            "#    Instances",
            ":Fuji_Apple a pto:Apple ;",
            "#    User Instances",
            ":Admin1 a :AdminUser ;",
            ":User1 a :NormalUser ;",
            "#    See Also References for Classes",
            "pto:Orange rdfs:seeAlso <http://www.productontology.org/id/Orange_(fruit)> .",
        ];
        let positions: Vec<usize> = order.iter().map(|n| position(&turtle, n)).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn renders_the_taxonomy_blocks() {
        let turtle = render(&[row("P1", "Fuji Apple", "Fruit", "Apple", "Apple")]);
        assert!(turtle.contains(
            "###  http://www.semanticweb.org/My_Super/Fruit\n\
             :Fruit a owl:Class ;\n       rdfs:subClassOf gr:ProductOrService .\n"
        ));
        assert!(turtle.contains(
            "###  http://www.semanticweb.org/My_Super/Apple\n\
             :Apple a owl:Class ;\n       rdfs:subClassOf :Fruit .\n"
        ));
        assert!(turtle.contains(
            "###  http://www.productontology.org/id/Apple\n\
             pto:Apple a owl:Class ;\n          rdfs:subClassOf :Apple .\n"
        ));
    }

    #[test]
    fn taxonomy_follows_first_seen_order() {
        let turtle = render(&[
            row("P1", "a", "Household", "Cleaning", "Sponge"),
            row("P2", "b", "Fruit", "Citrus", "Orange"),
            row("P3", "c", "Household", "Cleaning", "Duster"),
        ]);
        let household = position(&turtle, ":Household a owl:Class");
        let fruit = position(&turtle, ":Fruit a owl:Class");
        let cleaning = position(&turtle, ":Cleaning a owl:Class");
        let sponge = position(&turtle, "pto:Sponge a owl:Class");
        let duster = position(&turtle, "pto:Duster a owl:Class");
        assert!(household < fruit && fruit < cleaning && cleaning < sponge && sponge < duster);
    }

    #[test]
    fn renders_an_instance_block() {
        let turtle = render(&[row("P1", "Fuji Apple", "Fruit", "Apple", "Apple")]);
        let start = position(&turtle, "###  http://www.semanticweb.org/My_Super/Fuji_Apple");
        let block: Vec<&str> = turtle[start..].lines().take(12).collect();
        let indent = " ".repeat(":Fuji_Apple ".len());
        assert_eq!(block[1], ":Fuji_Apple a pto:Apple ;");
        assert_eq!(block[2], format!("{indent}a owl:NamedIndividual ;"));
        assert_eq!(block[3], format!("{indent}:hasProductID \"P1\"^^xsd:string ;"));
        assert_eq!(block[4], format!("{indent}:isAvailable \"true\"^^xsd:boolean ;"));
        assert_eq!(block[5], format!("{indent}:hasStock \"10\"^^xsd:integer ;"));
        assert_eq!(block[6], format!("{indent}:hasBrand \"FarmCo\"^^xsd:string ;"));
        assert_eq!(block[7], format!("{indent}:hasPrice \"1.5\"^^xsd:double ;"));
        assert!(block[8].starts_with(&format!("{indent}:hasDiscountPrice \"")));
        assert_eq!(block[9], format!("{indent}:hasQuantity \"1kg\"^^xsd:string ;"));
        assert_eq!(block[10], format!("{indent}gr:name \"Fuji Apple\"^^xsd:string ."));
        assert_eq!(block[11], "");
    }

    #[test]
    fn one_instance_block_per_row() {
        let rows = vec![
            row("P1", "Fuji Apple", "Fruit", "Apple", "Apple"),
            row("P2", "Fuji Apple", "Fruit", "Apple", "Apple"),
        ];
        let turtle = render(&rows);
        assert_eq!(turtle.matches(":Fuji_Apple a pto:Apple ;").count(), 2);
        let p1 = position(&turtle, ":hasProductID \"P1\"");
        let p2 = position(&turtle, ":hasProductID \"P2\"");
        assert!(p1 < p2);
        assert_eq!(turtle.matches(":Fruit a owl:Class").count(), 1);
        assert_eq!(turtle.matches("pto:Apple a owl:Class").count(), 1);
    }

    #[test]
    fn literals_are_escaped() {
        let mut quoted = row("P1", "12\" Pizza", "Frozen", "Pizza", "Pizza");
        quoted.brand = "Back\\slash".to_owned();
        let turtle = render(&[quoted]);
        assert!(turtle.contains("gr:name \"12\\\" Pizza\"^^xsd:string ."));
        assert!(turtle.contains(":hasBrand \"Back\\\\slash\"^^xsd:string ;"));
    }

    #[test]
    fn users_are_reproduced() {
        let turtle = render(&[]);
        assert!(turtle.contains(":hasUsername \"admin\"^^xsd:string ;"));
        assert!(turtle.contains(":hasAddress \"123 Main Street, Cityville\"^^xsd:string .\n"));
    }

    #[test]
    fn doubles_keep_a_fractional_digit() {
        assert_eq!(format_double(2.0), "2.0");
        assert_eq!(format_double(1.5), "1.5");
        assert_eq!(format_double(0.1), "0.1");
        assert_eq!(format_double(1234.56), "1234.56");
        assert_eq!(format_double(1e16), "10000000000000000.0");
        assert_eq!(format_double(1e17), "100000000000000000.0");
    }
}
