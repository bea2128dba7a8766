//! Demonstrates building a small catalog and serializing it.
//!
//! Run with: `cargo run --example dump_catalog -p catalog-ontology`

use catalog_ontology::serializer::{shacl, turtle};
use catalog_ontology::{input, Catalog, CatalogConfig, CatalogError, Prefixes};

const PRODUCTS: &str = "\
id,name,category,subcategory,type,brand,price,quantity
P1,Fuji Apple,Fruit,Apple,Apple,FarmCo,1.50,1kg
P2,Blood Orange,Fruit,Citrus,Orange,SunGrove,2.10,1kg
P3,Key Lime,Fruit,Citrus,Lime,SunGrove,0.45,1 pc
P4,Kitchen Sponge 3pcs.,Household,Cleaning,Sponge,Scrubbo,1.99,3 pcs
";

fn main() -> Result<(), CatalogError> {
    let rows = input::parse_rows(PRODUCTS.as_bytes())?;
    let config = CatalogConfig {
        seed: Some(2024),
        ..CatalogConfig::default()
    };
    let catalog = Catalog::build_default(&rows, &config)?;

    println!("Product catalog");
    println!("  Categories:     {}", catalog.category_count());
    println!("  Subcategories:  {}", catalog.subcategory_count());
    println!("  Types:          {}", catalog.type_count());
    println!("  Instances:      {}", catalog.instance_count());
    println!();

    for node in catalog.taxonomy.nodes() {
        let parent = node
            .parent
            .as_ref()
            .map_or_else(|| "gr:ProductOrService".to_owned(), ToString::to_string);
        println!("  {:12} {:24} <- {}", node.tier.as_str(), node.id.to_string(), parent);
    }
    println!();

    let ontology = turtle::to_turtle(&catalog, &Prefixes::standard());
    println!("Ontology: {} bytes", ontology.len());
    println!("Shapes:   {} bytes", shacl::to_shacl().len());
    Ok(())
}
