use clap::ValueEnum;
use colored::Colorize;
use wemx_service_contabo::CatalogEntry;
use wemx_service_contabo::catalog::{DEFAULT_PRODUCT, DEFAULT_REGION, PRODUCTS, REGIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CatalogKind {
    Products,
    Regions,
}

/// Print one or both catalogs
pub fn handle(kind: Option<CatalogKind>) {
    match kind {
        Some(CatalogKind::Products) => print_table("Products", PRODUCTS, DEFAULT_PRODUCT),
        Some(CatalogKind::Regions) => print_table("Regions", REGIONS, DEFAULT_REGION),
        None => {
            print_table("Products", PRODUCTS, DEFAULT_PRODUCT);
            println!();
            print_table("Regions", REGIONS, DEFAULT_REGION);
        }
    }
}

fn print_table(title: &str, entries: &[CatalogEntry], default_id: &str) {
    println!("{}", title.bold());
    let width = entries.iter().map(|e| e.id.len()).max().unwrap_or(0);
    for entry in entries {
        let marker = if entry.id == default_id {
            " (default)".dimmed().to_string()
        } else {
            String::new()
        };
        let id = format!("{:<width$}", entry.id);
        println!("  {}  {}{}", id.cyan(), entry.description, marker);
    }
}
