//! Static product, region, and image catalogs
//!
//! Not validated against the live API.

use wemx_service::SelectOption;

/// One catalog option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub id: &'static str,
    pub description: &'static str,
}

const fn entry(id: &'static str, description: &'static str) -> CatalogEntry {
    CatalogEntry { id, description }
}

pub const DEFAULT_PRODUCT: &str = "V1";
pub const DEFAULT_REGION: &str = "EU";
pub const DEFAULT_IMAGE: &str = "04e0f898-37b4-48bc-a794-1a57abe6aa31";

/// Purchasable products, in display order
pub static PRODUCTS: &[CatalogEntry] = &[
    entry("V1", "VPS S SSD (200 GB SSD)"),
    entry("V35", "VPS S Storage (400 GB SSD)"),
    entry("V12", "VPS S NVMe (50 GB NVMe)"),
    entry("V2", "VPS M SSD (400 GB SSD)"),
    entry("V36", "VPS M Storage (800 GB SSD)"),
    entry("V13", "VPS M NVMe (100 GB NVMe)"),
    entry("V3", "VPS L SSD (800 GB SSD)"),
    entry("V37", "VPS L Storage (1600 GB SSD)"),
    entry("V14", "VPS L NVMe (200 GB NVMe)"),
    entry("V4", "VPS XL SSD (1600 GB SSD)"),
    entry("V38", "VPS XL Storage (3200 GB SSD)"),
    entry("V15", "VPS XL NVMe (400 GB NVMe)"),
    entry("V42", "VPS XXXL SSD (2400 GB SSD)"),
    entry("V44", "VPS XXXL Storage (4800 GB SSD)"),
    entry("V43", "VPS XXXL NVMe (600 GB NVMe)"),
    entry("V45", "VPS 1 SSD (400 GB SSD)"),
    entry("V46", "VPS 1 NVMe (100 GB NVMe)"),
    entry("V48", "VPS 2 SSD (400 GB SSD)"),
    entry("V49", "VPS 2 NVMe (200 GB NVMe)"),
    entry("V51", "VPS 3 SSD (1200 GB SSD)"),
    entry("V52", "VPS 3 NVMe (300 GB NVMe)"),
    entry("V54", "VPS 4 SSD (1600 GB SSD)"),
    entry("V55", "VPS 4 NVMe (400 GB NVMe)"),
    entry("V57", "VPS 5 SSD (2000 GB SSD)"),
    entry("V58", "VPS 5 NVMe (500 GB NVMe)"),
    entry("V60", "VPS 6 SSD (2400 GB SSD)"),
    entry("V61", "VPS 6 NVMe (600 GB NVMe)"),
    entry("V8", "VDS S (180 GB NVMe)"),
    entry("V9", "VDS M (240 GB NVMe)"),
    entry("V10", "VDS L (360 GB NVMe)"),
    entry("V11", "VDS XL (480 GB NVMe)"),
    entry("V16", "VDS XXL (720 GB NVMe)"),
];

/// Data center regions, in display order
pub static REGIONS: &[CatalogEntry] = &[
    entry("EU", "Germany (Europe)"),
    entry("UK", "United Kingdom (Europe)"),
    entry("US-central", "United States (Central)"),
    entry("US-east", "United States (East)"),
    entry("US-west", "United States (West)"),
    entry("SIN", "Singapore (Asia)"),
    entry("AUS", "Australia (Oceania)"),
    entry("JPN", "Japan (Asia)"),
];

/// Images offered at checkout
// TODO: load the image list from `get_images` once checkout fields can be async
pub static IMAGES: &[CatalogEntry] = &[entry(DEFAULT_IMAGE, "Ubuntu 20.04")];

fn find(entries: &'static [CatalogEntry], id: &str) -> Option<&'static CatalogEntry> {
    entries.iter().find(|e| e.id == id)
}

pub fn product(id: &str) -> Option<&'static CatalogEntry> {
    find(PRODUCTS, id)
}

pub fn region(code: &str) -> Option<&'static CatalogEntry> {
    find(REGIONS, code)
}

/// Select options for a catalog, preserving order
pub fn select_options(entries: &[CatalogEntry]) -> Vec<SelectOption> {
    entries
        .iter()
        .map(|e| SelectOption::new(e.id, e.description))
        .collect()
}
