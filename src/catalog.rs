use crate::domain::constants::ALL_DISTRICTS;
use crate::domain::models::FilterCriteria;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Listing {
    pub id: String,
    pub district: String,
    pub headcount: u8,
    pub title: String,
    pub title2: String,
    pub image: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DistrictEntry {
    #[serde(rename = "eng_name")]
    pub code: String,
    #[serde(rename = "kor_name")]
    pub display_name: String,
}

#[derive(Debug, Deserialize, Serialize)]
struct ItemsFile {
    items: Vec<Listing>,
}

#[derive(Debug, Deserialize, Serialize)]
struct AddressFile {
    address: Vec<DistrictEntry>,
}

/// Immutable dataset, loaded once at startup and shared by reference.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub items: Vec<Listing>,
    pub districts: Vec<DistrictEntry>,
}

#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("listing not found: {0}")]
    ListingNotFound(String),
    #[error("duplicate listing id: {0}")]
    DuplicateListing(String),
    #[error("district code 'All' is reserved")]
    ReservedDistrict,
}

pub fn resolve_items_file(data_dir: &Path) -> PathBuf {
    data_dir.join("items.json")
}

pub fn resolve_address_file(data_dir: &Path) -> PathBuf {
    data_dir.join("address.json")
}

pub fn load_catalog(data_dir: &Path) -> anyhow::Result<Catalog> {
    let raw = std::fs::read_to_string(resolve_items_file(data_dir))?;
    let items: ItemsFile = serde_json::from_str(&raw)?;
    let raw = std::fs::read_to_string(resolve_address_file(data_dir))?;
    let address: AddressFile = serde_json::from_str(&raw)?;
    Ok(Catalog {
        items: items.items,
        districts: address.address,
    })
}

impl Catalog {
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.districts
            .iter()
            .find(|d| d.code == code)
            .map(|d| d.display_name.as_str())
    }

    pub fn find_listing(&self, id: &str) -> anyhow::Result<&Listing> {
        self.items
            .iter()
            .find(|l| l.id == id)
            .ok_or_else(|| CatalogError::ListingNotFound(id.to_string()).into())
    }
}

/// The pure filter evaluator. District `"All"` skips the district predicate;
/// the headcount predicate always applies. The criteria's date range is
/// carried for booking parameters only and never narrows the subset.
/// Original dataset order is preserved.
pub fn visible_subset<'a>(items: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    items
        .iter()
        .filter(|l| {
            (criteria.district == ALL_DISTRICTS || l.district == criteria.district)
                && l.headcount >= criteria.headcount
        })
        .collect()
}

/// Dataset integrity checks: unique listing ids, no real district using the
/// reserved `"All"` code. Listings whose district is missing from the address
/// table are reported separately (they never match a concrete district filter).
pub fn validate(catalog: &Catalog) -> anyhow::Result<Vec<String>> {
    let mut seen = HashSet::new();
    for l in &catalog.items {
        if !seen.insert(&l.id) {
            return Err(CatalogError::DuplicateListing(l.id.clone()).into());
        }
    }
    if catalog.districts.iter().any(|d| d.code == ALL_DISTRICTS) {
        return Err(CatalogError::ReservedDistrict.into());
    }
    let known: HashSet<&str> = catalog.districts.iter().map(|d| d.code.as_str()).collect();
    let mut orphaned = Vec::new();
    for l in &catalog.items {
        if !known.contains(l.district.as_str()) {
            orphaned.push(format!("{}: unknown district {}", l.id, l.district));
        }
    }
    Ok(orphaned)
}
