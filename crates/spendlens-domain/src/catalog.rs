//! Two-level category catalog with record-driven discovery.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::Record;

/// Label reported for second-level buckets whose records carry no
/// subcategory.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// The known category tree: top-level labels, each with its second-level
/// labels. Deserializable from caller-provided configuration; falls back to
/// a built-in default set.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct CategoryCatalog {
    categories: BTreeMap<String, Vec<String>>,
}

impl CategoryCatalog {
    pub fn new() -> Self {
        Self {
            categories: BTreeMap::new(),
        }
    }

    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        for (category, subcategories) in DEFAULT_CATEGORIES {
            catalog.categories.insert(
                (*category).to_string(),
                subcategories.iter().map(|s| (*s).to_string()).collect(),
            );
        }
        catalog
    }

    /// Registers a category, and optionally one of its subcategories,
    /// skipping labels already present.
    pub fn add(&mut self, category: &str, subcategory: Option<&str>) {
        let entry = self.categories.entry(category.to_string()).or_default();
        if let Some(sub) = subcategory.filter(|s| !s.is_empty()) {
            if !entry.iter().any(|existing| existing == sub) {
                entry.push(sub.to_string());
            }
        }
    }

    /// Folds category labels observed in `records` into the catalog, so
    /// data loaded from elsewhere never references unknown categories.
    pub fn merge_from_records(&mut self, records: &[Record]) {
        for record in records {
            if record.category.is_empty() {
                continue;
            }
            let subcategory = if record.subcategory.is_empty() {
                None
            } else {
                Some(record.subcategory.as_str())
            };
            self.add(&record.category, subcategory);
        }
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn top_level(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn second_level(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self::with_defaults()
    }
}

const DEFAULT_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Dining",
        &["Breakfast", "Lunch", "Dinner", "Snacks", "Takeout", "Drinks"],
    ),
    (
        "Transport",
        &["Bus", "Metro", "Taxi", "Fuel", "Parking", "Rail", "Flights"],
    ),
    (
        "Shopping",
        &["Essentials", "Clothing", "Electronics", "Appliances", "Beauty", "Home"],
    ),
    (
        "Entertainment",
        &["Movies", "Games", "Fitness", "Travel", "Parties", "Music"],
    ),
    ("Education", &["Training", "Books", "Courses", "Exams"]),
    ("Medical", &["Pharmacy", "Outpatient", "Checkups", "Dental"]),
    (
        "Housing",
        &["Rent", "Utilities", "Property management", "Repairs"],
    ),
    ("Communication", &["Mobile plan", "Broadband", "Landline"]),
    ("Investment", &["Stocks", "Funds", "Wealth products"]),
    ("Other", &[]),
];
