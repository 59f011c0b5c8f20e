use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::iter::Sum;
use std::ops::{Add, Sub};
use std::path::Path;

use super::swatch::Gradient;
use crate::app::infrastructure::error::{KioskError, Result};

const DEFAULT_CATALOG: &str = include_str!("../../../assets/catalog.toml");

/// Largest unit price a catalog may declare: R$ 1.000.000,00.
pub const MAX_ITEM_CENTS: u64 = 100_000_000;

/// Non-negative amount in centavos. Sums saturate instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(u64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Price(cents)
    }

    pub fn cents(&self) -> u64 {
        self.0
    }
}

impl TryFrom<f64> for Price {
    type Error = KioskError;

    fn try_from(value: f64) -> Result<Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(KioskError::Catalog(format!("invalid price {}", value)));
        }
        let cents = (value * 100.0).round();
        if cents > MAX_ITEM_CENTS as f64 {
            return Err(KioskError::Catalog(format!("price {} is too large", value)));
        }
        Ok(Price(cents as u64))
    }
}

impl From<Price> for f64 {
    fn from(p: Price) -> Self {
        p.0 as f64 / 100.0
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl Sub for Price {
    type Output = Price;

    fn sub(self, rhs: Price) -> Price {
        Price(self.0.saturating_sub(rhs.0))
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Price {
        iter.copied().sum()
    }
}

/// Decimal comma, two places: `20,00`.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(pub String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        CategoryId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Opaque icon name; the front-end decides how to draw it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct IconRef(pub String);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub label: String,
    #[serde(default)]
    pub icon: IconRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "price")]
    pub unit_price: Price,
    pub category: CategoryId,
    #[serde(rename = "theme")]
    pub visual_theme: Gradient,
    #[serde(default)]
    pub icon: IconRef,
}

/// Static menu: categories in display order, then items in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    categories: Vec<Category>,
    #[serde(default)]
    items: Vec<MenuItem>,
}

impl Catalog {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let catalog: Catalog = toml::from_str(s)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The menu shipped with the kiosk.
    pub fn load_default() -> Result<Self> {
        Self::from_toml_str(DEFAULT_CATALOG)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(KioskError::Catalog("catalog declares no categories".to_string()));
        }

        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(&category.id) {
                return Err(KioskError::Catalog(format!("duplicate category '{}'", category.id)));
            }
        }

        let mut item_ids = HashSet::new();
        for item in &self.items {
            if !item_ids.insert(item.id.as_str()) {
                return Err(KioskError::Catalog(format!("duplicate item '{}'", item.id)));
            }
            if !category_ids.contains(&item.category) {
                return Err(KioskError::Catalog(format!(
                    "item '{}' references unknown category '{}'",
                    item.id, item.category
                )));
            }
        }

        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| &c.id == id)
    }

    /// First declared category; validation guarantees there is one.
    pub fn default_category(&self) -> &Category {
        &self.categories[0]
    }

    pub fn item(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn items_in<'a>(&'a self, category: &'a CategoryId) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.items.iter().filter(move |i| &i.category == category)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_loads() {
        let catalog = Catalog::load_default().unwrap();
        let ids: Vec<&str> = catalog.categories().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["hamburgers", "drinks", "sides"]);
        assert_eq!(catalog.default_category().label, "Hambúrgueres");
        assert_eq!(catalog.items().len(), 14);

        let water = catalog.item("water").unwrap();
        assert_eq!(water.display_name, "Água Mineral");
        assert_eq!(water.unit_price, Price::from_cents(500));
        assert_eq!(water.category, CategoryId::new("drinks"));
    }

    #[test]
    fn test_items_in_category_keep_order() {
        let catalog = Catalog::load_default().unwrap();
        let drinks = CategoryId::new("drinks");
        let names: Vec<&str> = catalog.items_in(&drinks).map(|i| i.id.as_str()).collect();
        assert_eq!(names, vec!["soda", "natural-juice", "water", "iced-tea"]);
    }

    #[test]
    fn test_rejects_unknown_category() {
        let toml = r#"
            [[categories]]
            id = "drinks"
            label = "Bebidas"

            [[items]]
            id = "soda"
            name = "Refrigerante"
            price = 8.0
            category = "desserts"
            theme = "from-yellow-500 to-orange-500"
        "#;
        let err = Catalog::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("unknown category 'desserts'"));
    }

    #[test]
    fn test_rejects_duplicate_item_and_empty_catalog() {
        let toml = r#"
            [[categories]]
            id = "drinks"
            label = "Bebidas"

            [[items]]
            id = "soda"
            name = "Refrigerante"
            price = 8.0
            category = "drinks"
            theme = "from-yellow-500 to-orange-500"

            [[items]]
            id = "soda"
            name = "Refrigerante Zero"
            price = 8.5
            category = "drinks"
            theme = "from-yellow-500 to-orange-500"
        "#;
        assert!(matches!(Catalog::from_toml_str(toml), Err(KioskError::Catalog(_))));
        assert!(Catalog::from_toml_str("categories = []").is_err());
    }

    #[test]
    fn test_rejects_negative_price() {
        assert!(Price::try_from(-1.0).is_err());
        assert!(Price::try_from(f64::NAN).is_err());
        assert_eq!(Price::try_from(4.999).unwrap(), Price::from_cents(500));
    }

    #[test]
    fn test_price_cap() {
        assert_eq!(Price::try_from(1_000_000.0).unwrap(), Price::from_cents(MAX_ITEM_CENTS));
        assert!(matches!(Price::try_from(30_000_000.0), Err(KioskError::Catalog(_))));
    }

    #[test]
    fn test_large_totals_do_not_overflow() {
        let top = Price::from_cents(MAX_ITEM_CENTS);
        let total: Price = [top, top, top].iter().sum();
        assert_eq!(total.cents(), 3 * MAX_ITEM_CENTS);
        assert_eq!(total.to_string(), "3000000,00");
        assert_eq!(Price::from_cents(u64::MAX) + top, Price::from_cents(u64::MAX));
    }

    #[test]
    fn test_price_display_and_sum() {
        assert_eq!(Price::from_cents(1200).to_string(), "12,00");
        assert_eq!(Price::from_cents(5).to_string(), "0,05");
        let total: Price = [Price::from_cents(500), Price::from_cents(700)].iter().sum();
        assert_eq!(total, Price::from_cents(1200));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menu.toml");
        fs::write(
            &path,
            "[[categories]]\nid = \"sides\"\nlabel = \"Acompanhamentos\"\n",
        )
        .unwrap();
        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.default_category().id, CategoryId::new("sides"));
        assert!(catalog.items().is_empty());
    }
}
