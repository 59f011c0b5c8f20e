use rand::Rng;
use std::fmt;

use super::catalog::{MenuItem, Price};
use crate::app::infrastructure::error::{KioskError, Result};

pub const ORDER_PREFIX: &str = "PED";
pub const ORDER_NUMBER_MIN: u32 = 10_000;
pub const ORDER_NUMBER_MAX: u32 = 99_999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
    Start,
    Browsing,
    Payment,
    Confirmation,
}

impl fmt::Display for ScreenPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenPhase::Start => "start",
            ScreenPhase::Browsing => "menu",
            ScreenPhase::Payment => "payment",
            ScreenPhase::Confirmation => "confirmation",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Cash,
    Card,
}

/// Snapshot of a menu item taken when it was added. Later catalog changes
/// never reach it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    name: String,
    unit_price: Price,
}

impl CartLine {
    pub fn new(name: impl Into<String>, unit_price: Price) -> Self {
        Self {
            name: name.into(),
            unit_price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit_price(&self) -> Price {
        self.unit_price
    }
}

impl From<&MenuItem> for CartLine {
    fn from(item: &MenuItem) -> Self {
        CartLine::new(item.display_name.clone(), item.unit_price)
    }
}

/// Ordered cart. Lines are addressed by position; duplicates are distinct lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: CartLine) {
        self.lines.push(line);
    }

    pub fn remove(&mut self, index: usize) -> Result<CartLine> {
        if index >= self.lines.len() {
            return Err(KioskError::OutOfRange {
                index,
                len: self.lines.len(),
            });
        }
        Ok(self.lines.remove(index))
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Recomputed from the lines on every call.
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLine::unit_price).sum()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderNumber(u32);

impl OrderNumber {
    pub fn generate(rng: &mut impl Rng) -> Self {
        OrderNumber(rng.gen_range(ORDER_NUMBER_MIN..=ORDER_NUMBER_MAX))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Separator replaced by a pause so the synthesizer reads the digits.
    pub fn spoken(&self) -> String {
        format!("{} {}", ORDER_PREFIX, self.0)
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", ORDER_PREFIX, self.0)
    }
}
