//! Named cost schedules
//!
//! Investment line items and annual operating costs are both flat lists of
//! named amounts, fixed at configuration time.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::ValidationError;

/// A single named cost line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub category: String,
    pub amount: f64,
}

/// An ordered collection of cost lines with unique category names
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSchedule {
    items: Vec<CostItem>,
}

impl CostSchedule {
    /// Build a validated schedule.
    ///
    /// Categories must be unique and non-blank; amounts non-negative and finite.
    pub fn new(items: Vec<CostItem>) -> Result<Self, ValidationError> {
        let mut seen: HashSet<&str> = HashSet::new();
        for item in &items {
            if item.category.trim().is_empty() {
                return Err(ValidationError::EmptyCategory);
            }
            if !item.amount.is_finite() || item.amount < 0.0 {
                return Err(ValidationError::InvalidAmount {
                    category: item.category.clone(),
                    amount: item.amount,
                });
            }
            if !seen.insert(item.category.as_str()) {
                return Err(ValidationError::DuplicateCategory(item.category.clone()));
            }
        }
        Ok(Self { items })
    }

    /// Convenience constructor from (category, amount) pairs
    pub fn from_pairs<S, I>(pairs: I) -> Result<Self, ValidationError>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, f64)>,
    {
        let items = pairs
            .into_iter()
            .map(|(category, amount)| CostItem {
                category: category.into(),
                amount,
            })
            .collect();
        Self::new(items)
    }

    /// Sum of all line amounts
    pub fn total(&self) -> f64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Amount for a category, if present
    pub fn get(&self, category: &str) -> Option<f64> {
        self.items
            .iter()
            .find(|item| item.category == category)
            .map(|item| item.amount)
    }

    /// Lines in declaration order
    pub fn items(&self) -> &[CostItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
