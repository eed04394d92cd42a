//! Intervention catalog.

use crate::error::{Result, WellnessError};

/// A wellness intervention that can be recommended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterventionItem {
    /// Human-readable name.
    pub name: String,
    /// Duration in minutes.
    pub time_cost: u32,
    /// Utility in arbitrary units.
    pub benefit: u32,
}

impl InterventionItem {
    /// Creates an item. Validation happens when the item enters a [`Catalog`].
    pub fn new(name: impl Into<String>, time_cost: u32, benefit: u32) -> Self {
        Self {
            name: name.into(),
            time_cost,
            benefit,
        }
    }
}

/// An ordered, validated, read-only list of interventions.
///
/// Every entry has a positive cost and a positive benefit, so the selector
/// never has to check them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Catalog {
    items: Vec<InterventionItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting non-positive costs and benefits.
    ///
    /// # Errors
    ///
    /// Returns [`WellnessError::InvalidCatalogEntry`] for the first bad entry.
    pub fn new(items: Vec<InterventionItem>) -> Result<Self> {
        for (index, item) in items.iter().enumerate() {
            let reason = if item.time_cost == 0 {
                "time_cost must be positive"
            } else if item.benefit == 0 {
                "benefit must be positive"
            } else {
                continue;
            };
            return Err(WellnessError::InvalidCatalogEntry {
                index,
                name: item.name.clone(),
                reason: reason.to_string(),
            });
        }
        Ok(Self { items })
    }

    /// The nine built-in interventions.
    pub fn default_interventions() -> Self {
        Self {
            items: vec![
                InterventionItem::new("Break 5 min + breathing", 5, 4),
                InterventionItem::new("Quick stretch 5 min", 5, 3),
                InterventionItem::new("Mindfulness exercise 10 min", 10, 6),
                InterventionItem::new("Micro-learning video 15 min", 15, 7),
                InterventionItem::new("Guided emotional check-in 10 min", 10, 5),
                InterventionItem::new("Sensory break 7 min", 7, 4),
                InterventionItem::new("Breathing exercise 3 min", 3, 2),
                InterventionItem::new("Short digital disconnect 20 min", 20, 9),
                InterventionItem::new("Talk to HR/psychologist (first triage) 5 min", 5, 3),
            ],
        }
    }

    /// Entries in catalog order.
    pub fn items(&self) -> &[InterventionItem] {
        &self.items
    }

    /// Entry at `index`.
    pub fn get(&self, index: usize) -> Option<&InterventionItem> {
        self.items.get(index)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Catalog {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> std::result::Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        struct Raw {
            items: Vec<InterventionItem>,
        }
        let raw = Raw::deserialize(d)?;
        Catalog::new(raw.items).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_is_valid() {
        let catalog = Catalog::default_interventions();
        assert_eq!(catalog.len(), 9);
        assert_eq!(Catalog::new(catalog.items().to_vec()).unwrap(), catalog);
    }

    #[test]
    fn test_rejects_zero_cost() {
        let items = vec![
            InterventionItem::new("ok", 5, 4),
            InterventionItem::new("free", 0, 4),
        ];
        match Catalog::new(items) {
            Err(WellnessError::InvalidCatalogEntry { index, name, .. }) => {
                assert_eq!(index, 1);
                assert_eq!(name, "free");
            }
            other => panic!("expected InvalidCatalogEntry, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_zero_benefit() {
        let items = vec![InterventionItem::new("useless", 5, 0)];
        assert!(matches!(
            Catalog::new(items),
            Err(WellnessError::InvalidCatalogEntry { index: 0, .. })
        ));
    }

    #[test]
    fn test_empty_catalog_is_allowed() {
        let catalog = Catalog::new(Vec::new()).unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.get(0).is_none());
    }
}
