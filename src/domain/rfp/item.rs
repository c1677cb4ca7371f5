//! Line item within an RFP draft.

use crate::domain::foundation::ValidationError;
use serde::{Deserialize, Serialize};

/// One requested line item.
///
/// # Invariants
///
/// - `name` is non-empty
/// - `quantity` is at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfpItem {
    /// Free-text item name, capitalized as extracted.
    pub name: String,

    /// Requested quantity.
    pub quantity: u32,

    /// Optional specification text (e.g. "16GB RAM").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specifications: Option<String>,
}

impl RfpItem {
    /// Creates a new item with no specifications.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if name is empty or whitespace
    /// - `TooSmall` if quantity is zero
    pub fn new(name: impl Into<String>, quantity: u32) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::empty_field("name"));
        }
        if quantity < 1 {
            return Err(ValidationError::too_small("quantity", 1, quantity));
        }
        Ok(Self {
            name,
            quantity,
            specifications: None,
        })
    }

    /// Sets the specification text.
    pub fn with_specifications(mut self, specifications: impl Into<String>) -> Self {
        self.specifications = Some(specifications.into());
        self
    }

    /// The placeholder substituted when nothing could be extracted, so a
    /// draft's item list is never empty.
    pub fn placeholder() -> Self {
        Self {
            name: "Item".to_string(),
            quantity: 1,
            specifications: Some("As specified".to_string()),
        }
    }
}
