//! The structured RFP draft produced by one extraction pass.

use crate::domain::foundation::Timestamp;
use crate::domain::rfp::RfpItem;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Payment terms recognized in request text.
///
/// A closed set; anything else falls back to [`PaymentTerms::Net30`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PaymentTerms {
    #[default]
    #[serde(rename = "Net 30")]
    Net30,

    #[serde(rename = "Net 45")]
    Net45,
}

impl fmt::Display for PaymentTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentTerms::Net30 => write!(f, "Net 30"),
            PaymentTerms::Net45 => write!(f, "Net 45"),
        }
    }
}

/// A fully-populated RFP draft.
///
/// # Invariants
///
/// - every field is populated: extraction either finds a value or applies
///   its documented default, never leaves a field absent
/// - `items` is non-empty
/// - `budget` is positive
/// - `delivery_deadline` is after the extraction time
///
/// Serializes to the wire schema handed to the persistence service
/// (camelCase keys, ISO-8601 deadline).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RfpDraft {
    /// Derived from the extracted item names.
    pub title: String,

    /// Verbatim copy of the raw request text.
    pub description: String,

    /// Extracted line items, placeholder fallback if none were found.
    pub items: Vec<RfpItem>,

    /// Total budget as a plain amount.
    pub budget: u64,

    /// Requested delivery date.
    pub delivery_deadline: Timestamp,

    /// Recognized or defaulted payment terms.
    pub payment_terms: PaymentTerms,

    /// Warranty requirement text.
    pub warranty_requirement: String,
}

impl RfpDraft {
    /// Renders the deterministic confirmation summary shown as the
    /// assistant's reply after extraction.
    pub fn confirmation_summary(&self) -> String {
        let items = self
            .items
            .iter()
            .map(|item| format!("{}x {}", item.quantity, item.name))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "I've analyzed your requirements and created a structured RFP. \
             Here's what I understood:\n\n\
             **{}**\n\n\
             \u{2022} **Items:** {}\n\
             \u{2022} **Budget:** ${}\n\
             \u{2022} **Delivery:** {}\n\
             \u{2022} **Payment Terms:** {}\n\
             \u{2022} **Warranty:** {}\n\n\
             Would you like to proceed with this RFP, or would you like to \
             modify any details?",
            self.title,
            items,
            format_thousands(self.budget),
            self.delivery_deadline.as_datetime().format("%B %d, %Y"),
            self.payment_terms,
            self.warranty_requirement,
        )
    }
}

/// Formats an amount with comma group separators ("15000" -> "15,000").
fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
