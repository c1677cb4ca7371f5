//! Request compiler - assembles a complete draft from raw text.

use crate::domain::foundation::Timestamp;
use crate::domain::rfp::extract;
use crate::domain::rfp::RfpDraft;

/// Compiles raw request text into a fully-populated [`RfpDraft`].
///
/// Every extractor runs against the same raw text, never a sequentially
/// transformed one. Compilation is total: there is no failure mode, every
/// field either extracts or takes its documented default. For a fixed
/// `(text, now)` pair the output is deterministic.
#[derive(Debug, Clone, Default)]
pub struct RequestCompiler;

impl RequestCompiler {
    /// Creates a new compiler.
    pub fn new() -> Self {
        Self
    }

    /// Compiles using the current time as the extraction time.
    pub fn compile(&self, text: &str) -> RfpDraft {
        self.compile_at(text, Timestamp::now())
    }

    /// Compiles with an explicit extraction time, for callers that need a
    /// controlled clock.
    pub fn compile_at(&self, text: &str, now: Timestamp) -> RfpDraft {
        let mut items = extract::items(text);
        extract::attach_specifications(&mut items, text);

        let days = extract::delivery_days(text);
        let delivery_deadline = now
            .checked_add_days(days)
            .unwrap_or_else(|| now.add_days(extract::DEFAULT_DELIVERY_DAYS));

        RfpDraft {
            title: extract::title(&items),
            description: text.to_string(),
            items,
            budget: extract::budget(text),
            delivery_deadline,
            payment_terms: extract::payment_terms(text),
            warranty_requirement: extract::warranty(text),
        }
    }
}
