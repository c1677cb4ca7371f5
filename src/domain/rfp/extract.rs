//! Pattern-based field extractors.
//!
//! Each extractor is a pure function from raw request text to one field of
//! the draft, with no shared state, so they are independently testable and
//! order-independent relative to each other. Extractors never fail: a
//! missed pattern falls back to a documented default.

use once_cell::sync::Lazy;
use regex::Regex;

use super::draft::PaymentTerms;
use super::item::RfpItem;

/// Budget assumed when no amount is found in the text.
pub const DEFAULT_BUDGET: u64 = 10_000;

/// Delivery window assumed when no timeline is found, in days.
pub const DEFAULT_DELIVERY_DAYS: i64 = 30;

/// Warranty requirement assumed when the text never mentions one.
pub const DEFAULT_WARRANTY: &str = "1 year minimum";

/// Quantity words that are units or time spans, not item names.
const ITEM_STOPLIST: [&str; 7] = ["days", "weeks", "months", "years", "year", "gb", "inch"];

static BUDGET: Lazy<Regex> = Lazy::new(|| Regex::new(r"\$?(\d[\d,]*)").unwrap());
static DAYS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*days?").unwrap());
static WEEKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*weeks?").unwrap());
static QUANTITY_PHRASE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\s+([A-Za-z]+(?:\s+[A-Za-z]+)?)").unwrap());
static RAM_SPEC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)\s*GB\s*RAM").unwrap());
static INCH_SPEC: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+)[- ]?inch").unwrap());

/// Returns the first amount mentioned in the text, or the default.
///
/// The scan takes the first digit run anywhere in the text, with or
/// without a currency marker, so a quantity mentioned before the actual
/// budget wins over it ("20 chairs ... budget $15,000" yields 20). Group
/// separators are stripped before parsing; a zero or unparseable amount
/// falls back to the default so the budget stays positive.
pub fn budget(text: &str) -> u64 {
    BUDGET
        .captures(text)
        .and_then(|caps| caps[1].replace(',', "").parse::<u64>().ok())
        .filter(|amount| *amount > 0)
        .unwrap_or(DEFAULT_BUDGET)
}

/// Returns the requested delivery window in days.
///
/// A day count wins over a week count; weeks convert at 7 days each.
/// Missing, zero, or unparseable counts fall back to the default so the
/// resulting deadline is always in the future.
pub fn delivery_days(text: &str) -> i64 {
    let days = DAYS
        .captures(text)
        .and_then(|caps| caps[1].parse::<i64>().ok())
        .or_else(|| {
            WEEKS
                .captures(text)
                .and_then(|caps| caps[1].parse::<i64>().ok())
                .map(|weeks| weeks.saturating_mul(7))
        })
        .unwrap_or(DEFAULT_DELIVERY_DAYS);

    if days < 1 {
        DEFAULT_DELIVERY_DAYS
    } else {
        days
    }
}

/// Extracts line items from every `<integer> <one-or-two-word token>`
/// phrase in the text.
///
/// Tokens on the stoplist (unit words, time spans) are skipped, as are
/// zero quantities. Repeated mentions of the same name create duplicate
/// entries; extraction stays stateless and never merges. When nothing
/// survives filtering, the placeholder item is substituted so the result
/// is never empty.
pub fn items(text: &str) -> Vec<RfpItem> {
    let mut items = Vec::new();

    for caps in QUANTITY_PHRASE.captures_iter(text) {
        let Ok(quantity) = caps[1].parse::<u32>() else {
            continue;
        };
        let token = &caps[2];
        if ITEM_STOPLIST.contains(&token.to_lowercase().as_str()) {
            continue;
        }
        if let Ok(item) = RfpItem::new(capitalize(token), quantity) {
            items.push(item);
        }
    }

    if items.is_empty() {
        items.push(RfpItem::placeholder());
    }
    items
}

/// Attaches RAM and screen-size specifications to already-extracted items.
///
/// Attachment is positional, not name-matched: a RAM pattern lands on the
/// first item, an inch pattern on the second (when one exists). The items
/// must come from the same text for the positions to line up.
pub fn attach_specifications(items: &mut [RfpItem], text: &str) {
    if let Some(caps) = RAM_SPEC.captures(text) {
        if let Some(first) = items.first_mut() {
            first.specifications = Some(format!("{}GB RAM", &caps[1]));
        }
    }
    if let Some(caps) = INCH_SPEC.captures(text) {
        if let Some(second) = items.get_mut(1) {
            second.specifications = Some(format!("{}-inch", &caps[1]));
        }
    }
}

/// Recognizes payment terms by case-insensitive substring match.
pub fn payment_terms(text: &str) -> PaymentTerms {
    let lower = text.to_lowercase();
    if lower.contains("net 30") {
        PaymentTerms::Net30
    } else if lower.contains("net 45") {
        PaymentTerms::Net45
    } else {
        PaymentTerms::Net30
    }
}

/// Detects whether the text mentions a warranty at all.
///
/// Presence-only: any mention yields "As specified"; no numeric term is
/// parsed out of it.
pub fn warranty(text: &str) -> String {
    if text.to_lowercase().contains("warranty") {
        "As specified".to_string()
    } else {
        DEFAULT_WARRANTY.to_string()
    }
}

/// Derives the draft title from the extracted item names.
pub fn title(items: &[RfpItem]) -> String {
    let names = items
        .iter()
        .map(|item| item.name.as_str())
        .collect::<Vec<_>>()
        .join(" & ");
    format!("{} Procurement", names)
}

/// Uppercases the first character of a token, leaving the rest as typed.
fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod budget {
        use super::*;

        #[test]
        fn extracts_currency_marked_amount() {
            assert_eq!(budget("Budget is $50,000 total."), 50_000);
        }

        #[test]
        fn extracts_unmarked_amount() {
            assert_eq!(budget("around 15000 for everything"), 15_000);
        }

        #[test]
        fn strips_all_group_separators() {
            assert_eq!(budget("$1,234,567 available"), 1_234_567);
        }

        #[test]
        fn first_digit_run_wins_over_later_marked_budget() {
            // The documented pitfall: the quantity earlier in the text is
            // picked up instead of the real budget.
            let text = "20 ergonomic chairs and 10 standing desks. Budget around $15,000.";
            assert_eq!(budget(text), 20);
        }

        #[test]
        fn defaults_when_no_digits_anywhere() {
            assert_eq!(budget("cloud hosting with uptime guarantee"), DEFAULT_BUDGET);
        }

        #[test]
        fn defaults_on_zero_amount() {
            assert_eq!(budget("$0 down"), DEFAULT_BUDGET);
        }

        #[test]
        fn defaults_on_unparseable_amount() {
            let huge = "9".repeat(30);
            assert_eq!(budget(&huge), DEFAULT_BUDGET);
        }
    }

    mod delivery_days {
        use super::*;

        #[test]
        fn extracts_day_count() {
            assert_eq!(delivery_days("delivery within 30 days"), 30);
            assert_eq!(delivery_days("in 1 day please"), 1);
        }

        #[test]
        fn converts_weeks_to_days() {
            assert_eq!(delivery_days("deliver in 2 weeks"), 14);
            assert_eq!(delivery_days("1 week turnaround"), 7);
        }

        #[test]
        fn day_count_wins_over_week_count() {
            assert_eq!(delivery_days("10 days, not 3 weeks"), 10);
        }

        #[test]
        fn defaults_when_no_timeline_present() {
            assert_eq!(
                delivery_days("laptops and monitors, no rush"),
                DEFAULT_DELIVERY_DAYS
            );
        }

        #[test]
        fn defaults_on_zero_days() {
            assert_eq!(delivery_days("0 days"), DEFAULT_DELIVERY_DAYS);
        }
    }

    mod items {
        use super::*;

        #[test]
        fn extracts_quantity_phrases() {
            let items =
                items("Looking for office furniture - 20 ergonomic chairs and 10 standing desks.");
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].name, "Ergonomic chairs");
            assert_eq!(items[0].quantity, 20);
            assert_eq!(items[1].name, "Standing desks");
            assert_eq!(items[1].quantity, 10);
        }

        #[test]
        fn extracts_single_word_names() {
            let items = items("5 laptops");
            assert_eq!(items.len(), 1);
            assert_eq!(items[0].name, "Laptops");
            assert_eq!(items[0].quantity, 5);
        }

        #[test]
        fn stoplist_excludes_time_spans_and_units() {
            let extracted = items("Need delivery within 30 days. Budget $5,000.");
            // "30 days" is a time span, not an item.
            assert_eq!(extracted, vec![RfpItem::placeholder()]);
        }

        #[test]
        fn skips_zero_quantities() {
            let items = items("0 monitors wanted");
            assert_eq!(items[0], RfpItem::placeholder());
        }

        #[test]
        fn repeated_names_stay_duplicated() {
            let extracted = items("10 laptops, 5 laptops");
            assert_eq!(extracted.len(), 2);
            assert_eq!(extracted[0].name, "Laptops");
            assert_eq!(extracted[0].quantity, 10);
            assert_eq!(extracted[1].name, "Laptops");
            assert_eq!(extracted[1].quantity, 5);
        }

        #[test]
        fn falls_back_to_placeholder_when_nothing_extracted() {
            let items = items("cloud hosting services for our startup");
            assert_eq!(items, vec![RfpItem::placeholder()]);
        }
    }

    mod specifications {
        use super::*;

        #[test]
        fn ram_attaches_to_first_item() {
            let text = "50 laptops with 16GB RAM and 20 monitors";
            let mut extracted = items(text);
            attach_specifications(&mut extracted, text);
            assert_eq!(extracted[0].specifications.as_deref(), Some("16GB RAM"));
        }

        #[test]
        fn inch_attaches_to_second_item() {
            let text = "50 laptops and 20 monitors, 27-inch";
            let mut extracted = items(text);
            attach_specifications(&mut extracted, text);
            assert_eq!(extracted[1].specifications.as_deref(), Some("27-inch"));
        }

        #[test]
        fn inch_is_dropped_when_only_one_item_exists() {
            let text = "50 laptops, 15 inch.";
            let mut extracted = items(text);
            // "15 inch" is stoplisted, so only one item survives.
            assert_eq!(extracted.len(), 1);
            attach_specifications(&mut extracted, text);
            assert_eq!(extracted[0].specifications, None);
        }

        #[test]
        fn ram_overwrites_placeholder_specifications() {
            let text = "something with 32GB RAM";
            let mut extracted = items(text);
            assert_eq!(extracted[0], RfpItem::placeholder());
            attach_specifications(&mut extracted, text);
            assert_eq!(extracted[0].specifications.as_deref(), Some("32GB RAM"));
        }

        #[test]
        fn no_patterns_leave_items_untouched() {
            let text = "50 laptops and 20 monitors";
            let mut extracted = items(text);
            attach_specifications(&mut extracted, text);
            assert!(extracted.iter().all(|i| i.specifications.is_none()));
        }
    }

    mod payment_terms {
        use super::*;

        #[test]
        fn recognizes_net_30() {
            assert_eq!(payment_terms("invoice on Net 30 terms"), PaymentTerms::Net30);
        }

        #[test]
        fn recognizes_net_45() {
            assert_eq!(payment_terms("we pay NET 45"), PaymentTerms::Net45);
        }

        #[test]
        fn net_30_wins_when_both_present() {
            assert_eq!(
                payment_terms("net 45 preferred but net 30 acceptable"),
                PaymentTerms::Net30
            );
        }

        #[test]
        fn defaults_to_net_30() {
            assert_eq!(payment_terms("no terms mentioned"), PaymentTerms::Net30);
        }
    }

    mod warranty {
        use super::*;

        #[test]
        fn presence_of_word_yields_as_specified() {
            assert_eq!(warranty("includes a 2 year warranty"), "As specified");
            assert_eq!(warranty("WARRANTY required"), "As specified");
        }

        #[test]
        fn absence_yields_default() {
            assert_eq!(warranty("no guarantees here"), DEFAULT_WARRANTY);
        }
    }

    mod title {
        use super::*;

        #[test]
        fn joins_item_names_with_ampersand() {
            let items = vec![
                RfpItem::new("Laptops", 2).unwrap(),
                RfpItem::new("Monitors", 3).unwrap(),
            ];
            assert_eq!(title(&items), "Laptops & Monitors Procurement");
        }

        #[test]
        fn single_item_title() {
            let items = vec![RfpItem::placeholder()];
            assert_eq!(title(&items), "Item Procurement");
        }
    }
}
