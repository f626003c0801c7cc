//! Centralized parsing of the numeric order prefix and name ordering.
//!
//! Files and directories may carry an optional numeric prefix that controls
//! their position: a run of ASCII digits followed immediately by one of the
//! separators below, then the name.
//!
//! ```text
//! order-prefix = 1*DIGIT separator
//! separator    = "." / "_" / "、" / "-"
//! ```
//!
//! - `3-intro.md` → order 3, name "intro.md"
//! - `01.basics` → order 1, name "basics"
//! - `2、概览.md` → order 2, name "概览.md"
//! - `10.md` → order 10 (the extension dot doubles as the separator)
//! - `v2-notes.md` → no order
//!
//! ## Ordering
//!
//! [`NameOrder::compare`] puts numbered names first, ascending by number.
//! Names without a prefix follow, ordered by locale-aware collation for the
//! content's primary language (pinyin order for `zh-CN`).

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use std::cmp::Ordering;

/// Characters accepted between the order digits and the rest of the name.
const SEPARATORS: &[char] = &['.', '_', '、', '-'];

/// Split a name into its order prefix and the remainder.
fn split_order_prefix(name: &str) -> Option<(u64, &str)> {
    let digits_end = name
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)?;
    if digits_end == 0 {
        return None;
    }
    let rest = &name[digits_end..];
    let separator = rest.chars().next().filter(|c| SEPARATORS.contains(c))?;
    let number = name[..digits_end].parse::<u64>().ok()?;
    Some((number, &rest[separator.len_utf8()..]))
}

/// Extract the numeric order from a name like `3-intro.md`.
///
/// Returns `None` when the name has no digits-then-separator prefix or when the
/// digits overflow.
pub fn extract_order(name: &str) -> Option<u64> {
    split_order_prefix(name).map(|(number, _)| number)
}

/// Remove the order prefix from a name, if it has one.
///
/// A name consisting only of digits (a stem such as `10`) strips to the empty
/// string, so the caller can fall back to the bare number.
pub fn strip_order_prefix(name: &str) -> &str {
    if let Some((_, rest)) = split_order_prefix(name) {
        return rest;
    }
    if !name.is_empty() && name.chars().all(|c| c.is_ascii_digit()) {
        return "";
    }
    name
}

/// Total order over entry names: numbered first, then collated.
pub struct NameOrder {
    collator: Collator,
}

impl NameOrder {
    /// Build an ordering for the given BCP-47 locale (e.g. `zh-CN`).
    pub fn new(locale: &str) -> Result<Self, String> {
        let locale: Locale = locale
            .parse()
            .map_err(|e| format!("invalid locale '{locale}': {e}"))?;
        let collator = Collator::try_new(&(&locale).into(), CollatorOptions::new())
            .map_err(|e| format!("no collation data for '{locale}': {e}"))?;
        Ok(Self { collator })
    }

    /// Compare two names.
    ///
    /// Equal orders compare `Equal`; sorting with this alone keeps the input
    /// order for ties.
    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        match (extract_order(a), extract_order(b)) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.collator.compare(a, b),
        }
    }

    /// Sort names in place, breaking ties on the raw bytes so repeated runs
    /// produce the same sequence.
    pub fn sort_by_name<T>(&self, items: &mut [T], name: impl Fn(&T) -> &str) {
        items.sort_by(|a, b| {
            let (a, b) = (name(a), name(b));
            self.compare(a, b).then_with(|| a.cmp(b))
        });
    }
}

impl std::fmt::Debug for NameOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NameOrder").finish_non_exhaustive()
    }
}
