use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use super::{REVENUE_ROOT_NAME, SPENDING_ROOT_NAME};

const COMMENT_PREFIX: &str = "//";
const TIER2_HEADER: &str = "// Tier 2 -";
const TIER3_HEADER: &str = "// Tier 3";
const TIER2_RESET: &str = "// Tier 2";

/// One record extracted from the outline. The tier is encoded by which
/// grouping of [`Outline`] holds the entry.
#[derive(Debug, Clone, PartialEq)]
pub struct OutlineEntry {
    pub name: String,
    pub amount: Decimal,
    pub category: Option<String>,
}

/// Flat groupings extracted from the outline text, keyed by parent category.
/// Input order is preserved within each grouping.
#[derive(Debug, Default, PartialEq)]
pub struct Outline {
    pub revenue_tier1: Vec<OutlineEntry>,
    pub spending_tier1: Vec<OutlineEntry>,
    pub revenue_tier2: HashMap<String, Vec<OutlineEntry>>,
    pub spending_tier2: HashMap<String, Vec<OutlineEntry>>,
    pub spending_tier3: HashMap<String, Vec<OutlineEntry>>,
}

/// Parses the semi-structured outline. Lines that do not match the
/// `<label> [<amount>] <label>` shape are skipped, never an error.
pub fn parse_outline(text: &str) -> Outline {
    let lines: Vec<&str> = text.lines().map(str::trim).collect();

    let mut outline = Outline::default();
    collect_tier1(&lines, &mut outline);
    collect_revenue_tier2(&lines, &mut outline);
    collect_spending_tier2(&lines, &mut outline);
    collect_spending_tier3(&lines, &mut outline);
    outline
}

/// Splits a data line of the form `<left> [<amount>] <right>`.
fn split_amount_line(line: &str) -> Option<(&str, Decimal, &str)> {
    let open = line.find('[')?;
    let close = line[open..].find(']')? + open;
    let amount: Decimal = line[open + 1..close].trim().parse().ok()?;

    let left = line[..open].trim();
    let right = line[close + 1..].trim();
    if left.is_empty() || right.is_empty() {
        return None;
    }

    Some((left, amount, right))
}

/// Tier-1 revenue lines read `<category> [amount] Revenue`; tier-1 spending
/// lines read `Spending [amount] <category>`. The category side flips.
fn collect_tier1(lines: &[&str], outline: &mut Outline) {
    for line in lines {
        if line.starts_with(COMMENT_PREFIX) {
            continue;
        }
        let Some((left, amount, right)) = split_amount_line(line) else {
            continue;
        };

        if right == REVENUE_ROOT_NAME {
            outline.revenue_tier1.push(OutlineEntry {
                name: left.to_string(),
                amount,
                category: None,
            });
        } else if left == SPENDING_ROOT_NAME {
            outline.spending_tier1.push(OutlineEntry {
                name: right.to_string(),
                amount,
                category: None,
            });
        }
    }
}

/// Revenue tier-2 lines read `<item> [amount] <category>` under a
/// `// Tier 2 - <category>` header. A tier-1 spending line closes the section.
fn collect_revenue_tier2(lines: &[&str], outline: &mut Outline) {
    let mut current: Option<String> = None;

    for line in lines {
        if let Some(rest) = line.strip_prefix(TIER2_HEADER) {
            let category = rest.trim().to_string();
            outline.revenue_tier2.entry(category.clone()).or_default();
            current = Some(category);
            continue;
        }

        let Some(category) = current.clone() else { continue };
        if line.starts_with(COMMENT_PREFIX) || !line.contains('[') {
            continue;
        }
        if let Some((left, _, _)) = split_amount_line(line) {
            if left == SPENDING_ROOT_NAME {
                current = None;
                continue;
            }
        }
        if line.contains("] Revenue") {
            // Tier-1 revenue line, handled by collect_tier1.
            continue;
        }

        match split_amount_line(line) {
            Some((left, amount, right)) => {
                outline.revenue_tier2.entry(category).or_default().push(OutlineEntry {
                    name: left.to_string(),
                    amount,
                    category: Some(right.to_string()),
                });
            }
            None => debug!("skipping unmatched outline line: {line}"),
        }
    }
}

/// Spending tier-2 lines read `<category> [amount] <item>` under a
/// `// Tier 2 - <category>` header without "Revenue" in it. A `// Tier 3`
/// header closes the section.
fn collect_spending_tier2(lines: &[&str], outline: &mut Outline) {
    let mut current: Option<String> = None;

    for line in lines {
        if let Some(rest) = line.strip_prefix(TIER2_HEADER) {
            if !line.contains(REVENUE_ROOT_NAME) {
                let category = rest.trim().to_string();
                outline.spending_tier2.entry(category.clone()).or_default();
                current = Some(category);
            }
            continue;
        }
        if line.starts_with(TIER3_HEADER) {
            current = None;
            continue;
        }

        let Some(category) = &current else { continue };
        if line.starts_with(COMMENT_PREFIX) || !line.contains('[') {
            continue;
        }

        match split_amount_line(line) {
            Some((left, amount, right)) => {
                outline
                    .spending_tier2
                    .entry(category.clone())
                    .or_default()
                    .push(OutlineEntry {
                        name: right.to_string(),
                        amount,
                        category: Some(left.to_string()),
                    });
            }
            None => debug!("skipping unmatched outline line: {line}"),
        }
    }
}

/// Spending tier-3 lines read `<tier-2 item> [amount] <line item>` and are
/// grouped by the tier-2 item name, not by the section header.
fn collect_spending_tier3(lines: &[&str], outline: &mut Outline) {
    let mut in_tier3 = false;

    for line in lines {
        if line.starts_with(TIER3_HEADER) {
            in_tier3 = true;
            continue;
        }
        if line.starts_with(TIER2_RESET) {
            in_tier3 = false;
            continue;
        }
        if !in_tier3 || line.starts_with(COMMENT_PREFIX) || !line.contains('[') {
            continue;
        }

        match split_amount_line(line) {
            Some((left, amount, right)) => {
                outline
                    .spending_tier3
                    .entry(left.to_string())
                    .or_default()
                    .push(OutlineEntry {
                        name: right.to_string(),
                        amount,
                        category: Some(left.to_string()),
                    });
            }
            None => debug!("skipping unmatched outline line: {line}"),
        }
    }
}
