use log::debug;
use rust_decimal::Decimal;

use super::outline::{Outline, OutlineEntry};
use super::sheets::SheetRow;
use super::tree::CategoryNode;
use super::{
    ADJUSTMENT_SCALE, ADJUSTMENT_TOLERANCE_MILLIONS, MILLIONS_PER_BILLION, REVENUE_ROOT_NAME,
    SPENDING_ROOT_NAME,
};

pub const BREADCRUMB_SEPARATOR: &str = " → ";
pub const ADJUSTMENT_LABEL: &str = "Other (adjustment)";

/// Tree-level totals, all in billions. `total` mirrors the revenue total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub total: Decimal,
    pub revenue: Decimal,
    pub spending: Decimal,
}

pub fn outline_totals(outline: &Outline) -> Totals {
    let revenue = millions_to_billions(outline.revenue_tier1.iter().map(|e| e.amount).sum());
    let spending = millions_to_billions(outline.spending_tier1.iter().map(|e| e.amount).sum());
    Totals { total: revenue, revenue, spending }
}

fn millions_to_billions(amount: Decimal) -> Decimal {
    amount / MILLIONS_PER_BILLION
}

fn breadcrumb(parts: &[&str]) -> String {
    parts.join(BREADCRUMB_SEPARATOR)
}

/// Builds the revenue tree. Tier-1 categories with matching income rows
/// become branches of per-row leaves; the rest become leaves carrying the
/// outline amount.
pub fn build_revenue(outline: &Outline, income_rows: &[SheetRow]) -> CategoryNode {
    let mut children = Vec::with_capacity(outline.revenue_tier1.len());

    for tier1 in &outline.revenue_tier1 {
        let matches: Vec<&SheetRow> = income_rows
            .iter()
            .filter(|row| row.category.as_deref() == Some(tier1.name.as_str()))
            .collect();

        if matches.is_empty() {
            children.push(CategoryNode::leaf(&tier1.name, millions_to_billions(tier1.amount)));
        } else {
            let leaves = matches
                .iter()
                .map(|row| {
                    CategoryNode::leaf(
                        breadcrumb(&[&tier1.name, &row.name]),
                        millions_to_billions(row.amount),
                    )
                })
                .collect();
            children.push(CategoryNode::branch(&tier1.name, leaves));
        }
    }

    CategoryNode::branch(REVENUE_ROOT_NAME, children)
}

/// Builds the three-tier spending tree from the outline plus the expense
/// tier-2 and tier-3 sheets.
pub fn build_spending(
    outline: &Outline,
    tier2_rows: &[SheetRow],
    tier3_rows: &[SheetRow],
) -> CategoryNode {
    let children = outline
        .spending_tier1
        .iter()
        .map(|tier1| build_spending_category(tier1, outline, tier2_rows, tier3_rows))
        .collect();

    CategoryNode::branch(SPENDING_ROOT_NAME, children)
}

fn build_spending_category(
    tier1: &OutlineEntry,
    outline: &Outline,
    tier2_rows: &[SheetRow],
    tier3_rows: &[SheetRow],
) -> CategoryNode {
    let mut children: Vec<CategoryNode> = Vec::new();

    for tier2 in tier2_rows
        .iter()
        .filter(|row| row.category.as_deref() == Some(tier1.name.as_str()))
    {
        let tier3: Vec<&SheetRow> = tier3_rows
            .iter()
            .filter(|row| row.subcategory.as_deref() == Some(tier2.name.as_str()))
            .collect();

        let node_name = breadcrumb(&[&tier1.name, &tier2.name]);

        if tier3.is_empty() {
            children.push(CategoryNode::leaf(node_name, millions_to_billions(tier2.amount)));
            continue;
        }

        let mut leaves = Vec::with_capacity(tier3.len() + 1);
        let mut tier3_total = Decimal::ZERO;
        for row in &tier3 {
            tier3_total += row.amount;
            leaves.push(CategoryNode::leaf(
                breadcrumb(&[&tier1.name, &tier2.name, &row.name]),
                millions_to_billions(row.amount),
            ));
        }

        // Reconcile the tier-2 reported total against the tier-3 rows.
        let difference = tier2.amount - tier3_total;
        if difference.abs() > ADJUSTMENT_TOLERANCE_MILLIONS {
            leaves.push(CategoryNode::leaf(
                breadcrumb(&[&tier1.name, &tier2.name, ADJUSTMENT_LABEL]),
                millions_to_billions(difference).round_dp(ADJUSTMENT_SCALE),
            ));
        }

        children.push(CategoryNode::branch(node_name, leaves));
    }

    // Outline-only tier-2 entries, e.g. categories only the outline reports.
    // The substring check is deliberately loose; sheet-derived children carry
    // breadcrumb names, so an exact match would re-add every entry.
    if let Some(entries) = outline.spending_tier2.get(&tier1.name) {
        for entry in entries {
            let already_present = children
                .iter()
                .any(|child| child.name().contains(entry.name.as_str()));
            if already_present {
                debug!("skipping outline tier-2 entry {:?}: already present under {:?}", entry.name, tier1.name);
                continue;
            }

            children.push(CategoryNode::leaf(
                breadcrumb(&[&tier1.name, &entry.name]),
                millions_to_billions(entry.amount),
            ));
        }
    }

    if children.is_empty() {
        // Nothing reported below this category; keep the outline figure.
        return CategoryNode::leaf(&tier1.name, millions_to_billions(tier1.amount));
    }

    CategoryNode::branch(&tier1.name, children)
}
