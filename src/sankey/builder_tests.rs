use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::builder::{build_revenue, build_spending, outline_totals};
use super::outline::{Outline, OutlineEntry};
use super::sheets::SheetRow;
use super::tree::CategoryNode;

fn entry(name: &str, amount: Decimal) -> OutlineEntry {
    OutlineEntry { name: name.to_string(), amount, category: None }
}

fn row(name: &str, amount: Decimal, category: &str) -> SheetRow {
    SheetRow {
        name: name.to_string(),
        amount,
        category: Some(category.to_string()),
        subcategory: None,
    }
}

fn tier3_row(name: &str, amount: Decimal, subcategory: &str) -> SheetRow {
    SheetRow {
        name: name.to_string(),
        amount,
        category: None,
        subcategory: Some(subcategory.to_string()),
    }
}

#[test]
fn revenue_without_matching_rows_becomes_a_leaf() {
    let mut outline = Outline::default();
    outline.revenue_tier1.push(entry("Taxes", dec!(1000)));

    let revenue = build_revenue(&outline, &[]);

    assert_eq!(
        revenue,
        CategoryNode::branch("Revenue", vec![CategoryNode::leaf("Taxes", dec!(1.0))])
    );
}

#[test]
fn revenue_with_matching_rows_nests_breadcrumb_leaves() {
    let mut outline = Outline::default();
    outline.revenue_tier1.push(entry("Property taxes", dec!(6000)));
    outline.revenue_tier1.push(entry("User fees", dec!(500)));

    let income = vec![
        row("Residential", dec!(5163), "Property taxes"),
        row("Commercial", dec!(900), "Property taxes"),
    ];

    let revenue = build_revenue(&outline, &income);

    assert_eq!(
        revenue,
        CategoryNode::branch(
            "Revenue",
            vec![
                CategoryNode::branch(
                    "Property taxes",
                    vec![
                        CategoryNode::leaf("Property taxes → Residential", dec!(5.163)),
                        CategoryNode::leaf("Property taxes → Commercial", dec!(0.9)),
                    ],
                ),
                CategoryNode::leaf("User fees", dec!(0.5)),
            ],
        )
    );
}

#[test]
fn spending_adds_adjustment_leaf_for_reconciliation_gaps() {
    let mut outline = Outline::default();
    outline.spending_tier1.push(entry("Operating", dec!(9000)));

    let tier2 = vec![row("Staff", dec!(100), "Operating")];
    let tier3 = vec![
        tier3_row("Salaries", dec!(60), "Staff"),
        tier3_row("Benefits", dec!(30), "Staff"),
    ];

    let spending = build_spending(&outline, &tier2, &tier3);

    assert_eq!(
        spending,
        CategoryNode::branch(
            "Spending",
            vec![CategoryNode::branch(
                "Operating",
                vec![CategoryNode::branch(
                    "Operating → Staff",
                    vec![
                        CategoryNode::leaf("Operating → Staff → Salaries", dec!(0.06)),
                        CategoryNode::leaf("Operating → Staff → Benefits", dec!(0.03)),
                        CategoryNode::leaf("Operating → Staff → Other (adjustment)", dec!(0.01)),
                    ],
                )],
            )],
        )
    );
}

#[test]
fn adjustment_leaf_reconciles_to_the_reported_total() {
    let mut outline = Outline::default();
    outline.spending_tier1.push(entry("Operating", dec!(9000)));

    let tier2 = vec![row("Staff", dec!(123.456), "Operating")];
    let tier3 = vec![
        tier3_row("Salaries", dec!(100.1), "Staff"),
        tier3_row("Benefits", dec!(20.02), "Staff"),
    ];

    let spending = build_spending(&outline, &tier2, &tier3);
    let staff = &spending.children()[0].children()[0];

    // After the adjustment leaf, children sum back to the tier-2 total.
    assert_eq!(staff.sum(), dec!(123.456) / dec!(1000));
    assert_eq!(staff.children().len(), 3);
}

#[test]
fn no_adjustment_leaf_within_tolerance() {
    let mut outline = Outline::default();
    outline.spending_tier1.push(entry("Operating", dec!(9000)));

    let tier2 = vec![row("Staff", dec!(100.0005), "Operating")];
    let tier3 = vec![tier3_row("Salaries", dec!(100), "Staff")];

    let spending = build_spending(&outline, &tier2, &tier3);
    let staff = &spending.children()[0].children()[0];

    assert_eq!(staff.children().len(), 1);
}

#[test]
fn tier2_without_tier3_rows_is_a_leaf() {
    let mut outline = Outline::default();
    outline.spending_tier1.push(entry("Capital", dec!(2000)));

    let tier2 = vec![row("Roads", dec!(1500), "Capital")];

    let spending = build_spending(&outline, &tier2, &[]);

    assert_eq!(
        spending,
        CategoryNode::branch(
            "Spending",
            vec![CategoryNode::branch(
                "Capital",
                vec![CategoryNode::leaf("Capital → Roads", dec!(1.5))],
            )],
        )
    );
}

#[test]
fn outline_only_tier2_entries_are_appended() {
    let mut outline = Outline::default();
    outline.spending_tier1.push(entry("Operating", dec!(9000)));
    outline.spending_tier2.insert(
        "Operating".to_string(),
        vec![OutlineEntry {
            name: "Unreported agencies".to_string(),
            amount: dec!(250),
            category: Some("Operating".to_string()),
        }],
    );

    let tier2 = vec![row("Staff", dec!(100), "Operating")];

    let spending = build_spending(&outline, &tier2, &[]);
    let operating = &spending.children()[0];

    assert_eq!(
        operating.children().to_vec(),
        vec![
            CategoryNode::leaf("Operating → Staff", dec!(0.1)),
            CategoryNode::leaf("Operating → Unreported agencies", dec!(0.25)),
        ]
    );
}

#[test]
fn outline_tier2_entries_matching_a_substring_are_skipped() {
    let mut outline = Outline::default();
    outline.spending_tier1.push(entry("Operating", dec!(9000)));
    outline.spending_tier2.insert(
        "Operating".to_string(),
        vec![OutlineEntry {
            name: "Staff".to_string(),
            amount: dec!(100),
            category: Some("Operating".to_string()),
        }],
    );

    // "Staff" is a substring of the sheet-derived child name.
    let tier2 = vec![row("Staff", dec!(100), "Operating")];

    let spending = build_spending(&outline, &tier2, &[]);
    let operating = &spending.children()[0];

    assert_eq!(operating.children().len(), 1);
    assert_eq!(operating.children()[0].name(), "Operating → Staff");
}

#[test]
fn empty_spending_category_falls_back_to_the_outline_amount() {
    let mut outline = Outline::default();
    outline.spending_tier1.push(entry("Capital", dec!(2000)));

    let spending = build_spending(&outline, &[], &[]);

    assert_eq!(
        spending,
        CategoryNode::branch("Spending", vec![CategoryNode::leaf("Capital", dec!(2.0))])
    );
}

#[test]
fn totals_mirror_the_revenue_total() {
    let mut outline = Outline::default();
    outline.revenue_tier1.push(entry("Taxes", dec!(12000)));
    outline.revenue_tier1.push(entry("Fees", dec!(4193)));
    outline.spending_tier1.push(entry("Operating", dec!(14650)));

    let totals = outline_totals(&outline);

    assert_eq!(totals.revenue, dec!(16.193));
    assert_eq!(totals.spending, dec!(14.65));
    assert_eq!(totals.total, totals.revenue);
}
