use chrono::Utc;
use getset::{CopyGetters, Getters};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

use super::builder::Totals;
use super::tree::CategoryNode;
use super::{BASE_UNITS_PER_BILLION, MILLIONS_PER_BILLION};

const PERCENT: Decimal = dec!(100);

/// Jurisdiction metadata carried into the summary document.
#[derive(Debug, Clone, Getters, CopyGetters)]
pub struct JurisdictionProfile {
    #[getset(get = "pub")]
    name: String,
    #[getset(get = "pub")]
    financial_year: String,
    #[getset(get = "pub")]
    source_url: String,
    #[getset(get_copy = "pub")]
    population: u64,
    #[getset(get_copy = "pub")]
    total_employees: u64,
    #[getset(get = "pub")]
    property_tax_label: String,
}

impl JurisdictionProfile {
    pub fn new(
        name: impl Into<String>,
        financial_year: impl Into<String>,
        source_url: impl Into<String>,
        population: u64,
        total_employees: u64,
        property_tax_label: impl Into<String>,
    ) -> JurisdictionProfile {
        JurisdictionProfile {
            name: name.into(),
            financial_year: financial_year.into(),
            source_url: source_url.into(),
            population,
            total_employees,
            property_tax_label: property_tax_label.into(),
        }
    }
}

/// One entry per top-level spending category, sorted by total descending.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MinistrySummary {
    pub name: String,
    pub slug: String,
    pub total_spending: Decimal,
    pub total_spending_formatted: String,
    pub percentage: Decimal,
    pub percentage_formatted: String,
}

/// The flat summary document written alongside the tree.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub name: String,
    pub financial_year: String,
    pub source: String,
    pub total_provincial_spending: Decimal,
    pub total_provincial_spending_formatted: String,
    pub total_employees: u64,
    pub net_debt: Option<Decimal>,
    pub total_debt: Option<Decimal>,
    pub debt_interest: Option<Decimal>,
    pub population: u64,
    pub budget_balance: Decimal,
    pub budget_balance_formatted: String,
    pub per_capita_spending: Option<i64>,
    pub property_tax_per_capita: Option<i64>,
    pub property_tax_revenue: Decimal,
    pub property_tax_revenue_formatted: String,
    pub ministries: Vec<MinistrySummary>,
    pub generated_at: String,
}

/// URL-safe slug: lowercase, `&` reads "and", non-alphanumeric runs collapse
/// to one hyphen, no leading or trailing hyphens.
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase().replace('&', " and ");

    let mut slug = String::with_capacity(lowered.len());
    for ch in lowered.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    slug.trim_end_matches('-').to_string()
}

/// Formats a billion-scale amount as `$X.YB`, auto-scaling to whole millions
/// below one billion.
pub fn format_compact_currency(amount_billions: Decimal) -> String {
    if amount_billions >= Decimal::ONE {
        format!("${amount_billions:.1}B").replace(".0B", "B")
    } else {
        let millions = (amount_billions * MILLIONS_PER_BILLION).round().normalize();
        format!("${millions}M")
    }
}

/// UTC generation timestamp, second precision, `Z`-suffixed.
pub fn utc_timestamp() -> String {
    Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

fn per_capita(amount_billions: Decimal, population: u64) -> Option<i64> {
    if population == 0 {
        return None;
    }
    (amount_billions * BASE_UNITS_PER_BILLION / Decimal::from(population))
        .round()
        .to_i64()
}

/// Walks the finished trees into the flat summary record.
pub fn generate_summary(
    totals: &Totals,
    spending_data: &CategoryNode,
    revenue_data: &CategoryNode,
    profile: &JurisdictionProfile,
) -> Summary {
    let total_spending = totals.spending;
    let budget_balance = totals.revenue - total_spending;

    let mut categories: Vec<(&str, Decimal)> = spending_data
        .children()
        .iter()
        .map(|child| (child.name(), child.sum()))
        .collect();
    // Stable sort keeps encounter order for equal totals.
    categories.sort_by(|a, b| b.1.cmp(&a.1));

    let ministries = categories
        .into_iter()
        .map(|(name, total)| {
            let percentage = if total_spending.is_zero() {
                Decimal::ZERO
            } else {
                total / total_spending * PERCENT
            };
            MinistrySummary {
                name: name.to_string(),
                slug: slugify(name),
                total_spending: total,
                total_spending_formatted: format_compact_currency(total),
                percentage,
                percentage_formatted: format!("{percentage:.1}%"),
            }
        })
        .collect();

    let property_tax_revenue = revenue_data
        .children()
        .iter()
        .find(|child| child.name() == profile.property_tax_label())
        .map(CategoryNode::sum)
        .unwrap_or(Decimal::ZERO);

    let per_capita_spending = per_capita(total_spending, profile.population());
    let property_tax_per_capita = if property_tax_revenue.is_zero() {
        None
    } else {
        per_capita(property_tax_revenue, profile.population())
    };

    Summary {
        name: profile.name().clone(),
        financial_year: profile.financial_year().clone(),
        source: profile.source_url().clone(),
        total_provincial_spending: total_spending,
        total_provincial_spending_formatted: format_compact_currency(total_spending),
        total_employees: profile.total_employees(),
        net_debt: None,
        total_debt: None,
        debt_interest: None,
        population: profile.population(),
        budget_balance,
        budget_balance_formatted: format_compact_currency(budget_balance.abs()),
        per_capita_spending,
        property_tax_per_capita,
        property_tax_revenue,
        property_tax_revenue_formatted: format_compact_currency(property_tax_revenue),
        ministries,
        generated_at: utc_timestamp(),
    }
}
