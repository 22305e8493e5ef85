use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One node in the budget hierarchy: either a leaf carrying an amount or a
/// branch carrying children, never both. Serializes to `{name, amount}` or
/// `{name, children}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryNode {
    Branch {
        name: String,
        children: Vec<CategoryNode>,
    },
    Leaf {
        name: String,
        amount: Decimal,
    },
}

impl CategoryNode {
    pub fn leaf(name: impl Into<String>, amount: Decimal) -> CategoryNode {
        CategoryNode::Leaf { name: name.into(), amount }
    }

    pub fn branch(name: impl Into<String>, children: Vec<CategoryNode>) -> CategoryNode {
        CategoryNode::Branch { name: name.into(), children }
    }

    pub fn name(&self) -> &str {
        match self {
            CategoryNode::Branch { name, .. } | CategoryNode::Leaf { name, .. } => name,
        }
    }

    pub fn children(&self) -> &[CategoryNode] {
        match self {
            CategoryNode::Branch { children, .. } => children,
            CategoryNode::Leaf { .. } => &[],
        }
    }

    /// Recursively sums descendant leaf amounts. A branch sums its children
    /// (an empty branch sums to zero), a leaf contributes its own amount.
    pub fn sum(&self) -> Decimal {
        match self {
            CategoryNode::Branch { children, .. } => children.iter().map(CategoryNode::sum).sum(),
            CategoryNode::Leaf { amount, .. } => *amount,
        }
    }
}

/// Jurisdiction-level figures appended to the municipal tree document.
#[derive(Debug, Serialize)]
pub struct MunicipalFacts {
    pub population: u64,
    pub budget_balance: Decimal,
    pub per_capita_spending: Option<i64>,
    pub property_tax_per_capita: Option<i64>,
    pub property_tax_revenue: Decimal,
}

/// The full tree document written as `sankey.json`.
#[derive(Debug, Serialize)]
pub struct SankeyDocument {
    pub total: Decimal,
    pub spending: Decimal,
    pub revenue: Decimal,
    pub spending_data: CategoryNode,
    pub revenue_data: CategoryNode,
    #[serde(flatten)]
    pub facts: Option<MunicipalFacts>,
}
