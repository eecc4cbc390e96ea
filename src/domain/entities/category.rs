//! Category enumerations
//!
//! The set of valid categories per record kind is fixed. Free-form category
//! names from the URL are parsed into these enums at the handler boundary,
//! so unknown names are rejected before any document access.

use serde::{Deserialize, Serialize};

/// Which side of the net-worth ledger a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Asset,
    Debt,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordKind::Asset => write!(f, "asset"),
            RecordKind::Debt => write!(f, "debt"),
        }
    }
}

/// Asset categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetCategory {
    RealEstate,
    Stocks,
    Cash,
}

impl AssetCategory {
    pub const ALL: [AssetCategory; 3] = [
        AssetCategory::RealEstate,
        AssetCategory::Stocks,
        AssetCategory::Cash,
    ];

    /// The key this category uses in the document and in URLs
    pub fn key(&self) -> &'static str {
        match self {
            AssetCategory::RealEstate => "real_estate",
            AssetCategory::Stocks => "stocks",
            AssetCategory::Cash => "cash",
        }
    }
}

impl std::str::FromStr for AssetCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| format!("Unknown asset category: {}", s))
    }
}

/// Debt categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DebtCategory {
    CreditCard,
    StudentLoan,
    Mortgage,
}

impl DebtCategory {
    pub const ALL: [DebtCategory; 3] = [
        DebtCategory::CreditCard,
        DebtCategory::StudentLoan,
        DebtCategory::Mortgage,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            DebtCategory::CreditCard => "credit_card",
            DebtCategory::StudentLoan => "student_loan",
            DebtCategory::Mortgage => "mortgage",
        }
    }
}

impl std::str::FromStr for DebtCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.key() == s)
            .ok_or_else(|| format!("Unknown debt category: {}", s))
    }
}

/// A validated category of either kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Asset(AssetCategory),
    Debt(DebtCategory),
}

impl Category {
    /// Parse a category name for the given record kind
    pub fn parse(kind: RecordKind, name: &str) -> Option<Category> {
        match kind {
            RecordKind::Asset => name.parse().ok().map(Category::Asset),
            RecordKind::Debt => name.parse().ok().map(Category::Debt),
        }
    }

    pub fn kind(&self) -> RecordKind {
        match self {
            Category::Asset(_) => RecordKind::Asset,
            Category::Debt(_) => RecordKind::Debt,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Category::Asset(c) => c.key(),
            Category::Debt(c) => c.key(),
        }
    }
}
