use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::date_utils::parse_date;
use crate::serde_utils::{deserialize_amount_cents, deserialize_opaque_id, serialize_amount_cents};

/// One dated expense as supplied by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    #[serde(default, deserialize_with = "deserialize_opaque_id")]
    pub id: String,
    /// `yyyy-MM-dd`, kept verbatim so malformed values can be reported.
    pub date: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(
        rename = "value",
        alias = "amount",
        serialize_with = "serialize_amount_cents",
        deserialize_with = "deserialize_amount_cents"
    )]
    pub value_cents: i64,
    #[serde(default)]
    pub status: ExpenseStatus,
}

impl ExpenseRecord {
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    pub fn category_kind(&self) -> Option<ExpenseCategory> {
        ExpenseCategory::from_label(&self.category)
    }

    pub fn is_paid(&self) -> bool {
        self.status == ExpenseStatus::Paid
    }
}

/// Closed category set used by the proportion chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Fixed,
    Variable,
}

impl ExpenseCategory {
    /// Case-insensitive match; accents are not folded.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "fixed" | "fixa" => Some(Self::Fixed),
            "variable" | "variavel" => Some(Self::Variable),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Variable => "variable",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseStatus {
    #[default]
    Pending,
    Paid,
}

impl FromStr for ExpenseStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" | "pendente" | "" => Ok(Self::Pending),
            "paid" | "pago" => Ok(Self::Paid),
            other => Err(format!("unknown status '{}'", other)),
        }
    }
}

impl fmt::Display for ExpenseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => f.write_str("pending"),
            Self::Paid => f.write_str("paid"),
        }
    }
}

impl<'de> Deserialize<'de> for ExpenseStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
