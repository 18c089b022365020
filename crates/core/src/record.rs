use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::period::Timestamped;

/// A transaction in the budgeting tool's import shape: one row per movement,
/// with institution-specific fields already flattened away by the input
/// adapter that produced it.
///
/// `payee` stays `None` until enrichment resolves it; it is serialized as
/// `null` so downstream consumers can tell "unresolved" from a real name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetRecord {
    pub date: NaiveDate,
    pub payee: Option<String>,
    pub memo: String,
    pub amount: Decimal,
}

impl BudgetRecord {
    pub fn new(date: NaiveDate, memo: &str, amount: Decimal) -> Self {
        BudgetRecord {
            date,
            payee: None,
            memo: memo.to_string(),
            amount,
        }
    }
}

impl Timestamped for BudgetRecord {
    fn timestamp(&self) -> NaiveDate {
        self.date
    }
}
