use rust_decimal::Decimal;
use tracker_domain::{Transaction, TransactionKind};

use crate::category_registry::CategoryRegistry;

/// Totals for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub income: Decimal,
    pub expense: Decimal,
}

impl CategoryTotal {
    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

/// Aggregate view of a ledger snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LedgerSummary {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub transaction_count: usize,
    pub per_category: Vec<CategoryTotal>,
}

impl LedgerSummary {
    /// Sums `transactions`, listing categories in registry order.
    ///
    /// Categories without activity are left out.
    pub fn from_transactions<'a, I>(registry: &CategoryRegistry, transactions: I) -> Self
    where
        I: IntoIterator<Item = &'a Transaction>,
    {
        let mut summary = LedgerSummary::default();
        let mut per_category: Vec<CategoryTotal> = Vec::new();

        for txn in transactions {
            summary.transaction_count += 1;
            let total = match per_category
                .iter()
                .position(|entry| entry.category == txn.category())
            {
                Some(idx) => &mut per_category[idx],
                None => {
                    per_category.push(CategoryTotal {
                        category: txn.category().to_string(),
                        income: Decimal::ZERO,
                        expense: Decimal::ZERO,
                    });
                    let last = per_category.len() - 1;
                    &mut per_category[last]
                }
            };
            match txn.kind() {
                TransactionKind::Income => {
                    summary.total_income += txn.amount();
                    total.income += txn.amount();
                }
                TransactionKind::Expense => {
                    summary.total_expense += txn.amount();
                    total.expense += txn.amount();
                }
            }
        }

        let order = registry.list_categories();
        per_category.sort_by_key(|entry| {
            order
                .iter()
                .position(|name| *name == entry.category)
                .unwrap_or(order.len())
        });
        summary.per_category = per_category;
        summary
    }

    pub fn net(&self) -> Decimal {
        self.total_income - self.total_expense
    }
}
