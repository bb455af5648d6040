//! Single-owner session tying the registry, ledger and balance together.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, info};
use tracker_domain::{Transaction, TransactionKind};

use crate::balance::BalanceAccumulator;
use crate::category_registry::CategoryRegistry;
use crate::entry_builder::EntryBuilder;
use crate::error::ValidationResult;
use crate::ledger::{LedgerSnapshot, TransactionLedger};
use crate::summary::LedgerSummary;
use crate::time::Clock;

/// In-memory state of one tracking session.
///
/// The ledger and balance are only reachable mutably through [`FinanceSession::record`],
/// which updates both before returning.
pub struct FinanceSession {
    clock: Arc<dyn Clock>,
    registry: CategoryRegistry,
    ledger: TransactionLedger,
    balance: BalanceAccumulator,
}

impl FinanceSession {
    /// Starts a session seeded with the default categories.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_registry(clock, CategoryRegistry::new())
    }

    /// Starts a session seeded with `seeds` instead of the defaults.
    pub fn with_categories<I, S>(clock: Arc<dyn Clock>, seeds: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_registry(clock, CategoryRegistry::seeded(seeds))
    }

    fn with_registry(clock: Arc<dyn Clock>, registry: CategoryRegistry) -> Self {
        info!(categories = registry.len(), "finance session started");
        Self {
            clock,
            registry,
            ledger: TransactionLedger::new(),
            balance: BalanceAccumulator::new(),
        }
    }

    pub fn categories(&self) -> &[String] {
        self.registry.list_categories()
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn add_category(&mut self, name: &str) -> ValidationResult<String> {
        self.registry.add_category(name)
    }

    /// Validates raw input against today's date and records it.
    ///
    /// Nothing in the session changes when validation fails.
    pub fn submit_entry(
        &mut self,
        kind: TransactionKind,
        raw_amount: &str,
        category: &str,
    ) -> ValidationResult<usize> {
        let transaction = EntryBuilder::build_with_clock(kind, raw_amount, category, &*self.clock)?;
        self.record(transaction)
    }

    /// Appends a built transaction and applies its balance delta.
    ///
    /// An unknown category is registered first so every entry refers to a listed name.
    /// If registering fails, neither the ledger nor the balance changes.
    pub fn record(&mut self, transaction: Transaction) -> ValidationResult<usize> {
        if !self.registry.contains(transaction.category()) {
            self.registry.add_category(transaction.category())?;
        }
        let kind = transaction.kind();
        let amount = transaction.amount();
        let index = self.ledger.append(transaction);
        self.balance.apply_delta(kind, amount);
        debug!(
            index,
            %kind,
            %amount,
            balance = %self.balance.current_balance(),
            "entry recorded"
        );
        Ok(index)
    }

    pub fn snapshot(&self) -> LedgerSnapshot {
        self.ledger.snapshot()
    }

    pub fn transaction_count(&self) -> usize {
        self.ledger.len()
    }

    pub fn balance(&self) -> Decimal {
        self.balance.current_balance()
    }

    /// Balance folded from the ledger; always equal to [`FinanceSession::balance`].
    pub fn recomputed_balance(&self) -> Decimal {
        BalanceAccumulator::fold(&self.ledger.snapshot())
    }

    pub fn summary(&self) -> LedgerSummary {
        LedgerSummary::from_transactions(&self.registry, &self.ledger.snapshot())
    }

    pub fn clock(&self) -> &dyn Clock {
        &*self.clock
    }
}
