use std::sync::Arc;

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use finance_tracker::domain::TransactionKind;
use finance_tracker::engine::{FinanceSession, FixedClock};

fn clock() -> Arc<FixedClock> {
    Arc::new(FixedClock::new(
        NaiveDate::from_ymd_opt(2025, 1, 1).expect("valid date"),
    ))
}

fn build_session(entries: usize) -> FinanceSession {
    let mut session = FinanceSession::new(clock());
    for idx in 0..entries {
        let kind = if idx % 4 == 0 {
            TransactionKind::Income
        } else {
            TransactionKind::Expense
        };
        let amount = format!("{}.{:02}", 10 + idx % 90, idx % 100);
        let category = session.categories()[idx % 4].clone();
        session
            .submit_entry(kind, &amount, &category)
            .expect("valid entry");
    }
    session
}

fn bench_submit(c: &mut Criterion) {
    c.bench_function("submit_10k_entries", |b| {
        b.iter_batched(
            || FinanceSession::new(clock()),
            |mut session| {
                for idx in 0..10_000 {
                    session
                        .submit_entry(TransactionKind::Expense, black_box("12.34"), "Groceries")
                        .expect("valid entry");
                    black_box(idx);
                }
                session
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_queries(c: &mut Criterion) {
    let session = build_session(10_000);

    c.bench_function("recompute_balance_10k", |b| {
        b.iter(|| black_box(session.recomputed_balance()))
    });

    c.bench_function("summary_10k", |b| b.iter(|| black_box(session.summary())));
}

criterion_group!(benches, bench_submit, bench_queries);
criterion_main!(benches);
