use chrono::{DateTime, Duration, TimeZone, Utc};
use interest_core::{
    config::EngineConfig,
    core::{AccrualEngine, AccrualOutcome},
    currency::Money,
    ledger::{InterestAccount, InterestRate, UserId},
    storage::{InMemoryTransactionRepository, TransactionRepository},
};

fn opened_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

fn user_id() -> UserId {
    UserId::new("88224979-406e-4e32-9458-55836e4e1f95").unwrap()
}

fn account_with_balance(rate: f64, pennies: i64) -> InterestAccount {
    let mut account = InterestAccount::new(user_id(), InterestRate::new(rate), opened_at());
    account.deposit(Money::new(pennies).unwrap()).unwrap();
    account
}

#[test]
fn not_due_before_three_days() {
    let engine = AccrualEngine::default();
    let mut repo = InMemoryTransactionRepository::new();
    let mut account = account_with_balance(1.02, 150_000);

    for days in 0..3 {
        let outcome = engine
            .evaluate(&mut account, opened_at() + Duration::days(days), &mut repo)
            .unwrap();
        assert!(matches!(outcome, AccrualOutcome::NotDue));
    }
    assert_eq!(account.last_accrual_at(), opened_at());
    assert_eq!(account.balance().pennies(), 150_000);
    assert!(repo.find_all().unwrap().is_empty());
}

#[test]
fn due_at_exactly_three_days_pays_out() {
    let engine = AccrualEngine::default();
    let mut repo = InMemoryTransactionRepository::new();
    let mut account = account_with_balance(1.02, 150_000);
    let at = opened_at() + Duration::days(3);

    let outcome = engine.evaluate(&mut account, at, &mut repo).unwrap();
    let transaction = match outcome {
        AccrualOutcome::Paid(txn) => txn,
        other => panic!("expected payout, got {other:?}"),
    };

    assert_eq!(transaction.amount.pennies(), 13);
    assert!(transaction.is_interest());
    assert_eq!(transaction.created_at, at);
    assert_eq!(account.balance().pennies(), 150_013);
    assert_eq!(account.last_accrual_at(), at);
    assert!(account.accumulated_interest().is_zero());
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[test]
fn due_evaluation_consumes_the_period() {
    let engine = AccrualEngine::default();
    let mut repo = InMemoryTransactionRepository::new();
    let mut account = account_with_balance(1.02, 150_000);
    let at = opened_at() + Duration::days(3);

    engine.evaluate(&mut account, at, &mut repo).unwrap();
    // Re-evaluating at the same date must be a no-op.
    let outcome = engine.evaluate(&mut account, at, &mut repo).unwrap();
    assert!(matches!(outcome, AccrualOutcome::NotDue));
    assert_eq!(repo.find_all().unwrap().len(), 1);
}

#[test]
fn sub_penny_interest_is_carried_not_paid() {
    let engine = AccrualEngine::default();
    let mut repo = InMemoryTransactionRepository::new();
    // 1000 pennies at 0.5%: one period earns ~0.04 pennies, rounding to zero.
    let mut account = account_with_balance(0.5, 1000);

    let first = opened_at() + Duration::days(3);
    let outcome = engine.evaluate(&mut account, first, &mut repo).unwrap();
    assert!(matches!(outcome, AccrualOutcome::Accumulated));
    assert_eq!(account.last_accrual_at(), first);
    assert_eq!(account.balance().pennies(), 1000);

    let second = opened_at() + Duration::days(6);
    let outcome = engine.evaluate(&mut account, second, &mut repo).unwrap();
    assert!(matches!(outcome, AccrualOutcome::Accumulated));
    assert!(repo.find_all().unwrap().is_empty());

    // A larger balance pushes the next cycle over the threshold.
    account.deposit(Money::new(500_000).unwrap()).unwrap();
    let third = opened_at() + Duration::days(9);
    let outcome = engine.evaluate(&mut account, third, &mut repo).unwrap();
    let transaction = match outcome {
        AccrualOutcome::Paid(txn) => txn,
        other => panic!("expected payout, got {other:?}"),
    };
    // 501000 pennies at 0.5% over one cycle is ~20.6 pennies.
    assert_eq!(transaction.amount.pennies(), 21);
    assert_eq!(account.balance().pennies(), 501_021);
    assert!(account.accumulated_interest().is_zero());
}

#[test]
fn zero_balance_account_accrues_nothing() {
    let engine = AccrualEngine::default();
    let mut repo = InMemoryTransactionRepository::new();
    let mut account = InterestAccount::new(user_id(), InterestRate::new(1.02), opened_at());

    let at = opened_at() + Duration::days(3);
    let outcome = engine.evaluate(&mut account, at, &mut repo).unwrap();
    assert!(matches!(outcome, AccrualOutcome::Accumulated));
    assert!(account.balance().is_zero());
    assert!(account.accumulated_interest().is_zero());
    assert_eq!(account.last_accrual_at(), at);
}

#[test]
fn custom_payout_threshold_defers_small_payouts() {
    let engine = AccrualEngine::new(EngineConfig {
        minimum_payout_pennies: 50,
    });
    let mut repo = InMemoryTransactionRepository::new();
    let mut account = account_with_balance(1.02, 150_000);

    // One cycle earns 13 pennies, below the raised threshold.
    let first = opened_at() + Duration::days(3);
    let outcome = engine.evaluate(&mut account, first, &mut repo).unwrap();
    assert!(matches!(outcome, AccrualOutcome::Accumulated));
    assert_eq!(account.accumulated_interest().pennies(), 13);
    assert_eq!(account.balance().pennies(), 150_000);

    // Accumulation keeps growing until the threshold is crossed.
    let mut at = first;
    let mut paid = None;
    for _ in 0..4 {
        at += Duration::days(3);
        if let AccrualOutcome::Paid(txn) = engine.evaluate(&mut account, at, &mut repo).unwrap() {
            paid = Some(txn);
            break;
        }
    }
    let transaction = paid.expect("threshold crossed after enough cycles");
    assert!(transaction.amount.pennies() >= 50);
    assert!(account.accumulated_interest().is_zero());
}
