use monthly_savings::{ExpenseForm, Ledger, LedgerError, Month, Savings,
    backend::{JsonFileStore, LedgerStore, MemoryStore},
    savings::{month_savings, total_savings}};

use rust_decimal_macros::dec;
use rstest::{fixture, rstest};

fn form(month: &str, date: &str, amount: &str, salary: &str) -> ExpenseForm {
    ExpenseForm {
        month: month.into(),
        date: date.into(),
        amount: amount.into(),
        category: "General".into(),
        description: "Spent".into(),
        salary: salary.into()
    }
}

#[fixture]
fn ledger() -> Ledger {
    let ledger = Ledger::new();
    let ledger = form("January", "2024-01-04", "150", "1000").submit(&ledger).unwrap();
    let ledger = form("January", "2024-01-19", "50", "").submit(&ledger).unwrap();
    let ledger = form("February", "2024-02-02", "50", "").submit(&ledger).unwrap();
    ledger
}

#[rstest]
fn session_savings(ledger: Ledger) {
    let january = ledger.record(Month::January).unwrap();
    let february = ledger.record(Month::February).unwrap();

    assert_eq!(month_savings(&january.entries, january.salary).to_string(), "800.00");
    assert_eq!(month_savings(&february.entries, february.salary), Savings::Undefined);
    assert_eq!(total_savings(&ledger), dec!(800));
}

#[rstest]
fn session_survives_restart(ledger: Ledger) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");

    LedgerStore::new(JsonFileStore::new(&path)).save(&ledger).unwrap();
    let restored = LedgerStore::new(JsonFileStore::new(&path)).load();

    assert_eq!(restored, ledger);
    assert_eq!(total_savings(&restored), dec!(800));
}

#[rstest]
fn delete_then_save(ledger: Ledger) {
    let store = LedgerStore::new(MemoryStore::new());
    store.save(&ledger).unwrap();

    let current = store.load();
    let updated = current.delete_entry(Month::January, 1).unwrap();
    store.save(&updated).unwrap();

    let reloaded = store.load();
    assert_eq!(reloaded.entries(Month::January).len(), 1);
    assert_eq!(reloaded.salary(Month::January), Some(dec!(1000)));
    assert_eq!(reloaded.entries(Month::February), ledger.entries(Month::February));
    assert_eq!(total_savings(&reloaded), dec!(850));
}

#[rstest]
fn rejected_delete_leaves_ledger(ledger: Ledger) {
    let res = ledger.delete_entry(Month::March, 0);
    assert!(matches!(res, Err(LedgerError::InvalidIndex { .. })));
    assert_eq!(ledger.entries(Month::January).len(), 2);
}

#[test]
fn oversized_amounts_rejected_on_submit() {
    let max = rust_decimal::Decimal::MAX.to_string();
    let ledger = form("May", "2024-05-01", &max, "").submit(&Ledger::new()).unwrap();

    let mut second = form("May", "2024-05-02", &max, "");
    let res = second.submit(&ledger);

    assert!(matches!(res, Err(LedgerError::AmountOverflow(Month::May))));
    assert_eq!(ledger.entries(Month::May).len(), 1);
    assert_eq!(total_savings(&ledger), dec!(0));
}
