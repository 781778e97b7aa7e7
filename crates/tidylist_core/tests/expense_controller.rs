use tidylist_core::db::DbError;
use tidylist_core::store::RawStore;
use tidylist_core::view::{ExpenseIntent, ANCHOR_PIE_CHART};
use tidylist_core::{
    Category, ChartKind, ControllerError, Expense, ExpenseController, ExpensePayload, ListStore,
    MemoryListStore, MemorySurface, StoreError, StoreResult, ViewError,
};

/// Reads as empty and rejects every write.
struct ReadOnlyStore;

impl RawStore for ReadOnlyStore {
    fn read_raw(&self, _key: &str) -> StoreResult<Option<String>> {
        Ok(None)
    }

    fn write_raw(&self, _key: &str, _value: &str) -> StoreResult<()> {
        Err(StoreError::Db(DbError::Sqlite(rusqlite::Error::InvalidQuery)))
    }
}

fn controller(store: &MemoryListStore) -> ExpenseController<&MemoryListStore, MemorySurface> {
    ExpenseController::new(store, MemorySurface::for_expenses()).unwrap()
}

fn payload(amount: &str, description: &str, category: &str) -> ExpensePayload {
    ExpensePayload::new(amount, description, category)
}

#[test]
fn startup_populates_category_options_and_empty_charts() {
    let store = MemoryListStore::new();
    let expenses = controller(&store);
    let surface = expenses.surface();

    let values: Vec<&str> = surface
        .category_options()
        .iter()
        .map(|option| option.value.as_str())
        .collect();
    let expected: Vec<&str> = Category::ALL.iter().map(|category| category.as_str()).collect();
    assert_eq!(values, expected);

    assert!(surface.expense_rows().is_empty());
    for kind in ChartKind::ALL {
        assert!(surface.chart(kind).unwrap().is_empty());
    }
}

#[test]
fn add_parses_payload_and_persists() {
    let store = MemoryListStore::new();
    let mut expenses = controller(&store);

    let id = expenses
        .add(&payload("12.5", "lunch", "food"))
        .unwrap()
        .expect("valid payload is accepted");

    let expense = expenses.get(id).unwrap();
    assert_eq!(expense.amount, 12.5);
    assert_eq!(expense.description, "lunch");
    assert_eq!(expense.category, Category::Food);
    assert_eq!(expense.date.len(), "2024-01-31".len());

    let saved: Vec<Expense> = store.load("expenses");
    assert_eq!(saved, expenses.expenses());
    assert_eq!(expenses.surface().expense_rows()[0].amount_display, "₹12.50");
}

#[test]
fn invalid_payloads_are_no_ops() {
    let store = MemoryListStore::new();
    let mut expenses = controller(&store);
    let renders_before = expenses.surface().expense_render_count();

    for rejected in [
        payload("", "lunch", "food"),
        payload("-4", "lunch", "food"),
        payload("abc", "lunch", "food"),
        payload("4", "   ", "food"),
        payload("4", "lunch", ""),
        payload("4", "lunch", "groceries"),
    ] {
        assert_eq!(expenses.add(&rejected).unwrap(), None, "{rejected:?}");
    }

    assert!(expenses.expenses().is_empty());
    assert!(store.raw("expenses").is_none());
    assert_eq!(expenses.surface().expense_render_count(), renders_before);
}

#[test]
fn totals_sum_per_category() {
    let store = MemoryListStore::new();
    let mut expenses = controller(&store);
    expenses.add(&payload("10", "groceries", "food")).unwrap();
    expenses.add(&payload("5", "snack", "food")).unwrap();
    expenses.add(&payload("3", "bus", "travel")).unwrap();

    let totals = expenses.calculate_category_totals();

    assert_eq!(totals.len(), 2);
    assert_eq!(totals.get(Category::Food), Some(15.0));
    assert_eq!(totals.get(Category::Travel), Some(3.0));
    assert_eq!(totals.get(Category::Health), None);
    assert_eq!(expenses.grand_total(), 18.0);
}

#[test]
fn empty_collection_has_empty_totals() {
    let store = MemoryListStore::new();
    let expenses = controller(&store);

    assert!(expenses.calculate_category_totals().is_empty());
    assert_eq!(expenses.grand_total(), 0.0);
}

#[test]
fn both_charts_follow_the_totals() {
    let store = MemoryListStore::new();
    let mut expenses = controller(&store);
    expenses.add(&payload("3", "bus", "travel")).unwrap();
    expenses.add(&payload("10", "groceries", "food")).unwrap();

    let surface = expenses.surface();
    for kind in ChartKind::ALL {
        let chart = surface.chart(kind).unwrap();
        assert_eq!(chart.labels, vec!["food", "travel"]);
        assert_eq!(chart.data, vec![10.0, 3.0]);
        assert_eq!(
            chart.colors,
            vec![Category::Food.color(), Category::Travel.color()]
        );
    }
}

#[test]
fn delete_removes_expense_and_updates_totals() {
    let store = MemoryListStore::new();
    let mut expenses = controller(&store);
    let keep = expenses.add(&payload("10", "groceries", "food")).unwrap().unwrap();
    let drop = expenses.add(&payload("3", "bus", "travel")).unwrap().unwrap();

    assert!(expenses.delete(drop).unwrap());
    assert!(!expenses.delete(drop).unwrap());

    assert_eq!(expenses.expenses().len(), 1);
    assert_eq!(expenses.expenses()[0].id, keep);
    assert_eq!(expenses.calculate_category_totals().get(Category::Travel), None);
    let pie = expenses.surface().chart(ChartKind::Pie).unwrap();
    assert_eq!(pie.labels, vec!["food"]);
    assert_eq!(store.load::<Expense>("expenses").len(), 1);
}

#[test]
fn row_delete_intent_routes_to_controller() {
    let store = MemoryListStore::new();
    let mut expenses = controller(&store);
    expenses.add(&payload("7", "cinema", "entertainment")).unwrap();

    let intent = expenses.surface().expense_rows()[0].delete_intent();
    assert!(matches!(intent, ExpenseIntent::Delete(_)));
    assert!(expenses.handle(intent).unwrap());

    assert!(expenses.expenses().is_empty());
    assert!(expenses.surface().expense_rows().is_empty());
}

#[test]
fn saved_expenses_are_loaded_on_startup() {
    let store = MemoryListStore::new();
    let seeded = vec![
        Expense::new(20.0, "pharmacy", Category::Health).unwrap(),
        Expense::new(8.0, "phone", Category::Bills).unwrap(),
    ];
    store.save("expenses", &seeded).unwrap();

    let mut expenses = controller(&store);
    assert_eq!(expenses.expenses(), seeded.as_slice());
    assert_eq!(expenses.surface().expense_rows().len(), 2);

    let added = expenses.add(&payload("1", "stamp", "other")).unwrap().unwrap();
    assert!(seeded.iter().all(|expense| expense.id < added));
}

#[test]
fn missing_chart_anchor_is_a_startup_failure() {
    let store = MemoryListStore::new();
    let surface = MemorySurface::with_anchors(&["expenseTableBody", "category", "barChart"]);

    let err = ExpenseController::new(&store, surface).err().unwrap();

    assert!(matches!(
        err,
        ControllerError::View(ViewError::MissingAnchor(ANCHOR_PIE_CHART))
    ));
}

#[test]
fn failed_save_keeps_expense_and_redraws_table_and_charts() {
    let mut expenses =
        ExpenseController::new(ReadOnlyStore, MemorySurface::for_expenses()).unwrap();
    let renders_before = expenses.surface().expense_render_count();
    let chart_updates_before = expenses.surface().chart_update_count();

    let err = expenses.add(&payload("4.5", "coffee", "food")).unwrap_err();

    assert!(matches!(err, ControllerError::Store(_)));
    assert_eq!(expenses.expenses().len(), 1);
    assert_eq!(expenses.calculate_category_totals().get(Category::Food), Some(4.5));
    let surface = expenses.surface();
    assert_eq!(surface.expense_render_count(), renders_before + 1);
    assert_eq!(surface.expense_rows().len(), 1);
    assert_eq!(surface.chart_update_count(), chart_updates_before + 2);
    assert_eq!(surface.chart(ChartKind::Bar).unwrap().data, vec![4.5]);
}
