use tempfile::TempDir;

use wanderlust::models::plan::{Plan, PlanType, TypeCounts};
use wanderlust::store::PlanStore;

fn store_in(dir: &TempDir) -> PlanStore {
    PlanStore::new(dir.path().join("plans.json"))
}

fn plan(title: &str, plan_type: PlanType) -> Plan {
    Plan {
        id: String::new(),
        title: title.to_string(),
        date: Some("2026-03-15".to_string()),
        plan_type,
        location: "Paris".to_string(),
        extra: None,
    }
}

#[test]
fn saves_preserve_insertion_order_with_unique_ids() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(plan("first", PlanType::Holiday)).unwrap();
    store.save(plan("second", PlanType::Event)).unwrap();
    store.save(plan("third", PlanType::LongWeekend)).unwrap();

    let plans = store.list();
    let titles: Vec<&str> = plans.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["first", "second", "third"]);

    let mut ids: Vec<&str> = plans.iter().map(|p| p.id.as_str()).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);
    assert!(plans.iter().all(|p| !p.id.is_empty()));
}

#[test]
fn empty_title_is_rejected_silently() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(plan("", PlanType::Holiday)).unwrap();
    store.save(plan("   ", PlanType::Event)).unwrap();

    assert!(store.list().is_empty());
}

#[test]
fn provided_id_is_kept() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    let mut keeper = plan("keeper", PlanType::Event);
    keeper.id = "evt-42".to_string();
    store.save(keeper).unwrap();

    assert_eq!(store.list()[0].id, "evt-42");
}

#[test]
fn delete_removes_exactly_one_and_ignores_unknown_ids() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(plan("a", PlanType::Holiday)).unwrap();
    store.save(plan("b", PlanType::Event)).unwrap();
    let target = store.list()[0].id.clone();

    store.delete(&target).unwrap();
    assert_eq!(store.list().len(), 1);
    assert_eq!(store.list()[0].title, "b");

    store.delete("no-such-id").unwrap();
    assert_eq!(store.list().len(), 1);
}

#[test]
fn clear_empties_the_collection() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(plan("a", PlanType::Holiday)).unwrap();
    store.save(plan("b", PlanType::Event)).unwrap();
    store.clear().unwrap();

    assert!(store.list().is_empty());
    assert_eq!(store.counts_by_type(), TypeCounts::default());
}

#[test]
fn counts_by_type_sums_to_total() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(plan("h1", PlanType::Holiday)).unwrap();
    store.save(plan("e1", PlanType::Event)).unwrap();
    store.save(plan("h2", PlanType::Holiday)).unwrap();
    store.save(plan("lw", PlanType::LongWeekend)).unwrap();

    let counts = store.counts_by_type();
    assert_eq!(counts.all, 4);
    assert_eq!(counts.holiday, 2);
    assert_eq!(counts.event, 1);
    assert_eq!(counts.longweekend, 1);

    // Idempotent without mutation in between.
    assert_eq!(store.counts_by_type(), counts);
}

#[test]
fn unrecognized_type_counts_toward_total_only() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);

    store.save(plan("h", PlanType::Holiday)).unwrap();
    store.save(plan("mystery", PlanType::Other)).unwrap();

    let counts = store.counts_by_type();
    assert_eq!(counts.all, 2);
    assert_eq!(counts.holiday, 1);
    assert_eq!(counts.event + counts.longweekend, 0);
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let store = store_in(&dir);
    assert!(store.list().is_empty());
}

#[test]
fn corrupt_backing_data_reads_as_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plans.json");
    std::fs::write(&path, "{ not json at all").unwrap();

    let store = PlanStore::new(&path);
    assert!(store.list().is_empty());
    assert_eq!(store.counts_by_type().all, 0);

    // Saving over corrupt data starts a fresh collection.
    store.save(plan("fresh", PlanType::Event)).unwrap();
    assert_eq!(store.list().len(), 1);
}

#[test]
fn unknown_type_strings_deserialize_as_other() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("plans.json");
    std::fs::write(
        &path,
        r#"[{"id":"1","title":"old","type":"festival","location":"Lyon"}]"#,
    )
    .unwrap();

    let store = PlanStore::new(&path);
    let plans = store.list();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].plan_type, PlanType::Other);
}
