use chrono::NaiveDate;
use superhabit_core::{
    Activity, FixedClock, Snapshot, SnapshotError, StateStore, DEFAULT_QUICK_ACTIVITY_TITLE,
};

fn exam_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 1).unwrap()
}

fn setup() -> StateStore<FixedClock> {
    StateStore::with_clock(FixedClock(exam_day()))
}

fn active_ids(snapshot: &Snapshot) -> Vec<i64> {
    snapshot.active_activities().map(|activity| activity.id).collect()
}

#[test]
fn new_store_starts_from_seed() {
    let store = setup();
    assert_eq!(*store.snapshot(), Snapshot::seed());
}

#[test]
fn added_ids_are_strictly_increasing_and_unique() {
    let mut store = setup();
    store.add_quick_activity("one");
    store.add_activity("two", "Goals");
    store.archive_activity(5);
    store.add_quick_activity(DEFAULT_QUICK_ACTIVITY_TITLE);
    store.add_activity("four", "Somewhere");

    let snapshot = store.snapshot();
    let ids: Vec<i64> = snapshot.activities.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7]);
    assert!(ids.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn quick_activity_goes_to_other_group() {
    let mut store = setup();
    let snapshot = store.add_quick_activity(DEFAULT_QUICK_ACTIVITY_TITLE);
    let added = snapshot.activities.last().unwrap();
    assert_eq!(
        *added,
        Activity {
            id: 4,
            title: "New activity".to_string(),
            is_done: false,
            group: "Other".to_string(),
            is_archived: false,
        }
    );
}

#[test]
fn toggle_round_trip_restores_only_done_flag() {
    let mut store = setup();
    let original = store.snapshot().find_activity(2).unwrap().clone();

    let done = store.toggle_activity(2, true);
    assert!(done.find_activity(2).unwrap().is_done);

    let undone = store.toggle_activity(2, false);
    assert_eq!(*undone.find_activity(2).unwrap(), original);
    assert_eq!(*undone, Snapshot::seed());
}

#[test]
fn toggle_unknown_id_is_noop() {
    let mut store = setup();
    let snapshot = store.toggle_activity(42, true);
    assert_eq!(*snapshot, Snapshot::seed());
}

#[test]
fn archive_is_idempotent_and_hides_activity() {
    let mut once = setup();
    once.archive_activity(1);

    let mut twice = setup();
    twice.archive_activity(1);
    twice.archive_activity(1);

    assert_eq!(*once.snapshot(), *twice.snapshot());
    assert_eq!(active_ids(&once.snapshot()), vec![2, 3]);
    assert_eq!(once.snapshot().activities.len(), 3);
    assert!(once.snapshot().find_activity(1).unwrap().is_archived);
}

#[test]
fn archive_unknown_id_is_noop() {
    let mut store = setup();
    assert_eq!(*store.archive_activity(99), Snapshot::seed());
}

#[test]
fn archived_activity_can_still_be_toggled() {
    let mut store = setup();
    store.archive_activity(3);
    let snapshot = store.toggle_activity(3, true);
    let activity = snapshot.find_activity(3).unwrap();
    assert!(activity.is_done);
    assert!(activity.is_archived);
}

#[test]
fn blank_group_names_are_ignored() {
    let mut store = setup();
    assert_eq!(store.add_group("").groups.len(), 2);
    assert_eq!(store.add_group("   \t").groups.len(), 2);
}

#[test]
fn groups_append_trimmed_and_allow_duplicates() {
    let mut store = setup();
    store.add_group("  Health ");
    let snapshot = store.add_group("Goals");
    assert_eq!(snapshot.groups, vec!["Goals", "Other", "Health", "Goals"]);
}

#[test]
fn activity_group_is_not_validated() {
    let mut store = setup();
    let snapshot = store.add_activity("Call grandma", "Family");
    assert_eq!(snapshot.activities.last().unwrap().group, "Family");
    assert!(!snapshot.groups.iter().any(|group| group == "Family"));
}

#[test]
fn blank_titles_are_ignored() {
    let mut store = setup();
    store.add_activity("  ", "Goals");
    store.add_quick_activity("");
    store.add_milestone(" ");
    assert_eq!(*store.snapshot(), Snapshot::seed());
}

#[test]
fn activity_title_and_group_are_trimmed() {
    let mut store = setup();
    let snapshot = store.add_activity("  Read  ", " Goals ");
    let added = snapshot.activities.last().unwrap();
    assert_eq!(added.title, "Read");
    assert_eq!(added.group, "Goals");

    let snapshot = store.add_quick_activity("\tStretch \n");
    assert_eq!(snapshot.activities.last().unwrap().title, "Stretch");
}

#[test]
fn milestone_title_is_trimmed() {
    let mut store = setup();
    let snapshot = store.add_milestone(" Exam day ");
    assert_eq!(snapshot.milestones[0].title, "Exam day");
}

#[test]
fn daily_note_is_overwritten_including_empty() {
    let mut store = setup();
    store.set_daily_note("first");
    assert_eq!(store.set_daily_note("second").daily_note, "second");
    assert_eq!(store.set_daily_note("").daily_note, "");
}

#[test]
fn reset_after_mixed_operations_returns_seed() {
    let mut store = setup();
    store.set_daily_note("note");
    store.add_group("Health");
    store.add_activity("Run", "Health");
    store.toggle_activity(1, true);
    store.archive_activity(2);
    store.add_milestone("Birthday");

    assert_eq!(*store.reset_all(), Snapshot::seed());
}

#[test]
fn ids_restart_after_reset() {
    let mut store = setup();
    store.add_quick_activity("a");
    store.add_quick_activity("b");
    store.reset_all();
    let snapshot = store.add_quick_activity("c");
    assert_eq!(snapshot.activities.last().unwrap().id, 4);
}

#[test]
fn scenario_add_archive_milestone_reset() {
    let mut store = setup();
    let seed = store.snapshot();
    assert_eq!(seed.activities.len(), 3);
    assert_eq!(seed.groups.len(), 2);
    assert_eq!(seed.milestones.len(), 0);

    let snapshot = store.add_activity("Read 20 pages", "Goals");
    assert_eq!(snapshot.activities.len(), 4);
    let added = snapshot.find_activity(4).unwrap();
    assert_eq!(added.title, "Read 20 pages");
    assert!(!added.is_done);
    assert!(!added.is_archived);

    let snapshot = store.archive_activity(4);
    assert_eq!(snapshot.active_activities().count(), 3);

    let snapshot = store.add_milestone("Exam day");
    assert_eq!(snapshot.milestones.len(), 1);
    assert_eq!(snapshot.milestones[0].title, "Exam day");
    assert_eq!(snapshot.milestones[0].date, exam_day());

    let snapshot = store.reset_all();
    let ids: Vec<i64> = snapshot.activities.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert_eq!(snapshot.groups, vec!["Goals", "Other"]);
    assert!(snapshot.milestones.is_empty());
    assert_eq!(snapshot.daily_note, "");
}

#[test]
fn system_clock_dates_milestones_today() {
    let mut store = StateStore::new();
    let before = chrono::Local::now().date_naive();
    let snapshot = store.add_milestone("Exam day");
    let after = chrono::Local::now().date_naive();

    let date = snapshot.milestones[0].date;
    assert!(before <= date && date <= after);
}

#[test]
fn restore_replaces_state_and_continues_ids() {
    let mut source = setup();
    source.add_activity("Read", "Goals");
    source.add_activity("Write", "Goals");
    source.add_milestone("Exam day");
    let saved = Snapshot::from_json(&source.snapshot().to_json().unwrap()).unwrap();

    let mut store = setup();
    store.restore(saved.clone()).unwrap();
    assert_eq!(*store.snapshot(), saved);

    let snapshot = store.add_quick_activity("next");
    assert_eq!(snapshot.activities.last().unwrap().id, 6);
}

#[test]
fn restore_rejects_duplicate_ids_and_keeps_state() {
    let mut store = setup();
    store.set_daily_note("keep me");

    let mut bad = Snapshot::seed();
    bad.activities.push(Activity::new(1, "dup", "Goals"));
    assert!(store.restore(bad).is_err());
    assert_eq!(store.snapshot().daily_note, "keep me");
}

#[test]
fn restore_rejects_max_id_so_adding_never_overflows() {
    let raw = format!(
        r#"{{"daily_note":"","activities":[{{"id":{},"title":"last","is_done":false,"group":"Other","is_archived":false}}],"groups":[],"milestones":[]}}"#,
        i64::MAX
    );
    let err = Snapshot::from_json(&raw).unwrap_err();
    assert!(matches!(err, SnapshotError::ActivityIdExhausted(_)));

    let mut store = setup();
    let mut full = Snapshot::seed();
    full.activities.push(Activity::new(i64::MAX, "last", "Other"));
    assert!(store.restore(full).is_err());

    let snapshot = store.add_quick_activity("next");
    assert_eq!(snapshot.activities.last().unwrap().id, 4);
}

#[test]
fn restore_with_lower_max_id_reuses_ids() {
    let mut store = setup();
    store.add_quick_activity("a");
    store.add_quick_activity("b");
    store.restore(Snapshot::seed()).unwrap();

    let snapshot = store.add_quick_activity("c");
    assert_eq!(snapshot.activities.last().unwrap().id, 4);
}
