use rdayplan::core::schedule::DaySchedule;
use rdayplan::errors::AppError;
use rdayplan::models::clock_time::ClockTime;
use rdayplan::models::item::ScheduleItem;

fn t(hour: i32, minute: i32) -> ClockTime {
    ClockTime::new(hour, minute).expect("valid time")
}

fn item(start: (i32, i32), end: (i32, i32), description: &str, completed: bool) -> ScheduleItem {
    ScheduleItem::new(t(start.0, start.1), t(end.0, end.1), description, completed)
        .expect("valid item")
}

fn starts(schedule: &DaySchedule) -> Vec<String> {
    schedule
        .items()
        .iter()
        .map(|i| i.start_at().to_string())
        .collect()
}

#[test]
fn test_clock_renders_zero_padded() {
    assert_eq!(t(7, 5).to_string(), "07:05");
    assert_eq!(t(0, 0).to_string(), "00:00");
    assert_eq!(t(23, 59).to_string(), "23:59");
}

#[test]
fn test_clock_minute_sixty_rolls_over() {
    assert_eq!(t(9, 60), t(10, 0));
}

#[test]
fn test_clock_rejects_out_of_range_components() {
    assert!(matches!(
        ClockTime::new(24, 0),
        Err(AppError::InvalidTime(_))
    ));
    assert!(matches!(
        ClockTime::new(23, 60),
        Err(AppError::InvalidTime(_))
    ));
    assert!(matches!(
        ClockTime::new(-1, 30),
        Err(AppError::InvalidTime(_))
    ));
    assert!(matches!(
        ClockTime::new(12, -1),
        Err(AppError::InvalidTime(_))
    ));
}

#[test]
fn test_item_requires_start_strictly_before_end() {
    assert!(matches!(
        ScheduleItem::new(t(10, 0), t(9, 0), "inverted", false),
        Err(AppError::InvalidInterval(_))
    ));
    assert!(matches!(
        ScheduleItem::new(t(10, 0), t(10, 0), "empty", false),
        Err(AppError::InvalidInterval(_))
    ));
}

#[test]
fn test_item_setters_enforce_strict_order_both_directions() {
    let mut it = item((9, 0), (10, 0), "walk", false);

    assert!(matches!(
        it.set_start(t(10, 0)),
        Err(AppError::InvalidInterval(_))
    ));
    assert!(matches!(
        it.set_end(t(9, 0)),
        Err(AppError::InvalidInterval(_))
    ));

    it.set_start(t(8, 30)).expect("earlier start is fine");
    it.set_end(t(10, 30)).expect("later end is fine");
    assert_eq!(it.start_at(), t(8, 30));
    assert_eq!(it.end_at(), t(10, 30));
}

#[test]
fn test_first_item_is_appended_unconditionally() {
    let mut schedule = DaySchedule::new();

    assert!(schedule.add(item((8, 0), (9, 0), "first", false)));
    assert_eq!(schedule.len(), 1);

    // An identical duplicate is an overlap once the schedule is non-empty.
    assert!(!schedule.add(item((8, 0), (9, 0), "twin", false)));
    assert_eq!(schedule.len(), 1);
}

#[test]
fn test_adds_keep_items_sorted_by_start() {
    let mut schedule = DaySchedule::new();

    assert!(schedule.add(item((0, 10), (2, 20), "test 1", true)));
    // Fits entirely before the first item: none of the three overlap cases
    // fires, so it is inserted, not rejected.
    assert!(schedule.add(item((0, 1), (0, 9), "test 3", false)));
    assert!(schedule.add(item((10, 20), (11, 40), "test 2", false)));
    assert!(schedule.add(item((8, 20), (9, 30), "test 4", false)));

    assert_eq!(schedule.len(), 4);
    assert_eq!(starts(&schedule), ["00:01", "00:10", "08:20", "10:20"]);
}

#[test]
fn test_overlapping_add_is_rejected_without_mutation() {
    let mut schedule = DaySchedule::new();
    schedule.add(item((8, 20), (9, 30), "standup", false));
    let before = schedule.to_string();

    // start falls inside the existing item
    assert!(!schedule.add(item((9, 0), (10, 0), "late", false)));
    // end falls inside the existing item's tail
    assert!(!schedule.add(item((8, 0), (9, 0), "early", false)));
    // new item fully contains the existing one
    assert!(!schedule.add(item((8, 0), (10, 0), "around", false)));

    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule.to_string(), before);
}

#[test]
fn test_back_to_back_intervals_are_not_overlapping() {
    let mut schedule = DaySchedule::new();
    schedule.add(item((9, 0), (10, 0), "first", false));

    assert!(schedule.can_add(t(10, 0), t(11, 0)));
    assert!(schedule.add(item((10, 0), (11, 0), "second", false)));
    assert_eq!(schedule.len(), 2);
}

#[test]
fn test_remove_shifts_following_items_down() {
    let mut schedule = DaySchedule::new();
    schedule.add(item((8, 0), (9, 0), "a", false));
    schedule.add(item((10, 0), (11, 0), "b", false));
    schedule.add(item((12, 0), (13, 0), "c", false));

    let removed = schedule.remove(0).expect("index 0 exists");
    assert_eq!(removed.description(), "a");

    assert_eq!(schedule.get(0).expect("shifted").description(), "b");
    assert_eq!(schedule.get(1).expect("shifted").description(), "c");
}

#[test]
fn test_positional_access_rejects_index_equal_to_size() {
    let mut schedule = DaySchedule::new();
    schedule.add(item((8, 0), (9, 0), "only", false));

    assert!(matches!(
        schedule.remove(1),
        Err(AppError::IndexOutOfRange(1))
    ));
    assert!(matches!(schedule.get(1), Err(AppError::IndexOutOfRange(1))));
    assert_eq!(schedule.len(), 1);
}

#[test]
fn test_filter_incomplete_keeps_order_and_source() {
    let mut schedule = DaySchedule::new();
    schedule.add(item((8, 0), (9, 0), "done early", true));
    schedule.add(item((10, 0), (11, 0), "open mid", false));
    schedule.add(item((12, 0), (13, 0), "open late", false));

    let redo = schedule.filter_incomplete();

    assert_eq!(redo.len(), 2);
    assert!(redo.items().iter().all(|i| !i.is_completed()));
    assert_eq!(starts(&redo), ["10:00", "12:00"]);

    // source untouched
    assert_eq!(schedule.len(), 3);
}

#[test]
fn test_schedule_render_format() {
    let mut schedule = DaySchedule::new();
    schedule.add(item((8, 20), (9, 30), "standup", false));

    assert_eq!(
        schedule.to_string(),
        "0\t08:20-09:30\t|\tto do\t|\tdescription: standup\n"
    );
}

#[test]
fn test_item_render_reports_completion() {
    let open = item((8, 20), (9, 30), "standup", false);
    let done = item((8, 20), (9, 30), "standup", true);

    assert_eq!(
        open.to_string(),
        "08:20-09:30\t|\tto do\t|\tdescription: standup"
    );
    assert_eq!(
        done.to_string(),
        "08:20-09:30\t|\tdone\t|\tdescription: standup"
    );
}

#[test]
fn test_update_at_moves_item_within_its_gap() {
    let mut schedule = DaySchedule::new();
    schedule.add(item((8, 0), (9, 0), "fixed", false));
    schedule.add(item((11, 0), (12, 0), "movable", false));

    let updated = schedule
        .update_at(1, |it| it.set_start(t(9, 30)))
        .expect("no overlap");

    assert_eq!(updated.start_at(), t(9, 30));
    assert_eq!(starts(&schedule), ["08:00", "09:30"]);
}

#[test]
fn test_update_at_rolls_back_on_overlap() {
    let mut schedule = DaySchedule::new();
    schedule.add(item((8, 0), (8, 10), "tiny", false));
    schedule.add(item((8, 30), (8, 40), "second", false));
    let before = schedule.to_string();

    // Moving the start before "tiny" makes the edited item swallow it.
    let result = schedule.update_at(1, |it| it.set_start(t(7, 0)));

    assert!(matches!(result, Err(AppError::Overlap(_))));
    assert_eq!(schedule.to_string(), before);
}
