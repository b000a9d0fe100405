use predicates::str::contains;

mod common;
use common::{demo_busy_args, rdp};

#[test]
fn test_find_slot_after_bound() {
    let mut args = vec!["find", "5", "--from", "10:20"];
    args.extend(demo_busy_args());

    rdp()
        .args(&args)
        .assert()
        .success()
        .stdout(contains("11:40-11:45"));
}

#[test]
fn test_find_slot_at_lower_bound() {
    rdp()
        .args(["find", "60", "--busy", "12:00-13:00"])
        .assert()
        .success()
        .stdout(contains("00:00-01:00"));
}

#[test]
fn test_find_slot_json_output() {
    rdp()
        .args(["find", "5", "--json", "--busy", "08:20-09:30"])
        .assert()
        .success()
        .stdout(contains("\"start_at\""))
        .stdout(contains("\"hour\": 0"))
        .stdout(contains("\"completed\": false"));
}

#[test]
fn test_find_fails_for_impossible_bounds() {
    rdp()
        .args([
            "find", "30", "--from", "10:00", "--to", "10:10", "--busy", "08:00-09:00",
        ])
        .assert()
        .failure()
        .stderr(contains("No free slot"));
}

#[test]
fn test_find_rejects_malformed_interval() {
    rdp()
        .args(["find", "10", "--busy", "9:00-10:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid interval format"));
}

#[test]
fn test_check_reports_free_slot() {
    rdp()
        .args(["check", "40", "--busy", "09:00-10:00"])
        .assert()
        .success()
        .stdout(contains("A free slot of 00h 40m exists"));
}

#[test]
fn test_check_more_than_a_day_is_never_free() {
    rdp()
        .args(["check", "1441"])
        .assert()
        .success()
        .stdout(contains("No free slot"));
}

#[test]
fn test_check_details_lists_scanned_windows() {
    rdp()
        .args(["check", "40", "--details", "--busy", "09:00-10:00"])
        .assert()
        .success()
        .stdout(contains("start"))
        .stdout(contains("10:00"))
        .stdout(contains("600"));
}

#[test]
fn test_check_warns_on_overlapping_busy_interval() {
    rdp()
        .args([
            "check",
            "30",
            "--busy",
            "09:00-10:00",
            "--busy",
            "09:30-09:45",
        ])
        .assert()
        .success()
        .stdout(contains("Skipped overlapping interval 09:30-09:45"));
}

#[test]
fn test_demo_toggle_status() {
    rdp()
        .args(["demo"])
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(contains("test 1"))
        .stdout(contains("00:01-00:09"))
        .stdout(contains("Found free slot: 11:40-11:45"))
        .stdout(contains("Removed item: 08:20-09:30"))
        .stdout(contains("Redo:"));
}

#[test]
fn test_demo_edit_description() {
    rdp()
        .args(["demo"])
        .write_stdin("3\nfocus block\n")
        .assert()
        .success()
        .stdout(contains("description: focus block"));
}

#[test]
fn test_demo_rejects_unknown_edit_choice() {
    rdp()
        .args(["demo"])
        .write_stdin("9\n")
        .assert()
        .failure()
        .stderr(contains("Invalid edit choice: 9"));
}

#[test]
fn test_config_path() {
    rdp()
        .args(["config", "--path"])
        .assert()
        .success()
        .stdout(contains("rdayplan.conf"));
}
