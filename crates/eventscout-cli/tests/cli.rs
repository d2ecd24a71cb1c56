use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const EVENTS: &str = r#"[
    {
        "id": "c00k1ng0000000000000000000000001",
        "name": "Cooking Masterclass: Italian Cuisine",
        "type": "Cooking",
        "address": "Culinary Institute, 789 Food Avenue, Queens, NY 11375",
        "description": "Master the art of Italian cooking!",
        "date": "2024-06-22T16:00:00Z",
        "duration": "6 hours",
        "maxParticipants": 16,
        "currentParticipants": 14,
        "difficulty": "Intermediate",
        "requirements": ["Apron", "Appetite for learning!"],
        "organizer": "Chef Antonio Rossi",
        "contact": "antonio.chef@email.com"
    },
    {
        "id": "ph0t0000000000000000000000000001",
        "name": "Weekend Photography Workshop",
        "type": "Photography",
        "address": "Central Park, New York, NY 10024",
        "description": "Learn the fundamentals of landscape and portrait photography.",
        "date": "2024-06-15T09:00:00Z",
        "duration": "4 hours",
        "maxParticipants": 15,
        "currentParticipants": 8,
        "difficulty": "Beginner",
        "requirements": ["DSLR or Mirrorless Camera", "Comfortable walking shoes"],
        "organizer": "Sarah Johnson",
        "contact": "sarah.photo@email.com"
    },
    {
        "id": "p0773ry000000000000000000000001",
        "name": "Pottery Making for Beginners",
        "type": "Ceramics",
        "address": "Artisan Studio, 45 Clay Street, Brooklyn, NY 11201",
        "description": "Create your own ceramic pieces from scratch!",
        "date": "2024-06-18T14:00:00Z",
        "duration": "3 hours",
        "maxParticipants": 12,
        "currentParticipants": 5,
        "difficulty": "Beginner",
        "requirements": ["Apron or old clothes", "Towel"],
        "organizer": "Michael Chen",
        "contact": "mike.pottery@email.com"
    }
]"#;

fn write_store(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("events.json");
    std::fs::write(&path, EVENTS).unwrap();
    path
}

fn eventscout(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("eventscout").unwrap();
    cmd.current_dir(dir.path()).env_remove("EVENTSCOUT_STORE");
    cmd
}

fn json_stdout(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_search_capacity_query_json() {
    let tmp = TempDir::new().unwrap();
    let store = write_store(&tmp);

    let body = json_stdout(eventscout(&tmp).args([
        "--format",
        "json",
        "--store",
        store.to_str().unwrap(),
        "search",
        "7 spots remaining",
    ]));

    assert_eq!(body["success"], true);
    assert_eq!(body["count"], 2);
    assert_eq!(body["searchTerm"], "7 spots remaining");
    assert_eq!(body["events"][0]["name"], "Weekend Photography Workshop");
    assert_eq!(body["events"][1]["name"], "Pottery Making for Beginners");
}

#[test]
fn test_search_without_query_lists_by_date() {
    let tmp = TempDir::new().unwrap();
    write_store(&tmp);

    let body = json_stdout(eventscout(&tmp).args(["--format", "json", "search"]));

    assert_eq!(body["count"], 3);
    assert!(body["searchTerm"].is_null());
    let names: Vec<_> = body["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "Weekend Photography Workshop",
            "Pottery Making for Beginners",
            "Cooking Masterclass: Italian Cuisine",
        ]
    );
}

#[test]
fn test_search_explain_text() {
    let tmp = TempDir::new().unwrap();
    write_store(&tmp);

    eventscout(&tmp)
        .args(["search", "apron", "--explain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("score 4: requirements"))
        .stderr(predicate::str::contains("Found 2 result(s) for: apron"));
}

#[test]
fn test_search_limit_from_flag() {
    let tmp = TempDir::new().unwrap();
    write_store(&tmp);

    let body = json_stdout(eventscout(&tmp).args(["--format", "json", "search", "NY", "-n", "1"]));
    assert_eq!(body["count"], 1);
}

#[test]
fn test_settings_file_and_env_override() {
    let tmp = TempDir::new().unwrap();
    std::fs::create_dir(tmp.path().join("data")).unwrap();
    std::fs::write(tmp.path().join("data/catalogue.json"), EVENTS).unwrap();
    std::fs::write(
        tmp.path().join(".eventscout.json"),
        r#"{ "store": "data/catalogue.json", "limit": 2 }"#,
    )
    .unwrap();

    let body = json_stdout(eventscout(&tmp).args(["--format", "json", "list"]));
    assert_eq!(body["count"], 2);

    let empty = tmp.path().join("empty.json");
    std::fs::write(&empty, "[]").unwrap();
    let body = json_stdout(
        eventscout(&tmp)
            .env("EVENTSCOUT_STORE", &empty)
            .args(["--format", "json", "list"]),
    );
    assert_eq!(body["count"], 0);
}

#[test]
fn test_list_available_only() {
    let tmp = TempDir::new().unwrap();
    let store = write_store(&tmp);
    let mut events: serde_json::Value = serde_json::from_str(EVENTS).unwrap();
    events[0]["currentParticipants"] = 16.into();
    std::fs::write(&store, events.to_string()).unwrap();

    eventscout(&tmp)
        .args(["list", "--available"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cooking Masterclass").not())
        .stdout(predicate::str::contains("Weekend Photography Workshop"));
}

#[test]
fn test_show_event() {
    let tmp = TempDir::new().unwrap();
    write_store(&tmp);

    eventscout(&tmp)
        .args(["show", "ph0t0000000000000000000000000001"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Weekend Photography Workshop"))
        .stdout(predicate::str::contains("8/15 participants, 7/15 left"));
}

#[test]
fn test_show_unknown_event_fails() {
    let tmp = TempDir::new().unwrap();
    write_store(&tmp);

    eventscout(&tmp)
        .args(["show", "does-not-exist"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Event not found: does-not-exist"));
}

#[test]
fn test_missing_store_reports_failure_envelope() {
    let tmp = TempDir::new().unwrap();

    let output = eventscout(&tmp)
        .args(["--format", "json", "search", "pottery"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let body: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["success"], false);
    assert_eq!(body["count"], 0);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .contains("Failed to open event store"));
}

#[test]
fn test_stats() {
    let tmp = TempDir::new().unwrap();
    write_store(&tmp);

    eventscout(&tmp)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total events:     3"))
        .stdout(predicate::str::contains("Spots remaining:  16"))
        .stdout(predicate::str::contains("Beginner: 2"));
}

#[test]
fn test_stats_saturates_huge_capacity() {
    let tmp = TempDir::new().unwrap();
    let store = write_store(&tmp);
    let mut events: serde_json::Value = serde_json::from_str(EVENTS).unwrap();
    events[1]["maxParticipants"] = u64::MAX.into();
    std::fs::write(&store, events.to_string()).unwrap();

    eventscout(&tmp)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Participants:     27/{}",
            u64::MAX
        )))
        .stdout(predicate::str::contains(format!(
            "Spots remaining:  {}",
            u64::MAX
        )));
}

#[test]
fn test_zero_limit_is_rejected() {
    let tmp = TempDir::new().unwrap();
    write_store(&tmp);

    for args in [["search", "NY", "-n", "0"], ["list", "-n", "0", "--available"]] {
        eventscout(&tmp)
            .args(args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("--limit"))
            .stdout(predicate::str::contains("No results found").not());
    }
}
