//! Hall of fame tests - append-only ledger semantics and ordering.

use std::fs;
use std::path::PathBuf;

use tui_collapse::store::{render_entries, HallOfFame, ScoreEntry};

/// Unique scratch path per test so suites can run in parallel.
fn scratch_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "tui-collapse-test-{}-{}.jsonl",
        std::process::id(),
        name
    ));
    let _ = fs::remove_file(&path);
    path
}

#[test]
fn missing_ledger_reads_as_empty() {
    let hall = HallOfFame::new(scratch_path("missing"));
    assert_eq!(hall.top().unwrap(), vec![]);
    assert_eq!(hall.render().unwrap(), "");
}

#[test]
fn scores_sort_ascending_with_name_tiebreak() {
    let path = scratch_path("sorting");
    let hall = HallOfFame::new(&path);

    hall.add("carol", 30).unwrap();
    hall.add("bob", 12).unwrap();
    hall.add("alice", 12).unwrap();

    let top = hall.top().unwrap();
    assert_eq!(
        top,
        vec![
            ScoreEntry {
                score: 12,
                name: "alice".into()
            },
            ScoreEntry {
                score: 12,
                name: "bob".into()
            },
            ScoreEntry {
                score: 30,
                name: "carol".into()
            },
        ]
    );

    let _ = fs::remove_file(path);
}

#[test]
fn hall_is_capped_at_five_entries() {
    let path = scratch_path("capped");
    let hall = HallOfFame::new(&path);

    for (i, name) in ["a", "b", "c", "d", "e", "f", "g"].iter().enumerate() {
        hall.add(name, 100 - i as u32).unwrap();
    }

    let top = hall.top().unwrap();
    assert_eq!(top.len(), 5);
    // Lowest scores win: the first two appends (100, 99) fall off.
    assert!(top.iter().all(|e| e.score <= 98));

    let _ = fs::remove_file(path);
}

#[test]
fn ledger_is_append_only_json_lines() {
    let path = scratch_path("jsonl");
    let hall = HallOfFame::new(&path);

    hall.add("first", 11).unwrap();
    hall.add("second", 7).unwrap();

    // The file keeps every append in order; ranking happens on read.
    let raw = fs::read_to_string(&path).unwrap();
    let entries: Vec<ScoreEntry> = raw
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(entries[0].name, "first");
    assert_eq!(entries[1].name, "second");

    let _ = fs::remove_file(path);
}

#[test]
fn long_names_are_truncated() {
    let path = scratch_path("truncate");
    let hall = HallOfFame::new(&path);

    hall.add("abcdefghijklmnopqrstuvwxyz", 5).unwrap();
    let top = hall.top().unwrap();
    assert_eq!(top[0].name, "abcdefghijklmnopqrst");

    let _ = fs::remove_file(path);
}

#[test]
fn corrupt_lines_are_skipped() {
    let path = scratch_path("corrupt");
    fs::write(&path, "{\"score\":3,\"name\":\"ok\"}\nnot json\n").unwrap();

    let hall = HallOfFame::new(&path);
    let top = hall.top().unwrap();
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].name, "ok");

    let _ = fs::remove_file(path);
}

#[test]
fn rendering_right_aligns_scores() {
    let entries = vec![
        ScoreEntry {
            score: 8,
            name: "zoe".into(),
        },
        ScoreEntry {
            score: 1200,
            name: "max".into(),
        },
    ];
    assert_eq!(
        render_entries(&entries),
        "         8    zoe\n      1200    max\n"
    );
}
