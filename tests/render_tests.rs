use attendlog::cli::commands::list::{render_table, summary_line};
use attendlog::core::log::LogLogic;
use attendlog::db::log::{LogEntry, load_log, ttlog};
use attendlog::db::DbPool;
use attendlog::models::{Action, AttendanceEvent, SummaryCounts};
use attendlog::utils::session_label;
use attendlog::utils::table::{Table, strip_ansi, visible_width};

#[test]
fn test_summary_line() {
    let line = summary_line(SummaryCounts {
        present_count: 2,
        today_count: 7,
    });
    assert_eq!(line, "2 present • 7 total today");
}

#[test]
fn test_table_pads_on_visible_width() {
    let mut table = Table::new(["A", "Badge"]);
    table.add_row(vec!["x".into(), "\x1b[32mCheck-In\x1b[0m".into()]);
    table.add_row(vec!["long cell".into(), "é".into()]);

    let plain = strip_ansi(&table.render());
    let lines: Vec<&str> = plain.lines().collect();

    assert_eq!(lines[0], "A         | Badge");
    assert_eq!(lines[2], "x         | Check-In");
    assert_eq!(lines[3], "long cell | é");
    assert_eq!(visible_width("\x1b[31mabc\x1b[0m"), 3);
}

#[test]
fn test_records_table_has_session_column() {
    let filtered = vec![
        AttendanceEvent {
            id: "E1".into(),
            name: "Ann".into(),
            action: Action::CheckIn,
            ts: 1_000_000,
        },
        AttendanceEvent {
            id: "E1".into(),
            name: "Ann".into(),
            action: Action::CheckOut,
            ts: 1_000_000 + 3_720_000,
        },
    ];

    let out = strip_ansi(&render_table(&filtered, 9_999_999));
    let lines: Vec<&str> = out.lines().collect();

    assert!(lines[0].starts_with("# | Name | ID | Action"));
    assert!(lines[0].ends_with("Session"));
    assert!(lines[2].contains("Check-In"));
    assert!(lines[2].ends_with("01h 02m"));
    assert!(lines[3].contains("Check-Out"));
    assert!(lines[3].ends_with("--"));
}

#[test]
fn test_log_render_truncates_long_targets() {
    let pool = DbPool::in_memory().unwrap();
    ttlog(&pool.conn, "checkin", "E1", "Ann at 2025-09-01 09:00:00").unwrap();
    ttlog(&pool.conn, "export", &"x".repeat(80), "3 row(s)").unwrap();

    let entries: Vec<LogEntry> = load_log(&pool.conn).unwrap();
    // migration row first
    assert_eq!(entries[0].operation, "migration_applied");
    assert_eq!(entries.len(), 3);

    let lines: Vec<String> = LogLogic::render(&entries)
        .iter()
        .map(|l| strip_ansi(l))
        .collect();

    assert!(lines[1].contains("checkin (E1)"));
    assert!(lines[1].ends_with("=> Ann at 2025-09-01 09:00:00"));
    assert!(lines[2].contains("..."));
    assert!(!lines[2].contains(&"x".repeat(70)));
}

#[test]
fn test_session_label_drops_partial_minutes() {
    assert_eq!(session_label(59_999), "00h 00m");
    assert_eq!(session_label(60_000), "00h 01m");
    assert_eq!(session_label(125 * 60_000 + 30_000), "02h 05m");
    assert_eq!(session_label(100 * 3_600_000), "100h 00m");
}
