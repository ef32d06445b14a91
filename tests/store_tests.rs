use rkwhcalc::codec::{RecordFormat, encode_pipe};
use rkwhcalc::core::archive::{FavouriteLogic, HistoryLogic};
use rkwhcalc::core::catalog::CatalogLogic;
use rkwhcalc::core::log::LogLogic;
use rkwhcalc::core::session::CalcSession;
use rkwhcalc::db::pool::DbPool;
use rkwhcalc::db::queries::{
    add_favourite, add_history, count_rows, delete_favourite, delete_history, find_favourite,
    list_favourites, list_history,
};
use rkwhcalc::errors::AppError;
use rkwhcalc::models::usage::{Ledger, UsageRow};

fn pool() -> DbPool {
    DbPool::in_memory().expect("in-memory db")
}

fn kettle_session() -> CalcSession {
    let mut s = CalcSession::new();
    s.add_row(UsageRow::new("2", "3", "Kettle 1000 W"));
    s
}

#[test]
fn test_history_duplicate_record_is_skipped() {
    let pool = pool();

    let record = "1|2|3|Kettle 1000 W|";
    assert!(add_history(&pool.conn, "2025-10-16 09:00:00.000001", record).unwrap());
    assert!(!add_history(&pool.conn, "2025-10-16 09:05:00.000001", record).unwrap());

    let all = list_history(&pool.conn).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].timestamp, "2025-10-16 09:00:00.000001");
}

#[test]
fn test_favourite_duplicate_label_is_rejected() {
    let pool = pool();

    add_favourite(&pool.conn, "Morning", "1|2|3|Kettle 1000 W|").unwrap();
    let second = add_favourite(&pool.conn, "Morning", "1|1|1|LED lamp 10 W|");
    assert!(matches!(second, Err(AppError::DuplicateFavourite(l)) if l == "Morning"));

    let fav = find_favourite(&pool.conn, "Morning").unwrap().unwrap();
    assert_eq!(fav.data, "1|2|3|Kettle 1000 W|");
    assert_eq!(count_rows(&pool.conn, "favourite").unwrap(), 1);
}

#[test]
fn test_empty_favourite_label_is_invalid() {
    let pool = pool();
    assert!(matches!(
        add_favourite(&pool.conn, "  ", "0|"),
        Err(AppError::InvalidInput(_))
    ));
}

#[test]
fn test_lists_are_most_recent_first() {
    let pool = pool();

    add_history(&pool.conn, "t1", "a").unwrap();
    add_history(&pool.conn, "t2", "b").unwrap();
    add_history(&pool.conn, "t3", "c").unwrap();
    add_favourite(&pool.conn, "first", "a").unwrap();
    add_favourite(&pool.conn, "second", "b").unwrap();

    let ts: Vec<String> = list_history(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|r| r.timestamp)
        .collect();
    assert_eq!(ts, ["t3", "t2", "t1"]);

    let labels: Vec<String> = list_favourites(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|r| r.label)
        .collect();
    assert_eq!(labels, ["second", "first"]);
}

#[test]
fn test_delete_is_idempotent() {
    let pool = pool();

    add_history(&pool.conn, "t1", "a").unwrap();
    add_favourite(&pool.conn, "fav", "a").unwrap();

    assert!(delete_history(&pool.conn, "t1").unwrap());
    assert!(!delete_history(&pool.conn, "t1").unwrap());
    assert!(delete_favourite(&pool.conn, "fav").unwrap());
    assert!(!delete_favourite(&pool.conn, "fav").unwrap());

    assert!(HistoryLogic::list(&pool.conn).unwrap().is_empty());
    assert!(FavouriteLogic::list(&pool.conn).unwrap().is_empty());
}

#[test]
fn test_device_catalog_add_and_list() {
    let pool = pool();

    let kettle = CatalogLogic::add_device(&pool.conn, "Kettle", "2000")
        .unwrap()
        .unwrap();
    CatalogLogic::add_device(&pool.conn, "Kettle", "1500").unwrap();

    assert_eq!(kettle.label(), "Kettle 2000 W");

    let devices = CatalogLogic::list_devices(&pool.conn).unwrap();
    assert_eq!(
        CatalogLogic::labels(&devices),
        ["Kettle 2000 W", "Kettle 1500 W"]
    );
}

#[test]
fn test_device_with_empty_field_is_skipped() {
    let pool = pool();

    assert!(CatalogLogic::add_device(&pool.conn, "", "2000").unwrap().is_none());
    assert!(CatalogLogic::add_device(&pool.conn, "Kettle", " ").unwrap().is_none());
    assert!(matches!(
        CatalogLogic::add_device(&pool.conn, "Kettle", "lots"),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        CatalogLogic::add_device(&pool.conn, "Kettle", "0"),
        Err(AppError::InvalidInput(_))
    ));
    assert_eq!(count_rows(&pool.conn, "devices").unwrap(), 0);
}

#[test]
fn test_row_spec_resolution() {
    let pool = pool();
    let kettle = CatalogLogic::add_device(&pool.conn, "Kettle", "2000")
        .unwrap()
        .unwrap();
    let devices = CatalogLogic::list_devices(&pool.conn).unwrap();

    let by_name = CatalogLogic::parse_row_spec("2:3:Kettle", &devices).unwrap();
    assert_eq!(by_name.device_label, "Kettle 2000 W");
    assert_eq!(by_name.device_id, Some(kettle.id));

    let by_id = CatalogLogic::parse_row_spec(&format!("1:1:#{}", kettle.id), &devices).unwrap();
    assert_eq!(by_id.device_id, Some(kettle.id));

    let by_label = CatalogLogic::parse_row_spec("1:1:Kettle 2000 W", &devices).unwrap();
    assert_eq!(by_label.device_id, Some(kettle.id));

    assert!(matches!(
        CatalogLogic::parse_row_spec("1:1:Heater 1500 W", &devices),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        CatalogLogic::parse_row_spec("1:1:Fan | tower 40 W", &[]),
        Err(AppError::InvalidInput(_))
    ));

    assert!(CatalogLogic::parse_row_spec("1:Kettle", &devices).is_err());
    assert!(CatalogLogic::parse_row_spec("1:1:#99", &devices).is_err());
}

#[test]
fn test_print_records_history_once() {
    let pool = pool();
    let mut session = kettle_session();

    let first = session.print(&pool.conn, &[], RecordFormat::Pipe).unwrap();
    assert_eq!(first.calculation.total_kwh, 6.0);
    assert_eq!(first.record, "1|2|3|Kettle 1000 W|");
    assert!(first.history_inserted);

    let second = session.print(&pool.conn, &[], RecordFormat::Pipe).unwrap();
    assert!(!second.history_inserted);

    assert_eq!(count_rows(&pool.conn, "history").unwrap(), 1);
    assert_eq!(session.last_total(), Some(6.0));
    assert_eq!(session.row_result(0), Some(6.0));
}

#[test]
fn test_invalid_input_writes_nothing_and_keeps_results() {
    let pool = pool();
    let mut session = kettle_session();
    session.calculate(&[]).unwrap();

    session.add_row(UsageRow::new("abc", "1", "Kettle 1000 W"));

    assert!(matches!(
        session.print(&pool.conn, &[], RecordFormat::Json),
        Err(AppError::InvalidInput(_))
    ));
    assert!(matches!(
        session.save(&pool.conn, &[], RecordFormat::Json, "Broken"),
        Err(AppError::InvalidInput(_))
    ));

    assert_eq!(count_rows(&pool.conn, "history").unwrap(), 0);
    assert_eq!(count_rows(&pool.conn, "favourite").unwrap(), 0);

    // previous results stay on screen; the new row was never computed
    assert_eq!(session.row_result(0), Some(6.0));
    assert_eq!(session.row_result(1), None);
    assert_eq!(session.last_total(), Some(6.0));
}

#[test]
fn test_save_with_duplicate_label_still_records_history() {
    let pool = pool();

    let mut first = kettle_session();
    let out = first
        .save(&pool.conn, &[], RecordFormat::Json, "Morning")
        .unwrap();
    assert!(out.favourite.is_ok());
    assert!(out.print.history_inserted);

    let mut other = CalcSession::new();
    other.add_row(UsageRow::new("1", "8", "LED lamp 10 W"));
    let out = other
        .save(&pool.conn, &[], RecordFormat::Json, "Morning")
        .unwrap();

    assert!(matches!(out.favourite, Err(AppError::DuplicateFavourite(_))));
    assert!(out.print.history_inserted);
    assert_eq!(count_rows(&pool.conn, "favourite").unwrap(), 1);
    assert_eq!(count_rows(&pool.conn, "history").unwrap(), 2);
}

#[test]
fn test_reopening_legacy_history_does_not_duplicate() {
    let pool = pool();
    let legacy = encode_pipe(&Ledger::from(vec![
        UsageRow::new("2", "3", "Kettle 1000 W"),
        UsageRow::new("1", "10", "LED lamp 10 W"),
    ]));
    add_history(&pool.conn, "2024-01-05 18:30:00.123456", &legacy).unwrap();

    let mut loaded = HistoryLogic::open(&pool.conn, "2024-01-05 18:30:00.123456").unwrap();
    assert_eq!(loaded.format, RecordFormat::Pipe);
    assert_eq!(loaded.session.rows().len(), 2);

    let out = loaded
        .session
        .print(&pool.conn, &[], loaded.format)
        .unwrap();
    assert!(!out.history_inserted);
    assert!((out.calculation.total_kwh - 6.1).abs() < 1e-9);
}

#[test]
fn test_reopening_favourite_records_history() {
    let pool = pool();
    add_favourite(&pool.conn, "Evening", "1|1|4|LED lamp 10 W|").unwrap();

    let mut loaded = FavouriteLogic::open(&pool.conn, "Evening").unwrap();
    let out = loaded
        .session
        .print(&pool.conn, &[], loaded.format)
        .unwrap();

    assert!(out.history_inserted);
    assert_eq!(out.record, "1|1|4|LED lamp 10 W|");
}

#[test]
fn test_malformed_record_is_an_error_not_a_panic() {
    let pool = pool();
    add_history(&pool.conn, "bad", "3|1|1|").unwrap();

    assert!(matches!(
        HistoryLogic::open(&pool.conn, "bad"),
        Err(AppError::MalformedRecord(_))
    ));
    assert!(matches!(
        FavouriteLogic::open(&pool.conn, "missing"),
        Err(AppError::NotFound(_))
    ));
}

#[test]
fn test_failed_load_keeps_session() {
    let mut session = kettle_session();
    assert!(session.load_record("not|a|record").is_err());
    assert_eq!(session.rows().len(), 1);

    session.load_record("1|4|5|LED lamp 10 W|").unwrap();
    assert_eq!(session.rows(), &[UsageRow::new("4", "5", "LED lamp 10 W")]);
    assert_eq!(session.last_total(), None);
}

#[test]
fn test_remove_row_keeps_results_aligned() {
    let mut session = CalcSession::new();
    session.add_row(UsageRow::new("1", "1", "Kettle 1000 W"));
    session.add_row(UsageRow::new("1", "1", "LED lamp 10 W"));
    session.calculate(&[]).unwrap();

    let removed = session.remove_row(0).unwrap();
    assert_eq!(removed.device_label, "Kettle 1000 W");
    assert_eq!(session.row_result(0), Some(0.01));
    assert!(session.remove_row(5).is_none());
}

#[test]
fn test_mutations_are_written_to_internal_log() {
    let pool = pool();
    CatalogLogic::add_device(&pool.conn, "Kettle", "1000").unwrap();
    kettle_session()
        .save(&pool.conn, &[], RecordFormat::Json, "Tea")
        .unwrap();
    FavouriteLogic::delete(&pool.conn, "Tea").unwrap();

    let ops: Vec<String> = LogLogic::load(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|e| e.operation)
        .filter(|op| op != "migration_applied")
        .collect();
    assert_eq!(ops, ["device_add", "fav_add", "history_add", "fav_del"]);
}
