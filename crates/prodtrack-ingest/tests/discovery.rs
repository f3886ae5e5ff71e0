use std::fs;

use prodtrack_ingest::{IngestError, find_workbook};

#[test]
fn picks_first_workbook_by_name() {
    let dir = tempfile::tempdir().expect("create temp dir");
    fs::write(dir.path().join("b.xlsx"), b"stub").expect("write file");
    fs::write(dir.path().join("a.xlsx"), b"stub").expect("write file");
    fs::write(dir.path().join("notes.txt"), b"stub").expect("write file");
    fs::write(dir.path().join("~$a.xlsx"), b"stub").expect("write file");

    let found = find_workbook(dir.path()).expect("find workbook");
    assert_eq!(found.file_name().unwrap(), "a.xlsx");
}

#[test]
fn falls_back_to_parent_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let nested = dir.path().join("analysis");
    fs::create_dir(&nested).expect("create nested dir");
    fs::write(dir.path().join("orders.xlsx"), b"stub").expect("write file");

    let found = find_workbook(&nested).expect("find workbook");
    assert_eq!(found.file_name().unwrap(), "orders.xlsx");
}

#[test]
fn reports_missing_workbook() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let nested = dir.path().join("empty");
    fs::create_dir(&nested).expect("create nested dir");

    let err = find_workbook(&nested).unwrap_err();
    assert!(matches!(err, IngestError::NoWorkbook { .. }));
}

#[test]
fn rejects_missing_directory() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let missing = dir.path().join("nope");

    let err = find_workbook(&missing).unwrap_err();
    assert!(matches!(err, IngestError::DirectoryNotFound { .. }));
}
