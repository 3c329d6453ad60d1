use super::*;
use crate::catalog::list_migrations;
use crate::config::MergeOrder;
use crate::selector::select_up_to;
use std::fs;
use tempfile::tempdir;

/// SHA-256 of the empty input
const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

fn write_migrations(dir: &Path, files: &[(&str, &str)]) {
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

#[test]
fn test_merges_up_files_in_order() {
    let src = tempdir().unwrap();
    write_migrations(
        src.path(),
        &[
            ("1_init.up.sql", "CREATE TABLE a;"),
            ("1_init.down.sql", "DROP TABLE a;"),
            ("2_add.up.sql", "ALTER TABLE a ADD b;"),
            ("3_later.up.sql", "CREATE TABLE c;"),
        ],
    );
    let out = tempdir().unwrap();
    let dest = out.path().join("schema.sql");

    let catalog = list_migrations(src.path()).unwrap();
    let selection = select_up_to(&catalog, 2, MergeOrder::Version);
    let report = merge(&selection, &dest).unwrap();

    assert_eq!(
        fs::read_to_string(&dest).unwrap(),
        "CREATE TABLE a;ALTER TABLE a ADD b;"
    );
    assert_eq!(report.files, 2);
    assert_eq!(report.bytes, 35);
    assert_eq!(report.destination, dest);
    assert_eq!(report.checksum.len(), 64);
}

#[test]
fn test_bytes_are_copied_verbatim() {
    let src = tempdir().unwrap();
    let raw: &[u8] = b"-- header\r\nCREATE TABLE t (x int);\n\xff\x00";
    fs::write(src.path().join("1_raw.up.sql"), raw).unwrap();
    fs::write(src.path().join("2_more.up.sql"), b"\n\n").unwrap();
    let dest = src.path().join("schema.out");

    let catalog = list_migrations(src.path()).unwrap();
    merge(&select_up_to(&catalog, 9, MergeOrder::Version), &dest).unwrap();

    let mut expected = raw.to_vec();
    expected.extend_from_slice(b"\n\n");
    assert_eq!(fs::read(&dest).unwrap(), expected);
}

#[test]
fn test_empty_selection_truncates_destination() {
    let out = tempdir().unwrap();
    let dest = out.path().join("schema.sql");
    fs::write(&dest, "stale contents").unwrap();

    let report = merge(&[], &dest).unwrap();

    assert_eq!(fs::read(&dest).unwrap().len(), 0);
    assert_eq!(report.files, 0);
    assert_eq!(report.bytes, 0);
    assert_eq!(report.checksum, EMPTY_SHA256);
}

#[test]
fn test_existing_destination_is_overwritten() {
    let src = tempdir().unwrap();
    write_migrations(src.path(), &[("1_a.up.sql", "short")]);
    let dest = src.path().join("schema.sql.out");
    fs::write(&dest, "a much longer previous artifact").unwrap();

    let catalog = list_migrations(src.path()).unwrap();
    merge(&select_up_to(&catalog, 1, MergeOrder::Version), &dest).unwrap();

    assert_eq!(fs::read_to_string(&dest).unwrap(), "short");
}

#[test]
fn test_merge_is_idempotent() {
    let src = tempdir().unwrap();
    write_migrations(
        src.path(),
        &[("1_a.up.sql", "A;"), ("2_b.up.sql", "B;"), ("3_c.up.sql", "C;")],
    );
    let out = tempdir().unwrap();
    let dest = out.path().join("schema.sql");
    let catalog = list_migrations(src.path()).unwrap();
    let selection = select_up_to(&catalog, 3, MergeOrder::Version);

    let first_report = merge(&selection, &dest).unwrap();
    let first = fs::read(&dest).unwrap();
    let second_report = merge(&selection, &dest).unwrap();
    let second = fs::read(&dest).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_report, second_report);
}

#[test]
fn test_order_of_selection_is_order_of_bytes() {
    let src = tempdir().unwrap();
    write_migrations(src.path(), &[("1_a.up.sql", "A"), ("2_b.up.sql", "B")]);
    let dest = src.path().join("out");

    let mut selection = select_up_to(
        &list_migrations(src.path()).unwrap(),
        2,
        MergeOrder::Listing,
    );
    selection.reverse();
    merge(&selection, &dest).unwrap();

    assert_eq!(fs::read_to_string(&dest).unwrap(), "BA");
}

#[test]
fn test_missing_parent_directory_is_write_error() {
    let out = tempdir().unwrap();
    let dest = out.path().join("missing").join("schema.sql");

    let err = merge(&[], &dest).unwrap_err();
    assert!(matches!(err, CoreError::FileWrite { .. }));
    assert!(!dest.exists());
}

#[test]
fn test_vanished_source_is_read_error_with_partial_output() {
    let src = tempdir().unwrap();
    write_migrations(src.path(), &[("1_a.up.sql", "A;"), ("2_b.up.sql", "B;")]);
    let dest = src.path().join("out.sql.tmp");

    let catalog = list_migrations(src.path()).unwrap();
    let selection = select_up_to(&catalog, 2, MergeOrder::Version);
    fs::remove_file(src.path().join("2_b.up.sql")).unwrap();

    let err = merge(&selection, &dest).unwrap_err();
    assert!(matches!(err, CoreError::FileRead { .. }));
    assert!(err.to_string().contains("2_b.up.sql"));
    assert_eq!(fs::read_to_string(&dest).unwrap(), "A;");
}
