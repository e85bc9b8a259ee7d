use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use fileproc::scanner::{is_loadable_extension, list_files, LOADABLE_EXTENSIONS};
use fileproc::ProcessingError;

fn tmp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("fileproc-scanner-{tag}-{nanos}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn list_files_reports_only_loadable_extensions() {
    let dir = tmp_dir("filter");
    fs::write(dir.join("MyExcel.xlsx"), b"").unwrap();
    fs::write(dir.join("MyHTML.eml"), b"").unwrap();
    fs::write(dir.join("notes.docx"), b"").unwrap();
    fs::write(dir.join("archive.zip"), b"").unwrap();

    let files = list_files(&dir).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files.get(&dir.join("MyExcel.xlsx")), Some(&vec!["xlsx".to_string()]));
    assert_eq!(files.get(&dir.join("MyHTML.eml")), Some(&vec!["eml".to_string()]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn list_files_lowercases_extensions() {
    let dir = tmp_dir("case");
    fs::write(dir.join("REPORT.CSV"), b"").unwrap();

    let files = list_files(&dir).unwrap();
    assert_eq!(files.get(&dir.join("REPORT.CSV")), Some(&vec!["csv".to_string()]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn list_files_does_not_recurse() {
    let dir = tmp_dir("norecurse");
    fs::create_dir(dir.join("nested")).unwrap();
    fs::write(dir.join("nested").join("inner.csv"), b"").unwrap();
    fs::write(dir.join("top.csv"), b"").unwrap();

    let files = list_files(&dir).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files.contains_key(&dir.join("top.csv")));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn list_files_errors_on_missing_directory() {
    let missing = std::env::temp_dir().join("fileproc-scanner-definitely-missing");
    let err = list_files(&missing).unwrap_err();
    assert!(matches!(err, ProcessingError::DirectoryNotFound { .. }));
    assert!(err.to_string().contains("directory not found"));
}

#[test]
fn loadable_extension_set_is_stable() {
    assert_eq!(LOADABLE_EXTENSIONS, &["xls", "xlsx", "csv", "txt", "eml", "html"]);
    assert!(is_loadable_extension("XLSX"));
    assert!(!is_loadable_extension("parquet"));
}
