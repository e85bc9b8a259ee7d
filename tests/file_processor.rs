use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use fileproc::types::Value;
use fileproc::{FileProcessor, ProcessingError};

fn tmp_dir(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("fileproc-e2e-{tag}-{nanos}"));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn scan_load_process_round_trip() {
    let dir = tmp_dir("roundtrip");
    fs::write(
        dir.join("people.csv"),
        "id,name,score\n1,Ada,98.5\n2,Grace,87.25\n",
    )
    .unwrap();
    fs::write(dir.join("ignore.docx"), b"").unwrap();

    let config = dir.join("processors.yml");
    fs::write(
        &config,
        "\"people.csv\":\n  class: \"_fundingcorp\"\n  method: \"bal_sheet_tb\"\n",
    )
    .unwrap();

    let processor = FileProcessor::new(&dir);
    let files = processor.files().unwrap();
    assert_eq!(files.len(), 1);

    let (file, exts) = files.iter().next().unwrap();
    let df = processor.load(file, &exts[0]).unwrap();
    assert_eq!(df.row_count(), 2);

    // Shipped routines are identity transforms.
    let out = processor.process(file, df.clone(), &config).unwrap();
    assert_eq!(out, df);
    assert_eq!(out.rows[0][1], Value::Utf8("Ada".to_string()));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn process_uses_base_name_as_logical_name() {
    let dir = tmp_dir("logical");
    fs::write(dir.join("people.csv"), "id\n1\n").unwrap();

    let config = dir.join("processors.yml");
    // Keyed by base name, not full path.
    fs::write(
        &config,
        "\"people.csv\":\n  class: \"_fundingcorp\"\n  method: \"avg_bal_tb\"\n",
    )
    .unwrap();

    let processor = FileProcessor::new(&dir);
    let df = processor.load(dir.join("people.csv"), "csv").unwrap();
    let out = processor.process(dir.join("people.csv"), df.clone(), &config).unwrap();
    assert_eq!(out, df);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn process_fails_for_unlisted_file() {
    let dir = tmp_dir("unlisted");
    fs::write(dir.join("people.csv"), "id\n1\n").unwrap();

    let config = dir.join("processors.yml");
    fs::write(
        &config,
        "\"other.csv\":\n  class: \"_fundingcorp\"\n  method: \"avg_bal_tb\"\n",
    )
    .unwrap();

    let processor = FileProcessor::new(&dir);
    let df = processor.load(dir.join("people.csv"), "csv").unwrap();
    let err = processor
        .process(dir.join("people.csv"), df, &config)
        .unwrap_err();
    assert!(matches!(err, ProcessingError::ProcessorNotConfigured { .. }));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn loadable_formats_lists_the_recognized_set() {
    let processor = FileProcessor::new("unused");
    assert_eq!(
        processor.loadable_formats(),
        &["xls", "xlsx", "csv", "txt", "eml", "html"]
    );
}

#[test]
fn files_on_missing_directory_fails() {
    let processor = FileProcessor::new("definitely/not/here");
    let err = processor.files().unwrap_err();
    assert!(matches!(err, ProcessingError::DirectoryNotFound { .. }));
}
