use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{SystemTime, UNIX_EPOCH};

use fileproc::loading::{
    load_from_path, LoadContext, LoadOptions, LoadStats, PipelineObserver, SessionLogObserver,
    Severity,
};
use fileproc::{FileProcessor, ProcessingError};

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<usize>>,
    failures: Mutex<Vec<Severity>>,
    warnings: Mutex<Vec<String>>,
    skipped: Mutex<Vec<String>>,
}

impl PipelineObserver for RecordingObserver {
    fn on_load_success(&self, _ctx: &LoadContext, stats: LoadStats) {
        self.successes.lock().unwrap().push(stats.rows);
    }

    fn on_load_failure(&self, _ctx: &LoadContext, severity: Severity, _error: &ProcessingError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_warning(&self, _ctx: &LoadContext, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }

    fn on_process_skipped(&self, file: &str, _reason: &str) {
        self.skipped.lock().unwrap().push(file.to_string());
    }
}

fn tmp_path(tag: &str, ext: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    std::env::temp_dir().join(format!("fileproc-obs-{tag}-{nanos}.{ext}"))
}

#[test]
fn observer_sees_load_success_with_stats() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
    };

    let _ = load_from_path("tests/fixtures/people.csv", "csv", &opts).unwrap();
    assert_eq!(obs.successes.lock().unwrap().clone(), vec![2]);
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn observer_sees_critical_severity_on_missing_file() {
    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
    };

    // Missing file -> underlying I/O failure -> Critical.
    let _ = load_from_path("tests/fixtures/does_not_exist.csv", "csv", &opts).unwrap_err();
    assert_eq!(obs.failures.lock().unwrap().clone(), vec![Severity::Critical]);
}

#[test]
fn observer_sees_error_severity_on_malformed_mail_export() {
    let path = tmp_path("notables", "eml");
    fs::write(&path, "<html><body><p>no tables here</p></body></html>").unwrap();

    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
    };

    let _ = load_from_path(&path, "eml", &opts).unwrap_err();
    assert_eq!(obs.failures.lock().unwrap().clone(), vec![Severity::Error]);

    let _ = fs::remove_file(&path);
}

#[test]
fn observer_sees_multi_sheet_warning() {
    use rust_xlsxwriter::Workbook;

    let path = tmp_path("multisheet", "xlsx");
    let mut wb = Workbook::new();
    for name in ["AvgBal", "BalSheet"] {
        let ws = wb.add_worksheet();
        ws.set_name(name).unwrap();
        ws.write_string(0, 0, "id").unwrap();
        ws.write_number(1, 0, 1.0).unwrap();
    }
    wb.save(&path).unwrap();

    let obs = Arc::new(RecordingObserver::default());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
    };

    let _ = load_from_path(&path, "xlsx", &opts).unwrap();
    let warnings = obs.warnings.lock().unwrap().clone();
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("multiple worksheets detected"));

    let _ = fs::remove_file(&path);
}

#[test]
fn observer_sees_process_skip_for_stale_routine() {
    let config = tmp_path("config", "yml");
    fs::write(
        &config,
        "\"people.csv\":\n  class: \"_fundingcorp\"\n  method: \"gone\"\n",
    )
    .unwrap();

    let obs = Arc::new(RecordingObserver::default());
    let processor = FileProcessor::new("tests/fixtures").with_observer(obs.clone());

    let ds = processor.load("tests/fixtures/people.csv", "csv").unwrap();
    let out = processor
        .process("tests/fixtures/people.csv", ds, &config)
        .unwrap();
    assert!(out.is_empty());
    assert_eq!(obs.skipped.lock().unwrap().clone(), vec!["people.csv".to_string()]);

    let _ = fs::remove_file(&config);
}

#[test]
fn session_log_records_header_and_events() {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let log_dir = std::env::temp_dir().join(format!("fileproc-obs-logs-{nanos}"));

    let obs = Arc::new(SessionLogObserver::create(&log_dir).unwrap());
    let opts = LoadOptions {
        observer: Some(obs.clone()),
    };
    let _ = load_from_path("tests/fixtures/people.csv", "csv", &opts).unwrap();

    let contents = fs::read_to_string(obs.path()).unwrap();
    assert!(contents.contains("File formats that can be loaded:"));
    assert!(contents.contains("- xlsx"));
    assert!(contents.contains("loaded format=Delimited"));
    assert!(contents.contains("rows=2"));

    let _ = fs::remove_dir_all(&log_dir);
}
