use super::*;
use std::sync::{Arc, Mutex};
use tactica_core::{classify_table, Summary, Table};

/// Log sink that keeps everything written to it.
#[derive(Clone, Default)]
struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl std::io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl CapturedLog {
    fn text(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).to_string()
    }
}

#[test]
fn test_load_config_logs_missing_file() {
    let log = CapturedLog::default();
    let sink = log.clone();
    let cfg = load_config("/nonexistent/__tactica_cli_config__.toml", move || {
        sink.clone()
    })
    .unwrap();

    assert_eq!(cfg.input.text_column, "Statement");
    let text = log.text();
    assert!(
        text.contains("using defaults"),
        "missing config should be logged, got: {text}"
    );
}

#[test]
fn test_load_config_reports_parse_error() {
    let tmp = std::env::temp_dir().join(format!(
        "__tactica_test_cli_bad_config_{}__.toml",
        std::process::id()
    ));
    std::fs::write(&tmp, "[output\npath = ").unwrap();
    let err = load_config(tmp.to_str().unwrap(), std::io::sink).unwrap_err();
    assert!(err.to_string().contains("config error"));
    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_split_phrases_drops_blank_lines() {
    assert_eq!(split_phrases("foo\nbar\n"), vec!["foo", "bar"]);
    assert_eq!(split_phrases("  foo  \r\n\n  \nbar baz"), vec!["foo", "bar baz"]);
    assert!(split_phrases("   \n  ").is_empty());
}

#[test]
fn test_add_tactic_from_block() {
    let mut dict = Dictionary::default();
    let name = dict
        .add_tactic("New Tactic", split_phrases("foo\nbar\n"))
        .unwrap();
    assert_eq!(name, "new_tactic");
    let kws: Vec<&String> = dict.keywords("new_tactic").unwrap().iter().collect();
    assert_eq!(kws, vec!["bar", "foo"]);

    assert!(dict.add_tactic("", split_phrases("foo")).is_err());
    assert!(dict.add_tactic("x", split_phrases("   \n  ")).is_err());
}

#[test]
fn test_read_keyword_block_sources() {
    assert_eq!(
        read_keyword_block(Some("a\nb".to_string()), None).unwrap(),
        "a\nb"
    );
    assert!(read_keyword_block(None, None).is_err());

    let tmp = std::env::temp_dir().join(format!(
        "__tactica_test_keywords_{}__.txt",
        std::process::id()
    ));
    std::fs::write(&tmp, "one\ntwo\n").unwrap();
    assert_eq!(read_keyword_block(None, Some(tmp.as_path())).unwrap(), "one\ntwo\n");
    assert!(read_keyword_block(Some("x".to_string()), Some(tmp.as_path())).is_err());
    let _ = std::fs::remove_file(&tmp);
}

#[test]
fn test_dictionary_path_override() {
    let cfg = Config::default();
    assert_eq!(dictionary_path(&cfg, None), PathBuf::from("dictionary.toml"));
    assert_eq!(
        dictionary_path(&cfg, Some("/tmp/d.toml")),
        PathBuf::from("/tmp/d.toml")
    );
}

#[test]
fn test_render_report() {
    let csv = "ID,Statement\n7,Hurry while supplies last\n8,Plain words\n";
    let table = Table::from_csv_reader(csv.as_bytes()).unwrap();
    let dict = Dictionary::default();
    let out = classify_table(&table, &dict, "Statement").unwrap();
    let summary = Summary::from_table(&out, &dict);

    let head = classify::render_summary(&summary);
    assert!(head.contains("urgency_marketing: 1/2 statements (50.0%)"));
    assert!(head.contains("exclusive_marketing: 0/2 statements (0.0%)"));

    let details = classify::render_details(&out, &dict, "ID", "Statement");
    assert!(details.contains("ID: 7"));
    assert!(details.contains("  ✓ urgency_marketing: hurry, while supplies last"));
    assert!(details.contains("  ✗ exclusive_marketing: No matches"));

    let stats = classify::render_quick_stats(&summary);
    assert!(stats.contains("Statements with any tactic: 1"));
}

#[test]
fn test_render_details_without_id_column_uses_row_number() {
    let csv = "Statement\nvip\n";
    let table = Table::from_csv_reader(csv.as_bytes()).unwrap();
    let dict = Dictionary::default();
    let out = classify_table(&table, &dict, "Statement").unwrap();
    let details = classify::render_details(&out, &dict, "ID", "Statement");
    assert!(details.contains("ID: 1"));
    assert!(details.contains("  ✓ exclusive_marketing: vip"));
}

#[test]
fn test_render_check() {
    let dict = Dictionary::default();
    let out = classify::render_check("Exclusive VIP access for members only - don't wait!", &dict);
    assert!(out.contains("  ✓ urgency_marketing (1): don't wait"));
    assert!(out.contains("  ✓ exclusive_marketing (3): exclusive, members only, vip"));
}

#[test]
fn test_render_list() {
    let mut dict = Dictionary::empty();
    dict.set_keywords("t", ["b", "a"]);
    assert_eq!(tactics::render_list(&dict), "t (2 keywords)\n  - a\n  - b\n");
}

#[test]
fn test_render_json_includes_summary() {
    let csv = "ID,Statement\n1,VIP only\n";
    let table = Table::from_csv_reader(csv.as_bytes()).unwrap();
    let dict = Dictionary::default();
    let out = classify_table(&table, &dict, "Statement").unwrap();
    let summary = Summary::from_table(&out, &dict);

    let text = classify::render_json(&out, &summary).unwrap();
    let doc: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert!(doc["summary"]["generated_at"].is_string());
    assert_eq!(doc["summary"]["total"], 1);
    assert_eq!(doc["summary"]["tactics"][1]["tactic"], "exclusive_marketing");
    assert_eq!(doc["summary"]["tactics"][1]["present"], 1);
    assert_eq!(doc["rows"][0]["exclusive_marketing_matches"], "vip");
    assert_eq!(doc["rows"][0]["exclusive_marketing_present"], true);
}
