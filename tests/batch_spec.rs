mod common;

use std::fs;

use common::{minimal, sample};
use scel2rime::builder::{convert_batch, BatchConfig, BatchEntry};
use scel2rime::storage::meta_unit::FormatVariant;
use scel2rime::utils::ProgressState;

fn entry(name: &str, dict_name: &str, url: Option<&str>) -> BatchEntry {
    BatchEntry { name: name.to_string(), dict_name: dict_name.to_string(), url: url.map(str::to_string) }
}

#[test]
fn failures_do_not_stop_the_batch() {
    let dir = tempfile::tempdir().unwrap();
    let scel_dir = dir.path().join("scel");
    fs::create_dir_all(&scel_dir).unwrap();
    fs::write(scel_dir.join("net.scel"), sample(FormatVariant::A).build()).unwrap();
    fs::write(scel_dir.join("bad.scel"), minimal(FormatVariant::A).mask(0x99).build()).unwrap();
    let builder = sample(FormatVariant::B);
    let data = builder.build();
    fs::write(scel_dir.join("short.scel"), &data[..data.len() - 3]).unwrap();
    // Cut the last group inside its pinyin index list
    fs::write(scel_dir.join("cut.scel"), &data[..builder.group_offsets()[3] + 5]).unwrap();

    let config = BatchConfig {
        scel_dir: scel_dir.to_string_lossy().into_owned(),
        out_dir: dir.path().join("out").to_string_lossy().into_owned(),
        version_date: Some("2024.01.31".to_string()),
        entries: vec![
            entry("bad", "bad", None),
            entry("missing", "missing", None),
            entry("net", "net_words", Some("https://example.com/d?id=4")),
            entry("short", "short", None),
            entry("cut", "cut", None),
        ],
        ..Default::default()
    };
    let report = convert_batch(&config, None);

    assert_eq!(report.failures.len(), 2);
    assert_eq!(report.failures[0].0, "bad");
    assert!(report.failures[0].1.is_unsupported_format());
    assert_eq!(report.failures[1].0, "missing");
    assert_eq!(report.converted.len(), 3);
    assert_eq!(report.partial(), 1);

    let net = &report.converted[0];
    assert_eq!(net.word_count, 7);
    assert!(net.complete);
    let body = fs::read_to_string(&net.text_path).unwrap();
    assert!(body.starts_with("给力\tgei li\n神马\tshen ma\n"));
    assert!(body.ends_with("坐\tzuo"));

    let manifest = fs::read_to_string(dir.path().join("out/luna_pinyin.net_words.dict.yaml")).unwrap();
    let header = "# Rime dictionary\n# encoding: utf-8\n# Source: https://example.com/d?id=4\n\n---\nname: luna_pinyin.net_words\nversion: \"2024.01.31\"\nsort: by_weight\nuse_preset_vocabulary: false\n...\n";
    assert_eq!(manifest, format!("{}\n{}", header, body));

    // A last word missing part of its trailer is still a whole word
    let short = &report.converted[1];
    assert!(short.complete);
    assert_eq!(short.word_count, 7);

    let cut = &report.converted[2];
    assert!(!cut.complete);
    assert_eq!(cut.word_count, 4);
    assert!(cut.dict_path.ends_with("luna_pinyin.cut.dict.yaml"));
}

#[test]
fn directory_config() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("b.scel"), minimal(FormatVariant::B).build()).unwrap();
    fs::write(dir.path().join("a.scel"), minimal(FormatVariant::A).build()).unwrap();
    fs::write(dir.path().join("readme.txt"), "not a dictionary").unwrap();

    let mut config = BatchConfig::from_scel_dir(dir.path()).unwrap();
    let names: Vec<_> = config.entries.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["a", "b"]);

    config.out_dir = dir.path().join("out").to_string_lossy().into_owned();
    config.namespace = "terra_pinyin".to_string();
    let report = convert_batch(&config, None);
    assert_eq!(report.converted.len(), 2);
    assert!(report.failures.is_empty());

    let body = fs::read_to_string(dir.path().join("out/a.txt")).unwrap();
    assert_eq!(body, "你好\tni hao");
    let manifest = fs::read_to_string(dir.path().join("out/terra_pinyin.b.dict.yaml")).unwrap();
    assert!(manifest.contains("name: terra_pinyin.b\n"));
    assert!(manifest.contains(&format!("# Source: {}\n", dir.path().join("b.scel").display())));
}

#[test]
fn json_entry_list() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    fs::write(
        &config_path,
        r#"[{"name": "网络流行新词", "dictName": "net_words", "url": "https://example.com/d?id=4"}]"#,
    )
    .unwrap();
    let entries = BatchConfig::load_entries(&config_path).unwrap();
    assert_eq!(entries, vec![entry("网络流行新词", "net_words", Some("https://example.com/d?id=4"))]);

    fs::write(&config_path, "{ not json").unwrap();
    assert!(BatchConfig::load_entries(&config_path).is_err());
}

fn cancel_immediately(_: &mut ProgressState) -> bool {
    true
}

#[test]
fn progress_can_cancel() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.scel"), minimal(FormatVariant::A).build()).unwrap();
    fs::write(dir.path().join("b.scel"), minimal(FormatVariant::A).build()).unwrap();

    let mut config = BatchConfig::from_scel_dir(dir.path()).unwrap();
    config.out_dir = dir.path().join("out").to_string_lossy().into_owned();
    let report = convert_batch(&config, Some(cancel_immediately));
    assert_eq!(report.converted.len(), 1);
    assert!(report.cancelled);
}
