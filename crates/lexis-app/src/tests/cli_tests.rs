use std::path::PathBuf;

use clap::Parser;
use lexis_core::SourceFormat;

use crate::{Args, build_config};

#[test]
fn test_cli_overrides_defaults() {
    let args = Args::try_parse_from([
        "lexis",
        "--master-list",
        "heads.txt",
        "--output-json",
        "out/vocab.json",
        "--enable-source",
        "6",
        "--disable-source",
        "3",
        "--sequential",
        "--no-snapshots",
    ])
    .unwrap();

    let config = build_config(&args).unwrap();
    assert_eq!(config.master_list, PathBuf::from("heads.txt"));
    assert_eq!(config.output.json_path, PathBuf::from("out/vocab.json"));
    assert!(!config.parallel);
    assert!(!config.output.write_snapshots);

    let enabled: Vec<(u8, SourceFormat)> = config
        .enabled_sources()
        .iter()
        .map(|s| (s.rank, s.format))
        .collect();
    assert_eq!(
        enabled,
        vec![
            (2, SourceFormat::SlashInline),
            (4, SourceFormat::Block),
            (5, SourceFormat::Arrow),
            (6, SourceFormat::WordList),
        ]
    );
}

#[test]
fn test_unknown_rank_is_an_error() {
    let args = Args::try_parse_from(["lexis", "--enable-source", "9"]).unwrap();
    let err = build_config(&args).unwrap_err();
    assert!(err.to_string().contains("rank 9"));
}

#[test]
fn test_config_file_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lexis.json");
    std::fs::write(
        &path,
        r#"{ "sources": [{ "rank": 1, "path": "only.txt", "format": "word_list" }] }"#,
    )
    .unwrap();

    let args = Args::try_parse_from(["lexis", "--config", path.to_str().unwrap()]).unwrap();
    let config = build_config(&args).unwrap();
    assert_eq!(config.sources.len(), 1);
    assert_eq!(config.sources[0].format, SourceFormat::WordList);
}
