//! Tests for the pair CLI command

use crate::cli::test_helpers::pair_args;
use crate::common::{engine_with, sample_engine, GENESIS_1_2};
use verselink::cli::commands::pair::{build_output, execute, run_pairing, PreparedGroups};
use verselink::cli::OutputFormat;
use verselink::core::config::Config;

#[tokio::test]
async fn test_pair_within_group_output() {
    let engine = engine_with(GENESIS_1_2, Config::default());
    let args = pair_args(&["heaven", "earth"], &[]);
    let groups = PreparedGroups::from_args(&args, &engine).unwrap();
    let outcome = run_pairing(&groups, &args, &engine).await.unwrap();
    let output = build_output(&groups, &args, &outcome);

    assert_eq!(output.mode, "within");
    assert_eq!(output.total_pairings, 1);
    let item = &output.pairings[0];
    assert_eq!(item.references, vec!["Genesis 1:1".to_string()]);
    assert_eq!(item.proximity, 0);
    assert_eq!(item.term_pairs, vec!["earth ↔ heaven".to_string()]);
    assert!(item.texts.is_none());
}

#[tokio::test]
async fn test_pair_between_groups_output() {
    let engine = engine_with(GENESIS_1_2, Config::default());
    let mut args = pair_args(&["heaven"], &["earth"]);
    args.text = true;
    let groups = PreparedGroups::from_args(&args, &engine).unwrap();
    let outcome = run_pairing(&groups, &args, &engine).await.unwrap();
    let output = build_output(&groups, &args, &outcome);

    assert_eq!(output.mode, "between");
    assert_eq!(output.group2, vec!["earth".to_string()]);
    assert_eq!(output.pairings.len(), 1);
    assert!(output.pairings[0].is_between_groups);
    assert_eq!(output.pairings[0].texts.as_ref().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_pair_limit_and_json() {
    let engine = sample_engine();
    let mut args = pair_args(&["light", "darkness", "god"], &[]);
    args.limit = Some(2);
    let groups = PreparedGroups::from_args(&args, &engine).unwrap();
    let outcome = run_pairing(&groups, &args, &engine).await.unwrap();
    let output = build_output(&groups, &args, &outcome);

    assert_eq!(output.pairings.len(), 2);
    assert!(output.total_pairings > 2);

    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["mode"], "within");
    assert!(json.get("group2").is_none());
    assert_eq!(json["pairings"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_pair_execute_formats() {
    let engine = sample_engine();
    let mut args = pair_args(&["light"], &["darkness"]);
    args.progress = true;
    assert!(execute(args, &engine, OutputFormat::Human).await.is_ok());
    assert!(execute(pair_args(&["light", "god"], &[]), &engine, OutputFormat::Json)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_pair_output_echoes_prepared_terms() {
    let engine = engine_with(GENESIS_1_2, Config::default());
    let args = pair_args(&["A", "Heaven", "earth", "heaven"], &[]);
    let groups = PreparedGroups::from_args(&args, &engine).unwrap();
    let outcome = run_pairing(&groups, &args, &engine).await.unwrap();
    let output = build_output(&groups, &args, &outcome);

    assert_eq!(output.group1, vec!["heaven".to_string(), "earth".to_string()]);
    let json = serde_json::to_value(&output).unwrap();
    assert_eq!(json["group1"], serde_json::json!(["heaven", "earth"]));
}

#[test]
fn test_pair_rejects_groups_with_no_usable_terms() {
    let engine = sample_engine();

    let err = PreparedGroups::from_args(&pair_args(&["a", "I"], &[]), &engine).unwrap_err();
    assert!(err.is_bad_request());

    let err = PreparedGroups::from_args(&pair_args(&["light"], &["o"]), &engine).unwrap_err();
    assert!(err.is_bad_request());
    assert!(err.message().contains("--with"));
}
