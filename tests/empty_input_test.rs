use tempfile::TempDir;
use tweet_etl::{CliConfig, EtlEngine, LocalStorage, TweetPipeline};

fn config_for(input_path: &str, output_path: &str) -> CliConfig {
    CliConfig {
        input_path: input_path.to_string(),
        output_path: output_path.to_string(),
        required_fields: vec![
            "author_id".to_string(),
            "text".to_string(),
            "created_at".to_string(),
        ],
        top_hashtags: 5,
        top_authors: 10,
        verbose: false,
        monitor: false,
    }
}

async fn run_pipeline(input_path: &str, output_path: &str) -> tweet_etl::domain::model::RunReport {
    let config = config_for(input_path, output_path);
    let storage = LocalStorage::new(output_path.to_string());
    let pipeline = TweetPipeline::new(storage, config);
    EtlEngine::new(pipeline).run().await.unwrap()
}

#[tokio::test]
async fn test_missing_input_file_still_completes() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("landing").to_str().unwrap().to_string();
    let input_path = temp_dir.path().join("does_not_exist.json");

    let report = run_pipeline(input_path.to_str().unwrap(), &output_path).await;

    assert_eq!(report.records_loaded, 0);
    assert_eq!(report.records_valid, 0);
    assert_eq!(report.rejections.total(), 0);
    assert_eq!(report.charts.rendered, 0);
    assert_eq!(report.charts.skipped, 3);

    // The landing file is still produced, just empty.
    let landing_file = std::path::Path::new(&output_path).join("cleaned_tweets.jsonl");
    assert!(landing_file.exists());
    assert_eq!(std::fs::read_to_string(&landing_file).unwrap(), "");
}

#[tokio::test]
async fn test_malformed_input_file_still_completes() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("landing").to_str().unwrap().to_string();
    let input_path = temp_dir.path().join("broken.json");
    std::fs::write(&input_path, "this is not json").unwrap();

    let report = run_pipeline(input_path.to_str().unwrap(), &output_path).await;

    assert_eq!(report.records_loaded, 0);
    assert_eq!(report.records_valid, 0);
    assert_eq!(report.charts.skipped, 3);
}

#[tokio::test]
async fn test_non_utf8_input_file_still_completes() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("landing").to_str().unwrap().to_string();
    let input_path = temp_dir.path().join("binary.json");
    std::fs::write(&input_path, b"[\xff\xfe]").unwrap();

    let report = run_pipeline(input_path.to_str().unwrap(), &output_path).await;

    assert_eq!(report.records_loaded, 0);
    assert_eq!(report.records_valid, 0);
    assert_eq!(report.charts.skipped, 3);
}

#[tokio::test]
async fn test_empty_array_input() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("landing").to_str().unwrap().to_string();
    let input_path = temp_dir.path().join("empty.json");
    std::fs::write(&input_path, "[]").unwrap();

    let report = run_pipeline(input_path.to_str().unwrap(), &output_path).await;

    assert_eq!(report.records_loaded, 0);
    assert_eq!(report.records_valid, 0);
    assert_eq!(report.charts.skipped, 3);

    let landing_file = std::path::Path::new(&output_path).join("cleaned_tweets.jsonl");
    assert!(landing_file.exists());
}

#[tokio::test]
async fn test_batch_where_nothing_validates() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("landing").to_str().unwrap().to_string();
    let input_path = temp_dir.path().join("rejects.json");

    let batch = serde_json::json!([
        {"author_id": "u1"},
        {"text": "no author or timestamp"},
        42,
        ["an", "array"]
    ]);
    std::fs::write(&input_path, serde_json::to_string(&batch).unwrap()).unwrap();

    let report = run_pipeline(input_path.to_str().unwrap(), &output_path).await;

    assert_eq!(report.records_loaded, 4);
    assert_eq!(report.records_valid, 0);
    assert_eq!(report.rejections.missing_fields, 2);
    assert_eq!(report.rejections.not_an_object, 2);
    assert_eq!(report.charts.rendered, 0);
    assert_eq!(report.charts.skipped, 3);

    let landing_file = std::path::Path::new(&output_path).join("cleaned_tweets.jsonl");
    assert_eq!(std::fs::read_to_string(&landing_file).unwrap(), "");
}
