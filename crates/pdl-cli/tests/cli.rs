use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Binary with a clean environment and an empty config directory.
fn pdl_cli(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pdl-cli").expect("binary is built");
    cmd.env_remove("PEOPLEDATALABS_KEY")
        .env_remove("LOG_LEVEL")
        .arg("--config-dir")
        .arg(config_dir.path());
    cmd
}

#[test]
fn test_missing_api_key_is_fatal() {
    let config_dir = TempDir::new().unwrap();

    pdl_cli(&config_dir)
        .args(["--query", "person", "--github", "octocat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("PEOPLEDATALABS_KEY"));
}

#[test]
fn test_invalid_log_level_is_fatal() {
    let config_dir = TempDir::new().unwrap();

    pdl_cli(&config_dir)
        .env("PEOPLEDATALABS_KEY", "test_api_key_123")
        .env("LOG_LEVEL", "chatty")
        .args(["--query", "person", "--github", "octocat"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("LOG_LEVEL"));
}

#[test]
fn test_invalid_email_fails_before_request() {
    let config_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    pdl_cli(&config_dir)
        .env("PEOPLEDATALABS_KEY", "test_api_key_123")
        .args(["--base-url", "http://127.0.0.1:9", "--output-dir"])
        .arg(output_dir.path())
        .args(["--query", "person", "--email", "BAD@@"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid email: BAD@@"));

    assert_eq!(std::fs::read_dir(output_dir.path()).unwrap().count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_person_query_writes_artifacts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v5/person/search"))
        .and(header("X-Api-Key", "test_api_key_123"))
        .and(body_partial_json(json!({
            "sql": "SELECT * FROM person WHERE (github_username = 'octocat' OR \
                    personal_emails = 'person@example.com' OR work_email = 'person@example.com')"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": [
                {"id": "first", "full_name": "the octocat", "work_email": null},
                {"id": "second", "full_name": "octo cat"}
            ],
            "total": 2
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();
    let data_dir = output_dir.path().join("data");

    pdl_cli(&config_dir)
        .env("PEOPLEDATALABS_KEY", "test_api_key_123")
        .args(["--base-url", &server.uri(), "--output-dir"])
        .arg(&data_dir)
        .args([
            "--query",
            "person",
            "--github",
            "octocat",
            "--email",
            "Person@Example.COM",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Query complete."));

    let mut written: Vec<String> = std::fs::read_dir(&data_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    written.sort();
    assert_eq!(
        written,
        [
            "github_octocat_email_person_example_com.first.json",
            "github_octocat_email_person_example_com.full.json",
            "github_octocat_email_person_example_com.second.json",
        ]
    );

    let narrowed: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(data_dir.join("github_octocat_email_person_example_com.first.json"))
            .unwrap(),
    )
    .unwrap();
    assert_eq!(narrowed, json!({"id": "first", "fullName": "the octocat"}));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rate_limited_request_fails_without_artifacts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "status": 429,
            "error": {"type": "rate_limit_error", "message": "Too many requests"}
        })))
        .mount(&server)
        .await;

    let config_dir = TempDir::new().unwrap();
    let output_dir = TempDir::new().unwrap();

    pdl_cli(&config_dir)
        .env("PEOPLEDATALABS_KEY", "test_api_key_123")
        .args(["--base-url", &server.uri(), "--output-dir"])
        .arg(output_dir.path())
        .args(["--query", "person", "--linkedin", "jdoe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request failed with status: 429"));

    assert_eq!(std::fs::read_dir(output_dir.path()).unwrap().count(), 0);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_key_read_from_dotenv_in_working_directory() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v5/person/search"))
        .and(header("X-Api-Key", "key_from_dotenv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": 200,
            "data": [],
            "total": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config_dir = TempDir::new().unwrap();
    let work_dir = TempDir::new().unwrap();
    std::fs::write(
        work_dir.path().join(".env"),
        "PEOPLEDATALABS_KEY=key_from_dotenv\nLOG_LEVEL=debug\n",
    )
    .unwrap();

    pdl_cli(&config_dir)
        .current_dir(work_dir.path())
        .args(["--base-url", &server.uri()])
        .args(["--query", "person", "--github", "octocat"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Log level: debug"));

    assert!(work_dir.path().join("data").join("github_octocat.full.json").exists());
}
