use clap::Parser;
use ddbackup_cli::cli::{Cli, Commands, ConfigCommands};
use ddbackup_cli::commands::{build_engine, execute, SyncAction};
use ddbackup_cli::settings::{apply_cli_overrides, sync_options};
use ddbackup_config::BackupConfig;
use serde_json::json;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn parse(args: &[&str]) -> Cli {
    temp_env::with_vars(
        [("DD_API_KEY", None::<&str>), ("DD_APP_KEY", None::<&str>)],
        || Cli::try_parse_from(args).unwrap(),
    )
}

fn config_for(server_uri: &str, root: &Path, backup: bool) -> BackupConfig {
    let mut config = BackupConfig::default();
    config.api.base_url = format!("{}/api", server_uri);
    config.api.api_key = Some("api".to_string());
    config.api.app_key = Some("app".to_string());
    config.sync.config_dir = root.join("config");
    config.sync.backup_dir = root.join("history");
    config.sync.backup = backup;
    std::fs::create_dir_all(&config.sync.config_dir).unwrap();
    std::fs::create_dir_all(&config.sync.backup_dir).unwrap();
    config
}

#[test]
fn test_push_flags_parse() {
    let cli = parse(&[
        "ddbackup",
        "--dry-run",
        "--kind",
        "monitors",
        "--kind",
        "downtimes",
        "push",
        "--override-remote",
        "--skip-pull",
    ]);

    assert!(cli.dry_run);
    assert_eq!(cli.kinds, vec!["monitors", "downtimes"]);
    assert!(matches!(
        cli.command,
        Some(Commands::Push {
            override_remote: true,
            skip_pull: true
        })
    ));
}

#[test]
fn test_global_flags_after_subcommand() {
    let cli = parse(&["ddbackup", "pull", "--config-dir", "/tmp/dd", "--no-backup"]);
    assert!(matches!(cli.command, Some(Commands::Pull)));
    assert!(cli.no_backup);
    assert_eq!(cli.config_dir.as_deref(), Some(Path::new("/tmp/dd")));
}

#[test]
fn test_config_validate_requires_file() {
    let result = Cli::try_parse_from(["ddbackup", "config", "validate"]);
    assert!(result.is_err());

    let cli = parse(&["ddbackup", "config", "validate", "--config-file", "dd.yaml"]);
    match cli.command {
        Some(Commands::Config {
            config_cmd: ConfigCommands::Validate { config_file },
        }) => assert_eq!(config_file, Path::new("dd.yaml")),
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn test_keys_come_from_environment() {
    let cli = temp_env::with_vars(
        [("DD_API_KEY", Some("env-api")), ("DD_APP_KEY", Some("env-app"))],
        || Cli::try_parse_from(["ddbackup", "pull"]).unwrap(),
    );

    let config = apply_cli_overrides(BackupConfig::default(), &cli).unwrap();
    assert_eq!(config.api.api_key.as_deref(), Some("env-api"));
    assert_eq!(config.api.app_key.as_deref(), Some("env-app"));
}

#[test]
fn test_missing_keys_fail_before_any_request() {
    let root = TempDir::new().unwrap();
    let mut config = config_for("http://127.0.0.1:9", root.path(), true);
    config.api.app_key = None;

    let options = sync_options(&config, false, false);
    let err = build_engine(&config, options, &[]).unwrap_err();
    assert!(format!("{:#}", err).contains("app_key"));
}

#[test]
fn test_missing_config_dir_is_a_setup_error() {
    let root = TempDir::new().unwrap();
    let mut config = config_for("http://127.0.0.1:9", root.path(), true);
    config.sync.config_dir = root.path().join("absent");

    let options = sync_options(&config, false, false);
    let err = build_engine(&config, options, &[]).unwrap_err();
    assert!(format!("{:#}", err).contains("does not exist"));
}

#[test]
fn test_unknown_kind_is_rejected() {
    let root = TempDir::new().unwrap();
    let config = config_for("http://127.0.0.1:9", root.path(), false);

    let options = sync_options(&config, false, false);
    let result = build_engine(&config, options, &["slos".to_string()]);
    assert!(result.is_err());
}

#[tokio::test]
async fn test_pull_writes_monitor_file() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/monitor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 11, "name": "cpu", "type": "metric alert", "query": "q"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let root = TempDir::new().unwrap();
    let config = config_for(&server.uri(), root.path(), true);
    let options = sync_options(&config, false, false);
    let engine = build_engine(&config, options, &["monitors".to_string()]).unwrap();

    let report = execute(&engine, SyncAction::Pull).await.unwrap();
    assert_eq!(report.written, 1);

    let written = std::fs::read_to_string(config.sync.config_dir.join("monitors.yaml")).unwrap();
    assert!(written.contains("name: cpu"));
    assert!(written.contains("id: 11"));
}

#[tokio::test]
async fn test_push_then_pull_refreshes_ids() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/monitor"))
        .and(query_param("name", "cpu"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .with_priority(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/monitor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 321, "name": "cpu", "type": "metric alert"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/monitor"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 321, "name": "cpu", "type": "metric alert"}
        ])))
        .mount(&server)
        .await;

    let root = TempDir::new().unwrap();
    let config = config_for(&server.uri(), root.path(), false);
    std::fs::write(
        config.sync.config_dir.join("monitors.yaml"),
        "- name: cpu\n  id: -1\n  delegate:\n    name: cpu\n    type: metric alert\n",
    )
    .unwrap();

    let options = sync_options(&config, false, false);
    let engine = build_engine(&config, options, &["monitors".to_string()]).unwrap();
    let report = execute(&engine, SyncAction::Push { skip_pull: false })
        .await
        .unwrap();

    assert_eq!(report.created, 1);
    assert_eq!(report.written, 1);
    let written = std::fs::read_to_string(config.sync.config_dir.join("monitors.yaml")).unwrap();
    assert!(written.contains("id: 321"));
}
