use std::env;
use std::fs;
use std::sync::Mutex;
use task_view_rs::config::Config;

// Mutex to ensure environment variable tests don't run in parallel
static ENV_MUTEX: Mutex<()> = Mutex::new(());

#[test]
fn test_load_config_from_yaml() {
    let yaml_content = r#"
api_origin: "https://tasks.example.com"
request_timeout_secs: 10
"#;

    let filename = "test_yaml_1.yaml";
    fs::write(filename, yaml_content).unwrap();

    let config = Config::from_file("test_yaml_1").unwrap();

    assert_eq!(config.api_origin, "https://tasks.example.com");
    assert_eq!(config.request_timeout_secs, 10);

    fs::remove_file(filename).unwrap();
}

#[test]
fn test_load_config_from_toml() {
    let toml_content = r#"
api_origin = "http://127.0.0.1:8080"
request_timeout_secs = 5
"#;

    let filename = "test_toml_1.toml";
    fs::write(filename, toml_content).unwrap();

    let config = Config::from_file("test_toml_1").unwrap();

    assert_eq!(config.api_origin, "http://127.0.0.1:8080");
    assert_eq!(config.request_timeout_secs, 5);

    fs::remove_file(filename).unwrap();
}

#[test]
fn test_invalid_origin_in_file_is_rejected() {
    let toml_content = r#"
api_origin = "not-a-url"
request_timeout_secs = 5
"#;

    let filename = "test_toml_2.toml";
    fs::write(filename, toml_content).unwrap();

    let result = Config::from_file("test_toml_2");
    assert!(result.is_err());

    fs::remove_file(filename).unwrap();
}

#[test]
fn test_config_from_env() {
    let _guard = ENV_MUTEX.lock().unwrap();

    env::set_var("TASK_VIEW_API_ORIGIN", "https://env.example.com");
    env::set_var("TASK_VIEW_REQUEST_TIMEOUT_SECS", "15");

    let config = Config::from_env().unwrap();
    assert_eq!(config.api_origin, "https://env.example.com");
    assert_eq!(config.request_timeout_secs, 15);

    env::remove_var("TASK_VIEW_API_ORIGIN");
    env::remove_var("TASK_VIEW_REQUEST_TIMEOUT_SECS");
}

#[test]
fn test_config_from_env_requires_variables() {
    let _guard = ENV_MUTEX.lock().unwrap();

    env::remove_var("TASK_VIEW_API_ORIGIN");
    env::remove_var("TASK_VIEW_REQUEST_TIMEOUT_SECS");

    assert!(Config::from_env().is_err());
}
