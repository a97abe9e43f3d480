use task_view_rs::TaskViewError;

#[test]
fn test_error_types() {
    let err = TaskViewError::Transport("connection refused".to_string());
    assert_eq!(err.to_string(), "Transport error: connection refused");

    let err = TaskViewError::Validation("Email already taken".to_string());
    assert_eq!(err.to_string(), "Validation error: Email already taken");

    let err = TaskViewError::TaskNotFound("test-id".to_string());
    assert_eq!(err.to_string(), "Task not found: test-id");

    let err = TaskViewError::ConfigError("bad origin".to_string());
    assert_eq!(err.to_string(), "Configuration error: bad origin");
}

#[test]
fn test_deserialization_error_wraps_serde() {
    let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err = TaskViewError::from(serde_err);
    assert!(err.to_string().starts_with("Deserialization error:"));
}
