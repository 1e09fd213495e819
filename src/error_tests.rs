use std::path::PathBuf;

use super::*;

#[test]
fn error_display_file_open_names_role_and_path() {
    let err = CheckerError::FileOpen {
        role: StreamRole::Reference,
        path: PathBuf::from("tc.out"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    let msg = err.to_string();
    assert!(msg.contains("reference output"));
    assert!(msg.contains("tc.out"));
}

#[test]
fn error_display_stream_read() {
    let err = CheckerError::StreamRead {
        role: StreamRole::Candidate,
        source: std::io::Error::other("device gone"),
    };
    assert_eq!(err.to_string(), "Failed to read candidate output");
    assert_eq!(err.detail().as_deref(), Some("device gone"));
}

#[test]
fn error_display_config() {
    let err = CheckerError::Config("unknown level".to_string());
    assert_eq!(err.to_string(), "Configuration error: unknown level");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(CheckerError::Config("x".to_string()).error_type(), "Config");
    assert_eq!(
        CheckerError::StreamRead {
            role: StreamRole::Reference,
            source: std::io::Error::other("x"),
        }
        .error_type(),
        "StreamRead"
    );
}

#[test]
fn toml_error_is_a_config_error() {
    let parse_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
    let err: CheckerError = parse_err.into();
    assert_eq!(err.error_type(), "Config");
    assert!(err.suggestion().is_some());
}

#[test]
fn stream_role_display() {
    assert_eq!(StreamRole::Input.to_string(), "test input");
    assert_eq!(StreamRole::Reference.to_string(), "reference output");
    assert_eq!(StreamRole::Candidate.to_string(), "candidate output");
}
