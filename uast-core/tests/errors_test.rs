//! Tests for the error types and their codes.

use std::collections::HashSet;

use uast_core::errors::*;

#[test]
fn test_every_error_has_a_code() {
    let errors: Vec<(&str, String)> = vec![
        code_of(ParseError::NoTree),
        code_of(ParseError::UnsupportedLanguage {
            language: "cobol".into(),
        }),
        code_of(ParseError::InvalidEncoding {
            encoding: "BASE64".into(),
            message: "bad".into(),
        }),
        code_of(ParseError::ContentTooLarge { size: 2, max: 1 }),
        code_of(ToNodeError::InvalidSpan { start: 2, end: 1 }),
        code_of(AnnotationError::new("roles", "boom")),
        code_of(ConfigError::FileNotFound {
            path: "/nope".into(),
        }),
    ];
    for (code, coded) in &errors {
        assert!(!code.is_empty());
        assert!(coded.starts_with(&format!("[{code}] ")), "{coded}");
    }
    let distinct: HashSet<_> = errors.iter().map(|(c, _)| *c).collect();
    assert_eq!(distinct.len(), 7);
}

fn code_of<E: UastErrorCode + std::fmt::Display>(e: E) -> (&'static str, String) {
    (e.error_code(), e.coded_string())
}

#[test]
fn test_driver_error_delegates_code() {
    let err: DriverError = ParseError::UnsupportedLanguage {
        language: "python".into(),
    }
    .into();
    assert_eq!(err.error_code(), "UNSUPPORTED_LANGUAGE");
    assert!(err.to_string().contains("python"));

    let err: DriverError = ToNodeError::AmbiguousRoot { count: 3 }.into();
    assert!(matches!(err, DriverError::ToNode(ToNodeError::AmbiguousRoot { count: 3 })));
    assert_eq!(err.error_code(), "TONODE_ERROR");

    let err: DriverError = ConfigError::ValidationFailed {
        field: "driver.language".into(),
        message: "must not be empty".into(),
    }
    .into();
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_serialization_errors_convert() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: ToNodeError = json_err.into();
    assert_eq!(err.error_code(), "SERIALIZATION_ERROR");
}

#[test]
fn test_messages_name_the_limit() {
    let err = ParseError::ContentTooLarge { size: 20, max: 10 };
    assert_eq!(err.to_string(), "Content of 20 bytes exceeds the limit of 10 bytes");
}
