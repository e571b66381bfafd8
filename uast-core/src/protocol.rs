//! Request/response shapes exchanged with the transport.

use serde::{Deserialize, Serialize};

use crate::annotation::Encoding;
use crate::uast::Node;

/// One parse request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(default)]
    pub encoding: Encoding,
}

impl Request {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            language: None,
            encoding: Encoding::Utf8,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Fatal,
}

/// One parse response. A fatal response may still carry a partial tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub status: Status,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ast: Option<Node>,
}

impl Response {
    pub fn ok(ast: Node) -> Self {
        Self {
            status: Status::Ok,
            errors: Vec::new(),
            ast: Some(ast),
        }
    }

    pub fn fatal(errors: Vec<String>, ast: Option<Node>) -> Self {
        Self {
            status: Status::Fatal,
            errors,
            ast,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == Status::Ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults() {
        let req: Request = serde_json::from_str(r#"{"content":"package main"}"#).unwrap();
        assert_eq!(req, Request::new("package main"));
    }

    #[test]
    fn test_request_base64_encoding() {
        let req: Request =
            serde_json::from_str(r#"{"content":"cGFja2FnZSBtYWlu","language":"go","encoding":"BASE64"}"#)
                .unwrap();
        assert_eq!(req.encoding, Encoding::Base64);
        assert_eq!(req.language.as_deref(), Some("go"));
    }

    #[test]
    fn test_request_requires_content() {
        assert!(serde_json::from_str::<Request>(r#"{"language":"go"}"#).is_err());
    }

    #[test]
    fn test_fatal_response_shape() {
        let res = Response::fatal(vec!["1:1: expected 'package', found 'EOF'".into()], None);
        let value = serde_json::to_value(&res).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "status": "fatal",
                "errors": ["1:1: expected 'package', found 'EOF'"],
            })
        );
    }
}
