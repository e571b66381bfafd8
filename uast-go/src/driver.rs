//! Request handling: parse, flatten, canonicalize, annotate.

use std::borrow::Cow;
use std::time::Instant;

use base64::Engine as _;
use tracing::{debug, warn};
use uast_core::annotation::{Encoding, Pipeline};
use uast_core::config::{DriverConfig, UastConfig};
use uast_core::errors::{DriverError, ParseError, UastErrorCode};
use uast_core::flatten::{GenericNode, NativeNode, NodeType};
use uast_core::protocol::{Request, Response};
use uast_core::tonode::ToNode;
use uast_core::uast::Node;

use crate::native::{File, GoParser};
use crate::normalizer;

/// Handles parse requests. Holds only read-only state and can be shared
/// across threads.
pub struct Driver {
    config: DriverConfig,
    parser: GoParser,
    to_node: ToNode,
    pipeline: Pipeline,
}

impl Driver {
    pub fn new(config: &UastConfig) -> Self {
        Self {
            config: config.driver.clone(),
            parser: GoParser::new(),
            to_node: normalizer::to_node(),
            pipeline: normalizer::pipeline(),
        }
    }

    /// Handle one request. Never panics on bad input: every failure becomes
    /// a `fatal` response.
    pub fn handle(&self, request: &Request) -> Response {
        let start = Instant::now();
        let response = match self.process(request) {
            Ok(response) => response,
            Err(e) => {
                warn!(code = e.error_code(), error = %e, "request failed");
                Response::fatal(vec![e.coded_string()], None)
            }
        };
        debug!(
            status = ?response.status,
            errors = response.errors.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "request handled"
        );
        response
    }

    fn process(&self, request: &Request) -> Result<Response, DriverError> {
        if !self.config.accepts_language(request.language.as_deref()) {
            return Err(ParseError::UnsupportedLanguage {
                language: request.language.clone().unwrap_or_default(),
            }
            .into());
        }

        let code = self.decode(request)?;
        let parsed = self.parser.parse(&code)?;
        let mut root = self.canonicalize(&parsed.file)?;
        self.pipeline.run(&code, request.encoding, &mut root)?;

        if parsed.has_errors() {
            debug!(diagnostics = parsed.diagnostics.len(), "partial tree");
            return Ok(Response::fatal(parsed.messages(), Some(root)));
        }
        Ok(Response::ok(root))
    }

    /// Decoded source text, checked against the size limit.
    fn decode<'r>(&self, request: &'r Request) -> Result<Cow<'r, str>, ParseError> {
        let max = self.config.effective_max_content_size();
        let code = match request.encoding {
            Encoding::Utf8 => Cow::Borrowed(request.content.as_str()),
            Encoding::Base64 => {
                let invalid = |message: String| ParseError::InvalidEncoding {
                    encoding: Encoding::Base64.name().to_string(),
                    message,
                };
                let bytes = base64::engine::general_purpose::STANDARD
                    .decode(request.content.trim())
                    .map_err(|e| invalid(e.to_string()))?;
                Cow::Owned(String::from_utf8(bytes).map_err(|e| invalid(e.to_string()))?)
            }
        };
        let size = code.len() as u64;
        if size > max {
            return Err(ParseError::ContentTooLarge { size, max });
        }
        Ok(code)
    }

    fn canonicalize(&self, file: &File) -> Result<Node, DriverError> {
        let generic = normalizer::FLATTENER
            .flatten(Some(file as &dyn NativeNode))
            .unwrap_or_else(|| GenericNode::new(File::TYPE_NAME));
        Ok(self.to_node.to_node_from(&generic)?)
    }
}
