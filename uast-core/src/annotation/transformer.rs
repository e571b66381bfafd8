//! The pass contract and the ordered pipeline.

use std::time::Instant;

use super::{Encoding, PositionEnricher, RoleTable, RoleTagger};
use crate::errors::AnnotationError;
use crate::uast::Node;

/// A tree-mutating annotation pass.
///
/// Passes must be idempotent and may read nothing but `code`, `encoding`,
/// the tree itself and immutable static tables.
pub trait Transformer: Send + Sync {
    fn name(&self) -> &'static str;

    fn transform(&self, code: &str, encoding: Encoding, root: &mut Node)
        -> Result<(), AnnotationError>;
}

/// An ordered list of passes, run strictly in registration order.
pub struct Pipeline {
    passes: Vec<Box<dyn Transformer>>,
}

impl Pipeline {
    /// Pipeline with the two built-in passes: roles from `roles`, then positions.
    pub fn new(roles: &'static RoleTable) -> Self {
        Self {
            passes: vec![
                Box::new(RoleTagger::new(roles)),
                Box::new(PositionEnricher),
            ],
        }
    }

    /// Append a pass after every pass registered so far.
    pub fn register(&mut self, pass: Box<dyn Transformer>) -> &mut Self {
        self.passes.push(pass);
        self
    }

    pub fn with_pass(mut self, pass: Box<dyn Transformer>) -> Self {
        self.register(pass);
        self
    }

    pub fn pass_names(&self) -> Vec<&'static str> {
        self.passes.iter().map(|p| p.name()).collect()
    }

    pub fn run(&self, code: &str, encoding: Encoding, root: &mut Node) -> Result<(), AnnotationError> {
        for pass in &self.passes {
            let started = Instant::now();
            pass.transform(code, encoding, root)?;
            tracing::trace!(
                pass = pass.name(),
                elapsed_us = started.elapsed().as_micros() as u64,
                "annotation pass done"
            );
        }
        Ok(())
    }
}
