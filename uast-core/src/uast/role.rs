//! Semantic role tags attached by the annotation pipeline.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A language-independent semantic tag. Serialized by variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    File,
    Package,
    Identifier,
    Binary,
    Unary,
    Expression,
    Statement,
    Declaration,
    Import,
    Function,
    ArgsList,
    If,
    Switch,
    Case,
    For,
    Block,
    Return,
    Call,
    List,
    Type,
    Assignment,
    Comment,
    Variable,
    Literal,
    Number,
    String,
    Incomplete,
}

impl Role {
    pub fn name(self) -> &'static str {
        match self {
            Self::File => "File",
            Self::Package => "Package",
            Self::Identifier => "Identifier",
            Self::Binary => "Binary",
            Self::Unary => "Unary",
            Self::Expression => "Expression",
            Self::Statement => "Statement",
            Self::Declaration => "Declaration",
            Self::Import => "Import",
            Self::Function => "Function",
            Self::ArgsList => "ArgsList",
            Self::If => "If",
            Self::Switch => "Switch",
            Self::Case => "Case",
            Self::For => "For",
            Self::Block => "Block",
            Self::Return => "Return",
            Self::Call => "Call",
            Self::List => "List",
            Self::Type => "Type",
            Self::Assignment => "Assignment",
            Self::Comment => "Comment",
            Self::Variable => "Variable",
            Self::Literal => "Literal",
            Self::Number => "Number",
            Self::String => "String",
            Self::Incomplete => "Incomplete",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
