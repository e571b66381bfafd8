//! Go lexical tokens, printed the way the Go toolchain prints them.

use std::borrow::Cow;
use std::fmt;

use uast_core::flatten::{Field, FieldKind, FieldType};

macro_rules! tokens {
    ($( $variant:ident => $text:literal ),* $(,)?) => {
        /// A Go token kind. Literal kinds print as their class name
        /// (`INT`, `STRING`); operators and keywords print as written.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Token {
            $( $variant, )*
        }

        impl Token {
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $text, )*
                }
            }

            fn from_text(text: &str) -> Option<Self> {
                match text {
                    $( $text => Some(Self::$variant), )*
                    _ => None,
                }
            }
        }
    };
}

tokens! {
    Illegal => "ILLEGAL",

    Int => "INT",
    Float => "FLOAT",
    Imag => "IMAG",
    Char => "CHAR",
    String => "STRING",

    Add => "+",
    Sub => "-",
    Mul => "*",
    Quo => "/",
    Rem => "%",

    And => "&",
    Or => "|",
    Xor => "^",
    Shl => "<<",
    Shr => ">>",
    AndNot => "&^",

    AddAssign => "+=",
    SubAssign => "-=",
    MulAssign => "*=",
    QuoAssign => "/=",
    RemAssign => "%=",

    AndAssign => "&=",
    OrAssign => "|=",
    XorAssign => "^=",
    ShlAssign => "<<=",
    ShrAssign => ">>=",
    AndNotAssign => "&^=",

    LAnd => "&&",
    LOr => "||",
    Arrow => "<-",
    Inc => "++",
    Dec => "--",

    Eql => "==",
    Lss => "<",
    Gtr => ">",
    Assign => "=",
    Not => "!",

    Neq => "!=",
    Leq => "<=",
    Geq => ">=",
    Define => ":=",
    Ellipsis => "...",

    Break => "break",
    Const => "const",
    Continue => "continue",
    Fallthrough => "fallthrough",
    Goto => "goto",
    Import => "import",
    Type => "type",
    Var => "var",

    Tilde => "~",
}

impl Token {
    /// Operator or keyword token for its source text. Literal class names
    /// are not source text and never match.
    pub fn from_operator(text: &str) -> Option<Self> {
        Self::from_text(text.trim()).filter(|t| !t.is_literal() && *t != Self::Illegal)
    }

    /// Basic literal classes (`INT`, `FLOAT`, `IMAG`, `CHAR`, `STRING`).
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Float | Self::Imag | Self::Char | Self::String
        )
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::Break
                | Self::Const
                | Self::Continue
                | Self::Fallthrough
                | Self::Goto
                | Self::Import
                | Self::Type
                | Self::Var
        )
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FieldType for Token {
    const KIND: FieldKind = FieldKind::Scalar;

    fn to_field(&self) -> Field<'_> {
        Field::Scalar(Cow::Borrowed(self.as_str()))
    }
}

/// Channel direction, printed as Go's bit set (`SEND=1`, `RECV=2`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChanDir {
    Send,
    Recv,
    Both,
}

impl ChanDir {
    pub fn bits(self) -> u8 {
        match self {
            Self::Send => 1,
            Self::Recv => 2,
            Self::Both => 3,
        }
    }
}

impl FieldType for ChanDir {
    const KIND: FieldKind = FieldKind::Scalar;

    fn to_field(&self) -> Field<'_> {
        Field::Scalar(Cow::Owned(self.bits().to_string()))
    }
}
