//! `native_node!` and `native_interface!` macros: one static schema per node kind.

/// Define a native node kind: the struct, its [`NodeType`] name and its
/// [`NativeNode`] impl with a static schema.
///
/// Each field is written `rust_name: Type => "GoFieldName"`. The schema kind
/// of every field follows from its Rust type through `FieldType`.
///
/// ```ignore
/// native_node! {
///     /// A binary expression.
///     BinaryExpr { x: Box<Expr> => "X", op: Token => "Op", y: Box<Expr> => "Y" }
/// }
/// ```
///
/// [`NodeType`]: uast_core::flatten::NodeType
/// [`NativeNode`]: uast_core::flatten::NativeNode
#[macro_export]
macro_rules! native_node {
    (
        $(#[$meta:meta])*
        $name:ident { $( $field:ident : $ty:ty => $go:literal ),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub struct $name {
            $( pub $field: $ty, )*
            pub span: ::uast_core::flatten::Span,
        }

        impl ::uast_core::flatten::NodeType for $name {
            const TYPE_NAME: &'static str = stringify!($name);
        }

        impl ::uast_core::flatten::NativeNode for $name {
            fn schema(&self) -> &'static ::uast_core::flatten::NodeSchema {
                static SCHEMA: ::uast_core::flatten::NodeSchema = ::uast_core::flatten::NodeSchema {
                    type_name: stringify!($name),
                    fields: &[
                        $(
                            ::uast_core::flatten::FieldDecl {
                                name: $go,
                                kind: <$ty as ::uast_core::flatten::FieldType>::KIND,
                            },
                        )*
                    ],
                };
                &SCHEMA
            }

            #[allow(unused_mut, unused_variables, unused_assignments)]
            fn field(&self, index: usize) -> ::uast_core::flatten::Field<'_> {
                let mut i = 0usize;
                $(
                    if index == i {
                        return ::uast_core::flatten::FieldType::to_field(&self.$field);
                    }
                    i += 1;
                )*
                ::uast_core::flatten::Field::Node(None)
            }

            fn span(&self) -> Option<::uast_core::flatten::Span> {
                Some(self.span)
            }
        }
    };
}

/// Define an interface category (Go's `Expr`, `Stmt`, …) as an enum over
/// node kinds. Variants are named after the kinds they hold and the
/// category's name is used for list wrappers.
#[macro_export]
macro_rules! native_interface {
    (
        $(#[$meta:meta])*
        $name:ident { $( $variant:ident ),* $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq)]
        pub enum $name {
            $( $variant($variant), )*
        }

        impl $name {
            /// Span of the wrapped node.
            pub fn span(&self) -> ::uast_core::flatten::Span {
                match self {
                    $( Self::$variant(n) => n.span, )*
                }
            }

            /// Go type name of the wrapped node.
            pub fn kind(&self) -> &'static str {
                match self {
                    $( Self::$variant(_) => stringify!($variant), )*
                }
            }
        }

        impl ::uast_core::flatten::NodeType for $name {
            const TYPE_NAME: &'static str = stringify!($name);
        }

        impl ::uast_core::flatten::NativeNode for $name {
            fn schema(&self) -> &'static ::uast_core::flatten::NodeSchema {
                match self {
                    $( Self::$variant(n) => ::uast_core::flatten::NativeNode::schema(n), )*
                }
            }

            fn field(&self, index: usize) -> ::uast_core::flatten::Field<'_> {
                match self {
                    $( Self::$variant(n) => ::uast_core::flatten::NativeNode::field(n, index), )*
                }
            }

            fn span(&self) -> Option<::uast_core::flatten::Span> {
                Some(self.span())
            }
        }

        $(
            impl From<$variant> for $name {
                fn from(node: $variant) -> Self {
                    Self::$variant(node)
                }
            }
        )*
    };
}
