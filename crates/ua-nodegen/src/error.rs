//! Error types for statement emission and identifier parsing.

use thiserror::Error;

use crate::model::{NodeId, ScalarKind};

/// Error during statement emission.
///
/// Inputs are pre-validated upstream, so the only failures are value-level:
/// an array value that defeats element-type inference would otherwise turn
/// into a type descriptor that misreads the value's memory layout in the
/// generated program.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EmitError {
    #[error("variable {node} has an empty array value; no element to infer the type from")]
    EmptyArrayValue { node: NodeId },

    #[error(
        "variable {node} has a mixed array value: element {index} is {found:?}, expected {expected:?}"
    )]
    MixedArrayValue {
        node: NodeId,
        expected: ScalarKind,
        found: ScalarKind,
        index: usize,
    },

    #[error(
        "variable {node} is registered as {declared:?} but its value infers as {inferred:?}"
    )]
    DeclaredTypeMismatch {
        node: NodeId,
        declared: ScalarKind,
        inferred: ScalarKind,
    },
}

/// Error parsing a node id from its string syntax.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdParseError {
    #[error("missing identifier part (expected `i=`, `s=`, `g=` or `b=`)")]
    MissingIdentifier,

    #[error("invalid namespace index: {text}")]
    InvalidNamespace { text: String },

    #[error("invalid numeric identifier: {text}")]
    InvalidNumeric { text: String },

    #[error("invalid GUID identifier: {text}")]
    InvalidGuid { text: String },

    #[error("unknown identifier class: {class}=")]
    UnknownIdentifierClass { class: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_error_messages_name_the_node() {
        let err = EmitError::EmptyArrayValue {
            node: NodeId::numeric(2, 6001),
        };
        assert!(err.to_string().contains("ns=2;i=6001"));

        let err = EmitError::MixedArrayValue {
            node: NodeId::numeric(0, 1),
            expected: ScalarKind::Int32,
            found: ScalarKind::Double,
            index: 3,
        };
        let message = err.to_string();
        assert!(message.contains("element 3"));
        assert!(message.contains("Double"));
        assert!(message.contains("Int32"));
    }
}
