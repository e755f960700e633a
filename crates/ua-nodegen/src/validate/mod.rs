//! Pre-emission validation.
//!
//! Emission itself rejects the fatal cases (empty or mixed array values) at
//! the point of use; this module lets a driver run the same checks over a
//! whole nodeset up front, plus an advisory declared-type check that
//! emission never performs.
//!
//! **Note:** the type descriptor written into generated code is always the
//! structurally inferred one. The registry check only reports when the
//! upstream declaration disagrees with what will actually be emitted.

use rustc_hash::FxHashMap;

use crate::error::EmitError;
use crate::model::{Node, NodeId, ScalarKind, ValueTypeError};

/// Advisory registry of declared variable data types.
///
/// Drivers that resolved `DataType` attributes upstream can register them
/// here and catch declaration/value disagreements before emission.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    declared: FxHashMap<NodeId, ScalarKind>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the declared data type for a variable node.
    pub fn register(&mut self, node: NodeId, kind: ScalarKind) {
        self.declared.insert(node, kind);
    }

    /// The declared data type for a node, if registered.
    pub fn declared_kind(&self, node: &NodeId) -> Option<ScalarKind> {
        self.declared.get(node).copied()
    }
}

/// Checks that a node's value will survive emission.
///
/// Only variable nodes carry values; every other class passes trivially.
pub fn validate_node(node: &Node) -> Result<(), EmitError> {
    let Node::Variable(variable) = node else {
        return Ok(());
    };
    let Some(value) = &variable.value else {
        return Ok(());
    };

    value.element_kind().map(|_| ()).map_err(|e| match e {
        ValueTypeError::EmptyArray => EmitError::EmptyArrayValue {
            node: variable.base.id.clone(),
        },
        ValueTypeError::Mixed {
            expected,
            found,
            index,
        } => EmitError::MixedArrayValue {
            node: variable.base.id.clone(),
            expected,
            found,
            index,
        },
    })
}

/// Checks a node's inferred value type against its registered declaration.
///
/// Nodes without a value, and nodes absent from the registry, pass.
pub fn check_declared_type(node: &Node, registry: &TypeRegistry) -> Result<(), EmitError> {
    let Node::Variable(variable) = node else {
        return Ok(());
    };
    let Some(value) = &variable.value else {
        return Ok(());
    };
    let Some(declared) = registry.declared_kind(&variable.base.id) else {
        return Ok(());
    };

    // Inference failures belong to validate_node / emission.
    let Ok(inferred) = value.element_kind() else {
        return Ok(());
    };

    if inferred != declared {
        return Err(EmitError::DeclaredTypeMismatch {
            node: variable.base.id.clone(),
            declared,
            inferred,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeBuilder, NodeId, QualifiedName, Scalar, Value};

    fn variable_with(value: Option<Value>) -> Node {
        NodeBuilder::new(NodeId::numeric(1, 6001), QualifiedName::new(1, "V"))
            .variable(|v| v.value = value)
    }

    #[test]
    fn test_validate_node_passes_non_variables() {
        let node = NodeBuilder::new(NodeId::numeric(1, 1), QualifiedName::new(1, "O"))
            .object(|_| {});
        assert!(validate_node(&node).is_ok());
    }

    #[test]
    fn test_validate_node_passes_valueless_variable() {
        assert!(validate_node(&variable_with(None)).is_ok());
    }

    #[test]
    fn test_validate_node_rejects_empty_array() {
        let node = variable_with(Some(Value::Array(vec![])));
        assert_eq!(
            validate_node(&node),
            Err(EmitError::EmptyArrayValue {
                node: NodeId::numeric(1, 6001)
            })
        );
    }

    #[test]
    fn test_validate_node_rejects_mixed_array() {
        let node = variable_with(Some(Value::Array(vec![
            Scalar::Byte(1),
            Scalar::Int16(2),
        ])));
        assert!(matches!(
            validate_node(&node),
            Err(EmitError::MixedArrayValue { index: 1, .. })
        ));
    }

    #[test]
    fn test_declared_type_match_passes() {
        let mut registry = TypeRegistry::new();
        registry.register(NodeId::numeric(1, 6001), ScalarKind::Double);
        let node = variable_with(Some(Value::Scalar(Scalar::Double(1.5))));
        assert!(check_declared_type(&node, &registry).is_ok());
    }

    #[test]
    fn test_declared_type_mismatch_is_reported() {
        let mut registry = TypeRegistry::new();
        registry.register(NodeId::numeric(1, 6001), ScalarKind::Float);
        let node = variable_with(Some(Value::Scalar(Scalar::Double(1.5))));
        assert_eq!(
            check_declared_type(&node, &registry),
            Err(EmitError::DeclaredTypeMismatch {
                node: NodeId::numeric(1, 6001),
                declared: ScalarKind::Float,
                inferred: ScalarKind::Double,
            })
        );
    }

    #[test]
    fn test_unregistered_node_passes() {
        let registry = TypeRegistry::new();
        let node = variable_with(Some(Value::Scalar(Scalar::Int32(1))));
        assert!(check_declared_type(&node, &registry).is_ok());
    }
}
