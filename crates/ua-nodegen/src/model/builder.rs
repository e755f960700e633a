//! Builder API for ergonomic node construction.
//!
//! Upstream parsing assembles nodes field by field; tests and benches want
//! the same nodes in one expression.
//!
//! # Example
//!
//! ```rust
//! use ua_nodegen::model::{NodeBuilder, NodeId, QualifiedName, Scalar, Value};
//!
//! let node = NodeBuilder::new(NodeId::numeric(1, 6001), QualifiedName::new(1, "Temperature"))
//!     .display_name("Temperature")
//!     .description("Boiler outlet temperature")
//!     .variable(|v| {
//!         v.access_level = 1;
//!         v.user_access_level = 1;
//!         v.value_rank = -1;
//!         v.value = Some(Value::Scalar(Scalar::Double(20.5)));
//!     });
//! ```

use crate::model::{
    DataTypeNode, LocalizedText, MethodNode, Node, NodeBase, NodeId, ObjectNode, ObjectTypeNode,
    QualifiedName, ReferenceTypeNode, VariableNode, VariableTypeNode, ViewNode,
};

/// Builder for the attributes every node class shares; one of the class
/// finishers turns it into a [`Node`].
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    base: NodeBase,
}

impl NodeBuilder {
    /// Starts a node with the two attributes every node must carry.
    pub fn new(id: NodeId, browse_name: QualifiedName) -> Self {
        Self {
            base: NodeBase {
                id,
                browse_name,
                ..NodeBase::default()
            },
        }
    }

    /// Sets the display name as plain text (renders with the `en_US` tag).
    pub fn display_name(mut self, text: impl Into<String>) -> Self {
        self.base.display_name = LocalizedText::new(text);
        self
    }

    /// Sets the display name with an explicit locale.
    pub fn display_name_localized(
        mut self,
        locale: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        self.base.display_name = LocalizedText::with_locale(locale, text);
        self
    }

    /// Sets the description as plain text.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.base.description = LocalizedText::new(text);
        self
    }

    /// Sets the attribute write mask.
    pub fn write_mask(mut self, mask: u32) -> Self {
        self.base.write_mask = mask;
        self
    }

    /// Sets the per-user attribute write mask.
    pub fn user_write_mask(mut self, mask: u32) -> Self {
        self.base.user_write_mask = mask;
        self
    }

    // =========================================================================
    // Class finishers
    // =========================================================================

    /// Finishes as a reference-type node.
    pub fn reference_type(self, f: impl FnOnce(&mut ReferenceTypeNode)) -> Node {
        let mut node = ReferenceTypeNode {
            base: self.base,
            ..ReferenceTypeNode::default()
        };
        f(&mut node);
        Node::ReferenceType(node)
    }

    /// Finishes as an object node.
    pub fn object(self, f: impl FnOnce(&mut ObjectNode)) -> Node {
        let mut node = ObjectNode {
            base: self.base,
            ..ObjectNode::default()
        };
        f(&mut node);
        Node::Object(node)
    }

    /// Finishes as a variable node.
    pub fn variable(self, f: impl FnOnce(&mut VariableNode)) -> Node {
        let mut node = VariableNode {
            base: self.base,
            ..VariableNode::default()
        };
        f(&mut node);
        Node::Variable(node)
    }

    /// Finishes as a variable-type node.
    pub fn variable_type(self, f: impl FnOnce(&mut VariableTypeNode)) -> Node {
        let mut node = VariableTypeNode {
            base: self.base,
            ..VariableTypeNode::default()
        };
        f(&mut node);
        Node::VariableType(node)
    }

    /// Finishes as a method node.
    pub fn method(self, f: impl FnOnce(&mut MethodNode)) -> Node {
        let mut node = MethodNode {
            base: self.base,
            ..MethodNode::default()
        };
        f(&mut node);
        Node::Method(node)
    }

    /// Finishes as an object-type node.
    pub fn object_type(self, f: impl FnOnce(&mut ObjectTypeNode)) -> Node {
        let mut node = ObjectTypeNode {
            base: self.base,
            ..ObjectTypeNode::default()
        };
        f(&mut node);
        Node::ObjectType(node)
    }

    /// Finishes as a data-type node.
    pub fn data_type(self, f: impl FnOnce(&mut DataTypeNode)) -> Node {
        let mut node = DataTypeNode {
            base: self.base,
            ..DataTypeNode::default()
        };
        f(&mut node);
        Node::DataType(node)
    }

    /// Finishes as a view node.
    pub fn view(self, f: impl FnOnce(&mut ViewNode)) -> Node {
        let mut node = ViewNode {
            base: self.base,
            ..ViewNode::default()
        };
        f(&mut node);
        Node::View(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{NodeKind, Scalar, Value};

    #[test]
    fn test_builder_sets_base_attributes() {
        let node = NodeBuilder::new(NodeId::numeric(2, 100), QualifiedName::new(2, "Pump"))
            .display_name("Pump")
            .description("Feed pump")
            .write_mask(3)
            .user_write_mask(1)
            .object(|o| o.event_notifier = true);

        let base = node.base();
        assert_eq!(base.id, NodeId::numeric(2, 100));
        assert_eq!(base.browse_name, QualifiedName::new(2, "Pump"));
        assert_eq!(base.display_name.text, "Pump");
        assert_eq!(base.display_name.locale, None);
        assert_eq!(base.write_mask, 3);
        assert_eq!(base.user_write_mask, 1);
        assert_eq!(node.kind(), NodeKind::Object);
    }

    #[test]
    fn test_builder_variable_payload() {
        let node = NodeBuilder::new(NodeId::numeric(1, 6001), QualifiedName::new(1, "Level"))
            .variable(|v| {
                v.value_rank = 1;
                v.value = Some(Value::Array(vec![Scalar::Int32(1), Scalar::Int32(2)]));
            });

        match node {
            Node::Variable(v) => {
                assert_eq!(v.value_rank, 1);
                assert_eq!(v.value.unwrap().len(), 2);
            }
            other => panic!("expected a variable node, got {other:?}"),
        }
    }

    #[test]
    fn test_builder_localized_display_name() {
        let node = NodeBuilder::new(NodeId::numeric(1, 1), QualifiedName::new(1, "Kessel"))
            .display_name_localized("de_DE", "Kessel")
            .object(|_| {});
        assert_eq!(node.base().display_name.locale.as_deref(), Some("de_DE"));
    }
}
