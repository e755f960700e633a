//! Address-space node and reference types.
//!
//! [`Node`] is a closed sum over the eight node classes the nodeset schema
//! defines. Emission dispatches on the variant with an exhaustive match, so
//! a node class the emitter does not handle cannot be constructed in the
//! first place.

use crate::model::{ExpandedNodeId, LocalizedText, NodeId, QualifiedName, Value};

/// Attributes shared by every node class.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NodeBase {
    /// The node's identifier.
    pub id: NodeId,
    /// The browse name used for programmatic navigation.
    pub browse_name: QualifiedName,
    /// The name shown to operators.
    pub display_name: LocalizedText,
    /// Free-text description.
    pub description: LocalizedText,
    /// Attribute write-permission bits.
    pub write_mask: u32,
    /// Attribute write-permission bits for the current user.
    pub user_write_mask: u32,
}

/// A node in the address space, tagged by class.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    ReferenceType(ReferenceTypeNode),
    Object(ObjectNode),
    Variable(VariableNode),
    VariableType(VariableTypeNode),
    Method(MethodNode),
    ObjectType(ObjectTypeNode),
    DataType(DataTypeNode),
    View(ViewNode),
}

/// The node classes, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    ReferenceType,
    Object,
    Variable,
    VariableType,
    Method,
    ObjectType,
    DataType,
    View,
}

impl NodeKind {
    /// The name of the attribute record type (`UA_<name>Attributes`).
    pub fn attributes_type_name(self) -> &'static str {
        match self {
            NodeKind::ReferenceType => "ReferenceType",
            NodeKind::Object => "Object",
            NodeKind::Variable => "Variable",
            NodeKind::VariableType => "VariableType",
            NodeKind::Method => "Method",
            NodeKind::ObjectType => "ObjectType",
            NodeKind::DataType => "DataType",
            NodeKind::View => "View",
        }
    }

    /// The name used in the add-node invocation
    /// (`UA_Server_add<name>_begin`).
    pub fn api_type_name(self) -> &'static str {
        match self {
            NodeKind::ReferenceType => "ReferenceTypeNode",
            NodeKind::Object => "ObjectNode",
            NodeKind::Variable => "VariableNode",
            NodeKind::VariableType => "VariableTypeNode",
            NodeKind::Method => "MethodNode",
            NodeKind::ObjectType => "ObjectTypeNode",
            NodeKind::DataType => "DataTypeNode",
            NodeKind::View => "ViewNode",
        }
    }
}

impl Node {
    /// The shared attributes of this node.
    pub fn base(&self) -> &NodeBase {
        match self {
            Node::ReferenceType(n) => &n.base,
            Node::Object(n) => &n.base,
            Node::Variable(n) => &n.base,
            Node::VariableType(n) => &n.base,
            Node::Method(n) => &n.base,
            Node::ObjectType(n) => &n.base,
            Node::DataType(n) => &n.base,
            Node::View(n) => &n.base,
        }
    }

    /// The node's class tag.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::ReferenceType(_) => NodeKind::ReferenceType,
            Node::Object(_) => NodeKind::Object,
            Node::Variable(_) => NodeKind::Variable,
            Node::VariableType(_) => NodeKind::VariableType,
            Node::Method(_) => NodeKind::Method,
            Node::ObjectType(_) => NodeKind::ObjectType,
            Node::DataType(_) => NodeKind::DataType,
            Node::View(_) => NodeKind::View,
        }
    }

    /// The node's identifier.
    pub fn id(&self) -> &NodeId {
        &self.base().id
    }
}

/// A reference-type node.
///
/// Optional fields keep the zero/false/empty default the attribute record's
/// `_init` call supplies; emission skips them unless they differ.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReferenceTypeNode {
    pub base: NodeBase,
    pub is_abstract: bool,
    pub symmetric: bool,
    /// Empty when the reference type has no inverse name.
    pub inverse_name: String,
}

/// An object node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectNode {
    pub base: NodeBase,
    pub event_notifier: bool,
}

/// A variable node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariableNode {
    pub base: NodeBase,
    pub historizing: bool,
    /// Fastest sampling rate the server commits to, in milliseconds.
    pub minimum_sampling_interval: f64,
    pub user_access_level: u8,
    pub access_level: u8,
    /// Scalar (-1), any (-2), or the array dimension count.
    pub value_rank: i32,
    /// Initial value, if the nodeset supplies one.
    pub value: Option<Value>,
}

/// A variable-type node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VariableTypeNode {
    pub base: NodeBase,
    pub historizing: bool,
    pub value_rank: i32,
}

/// A method node.
///
/// Methods are declared without an executable implementation; callback
/// binding happens in a later pass against the running server.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MethodNode {
    pub base: NodeBase,
    pub executable: bool,
    pub user_executable: bool,
}

/// An object-type node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectTypeNode {
    pub base: NodeBase,
    pub is_abstract: bool,
}

/// A data-type node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DataTypeNode {
    pub base: NodeBase,
    pub is_abstract: bool,
}

/// A view node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewNode {
    pub base: NodeBase,
    pub contains_no_loops: bool,
    /// Event-notifier bits; emitted unconditionally as a byte.
    pub event_notifier: u8,
}

/// A directed typed edge between two nodes.
///
/// The driver invokes emission once per reference; this crate never
/// enumerates a node's references itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Reference {
    pub source: NodeId,
    pub reference_type: NodeId,
    pub target: ExpandedNodeId,
    /// Forward edges follow the reference type's natural direction.
    pub is_forward: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_names() {
        let node = Node::ReferenceType(ReferenceTypeNode::default());
        assert_eq!(node.kind(), NodeKind::ReferenceType);
        assert_eq!(node.kind().attributes_type_name(), "ReferenceType");
        assert_eq!(node.kind().api_type_name(), "ReferenceTypeNode");

        let node = Node::View(ViewNode::default());
        assert_eq!(node.kind().attributes_type_name(), "View");
        assert_eq!(node.kind().api_type_name(), "ViewNode");
    }

    #[test]
    fn test_base_accessor() {
        let mut object = ObjectNode::default();
        object.base.id = NodeId::numeric(1, 5001);
        let node = Node::Object(object);
        assert_eq!(node.id(), &NodeId::numeric(1, 5001));
        assert_eq!(node.base().write_mask, 0);
    }

    #[test]
    fn test_variant_defaults_match_attribute_init() {
        // The conditional-emission rules treat these defaults as "nothing to
        // emit"; they must equal what the generated _init call produces.
        let variable = VariableNode::default();
        assert!(!variable.historizing);
        assert_eq!(variable.minimum_sampling_interval, 0.0);
        assert_eq!(variable.value_rank, 0);
        assert!(variable.value.is_none());

        let reference_type = ReferenceTypeNode::default();
        assert!(!reference_type.is_abstract);
        assert!(!reference_type.symmetric);
        assert!(reference_type.inverse_name.is_empty());

        let view = ViewNode::default();
        assert!(!view.contains_no_loops);
        assert_eq!(view.event_notifier, 0);
    }
}
