//! Data model for the address space handed to the emitter.
//!
//! Everything here is a read-only input constructed by upstream parsing and
//! resolution stages:
//! - Identifiers and names ([`NodeId`], [`QualifiedName`], [`LocalizedText`])
//! - Nodes, tagged by class ([`Node`]) and references ([`Reference`])
//! - Variable values ([`Value`])
//! - Builders (ergonomic construction for tests, benches, and drivers)

pub mod builder;
pub mod id;
pub mod node;
pub mod value;

pub use builder::NodeBuilder;
pub use id::{ns0, ExpandedNodeId, Identifier, LocalizedText, NodeId, QualifiedName};
pub use node::{
    DataTypeNode, MethodNode, Node, NodeBase, NodeKind, ObjectNode, ObjectTypeNode, Reference,
    ReferenceTypeNode, VariableNode, VariableTypeNode, ViewNode,
};
pub use value::{Scalar, ScalarKind, Value, ValueTypeError};
