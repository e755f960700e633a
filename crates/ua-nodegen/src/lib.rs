//! ua-nodegen: C source emission backend for OPC UA nodeset compilation.
//!
//! This crate is the statement-emission stage of a nodeset compiler: given
//! fully resolved address-space nodes (parsed elsewhere from XML nodeset
//! definitions), it produces the C statements that construct those nodes at
//! runtime through the open62541 server API.
//!
//! # Overview
//!
//! The emitter is a template-expansion layer:
//! - **Pure**: every operation is a side-effect-free function from typed
//!   inputs to text; nothing is retained between calls
//! - **Closed over eight node classes**: dispatch is an exhaustive match,
//!   so an unhandled class is a compile error, not a malformed block
//! - **Minimal output**: optional attributes are emitted only when they
//!   differ from the zero default the generated `_init` call supplies
//!
//! # Quick Start
//!
//! ```rust
//! use rustc_hash::FxHashSet;
//! use ua_nodegen::{emit_node, emit_reference, EmitContext};
//! use ua_nodegen::model::{ns0, NodeBuilder, NodeId, QualifiedName, Reference, Scalar, Value};
//!
//! // Build a variable node with an initial value
//! let node = NodeBuilder::new(NodeId::numeric(1, 6001), QualifiedName::new(1, "Temperature"))
//!     .display_name("Temperature")
//!     .variable(|v| {
//!         v.access_level = 1;
//!         v.user_access_level = 1;
//!         v.value_rank = -1;
//!         v.value = Some(Value::Scalar(Scalar::Double(20.5)));
//!     });
//!
//! // Emit its construction statements
//! let parents = FxHashSet::default();
//! let code = emit_node(&node, &EmitContext::new(&parents)).unwrap();
//! assert!(code.contains("UA_Server_addVariableNode_begin(server,"));
//!
//! // Wire it into the Objects folder
//! let reference = Reference {
//!     source: ns0::OBJECTS_FOLDER,
//!     reference_type: ns0::ORGANIZES,
//!     target: NodeId::numeric(1, 6001).into(),
//!     is_forward: true,
//! };
//! assert!(emit_reference(&reference).ends_with("true);"));
//! ```
//!
//! # Modules
//!
//! - [`model`]: Address-space input types (NodeId, Node, Reference, Value)
//! - [`codegen`]: Statement emission and the C text primitives
//! - [`validate`]: Up-front value checks and the advisory type registry
//! - [`error`]: Error types
//!
//! # Scope
//!
//! XML parsing, cross-reference resolution, attribute inheritance, and
//! emission ordering are upstream concerns; file output belongs to the
//! driver. This crate consumes resolved nodes and produces text, nothing
//! more.

pub mod codegen;
pub mod error;
pub mod model;
pub mod validate;

// Re-export commonly used items at crate root
pub use codegen::{emit_node, emit_reference, EmitContext};
pub use error::{EmitError, IdParseError};
pub use model::{
    ExpandedNodeId, LocalizedText, Node, NodeBuilder, NodeId, NodeKind, QualifiedName, Reference,
    Scalar, ScalarKind, Value,
};
pub use validate::{check_declared_type, validate_node, TypeRegistry};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
