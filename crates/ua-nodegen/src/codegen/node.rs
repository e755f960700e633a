//! Node statement emission.
//!
//! One call produces the full statement block that materializes a node
//! through the server-construction API: a variant-specific attribute record,
//! the shared attribute assignments, and the add-node invocation. The block
//! layout is fixed and pinned byte-for-byte by the tests below so generated
//! sources diff cleanly against previously generated output.

use rustc_hash::FxHashSet;

use crate::codegen::primitives::{
    escape_c, format_localized_text, format_node_id, format_qualified_name, format_scalar,
    CodeWriter, DEFAULT_LOCALE,
};
use crate::error::EmitError;
use crate::model::{
    DataTypeNode, MethodNode, Node, NodeId, ObjectNode, ObjectTypeNode, ReferenceTypeNode, Value,
    ValueTypeError, VariableNode, VariableTypeNode, ViewNode,
};

/// Per-node generation flags shared across the driver's backend passes.
///
/// Attribute computation here reads none of them: namespace-zero suppression
/// and parent-reference bookkeeping are handled by the sibling passes that
/// receive the same context. They travel together so every pass sees one
/// call shape.
#[derive(Debug, Clone)]
pub struct EmitContext<'a> {
    /// Skip attribute emission for nodes whose attributes are pre-baked.
    pub suppress_attributes: bool,
    /// Whether namespace-zero nodes are being generated in this run.
    pub generate_ns0: bool,
    /// Reference types already wired between this node and its parent.
    pub parent_references: &'a FxHashSet<NodeId>,
}

impl<'a> EmitContext<'a> {
    /// Context with both flags off.
    pub fn new(parent_references: &'a FxHashSet<NodeId>) -> Self {
        Self {
            suppress_attributes: false,
            generate_ns0: false,
            parent_references,
        }
    }
}

/// Emits the statement block that constructs `node`.
///
/// The sequence is fixed: open block, variant attribute record (zero
/// initialized, then one assignment per field that differs from that zero
/// default), the four shared assignments, the add-node invocation, close
/// block. Only value emission can fail, when an array value defeats element
/// type inference.
pub fn emit_node(node: &Node, _ctx: &EmitContext<'_>) -> Result<String, EmitError> {
    let mut w = CodeWriter::new();
    w.line("{");

    match node {
        Node::ReferenceType(n) => reference_type_attributes(&mut w, n),
        Node::Object(n) => object_attributes(&mut w, n),
        Node::Variable(n) => variable_attributes(&mut w, n)?,
        Node::VariableType(n) => variable_type_attributes(&mut w, n),
        Node::Method(n) => method_attributes(&mut w, n),
        Node::ObjectType(n) => object_type_attributes(&mut w, n),
        Node::DataType(n) => data_type_attributes(&mut w, n),
        Node::View(n) => view_attributes(&mut w, n),
    }

    let base = node.base();
    w.line(format!(
        "attr.displayName = {};",
        format_localized_text(&base.display_name)
    ));
    w.line(format!(
        "attr.description = {};",
        format_localized_text(&base.description)
    ));
    w.line(format!("attr.writeMask = {};", base.write_mask));
    w.line(format!("attr.userWriteMask = {};", base.user_write_mask));

    w.line(format!(
        "UA_Server_add{}_begin(server,",
        node.kind().api_type_name()
    ));
    w.line(format!("{},", format_node_id(&base.id)));
    w.line(format!("{},", format_qualified_name(&base.browse_name)));
    w.line("attr,");
    if matches!(node, Node::Method(_)) {
        // Callback pointer and context stay unbound until a later pass.
        w.line("NULL, NULL,");
    }
    w.line("NULL);");
    w.line("}");
    w.blank();

    Ok(w.into_code())
}

/// Declares and zero-initializes the variant's attribute record.
fn attributes_preamble(w: &mut CodeWriter, type_name: &str) {
    w.line(format!("UA_{type_name}Attributes attr;"));
    w.line(format!("UA_{type_name}Attributes_init(&attr);"));
}

fn reference_type_attributes(w: &mut CodeWriter, node: &ReferenceTypeNode) {
    attributes_preamble(w, "ReferenceType");
    if node.is_abstract {
        w.line("attr.isAbstract = true;");
    }
    if node.symmetric {
        w.line("attr.symmetric  = true;");
    }
    if !node.inverse_name.is_empty() {
        w.line(format!(
            "attr.inverseName  = UA_LOCALIZEDTEXT_ALLOC(\"{}\", \"{}\");",
            DEFAULT_LOCALE,
            escape_c(&node.inverse_name)
        ));
    }
}

fn object_attributes(w: &mut CodeWriter, node: &ObjectNode) {
    attributes_preamble(w, "Object");
    if node.event_notifier {
        w.line("attr.eventNotifier = true;");
    }
}

fn variable_attributes(w: &mut CodeWriter, node: &VariableNode) -> Result<(), EmitError> {
    attributes_preamble(w, "Variable");
    if node.historizing {
        w.line("attr.historizing = true;");
    }
    w.line(format!(
        "attr.minimumSamplingInterval = {:.6};",
        node.minimum_sampling_interval
    ));
    w.line(format!("attr.userAccessLevel = {};", node.user_access_level));
    w.line(format!("attr.accessLevel = {};", node.access_level));
    w.line(format!("attr.valueRank = {};", node.value_rank));
    if let Some(value) = &node.value {
        variable_value(w, &node.base.id, value)?;
    }
    Ok(())
}

/// Binds a variable's initial value into the attribute record.
///
/// The local declaration's type, the literal rendering, and the type
/// descriptor all derive from one inferred [`ScalarKind`]; see
/// [`Value::element_kind`] for why disagreement is rejected rather than
/// emitted.
///
/// [`ScalarKind`]: crate::model::ScalarKind
fn variable_value(w: &mut CodeWriter, node_id: &NodeId, value: &Value) -> Result<(), EmitError> {
    let kind = value.element_kind().map_err(|e| match e {
        ValueTypeError::EmptyArray => EmitError::EmptyArrayValue {
            node: node_id.clone(),
        },
        ValueTypeError::Mixed {
            expected,
            found,
            index,
        } => EmitError::MixedArrayValue {
            node: node_id.clone(),
            expected,
            found,
            index,
        },
    })?;

    match value {
        Value::Array(items) => {
            let literals: Vec<String> = items.iter().map(format_scalar).collect();
            w.line(format!(
                "UA_{} value[{}] = {{{}}};",
                kind.type_name(),
                items.len(),
                literals.join(",")
            ));
            w.line(format!(
                "UA_Variant_setArray(&attr.value, (void*)value, {}, &UA_TYPES[{}]);",
                items.len(),
                kind.types_index_name()
            ));
        }
        Value::Scalar(scalar) => {
            w.line(format!(
                "UA_{} value = {};",
                kind.type_name(),
                format_scalar(scalar)
            ));
            w.line(format!(
                "UA_Variant_setScalar(&attr.value, &value, &UA_TYPES[{}]);",
                kind.types_index_name()
            ));
        }
    }
    Ok(())
}

fn variable_type_attributes(w: &mut CodeWriter, node: &VariableTypeNode) {
    attributes_preamble(w, "VariableType");
    if node.historizing {
        w.line("attr.historizing = true;");
    }
    w.line(format!("attr.valueRank = (UA_Int32){};", node.value_rank));
}

fn method_attributes(w: &mut CodeWriter, node: &MethodNode) {
    attributes_preamble(w, "Method");
    if node.executable {
        w.line("attr.executable = true;");
    }
    if node.user_executable {
        w.line("attr.userExecutable = true;");
    }
}

fn object_type_attributes(w: &mut CodeWriter, node: &ObjectTypeNode) {
    attributes_preamble(w, "ObjectType");
    if node.is_abstract {
        w.line("attr.isAbstract = true;");
    }
}

fn data_type_attributes(w: &mut CodeWriter, node: &DataTypeNode) {
    attributes_preamble(w, "DataType");
    if node.is_abstract {
        w.line("attr.isAbstract = true;");
    }
}

fn view_attributes(w: &mut CodeWriter, node: &ViewNode) {
    attributes_preamble(w, "View");
    if node.contains_no_loops {
        w.line("attr.containsNoLoops = true;");
    }
    w.line(format!("attr.eventNotifier = (UA_Byte){};", node.event_notifier));
}
