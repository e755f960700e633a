//! Primitive text building blocks for the C emitter.
//!
//! Renders identifiers, names, and scalar literals as the `UA_*` constructor
//! expressions the statement emitter splices into statements, plus the
//! line-oriented [`CodeWriter`] the emitter accumulates into.

use crate::model::{ExpandedNodeId, Identifier, LocalizedText, NodeId, QualifiedName, Scalar};

/// Locale tag applied to text that arrives without one.
pub const DEFAULT_LOCALE: &str = "en_US";

// =============================================================================
// TEXT ACCUMULATION
// =============================================================================

/// Line-oriented accumulator for generated statements.
#[derive(Debug, Clone, Default)]
pub struct CodeWriter {
    lines: Vec<String>,
}

impl CodeWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Appends one line.
    pub fn line(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Number of lines written so far.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Joins the lines into the final text.
    pub fn into_code(self) -> String {
        self.lines.join("\n")
    }
}

// =============================================================================
// ESCAPING
// =============================================================================

/// Escapes text for inclusion in a C string literal.
///
/// Browse names, display names, and string values come straight out of
/// nodeset XML and may contain quotes, backslashes, or control characters.
/// Control characters use octal escapes; hex escapes would swallow any hex
/// digit that follows them.
pub fn escape_c(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\{:03o}", c as u32));
            }
            c => out.push(c),
        }
    }
    out
}

// =============================================================================
// CONSTRUCTOR EXPRESSIONS
// =============================================================================

/// Renders a node id as a `UA_NODEID_*` constructor expression.
pub fn format_node_id(id: &NodeId) -> String {
    match &id.identifier {
        Identifier::Numeric(n) => format!("UA_NODEID_NUMERIC({}, {})", id.namespace, n),
        Identifier::String(s) => {
            format!("UA_NODEID_STRING_ALLOC({}, \"{}\")", id.namespace, escape_c(s))
        }
        Identifier::Guid(g) => {
            format!("UA_NODEID_GUID({}, UA_GUID(\"{}\"))", id.namespace, g)
        }
        Identifier::ByteString(b) => {
            format!(
                "UA_NODEID_BYTESTRING_ALLOC({}, \"{}\")",
                id.namespace,
                escape_c(b)
            )
        }
    }
}

/// Renders an expanded node id as a `UA_EXPANDEDNODEID_*` constructor
/// expression.
pub fn format_expanded_node_id(id: &ExpandedNodeId) -> String {
    let inner = id.node_id();
    match &inner.identifier {
        Identifier::Numeric(n) => {
            format!("UA_EXPANDEDNODEID_NUMERIC({}, {})", inner.namespace, n)
        }
        Identifier::String(s) => {
            format!(
                "UA_EXPANDEDNODEID_STRING_ALLOC({}, \"{}\")",
                inner.namespace,
                escape_c(s)
            )
        }
        Identifier::Guid(g) => {
            format!(
                "UA_EXPANDEDNODEID_GUID({}, UA_GUID(\"{}\"))",
                inner.namespace, g
            )
        }
        Identifier::ByteString(b) => {
            format!(
                "UA_EXPANDEDNODEID_BYTESTRING_ALLOC({}, \"{}\")",
                inner.namespace,
                escape_c(b)
            )
        }
    }
}

/// Renders a browse name as a `UA_QUALIFIEDNAME_ALLOC` expression.
pub fn format_qualified_name(name: &QualifiedName) -> String {
    format!(
        "UA_QUALIFIEDNAME_ALLOC({}, \"{}\")",
        name.namespace,
        escape_c(&name.name)
    )
}

/// Renders localized text as a `UA_LOCALIZEDTEXT_ALLOC` expression, tagging
/// plain text with the fixed `en_US` locale.
pub fn format_localized_text(text: &LocalizedText) -> String {
    let locale = text.locale.as_deref().unwrap_or(DEFAULT_LOCALE);
    format!(
        "UA_LOCALIZEDTEXT_ALLOC(\"{}\", \"{}\")",
        escape_c(locale),
        escape_c(&text.text)
    )
}

/// Renders one scalar as a C initializer expression.
///
/// The literal must parse as the exact primitive type named by the value's
/// inferred descriptor; integer kinds render as decimal, floats in a form
/// that is always a valid C floating constant.
pub fn format_scalar(value: &Scalar) -> String {
    match value {
        Scalar::Boolean(b) => if *b { "true" } else { "false" }.to_string(),
        Scalar::SByte(v) => v.to_string(),
        Scalar::Byte(v) => v.to_string(),
        Scalar::Int16(v) => v.to_string(),
        Scalar::UInt16(v) => v.to_string(),
        Scalar::Int32(v) => v.to_string(),
        Scalar::UInt32(v) => v.to_string(),
        Scalar::Int64(v) => v.to_string(),
        Scalar::UInt64(v) => v.to_string(),
        Scalar::Float(v) => format!("{v:?}"),
        Scalar::Double(v) => format!("{v:?}"),
        Scalar::String(s) => format!("UA_STRING_ALLOC(\"{}\")", escape_c(s)),
    }
}
