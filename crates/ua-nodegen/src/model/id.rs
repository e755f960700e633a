//! Identifier and name types for the OPC UA address space.
//!
//! Node identifiers follow the standard OPC UA string syntax
//! (`ns=<index>;<class>=<value>`) for parsing and display; emission renders
//! them through the `UA_NODEID_*` constructor macros instead (see
//! [`crate::codegen::primitives`]).

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::IdParseError;

/// The identifier class of a [`NodeId`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Identifier {
    /// Numeric identifier (`i=...`).
    Numeric(u32),
    /// String identifier (`s=...`).
    String(String),
    /// GUID identifier (`g=...`).
    Guid(Uuid),
    /// Opaque byte-string identifier (`b=...`), carried in its upstream
    /// decoded text form.
    ByteString(String),
}

impl Default for Identifier {
    fn default() -> Self {
        Identifier::Numeric(0)
    }
}

/// A node identifier: namespace index plus identifier.
///
/// This is the universal handle for nodes, reference types, and data types
/// in the address space. Identity is structural, so `NodeId` can key the
/// hash containers used at the emission and validation seams.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NodeId {
    /// Namespace index into the server's namespace array.
    pub namespace: u16,
    /// The identifier within that namespace.
    pub identifier: Identifier,
}

impl NodeId {
    /// Creates a numeric node id.
    pub const fn numeric(namespace: u16, value: u32) -> Self {
        Self {
            namespace,
            identifier: Identifier::Numeric(value),
        }
    }

    /// Creates a string node id.
    pub fn string(namespace: u16, value: impl Into<String>) -> Self {
        Self {
            namespace,
            identifier: Identifier::String(value.into()),
        }
    }

    /// Creates a GUID node id.
    pub fn guid(namespace: u16, value: Uuid) -> Self {
        Self {
            namespace,
            identifier: Identifier::Guid(value),
        }
    }

    /// Creates a byte-string node id.
    pub fn bytestring(namespace: u16, value: impl Into<String>) -> Self {
        Self {
            namespace,
            identifier: Identifier::ByteString(value.into()),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace != 0 {
            write!(f, "ns={};", self.namespace)?;
        }
        match &self.identifier {
            Identifier::Numeric(n) => write!(f, "i={n}"),
            Identifier::String(s) => write!(f, "s={s}"),
            Identifier::Guid(g) => write!(f, "g={g}"),
            Identifier::ByteString(b) => write!(f, "b={b}"),
        }
    }
}

impl FromStr for NodeId {
    type Err = IdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (namespace, rest) = match s.strip_prefix("ns=") {
            Some(tail) => {
                let (ns_text, rest) = tail
                    .split_once(';')
                    .ok_or(IdParseError::MissingIdentifier)?;
                let namespace = ns_text.parse().map_err(|_| IdParseError::InvalidNamespace {
                    text: ns_text.to_string(),
                })?;
                (namespace, rest)
            }
            None => (0, s),
        };

        let (class, value) = rest
            .split_once('=')
            .ok_or(IdParseError::MissingIdentifier)?;

        let identifier = match class {
            "i" => Identifier::Numeric(value.parse().map_err(|_| IdParseError::InvalidNumeric {
                text: value.to_string(),
            })?),
            "s" => Identifier::String(value.to_string()),
            "g" => Identifier::Guid(Uuid::parse_str(value).map_err(|_| {
                IdParseError::InvalidGuid {
                    text: value.to_string(),
                }
            })?),
            "b" => Identifier::ByteString(value.to_string()),
            other => {
                return Err(IdParseError::UnknownIdentifierClass {
                    class: other.to_string(),
                });
            }
        };

        Ok(NodeId { namespace, identifier })
    }
}

/// The expanded form of a node id used for reference targets.
///
/// Namespace-URI and server-index resolution happen upstream; by the time a
/// reference reaches this crate its target is a plain node id in expanded
/// clothing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ExpandedNodeId(pub NodeId);

impl ExpandedNodeId {
    /// Wraps a node id as an expanded target.
    pub fn new(node_id: NodeId) -> Self {
        Self(node_id)
    }

    /// The underlying node id.
    pub fn node_id(&self) -> &NodeId {
        &self.0
    }
}

impl From<NodeId> for ExpandedNodeId {
    fn from(node_id: NodeId) -> Self {
        Self(node_id)
    }
}

/// A browse name: namespace index plus name text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct QualifiedName {
    pub namespace: u16,
    pub name: String,
}

impl QualifiedName {
    /// Creates a qualified name.
    pub fn new(namespace: u16, name: impl Into<String>) -> Self {
        Self {
            namespace,
            name: name.into(),
        }
    }
}

/// Human-readable text with an optional locale.
///
/// `locale: None` marks text that originated as plain text; it renders with
/// the fixed `"en_US"` locale tag.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct LocalizedText {
    pub locale: Option<String>,
    pub text: String,
}

impl LocalizedText {
    /// Plain text without an explicit locale.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            locale: None,
            text: text.into(),
        }
    }

    /// Text carrying an explicit locale tag.
    pub fn with_locale(locale: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            locale: Some(locale.into()),
            text: text.into(),
        }
    }
}

/// Well-known namespace-zero node ids.
///
/// The handful of standard-defined ids that drivers and tests reach for when
/// wiring nodes into the address space. Values come from the OPC UA
/// NodeIds.csv registry.
pub mod ns0 {
    use super::NodeId;

    // Reference types
    pub const REFERENCES: NodeId = NodeId::numeric(0, 31);
    pub const HAS_SUBTYPE: NodeId = NodeId::numeric(0, 45);
    pub const ORGANIZES: NodeId = NodeId::numeric(0, 35);
    pub const HAS_MODELLING_RULE: NodeId = NodeId::numeric(0, 37);
    pub const HAS_TYPE_DEFINITION: NodeId = NodeId::numeric(0, 40);
    pub const HAS_PROPERTY: NodeId = NodeId::numeric(0, 46);
    pub const HAS_COMPONENT: NodeId = NodeId::numeric(0, 47);

    // Type roots
    pub const BASE_DATA_TYPE: NodeId = NodeId::numeric(0, 24);
    pub const BASE_OBJECT_TYPE: NodeId = NodeId::numeric(0, 58);
    pub const BASE_VARIABLE_TYPE: NodeId = NodeId::numeric(0, 62);
    pub const BASE_DATA_VARIABLE_TYPE: NodeId = NodeId::numeric(0, 63);
    pub const PROPERTY_TYPE: NodeId = NodeId::numeric(0, 68);
    pub const FOLDER_TYPE: NodeId = NodeId::numeric(0, 61);

    // Standard instances
    pub const ROOT_FOLDER: NodeId = NodeId::numeric(0, 84);
    pub const OBJECTS_FOLDER: NodeId = NodeId::numeric(0, 85);
    pub const TYPES_FOLDER: NodeId = NodeId::numeric(0, 86);
}
