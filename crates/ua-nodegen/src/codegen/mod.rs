//! C statement emission against the open62541 server-construction API.
//!
//! Pure text production: one call per node or reference, no state carried
//! between calls. File assembly and emission ordering belong to the driver.

pub mod node;
pub mod primitives;
pub mod reference;

pub use node::{emit_node, EmitContext};
pub use primitives::{
    escape_c, format_expanded_node_id, format_localized_text, format_node_id,
    format_qualified_name, format_scalar, CodeWriter, DEFAULT_LOCALE,
};
pub use reference::emit_reference;
