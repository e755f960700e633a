//! Variable values: typed scalars and uniform scalar sequences.
//!
//! The type descriptor emitted for a value is inferred structurally from the
//! runtime variant, never from a declared type. The descriptor and the
//! literal formatting must agree on one primitive type, otherwise the
//! generated program misreads the value's memory layout at run time.

/// A single scalar of one OPC UA primitive type.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Boolean(bool),
    SByte(i8),
    Byte(u8),
    Int16(i16),
    UInt16(u16),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    String(String),
}

impl Scalar {
    /// Returns the primitive kind of this scalar.
    pub fn kind(&self) -> ScalarKind {
        match self {
            Scalar::Boolean(_) => ScalarKind::Boolean,
            Scalar::SByte(_) => ScalarKind::SByte,
            Scalar::Byte(_) => ScalarKind::Byte,
            Scalar::Int16(_) => ScalarKind::Int16,
            Scalar::UInt16(_) => ScalarKind::UInt16,
            Scalar::Int32(_) => ScalarKind::Int32,
            Scalar::UInt32(_) => ScalarKind::UInt32,
            Scalar::Int64(_) => ScalarKind::Int64,
            Scalar::UInt64(_) => ScalarKind::UInt64,
            Scalar::Float(_) => ScalarKind::Float,
            Scalar::Double(_) => ScalarKind::Double,
            Scalar::String(_) => ScalarKind::String,
        }
    }
}

/// The primitive kinds a [`Scalar`] can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Boolean,
    SByte,
    Byte,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Float,
    Double,
    String,
}

impl ScalarKind {
    /// The UA type name as it appears in generated type identifiers
    /// (`UA_Int32`, `UA_String`, ...).
    pub fn type_name(self) -> &'static str {
        match self {
            ScalarKind::Boolean => "Boolean",
            ScalarKind::SByte => "SByte",
            ScalarKind::Byte => "Byte",
            ScalarKind::Int16 => "Int16",
            ScalarKind::UInt16 => "UInt16",
            ScalarKind::Int32 => "Int32",
            ScalarKind::UInt32 => "UInt32",
            ScalarKind::Int64 => "Int64",
            ScalarKind::UInt64 => "UInt64",
            ScalarKind::Float => "Float",
            ScalarKind::Double => "Double",
            ScalarKind::String => "String",
        }
    }

    /// The type-descriptor index key (`UA_TYPES_INT32`, ...), the uppercased
    /// form of [`type_name`](Self::type_name).
    pub fn types_index_name(self) -> &'static str {
        match self {
            ScalarKind::Boolean => "UA_TYPES_BOOLEAN",
            ScalarKind::SByte => "UA_TYPES_SBYTE",
            ScalarKind::Byte => "UA_TYPES_BYTE",
            ScalarKind::Int16 => "UA_TYPES_INT16",
            ScalarKind::UInt16 => "UA_TYPES_UINT16",
            ScalarKind::Int32 => "UA_TYPES_INT32",
            ScalarKind::UInt32 => "UA_TYPES_UINT32",
            ScalarKind::Int64 => "UA_TYPES_INT64",
            ScalarKind::UInt64 => "UA_TYPES_UINT64",
            ScalarKind::Float => "UA_TYPES_FLOAT",
            ScalarKind::Double => "UA_TYPES_DOUBLE",
            ScalarKind::String => "UA_TYPES_STRING",
        }
    }
}

/// A value attached to a variable node: one scalar, or an ordered sequence
/// of scalars sharing one primitive type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Scalar(Scalar),
    Array(Vec<Scalar>),
}

/// Why an element kind cannot be inferred for a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTypeError {
    /// An array value with no elements has no first element to infer from.
    EmptyArray,
    /// An element disagrees with the kind inferred from the first element.
    Mixed {
        expected: ScalarKind,
        found: ScalarKind,
        index: usize,
    },
}

impl Value {
    /// Infers the primitive kind this value is emitted as.
    ///
    /// For arrays the first element decides the kind and every remaining
    /// element must match it. Letting a later element disagree would bind the
    /// array literal to a type descriptor of the wrong element size.
    pub fn element_kind(&self) -> Result<ScalarKind, ValueTypeError> {
        match self {
            Value::Scalar(scalar) => Ok(scalar.kind()),
            Value::Array(items) => {
                let first = items.first().ok_or(ValueTypeError::EmptyArray)?;
                let expected = first.kind();
                for (index, item) in items.iter().enumerate().skip(1) {
                    let found = item.kind();
                    if found != expected {
                        return Err(ValueTypeError::Mixed {
                            expected,
                            found,
                            index,
                        });
                    }
                }
                Ok(expected)
            }
        }
    }

    /// Number of scalars carried (1 for a scalar value).
    pub fn len(&self) -> usize {
        match self {
            Value::Scalar(_) => 1,
            Value::Array(items) => items.len(),
        }
    }

    /// True only for a zero-length array value.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
