use log::warn;

use super::LogicalType;
use crate::thrift::{
    TExprOpcode, TPrimitiveType, TScalarType, TStructField, TTypeDesc, TTypeNode, TTypeNodeType,
};

pub fn thrift_to_type(ttype: TPrimitiveType) -> LogicalType {
    match ttype {
        TPrimitiveType::InvalidType => LogicalType::Unknown,
        TPrimitiveType::NullType => LogicalType::Null,
        TPrimitiveType::Boolean => LogicalType::Boolean,
        TPrimitiveType::Tinyint => LogicalType::TinyInt,
        TPrimitiveType::Smallint => LogicalType::SmallInt,
        TPrimitiveType::Int => LogicalType::Int,
        TPrimitiveType::Bigint => LogicalType::BigInt,
        TPrimitiveType::Largeint => LogicalType::LargeInt,
        TPrimitiveType::Float => LogicalType::Float,
        TPrimitiveType::Double => LogicalType::Double,
        TPrimitiveType::Date => LogicalType::Date,
        TPrimitiveType::Datetime => LogicalType::Datetime,
        TPrimitiveType::Time => LogicalType::Time,
        TPrimitiveType::Binary => LogicalType::Binary,
        TPrimitiveType::Varbinary => LogicalType::Varbinary,
        TPrimitiveType::Decimal => LogicalType::Decimal,
        TPrimitiveType::DecimalV2 => LogicalType::DecimalV2,
        TPrimitiveType::Decimal32 => LogicalType::Decimal32,
        TPrimitiveType::Decimal64 => LogicalType::Decimal64,
        TPrimitiveType::Decimal128 => LogicalType::Decimal128,
        TPrimitiveType::Char => LogicalType::Char,
        TPrimitiveType::Varchar => LogicalType::Varchar,
        TPrimitiveType::Hll => LogicalType::Hll,
        TPrimitiveType::Object => LogicalType::Object,
        TPrimitiveType::Percentile => LogicalType::Percentile,
        TPrimitiveType::Json => LogicalType::Json,
        TPrimitiveType::Function => LogicalType::Function,
    }
}

/// Raw wire code variant of [`thrift_to_type`]; codes from a newer peer map to `Unknown`.
pub fn thrift_code_to_type(code: i32) -> LogicalType {
    match TPrimitiveType::try_from(code) {
        Ok(ttype) => thrift_to_type(ttype),
        Err(e) => {
            warn!("{}", e);
            LogicalType::Unknown
        }
    }
}

/// Wire code of a tag, `None` for tags that never cross process boundaries
/// as a scalar (v1 storage layouts, unsigned integers, nested types, `NONE`).
pub fn try_to_thrift(t: LogicalType) -> Option<TPrimitiveType> {
    let ttype = match t {
        LogicalType::Unknown => TPrimitiveType::InvalidType,
        LogicalType::Null => TPrimitiveType::NullType,
        LogicalType::Boolean => TPrimitiveType::Boolean,
        LogicalType::TinyInt => TPrimitiveType::Tinyint,
        LogicalType::SmallInt => TPrimitiveType::Smallint,
        LogicalType::Int => TPrimitiveType::Int,
        LogicalType::BigInt => TPrimitiveType::Bigint,
        LogicalType::LargeInt => TPrimitiveType::Largeint,
        LogicalType::Float => TPrimitiveType::Float,
        LogicalType::Double => TPrimitiveType::Double,
        LogicalType::Date => TPrimitiveType::Date,
        LogicalType::Datetime => TPrimitiveType::Datetime,
        LogicalType::Time => TPrimitiveType::Time,
        LogicalType::Binary => TPrimitiveType::Binary,
        LogicalType::Varbinary => TPrimitiveType::Varbinary,
        LogicalType::Decimal => TPrimitiveType::Decimal,
        LogicalType::DecimalV2 => TPrimitiveType::DecimalV2,
        LogicalType::Decimal32 => TPrimitiveType::Decimal32,
        LogicalType::Decimal64 => TPrimitiveType::Decimal64,
        LogicalType::Decimal128 => TPrimitiveType::Decimal128,
        LogicalType::Char => TPrimitiveType::Char,
        LogicalType::Varchar => TPrimitiveType::Varchar,
        LogicalType::Hll => TPrimitiveType::Hll,
        LogicalType::Object => TPrimitiveType::Object,
        LogicalType::Percentile => TPrimitiveType::Percentile,
        LogicalType::Json => TPrimitiveType::Json,
        LogicalType::Function => TPrimitiveType::Function,
        LogicalType::UnsignedTinyInt
        | LogicalType::UnsignedSmallInt
        | LogicalType::UnsignedInt
        | LogicalType::UnsignedBigInt
        | LogicalType::DiscreteDouble
        | LogicalType::DateV1
        | LogicalType::DatetimeV1
        | LogicalType::Struct
        | LogicalType::Array
        | LogicalType::Map
        | LogicalType::None => return None,
    };
    Some(ttype)
}

/// # Panics
///
/// Panics if `t` has no wire code. Callers only hand over tags produced by
/// the execution layer, which all have one.
pub fn to_thrift(t: LogicalType) -> TPrimitiveType {
    match try_to_thrift(t) {
        Some(ttype) => ttype,
        None => panic!("logical type {} has no wire type code", t),
    }
}

pub fn to_in_opcode(t: LogicalType) -> TExprOpcode {
    match t {
        LogicalType::Boolean => TExprOpcode::FilterInBoolean,
        LogicalType::TinyInt => TExprOpcode::FilterInTinyint,
        LogicalType::SmallInt => TExprOpcode::FilterInSmallint,
        LogicalType::Int => TExprOpcode::FilterInInt,
        LogicalType::BigInt => TExprOpcode::FilterInBigint,
        LogicalType::LargeInt => TExprOpcode::FilterInLargeint,
        LogicalType::Float => TExprOpcode::FilterInFloat,
        LogicalType::Double => TExprOpcode::FilterInDouble,
        LogicalType::Char | LogicalType::Varchar => TExprOpcode::FilterInString,
        LogicalType::Date | LogicalType::Datetime => TExprOpcode::FilterInTimestamp,
        LogicalType::DecimalV2
        | LogicalType::Decimal32
        | LogicalType::Decimal64
        | LogicalType::Decimal128 => TExprOpcode::FilterInDecimal,
        _ => TExprOpcode::FilterIn,
    }
}

fn scalar_node(ttype: TPrimitiveType) -> TTypeNode {
    TTypeNode {
        type_: TTypeNodeType::Scalar,
        scalar_type: Some(TScalarType::new(ttype)),
        struct_fields: None,
    }
}

fn composite_node(type_: TTypeNodeType, struct_fields: Option<Vec<TStructField>>) -> TTypeNode {
    TTypeNode {
        type_,
        scalar_type: None,
        struct_fields,
    }
}

/// Descriptor of a single scalar type.
pub fn gen_type_desc(ttype: TPrimitiveType) -> TTypeDesc {
    TTypeDesc {
        types: vec![scalar_node(ttype)],
    }
}

pub fn gen_array_type_desc(element: TTypeDesc) -> TTypeDesc {
    let mut types = vec![composite_node(TTypeNodeType::Array, None)];
    types.extend(element.types);
    TTypeDesc { types }
}

pub fn gen_map_type_desc(key: TTypeDesc, value: TTypeDesc) -> TTypeDesc {
    let mut types = vec![composite_node(TTypeNodeType::Map, None)];
    types.extend(key.types);
    types.extend(value.types);
    TTypeDesc { types }
}

pub fn gen_struct_type_desc(fields: Vec<(String, TTypeDesc)>) -> TTypeDesc {
    let names = fields
        .iter()
        .map(|(name, _)| TStructField {
            name: name.clone(),
            comment: None,
        })
        .collect();
    let mut types = vec![composite_node(TTypeNodeType::Struct, Some(names))];
    for (_, child) in fields {
        types.extend(child.types);
    }
    TTypeDesc { types }
}

impl TTypeDesc {
    /// Logical tag of the outermost node, `Unknown` for an empty descriptor.
    pub fn root_type(&self) -> LogicalType {
        match self.types.first() {
            Some(node) => match node.type_ {
                TTypeNodeType::Array => LogicalType::Array,
                TTypeNodeType::Map => LogicalType::Map,
                TTypeNodeType::Struct => LogicalType::Struct,
                TTypeNodeType::Scalar => node
                    .scalar_type
                    .as_ref()
                    .map(|s| thrift_to_type(s.type_))
                    .unwrap_or(LogicalType::Unknown),
            },
            None => LogicalType::Unknown,
        }
    }
}
