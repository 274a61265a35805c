//! Rust mirror of the RPC definitions exchanged with other engine processes.
//!
//! The encoding itself belongs to the RPC layer; only the shapes that the
//! type layer converts to and from live here.

use serde_derive::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Wire type codes. Values follow the RPC enum and must not be reordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum TPrimitiveType {
    InvalidType = 0,
    NullType = 1,
    Boolean = 2,
    Tinyint = 3,
    Smallint = 4,
    Int = 5,
    Bigint = 6,
    Float = 7,
    Double = 8,
    Date = 9,
    Datetime = 10,
    Binary = 11,
    Decimal = 12,
    Char = 13,
    Largeint = 14,
    Varchar = 15,
    Hll = 16,
    DecimalV2 = 17,
    Time = 18,
    Object = 19,
    Percentile = 20,
    Decimal32 = 21,
    Decimal64 = 22,
    Decimal128 = 23,
    Json = 24,
    Function = 25,
    Varbinary = 26,
}

impl TPrimitiveType {
    pub const ALL: [TPrimitiveType; 27] = [
        Self::InvalidType,
        Self::NullType,
        Self::Boolean,
        Self::Tinyint,
        Self::Smallint,
        Self::Int,
        Self::Bigint,
        Self::Float,
        Self::Double,
        Self::Date,
        Self::Datetime,
        Self::Binary,
        Self::Decimal,
        Self::Char,
        Self::Largeint,
        Self::Varchar,
        Self::Hll,
        Self::DecimalV2,
        Self::Time,
        Self::Object,
        Self::Percentile,
        Self::Decimal32,
        Self::Decimal64,
        Self::Decimal128,
        Self::Json,
        Self::Function,
        Self::Varbinary,
    ];
}

impl TryFrom<i32> for TPrimitiveType {
    type Error = Error;

    fn try_from(code: i32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| *t as i32 == code)
            .ok_or_else(|| Error::WireErr(format!("unknown wire type code {}", code)))
    }
}

/// Expression opcodes used when lowering `value IN (list)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TExprOpcode {
    FilterIn,
    FilterInBoolean,
    FilterInTinyint,
    FilterInSmallint,
    FilterInInt,
    FilterInBigint,
    FilterInLargeint,
    FilterInFloat,
    FilterInDouble,
    FilterInString,
    FilterInTimestamp,
    FilterInDecimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TTypeNodeType {
    Scalar,
    Array,
    Map,
    Struct,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TScalarType {
    pub type_: TPrimitiveType,
    pub len: Option<i32>,
    pub precision: Option<i32>,
    pub scale: Option<i32>,
}

impl TScalarType {
    pub fn new(type_: TPrimitiveType) -> Self {
        Self {
            type_,
            len: None,
            precision: None,
            scale: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TStructField {
    pub name: String,
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TTypeNode {
    pub type_: TTypeNodeType,
    pub scalar_type: Option<TScalarType>,
    pub struct_fields: Option<Vec<TStructField>>,
}

/// A possibly nested type as a pre-order list of nodes: a composite node is
/// followed by the nodes of each of its children in turn.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TTypeDesc {
    pub types: Vec<TTypeNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TMVEpoch {
    pub epoch_id: i64,
    pub txn_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TMVStartEpochTask {
    pub epoch: TMVEpoch,
    pub max_exec_millis: i64,
    pub max_scan_rows: i64,
}
