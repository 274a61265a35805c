use std::fmt::Display;
use std::str::FromStr;

use log::debug;

use super::LogicalType;
use crate::error::Error;

const UNKNOWN_NAME: &str = "UNKNOWN";

/// Canonical storage-facing name of a tag.
///
/// The v1 storage layouts own the plain `DATE`/`DATETIME` names, the current
/// layouts are `DATE_V2` and `TIMESTAMP`.
pub const fn logical_type_to_string(t: LogicalType) -> &'static str {
    match t {
        LogicalType::Unknown => UNKNOWN_NAME,
        LogicalType::TinyInt => "TINYINT",
        LogicalType::UnsignedTinyInt => "UNSIGNED_TINYINT",
        LogicalType::SmallInt => "SMALLINT",
        LogicalType::UnsignedSmallInt => "UNSIGNED_SMALLINT",
        LogicalType::Int => "INT",
        LogicalType::UnsignedInt => "UNSIGNED_INT",
        LogicalType::BigInt => "BIGINT",
        LogicalType::UnsignedBigInt => "UNSIGNED_BIGINT",
        LogicalType::LargeInt => "LARGEINT",
        LogicalType::Float => "FLOAT",
        LogicalType::Double => "DOUBLE",
        LogicalType::DiscreteDouble => "DISCRETE_DOUBLE",
        LogicalType::Char => "CHAR",
        LogicalType::DateV1 => "DATE",
        LogicalType::DatetimeV1 => "DATETIME",
        LogicalType::Decimal => "DECIMAL",
        LogicalType::Varchar => "VARCHAR",
        LogicalType::Struct => "STRUCT",
        LogicalType::Array => "ARRAY",
        LogicalType::Map => "MAP",
        LogicalType::None => "NONE",
        LogicalType::Hll => "HLL",
        LogicalType::Boolean => "BOOLEAN",
        LogicalType::Object => "OBJECT",
        LogicalType::Null => "NULL",
        LogicalType::Function => "FUNCTION",
        LogicalType::Time => "TIME",
        LogicalType::Binary => "BINARY",
        LogicalType::Varbinary => "VARBINARY",
        LogicalType::Decimal32 => "DECIMAL32",
        LogicalType::Decimal64 => "DECIMAL64",
        LogicalType::Decimal128 => "DECIMAL128",
        LogicalType::Date => "DATE_V2",
        LogicalType::Datetime => "TIMESTAMP",
        LogicalType::DecimalV2 => "DECIMAL_V2",
        LogicalType::Percentile => "PERCENTILE",
        LogicalType::Json => "JSON",
    }
}

pub fn raw_type_to_string(code: u8) -> &'static str {
    match LogicalType::from_repr(code) {
        Some(t) => logical_type_to_string(t),
        None => UNKNOWN_NAME,
    }
}

fn lookup(name: &str) -> Option<LogicalType> {
    let upper = name.trim().to_ascii_uppercase();
    let t = match upper.as_str() {
        "TINYINT" => LogicalType::TinyInt,
        "UNSIGNED_TINYINT" => LogicalType::UnsignedTinyInt,
        "SMALLINT" => LogicalType::SmallInt,
        "UNSIGNED_SMALLINT" => LogicalType::UnsignedSmallInt,
        "INT" => LogicalType::Int,
        "UNSIGNED_INT" => LogicalType::UnsignedInt,
        "BIGINT" => LogicalType::BigInt,
        "UNSIGNED_BIGINT" => LogicalType::UnsignedBigInt,
        "LARGEINT" => LogicalType::LargeInt,
        "FLOAT" => LogicalType::Float,
        "DOUBLE" => LogicalType::Double,
        "DISCRETE_DOUBLE" => LogicalType::DiscreteDouble,
        "CHAR" => LogicalType::Char,
        "DATE" | "DATE_V1" => LogicalType::DateV1,
        "DATETIME" | "DATETIME_V1" => LogicalType::DatetimeV1,
        "DECIMAL" => LogicalType::Decimal,
        "VARCHAR" => LogicalType::Varchar,
        "STRUCT" => LogicalType::Struct,
        "ARRAY" => LogicalType::Array,
        "MAP" => LogicalType::Map,
        "NONE" => LogicalType::None,
        "HLL" => LogicalType::Hll,
        "BOOLEAN" => LogicalType::Boolean,
        "OBJECT" => LogicalType::Object,
        "NULL" => LogicalType::Null,
        "FUNCTION" => LogicalType::Function,
        "TIME" => LogicalType::Time,
        "BINARY" => LogicalType::Binary,
        "VARBINARY" => LogicalType::Varbinary,
        "DECIMAL32" => LogicalType::Decimal32,
        "DECIMAL64" => LogicalType::Decimal64,
        "DECIMAL128" => LogicalType::Decimal128,
        "DATE_V2" => LogicalType::Date,
        "TIMESTAMP" => LogicalType::Datetime,
        "DECIMAL_V2" | "DECIMALV2" => LogicalType::DecimalV2,
        "PERCENTILE" => LogicalType::Percentile,
        "JSON" => LogicalType::Json,
        UNKNOWN_NAME => LogicalType::Unknown,
        _ => return None,
    };
    Some(t)
}

/// Case-insensitive name lookup. Unrecognized names map to `Unknown`.
pub fn string_to_logical_type(name: &str) -> LogicalType {
    lookup(name).unwrap_or_else(|| {
        debug!("unknown logical type name: {}", name);
        LogicalType::Unknown
    })
}

impl FromStr for LogicalType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lookup(s).ok_or_else(|| Error::ParseErr(format!("unknown logical type: {}", s)))
    }
}

/// SQL-facing spelling, used in messages and plan dumps.
pub fn type_to_string(t: LogicalType) -> &'static str {
    match t {
        LogicalType::Unknown => "INVALID",
        LogicalType::Date => "DATE",
        LogicalType::Datetime => "DATETIME",
        LogicalType::DecimalV2 => "DECIMALV2",
        LogicalType::DateV1 => "DATE_V1",
        LogicalType::DatetimeV1 => "DATETIME_V1",
        t => logical_type_to_string(t),
    }
}

/// Lowercase spelling used in user-facing error messages.
pub fn type_to_string_v2(t: LogicalType) -> String {
    match t {
        LogicalType::Unknown => "unknown".to_owned(),
        LogicalType::Date => "date".to_owned(),
        LogicalType::Datetime => "datetime".to_owned(),
        LogicalType::DecimalV2
        | LogicalType::Decimal32
        | LogicalType::Decimal64
        | LogicalType::Decimal128 => "decimal".to_owned(),
        t => type_to_string(t).to_ascii_lowercase(),
    }
}

/// Prints the canonical name, so the output parses back to the same tag.
impl Display for LogicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", logical_type_to_string(*self))
    }
}
