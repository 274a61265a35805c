pub mod delegate;
pub mod guard;
pub mod name;
pub mod size;
pub mod wire;

use serde_derive::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub use self::delegate::{delegate_type, FixedLengthTag, LogicalTypeTag};
pub use self::guard::{Guard, TypeSet};
pub use self::name::{logical_type_to_string, raw_type_to_string, string_to_logical_type};
pub use self::size::get_size_of_fixed_length_type;
pub use self::wire::{gen_type_desc, thrift_to_type, to_in_opcode, to_thrift};

/// Every value kind the storage and execution layers can hold.
///
/// Discriminants are part of the wire and plan compatibility surface and are
/// never renumbered. Slot 21 and slots 26..=41 are reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
#[repr(u8)]
pub enum LogicalType {
    Unknown = 0,
    TinyInt = 1,
    UnsignedTinyInt = 2,
    SmallInt = 3,
    UnsignedSmallInt = 4,
    Int = 5,
    UnsignedInt = 6,
    BigInt = 7,
    UnsignedBigInt = 8,
    LargeInt = 9,
    Float = 10,
    Double = 11,
    DiscreteDouble = 12,
    Char = 13,
    DateV1 = 14,
    DatetimeV1 = 15,
    Decimal = 16,
    Varchar = 17,
    Struct = 18,
    Array = 19,
    Map = 20,
    None = 22,
    Hll = 23,
    Boolean = 24,
    Object = 25,
    Null = 42,
    Function = 43,
    Time = 44,
    Binary = 45,
    Varbinary = 46,
    Decimal32 = 47,
    Decimal64 = 48,
    Decimal128 = 49,
    Date = 50,
    Datetime = 51,
    DecimalV2 = 52,
    Percentile = 53,
    Json = 54,
}

// tag-indexed bitsets are u64
const _: () = assert!(LogicalType::MAX_VALUE as u32 <= u64::BITS);

impl LogicalType {
    /// Upper bound (exclusive) of every tag value. New tags must stay below it.
    pub const MAX_VALUE: u8 = 55;

    pub const ALL: [LogicalType; 38] = [
        Self::Unknown,
        Self::TinyInt,
        Self::UnsignedTinyInt,
        Self::SmallInt,
        Self::UnsignedSmallInt,
        Self::Int,
        Self::UnsignedInt,
        Self::BigInt,
        Self::UnsignedBigInt,
        Self::LargeInt,
        Self::Float,
        Self::Double,
        Self::DiscreteDouble,
        Self::Char,
        Self::DateV1,
        Self::DatetimeV1,
        Self::Decimal,
        Self::Varchar,
        Self::Struct,
        Self::Array,
        Self::Map,
        Self::None,
        Self::Hll,
        Self::Boolean,
        Self::Object,
        Self::Null,
        Self::Function,
        Self::Time,
        Self::Binary,
        Self::Varbinary,
        Self::Decimal32,
        Self::Decimal64,
        Self::Decimal128,
        Self::Date,
        Self::Datetime,
        Self::DecimalV2,
        Self::Percentile,
        Self::Json,
    ];

    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns `None` for reserved slots and for codes at or above `MAX_VALUE`.
    pub const fn from_repr(code: u8) -> Option<Self> {
        let t = match code {
            0 => Self::Unknown,
            1 => Self::TinyInt,
            2 => Self::UnsignedTinyInt,
            3 => Self::SmallInt,
            4 => Self::UnsignedSmallInt,
            5 => Self::Int,
            6 => Self::UnsignedInt,
            7 => Self::BigInt,
            8 => Self::UnsignedBigInt,
            9 => Self::LargeInt,
            10 => Self::Float,
            11 => Self::Double,
            12 => Self::DiscreteDouble,
            13 => Self::Char,
            14 => Self::DateV1,
            15 => Self::DatetimeV1,
            16 => Self::Decimal,
            17 => Self::Varchar,
            18 => Self::Struct,
            19 => Self::Array,
            20 => Self::Map,
            22 => Self::None,
            23 => Self::Hll,
            24 => Self::Boolean,
            25 => Self::Object,
            42 => Self::Null,
            43 => Self::Function,
            44 => Self::Time,
            45 => Self::Binary,
            46 => Self::Varbinary,
            47 => Self::Decimal32,
            48 => Self::Decimal64,
            49 => Self::Decimal128,
            50 => Self::Date,
            51 => Self::Datetime,
            52 => Self::DecimalV2,
            53 => Self::Percentile,
            54 => Self::Json,
            _ => return Option::None,
        };
        Some(t)
    }

    pub const fn is_reserved_code(code: u8) -> bool {
        code < Self::MAX_VALUE && Self::from_repr(code).is_none()
    }

    pub const fn delegate(self) -> LogicalType {
        delegate_type(self)
    }

    pub const fn satisfies(self, guard: Guard) -> bool {
        guard.satisfies(self)
    }

    pub fn guards(self) -> impl Iterator<Item = Guard> {
        Guard::ALL.into_iter().filter(move |g| g.satisfies(self))
    }
}

impl TryFrom<u8> for LogicalType {
    type Error = Error;

    fn try_from(code: u8) -> Result<Self> {
        match Self::from_repr(code) {
            Some(t) => Ok(t),
            Option::None if code < Self::MAX_VALUE => Err(Error::ReservedErr(format!(
                "logical type code {} is reserved",
                code
            ))),
            Option::None => Err(Error::ReservedErr(format!(
                "logical type code {} exceeds max value {}",
                code,
                Self::MAX_VALUE
            ))),
        }
    }
}

impl From<LogicalType> for u8 {
    fn from(t: LogicalType) -> u8 {
        t.code()
    }
}

pub fn is_string_type(t: LogicalType) -> bool {
    matches!(t, LogicalType::Char | LogicalType::Varchar)
}

pub const fn is_object_type(t: LogicalType) -> bool {
    matches!(
        t,
        LogicalType::Hll | LogicalType::Object | LogicalType::Json | LogicalType::Percentile
    )
}

pub fn is_decimalv3_field_type(t: LogicalType) -> bool {
    matches!(
        t,
        LogicalType::Decimal32 | LogicalType::Decimal64 | LogicalType::Decimal128
    )
}

pub fn is_binary_type(t: LogicalType) -> bool {
    matches!(t, LogicalType::Binary | LogicalType::Varbinary)
}

/// Tags usable as dictionary-style enumerable keys.
pub fn is_enumeration_type(t: LogicalType) -> bool {
    matches!(
        t,
        LogicalType::TinyInt
            | LogicalType::SmallInt
            | LogicalType::Int
            | LogicalType::BigInt
            | LogicalType::LargeInt
            | LogicalType::Date
    )
}

pub const fn is_scalar_primitive_type(t: LogicalType) -> bool {
    matches!(
        t,
        LogicalType::Boolean
            | LogicalType::TinyInt
            | LogicalType::SmallInt
            | LogicalType::Int
            | LogicalType::BigInt
            | LogicalType::LargeInt
            | LogicalType::Float
            | LogicalType::Double
            | LogicalType::Varchar
            | LogicalType::Date
            | LogicalType::Datetime
            | LogicalType::Binary
            | LogicalType::Varbinary
            | LogicalType::Decimal
            | LogicalType::Char
            | LogicalType::DecimalV2
            | LogicalType::Time
            | LogicalType::Decimal32
            | LogicalType::Decimal64
            | LogicalType::Decimal128
            | LogicalType::Json
    )
}

// TODO: allow varbinary once zone maps can order raw bytes.
pub fn is_zone_map_key_type(t: LogicalType) -> bool {
    !matches!(
        t,
        LogicalType::Char
            | LogicalType::Varchar
            | LogicalType::Json
            | LogicalType::Varbinary
            | LogicalType::Object
            | LogicalType::Hll
            | LogicalType::Percentile
    )
}

/// Implicit-cast compatibility of `rhs` into `lhs`.
///
/// The relation is directional: `VARCHAR` accepts `OBJECT`, but `CHAR` does
/// not, and `OBJECT` only accepts `VARCHAR` or itself. `FUNCTION` is never
/// compatible, not even with itself.
pub fn is_type_compatible(lhs: LogicalType, rhs: LogicalType) -> bool {
    if lhs == LogicalType::Function || rhs == LogicalType::Function {
        return false;
    }

    match lhs {
        LogicalType::Varchar => matches!(
            rhs,
            LogicalType::Char | LogicalType::Varchar | LogicalType::Hll | LogicalType::Object
        ),
        LogicalType::Object => matches!(rhs, LogicalType::Varchar | LogicalType::Object),
        LogicalType::Char | LogicalType::Hll => matches!(
            rhs,
            LogicalType::Char | LogicalType::Varchar | LogicalType::Hll
        ),
        _ => lhs == rhs,
    }
}

/// Storage field types still carry the v1 date/datetime/decimal layouts;
/// execution works on their current counterparts.
pub fn scalar_field_type_to_primitive_type(field_type: LogicalType) -> LogicalType {
    match field_type {
        LogicalType::DateV1 => LogicalType::Date,
        LogicalType::DatetimeV1 => LogicalType::Datetime,
        LogicalType::Decimal => LogicalType::DecimalV2,
        t => t,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(LogicalType::Unknown.code(), 0);
        assert_eq!(LogicalType::None.code(), 22);
        assert_eq!(LogicalType::Object.code(), 25);
        assert_eq!(LogicalType::Null.code(), 42);
        assert_eq!(LogicalType::Decimal32.code(), 47);
        assert_eq!(LogicalType::Json.code(), 54);
        assert_eq!(LogicalType::MAX_VALUE, 55);
    }

    #[test]
    fn test_all_is_sorted_and_complete() {
        for pair in LogicalType::ALL.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        for code in 0..=u8::MAX {
            let in_all = LogicalType::ALL.iter().any(|t| t.code() == code);
            assert_eq!(in_all, LogicalType::from_repr(code).is_some(), "code {}", code);
        }
        for t in LogicalType::ALL {
            assert_eq!(LogicalType::from_repr(t.code()), Some(t));
        }
    }

    #[test]
    fn test_reserved_codes() {
        assert!(LogicalType::is_reserved_code(21));
        for code in 26u8..=41 {
            assert!(LogicalType::is_reserved_code(code));
            assert!(matches!(
                LogicalType::try_from(code),
                Err(Error::ReservedErr(_))
            ));
        }
        assert!(!LogicalType::is_reserved_code(LogicalType::MAX_VALUE));
        assert!(LogicalType::try_from(LogicalType::MAX_VALUE).is_err());
        assert_eq!(LogicalType::try_from(24u8), Ok(LogicalType::Boolean));
    }

    #[test]
    fn test_compatible_direction() {
        assert!(is_type_compatible(LogicalType::Varchar, LogicalType::Object));
        assert!(!is_type_compatible(LogicalType::Object, LogicalType::Char));
        assert!(!is_type_compatible(LogicalType::Char, LogicalType::Object));
        assert!(is_type_compatible(LogicalType::Object, LogicalType::Varchar));
        assert!(is_type_compatible(LogicalType::Hll, LogicalType::Varchar));
        assert!(!is_type_compatible(LogicalType::Hll, LogicalType::Object));
        assert!(is_type_compatible(LogicalType::Varchar, LogicalType::Hll));
    }

    #[test]
    fn test_function_never_compatible() {
        assert!(!is_type_compatible(LogicalType::Function, LogicalType::Function));
        for t in LogicalType::ALL {
            assert!(!is_type_compatible(LogicalType::Function, t));
            assert!(!is_type_compatible(t, LogicalType::Function));
        }
    }

    #[test]
    fn test_compatible_identity_outside_string_family() {
        let string_like = [
            LogicalType::Char,
            LogicalType::Varchar,
            LogicalType::Hll,
            LogicalType::Object,
            LogicalType::Function,
        ];
        for lhs in LogicalType::ALL {
            if string_like.contains(&lhs) {
                continue;
            }
            for rhs in LogicalType::ALL {
                assert_eq!(is_type_compatible(lhs, rhs), lhs == rhs, "{:?} {:?}", lhs, rhs);
            }
        }
    }

    #[test]
    fn test_zone_map_key_type() {
        let excluded = [
            LogicalType::Char,
            LogicalType::Varchar,
            LogicalType::Json,
            LogicalType::Object,
            LogicalType::Hll,
            LogicalType::Percentile,
            LogicalType::Varbinary,
        ];
        for t in LogicalType::ALL {
            assert_eq!(is_zone_map_key_type(t), !excluded.contains(&t), "{:?}", t);
        }
    }

    #[test]
    fn test_families() {
        assert!(is_string_type(LogicalType::Char));
        assert!(!is_string_type(LogicalType::Binary));
        assert!(is_binary_type(LogicalType::Varbinary));
        assert!(is_object_type(LogicalType::Percentile));
        assert!(!is_object_type(LogicalType::Varchar));
        assert!(is_enumeration_type(LogicalType::Date));
        assert!(!is_enumeration_type(LogicalType::Datetime));
        assert!(!is_enumeration_type(LogicalType::Boolean));
        assert!(is_decimalv3_field_type(LogicalType::Decimal64));
        assert!(!is_decimalv3_field_type(LogicalType::DecimalV2));
    }

    #[test]
    fn test_scalar_primitive_type() {
        assert!(is_scalar_primitive_type(LogicalType::Json));
        assert!(is_scalar_primitive_type(LogicalType::Decimal));
        assert!(!is_scalar_primitive_type(LogicalType::DateV1));
        assert!(!is_scalar_primitive_type(LogicalType::Array));
        assert!(!is_scalar_primitive_type(LogicalType::Hll));
        assert!(!is_scalar_primitive_type(LogicalType::UnsignedInt));
        assert!(!is_scalar_primitive_type(LogicalType::Null));
    }

    #[test]
    fn test_scalar_field_type_to_primitive_type() {
        assert_eq!(
            scalar_field_type_to_primitive_type(LogicalType::DateV1),
            LogicalType::Date
        );
        assert_eq!(
            scalar_field_type_to_primitive_type(LogicalType::DatetimeV1),
            LogicalType::Datetime
        );
        assert_eq!(
            scalar_field_type_to_primitive_type(LogicalType::Decimal),
            LogicalType::DecimalV2
        );
        assert_eq!(
            scalar_field_type_to_primitive_type(LogicalType::Decimal64),
            LogicalType::Decimal64
        );
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&LogicalType::Decimal128).unwrap();
        assert_eq!(json, "49");
        let back: LogicalType = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LogicalType::Decimal128);
    }

    #[test]
    fn test_serde_rejects_reserved_code() {
        assert!(serde_json::from_str::<LogicalType>("30").is_err());
        assert!(serde_json::from_str::<LogicalType>("55").is_err());
        assert!(serde_json::from_str::<LogicalType>("\"Decimal128\"").is_err());
    }
}
