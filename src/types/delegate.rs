use super::LogicalType;

/// The tag whose physical representation backs `t`.
///
/// Fixed-precision decimals are stored as the signed integer of the same
/// width; every other tag is its own delegate.
pub const fn delegate_type(t: LogicalType) -> LogicalType {
    match t {
        LogicalType::Decimal32 => LogicalType::Int,
        LogicalType::Decimal64 => LogicalType::BigInt,
        LogicalType::Decimal128 => LogicalType::LargeInt,
        _ => t,
    }
}

/// Type-level view of a logical type, for code that picks its storage at
/// build time instead of branching on the tag.
pub trait LogicalTypeTag: Copy + Default + 'static {
    const TYPE: LogicalType;

    type Delegate: LogicalTypeTag;
}

/// Tags with a statically known width and a native Rust representation.
pub trait FixedLengthTag: LogicalTypeTag {
    type Native: Copy + Default + PartialOrd + std::fmt::Debug + 'static;
}

macro_rules! logical_type_tags {
    ($($tag:ident => $variant:ident, delegate $delegate:ident;)*) => {
        $(
            #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
            pub struct $tag;

            impl LogicalTypeTag for $tag {
                const TYPE: LogicalType = LogicalType::$variant;

                type Delegate = $delegate;
            }
        )*
    };
}

macro_rules! fixed_length_tags {
    ($($tag:ident => $native:ty;)*) => {
        $(
            impl FixedLengthTag for $tag {
                type Native = $native;
            }
        )*
    };
}

logical_type_tags! {
    TypeUnknown => Unknown, delegate TypeUnknown;
    TypeTinyInt => TinyInt, delegate TypeTinyInt;
    TypeUnsignedTinyInt => UnsignedTinyInt, delegate TypeUnsignedTinyInt;
    TypeSmallInt => SmallInt, delegate TypeSmallInt;
    TypeUnsignedSmallInt => UnsignedSmallInt, delegate TypeUnsignedSmallInt;
    TypeInt => Int, delegate TypeInt;
    TypeUnsignedInt => UnsignedInt, delegate TypeUnsignedInt;
    TypeBigInt => BigInt, delegate TypeBigInt;
    TypeUnsignedBigInt => UnsignedBigInt, delegate TypeUnsignedBigInt;
    TypeLargeInt => LargeInt, delegate TypeLargeInt;
    TypeFloat => Float, delegate TypeFloat;
    TypeDouble => Double, delegate TypeDouble;
    TypeDiscreteDouble => DiscreteDouble, delegate TypeDiscreteDouble;
    TypeChar => Char, delegate TypeChar;
    TypeDateV1 => DateV1, delegate TypeDateV1;
    TypeDatetimeV1 => DatetimeV1, delegate TypeDatetimeV1;
    TypeDecimal => Decimal, delegate TypeDecimal;
    TypeVarchar => Varchar, delegate TypeVarchar;
    TypeStruct => Struct, delegate TypeStruct;
    TypeArray => Array, delegate TypeArray;
    TypeMap => Map, delegate TypeMap;
    TypeNone => None, delegate TypeNone;
    TypeHll => Hll, delegate TypeHll;
    TypeBoolean => Boolean, delegate TypeBoolean;
    TypeObject => Object, delegate TypeObject;
    TypeNull => Null, delegate TypeNull;
    TypeFunction => Function, delegate TypeFunction;
    TypeTime => Time, delegate TypeTime;
    TypeBinary => Binary, delegate TypeBinary;
    TypeVarbinary => Varbinary, delegate TypeVarbinary;
    TypeDecimal32 => Decimal32, delegate TypeInt;
    TypeDecimal64 => Decimal64, delegate TypeBigInt;
    TypeDecimal128 => Decimal128, delegate TypeLargeInt;
    TypeDate => Date, delegate TypeDate;
    TypeDatetime => Datetime, delegate TypeDatetime;
    TypeDecimalV2 => DecimalV2, delegate TypeDecimalV2;
    TypePercentile => Percentile, delegate TypePercentile;
    TypeJson => Json, delegate TypeJson;
}

// date is a julian day, datetime packs julian day and microseconds,
// time is seconds as a double
fixed_length_tags! {
    TypeBoolean => u8;
    TypeTinyInt => i8;
    TypeUnsignedTinyInt => u8;
    TypeSmallInt => i16;
    TypeUnsignedSmallInt => u16;
    TypeInt => i32;
    TypeUnsignedInt => u32;
    TypeBigInt => i64;
    TypeUnsignedBigInt => u64;
    TypeLargeInt => i128;
    TypeFloat => f32;
    TypeDouble => f64;
    TypeDiscreteDouble => f64;
    TypeDecimal32 => <TypeInt as FixedLengthTag>::Native;
    TypeDecimal64 => <TypeBigInt as FixedLengthTag>::Native;
    TypeDecimal128 => <TypeLargeInt as FixedLengthTag>::Native;
    TypeDecimalV2 => i128;
    TypeDate => i32;
    TypeDatetime => i64;
    TypeTime => f64;
}
