use super::{LogicalType, LogicalTypeTag};

/// A set of logical types, one bit per tag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TypeSet(u64);

impl TypeSet {
    pub const EMPTY: TypeSet = TypeSet(0);

    pub const fn of(types: &[LogicalType]) -> Self {
        let mut bits = 0u64;
        let mut i = 0;
        while i < types.len() {
            bits |= 1u64 << types[i] as u8;
            i += 1;
        }
        TypeSet(bits)
    }

    pub const fn union(self, other: TypeSet) -> Self {
        TypeSet(self.0 | other.0)
    }

    pub const fn contains(self, t: LogicalType) -> bool {
        self.0 & (1u64 << t as u8) != 0
    }

    /// Reserved and out-of-range codes are never members.
    pub const fn contains_raw(self, code: u8) -> bool {
        (code as u32) < u64::BITS && self.0 & (1u64 << code) != 0
    }

    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub fn iter(self) -> impl Iterator<Item = LogicalType> {
        LogicalType::ALL.into_iter().filter(move |t| self.contains(*t))
    }
}

impl FromIterator<LogicalType> for TypeSet {
    fn from_iter<I: IntoIterator<Item = LogicalType>>(iter: I) -> Self {
        iter.into_iter()
            .fold(TypeSet::EMPTY, |set, t| set.union(TypeSet::of(&[t])))
    }
}

use LogicalType as T;

const BOOLEAN: TypeSet = TypeSet::of(&[T::Boolean]);
const BIGINT: TypeSet = TypeSet::of(&[T::BigInt]);
const LARGEINT: TypeSet = TypeSet::of(&[T::LargeInt]);
const INTEGER: TypeSet = TypeSet::of(&[T::TinyInt, T::SmallInt, T::Int, T::BigInt, T::LargeInt]);
// widening target for SUM over small integers; LARGEINT sums stay LARGEINT
const SUM_BIGINT: TypeSet =
    TypeSet::of(&[T::Boolean, T::TinyInt, T::SmallInt, T::Int, T::BigInt]);
const FLOAT: TypeSet = TypeSet::of(&[T::Float, T::Double]);
const DECIMAL32: TypeSet = TypeSet::of(&[T::Decimal32]);
const DECIMAL64: TypeSet = TypeSet::of(&[T::Decimal64]);
const DECIMAL128: TypeSet = TypeSet::of(&[T::Decimal128]);
const DECIMAL: TypeSet = DECIMAL32.union(DECIMAL64).union(DECIMAL128);
const SUM_DECIMAL64: TypeSet = TypeSet::of(&[T::Decimal32, T::Decimal64]);
const HLL: TypeSet = TypeSet::of(&[T::Hll]);
const OBJECT: TypeSet = TypeSet::of(&[T::Object]);
const STRING: TypeSet = TypeSet::of(&[T::Char, T::Varchar]);
const BINARY: TypeSet = TypeSet::of(&[T::Binary, T::Varbinary]);
const JSON: TypeSet = TypeSet::of(&[T::Json]);
const FUNCTION: TypeSet = TypeSet::of(&[T::Function]);
const OBJECT_FAMILY: TypeSet = TypeSet::of(&[T::Json, T::Hll, T::Object, T::Percentile]);
const DATE: TypeSet = TypeSet::of(&[T::Date]);
const DATETIME: TypeSet = TypeSet::of(&[T::Datetime]);
const TIME: TypeSet = TypeSet::of(&[T::Time]);
const DECIMALV2: TypeSet = TypeSet::of(&[T::DecimalV2]);
const DECIMAL_OF_ANY_VERSION: TypeSet =
    TypeSet::of(&[T::DecimalV2, T::Decimal32, T::Decimal64, T::Decimal128]);
const DATE_OR_DATETIME: TypeSet = TypeSet::of(&[T::Date, T::Datetime]);

const INTEGRAL: TypeSet = BOOLEAN.union(INTEGER);
const ARITHMETIC: TypeSet = BOOLEAN.union(INTEGER).union(FLOAT);
const AVG_DOUBLE: TypeSet = BOOLEAN.union(INTEGER).union(FLOAT).union(DATE_OR_DATETIME);
const AVG_DECIMAL64: TypeSet = SUM_DECIMAL64;
const NUMBER: TypeSet = BOOLEAN.union(INTEGER).union(FLOAT);
const NUMERIC: TypeSet = NUMBER.union(DECIMAL);
const FIXED_LENGTH: TypeSet = ARITHMETIC
    .union(DECIMALV2)
    .union(DECIMAL)
    .union(DATETIME)
    .union(DATE)
    .union(TIME);
const AGGREGATE: TypeSet = ARITHMETIC
    .union(DECIMALV2)
    .union(DECIMAL)
    .union(DATETIME)
    .union(DATE);

/// Semantic families kernels specialize on.
///
/// Atomic guards list their members directly; union guards are derived from
/// atomic sets only, so a membership change propagates on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Guard {
    Boolean,
    BigInt,
    LargeInt,
    Integer,
    SumBigInt,
    Float,
    Decimal32,
    Decimal64,
    Decimal128,
    Decimal,
    SumDecimal64,
    Hll,
    Object,
    String,
    Binary,
    Json,
    Function,
    ObjectFamily,
    Date,
    Datetime,
    Time,
    DecimalV2,
    DecimalOfAnyVersion,
    DateOrDatetime,
    Integral,
    Arithmetic,
    AvgDouble,
    AvgDecimal64,
    Number,
    Numeric,
    FixedLength,
    Aggregate,
}

impl Guard {
    pub const ALL: [Guard; 32] = [
        Self::Boolean,
        Self::BigInt,
        Self::LargeInt,
        Self::Integer,
        Self::SumBigInt,
        Self::Float,
        Self::Decimal32,
        Self::Decimal64,
        Self::Decimal128,
        Self::Decimal,
        Self::SumDecimal64,
        Self::Hll,
        Self::Object,
        Self::String,
        Self::Binary,
        Self::Json,
        Self::Function,
        Self::ObjectFamily,
        Self::Date,
        Self::Datetime,
        Self::Time,
        Self::DecimalV2,
        Self::DecimalOfAnyVersion,
        Self::DateOrDatetime,
        Self::Integral,
        Self::Arithmetic,
        Self::AvgDouble,
        Self::AvgDecimal64,
        Self::Number,
        Self::Numeric,
        Self::FixedLength,
        Self::Aggregate,
    ];

    pub const fn members(self) -> TypeSet {
        match self {
            Self::Boolean => BOOLEAN,
            Self::BigInt => BIGINT,
            Self::LargeInt => LARGEINT,
            Self::Integer => INTEGER,
            Self::SumBigInt => SUM_BIGINT,
            Self::Float => FLOAT,
            Self::Decimal32 => DECIMAL32,
            Self::Decimal64 => DECIMAL64,
            Self::Decimal128 => DECIMAL128,
            Self::Decimal => DECIMAL,
            Self::SumDecimal64 => SUM_DECIMAL64,
            Self::Hll => HLL,
            Self::Object => OBJECT,
            Self::String => STRING,
            Self::Binary => BINARY,
            Self::Json => JSON,
            Self::Function => FUNCTION,
            Self::ObjectFamily => OBJECT_FAMILY,
            Self::Date => DATE,
            Self::Datetime => DATETIME,
            Self::Time => TIME,
            Self::DecimalV2 => DECIMALV2,
            Self::DecimalOfAnyVersion => DECIMAL_OF_ANY_VERSION,
            Self::DateOrDatetime => DATE_OR_DATETIME,
            Self::Integral => INTEGRAL,
            Self::Arithmetic => ARITHMETIC,
            Self::AvgDouble => AVG_DOUBLE,
            Self::AvgDecimal64 => AVG_DECIMAL64,
            Self::Number => NUMBER,
            Self::Numeric => NUMERIC,
            Self::FixedLength => FIXED_LENGTH,
            Self::Aggregate => AGGREGATE,
        }
    }

    pub const fn satisfies(self, t: LogicalType) -> bool {
        self.members().contains(t)
    }

    pub const fn satisfies_raw(self, code: u8) -> bool {
        self.members().contains_raw(code)
    }

    pub const fn is_union(self) -> bool {
        matches!(
            self,
            Self::Decimal
                | Self::Integral
                | Self::Arithmetic
                | Self::AvgDouble
                | Self::AvgDecimal64
                | Self::Number
                | Self::Numeric
                | Self::FixedLength
                | Self::Aggregate
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::BigInt => "bigint",
            Self::LargeInt => "largeint",
            Self::Integer => "integer",
            Self::SumBigInt => "sum_bigint",
            Self::Float => "float",
            Self::Decimal32 => "decimal32",
            Self::Decimal64 => "decimal64",
            Self::Decimal128 => "decimal128",
            Self::Decimal => "decimal",
            Self::SumDecimal64 => "sum_decimal64",
            Self::Hll => "hll",
            Self::Object => "object",
            Self::String => "string",
            Self::Binary => "binary",
            Self::Json => "json",
            Self::Function => "function",
            Self::ObjectFamily => "object_family",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Time => "time",
            Self::DecimalV2 => "decimalv2",
            Self::DecimalOfAnyVersion => "decimal_of_any_version",
            Self::DateOrDatetime => "date_or_datetime",
            Self::Integral => "integral",
            Self::Arithmetic => "arithmetic",
            Self::AvgDouble => "avg_double",
            Self::AvgDecimal64 => "avg_decimal64",
            Self::Number => "number",
            Self::Numeric => "numeric",
            Self::FixedLength => "fixedlength",
            Self::Aggregate => "aggregate",
        }
    }
}

impl std::fmt::Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "pt_is_{}", self.name())
    }
}

/// Guard check on a marker tag, usable in const items and associated consts.
pub const fn tag_satisfies<Tag: LogicalTypeTag>(guard: Guard) -> bool {
    guard.satisfies(Tag::TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::delegate::{TypeDecimal64, TypeLargeInt};

    fn set(types: &[LogicalType]) -> TypeSet {
        TypeSet::of(types)
    }

    #[test]
    fn test_atomic_members() {
        assert_eq!(
            Guard::Integer.members(),
            set(&[T::TinyInt, T::SmallInt, T::Int, T::BigInt, T::LargeInt])
        );
        assert_eq!(
            Guard::SumBigInt.members(),
            set(&[T::Boolean, T::TinyInt, T::SmallInt, T::Int, T::BigInt])
        );
        assert!(!Guard::SumBigInt.satisfies(T::LargeInt));
        assert_eq!(Guard::Float.members(), set(&[T::Float, T::Double]));
        assert_eq!(
            Guard::Decimal.members(),
            set(&[T::Decimal32, T::Decimal64, T::Decimal128])
        );
        assert_eq!(
            Guard::SumDecimal64.members(),
            set(&[T::Decimal32, T::Decimal64])
        );
        assert_eq!(Guard::String.members(), set(&[T::Char, T::Varchar]));
        assert_eq!(Guard::Binary.members(), set(&[T::Binary, T::Varbinary]));
        assert_eq!(
            Guard::DecimalOfAnyVersion.members(),
            set(&[T::DecimalV2, T::Decimal32, T::Decimal64, T::Decimal128])
        );
        assert_eq!(
            Guard::DateOrDatetime.members(),
            set(&[T::Date, T::Datetime])
        );
        for g in [
            Guard::Boolean,
            Guard::Hll,
            Guard::Object,
            Guard::Json,
            Guard::Function,
            Guard::Date,
            Guard::Datetime,
            Guard::Time,
            Guard::DecimalV2,
            Guard::Decimal32,
        ] {
            assert_eq!(g.members().len(), 1, "{}", g);
        }
    }

    fn union_of(guards: &[Guard]) -> Vec<u8> {
        (0..=u8::MAX)
            .filter(|code| guards.iter().any(|g| g.satisfies_raw(*code)))
            .collect()
    }

    fn members_raw(guard: Guard) -> Vec<u8> {
        (0..=u8::MAX).filter(|code| guard.satisfies_raw(*code)).collect()
    }

    #[test]
    fn test_union_guards_over_every_code() {
        let cases: &[(Guard, &[Guard])] = &[
            (Guard::Integral, &[Guard::Boolean, Guard::Integer]),
            (
                Guard::Arithmetic,
                &[Guard::Boolean, Guard::Integer, Guard::Float],
            ),
            (
                Guard::AvgDouble,
                &[
                    Guard::Boolean,
                    Guard::Integer,
                    Guard::Float,
                    Guard::DateOrDatetime,
                ],
            ),
            (Guard::AvgDecimal64, &[Guard::SumDecimal64]),
            (Guard::Number, &[Guard::Boolean, Guard::Integer, Guard::Float]),
            (Guard::Numeric, &[Guard::Number, Guard::Decimal]),
            (
                Guard::FixedLength,
                &[
                    Guard::Arithmetic,
                    Guard::DecimalV2,
                    Guard::Decimal,
                    Guard::Datetime,
                    Guard::Date,
                    Guard::Time,
                ],
            ),
            (
                Guard::Aggregate,
                &[
                    Guard::Arithmetic,
                    Guard::DecimalV2,
                    Guard::Decimal,
                    Guard::Datetime,
                    Guard::Date,
                ],
            ),
            (
                Guard::Decimal,
                &[Guard::Decimal32, Guard::Decimal64, Guard::Decimal128],
            ),
        ];
        for (guard, parts) in cases {
            assert!(guard.is_union());
            assert_eq!(members_raw(*guard), union_of(parts), "{}", guard);
        }
    }

    #[test]
    fn test_reserved_codes_satisfy_nothing() {
        for code in (0..=u8::MAX).filter(|c| LogicalType::from_repr(*c).is_none()) {
            for g in Guard::ALL {
                assert!(!g.satisfies_raw(code), "{} {}", g, code);
            }
        }
    }

    #[test]
    fn test_decimal_not_integer() {
        for t in [T::Decimal32, T::Decimal64, T::Decimal128] {
            assert!(!Guard::Integer.satisfies(t));
            assert!(!Guard::Integral.satisfies(t));
            assert!(Guard::Integer.satisfies(t.delegate()));
        }
    }

    #[test]
    fn test_exactly_one_fixed_decimal_guard() {
        let fixed = [Guard::Decimal32, Guard::Decimal64, Guard::Decimal128];
        for t in LogicalType::ALL {
            let hits = fixed.iter().filter(|g| g.satisfies(t)).count();
            assert_eq!(hits, Guard::Decimal.satisfies(t) as usize, "{:?}", t);
        }
    }

    #[test]
    fn test_const_evaluation() {
        const LARGEINT_SUMS_TO_BIGINT: bool = tag_satisfies::<TypeLargeInt>(Guard::SumBigInt);
        const DECIMAL64_AVG: bool = tag_satisfies::<TypeDecimal64>(Guard::AvgDecimal64);
        assert!(!LARGEINT_SUMS_TO_BIGINT);
        assert!(DECIMAL64_AVG);
    }

    #[test]
    fn test_type_set() {
        let s: TypeSet = [T::Int, T::Json, T::Int].into_iter().collect();
        assert_eq!(s.len(), 2);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![T::Int, T::Json]);
        assert!(!s.contains_raw(200));
        assert!(TypeSet::EMPTY.is_empty());
        assert_eq!(format!("{}", Guard::Integral), "pt_is_integral");
    }
}
