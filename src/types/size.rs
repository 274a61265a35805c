use super::LogicalType;

const fn fixed_length(t: LogicalType) -> usize {
    match t {
        LogicalType::Boolean => 1,
        LogicalType::TinyInt | LogicalType::UnsignedTinyInt => 1,
        LogicalType::SmallInt | LogicalType::UnsignedSmallInt => 2,
        LogicalType::Int | LogicalType::UnsignedInt => 4,
        LogicalType::BigInt | LogicalType::UnsignedBigInt => 8,
        LogicalType::LargeInt => 16,
        LogicalType::Float => 4,
        LogicalType::Double | LogicalType::DiscreteDouble => 8,
        LogicalType::Decimal32 => 4,
        LogicalType::Decimal64 => 8,
        LogicalType::Decimal128 => 16,
        LogicalType::DecimalV2 => 16,
        // int64 integer part + int32 fraction
        LogicalType::Decimal => 12,
        LogicalType::Date => 4,
        LogicalType::Datetime => 8,
        LogicalType::Time => 8,
        // packed 24-bit date
        LogicalType::DateV1 => 3,
        LogicalType::DatetimeV1 => 8,
        _ => 0,
    }
}

const fn build_size_table() -> [usize; LogicalType::MAX_VALUE as usize] {
    let mut table = [0usize; LogicalType::MAX_VALUE as usize];
    let mut i = 0;
    while i < LogicalType::ALL.len() {
        let t = LogicalType::ALL[i];
        table[t as usize] = fixed_length(t);
        i += 1;
    }
    table
}

static SIZE_TABLE: [usize; LogicalType::MAX_VALUE as usize] = build_size_table();

/// Byte width of a fixed-length tag, 0 for variable-length and nested tags.
pub fn get_size_of_fixed_length_type(t: LogicalType) -> usize {
    SIZE_TABLE[t as usize]
}
