//! 随机数工厂
//!
//! 生成定长数字串、整数、两位小数金额以及指定天数内的随机时间。

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use tracing::warn;

/// `u64` 能完整容纳的最大位数
pub const MAX_INT_DIGITS: usize = 19;

/// 金额整数部分范围（含）
const DECIMAL_BASE_MIN: u32 = 10;
const DECIMAL_BASE_MAX: u32 = 200;

/// 生成的数值类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Str,
    Int,
    Decimal,
}

/// 生成结果
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedNumber {
    Str(String),
    Int(u64),
    Decimal(f64),
}

impl GeneratedNumber {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// 按类型生成随机数
///
/// - `Str`: `length` 位独立随机数字
/// - `Int`: 同上并解析为整数，超过 19 位时截断为 19 位，0 位返回 0
/// - `Decimal`: 忽略 `length`，返回 [10.00, 200.99] 内的两位小数
pub fn create_number(length: usize, kind: NumberKind) -> GeneratedNumber {
    let mut rng = rand::thread_rng();
    create_number_with(&mut rng, length, kind)
}

/// 使用指定随机源生成随机数
pub fn create_number_with<R: Rng + ?Sized>(
    rng: &mut R,
    length: usize,
    kind: NumberKind,
) -> GeneratedNumber {
    match kind {
        NumberKind::Str => GeneratedNumber::Str(digits(rng, length)),
        NumberKind::Int => {
            let length = if length > MAX_INT_DIGITS {
                warn!(length, max = MAX_INT_DIGITS, "整数位数超出上限，已截断");
                MAX_INT_DIGITS
            } else {
                length
            };
            let value = (0..length).fold(0u64, |acc, _| acc * 10 + rng.gen_range(0..10u64));
            GeneratedNumber::Int(value)
        }
        NumberKind::Decimal => GeneratedNumber::Decimal(decimal(rng)),
    }
}

/// 生成 `length` 位数字串（允许前导 0）
pub fn digits<R: Rng + ?Sized>(rng: &mut R, length: usize) -> String {
    (0..length)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

/// 生成金额：整数部分 [10, 200]，加上两位小数
pub fn decimal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    let base = rng.gen_range(DECIMAL_BASE_MIN..=DECIMAL_BASE_MAX);
    let cents = rng.gen_range(0..100u32);
    f64::from(base * 100 + cents) / 100.0
}

/// 生成 `[now - days, now]` 内的随机时间（秒级精度）
///
/// 负数天数按 0 处理；天数超出时间可表示范围时下界取 Unix 纪元
pub fn generate_random_datetime(days: i64) -> DateTime<Utc> {
    let mut rng = rand::thread_rng();
    random_datetime_with(&mut rng, days)
}

/// 使用指定随机源生成随机时间
pub fn random_datetime_with<R: Rng + ?Sized>(rng: &mut R, days: i64) -> DateTime<Utc> {
    let now = Utc::now();
    let past = Duration::try_days(days.max(0))
        .and_then(|window| now.checked_sub_signed(window))
        .unwrap_or_default();

    // 下界向上取整到整秒，保证结果不早于 past
    let lower = past.timestamp() + i64::from(past.timestamp_subsec_nanos() > 0);
    let upper = now.timestamp();
    if lower > upper {
        return now;
    }

    let timestamp = rng.gen_range(lower..=upper);
    DateTime::from_timestamp(timestamp, 0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_str_number() {
        let number = create_number(6, NumberKind::Str);
        let s = number.as_str().unwrap();

        assert_eq!(s.len(), 6);
        assert!(s.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_zero_length() {
        assert_eq!(create_number(0, NumberKind::Str), GeneratedNumber::Str(String::new()));
        assert_eq!(create_number(0, NumberKind::Int), GeneratedNumber::Int(0));
    }

    #[test]
    fn test_int_number_fits_length() {
        for _ in 0..200 {
            match create_number(4, NumberKind::Int) {
                GeneratedNumber::Int(v) => assert!(v < 10_000),
                other => panic!("预期整数，实际 {:?}", other),
            }
        }
    }

    #[test]
    fn test_int_number_clamped() {
        // 超长位数不会溢出
        for _ in 0..50 {
            assert!(matches!(
                create_number(40, NumberKind::Int),
                GeneratedNumber::Int(_)
            ));
        }
    }

    #[test]
    fn test_decimal_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let value = decimal(&mut rng);
            assert!((10.0..=200.99).contains(&value), "越界: {}", value);
            // 最多两位小数
            let scaled = value * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6);
        }
    }

    #[test]
    fn test_decimal_via_create_number() {
        match create_number(1, NumberKind::Decimal) {
            GeneratedNumber::Decimal(v) => assert!((10.0..=200.99).contains(&v)),
            other => panic!("预期小数，实际 {:?}", other),
        }
    }

    #[test]
    fn test_random_datetime_window() {
        let mut rng = StdRng::seed_from_u64(11);
        for days in [0, 1, 60] {
            for _ in 0..500 {
                let before = Utc::now();
                let value = random_datetime_with(&mut rng, days);
                let after = Utc::now();

                // 下界含端点，不允许早于 now - days
                assert!(value <= after);
                assert!(value >= before - Duration::days(days), "越界: {}", value);
            }
        }
    }

    #[test]
    fn test_random_datetime_negative_days() {
        let before = Utc::now();
        let value = generate_random_datetime(-5);
        assert!(value >= before);
        assert!(value <= Utc::now());
    }

    #[test]
    fn test_random_datetime_huge_window_does_not_panic() {
        for days in [100_000_000, i64::MAX] {
            let value = generate_random_datetime(days);
            assert!(value >= DateTime::<Utc>::default());
            assert!(value <= Utc::now());
        }
    }

    proptest! {
        #[test]
        fn prop_str_number_has_exact_length(length in 0usize..64) {
            let number = create_number(length, NumberKind::Str);
            let s = number.as_str().unwrap();
            prop_assert_eq!(s.len(), length);
            prop_assert!(s.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
