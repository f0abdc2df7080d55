//! 往返性质测试。
//!
//! - **目标 (Why)**：对每个内建种类验证 `Decode(Encode(v)) == v`，浮点在自身位宽内不损失精度；
//! - **手法 (How)**：使用 Proptest 生成任意值，经默认编解码器编码后再解码回同类型容器；
//! - **边界 (What)**：NaN 不满足自反相等，单独按 `is_nan` 断言。

use proptest::prelude::*;
use spark_codec_nullable::{Nullable, TextScalar};

fn round_trip<T: TextScalar + Default>(value: T) -> Nullable<T> {
    let text = Nullable::new(value).marshal_text().expect("builtin kinds encode");
    let mut decoded = Nullable::<T>::null();
    decoded
        .unmarshal_text(&text)
        .expect("encoded text must decode back");
    decoded
}

proptest! {
    #[test]
    fn prop_bool_round_trips(value in any::<bool>()) {
        prop_assert_eq!(round_trip(value), Nullable::new(value));
    }

    #[test]
    fn prop_i8_round_trips(value in any::<i8>()) {
        prop_assert_eq!(round_trip(value), Nullable::new(value));
    }

    #[test]
    fn prop_i16_round_trips(value in any::<i16>()) {
        prop_assert_eq!(round_trip(value), Nullable::new(value));
    }

    #[test]
    fn prop_i32_round_trips(value in any::<i32>()) {
        prop_assert_eq!(round_trip(value), Nullable::new(value));
    }

    #[test]
    fn prop_i64_round_trips(value in any::<i64>()) {
        prop_assert_eq!(round_trip(value), Nullable::new(value));
    }

    #[test]
    fn prop_isize_round_trips_within_32_bits(value in any::<i32>()) {
        let value = value as isize;
        prop_assert_eq!(round_trip(value), Nullable::new(value));
    }

    #[test]
    fn prop_f32_round_trips_bit_exact(value in any::<f32>()) {
        let decoded = round_trip(value);
        let decoded = decoded.get().copied().expect("value present");
        if value.is_nan() {
            prop_assert!(decoded.is_nan());
        } else {
            prop_assert_eq!(decoded.to_bits(), value.to_bits());
        }
    }

    #[test]
    fn prop_f64_round_trips_bit_exact(value in any::<f64>()) {
        let decoded = round_trip(value);
        let decoded = decoded.get().copied().expect("value present");
        if value.is_nan() {
            prop_assert!(decoded.is_nan());
        } else {
            prop_assert_eq!(decoded.to_bits(), value.to_bits());
        }
    }

    #[test]
    fn prop_integer_text_has_no_leading_zeros(value in any::<i64>()) {
        let text = Nullable::new(value).marshal_text().unwrap();
        let text = String::from_utf8(text).unwrap();
        let digits = text.strip_prefix('-').unwrap_or(text.as_str());
        prop_assert!(digits == "0" || !digits.starts_with('0'));
        prop_assert!(!text.contains('e') && !text.contains('+'));
    }

    #[test]
    fn prop_finite_float_text_has_no_exponent(value in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        let text = Nullable::new(value).marshal_text().unwrap();
        prop_assert!(!text.contains(&b'e') && !text.contains(&b'E'));
    }

    #[test]
    fn prop_arbitrary_text_never_panics(text in ".*") {
        let mut target = Nullable::<i16>::null();
        let _ = target.unmarshal_text(text.as_bytes());
        let mut target = Nullable::<f32>::null();
        let _ = target.unmarshal_text(text.as_bytes());
        let mut target = Nullable::<bool>::null();
        let _ = target.unmarshal_text(text.as_bytes());
    }
}
