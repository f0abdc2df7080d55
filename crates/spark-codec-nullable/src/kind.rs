//! 标量种类、解析位宽查表与宽化/窄化中间值。
//!
//! - [`ScalarKind`] 是内建规则覆盖的封闭集合，实例化时由 [`crate::TextScalar`] 绑定；
//! - [`ParseWidth`] 把种类映射到 `(位宽, 有符号)`，驱动统一的解析例程；
//! - [`WideScalar`] 是编码前的宽化结果、解码后的待窄化结果。

use core::fmt;

/// 内建规则支持的标量种类。
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    /// `bool`。
    Bool,
    /// `i8`。
    I8,
    /// `i16`。
    I16,
    /// `i32`。
    I32,
    /// `i64`。
    I64,
    /// 平台默认位宽整数 `isize`。
    Isize,
    /// `f32`。
    F32,
    /// `f64`。
    F64,
}

/// 种类所属的编解码规则族。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalarClass {
    /// 布尔字面量规则。
    Bool,
    /// 十进制有符号整数规则。
    SignedInt,
    /// 十进制浮点规则。
    Float,
}

/// 解析时使用的位宽约束。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseWidth {
    /// 位宽（8/16/32/64）；布尔为单比特字面量，记作 1。
    pub bits: u32,
    /// 整数解析是否允许负值；整数下界由它决定，浮点与布尔不读取。
    pub signed: bool,
}

impl ScalarKind {
    /// 全部内建种类，按声明顺序排列。
    pub const ALL: [ScalarKind; 8] = [
        ScalarKind::Bool,
        ScalarKind::I8,
        ScalarKind::I16,
        ScalarKind::I32,
        ScalarKind::I64,
        ScalarKind::Isize,
        ScalarKind::F32,
        ScalarKind::F64,
    ];

    /// 返回种类的 Rust 类型名。
    pub const fn name(self) -> &'static str {
        match self {
            ScalarKind::Bool => "bool",
            ScalarKind::I8 => "i8",
            ScalarKind::I16 => "i16",
            ScalarKind::I32 => "i32",
            ScalarKind::I64 => "i64",
            ScalarKind::Isize => "isize",
            ScalarKind::F32 => "f32",
            ScalarKind::F64 => "f64",
        }
    }

    /// 返回种类所属的规则族。
    pub const fn class(self) -> ScalarClass {
        match self {
            ScalarKind::Bool => ScalarClass::Bool,
            ScalarKind::I8
            | ScalarKind::I16
            | ScalarKind::I32
            | ScalarKind::I64
            | ScalarKind::Isize => ScalarClass::SignedInt,
            ScalarKind::F32 | ScalarKind::F64 => ScalarClass::Float,
        }
    }

    /// 默认解析位宽查表。
    ///
    /// `Isize` 按 32 位做范围检查，即使存储位宽可能更大；
    /// 如需按平台位宽解析，见 [`crate::config::NativeIntWidth::Platform`]。
    pub const fn parse_width(self) -> ParseWidth {
        let (bits, signed) = match self {
            ScalarKind::Bool => (1, false),
            ScalarKind::I8 => (8, true),
            ScalarKind::I16 => (16, true),
            ScalarKind::I32 | ScalarKind::Isize => (32, true),
            ScalarKind::I64 => (64, true),
            ScalarKind::F32 => (32, false),
            ScalarKind::F64 => (64, false),
        };
        ParseWidth { bits, signed }
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 宽化后的标量：整数统一为 `i64`，浮点统一为 `f64`。
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WideScalar {
    /// 布尔值。
    Bool(bool),
    /// 任意有符号整数宽化后的值。
    Int(i64),
    /// 任意浮点宽化后的值。
    Float(f64),
}

/// 把宽化值窄化为具体类型的转换。
///
/// 只做无损转换：超出目标范围或种类不匹配时返回 `None`，从不截断。
pub trait Narrow: Sized {
    /// 执行窄化。
    fn narrow(wide: WideScalar) -> Option<Self>;
}

impl Narrow for bool {
    fn narrow(wide: WideScalar) -> Option<Self> {
        match wide {
            WideScalar::Bool(value) => Some(value),
            _ => None,
        }
    }
}

macro_rules! narrow_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Narrow for $ty {
                fn narrow(wide: WideScalar) -> Option<Self> {
                    match wide {
                        WideScalar::Int(value) => <$ty>::try_from(value).ok(),
                        _ => None,
                    }
                }
            }
        )*
    };
}

narrow_int!(i8, i16, i32, i64, isize);

impl Narrow for f32 {
    fn narrow(wide: WideScalar) -> Option<Self> {
        match wide {
            // 只接受能在 f32 中精确表示的值；NaN 按原样保留。
            WideScalar::Float(value) => {
                let narrowed = value as f32;
                (value.is_nan() || f64::from(narrowed) == value).then_some(narrowed)
            }
            _ => None,
        }
    }
}

impl Narrow for f64 {
    fn narrow(wide: WideScalar) -> Option<Self> {
        match wide {
            WideScalar::Float(value) => Some(value),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_width_table_matches_kind() {
        assert_eq!(ScalarKind::I8.parse_width(), ParseWidth { bits: 8, signed: true });
        assert_eq!(ScalarKind::I16.parse_width().bits, 16);
        assert_eq!(ScalarKind::I64.parse_width().bits, 64);
        assert_eq!(ScalarKind::F32.parse_width(), ParseWidth { bits: 32, signed: false });
        assert_eq!(ScalarKind::F64.parse_width().bits, 64);
    }

    #[test]
    fn isize_parses_with_32_bit_limits() {
        assert_eq!(ScalarKind::Isize.parse_width(), ScalarKind::I32.parse_width());
    }

    #[test]
    fn classes_cover_every_kind() {
        for kind in ScalarKind::ALL {
            let expected = match kind.name() {
                "bool" => ScalarClass::Bool,
                "f32" | "f64" => ScalarClass::Float,
                _ => ScalarClass::SignedInt,
            };
            assert_eq!(kind.class(), expected, "{kind}");
        }
    }

    #[test]
    fn narrowing_rejects_out_of_range_and_mismatched_values() {
        assert_eq!(i8::narrow(WideScalar::Int(127)), Some(127));
        assert_eq!(i8::narrow(WideScalar::Int(-128)), Some(-128));
        assert_eq!(i8::narrow(WideScalar::Int(128)), None);
        assert_eq!(i16::narrow(WideScalar::Int(i64::from(i16::MIN) - 1)), None);
        assert_eq!(i32::narrow(WideScalar::Float(1.0)), None);
        assert_eq!(bool::narrow(WideScalar::Int(1)), None);
        assert_eq!(f64::narrow(WideScalar::Bool(true)), None);
        assert_eq!(f32::narrow(WideScalar::Float(1e300)), None);
        assert_eq!(f32::narrow(WideScalar::Float(0.1_f64)), None);
    }

    #[test]
    fn float_narrowing_is_lossless_for_widened_f32() {
        let original = 0.1_f32;
        let wide = WideScalar::Float(f64::from(original));
        assert_eq!(f32::narrow(wide), Some(original));
        assert_eq!(f32::narrow(WideScalar::Float(f64::NEG_INFINITY)), Some(f32::NEG_INFINITY));
        assert!(f32::narrow(WideScalar::Float(f64::NAN)).is_some_and(f32::is_nan));
    }
}
