//! 类型到文本策略的编译期绑定，以及自定义文本转换扩展点。
//!
//! # 教案背景（Why）
//! - 编解码需要知道 `Nullable<T>` 中 `T` 的种类；这里不做运行时类型探测，而是让每个类型通过
//!   [`TextScalar::text_strategy`] 一次性声明自己的策略；
//! - 自定义类型实现 [`TextConvert`] 后以 [`TextStrategy::custom`] 接入，编解码时优先于内建规则。
//!
//! # 使用概览（How）
//! ```
//! use spark_codec_nullable::{Presence, TextConvert, TextScalar, TextStrategy};
//!
//! #[derive(Default)]
//! struct Celsius(i32);
//!
//! impl TextConvert for Celsius {
//!     type Error = core::num::ParseIntError;
//!
//!     fn export_text(&self) -> Result<Vec<u8>, Self::Error> {
//!         Ok(format!("{}C", self.0).into_bytes())
//!     }
//!
//!     fn import_text(&mut self, text: &[u8]) -> Result<Presence, Self::Error> {
//!         let text = String::from_utf8_lossy(text);
//!         self.0 = text.trim_end_matches('C').parse()?;
//!         Ok(Presence::Present)
//!     }
//! }
//!
//! impl TextScalar for Celsius {
//!     fn text_strategy() -> TextStrategy<Self> {
//!         TextStrategy::custom()
//!     }
//! }
//! ```

use alloc::{boxed::Box, string::String, vec::Vec};

use crate::error::BoxError;
use crate::kind::{Narrow, ScalarKind, WideScalar};

/// 自定义文本导入后的存在性。
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    /// 导入得到了一个值。
    Present,
    /// 文本表示“无值”。
    Absent,
}

impl Presence {
    /// 是否存在值。
    pub const fn is_present(self) -> bool {
        matches!(self, Presence::Present)
    }
}

/// 自定义文本转换能力。
///
/// 实现后完全接管两个方向的编解码：编码结果原样输出，错误原样透传；
/// 解码时连空文本与 `"null"` 的解释也由实现自行负责。
pub trait TextConvert {
    /// 转换失败时的错误类型。
    type Error: core::error::Error + Send + Sync + 'static;

    /// 导出为文本字节。
    fn export_text(&self) -> Result<Vec<u8>, Self::Error>;

    /// 从文本字节原地导入，并报告导入后是否存在值。
    fn import_text(&mut self, text: &[u8]) -> Result<Presence, Self::Error>;
}

/// 类型在文本编解码中的策略。
pub enum TextStrategy<T> {
    /// 内建规则：按种类分派。
    Builtin(BuiltinScalar<T>),
    /// 自定义文本转换。
    Custom(CustomText<T>),
    /// 无任何文本表示，编解码时返回 `UnsupportedType`。
    Unsupported,
}

impl<T: TextConvert> TextStrategy<T> {
    /// 以 [`TextConvert`] 实现构造自定义策略。
    pub fn custom() -> Self {
        TextStrategy::Custom(CustomText {
            export: export_boxed::<T>,
            import: import_boxed::<T>,
        })
    }
}

impl<T: Narrow> TextStrategy<T> {
    /// 以内建种类构造策略，`widen` 负责把值宽化为 [`WideScalar`]。
    pub fn builtin(kind: ScalarKind, widen: fn(&T) -> WideScalar) -> Self {
        TextStrategy::Builtin(BuiltinScalar {
            kind,
            widen,
            narrow: T::narrow,
        })
    }
}

/// 内建种类的宽化/窄化函数对。
pub struct BuiltinScalar<T> {
    kind: ScalarKind,
    widen: fn(&T) -> WideScalar,
    narrow: fn(WideScalar) -> Option<T>,
}

impl<T> BuiltinScalar<T> {
    /// 绑定的种类。
    pub fn kind(&self) -> ScalarKind {
        self.kind
    }

    /// 宽化为中间值。
    pub fn widen(&self, value: &T) -> WideScalar {
        (self.widen)(value)
    }

    /// 窄化回具体类型；超出范围返回 `None`。
    pub fn narrow(&self, wide: WideScalar) -> Option<T> {
        (self.narrow)(wide)
    }
}

/// 擦除了错误类型的自定义转换函数对。
pub struct CustomText<T> {
    export: fn(&T) -> Result<Vec<u8>, BoxError>,
    import: fn(&mut T, &[u8]) -> Result<Presence, BoxError>,
}

impl<T> CustomText<T> {
    /// 调用自定义导出。
    pub fn export(&self, value: &T) -> Result<Vec<u8>, BoxError> {
        (self.export)(value)
    }

    /// 调用自定义导入。
    pub fn import(&self, slot: &mut T, text: &[u8]) -> Result<Presence, BoxError> {
        (self.import)(slot, text)
    }
}

fn export_boxed<T: TextConvert>(value: &T) -> Result<Vec<u8>, BoxError> {
    value.export_text().map_err(|err| Box::new(err) as BoxError)
}

fn import_boxed<T: TextConvert>(slot: &mut T, text: &[u8]) -> Result<Presence, BoxError> {
    slot.import_text(text).map_err(|err| Box::new(err) as BoxError)
}

/// 可放入 [`crate::Nullable`] 并参与文本编解码的类型。
pub trait TextScalar: Sized {
    /// 返回该类型的文本策略。每次调用必须返回同一种策略。
    fn text_strategy() -> TextStrategy<Self>;
}

impl TextScalar for bool {
    fn text_strategy() -> TextStrategy<Self> {
        TextStrategy::builtin(ScalarKind::Bool, |value| WideScalar::Bool(*value))
    }
}

macro_rules! builtin_scalar {
    ($($ty:ty => $kind:ident, $wide:ident, $widen:expr;)*) => {
        $(
            impl TextScalar for $ty {
                fn text_strategy() -> TextStrategy<Self> {
                    TextStrategy::builtin(ScalarKind::$kind, |value| WideScalar::$wide($widen(*value)))
                }
            }
        )*
    };
}

builtin_scalar! {
    i8 => I8, Int, i64::from;
    i16 => I16, Int, i64::from;
    i32 => I32, Int, i64::from;
    i64 => I64, Int, core::convert::identity;
    // `isize` 最宽 64 位，转换无损。
    isize => Isize, Int, |value: isize| value as i64;
    f32 => F32, Float, f64::from;
    f64 => F64, Float, core::convert::identity;
}

macro_rules! unsupported_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextScalar for $ty {
                fn text_strategy() -> TextStrategy<Self> {
                    TextStrategy::Unsupported
                }
            }
        )*
    };
}

unsupported_scalar!(u8, u16, u32, u64, u128, usize, i128, char, (), String);

impl<T> TextScalar for Vec<T> {
    fn text_strategy() -> TextStrategy<Self> {
        TextStrategy::Unsupported
    }
}

impl<T, const N: usize> TextScalar for [T; N] {
    fn text_strategy() -> TextStrategy<Self> {
        TextStrategy::Unsupported
    }
}
