//! # error 模块说明
//!
//! ## 角色定位（Why）
//! - 集中定义文本编解码的失败语义：类型不受支持、布尔字面量非法、数值解析失败，以及自定义转换透传的错误；
//! - 所有失败都以显式返回值交给直接调用方，本模块不做日志、重试或纠正。
//!
//! ## 设计要求（What）
//! - 错误类型派生 `thiserror::Error`，在 `std` 关闭时依旧基于 `core::error::Error` 可用；
//! - 每个变体都对应一个稳定错误码（见 [`codes`]），便于上层聚合。

use alloc::{boxed::Box, string::String};
use core::error::Error as CoreErrorTrait;
use core::num::{ParseFloatError, ParseIntError};
use core::str::Utf8Error;

use thiserror::Error;

use crate::kind::ScalarKind;

/// 自定义文本转换能力返回的不透明错误。
pub type BoxError = Box<dyn CoreErrorTrait + Send + Sync + 'static>;

/// 文本编解码错误码常量。
///
/// 命名遵循 `<领域>.<原因>` 约定。
pub mod codes {
    /// 标量类型既无内建规则，也未提供自定义文本转换。
    pub const UNSUPPORTED_TYPE: &str = "text.unsupported_type";
    /// 布尔文本不是 `true`/`false`。
    pub const INVALID_BOOL: &str = "text.invalid_bool";
    /// 数值文本无法解析或超出目标位宽。
    pub const PARSE: &str = "text.parse";
    /// 自定义文本转换返回的错误。
    pub const CUSTOM: &str = "text.custom";
}

/// 文本编解码错误域。
///
/// # 教案式说明
/// - **契约 (What)**：
///   - `UnsupportedType` 属于编程错误（实例化了错误的类型），不可重试；
///   - `InvalidBoolLiteral` 与 `Parse` 保留原始文本，便于排障；
///   - `Custom` 原样透传自定义转换的错误，`Display` 与 `source` 均不做包装。
/// - **风险 (Trade-offs)**：`Custom` 持有装箱错误，因此本类型不实现 `Clone`/`PartialEq`；
///   测试中请使用 [`TextCodecError::code`] 或模式匹配断言。
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextCodecError {
    /// 目标类型没有文本表示。
    #[error("type `{type_name}` cannot be converted to or from text")]
    UnsupportedType {
        /// 具体类型名，来自 `core::any::type_name`。
        type_name: &'static str,
    },

    /// 布尔文本只接受大小写精确匹配的 `true`/`false`。
    #[error("invalid boolean literal `{text}`, expected `true` or `false`")]
    InvalidBoolLiteral {
        /// 触发失败的原始文本（非 UTF-8 字节按有损方式展示）。
        text: String,
    },

    /// 数值文本解析失败或超出目标位宽。
    #[error("cannot parse `{text}` as {kind}: {source}")]
    Parse {
        /// 目标标量种类。
        kind: ScalarKind,
        /// 原始文本。
        text: String,
        /// 底层解析失败原因。
        source: ParseFailure,
    },

    /// 自定义文本转换返回的错误，原样透传。
    #[error(transparent)]
    Custom(BoxError),
}

impl TextCodecError {
    /// 返回稳定错误码。
    pub fn code(&self) -> &'static str {
        match self {
            TextCodecError::UnsupportedType { .. } => codes::UNSUPPORTED_TYPE,
            TextCodecError::InvalidBoolLiteral { .. } => codes::INVALID_BOOL,
            TextCodecError::Parse { .. } => codes::PARSE,
            TextCodecError::Custom(_) => codes::CUSTOM,
        }
    }

    /// 若错误来自自定义转换，返回其原始错误对象，便于 `downcast_ref`。
    pub fn as_custom(&self) -> Option<&(dyn CoreErrorTrait + Send + Sync + 'static)> {
        match self {
            TextCodecError::Custom(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }

    pub(crate) fn unsupported<T>() -> Self {
        TextCodecError::UnsupportedType {
            type_name: core::any::type_name::<T>(),
        }
    }

    pub(crate) fn invalid_bool(text: &[u8]) -> Self {
        TextCodecError::InvalidBoolLiteral {
            text: String::from_utf8_lossy(text).into_owned(),
        }
    }

    pub(crate) fn parse(kind: ScalarKind, text: &[u8], source: ParseFailure) -> Self {
        TextCodecError::Parse {
            kind,
            text: String::from_utf8_lossy(text).into_owned(),
            source,
        }
    }
}

/// 数值解析的底层失败原因。
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseFailure {
    /// 文本不是合法的十进制整数，或超出 64 位范围。
    #[error(transparent)]
    Int(#[from] ParseIntError),

    /// 整数合法，但超出目标位宽。
    #[error("value out of range for {bits}-bit integer")]
    IntOutOfRange {
        /// 目标位宽。
        bits: u32,
    },

    /// 文本不是合法的十进制浮点数。
    #[error(transparent)]
    Float(#[from] ParseFloatError),

    /// 有限字面量在目标位宽下溢出为无穷大。
    #[error("value out of range for {bits}-bit float")]
    FloatOutOfRange {
        /// 目标位宽。
        bits: u32,
    },

    /// 输入字节不是合法的 UTF-8。
    #[error(transparent)]
    Utf8(#[from] Utf8Error),
}
