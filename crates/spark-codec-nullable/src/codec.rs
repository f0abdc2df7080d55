use alloc::{string::ToString, vec::Vec};

use crate::binding::{BuiltinScalar, TextScalar, TextStrategy};
use crate::config::TextCodecConfig;
use crate::error::{ParseFailure, TextCodecError};
use crate::kind::{ParseWidth, ScalarClass, ScalarKind, WideScalar};
use crate::nullable::Nullable;

/// 解码时表示“无值”的文本集合，大小写敏感、精确匹配。
pub const ABSENCE_LITERALS: [&[u8]; 2] = [b"", b"null"];

/// 判断文本是否属于无值字面量。
pub fn is_absence_literal(text: &[u8]) -> bool {
    ABSENCE_LITERALS.iter().any(|literal| *literal == text)
}

const TRUE_LITERAL: &[u8] = b"true";
const FALSE_LITERAL: &[u8] = b"false";

/// `Nullable<T>` 的文本编解码器。
///
/// # 行为概览（How）
/// - `encode`：无值输出空文本；自定义类型委托 [`crate::TextConvert`]；内建种类先宽化到
///   `i64`/`f64` 再格式化；其余类型返回 `UnsupportedType`。
/// - `decode`：自定义类型直接委托；否则先匹配 [`ABSENCE_LITERALS`]，再按种类与位宽解析，
///   最后窄化回具体类型。
///
/// # 契约说明（What）
/// - 编解码器无内部可变状态，每次调用只读写传入的那一个容器；
/// - 解码失败时不修改容器，但调用方不应依赖这一点推断先前状态；
/// - 同一容器上的并发读写需由调用方自行同步。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextCodec {
    config: TextCodecConfig,
}

impl TextCodec {
    /// 使用默认配置的编解码器。
    pub const DEFAULT: Self = Self::new(TextCodecConfig::DEFAULT);

    /// 按给定配置构建。
    pub const fn new(config: TextCodecConfig) -> Self {
        Self { config }
    }

    /// 当前配置。
    pub const fn config(&self) -> &TextCodecConfig {
        &self.config
    }

    /// 把容器编码为文本字节。
    pub fn encode<T: TextScalar>(&self, source: &Nullable<T>) -> Result<Vec<u8>, TextCodecError> {
        let Some(value) = source.get() else {
            return Ok(Vec::new());
        };

        match T::text_strategy() {
            TextStrategy::Custom(custom) => {
                tracing::trace!(
                    type_name = core::any::type_name::<T>(),
                    "encoding nullable via custom text conversion"
                );
                custom.export(value).map_err(TextCodecError::Custom)
            }
            TextStrategy::Builtin(builtin) => {
                tracing::trace!(kind = %builtin.kind(), "encoding nullable scalar");
                Ok(format_wide(builtin.widen(value)))
            }
            TextStrategy::Unsupported => Err(TextCodecError::unsupported::<T>()),
        }
    }

    /// 从文本字节解码并原地更新容器。
    pub fn decode<T: TextScalar>(
        &self,
        text: &[u8],
        target: &mut Nullable<T>,
    ) -> Result<(), TextCodecError> {
        match T::text_strategy() {
            TextStrategy::Custom(custom) => {
                tracing::trace!(
                    type_name = core::any::type_name::<T>(),
                    "decoding nullable via custom text conversion"
                );
                let (present, slot) = target.slots_mut();
                let presence = custom.import(slot, text).map_err(TextCodecError::Custom)?;
                *present = presence.is_present();
                Ok(())
            }
            _ if is_absence_literal(text) => {
                tracing::trace!(len = text.len(), "absence literal decoded");
                target.clear();
                Ok(())
            }
            TextStrategy::Builtin(builtin) => {
                tracing::trace!(kind = %builtin.kind(), len = text.len(), "decoding nullable scalar");
                let value = self.decode_builtin(&builtin, text)?;
                target.set(value);
                Ok(())
            }
            TextStrategy::Unsupported => Err(TextCodecError::unsupported::<T>()),
        }
    }

    fn decode_builtin<T>(&self, builtin: &BuiltinScalar<T>, text: &[u8]) -> Result<T, TextCodecError> {
        let kind = builtin.kind();
        let width = self.config.parse_width(kind);
        let wide = parse_wide(kind, width, text)?;
        builtin.narrow(wide).ok_or_else(|| {
            let failure = match kind.class() {
                ScalarClass::Float => ParseFailure::FloatOutOfRange { bits: width.bits },
                _ => ParseFailure::IntOutOfRange { bits: width.bits },
            };
            TextCodecError::parse(kind, text, failure)
        })
    }
}

/// 按种类与位宽把文本解析为宽化值。
pub fn parse_wide(kind: ScalarKind, width: ParseWidth, text: &[u8]) -> Result<WideScalar, TextCodecError> {
    match kind.class() {
        ScalarClass::Bool => match text {
            TRUE_LITERAL => Ok(WideScalar::Bool(true)),
            FALSE_LITERAL => Ok(WideScalar::Bool(false)),
            _ => Err(TextCodecError::invalid_bool(text)),
        },
        ScalarClass::SignedInt => as_str(text)
            .and_then(|digits| parse_integer(digits, width))
            .map(WideScalar::Int)
            .map_err(|failure| TextCodecError::parse(kind, text, failure)),
        ScalarClass::Float => as_str(text)
            .and_then(|digits| parse_float(digits, width.bits))
            .map(WideScalar::Float)
            .map_err(|failure| TextCodecError::parse(kind, text, failure)),
    }
}

fn as_str(text: &[u8]) -> Result<&str, ParseFailure> {
    Ok(core::str::from_utf8(text)?)
}

/// 十进制整数解析，范围由 `width` 的位宽与符号共同决定。
///
/// 无符号位宽的上界受 `i64` 宽化表示所限，64 位无符号只能取到 `i64::MAX`。
pub fn parse_integer(text: &str, width: ParseWidth) -> Result<i64, ParseFailure> {
    let value: i64 = text.parse()?;
    let bits = width.bits.clamp(1, 64);
    let (min, max) = if width.signed {
        let shift = 64 - bits;
        (i64::MIN >> shift, i64::MAX >> shift)
    } else if bits >= 63 {
        (0, i64::MAX)
    } else {
        (0, (1_i64 << bits) - 1)
    };
    if value < min || value > max {
        return Err(ParseFailure::IntOutOfRange { bits: width.bits });
    }
    Ok(value)
}

/// 十进制浮点解析，按 `bits`（32 或 64）取整。
///
/// 有限字面量溢出为无穷大时视为超出范围；`inf`/`infinity`/`nan` 字面量照常接受。
pub fn parse_float(text: &str, bits: u32) -> Result<f64, ParseFailure> {
    let value = if bits <= 32 {
        f64::from(text.parse::<f32>()?)
    } else {
        text.parse::<f64>()?
    };
    if value.is_infinite() && !names_infinity(text) {
        return Err(ParseFailure::FloatOutOfRange { bits });
    }
    Ok(value)
}

fn names_infinity(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

/// 宽化值的规范文本形式。
pub fn format_wide(wide: WideScalar) -> Vec<u8> {
    let text = match wide {
        WideScalar::Bool(true) => return TRUE_LITERAL.to_vec(),
        WideScalar::Bool(false) => return FALSE_LITERAL.to_vec(),
        WideScalar::Int(value) => value.to_string(),
        WideScalar::Float(value) => format_float(value),
    };
    text.into_bytes()
}

// `Display` 对 f64 输出最短可往返的定点形式，从不使用指数记法。
fn format_float(value: f64) -> alloc::string::String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let signed = if value.is_sign_positive() { "+Inf" } else { "-Inf" };
        signed.to_string()
    } else {
        value.to_string()
    }
}
