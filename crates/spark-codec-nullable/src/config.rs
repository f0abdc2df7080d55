//! 文本编解码配置。
//!
//! 配置通过 `serde` 派生，可从任意格式加载；缺省字段回落到默认值，
//! 默认配置与未配置时的行为完全一致。

use serde::{Deserialize, Serialize};

use crate::kind::{ParseWidth, ScalarKind};

/// `isize` 解码时采用的范围检查位宽。
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NativeIntWidth {
    /// 固定按 32 位检查，超出 `i32` 范围的文本无法解码为 `isize`。
    #[default]
    Bits32,
    /// 按平台 `isize::BITS` 检查。
    Platform,
}

/// [`crate::TextCodec`] 的配置。
///
/// ```
/// use spark_codec_nullable::{NativeIntWidth, TextCodecConfig};
///
/// let config = TextCodecConfig::default().with_native_int_width(NativeIntWidth::Platform);
/// assert_eq!(config.native_int_width, NativeIntWidth::Platform);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextCodecConfig {
    /// `isize` 的解析位宽策略。
    pub native_int_width: NativeIntWidth,
}

impl TextCodecConfig {
    /// 默认配置，可在 `const` 上下文使用。
    pub const DEFAULT: Self = Self {
        native_int_width: NativeIntWidth::Bits32,
    };

    /// 替换 `isize` 解析位宽策略。
    pub const fn with_native_int_width(mut self, width: NativeIntWidth) -> Self {
        self.native_int_width = width;
        self
    }

    /// 结合配置返回种类的解析位宽。
    pub const fn parse_width(&self, kind: ScalarKind) -> ParseWidth {
        match (kind, self.native_int_width) {
            (ScalarKind::Isize, NativeIntWidth::Platform) => ParseWidth {
                bits: isize::BITS,
                signed: true,
            },
            _ => kind.parse_width(),
        }
    }
}
