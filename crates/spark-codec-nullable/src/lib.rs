#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

//! `spark-codec-nullable` 为可空标量提供文本编解码。
//!
//! # 教案背景（Why）
//! - 上层序列化框架常把字段以文本传输，需要一个能区分“无值”与具体标量的统一编解码；
//! - 标量种类在编译期由 [`TextScalar`] 绑定，编解码时按封闭枚举分派，不做运行时类型探测。
//!
//! # 使用概览（How）
//! ```
//! use spark_codec_nullable::Nullable;
//!
//! let port = Nullable::new(42_i32);
//! assert_eq!(port.marshal_text().unwrap(), b"42");
//!
//! let mut decoded = Nullable::<i32>::null();
//! decoded.unmarshal_text(b"42").unwrap();
//! assert_eq!(decoded, port);
//!
//! decoded.unmarshal_text(b"null").unwrap();
//! assert!(!decoded.is_present());
//! ```
//!
//! # 合约说明（What）
//! - 编码：无值输出空文本；布尔输出 `true`/`false`；整数宽化到 `i64` 后输出十进制；
//!   浮点宽化到 `f64` 后输出最短可往返的定点文本；
//! - 解码：`""` 与 `"null"` 表示无值；整数与浮点按种类位宽做范围检查；
//! - 实现 [`TextConvert`] 的类型完全接管两个方向，错误原样透传；
//! - 其余类型返回 [`TextCodecError::UnsupportedType`]。
//!
//! # 风险提示（Trade-offs）
//! - `isize` 默认按 32 位做解码范围检查，64 位平台上超出 `i32` 的值无法经文本得到；
//!   可通过 [`NativeIntWidth::Platform`] 调整。

extern crate alloc;

mod binding;
mod codec;
pub mod config;
pub mod error;
pub mod kind;
mod nullable;
pub mod serde_text;

pub use crate::binding::{
    BuiltinScalar, CustomText, Presence, TextConvert, TextScalar, TextStrategy,
};
pub use crate::codec::{
    ABSENCE_LITERALS, TextCodec, format_wide, is_absence_literal, parse_float, parse_integer,
    parse_wide,
};
pub use crate::config::{NativeIntWidth, TextCodecConfig};
pub use crate::error::{ParseFailure, TextCodecError};
pub use crate::kind::{ParseWidth, ScalarKind, WideScalar};
pub use crate::nullable::Nullable;
