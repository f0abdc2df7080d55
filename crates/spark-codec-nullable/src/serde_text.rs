//! `serde` 桥接：以文本形式传输 [`Nullable`]。
//!
//! 配合 `#[serde(with = "spark_codec_nullable::serde_text")]` 使用：
//! - 序列化输出编码后的字符串，无值时为空字符串；
//! - 反序列化接受字符串、`null` 或 unit，字符串经 [`TextCodec::DEFAULT`] 解码。
//!
//! ```
//! use serde::{Deserialize, Serialize};
//! use spark_codec_nullable::Nullable;
//!
//! #[derive(Serialize, Deserialize)]
//! struct Endpoint {
//!     #[serde(with = "spark_codec_nullable::serde_text")]
//!     port: Nullable<i32>,
//! }
//!
//! let endpoint: Endpoint = serde_json::from_str(r#"{"port":"8080"}"#).unwrap();
//! assert_eq!(endpoint.port, Nullable::new(8080));
//! assert_eq!(serde_json::to_string(&endpoint).unwrap(), r#"{"port":"8080"}"#);
//! ```

use core::fmt;
use core::marker::PhantomData;

use serde::de::{self, Deserializer, Visitor};
use serde::ser::{Error as _, Serializer};

use crate::binding::TextScalar;
use crate::codec::TextCodec;
use crate::nullable::Nullable;

/// 序列化为文本字符串。
pub fn serialize<T, S>(value: &Nullable<T>, serializer: S) -> Result<S::Ok, S::Error>
where
    T: TextScalar,
    S: Serializer,
{
    let bytes = TextCodec::DEFAULT.encode(value).map_err(S::Error::custom)?;
    let text = core::str::from_utf8(&bytes).map_err(S::Error::custom)?;
    serializer.serialize_str(text)
}

/// 从文本字符串、`null` 或 unit 反序列化。
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Nullable<T>, D::Error>
where
    T: TextScalar + Default,
    D: Deserializer<'de>,
{
    deserializer.deserialize_option(NullableTextVisitor(PhantomData))
}

struct NullableTextVisitor<T>(PhantomData<T>);

impl<T: TextScalar + Default> NullableTextVisitor<T> {
    fn decode<E: de::Error>(text: &[u8]) -> Result<Nullable<T>, E> {
        let mut decoded = Nullable::null();
        TextCodec::DEFAULT
            .decode(text, &mut decoded)
            .map_err(E::custom)?;
        Ok(decoded)
    }
}

impl<'de, T: TextScalar + Default> Visitor<'de> for NullableTextVisitor<T> {
    type Value = Nullable<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a nullable scalar in text form")
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Nullable::null())
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(Nullable::null())
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_str(self)
    }

    fn visit_str<E: de::Error>(self, text: &str) -> Result<Self::Value, E> {
        Self::decode(text.as_bytes())
    }

    fn visit_bytes<E: de::Error>(self, text: &[u8]) -> Result<Self::Value, E> {
        Self::decode(text)
    }
}
