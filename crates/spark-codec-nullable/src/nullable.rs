use alloc::vec::Vec;
use core::str::FromStr;

use crate::binding::TextScalar;
use crate::codec::TextCodec;
use crate::error::TextCodecError;

/// 可空标量容器：存在标志加一个固定种类的值槽。
///
/// # 契约说明（What）
/// - `present == false` 时值槽内容无意义，可能是旧值或零值，访问器不会暴露它；
/// - 相等比较忽略无值时的旧值：两个无值容器相等，有值与无值永不相等；
/// - 标量种类由 `T` 在编译期决定，不会改变。
#[derive(Clone, Copy, Debug, Default)]
pub struct Nullable<T> {
    present: bool,
    value: T,
}

impl<T> Nullable<T> {
    /// 构造有值容器。
    pub const fn new(value: T) -> Self {
        Self {
            present: true,
            value,
        }
    }

    /// 构造无值容器。
    pub fn null() -> Self
    where
        T: Default,
    {
        Self::default()
    }

    /// 是否存在值。
    pub const fn is_present(&self) -> bool {
        self.present
    }

    /// 读取值；无值时返回 `None`。
    pub fn get(&self) -> Option<&T> {
        self.present.then_some(&self.value)
    }

    /// 可变读取值；无值时返回 `None`。
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.present {
            Some(&mut self.value)
        } else {
            None
        }
    }

    /// 写入值并标记为存在。
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.present = true;
    }

    /// 标记为无值，保留值槽中的旧内容。
    pub fn clear(&mut self) {
        self.present = false;
    }

    /// 取出值并把容器置为无值。
    pub fn take(&mut self) -> Option<T>
    where
        T: Default,
    {
        let present = core::mem::replace(&mut self.present, false);
        let value = core::mem::take(&mut self.value);
        present.then_some(value)
    }

    /// 转换为 `Option<T>`。
    pub fn into_option(self) -> Option<T> {
        self.present.then_some(self.value)
    }

    /// 借用为 `Option<&T>`，等价于 [`Nullable::get`]。
    pub fn as_option(&self) -> Option<&T> {
        self.get()
    }

    pub(crate) fn slots_mut(&mut self) -> (&mut bool, &mut T) {
        (&mut self.present, &mut self.value)
    }
}

impl<T: TextScalar> Nullable<T> {
    /// 以默认编解码器编码为文本字节。
    pub fn marshal_text(&self) -> Result<Vec<u8>, TextCodecError> {
        TextCodec::DEFAULT.encode(self)
    }

    /// 以默认编解码器从文本字节解码。
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), TextCodecError> {
        TextCodec::DEFAULT.decode(text, self)
    }
}

impl<T: TextScalar + Default> FromStr for Nullable<T> {
    type Err = TextCodecError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut parsed = Self::null();
        parsed.unmarshal_text(text.as_bytes())?;
        Ok(parsed)
    }
}

impl<T: PartialEq> PartialEq for Nullable<T> {
    fn eq(&self, other: &Self) -> bool {
        self.get() == other.get()
    }
}

impl<T: Eq> Eq for Nullable<T> {}

impl<T: Default> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::new(value),
            None => Self::null(),
        }
    }
}

impl<T> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.into_option()
    }
}
