#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use spark_codec_nullable::{Nullable, TextScalar};

/// Fuzz 输入：任意字节按所选种类解码。
///
/// - **Why**：解码入口直接面对外部文本，需确保任意字节都只产生错误值而不会 panic；
/// - **What**：解码成功时，再编码并重新解码必须得到相同的存在性与文本。
#[derive(Debug, Arbitrary)]
struct DecodeCase {
    kind: u8,
    text: Vec<u8>,
}

fuzz_target!(|case: DecodeCase| {
    match case.kind % 8 {
        0 => check::<bool>(&case.text),
        1 => check::<i8>(&case.text),
        2 => check::<i16>(&case.text),
        3 => check::<i32>(&case.text),
        4 => check::<i64>(&case.text),
        5 => check::<isize>(&case.text),
        6 => check::<f32>(&case.text),
        _ => check::<f64>(&case.text),
    }
});

fn check<T: TextScalar + Default>(text: &[u8]) {
    let mut decoded = Nullable::<T>::null();
    if decoded.unmarshal_text(text).is_err() {
        return;
    }

    let encoded = decoded.marshal_text().expect("builtin kinds always encode");
    let mut again = Nullable::<T>::null();
    again
        .unmarshal_text(&encoded)
        .expect("canonical text must decode");
    assert_eq!(again.is_present(), decoded.is_present());
    assert_eq!(again.marshal_text().expect("re-encode"), encoded);
}
