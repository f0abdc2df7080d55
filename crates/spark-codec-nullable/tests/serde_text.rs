//! `serde_text` 桥接测试：字段以文本形式经 JSON 传输。

use serde::{Deserialize, Serialize};
use spark_codec_nullable::Nullable;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Listener {
    #[serde(with = "spark_codec_nullable::serde_text")]
    port: Nullable<i32>,
    #[serde(with = "spark_codec_nullable::serde_text")]
    tls: Nullable<bool>,
    #[serde(with = "spark_codec_nullable::serde_text")]
    weight: Nullable<f64>,
}

#[test]
fn present_fields_serialize_as_text() {
    let listener = Listener {
        port: Nullable::new(8080),
        tls: Nullable::new(true),
        weight: Nullable::new(0.25),
    };
    let json = serde_json::to_string(&listener).unwrap();
    assert_eq!(json, r#"{"port":"8080","tls":"true","weight":"0.25"}"#);
    assert_eq!(serde_json::from_str::<Listener>(&json).unwrap(), listener);
}

#[test]
fn absent_fields_serialize_as_empty_text() {
    let listener = Listener {
        port: Nullable::null(),
        tls: Nullable::null(),
        weight: Nullable::null(),
    };
    let json = serde_json::to_string(&listener).unwrap();
    assert_eq!(json, r#"{"port":"","tls":"","weight":""}"#);
    assert_eq!(serde_json::from_str::<Listener>(&json).unwrap(), listener);
}

#[test]
fn json_null_and_null_text_both_mean_absent() {
    let listener: Listener =
        serde_json::from_str(r#"{"port":null,"tls":"null","weight":"1.5"}"#).unwrap();
    assert!(!listener.port.is_present());
    assert!(!listener.tls.is_present());
    assert_eq!(listener.weight, Nullable::new(1.5));
}

#[test]
fn codec_errors_surface_as_serde_errors() {
    let err = serde_json::from_str::<Listener>(r#"{"port":"99999999999","tls":"","weight":""}"#)
        .unwrap_err();
    assert!(err.to_string().contains("99999999999"), "{err}");

    let err = serde_json::from_str::<Listener>(r#"{"port":"","tls":"yes","weight":""}"#)
        .unwrap_err();
    assert!(err.to_string().contains("invalid boolean literal"), "{err}");
}
