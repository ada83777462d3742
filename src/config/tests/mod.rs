//! Unit tests for config module
//!
//! Tests configuration types, defaults, validation and serialization.
//! No filesystem dependencies - all in-memory.

#![allow(clippy::panic, clippy::unwrap_used)]

use std::path::Path;

use serde_json::{Value, json};

use crate::{
    AiofarmError,
    config::{
        ConfigPaths, ConfigType, DEFAULT_ARDUINO_PORT, DEFAULT_OUTPUT_OFFSET,
        DEFAULT_OUTPUT_PORTS, EncodeType, FormatType, InputSerialConfigItem,
        OutputSerialConfigItem, PortBaseConfig, RootConfig, SerialConfig, ServerConfig, Validate,
        VisionConfig, default_server_root,
    },
};

fn server_document(outputs: Value) -> String {
    json!({
        "config_type": "server",
        "config": {
            "serial_config": {
                "inputs": [{"port": "/dev/ttyUSB0", "baudrate": 38400, "pin": 3, "camera_delay": 5}],
                "outputs": outputs
            }
        }
    })
    .to_string()
}

#[test]
fn input_pin_accepted_only_within_2_to_9() {
    for pin in 0..=u8::MAX {
        let result = InputSerialConfigItem::new(PortBaseConfig::default(), pin, 0);
        assert_eq!(result.is_ok(), (2..=9).contains(&pin), "pin {pin}");
    }
}

#[test]
fn output_pin_accepted_only_within_30_to_37() {
    for pin in 0..=u8::MAX {
        let result = OutputSerialConfigItem::new(PortBaseConfig::default(), 0, pin);
        assert_eq!(result.is_ok(), (30..=37).contains(&pin), "pin {pin}");
    }
}

#[test]
fn out_of_range_pin_names_field_and_range() {
    let err = OutputSerialConfigItem::new(PortBaseConfig::default(), 0, 40).unwrap_err();

    assert_eq!(err.field, "pin");
    assert!(err.reason.contains("40"));
    assert!(err.reason.contains("30..=37"));
}

#[test]
fn default_server_root_is_valid() {
    let root = default_server_root();

    assert_eq!(root.config_type(), ConfigType::Server);
    assert!(root.validate().is_ok());
    assert_eq!(RootConfig::default(), root);
}

#[test]
fn default_server_root_matches_production_wiring() {
    let root = default_server_root();
    let server = root.as_server().unwrap();

    let output_ports: Vec<&str> = server
        .serial_config
        .outputs
        .iter()
        .map(|output| output.port.port.as_str())
        .collect();
    assert_eq!(output_ports, DEFAULT_OUTPUT_PORTS);
    assert!(
        server
            .serial_config
            .outputs
            .iter()
            .all(|output| output.offset == DEFAULT_OUTPUT_OFFSET)
    );
    assert_eq!(server.arduino_config.port.port, DEFAULT_ARDUINO_PORT);
    assert_eq!(server.program_config.line_count, 2);
}

#[test]
fn record_defaults_are_valid() {
    assert!(ServerConfig::default().validate().is_ok());
    assert!(SerialConfig::default().validate().is_ok());
    assert_eq!(PortBaseConfig::default().port, "COM3");
    assert_eq!(PortBaseConfig::default().baudrate, 38400);
}

#[test]
fn serializes_documented_shape() {
    let value = serde_json::to_value(default_server_root()).unwrap();

    assert_eq!(value["config_type"], "server");
    let serial = &value["config"]["serial_config"];
    assert_eq!(serial["test_message_encode_type"], "ascii");
    assert_eq!(serial["test_message_format_type"], "STX/ETX");
    assert_eq!(serial["production_result_sender_module"], Value::Null);
    assert_eq!(serial["outputs"][0]["port"], "/dev/ttyUSB1");
    assert_eq!(serial["outputs"][0]["baudrate"], 38400);
    assert_eq!(serial["outputs"][0]["offset"], 23);
    assert_eq!(serial["outputs"][0]["pin"], 30);
    assert_eq!(value["config"]["arduino_config"]["port"], "/dev/ttyACM0");
    assert_eq!(value["config"]["arduino_config"]["is_upload_port_assigned"], true);
}

#[test]
fn pretty_json_uses_four_space_indent() {
    let bytes = default_server_root().to_pretty_json().unwrap();
    let text = String::from_utf8(bytes).unwrap();

    assert!(text.starts_with("{\n    \"config_type\": \"server\""));
    assert!(text.contains("\n        \"program_check\""));
    assert!(text.ends_with("}\n"));
}

#[test]
fn serialize_roundtrip() {
    let mut original = default_server_root();
    if let RootConfig::Server(server) = &mut original {
        server.serial_config.test_message_encode_type = EncodeType::Utf16;
        server.serial_config.test_message_format_type = FormatType::Crlf;
        server.serial_config.production_result_sender_module = Some("mqtt".to_string());
        server.serial_config.inputs[0].camera_delay = 120;
    }

    let bytes = original.to_pretty_json().unwrap();
    let parsed = RootConfig::from_json(std::str::from_utf8(&bytes).unwrap(), None).unwrap();

    assert_eq!(parsed, original);
}

#[test]
fn vision_without_payload_is_accepted() {
    let root = RootConfig::from_json(r#"{"config_type": "vision"}"#, None).unwrap();
    assert_eq!(root, RootConfig::Vision(VisionConfig::default()));

    let root = RootConfig::from_json(r#"{"config_type": "vision", "config": null}"#, None).unwrap();
    assert_eq!(root.config_type(), ConfigType::Vision);
}

#[test]
fn object_payload_is_coerced_to_role() {
    let root = RootConfig::from_json(r#"{"config_type": "vision", "config": {}}"#, None).unwrap();
    assert_eq!(root.config_type(), ConfigType::Vision);

    let root = RootConfig::from_json(r#"{"config_type": "server", "config": {}}"#, None).unwrap();
    assert_eq!(root, RootConfig::Server(ServerConfig::default()));
}

#[test]
fn server_without_payload_is_rejected() {
    let err = RootConfig::from_json(r#"{"config_type": "server"}"#, None).unwrap_err();

    match err {
        AiofarmError::Validation(e) => assert_eq!(e.field, "config"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn non_object_payload_is_rejected() {
    let err = RootConfig::from_json(r#"{"config_type": "server", "config": [1, 2]}"#, None)
        .unwrap_err();

    match err {
        AiofarmError::Validation(e) => {
            assert_eq!(e.field, "config");
            assert!(e.reason.contains("an array"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn wrong_field_type_is_validation_error() {
    let document = r#"{"config_type": "server", "config": {"program_check": "yes"}}"#;

    match RootConfig::from_json(document, None).unwrap_err() {
        AiofarmError::Validation(e) => assert_eq!(e.field, "config.program_check"),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn type_error_inside_list_reports_path() {
    let document = server_document(json!([
        {"port": "/dev/ttyUSB1", "offset": 23, "pin": 30},
        {"port": "/dev/ttyUSB2", "offset": "late", "pin": 31}
    ]));

    match RootConfig::from_json(&document, None).unwrap_err() {
        AiofarmError::Validation(e) => {
            assert_eq!(e.field, "config.serial_config.outputs[1].offset");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn negative_integers_are_accepted() {
    let document = json!({
        "config_type": "server",
        "config": {
            "program_config": {"line_count": -1},
            "serial_config": {
                "inputs": [{"pin": 2, "camera_delay": -10}],
                "outputs": [{"offset": -5, "pin": 30}],
                "signal_count_per_pulse": -2
            }
        }
    })
    .to_string();

    let root = RootConfig::from_json(&document, None).unwrap();
    let server = root.as_server().unwrap();

    assert_eq!(server.program_config.line_count, -1);
    assert_eq!(server.serial_config.inputs[0].camera_delay, -10);
    assert_eq!(server.serial_config.outputs[0].offset, -5);
    assert_eq!(server.serial_config.signal_count_per_pulse, -2);
}

#[test]
fn out_of_range_output_pin_reports_path() {
    let document = server_document(json!([
        {"port": "/dev/ttyUSB1", "baudrate": 38400, "offset": 23, "pin": 30},
        {"port": "/dev/ttyUSB2", "baudrate": 38400, "offset": 23, "pin": 40}
    ]));

    match RootConfig::from_json(&document, None).unwrap_err() {
        AiofarmError::Validation(e) => {
            assert_eq!(e.field, "config.serial_config.outputs[1].pin");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn serde_deserialize_enforces_validation() {
    let document = server_document(json!([{"port": "COM4", "offset": 0, "pin": 8}]));

    let result: Result<RootConfig, _> = serde_json::from_str(&document);
    assert!(result.is_err());
}

#[test]
fn missing_item_fields_take_defaults() {
    let document = server_document(json!([{"pin": 31}]));
    let root = RootConfig::from_json(&document, None).unwrap();
    let output = &root.as_server().unwrap().serial_config.outputs[0];

    assert_eq!(output.port, PortBaseConfig::default());
    assert_eq!(output.offset, 0);
    assert_eq!(output.pin, 31);
}

#[test]
fn syntax_errors_are_malformed_data() {
    let err = RootConfig::from_json("{\"config_type\": ", Some(Path::new("cfg.json"))).unwrap_err();

    match err {
        AiofarmError::MalformedData { location, .. } => assert_eq!(location, "cfg.json"),
        other => panic!("expected malformed data, got {other:?}"),
    }
}

#[test]
fn unknown_config_type_is_malformed_data() {
    assert!(matches!(
        RootConfig::from_json(r#"{"config_type": "camera"}"#, None),
        Err(AiofarmError::MalformedData { .. })
    ));
    assert!(matches!(
        RootConfig::from_json(r#"{"config": {}}"#, None),
        Err(AiofarmError::MalformedData { .. })
    ));
}

#[test]
fn unencodable_test_message_fails_only_when_sent() {
    let mut serial = SerialConfig {
        test_message_to_sorter: "테스트".to_string(),
        ..SerialConfig::default()
    };
    assert!(serial.validate().is_ok());

    let err = serial.encoded_test_message().unwrap_err();
    assert_eq!(err.field, "test_message_to_sorter");

    serial.test_message_encode_type = EncodeType::Utf8;
    assert!(serial.encoded_test_message().is_ok());
}

#[test]
fn encodes_test_message_in_each_encoding() {
    assert_eq!(EncodeType::Ascii.encode("OK").unwrap(), b"OK");
    assert_eq!(EncodeType::Utf8.encode("é").unwrap(), vec![0xC3, 0xA9]);
    assert_eq!(EncodeType::Iso8859_1.encode("é").unwrap(), vec![0xE9]);
    assert_eq!(EncodeType::Utf16.encode("A").unwrap(), vec![0xFF, 0xFE, 0x41, 0x00]);
    assert_eq!(
        EncodeType::Utf32.encode("A").unwrap(),
        vec![0xFF, 0xFE, 0x00, 0x00, 0x41, 0x00, 0x00, 0x00]
    );
    assert_eq!(EncodeType::Iso8859_1.encode("€"), Err('€'));
}

#[test]
fn frames_test_message() {
    let serial = SerialConfig {
        test_message_to_sorter: "T1".to_string(),
        ..SerialConfig::default()
    };
    assert_eq!(serial.encoded_test_message().unwrap(), b"\x02T1\x03");

    assert_eq!(FormatType::Crlf.frame(b"T1"), b"T1\r\n");
    assert_eq!(FormatType::Lf.frame(b"T1"), b"T1\n");
    assert_eq!(FormatType::Cr.frame(b"T1"), b"T1\r");
}

#[test]
fn enum_names_match_file_format() {
    for encode in [
        EncodeType::Ascii,
        EncodeType::Utf8,
        EncodeType::Utf16,
        EncodeType::Iso8859_1,
        EncodeType::Utf32,
    ] {
        assert_eq!(serde_json::to_value(encode).unwrap(), encode.as_str());
    }

    for format in [FormatType::StxEtx, FormatType::Crlf, FormatType::Lf, FormatType::Cr] {
        assert_eq!(serde_json::to_value(format).unwrap(), format.as_str());
    }
}

#[test]
fn document_schema_describes_discriminator() {
    let schema = serde_json::to_string(&RootConfig::document_schema()).unwrap();

    assert!(schema.contains("config_type"));
    assert!(schema.contains("serial_config"));
}

#[test]
fn config_paths_layout() {
    let paths = ConfigPaths::new("/home/operator", "/opt/aiofarm");

    assert_eq!(
        paths.config_file(),
        Path::new("/home/operator/aiofarm_config.json")
    );
    assert_eq!(
        paths.backup_dir(),
        Path::new("/home/operator/aiofarm_config_backup")
    );
    assert_eq!(
        paths.tracked_files(),
        vec![
            Path::new("/home/operator/aiofarm_config.json").to_path_buf(),
            Path::new("/opt/aiofarm/pyproject.toml").to_path_buf(),
            Path::new("/opt/aiofarm/poetry.lock").to_path_buf(),
        ]
    );
}
