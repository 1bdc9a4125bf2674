//! Integration tests for the device registry call surface
//!
//! Tests cover:
//! - The four registry calls against the raw mock caller
//! - The same calls through the typed `DeviceRegistry` facade
//! - A mock seeded from a TOML config file
//! - Sharing one mock between concurrent tasks

use std::io::Write;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;
use tokio_test::assert_ok;

use registry_core::{
    load_config_from_path, CallRequest, ContractCaller, ContractError, ContractValue,
    DeviceInfo, DeviceRegistry, MockContractCaller,
};

const OWNER: &str = "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM";

fn sensor_record() -> ContractValue {
    ContractValue::record([
        ("owner", OWNER),
        ("device-type", "temperature-sensor"),
        ("location", "city-center"),
        ("status", "active"),
    ])
}

// =============================================================================
// Raw contract calls
// =============================================================================

#[tokio::test]
async fn test_register_device() {
    let mock = MockContractCaller::new();
    mock.mock_resolved_value_once(1u64);

    let request = CallRequest::new("register-device")
        .arg("temperature-sensor")
        .arg("city-center");
    let result = mock.call(&request).await.unwrap();

    assert_eq!(result.result.value, ContractValue::UInt(1));
}

#[tokio::test]
async fn test_get_device_information() {
    let mock = MockContractCaller::new();
    mock.mock_resolved_value_once(sensor_record());

    let result = mock.call(&CallRequest::new("get-device").arg(1u64)).await.unwrap();

    assert_eq!(result.result.value, sensor_record());
}

#[tokio::test]
async fn test_update_device_status() {
    let mock = MockContractCaller::new();
    mock.mock_resolved_value_once(true);

    let request = CallRequest::new("update-device-status")
        .arg(1u64)
        .arg("inactive");
    let result = mock.call(&request).await.unwrap();

    assert_eq!(result.result.value, ContractValue::Bool(true));
}

#[tokio::test]
async fn test_get_device_count() {
    let mock = MockContractCaller::new();
    mock.mock_resolved_value_once(5u64);

    let result = mock.call(&CallRequest::new("get-device-count")).await.unwrap();

    assert_eq!(result.result.value, ContractValue::UInt(5));
}

#[tokio::test]
async fn test_response_json_matches_envelope() {
    let mock = MockContractCaller::new();
    mock.mock_resolved_value_once(sensor_record());

    let result = mock.call(&CallRequest::new("get-device").arg(1u64)).await.unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "result": {
                "value": {
                    "owner": OWNER,
                    "device-type": "temperature-sensor",
                    "location": "city-center",
                    "status": "active",
                }
            }
        })
    );
}

// =============================================================================
// Typed facade
// =============================================================================

#[tokio::test]
async fn test_registry_lifecycle() {
    let mock = MockContractCaller::new();
    let registry = DeviceRegistry::new(mock.clone());

    mock.mock_resolved_value_once(1u64)
        .mock_resolved_value_once(sensor_record())
        .mock_resolved_value_once(true)
        .mock_resolved_value_once(5u64);

    let id = assert_ok!(registry.register_device("temperature-sensor", "city-center").await);
    assert_eq!(id, 1);

    let info = assert_ok!(registry.get_device(id).await);
    assert_eq!(
        info,
        DeviceInfo {
            owner: OWNER.into(),
            device_type: "temperature-sensor".into(),
            location: "city-center".into(),
            status: "active".into(),
        }
    );

    assert!(assert_ok!(registry.update_device_status(id, "inactive").await));
    assert_eq!(assert_ok!(registry.get_device_count().await), 5);

    let functions: Vec<_> = mock.calls().into_iter().map(|c| c.function).collect();
    assert_eq!(
        functions,
        vec![
            "register-device",
            "get-device",
            "update-device-status",
            "get-device-count",
        ]
    );
    assert_eq!(mock.pending(), 0);
}

#[tokio::test]
async fn test_registry_surfaces_missing_response() {
    let registry = DeviceRegistry::new(MockContractCaller::new());

    let err = registry.get_device(42).await.unwrap_err();

    assert_eq!(
        err,
        ContractError::NoResponseConfigured {
            function: "get-device".into()
        }
    );
}

// =============================================================================
// Config-seeded mock
// =============================================================================

#[tokio::test]
async fn test_mock_from_config_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
[contract]
id = "{OWNER}.iot-device-registration"

[[fixtures]]
function = "register-device"
value = 7

[[fixtures]]
function = "get-device-count"
value = 7
once = false
"#
    )
    .unwrap();

    let config = load_config_from_path(file.path()).unwrap();
    let mock = MockContractCaller::from_fixtures(&config.fixtures).unwrap();
    let registry = DeviceRegistry::with_contract(mock, config.contract.id.clone());

    assert_eq!(registry.contract().address, OWNER);
    assert_eq!(registry.register_device("gps-tracker", "depot").await.unwrap(), 7);
    assert_eq!(registry.get_device_count().await.unwrap(), 7);
    assert_eq!(registry.get_device_count().await.unwrap(), 7);
}

// =============================================================================
// Shared mock
// =============================================================================

#[tokio::test]
async fn test_shared_mock_across_tasks() {
    let mock = MockContractCaller::new();
    mock.when_called("get-device-count", 5u64);
    let registry = Arc::new(DeviceRegistry::new(mock.clone()));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let registry = Arc::clone(&registry);
            tokio::spawn(async move { registry.get_device_count().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), 5);
    }
    assert_eq!(mock.call_count(), 8);
}
