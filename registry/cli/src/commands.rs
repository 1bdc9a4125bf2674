//! Command execution against a registry client

use anyhow::{Context, Result};

use registry_core::{CallRequest, CallResponse, ContractCaller, ContractValue, DeviceRegistry};

use crate::Command;

/// Run one command and return the response envelope to print
pub async fn run<C: ContractCaller>(
    registry: &DeviceRegistry<C>,
    command: &Command,
) -> Result<CallResponse> {
    let response = match command {
        Command::Register {
            device_type,
            location,
        } => CallResponse::ok(registry.register_device(device_type, location).await?),
        Command::Get { id } => CallResponse::ok(registry.get_device(*id).await?),
        Command::SetStatus { id, status } => {
            CallResponse::ok(registry.update_device_status(*id, status).await?)
        }
        Command::Count => CallResponse::ok(registry.get_device_count().await?),
        Command::Call { function, args } => {
            let values = args
                .iter()
                .map(|a| parse_arg(a))
                .collect::<Result<Vec<_>>>()?;
            let request = CallRequest::new(function.as_str()).with_args(values);
            registry.call_raw(&request).await?
        }
    };
    Ok(response)
}

/// Parse one CLI argument as a JSON literal, falling back to a bare string
fn parse_arg(raw: &str) -> Result<ContractValue> {
    serde_json::from_str::<ContractValue>(raw).or_else(|e| {
        if looks_like_json(raw) {
            Err(e).with_context(|| format!("Invalid JSON argument: {raw}"))
        } else {
            Ok(ContractValue::from(raw))
        }
    })
}

fn looks_like_json(raw: &str) -> bool {
    matches!(raw.trim_start().chars().next(), Some('{' | '[' | '"'))
}
