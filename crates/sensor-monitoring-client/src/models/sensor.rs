// crates/sensor-monitoring-client/src/models/sensor.rs
// ============================================================================
// Module: Sensor Models
// Description: Sensor edit body and sensor record.
// Purpose: Type the node sensor endpoint.
// Dependencies: serde, serde_json
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use super::null_default;

/// Body for editing a sensor on a node.
///
/// Sensor attributes vary by sensor type; anything beyond name and
/// description travels in `attributes` and is flattened into the body.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EditSensorRequest {
    /// New display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Type-specific attributes.
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

/// Sensor record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Sensor {
    /// Sensor identifier.
    #[serde(deserialize_with = "null_default")]
    pub id: String,
    /// Display name.
    #[serde(deserialize_with = "null_default")]
    pub name: String,
    /// Owning node.
    pub node_id: Option<String>,
    /// Fields not modeled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
