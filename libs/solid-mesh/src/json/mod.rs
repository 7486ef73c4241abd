//! # JSON Emitter
//!
//! Serializes finalized buffers into a single-line JSON object:
//!
//! ```text
//! {"position":[...],"normal":[...],"indices":[...]}
//! ```
//!
//! Keys always appear in this order. Numbers carry at most
//! [`JSON_FRACTION_DIGITS`] fractional digits with trailing zeros trimmed,
//! and always use `.` as the decimal point.

use config::constants::JSON_FRACTION_DIGITS;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

use crate::buffers::ExportBuffers;
use crate::error::{ExportError, ExportResult};

/// Formats one number for the mesh JSON.
///
/// Returns `None` for NaN and infinities, which JSON cannot represent.
///
/// # Example
///
/// ```rust
/// use solid_mesh::json::format_number;
///
/// assert_eq!(format_number(0.5).as_deref(), Some("0.5"));
/// assert_eq!(format_number(1.0).as_deref(), Some("1"));
/// assert_eq!(format_number(-0.004).as_deref(), Some("0"));
/// assert_eq!(format_number(0.126).as_deref(), Some("0.13"));
/// assert_eq!(format_number(f64::NAN), None);
/// ```
pub fn format_number(value: f64) -> Option<String> {
    if !value.is_finite() {
        return None;
    }
    let text = format!("{:.*}", JSON_FRACTION_DIGITS, value);
    let trimmed = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text.as_str()
    };
    // Rounded negatives can collapse to "-0"
    Some(match trimmed {
        "-0" => "0".to_string(),
        other => other.to_string(),
    })
}

/// Formats a buffer as a JSON array literal.
fn format_array(buffer: &'static str, values: &[f64]) -> ExportResult<Box<RawValue>> {
    let mut text = String::with_capacity(values.len() * 6 + 2);
    text.push('[');
    for (index, value) in values.iter().enumerate() {
        if index > 0 {
            text.push(',');
        }
        let number =
            format_number(*value).ok_or(ExportError::NonFiniteValue { buffer, index })?;
        text.push_str(&number);
    }
    text.push(']');
    Ok(RawValue::from_string(text)?)
}

/// Wire shape of the mesh object. Field order is the key order.
#[derive(Serialize)]
struct MeshJson<'a> {
    position: Box<RawValue>,
    normal: Box<RawValue>,
    indices: &'a [u32],
}

/// Serializes one solid's buffers.
///
/// # Example
///
/// ```rust,ignore
/// let json = solid_mesh::json::to_json(&buffers)?;
/// assert!(json.starts_with(r#"{"position":["#));
/// ```
pub fn to_json(buffers: &ExportBuffers) -> ExportResult<String> {
    let mesh = MeshJson {
        position: format_array("position", buffers.positions())?,
        normal: format_array("normal", buffers.normals())?,
        indices: buffers.indices(),
    };
    Ok(serde_json::to_string(&mesh)?)
}

/// A mesh object read back from JSON.
///
/// Values carry the emitter's rounding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MeshDocument {
    pub position: Vec<f64>,
    pub normal: Vec<f64>,
    pub indices: Vec<u32>,
}

impl MeshDocument {
    /// Parses a mesh object.
    pub fn from_json(text: &str) -> ExportResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Checks the buffer length invariants.
    pub fn is_consistent(&self) -> bool {
        self.indices.len() % 3 == 0
            && self.position.len() == self.normal.len()
            && self.position.len() == 3 * self.indices.len()
    }
}
