// 📐 Shape Area Calculator - Tagged union dispatch
// The discriminant picks the formula; field presence is never consulted

use crate::error::{Result, UtilError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::f64::consts::PI;
use tracing::warn;

/// Canonical discriminant field
pub const KIND_FIELD: &str = "kind";

/// Discriminant field used by older shape records
pub const LEGACY_KIND_FIELD: &str = "shape";

// ============================================================================
// SHAPE VARIANTS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Shape {
    /// Radius is expected positive but not checked
    Circle { radius: f64 },

    Rectangle { width: f64, height: f64 },
}

#[derive(Deserialize)]
struct CircleFields {
    radius: f64,
}

#[derive(Deserialize)]
struct RectangleFields {
    width: f64,
    height: f64,
}

impl Shape {
    pub fn circle(radius: f64) -> Self {
        Shape::Circle { radius }
    }

    pub fn rectangle(width: f64, height: f64) -> Self {
        Shape::Rectangle { width, height }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Circle { .. } => "circle",
            Shape::Rectangle { .. } => "rectangle",
        }
    }

    /// Read a shape from a dynamic record.
    ///
    /// The tag is taken from `kind`, falling back to `shape`. Only after the
    /// tag is matched are the variant's own fields read.
    pub fn from_value(value: &Value) -> Result<Self> {
        let record = value
            .as_object()
            .ok_or_else(|| UtilError::NotARecord(value.to_string()))?;

        let tag = record
            .get(KIND_FIELD)
            .or_else(|| record.get(LEGACY_KIND_FIELD))
            .and_then(Value::as_str)
            .ok_or(UtilError::MissingDiscriminant)?;

        match tag {
            "circle" => {
                let fields: CircleFields = serde_json::from_value(value.clone())?;
                Ok(Shape::Circle { radius: fields.radius })
            }
            "rectangle" => {
                let fields: RectangleFields = serde_json::from_value(value.clone())?;
                Ok(Shape::Rectangle {
                    width: fields.width,
                    height: fields.height,
                })
            }
            other => {
                warn!(tag = other, "Unrecognized shape variant");
                Err(UtilError::UnrecognizedVariant { tag: other.to_string() })
            }
        }
    }
}

// ============================================================================
// AREA
// ============================================================================

fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Circle: π·r² rounded to 2 decimal places. Rectangle: width·height, unrounded.
pub fn area(shape: &Shape) -> f64 {
    match shape {
        Shape::Circle { radius } => round_to_cents(PI * radius * radius),
        Shape::Rectangle { width, height } => width * height,
    }
}

/// Area of a dynamic shape record; unknown tags are an error, never a guess.
pub fn area_from_value(value: &Value) -> Result<f64> {
    Shape::from_value(value).map(|shape| area(&shape))
}

// ============================================================================
// TESTS
// ============================================================================
