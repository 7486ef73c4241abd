//! # Configuration Constants
//!
//! Constants shared by the export pipeline.
//!
//! ## Categories
//!
//! - **Units**: Source length unit to output length unit conversion
//! - **Normalization**: Target extent of the unit-cube normalization
//! - **Output**: JSON number formatting

// =============================================================================
// UNIT CONSTANTS
// =============================================================================

/// Millimeters per foot.
///
/// The geometry kernel reports coordinates in decimal feet. Every position
/// is converted to millimeters before normalization so the emitted mesh is
/// independent of the host's display units.
///
/// # Example
///
/// ```rust
/// use config::constants::FEET_TO_MILLIMETERS;
///
/// let ten_feet_mm = 10.0 * FEET_TO_MILLIMETERS;
/// assert!((ten_feet_mm - 3048.0).abs() < 1e-9);
/// ```
pub const FEET_TO_MILLIMETERS: f64 = 304.8;

// =============================================================================
// NORMALIZATION CONSTANTS
// =============================================================================

/// Length the largest bounding-box axis is scaled to.
///
/// Positions are centered on the bounding-box midpoint, so an extent of 2
/// maps every coordinate into `[-1, 1]`.
///
/// # Example
///
/// ```rust
/// use config::constants::NORMALIZED_EXTENT;
///
/// let max_extent_mm = 3048.0;
/// let scale = NORMALIZED_EXTENT / max_extent_mm;
/// assert!((max_extent_mm * 0.5 * scale - 1.0).abs() < 1e-12);
/// ```
pub const NORMALIZED_EXTENT: f64 = 2.0;

/// Minimum number of bounding-box axes that must have a non-zero extent.
///
/// A box that spans a single axis (or none) describes a line or a point and
/// cannot enclose a face.
pub const MIN_SPANNED_AXES: usize = 2;

// =============================================================================
// OUTPUT CONSTANTS
// =============================================================================

/// Maximum number of fractional digits written for each JSON number.
///
/// Trailing zeros are trimmed, so `0.50` is written as `0.5` and `1.00`
/// as `1`.
///
/// # Example
///
/// ```rust
/// use config::constants::JSON_FRACTION_DIGITS;
///
/// let text = format!("{:.*}", JSON_FRACTION_DIGITS, 0.126);
/// assert_eq!(text, "0.13");
/// ```
pub const JSON_FRACTION_DIGITS: usize = 2;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default normal policy: keep curved surfaces faceted (flat normals).
pub const DEFAULT_RETAIN_CURVED_SURFACE_FACETS: bool = true;
