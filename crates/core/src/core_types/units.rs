//! Semantic unit types for type-safe hydraulic quantity handling
//!
//! This module provides newtype wrappers for the physical quantities the
//! planner works in, to prevent accidental mixing of incompatible units
//! (e.g., a weekly depth in inches with an application rate in inches/hour,
//! or a pressure with a rate).
//!
//! # Design Philosophy
//! - All quantities use f64; schedule outputs are rounded at well-defined
//!   points, so intermediate math keeps full precision
//! - Implements common traits (Add, Sub, Mul, Div, Ord, Display, etc.)
//! - Division between related types yields the plain ratio (e.g.
//!   `Inches / InchesPerHour` is a span in hours)
//! - Serde support for serialization
//! - Total ordering via Ord trait (NaN handled as greater than all values)
//! - Private inner fields with validated constructors
//!
//! # Usage
//! ```
//! use hydrozone_core::core_types::units::{Inches, InchesPerHour};
//!
//! let need = Inches::new(1.2);
//! let rate = InchesPerHour::new(0.6);
//! let hours = need / rate;
//! assert!((hours - 2.0).abs() < 1e-9);
//!
//! // Use standard min/max from Ord trait
//! let a = Inches::new(0.5);
//! let b = Inches::new(1.5);
//! assert_eq!(a.max(b), Inches::new(1.5));
//! ```

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Deref, DerefMut, Div, Mul, Sub};

/// Compare f64 values with total ordering using Rust's built-in `total_cmp`
#[inline]
fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// DEPTH (inches of water over the irrigated area)
// ============================================================================

/// Water depth in inches
///
/// Weekly evapotranspiration, rainfall, and net need are all depths.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Inches(f64);

impl Eq for Inches {}

impl PartialOrd for Inches {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Inches {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Inches {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Inches {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Inches {
    /// Zero depth
    pub const ZERO: Inches = Inches(0.0);

    /// Create a new depth. Asserts value >= 0 (a depth cannot be negative).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "Inches::new: depth must be non-negative");
        Inches(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0.
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Inches(value)
    }
}

impl Add for Inches {
    type Output = Inches;
    #[inline]
    fn add(self, rhs: Inches) -> Inches {
        Inches(self.0 + rhs.0)
    }
}

impl Sub for Inches {
    type Output = Inches;
    /// Saturating at zero: a depth deficit never goes negative
    #[inline]
    fn sub(self, rhs: Inches) -> Inches {
        Inches((self.0 - rhs.0).max(0.0))
    }
}

impl Mul<f64> for Inches {
    type Output = Inches;
    #[inline]
    fn mul(self, rhs: f64) -> Inches {
        Inches(self.0 * rhs)
    }
}

impl Div<InchesPerHour> for Inches {
    type Output = f64;
    /// Depth divided by an application rate is a span in hours
    #[inline]
    fn div(self, rhs: InchesPerHour) -> f64 {
        self.0 / rhs.0
    }
}

impl fmt::Display for Inches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in", self.0)
    }
}

// ============================================================================
// APPLICATION / INTAKE RATES (inches of water per hour)
// ============================================================================

/// Water application or soil intake rate in inches per hour
///
/// Nozzle precipitation rates and soil infiltration rates share this unit;
/// comparing them is exactly the runoff-risk check.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct InchesPerHour(f64);

impl Eq for InchesPerHour {}

impl PartialOrd for InchesPerHour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for InchesPerHour {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for InchesPerHour {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for InchesPerHour {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl InchesPerHour {
    /// Zero rate (a nozzle that delivers nothing)
    pub const ZERO: InchesPerHour = InchesPerHour(0.0);

    /// Create a new rate. Asserts value >= 0.
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value >= 0.0, "InchesPerHour::new: rate must be non-negative");
        InchesPerHour(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value >= 0.
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        InchesPerHour(value)
    }
}

impl Mul<f64> for InchesPerHour {
    type Output = InchesPerHour;
    /// Scaling a rate by a dimensionless factor (pressure multiplier,
    /// distribution efficiency) keeps the unit
    #[inline]
    fn mul(self, rhs: f64) -> InchesPerHour {
        InchesPerHour(self.0 * rhs)
    }
}

impl Div for InchesPerHour {
    type Output = f64;
    /// Rate over rate is the plain ratio (infiltration / precipitation)
    #[inline]
    fn div(self, rhs: InchesPerHour) -> f64 {
        self.0 / rhs.0
    }
}

impl fmt::Display for InchesPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in/hr", self.0)
    }
}

// ============================================================================
// PRESSURE (pounds per square inch at the nozzle)
// ============================================================================

/// Operating pressure in PSI
///
/// Flow through a fixed orifice varies with the square root of pressure,
/// which is why the calculator adjusts precipitation rate by
/// `sqrt(actual / optimal)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Psi(f64);

impl Eq for Psi {}

impl PartialOrd for Psi {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Psi {
    fn cmp(&self, other: &Self) -> Ordering {
        f64_total_cmp(self.0, other.0)
    }
}

impl Deref for Psi {
    type Target = f64;
    #[inline]
    fn deref(&self) -> &f64 {
        &self.0
    }
}

impl DerefMut for Psi {
    #[inline]
    fn deref_mut(&mut self) -> &mut f64 {
        &mut self.0
    }
}

impl Psi {
    /// Create a new pressure. Asserts value > 0 (gauge pressure at an
    /// operating nozzle is strictly positive).
    #[inline]
    #[must_use]
    #[track_caller]
    pub const fn new(value: f64) -> Self {
        assert!(value > 0.0, "Psi::new: pressure must be positive");
        Psi(value)
    }

    /// Create without validation.
    /// # Safety
    /// Caller must ensure value > 0.
    #[inline]
    #[must_use]
    pub const unsafe fn new_unchecked(value: f64) -> Self {
        Psi(value)
    }
}

impl Div for Psi {
    type Output = f64;
    /// Pressure over pressure is the plain ratio (actual / optimal)
    #[inline]
    fn div(self, rhs: Psi) -> f64 {
        self.0 / rhs.0
    }
}

impl fmt::Display for Psi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} psi", self.0)
    }
}
