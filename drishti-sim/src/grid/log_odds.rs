//! Quantized log-odds cell encoding.
//!
//! Cells store the log-odds that a cell is **free**, as fixed-point `i16`
//! with two decimal places (the same ×100 scheme the mapping grid uses):
//!
//! ```text
//! L(p) = round(100 · ln(p / (1 − p)))      p = P(free)
//! p(L) = 1 / (1 + exp(−L / 100))
//!
//!   L ≫ 0  → confidently free
//!   |L| ≤ 1 → unknown (no committed observation)
//!   L ≪ 0  → confidently occupied
//! ```
//!
//! Because `logit(1 − p) = −logit(p)`, an occupancy probability `q` is stored
//! as `-probability_to_log_odds(q)`.

/// Quantized log-odds value stored per cell.
pub type CellValue = i16;

/// Fixed-point scale (stored value = log-odds × 100).
pub const LOG_ODDS_SCALE: f32 = 100.0;

/// Value of a never-observed cell (P = 0.5).
pub const UNKNOWN_CELL: CellValue = 0;

/// Most confidently occupied representable value.
pub const CELL_MIN: CellValue = -i16::MAX;

/// Most confidently free representable value.
pub const CELL_MAX: CellValue = i16::MAX;

/// Convert a free-space probability to a cell value.
///
/// Monotonic non-decreasing over [0, 1]; probabilities at or beyond the
/// ends saturate to [`CELL_MIN`] / [`CELL_MAX`]. NaN maps to unknown.
#[inline]
pub fn probability_to_log_odds(p: f32) -> CellValue {
    if p.is_nan() {
        return UNKNOWN_CELL;
    }
    if p <= 0.0 {
        return CELL_MIN;
    }
    if p >= 1.0 {
        return CELL_MAX;
    }
    let l = (LOG_ODDS_SCALE * (p / (1.0 - p)).ln()).round();
    l.clamp(CELL_MIN as f32, CELL_MAX as f32) as CellValue
}

/// Convert a cell value back to a free-space probability.
#[inline]
pub fn log_odds_to_probability(value: CellValue) -> f32 {
    let l = value as f32 / LOG_ODDS_SCALE;
    1.0 / (1.0 + (-l).exp())
}

/// A cell with magnitude ≤ 1 carries no committed observation.
#[inline]
pub fn is_unknown(value: CellValue) -> bool {
    value.unsigned_abs() <= 1
}
