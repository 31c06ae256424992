//! Deterministic stand-in for the physics collaborator.
//!
//! The demo binary and the integration tests need some answer to "which
//! pins does this launch hit" without a physics engine. This model drifts
//! the ball laterally in proportion to the impulse ratio and strikes the
//! pins whose rack position falls inside the ball's corridor, which widens
//! row by row. It makes no claim of physical accuracy and never feeds the
//! scoring path in a real deployment.

use bowling_shared::vec3::Vec3;

/// Lateral distance between adjacent pins in a row (world units)
const PIN_SPACING: f64 = 0.3;
/// Half-width of the strike corridor at the head pin
const CORRIDOR: f64 = 0.35;
/// Corridor widening per rack row
const ROW_WIDENING: f64 = 0.35;
/// Lateral drift per unit of impulse ratio over the lane length
const DRIFT_GAIN: f64 = 0.9;

/// Rack position of a pin: (lateral offset from lane center, row).
/// Row `r` holds `r + 1` pins; pin 0 is the head pin.
pub fn pin_position(pin: u8) -> (f64, usize) {
    let mut row = 0usize;
    let mut first_in_row = 0u8;
    while pin >= first_in_row + row as u8 + 1 {
        first_in_row += row as u8 + 1;
        row += 1;
    }
    let index_in_row = (pin - first_in_row) as f64;
    let offset = (index_in_row - row as f64 / 2.0) * PIN_SPACING;
    (offset, row)
}

/// Pins struck by a launch: the ball enters the rack at a lateral
/// position drifted from its start by the impulse ratio, and takes every
/// pin inside the (row-widened) corridor. Launches without forward
/// impulse strike nothing.
pub fn struck_pins(impulse: Vec3, ball_x: f64, pin_count: u8) -> Vec<u8> {
    if impulse.z <= 0.0 {
        return Vec::new();
    }
    let entry_x = ball_x + DRIFT_GAIN * (impulse.x / impulse.z);

    (0..pin_count)
        .filter(|&pin| {
            let (offset, row) = pin_position(pin);
            let corridor = CORRIDOR * (1.0 + ROW_WIDENING * row as f64);
            (offset - entry_x).abs() <= corridor
        })
        .collect()
}
