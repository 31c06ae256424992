//! Collision monitor: turns physics collision-end notifications into
//! structured outcomes for the game state machine.

/// A physics body involved in a collision-end event, as reported by the
/// engine layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyRef {
    Ball,
    Pin(u8),
    Floor,
    Wall,
}

/// Structured outcome of one collision-end event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// The ball touched a pin
    PinStruck(u8),
    /// The ball touched the floor or a wall outside the lane
    BallOffLane,
    /// Not a ball collision; nothing to bookkeep
    Ignored,
}

/// Classify a collision-end body pair. Pair order is not significant.
pub fn classify(a: BodyRef, b: BodyRef) -> CollisionOutcome {
    match (a, b) {
        (BodyRef::Ball, BodyRef::Pin(id)) | (BodyRef::Pin(id), BodyRef::Ball) => {
            CollisionOutcome::PinStruck(id)
        }
        (BodyRef::Ball, BodyRef::Floor | BodyRef::Wall)
        | (BodyRef::Floor | BodyRef::Wall, BodyRef::Ball) => CollisionOutcome::BallOffLane,
        _ => CollisionOutcome::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_pin_is_a_strike_in_either_order() {
        assert_eq!(
            classify(BodyRef::Ball, BodyRef::Pin(4)),
            CollisionOutcome::PinStruck(4)
        );
        assert_eq!(
            classify(BodyRef::Pin(4), BodyRef::Ball),
            CollisionOutcome::PinStruck(4)
        );
    }

    #[test]
    fn ball_floor_and_wall_leave_the_lane() {
        assert_eq!(
            classify(BodyRef::Ball, BodyRef::Floor),
            CollisionOutcome::BallOffLane
        );
        assert_eq!(
            classify(BodyRef::Wall, BodyRef::Ball),
            CollisionOutcome::BallOffLane
        );
    }

    #[test]
    fn non_ball_pairs_are_ignored() {
        assert_eq!(
            classify(BodyRef::Pin(1), BodyRef::Pin(2)),
            CollisionOutcome::Ignored
        );
        assert_eq!(
            classify(BodyRef::Pin(1), BodyRef::Floor),
            CollisionOutcome::Ignored
        );
        assert_eq!(
            classify(BodyRef::Wall, BodyRef::Floor),
            CollisionOutcome::Ignored
        );
    }
}
