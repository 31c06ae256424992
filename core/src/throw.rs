//! Throw computation: trigger pull and aim state to a launch impulse.

use crate::aim::map_value;
use bowling_shared::config::BallControlConfig;
use bowling_shared::vec3::Vec3;

/// One ball launch, handed to the engine as an impulse. Not retained
/// after the impulse is applied.
#[derive(Debug, Clone, Copy)]
pub struct RollEvent {
    pub launch_vector: Vec3,
    pub speed: f64,
}

/// Map a trigger pull in [0, 1] to a launch speed.
pub fn launch_speed(trigger: f64, control: &BallControlConfig) -> f64 {
    map_value(trigger, 0.0, 1.0, control.min_speed, control.max_speed)
}

/// Build the launch impulse for the current aim. The lateral component
/// opposes the aim yaw, scaled by the configured sensitivity; the forward
/// component is the mapped speed.
pub fn roll_event(trigger: f64, aim_yaw: f64, control: &BallControlConfig) -> RollEvent {
    let speed = launch_speed(trigger, control);
    RollEvent {
        launch_vector: Vec3::new(-aim_yaw * control.lateral_impulse_factor, 0.0, speed),
        speed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control() -> BallControlConfig {
        BallControlConfig::default()
    }

    #[test]
    fn zero_trigger_gives_min_speed() {
        assert_eq!(launch_speed(0.0, &control()), 5.0);
    }

    #[test]
    fn full_trigger_gives_max_speed() {
        assert_eq!(launch_speed(1.0, &control()), 20.0);
    }

    #[test]
    fn half_trigger_gives_range_midpoint() {
        assert_eq!(launch_speed(0.5, &control()), 12.5);
    }

    #[test]
    fn straight_aim_has_no_lateral_component() {
        let roll = roll_event(1.0, 0.0, &control());
        assert_eq!(roll.launch_vector.x, 0.0);
        assert_eq!(roll.launch_vector.y, 0.0);
        assert_eq!(roll.launch_vector.z, 20.0);
    }

    #[test]
    fn lateral_component_opposes_yaw() {
        let roll = roll_event(0.0, 0.1, &control());
        assert_eq!(roll.launch_vector.x, -12.0);
        assert_eq!(roll.launch_vector.z, 5.0);

        let roll = roll_event(0.0, -0.1, &control());
        assert_eq!(roll.launch_vector.x, 12.0);
    }

    #[test]
    fn forward_component_equals_speed() {
        let roll = roll_event(0.75, 0.05, &control());
        assert_eq!(roll.launch_vector.z, roll.speed);
    }
}
