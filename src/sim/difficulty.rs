//! Difficulty ramp
//!
//! Maps cumulative survival time to rock speed and spawn rate. Brackets are
//! checked from the highest threshold down, each threshold exclusive.

/// Derived difficulty parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Difficulty {
    /// Multiplier applied to the rock base speed
    pub speed_multiplier: f32,
    /// Rocks per second
    pub spawn_rate: u32,
}

impl Default for Difficulty {
    fn default() -> Self {
        Self {
            speed_multiplier: 1.0,
            spawn_rate: 1,
        }
    }
}

impl Difficulty {
    /// Difficulty for a given survival time (seconds)
    pub fn for_survival_time(t: f32) -> Self {
        if t > 60.0 {
            let over = t - 60.0;
            Self {
                // 1.8 -> 2.0 over the next 30 seconds
                speed_multiplier: 1.8 + (over.min(30.0) / 30.0) * 0.2,
                // One more rock per second every 15 seconds
                spawn_rate: 5 + (over / 15.0).floor() as u32,
            }
        } else if t > 45.0 {
            Self {
                speed_multiplier: 1.6,
                spawn_rate: 4,
            }
        } else if t > 30.0 {
            Self {
                speed_multiplier: 1.4,
                spawn_rate: 3,
            }
        } else if t > 15.0 {
            Self {
                speed_multiplier: 1.2,
                spawn_rate: 2,
            }
        } else {
            Self::default()
        }
    }

    /// Seconds between rock spawns
    pub fn spawn_interval(&self) -> f32 {
        1.0 / self.spawn_rate as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_brackets_upper_bound_inclusive() {
        assert_eq!(Difficulty::for_survival_time(0.0), Difficulty::default());
        assert_eq!(Difficulty::for_survival_time(15.0).spawn_rate, 1);
        assert_eq!(Difficulty::for_survival_time(15.01).spawn_rate, 2);
        assert_eq!(Difficulty::for_survival_time(30.0).speed_multiplier, 1.2);
        assert_eq!(Difficulty::for_survival_time(45.0).speed_multiplier, 1.4);
        assert_eq!(Difficulty::for_survival_time(60.0).spawn_rate, 4);
        assert_eq!(Difficulty::for_survival_time(60.0).speed_multiplier, 1.6);
    }

    #[test]
    fn test_jump_from_ten_to_twenty() {
        assert_eq!(Difficulty::for_survival_time(10.0), Difficulty::default());
        let d = Difficulty::for_survival_time(20.0);
        assert_eq!(d.speed_multiplier, 1.2);
        assert_eq!(d.spawn_rate, 2);
    }

    #[test]
    fn test_late_game_ramp() {
        let d = Difficulty::for_survival_time(75.0);
        assert!((d.speed_multiplier - 1.9).abs() < 1e-5);
        assert_eq!(d.spawn_rate, 6);

        let d = Difficulty::for_survival_time(90.0);
        assert!((d.speed_multiplier - 2.0).abs() < 1e-5);
        assert_eq!(d.spawn_rate, 7);

        // Speed caps at 2.0, spawn rate keeps climbing
        let d = Difficulty::for_survival_time(150.0);
        assert!((d.speed_multiplier - 2.0).abs() < 1e-5);
        assert_eq!(d.spawn_rate, 11);
    }

    #[test]
    fn test_spawn_interval() {
        assert_eq!(Difficulty::default().spawn_interval(), 1.0);
        assert_eq!(Difficulty::for_survival_time(50.0).spawn_interval(), 0.25);
    }

    proptest! {
        #[test]
        fn difficulty_is_deterministic(times in prop::collection::vec(0.0f32..500.0, 1..50)) {
            let first: Vec<_> = times.iter().map(|&t| Difficulty::for_survival_time(t)).collect();
            let second: Vec<_> = times.iter().map(|&t| Difficulty::for_survival_time(t)).collect();
            prop_assert_eq!(first, second);
        }

        #[test]
        fn difficulty_never_eases(a in 0.0f32..500.0, b in 0.0f32..500.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            let easy = Difficulty::for_survival_time(lo);
            let hard = Difficulty::for_survival_time(hi);
            prop_assert!(hard.speed_multiplier >= easy.speed_multiplier);
            prop_assert!(hard.spawn_rate >= easy.spawn_rate);
        }
    }
}
