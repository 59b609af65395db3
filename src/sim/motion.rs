//! Movement and playfield bounds

use super::state::{GameState, Player, Playfield};

/// Move the player from the held-direction flags and clamp to the playfield
pub fn move_player(player: &mut Player, playfield: &Playfield, left: bool, right: bool, dt: f32) {
    player.vel_x = 0.0;
    if right {
        player.vel_x += player.speed;
    }
    if left {
        player.vel_x -= player.speed;
    }

    player.pos.x += player.vel_x * dt;

    // Wall detection
    let max_x = (playfield.width - player.size.x).max(0.0);
    player.pos.x = player.pos.x.clamp(0.0, max_x);
}

/// Drop and spin rocks; remove those past the bottom edge
pub fn advance_rocks(state: &mut GameState, dt: f32) {
    let multiplier = state.difficulty.speed_multiplier;
    let bottom = state.playfield.height;

    for rock in &mut state.rocks {
        rock.pos.y += rock.base_speed * multiplier * dt;
        rock.rotation += rock.rotation_speed * dt;
    }
    state.rocks.retain(|rock| rock.pos.y <= bottom);
}

/// Drop stars; remove those past the bottom edge
pub fn advance_stars(state: &mut GameState, dt: f32) {
    let bottom = state.playfield.height;

    for star in &mut state.stars {
        star.pos.y += star.speed * dt;
    }
    state.stars.retain(|star| star.pos.y <= bottom);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::difficulty::Difficulty;
    use crate::sim::state::{Rock, Star};
    use proptest::prelude::*;

    #[test]
    fn test_player_clamped_at_left_wall() {
        let playfield = Playfield::default();
        let mut player = Player::new(&playfield);
        player.pos.x = 0.0;
        move_player(&mut player, &playfield, true, false, 1.0);
        assert_eq!(player.pos.x, 0.0);
    }

    #[test]
    fn test_player_clamped_at_right_wall() {
        let playfield = Playfield::default();
        let mut player = Player::new(&playfield);
        move_player(&mut player, &playfield, false, true, 10.0);
        assert_eq!(player.pos.x, playfield.width - PLAYER_WIDTH);
    }

    #[test]
    fn test_both_directions_cancel() {
        let playfield = Playfield::default();
        let mut player = Player::new(&playfield);
        let start = player.pos;
        move_player(&mut player, &playfield, true, true, 0.5);
        assert_eq!(player.vel_x, 0.0);
        assert_eq!(player.pos, start);
    }

    #[test]
    fn test_player_moves_at_speed() {
        let playfield = Playfield::default();
        let mut player = Player::new(&playfield);
        let start_x = player.pos.x;
        move_player(&mut player, &playfield, false, true, 0.1);
        assert!((player.pos.x - (start_x + PLAYER_SPEED * 0.1)).abs() < 1e-3);
        assert_eq!(player.pos.y, playfield.height - PLAYER_HEIGHT - PLAYER_BOTTOM_MARGIN);
    }

    #[test]
    fn test_rocks_fall_with_multiplier_and_spin() {
        let mut state = GameState::new(1, Playfield::default());
        state.difficulty = Difficulty::for_survival_time(20.0);
        state.rocks.push(Rock::new(100.0, 2.0));

        advance_rocks(&mut state, 0.5);

        let rock = &state.rocks[0];
        assert!((rock.pos.y - (-ROCK_HEIGHT + ROCK_BASE_SPEED * 1.2 * 0.5)).abs() < 1e-3);
        assert!((rock.rotation - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_offscreen_entities_removed() {
        let mut state = GameState::new(1, Playfield::default());
        let mut low = Rock::new(10.0, 0.0);
        low.pos.y = 599.0;
        let mut lower = Rock::new(50.0, 0.0);
        lower.pos.y = 599.5;
        state.rocks.push(low);
        state.rocks.push(lower);
        state.rocks.push(Rock::new(90.0, 0.0));

        let mut star = Star::new(10.0);
        star.pos.y = 599.0;
        state.stars.push(star);
        state.stars.push(Star::new(40.0));

        advance_rocks(&mut state, 0.1);
        advance_stars(&mut state, 0.1);

        assert_eq!(state.rocks.len(), 1);
        assert_eq!(state.rocks[0].pos.x, 90.0);
        assert_eq!(state.stars.len(), 1);
        assert_eq!(state.stars[0].pos.x, 40.0);
    }

    proptest! {
        #[test]
        fn player_stays_in_bounds(
            steps in prop::collection::vec((any::<bool>(), any::<bool>(), 0.0f32..5.0), 1..100)
        ) {
            let playfield = Playfield::default();
            let mut player = Player::new(&playfield);
            for (left, right, dt) in steps {
                move_player(&mut player, &playfield, left, right, dt);
                prop_assert!(player.pos.x >= 0.0);
                prop_assert!(player.pos.x <= playfield.width - player.size.x);
            }
        }
    }
}
