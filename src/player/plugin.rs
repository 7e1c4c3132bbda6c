//! Player plugin - keyboard sampling for the simulation.

use bevy::prelude::*;

use super::components::*;
use crate::core::GameState;

/// Player plugin - turns keyboard state into [`PlayerInput`].
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerInput>().add_systems(
            Update,
            sample_input.run_if(in_state(GameState::InGame)),
        );
    }
}

/// WASD to walk, J to attack.
fn sample_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<PlayerInput>) {
    input.hold(
        keyboard.pressed(KeyCode::KeyW),
        keyboard.pressed(KeyCode::KeyD),
        keyboard.pressed(KeyCode::KeyS),
        keyboard.pressed(KeyCode::KeyA),
    );
    if keyboard.just_pressed(KeyCode::KeyJ) {
        input.press_attack();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_press_is_seen_by_one_tick_only() {
        let mut input = PlayerInput::default();
        input.hold(false, true, false, false);
        input.press_attack();
        let first = input.take();
        assert!(first.attack);
        assert!(first.right);
        let second = input.take();
        assert!(!second.attack);
        assert!(second.right);
    }
}
