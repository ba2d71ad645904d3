use bevy::prelude::*;

use strider_common::{input::PlayerInput, markers::PlayerMarker};

// ============================================================================
// Input Systems
// ============================================================================

// Handle WASD movement, Shift sprint, Space jump and C crawl toggle
pub fn keyboard_input_system(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut player_query: Query<&mut PlayerInput, With<PlayerMarker>>,
) {
    let input = read_player_input(&keyboard);
    for mut player_input in &mut player_query {
        if input.crawl_toggle {
            debug!("crawl toggled");
        }
        *player_input = input;
    }
}

#[must_use]
pub fn read_player_input(keyboard: &ButtonInput<KeyCode>) -> PlayerInput {
    PlayerInput {
        forward: keyboard.pressed(KeyCode::KeyW),
        back: keyboard.pressed(KeyCode::KeyS),
        left: keyboard.pressed(KeyCode::KeyA),
        right: keyboard.pressed(KeyCode::KeyD),
        sprint: keyboard.pressed(KeyCode::ShiftLeft),
        jump: keyboard.just_pressed(KeyCode::Space),
        crawl_toggle: keyboard.just_pressed(KeyCode::KeyC),
    }
}
