//! UI plugin - intro and ending screens.

use bevy::prelude::*;

use super::hud;
use crate::core::GameState;

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        // Setup HUD systems
        hud::setup_hud_systems(app);

        app
            // Title screen
            .add_systems(OnEnter(GameState::Intro), setup_intro)
            .add_systems(Update, intro_input.run_if(in_state(GameState::Intro)))
            .add_systems(OnExit(GameState::Intro), cleanup::<IntroUi>)

            // Endings
            .add_systems(OnEnter(GameState::Won), setup_victory)
            .add_systems(OnEnter(GameState::GameOver), setup_game_over)
            .add_systems(
                Update,
                quit_input.run_if(in_state(GameState::Won).or(in_state(GameState::GameOver))),
            );
    }
}

/// Marker for title screen entities.
#[derive(Component)]
struct IntroUi;

/// Marker for either ending screen.
#[derive(Component)]
struct EndingUi;

fn setup_intro(mut commands: Commands) {
    spawn_screen(
        &mut commands,
        IntroUi,
        Color::srgb(0.0, 0.0, 0.0),
        ("TILE QUEST", Color::srgb(0.85, 0.2, 0.15)),
        "Press any key\n\nWASD - move    J - attack",
    );
}

fn setup_victory(mut commands: Commands) {
    spawn_screen(
        &mut commands,
        EndingUi,
        Color::srgba(0.0, 0.0, 0.0, 0.85),
        ("YOU WIN", Color::srgb(0.95, 0.8, 0.2)),
        "The triforce is yours\n\nEsc to quit",
    );
}

fn setup_game_over(mut commands: Commands) {
    spawn_screen(
        &mut commands,
        EndingUi,
        Color::srgba(0.1, 0.0, 0.0, 0.9),
        ("GAME OVER", Color::srgb(0.8, 0.2, 0.2)),
        "Esc to quit",
    );
}

/// Full-window overlay with a title and a hint line.
fn spawn_screen(
    commands: &mut Commands,
    marker: impl Component,
    background: Color,
    (title, title_color): (&str, Color),
    hint: &str,
) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(background),
            marker,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(60.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(hint),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(0.8, 0.8, 0.85)),
                TextLayout::new_with_justify(JustifyText::Center),
            ));
        });
}

/// Any key leaves the title screen.
fn intro_input(keyboard: Res<ButtonInput<KeyCode>>, mut next_state: ResMut<NextState<GameState>>) {
    if keyboard.get_just_pressed().next().is_some() {
        next_state.set(GameState::InGame);
    }
}

/// Endings are final; the only way out is closing the game.
fn quit_input(keyboard: Res<ButtonInput<KeyCode>>, mut exit: EventWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.send(AppExit::Success);
    }
}

fn cleanup<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
