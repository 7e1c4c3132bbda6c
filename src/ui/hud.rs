//! In-game HUD - the lives row in the top band.

use bevy::prelude::*;

use crate::core::tuning::HUD_HEIGHT;
use crate::core::{GameState, Session};

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Container the heart icons are rebuilt into.
#[derive(Component)]
pub struct HeartRow;

/// Setup HUD systems.
pub fn setup_hud_systems(app: &mut App) {
    app.add_systems(OnEnter(GameState::InGame), spawn_hud)
        .add_systems(OnExit(GameState::InGame), cleanup_hud)
        .add_systems(
            Update,
            update_hearts.run_if(in_state(GameState::InGame).and(resource_exists::<Session>)),
        );
}

/// Spawn the HUD UI.
fn spawn_hud(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                width: Val::Percent(100.0),
                height: Val::Px(HUD_HEIGHT as f32),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Start,
                padding: UiRect::left(Val::Px(50.0)),
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("-LIVES-"),
                TextFont {
                    font_size: 24.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.15, 0.1)),
                Node {
                    margin: UiRect::bottom(Val::Px(10.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Node {
                    flex_direction: FlexDirection::Row,
                    column_gap: Val::Px(14.0),
                    ..default()
                },
                HeartRow,
            ));
        });
}

/// Rebuild the heart icons whenever health changes.
fn update_hearts(
    mut commands: Commands,
    session: Res<Session>,
    row: Query<Entity, With<HeartRow>>,
    mut shown: Local<Option<u32>>,
) {
    let health = session.player().health();
    let Ok(row) = row.get_single() else {
        return;
    };
    if *shown == Some(health) {
        return;
    }
    *shown = Some(health);

    commands.entity(row).despawn_descendants().with_children(|parent| {
        for _ in 0..health {
            parent.spawn((
                Node {
                    width: Val::Px(36.0),
                    height: Val::Px(32.0),
                    ..default()
                },
                BackgroundColor(Color::srgb(0.85, 0.15, 0.1)),
            ));
        }
    });
}

fn cleanup_hud(mut commands: Commands, query: Query<Entity, With<HudRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
