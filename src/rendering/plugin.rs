//! Rendering plugin - draws the current room with gizmo rectangles.
//!
//! The simulation works in pixel coordinates with the origin at the top-left
//! of the window and y growing downward. Bevy's 2D camera puts the origin at
//! the window centre with y growing upward, so every box is converted before
//! it is drawn.

use bevy::math::Isometry2d;
use bevy::prelude::*;

use crate::core::tuning::{HUD_HEIGHT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::core::{GameState, Session};
use crate::enemies::EnemyKind;
use crate::world::{AreaKind, Aabb};

/// Rendering plugin - camera and per-frame drawing.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .init_resource::<Palette>()
            .add_systems(Startup, spawn_camera)
            .add_systems(
                Update,
                draw_session.run_if(
                    resource_exists::<Session>.and(
                        in_state(GameState::InGame)
                            .or(in_state(GameState::Won))
                            .or(in_state(GameState::GameOver)),
                    ),
                ),
            );
    }
}

/// Colours for everything the renderer draws.
#[derive(Resource)]
pub struct Palette {
    pub overworld_floor: Color,
    pub dungeon_floor: Color,
    pub terrain: Color,
    pub border: Color,
    pub player: Color,
    pub sword: Color,
    pub patroller: Color,
    pub charger: Color,
    pub turret: Color,
    pub fireball: Color,
    pub boss: Color,
    pub item: Color,
    pub heart: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            overworld_floor: Color::srgb(0.99, 0.85, 0.66),
            dungeon_floor: Color::srgb(0.0, 0.35, 0.45),
            terrain: Color::srgb(0.55, 0.3, 0.1),
            border: Color::srgb(0.4, 0.4, 0.45),
            player: Color::srgb(0.3, 0.75, 0.2),
            sword: Color::srgb(0.9, 0.9, 0.95),
            patroller: Color::srgb(0.85, 0.2, 0.2),
            charger: Color::srgb(0.2, 0.35, 0.9),
            turret: Color::srgb(0.75, 0.75, 0.2),
            fireball: Color::srgb(1.0, 0.55, 0.0),
            boss: Color::srgb(0.6, 0.2, 0.7),
            item: Color::srgb(0.95, 0.8, 0.2),
            heart: Color::srgb(0.85, 0.15, 0.1),
        }
    }
}

impl Palette {
    pub fn enemy(&self, kind: EnemyKind) -> Color {
        match kind {
            EnemyKind::Patroller => self.patroller,
            EnemyKind::Charger => self.charger,
            EnemyKind::Turret => self.turret,
        }
    }
}

/// Centre of `bounds` in camera space.
pub fn world_to_screen(bounds: &Aabb) -> Vec2 {
    let x = bounds.x as f32 + bounds.width as f32 / 2.0 - SCREEN_WIDTH as f32 / 2.0;
    let y = SCREEN_HEIGHT as f32 / 2.0 - (bounds.y as f32 + bounds.height as f32 / 2.0);
    Vec2::new(x, y)
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn draw_box(gizmos: &mut Gizmos, bounds: &Aabb, color: Color) {
    gizmos.rect_2d(
        Isometry2d::from_translation(world_to_screen(bounds)),
        Vec2::new(bounds.width as f32, bounds.height as f32),
        color,
    );
}

fn draw_session(mut gizmos: Gizmos, session: Res<Session>, palette: Res<Palette>) {
    let Ok(room) = session.room() else {
        return;
    };

    let floor = match session.location().area {
        AreaKind::Overworld => palette.overworld_floor,
        AreaKind::Dungeon => palette.dungeon_floor,
    };
    let playfield = Aabb::new(0, HUD_HEIGHT, SCREEN_WIDTH, SCREEN_HEIGHT - HUD_HEIGHT);
    draw_box(&mut gizmos, &playfield, floor);

    for obstacle in &room.terrain {
        draw_box(&mut gizmos, &obstacle.bounds(), palette.terrain);
    }
    for border in &room.player_borders {
        draw_box(&mut gizmos, &border.bounds(), palette.border);
    }

    for enemy in &room.enemies {
        if let Some(fireball) = enemy.fireball() {
            draw_box(&mut gizmos, &fireball.bounds(), palette.fireball);
        }
        if !enemy.vitals().flicker() {
            draw_box(&mut gizmos, &enemy.sprite(), palette.enemy(enemy.kind()));
        }
    }

    if let Some(heart) = room.visible_heart() {
        draw_box(&mut gizmos, &heart.item.bounds, palette.heart);
    }
    if session.sword_scroll_visible() {
        draw_box(&mut gizmos, &session.world().sword_scroll.item.bounds, palette.item);
    }
    if session.triforce_visible() {
        draw_box(&mut gizmos, &session.world().triforce.item.bounds, palette.item);
    }

    if session.boss_present() {
        let boss = session.boss();
        if !boss.vitals().flicker() {
            draw_box(&mut gizmos, &boss.sprite(), palette.boss);
        }
        // Mouth open while a volley is incoming.
        if boss.is_attacking() {
            draw_box(&mut gizmos, &boss.hitbox(), palette.fireball);
        }
        for shot in boss.volley() {
            draw_box(&mut gizmos, &shot.bounds(), palette.fireball);
        }
    }

    let player = session.player();
    if !player.vitals().flicker() {
        draw_box(&mut gizmos, &player.sprite(), palette.player);
    }
    if let Some(swing) = player.swing() {
        draw_box(&mut gizmos, &swing, palette.sword);
    }
    if let Some(beam) = player.beam().filter(|beam| !beam.is_out_of_bounds()) {
        draw_box(&mut gizmos, &beam.bounds(), palette.sword);
    }
}
