use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::entities::{
    ENEMY_HEIGHT, ENEMY_WIDTH, PLAYER_HEIGHT, PLAYER_WIDTH, PROJECTILE_HEIGHT, PROJECTILE_WIDTH,
    ProjectileOwner,
};
use crate::world::{BLINK_WINDOW, GameState, MAX_LIVES, World};

const ORANGE: Color = Color::Rgb(255, 165, 0);

/// Paints the canvas-coordinate world onto the terminal cell grid.
pub struct GameRenderer;

impl GameRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Main render method that dispatches to state-specific screens.
    pub fn render(&self, frame: &mut Frame, world: &World) {
        match world.state() {
            GameState::Playing => self.render_game(frame, world),
            GameState::Paused => self.render_paused(frame, world),
            GameState::GameOver => self.render_game_over(frame, world),
        }
    }

    /// Renders the active scene: fleet, bullets, paddle, debris, HUD.
    fn render_game(&self, frame: &mut Frame, world: &World) {
        let area = frame.area();
        let buffer = frame.buffer_mut();

        for (_, enemy) in world.enemies.iter() {
            if let Some(cells) = cell_rect(
                area,
                world.width,
                world.height,
                enemy.x,
                enemy.y,
                ENEMY_WIDTH,
                ENEMY_HEIGHT,
            ) {
                fill_cells(buffer, cells, hue_color(enemy.hue));
            }
        }

        for (_, bullet) in world.enemy_bullets.iter().chain(world.bullets.iter()) {
            let color = match bullet.owner {
                ProjectileOwner::Player => Color::White,
                ProjectileOwner::Enemy { hue } => hue_color(hue),
            };
            if let Some(cells) = cell_rect(
                area,
                world.width,
                world.height,
                bullet.x,
                bullet.y,
                PROJECTILE_WIDTH,
                PROJECTILE_HEIGHT,
            ) {
                fill_cells(buffer, cells, color);
            }
        }

        // While invincible the paddle blinks: hidden every other 20-frame
        // window.
        let blink_hidden = world.player.invincible && (world.frame / BLINK_WINDOW) % 2 == 1;
        if !blink_hidden
            && let Some(cells) = cell_rect(
                area,
                world.width,
                world.height,
                world.player.x,
                world.player.y,
                PLAYER_WIDTH,
                PLAYER_HEIGHT,
            )
        {
            fill_cells(buffer, cells, Color::White);
        }

        for (_, particle) in world.particles.iter() {
            let color = particle.hue.map_or(ORANGE, hue_color);
            if let Some(cells) = cell_rect(
                area,
                world.width,
                world.height,
                particle.x,
                particle.y,
                particle.size,
                particle.size,
            ) {
                fill_cells(buffer, cells, color);
            }
        }

        // HUD: score and remaining lives, top-left
        let hud = vec![
            Line::from(vec![
                Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    world.score.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("Lives: ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    (MAX_LIVES - world.life).to_string(),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
        ];

        let hud_area = Rect {
            x: area.x + 1,
            y: area.y,
            width: area.width.saturating_sub(2),
            height: area.height.min(2),
        };

        frame.render_widget(Paragraph::new(hud), hud_area);
    }

    /// Renders the frozen scene with a pause box on top.
    fn render_paused(&self, frame: &mut Frame, world: &World) {
        self.render_game(frame, world);

        let area = frame.area();
        let pause_text = vec![
            Line::from(""),
            Line::from("PAUSED").centered().bold().yellow(),
            Line::from(""),
            Line::from("Click to resume").centered().white(),
        ];

        let pause_area = Rect {
            x: (area.width / 2).saturating_sub(15),
            y: (area.height / 2).saturating_sub(3),
            width: area.width.min(30),
            height: area.height.min(6),
        };

        frame.render_widget(
            Paragraph::new(pause_text)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Yellow)),
                )
                .alignment(Alignment::Center),
            pause_area,
        );
    }

    /// Terminal screen: final score and the restart hint.
    fn render_game_over(&self, frame: &mut Frame, world: &World) {
        let game_over_text = vec![
            Line::from(""),
            Line::from("Game Over").centered().red().bold(),
            Line::from(""),
            Line::from(format!("Score: {}", world.score))
                .centered()
                .yellow()
                .bold(),
            Line::from(""),
            Line::from("Click or press Space to play again")
                .centered()
                .white(),
            Line::from("Press Q to quit").centered().white(),
        ];

        frame.render_widget(
            Paragraph::new(game_over_text)
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            frame.area(),
        );
    }
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps a canvas-coordinate rectangle onto terminal cells, clipped to the
/// drawing area. Returns None when the rectangle lies entirely outside.
/// Anything that survives clipping covers at least one cell.
fn cell_rect(
    area: Rect,
    canvas_width: f32,
    canvas_height: f32,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> Option<Rect> {
    let scale_x = area.width as f32 / canvas_width;
    let scale_y = area.height as f32 / canvas_height;

    let x0 = (x * scale_x).floor() as i32;
    let y0 = (y * scale_y).floor() as i32;
    let x1 = ((x + width) * scale_x).ceil() as i32;
    let y1 = ((y + height) * scale_y).ceil() as i32;

    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(area.width as i32);
    let y1 = y1.min(area.height as i32);
    if x0 >= x1 || y0 >= y1 {
        return None;
    }

    Some(Rect {
        x: area.x + x0 as u16,
        y: area.y + y0 as u16,
        width: (x1 - x0) as u16,
        height: (y1 - y0) as u16,
    })
}

fn fill_cells(buffer: &mut Buffer, cells: Rect, color: Color) {
    let row = "█".repeat(cells.width as usize);
    for dy in 0..cells.height {
        buffer.set_string(cells.x, cells.y + dy, &row, Style::default().fg(color));
    }
}

/// hsl(hue, 60%, 50%) as an RGB terminal color, the palette the ships are
/// spawned with.
fn hue_color(hue: u16) -> Color {
    let h = hue as f32 / 60.0;
    let chroma = 0.6;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = 0.5 - chroma / 2.0;
    Color::Rgb(
        ((r + m) * 255.0) as u8,
        ((g + m) * 255.0) as u8,
        ((b + m) * 255.0) as u8,
    )
}
