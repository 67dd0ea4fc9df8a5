//! A small walker sandbox driven by the `rvec` vector library.
//!
//! A walker chases the mouse at constant speed, turning its heading at a bounded angular
//! rate, slides along walls and sweeps up beacons scattered around the world. Space pauses,
//! R resets and Escape quits.

mod items;

use crate::items::{Beacon, Walker, Wall};
use anyhow::{Context, anyhow};
use log::{debug, info, warn};
use rvec::library::*;
use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::ttf::Font;
use sdl2::video::Window;
use std::time::{Duration, Instant};

/// Window title displayed in the title bar
const TITLE: &str = "Walker";
/// Initial window size in pixels
const WINDOW_WIDTH: u32 = 960;
const WINDOW_HEIGHT: u32 = 540;
/// Size of the world in world units; the canvas is scaled to fit the window
const WORLD_WIDTH: f32 = 1920.0;
const WORLD_HEIGHT: f32 = 1080.0;
/// Background color for the canvas
const BACKGROUND: Color = Color::BLACK;
/// Path to the font file used for the HUD
const FONT_PATH: &str = "/usr/share/fonts/truetype/futuristic-font/Futuristic-MRer.ttf";
/// Walker speed in world units per second
const WALKER_SPEED: f32 = 420.0;
/// Walker turn rate in radians per second
const WALKER_TURN_RATE: f32 = 5.0;
/// Number of beacons placed on every reset
const BEACON_COUNT: usize = 12;
/// Keeps spawned objects clear of the border walls
const SPAWN_MARGIN: f32 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq)]
enum GameState {
    Active,
    Paused,
}

struct Game {
    state: GameState,
    walker: Walker,
    walls: Vec<Wall>,
    beacons: Vec<Beacon>,
    target: Vector,
    collected: u32,
}

/// Converts a window pixel position into world coordinates.
///
/// # Arguments
///
/// * `x`, `y` - Cursor position in window pixels
/// * `ww`, `wh` - Current window size in pixels
fn mouse_to_space(x: f32, y: f32, ww: f32, wh: f32) -> Vector {
    vec(x * WORLD_WIDTH / ww, y * WORLD_HEIGHT / wh)
}

fn random_spot() -> Vector {
    vec(
        rand::random_range(SPAWN_MARGIN..(WORLD_WIDTH - SPAWN_MARGIN)),
        rand::random_range(SPAWN_MARGIN..(WORLD_HEIGHT - SPAWN_MARGIN)),
    )
}

impl Game {
    fn new() -> Game {
        let center = vec(WORLD_WIDTH / 2.0, WORLD_HEIGHT / 2.0);
        let mut game = Game {
            state: GameState::Active,
            walker: Walker::new(center, None, Some(WALKER_SPEED), Some(WALKER_TURN_RATE), None),
            walls: Vec::new(),
            beacons: Vec::new(),
            target: center,
            collected: 0,
        };
        game.set_up();
        game.reset();
        game
    }

    /// Builds the border and a few obstacles in the middle of the world.
    fn set_up(&mut self) {
        let corners = [
            vec(0.0, 0.0),
            vec(WORLD_WIDTH, 0.0),
            vec(WORLD_WIDTH, WORLD_HEIGHT),
            vec(0.0, WORLD_HEIGHT),
        ];
        for (&a, &b) in corners.iter().zip(corners.iter().cycle().skip(1)) {
            self.walls.push(Wall::new(a, b, Some(40), None));
        }

        // Two V shaped obstacles either side of the center
        for x in [WORLD_WIDTH / 3.0, WORLD_WIDTH * 2.0 / 3.0] {
            let tip = vec(x, WORLD_HEIGHT / 2.0);
            let arm = vec(0.0, -160.0);
            let color = Some(Color::CYAN);
            self.walls.push(Wall::new(tip, tip + arm.rotate(Vector::for_angle(0.6)), None, color));
            self.walls.push(Wall::new(tip, tip + arm.unrotate(Vector::for_angle(0.6)), None, color));
        }
    }

    fn reset(&mut self) {
        self.walker.position = random_spot();
        self.walker.heading = vec(1.0, 0.0);
        self.target = self.walker.position;
        self.collected = 0;
        self.spawn_beacons();
        info!("reset: walker at {}", self.walker.position);
    }

    fn spawn_beacons(&mut self) {
        self.beacons = (0..BEACON_COUNT)
            .map(|_| Beacon::new(random_spot(), None, None))
            .collect();
    }

    fn toggle_pause(&mut self) {
        self.state = match self.state {
            GameState::Active => GameState::Paused,
            GameState::Paused => GameState::Active,
        };
        info!("state: {:?}", self.state);
    }

    /// Advances the walker by `dt` seconds and collects any beacon it swept past.
    fn update(&mut self, dt: f32) {
        if self.state == GameState::Paused {
            return;
        }

        let start = self.walker.step_toward(self.target, dt);
        for wall in &self.walls {
            self.walker.resolve_wall(wall);
        }
        let end = self.walker.position;

        let reach = self.walker.radius;
        let before = self.beacons.len();
        self.beacons.retain(|beacon| !beacon.swept_by(start, end, reach));
        let picked = (before - self.beacons.len()) as u32;
        if picked > 0 {
            self.collected += picked;
            debug!("collected {} beacon(s) near {}", picked, end);
        }
        if self.beacons.is_empty() {
            info!("all beacons collected, respawning");
            self.spawn_beacons();
        }
    }

    fn draw(&self, canvas: &mut Canvas<Window>) {
        for wall in &self.walls {
            wall.draw(canvas);
        }
        for beacon in &self.beacons {
            beacon.draw(canvas);
        }
        self.walker.draw(canvas);
    }
}

/// Renders `text` with its top left corner at `at`, in world units.
fn draw_text(canvas: &mut Canvas<Window>, font: &Font, text: &str, at: Vector) -> anyhow::Result<()> {
    let surface = font
        .render(text)
        .blended(Color::RGB(255, 255, 255))
        .map_err(|e| anyhow!("{e}"))?;
    let texture_creator = canvas.texture_creator();
    let texture = texture_creator
        .create_texture_from_surface(&surface)
        .map_err(|e| anyhow!("{e}"))?;
    let query = texture.query();
    let target = Rect::new(at.x as i32, at.y as i32, query.width, query.height);
    canvas.copy(&texture, None, Some(target)).map_err(|e| anyhow!("{e}"))
}

fn draw_hud(canvas: &mut Canvas<Window>, font: &Font, game: &Game) -> anyhow::Result<()> {
    let score = format!("beacons: {}", game.collected);
    draw_text(canvas, font, &score, vec(60.0, 40.0))?;
    if game.state == GameState::Paused {
        draw_text(canvas, font, "PAUSED", vec(WORLD_WIDTH / 2.0 - 80.0, WORLD_HEIGHT / 2.0 - 200.0))?;
    }
    Ok(())
}

fn fit_to_window(canvas: &mut Canvas<Window>, width: u32, height: u32) -> anyhow::Result<()> {
    canvas
        .set_scale(width as f32 / WORLD_WIDTH, height as f32 / WORLD_HEIGHT)
        .map_err(|e| anyhow!("{e}"))
        .context("scaling canvas to window")
}

/// Initializes SDL2, opens the window and runs the game loop at 60 FPS.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let sdl_context = sdl2::init().map_err(|e| anyhow!("{e}")).context("initializing SDL2")?;
    let video_subsystem = sdl_context
        .video()
        .map_err(|e| anyhow!("{e}"))
        .context("initializing video subsystem")?;
    let ttf_context = sdl2::ttf::init()
        .map_err(|e| anyhow!("{e}"))
        .context("initializing SDL2_ttf")?;

    let window = video_subsystem
        .window(TITLE, WINDOW_WIDTH, WINDOW_HEIGHT)
        .position_centered()
        .resizable()
        .build()
        .map_err(|e| anyhow!("{e}"))
        .context("creating window")?;
    let font = match ttf_context.load_font(FONT_PATH, 48) {
        Ok(font) => Some(font),
        Err(e) => {
            warn!("no HUD, could not load {}: {}", FONT_PATH, e);
            None
        }
    };

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| anyhow!("{e}"))
        .context("creating canvas")?;
    fit_to_window(&mut canvas, WINDOW_WIDTH, WINDOW_HEIGHT)?;

    let mut game = Game::new();
    let mut event_pump = sdl_context
        .event_pump()
        .map_err(|e| anyhow!("{e}"))
        .context("creating event pump")?;
    let mut last_frame_time = Instant::now();
    info!("started {}x{} window over a {}x{} world", WINDOW_WIDTH, WINDOW_HEIGHT, WORLD_WIDTH, WORLD_HEIGHT);

    'running: loop {
        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } | Event::KeyDown { keycode: Some(Keycode::Escape), .. } => {
                    break 'running;
                }
                Event::KeyDown { keycode: Some(Keycode::Space), repeat: false, .. } => {
                    game.toggle_pause();
                }
                Event::KeyDown { keycode: Some(Keycode::R), repeat: false, .. } => {
                    game.reset();
                }
                Event::MouseMotion { x, y, .. } => {
                    let (ww, wh) = canvas.window().size();
                    game.target = mouse_to_space(x as f32, y as f32, ww as f32, wh as f32);
                }
                Event::Window { win_event: WindowEvent::Resized(w, h), .. } => {
                    info!("update viewport {}x{}", w, h);
                    fit_to_window(&mut canvas, w as u32, h as u32)?;
                }
                _ => {}
            }
        }

        let now = Instant::now();
        let dt = now.duration_since(last_frame_time).as_secs_f32();
        last_frame_time = now;

        game.update(dt);

        canvas.set_draw_color(BACKGROUND);
        canvas.clear();
        game.draw(&mut canvas);
        if let Some(font) = &font {
            if let Err(e) = draw_hud(&mut canvas, font, &game) {
                warn!("HUD: {e:#}");
            }
        }
        canvas.present();
        ::std::thread::sleep(Duration::new(0, 1_000_000_000u32 / 60));
    }

    info!("collected {} beacon(s), bye", game.collected);
    Ok(())
}
