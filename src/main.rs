//! Brick Breaker entry point
//!
//! Headless native host: loads settings, runs the fixed-step loop with the
//! demo autopilot and logs what happens. A windowed frontend plugs in by
//! implementing `Renderer`, `TextureLookup` and `AudioSink`.
//!
//! Usage: `brick-breaker [settings.json] [frames]`

#![cfg_attr(target_arch = "wasm32", allow(dead_code, unused_imports))]

use brick_breaker::Settings;
use brick_breaker::audio::{AudioManager, AudioSink, SoundEffect};
use brick_breaker::consts::*;
use brick_breaker::renderer::{Renderer, TextureHandle, TextureRegistry, render};
use brick_breaker::sim::{FrameInput, FrameOutcome, GamePhase, GameState, Sprite, update};
use glam::{Vec2, Vec4};

const DEFAULT_FRAMES: u64 = 60 * 60;

/// Logs sounds instead of playing them
struct LogSink;

impl AudioSink for LogSink {
    fn play_sound(&mut self, effect: SoundEffect, looped: bool) {
        log::debug!("sound {} (looped: {})", effect.name(), looped);
    }
}

/// Counts sprites instead of drawing them
#[derive(Default)]
struct CountingRenderer {
    sprites: u64,
}

impl Renderer for CountingRenderer {
    fn draw_sprite(&mut self, _: Vec2, _: Vec2, _: f32, _: TextureHandle, _: Vec4) {
        self.sprites += 1;
    }
}

/// Host instance holding everything outside the simulation
struct Game {
    state: GameState,
    accumulator: f32,
    input: FrameInput,
    audio: AudioManager,
    sink: LogSink,
    renderer: CountingRenderer,
    textures: TextureRegistry,
    last_phase: GamePhase,
    lives_lost: u32,
    levels_cleared: u32,
}

impl Game {
    fn new(settings: Settings) -> Self {
        let mut textures = TextureRegistry::new();
        for sprite in [
            Sprite::Background,
            Sprite::Block,
            Sprite::BlockSolid,
            Sprite::Paddle,
            Sprite::Ball,
            Sprite::Particle,
        ] {
            textures.register(sprite.name());
        }

        Self {
            state: GameState::new(settings),
            accumulator: 0.0,
            input: FrameInput {
                idle_mode: true,
                ..FrameInput::default()
            },
            audio: AudioManager::new(),
            sink: LogSink,
            renderer: CountingRenderer::default(),
            textures,
            last_phase: GamePhase::Menu,
            lives_lost: 0,
            levels_cleared: 0,
        }
    }

    /// Run simulation frames for `dt` seconds of host time
    fn update(&mut self, dt: f32) {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let outcome = update(&mut self.state, &self.input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.input.launch = false;
            self.input.confirm = false;
            self.input.reset = false;

            if let Some(outcome) = outcome {
                self.on_outcome(outcome);
            }
            if self.state.quit_requested {
                break;
            }
        }

        self.audio.flush(&mut self.state, &mut self.sink);

        let phase = self.state.phase;
        if phase != self.last_phase {
            log::info!("Phase {:?} -> {:?}", self.last_phase, phase);
            self.last_phase = phase;
        }
    }

    fn on_outcome(&mut self, outcome: FrameOutcome) {
        match outcome {
            FrameOutcome::LifeLost { lives_left } => {
                self.lives_lost += 1;
                log::info!("Life lost, {lives_left} left");
            }
            FrameOutcome::GameOver => {
                self.lives_lost += 1;
                log::info!("Game over on level {}", self.state.level_index + 1);
            }
            FrameOutcome::LevelCleared => {
                self.levels_cleared += 1;
                log::info!("Level {} cleared", self.state.level_index + 1);
            }
        }
    }

    fn render(&mut self) {
        render(&self.state, &mut self.renderer, &self.textures);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_or_default(path),
        None => Settings::default(),
    };
    let frames = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(frames)) => frames,
        Some(Err(e)) => {
            log::warn!("Bad frame count ({e}), using {DEFAULT_FRAMES}");
            DEFAULT_FRAMES
        }
        None => DEFAULT_FRAMES,
    };

    log::info!("Seed {:#x}, running {frames} frames", settings.seed);
    let mut game = Game::new(settings);

    for frame in 0..frames {
        if frame + 1 == frames {
            game.input.quit = true;
        }
        game.update(SIM_DT);
        game.render();
        if game.state.quit_requested {
            break;
        }
    }

    let remaining = game.state.level().remaining();
    log::info!(
        "Done after {} frames: {} lives lost, {} levels cleared, {} bricks left, {} sprites drawn, {} sounds",
        game.state.frame,
        game.lives_lost,
        game.levels_cleared,
        remaining,
        game.renderer.sprites,
        game.audio.played(),
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // No browser frontend; the library is the product on wasm
}
