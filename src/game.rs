use ggez::event::EventHandler;
use ggez::input::keyboard::KeyInput;
use ggez::{Context, GameResult};
use log::{debug, info};
use rand::rngs::ThreadRng;

use crate::apple::Apple;
use crate::config::GameConfig;
use crate::input::{key_action, KeyAction};
use crate::render;
use crate::snake::{Snake, StepOutcome};

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    Moved,
    Ate,
    /// The snake ran into itself and started over
    Reset,
    /// The snake covers the whole board
    BoardFilled,
}

pub struct Game {
    config: GameConfig,
    snake: Snake,
    apple: Apple,
    rng: ThreadRng,
}

impl Game {
    pub fn new(config: GameConfig) -> Self {
        let mut rng = rand::thread_rng();
        let snake = Snake::new(config.grid);
        let apple = Apple::new(config.grid, snake.segments(), &mut rng);

        Game {
            config,
            snake,
            apple,
            rng,
        }
    }

    /// Advances the snake one cell and resolves collision and eating
    pub fn tick(&mut self) -> Tick {
        if self.snake.step() == StepOutcome::Collided {
            debug!("snake hit itself at length {}", self.snake.length());
            self.snake.reset();
            return Tick::Reset;
        }

        if self.snake.head() != self.apple.position() {
            return Tick::Moved;
        }

        self.snake.grow();
        match self.apple.relocate(self.snake.segments(), &mut self.rng) {
            Some(pos) => {
                debug!(
                    "apple eaten, length {}, next apple at ({}, {})",
                    self.snake.length(),
                    pos.x,
                    pos.y
                );
                Tick::Ate
            }
            None => {
                info!("board filled at length {}", self.snake.segments().len());
                self.snake.reset();
                // Cannot fail again unless the board is a single cell
                let _ = self.apple.relocate(self.snake.segments(), &mut self.rng);
                Tick::BoardFilled
            }
        }
    }
}

impl EventHandler for Game {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.config.ticks_per_second) {
            self.tick();
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        render::draw_frame(ctx, self.config.cell_size, &self.apple, &self.snake)
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        match key_action(input.keycode) {
            KeyAction::Steer(direction) => self.snake.set_pending_direction(direction),
            KeyAction::Quit => ctx.request_quit(),
            KeyAction::None => {}
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        info!("quit requested");
        Ok(false)
    }
}
