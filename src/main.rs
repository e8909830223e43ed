mod apple;
mod config;
mod game;
mod grid;
mod input;
mod render;
mod snake;

use ggez::{event, GameResult};
use log::{error, info};

use crate::config::GameConfig;
use crate::game::Game;

fn main() -> GameResult {
    env_logger::init();

    let config = GameConfig::default();
    info!(
        "starting on a {}x{} board at {} ticks per second",
        config.grid.width, config.grid.height, config.ticks_per_second
    );

    let (ctx, event_loop) = ggez::ContextBuilder::new("snake", "snake")
        .window_setup(config.window_setup())
        .window_mode(config.window_mode())
        .build()
        .map_err(|e| {
            error!("could not open the game window: {e}");
            e
        })?;

    let game = Game::new(config);
    event::run(ctx, event_loop, game)
}
