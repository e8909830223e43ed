use ggez::conf::{WindowMode, WindowSetup};

use crate::grid::Grid;

const SCREEN_WIDTH: i16 = 640;
const SCREEN_HEIGHT: i16 = 480;
const GRID_CELL_SIZE: i16 = 20;
const TICKS_PER_SECOND: u32 = 10;
const WINDOW_TITLE: &str = "Snake";

/// Board geometry and timing, fixed at compile time
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    pub grid: Grid,
    /// Side of one square cell, in pixels
    pub cell_size: i16,
    pub ticks_per_second: u32,
    pub title: &'static str,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: Grid::new(
                SCREEN_WIDTH / GRID_CELL_SIZE,
                SCREEN_HEIGHT / GRID_CELL_SIZE,
            ),
            cell_size: GRID_CELL_SIZE,
            ticks_per_second: TICKS_PER_SECOND,
            title: WINDOW_TITLE,
        }
    }
}

impl GameConfig {
    /// Window size in pixels
    pub fn screen_size(&self) -> (f32, f32) {
        (
            (self.grid.width * self.cell_size) as f32,
            (self.grid.height * self.cell_size) as f32,
        )
    }

    pub fn window_setup(&self) -> WindowSetup {
        WindowSetup::default().title(self.title).vsync(true)
    }

    pub fn window_mode(&self) -> WindowMode {
        let (width, height) = self.screen_size();
        WindowMode::default()
            .dimensions(width, height)
            .resizable(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.grid, Grid::new(32, 24));
        assert_eq!(config.cell_size, 20);
        assert_eq!(config.ticks_per_second, 10);
    }

    #[test]
    fn test_screen_size_matches_grid() {
        let config = GameConfig::default();
        assert_eq!(config.screen_size(), (640.0, 480.0));

        let mode = config.window_mode();
        assert_eq!(mode.width, 640.0);
        assert_eq!(mode.height, 480.0);
        assert!(!mode.resizable);
    }
}
