use ggez::graphics::{Canvas, Color, DrawMode, DrawParam, Mesh, Rect};
use ggez::{Context, GameResult};

use crate::apple::Apple;
use crate::grid::Position;
use crate::snake::Snake;

// Colors
const BACKGROUND_COLOR: Color = Color::new(0.0, 0.0, 0.0, 1.0);
const BORDER_COLOR: Color = Color::new(93.0 / 255.0, 216.0 / 255.0, 228.0 / 255.0, 1.0);
const APPLE_COLOR: Color = Color::new(1.0, 0.0, 0.0, 1.0);
const SNAKE_COLOR: Color = Color::new(0.0, 1.0, 0.0, 1.0);

/// Pixel rectangle covered by a grid cell
pub fn cell_rect(pos: Position, cell_size: i16) -> Rect {
    Rect::new(
        (pos.x * cell_size) as f32,
        (pos.y * cell_size) as f32,
        cell_size as f32,
        cell_size as f32,
    )
}

/// Clears the frame, then draws the apple and the snake on top
pub fn draw_frame(ctx: &mut Context, cell_size: i16, apple: &Apple, snake: &Snake) -> GameResult {
    let mut canvas = Canvas::from_frame(ctx, BACKGROUND_COLOR);

    draw_cell(ctx, &mut canvas, apple.position(), cell_size, APPLE_COLOR)?;
    for &segment in snake.segments() {
        draw_cell(ctx, &mut canvas, segment, cell_size, SNAKE_COLOR)?;
    }

    canvas.finish(ctx)
}

fn draw_cell(
    ctx: &mut Context,
    canvas: &mut Canvas,
    pos: Position,
    cell_size: i16,
    color: Color,
) -> GameResult {
    let rect = cell_rect(pos, cell_size);
    let fill = Mesh::new_rectangle(ctx, DrawMode::fill(), rect, color)?;
    let border = Mesh::new_rectangle(ctx, DrawMode::stroke(1.0), rect, BORDER_COLOR)?;
    canvas.draw(&fill, DrawParam::default());
    canvas.draw(&border, DrawParam::default());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_rect() {
        assert_eq!(
            cell_rect(Position::new(0, 0), 20),
            Rect::new(0.0, 0.0, 20.0, 20.0)
        );
        assert_eq!(
            cell_rect(Position::new(16, 12), 20),
            Rect::new(320.0, 240.0, 20.0, 20.0)
        );
        assert_eq!(
            cell_rect(Position::new(31, 23), 20),
            Rect::new(620.0, 460.0, 20.0, 20.0)
        );
    }

    #[test]
    fn test_colors() {
        assert_eq!(BACKGROUND_COLOR, Color::BLACK);
        assert_eq!(APPLE_COLOR, Color::RED);
        assert_eq!(SNAKE_COLOR, Color::GREEN);
    }
}
