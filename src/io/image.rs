//! PNG preview of a compiled stage with transparent background

use crate::compile::executor::CompiledStage;
use crate::io::configuration::PREVIEW_CELL_PIXELS;
use crate::io::error::{Result, StageError, invalid_parameter};
use crate::spatial::direction::Coordinate;
use crate::spatial::index::StageBounds;
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::Path;

const BOARD_RGBA: [u8; 4] = [40, 40, 40, 255];
const WALL_RGBA: [u8; 4] = [200, 200, 200, 255];

// Everything drawn, walls included, so the image is not clipped at the edges
fn preview_bounds(compiled: &CompiledStage) -> Option<StageBounds> {
    let boards = compiled.boards.iter().map(|board| board.coordinate);
    let blocks = compiled.blocks.iter().flat_map(|block| block.cells());
    let walls = compiled
        .walls
        .iter()
        .flat_map(|wall| wall.members.iter().copied());
    let goals = compiled
        .goals
        .iter()
        .flat_map(|goal| goal.members.iter().copied());

    StageBounds::enclosing(boards.chain(blocks).chain(walls).chain(goals))
}

/// Render a compiled stage, one square per grid cell
///
/// Rows run top to bottom from the highest y. Board cells are drawn first,
/// then walls, goals and blocks on top.
///
/// # Errors
///
/// Returns an error if the stage has nothing to draw
pub fn render_preview(compiled: &CompiledStage) -> Result<RgbaImage> {
    let bounds = preview_bounds(compiled).ok_or_else(|| {
        invalid_parameter("stage", &"<empty>", &"compiled stage has nothing to preview")
    })?;

    let width = bounds.width() as u32 * PREVIEW_CELL_PIXELS;
    let height = bounds.height() as u32 * PREVIEW_CELL_PIXELS;
    let mut img = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));

    for board in &compiled.boards {
        paint_cell(&mut img, &bounds, board.coordinate, BOARD_RGBA);
    }
    for wall in &compiled.walls {
        for &cell in &wall.members {
            paint_cell(&mut img, &bounds, cell, WALL_RGBA);
        }
    }
    for goal in &compiled.goals {
        for &cell in &goal.members {
            paint_cell(&mut img, &bounds, cell, goal.color.preview_rgba());
        }
    }
    for block in &compiled.blocks {
        for cell in block.cells() {
            paint_cell(&mut img, &bounds, cell, block.color.preview_rgba());
        }
    }

    Ok(img)
}

fn paint_cell(img: &mut RgbaImage, bounds: &StageBounds, cell: Coordinate, rgba: [u8; 4]) {
    let Some([row, col]) = bounds.cell(cell) else {
        return;
    };
    let flipped_row = bounds.height() - 1 - row;
    let left = col as u32 * PREVIEW_CELL_PIXELS;
    let top = flipped_row as u32 * PREVIEW_CELL_PIXELS;

    for y in top..top + PREVIEW_CELL_PIXELS {
        for x in left..left + PREVIEW_CELL_PIXELS {
            if let Some(pixel) = img.get_pixel_mut_checked(x, y) {
                *pixel = Rgba(rgba);
            }
        }
    }
}

/// Render a compiled stage and save it as PNG
///
/// # Errors
///
/// Returns an error if:
/// - The stage has nothing to draw
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_preview(compiled: &CompiledStage, output_path: &Path) -> Result<()> {
    let img = render_preview(compiled)?;

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| StageError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| StageError::PreviewExport {
            path: output_path.into(),
            source: e,
        })
}
