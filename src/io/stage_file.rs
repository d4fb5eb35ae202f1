//! Stage file loading and compiled descriptor export
//!
//! Stage files are JSON documents holding the authored tile list. Compiled
//! output is a separate JSON document carrying the four descriptor lists
//! along with derived lengths, centers and block extents.

use crate::compile::blocks::BlockGroup;
use crate::compile::conditions::{BoardCondition, BoardTile};
use crate::compile::executor::CompiledStage;
use crate::compile::segment::Segment;
use crate::io::error::{ErrorContext, Result, WithContext};
use crate::spatial::direction::{Coordinate, Direction};
use crate::stage::data::StageData;
use crate::stage::tile::ColorType;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read and parse a stage file
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid stage
pub fn load_stage(path: &Path) -> Result<StageData> {
    let text = fs::read_to_string(path).with_context(ErrorContext {
        path: Some(path.to_path_buf()),
        operation: Some("read stage"),
    })?;
    StageData::from_json(&text).with_path(path)
}

/// Write a stage file, dropping empty tiles first
///
/// # Errors
///
/// Returns an error if serialization or the write fails
pub fn save_stage(path: &Path, stage: &mut StageData, pretty: bool) -> Result<()> {
    let text = stage.to_json(pretty).with_path(path)?;
    write_text(path, &text)
}

/// Render compiled descriptors as JSON
///
/// # Errors
///
/// Returns an error if serialization fails
pub fn compiled_to_json(compiled: &CompiledStage, pretty: bool) -> Result<String> {
    let document = CompiledDocument::from(compiled);
    let text = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(text)
}

/// Write compiled descriptors to `path`
///
/// # Errors
///
/// Returns an error if serialization, directory creation or the write fails
pub fn write_compiled(path: &Path, compiled: &CompiledStage, pretty: bool) -> Result<()> {
    let text = compiled_to_json(compiled, pretty).with_path(path)?;
    write_text(path, &text)
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(ErrorContext {
            path: Some(parent.to_path_buf()),
            operation: Some("create directory"),
        })?;
    }
    fs::write(path, text).with_context(ErrorContext {
        path: Some(path.to_path_buf()),
        operation: Some("write output"),
    })
}

#[derive(Serialize)]
struct CompiledDocument {
    boards: Vec<BoardRecord>,
    blocks: Vec<BlockRecord>,
    walls: Vec<SegmentRecord>,
    goals: Vec<SegmentRecord>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BoardRecord {
    x: i32,
    y: i32,
    conditions: Vec<ConditionRecord>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConditionRecord {
    direction: Direction,
    color: ColorType,
    total_length: usize,
    offset_from_center: f64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BlockRecord {
    color_type: ColorType,
    x: i32,
    y: i32,
    shapes: Vec<Coordinate>,
    size: [i32; 2],
    center: [f64; 2],
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SegmentRecord {
    direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    color: Option<ColorType>,
    length: usize,
    center: [f64; 2],
    positions: Vec<Coordinate>,
}

impl SegmentRecord {
    fn new(segment: &impl Segment, color: Option<ColorType>) -> Self {
        Self {
            direction: segment.direction(),
            color,
            length: segment.length(),
            center: segment.center(),
            positions: segment.members().to_vec(),
        }
    }
}

impl From<&BoardCondition> for ConditionRecord {
    fn from(condition: &BoardCondition) -> Self {
        Self {
            direction: condition.direction,
            color: condition.color,
            total_length: condition.total_length,
            offset_from_center: condition.offset_from_center,
        }
    }
}

impl From<&BoardTile> for BoardRecord {
    fn from(board: &BoardTile) -> Self {
        Self {
            x: board.coordinate.x,
            y: board.coordinate.y,
            conditions: board.conditions.iter().map(ConditionRecord::from).collect(),
        }
    }
}

impl From<&BlockGroup> for BlockRecord {
    fn from(block: &BlockGroup) -> Self {
        let extents = block.extents();
        Self {
            color_type: block.color,
            x: block.anchor.x,
            y: block.anchor.y,
            shapes: block.shape.clone(),
            size: extents.size,
            center: extents.center,
        }
    }
}

impl From<&CompiledStage> for CompiledDocument {
    fn from(compiled: &CompiledStage) -> Self {
        Self {
            boards: compiled.boards.iter().map(BoardRecord::from).collect(),
            blocks: compiled.blocks.iter().map(BlockRecord::from).collect(),
            walls: compiled
                .walls
                .iter()
                .map(|wall| SegmentRecord::new(wall, None))
                .collect(),
            goals: compiled
                .goals
                .iter()
                .map(|goal| SegmentRecord::new(goal, Some(goal.color)))
                .collect(),
        }
    }
}
