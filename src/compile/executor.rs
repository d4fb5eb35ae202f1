use crate::compile::blocks::{BlockGroup, group_blocks};
use crate::compile::conditions::{BoardTile, link_board_conditions};
use crate::compile::goals::{GoalGroup, extract_goal_groups};
use crate::compile::session::CompileSession;
use crate::compile::walls::{WallGroup, trace_walls};
use crate::io::configuration::MAX_SEGMENT_LENGTH;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::direction::Coordinate;
use crate::spatial::index::{StageBounds, TileIndex};
use crate::stage::data::StageData;
use log::debug;
use std::collections::HashMap;

/// Compiler parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompilerConfig {
    /// Longest wall or goal run that may be emitted
    pub max_segment_length: usize,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            max_segment_length: MAX_SEGMENT_LENGTH,
        }
    }
}

impl CompilerConfig {
    /// Check parameter ranges
    ///
    /// # Errors
    ///
    /// Returns an error if `max_segment_length` is zero
    pub fn validate(&self) -> Result<()> {
        if self.max_segment_length == 0 {
            return Err(invalid_parameter(
                "max_segment_length",
                &self.max_segment_length,
                &"must be at least 1",
            ));
        }
        Ok(())
    }
}

/// Descriptors derived from one authored stage
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompiledStage {
    /// Board footprint in authored order
    pub boards: Vec<BoardTile>,
    /// Block groups in anchor order
    pub blocks: Vec<BlockGroup>,
    /// Wall runs in tracing order
    pub walls: Vec<WallGroup>,
    /// Goal gates in seeding order
    pub goals: Vec<GoalGroup>,
    board_slots: HashMap<Coordinate, usize>,
}

impl CompiledStage {
    fn new(
        boards: Vec<BoardTile>,
        blocks: Vec<BlockGroup>,
        walls: Vec<WallGroup>,
        goals: Vec<GoalGroup>,
    ) -> Self {
        let board_slots = boards
            .iter()
            .enumerate()
            .map(|(slot, board)| (board.coordinate, slot))
            .collect();

        Self {
            boards,
            blocks,
            walls,
            goals,
            board_slots,
        }
    }

    /// Board descriptor at `coordinate`
    pub fn board_at(&self, coordinate: Coordinate) -> Option<&BoardTile> {
        self.board_slots
            .get(&coordinate)
            .and_then(|&slot| self.boards.get(slot))
    }

    /// Bounding box of the board footprint
    pub fn bounds(&self) -> Option<StageBounds> {
        StageBounds::enclosing(self.boards.iter().map(|board| board.coordinate))
    }

    /// No descriptors of any kind
    pub fn is_empty(&self) -> bool {
        self.boards.is_empty()
            && self.blocks.is_empty()
            && self.walls.is_empty()
            && self.goals.is_empty()
    }
}

/// Batch compiler from authored tiles to play-layer descriptors
///
/// Each call is an independent pass: it indexes a cleaned copy of the
/// stage, then extracts goals, links board conditions, groups blocks and
/// traces walls. Nothing carries over between calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct StageCompiler {
    config: CompilerConfig,
}

impl StageCompiler {
    /// Create a compiler with validated parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is out of range
    pub fn new(config: CompilerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub const fn config(&self) -> CompilerConfig {
        self.config
    }

    /// Compile a stage
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Two authored tiles share a coordinate
    /// - The stage footprint is too large to index
    /// - A goal gate exceeds the segment limit
    pub fn compile(&self, stage: &StageData) -> Result<CompiledStage> {
        let mut cleaned = stage.clone();
        cleaned.clear_empty();

        let index = TileIndex::build(&cleaned.tiles)?;
        let mut session = CompileSession::new(&index, self.config.max_segment_length);
        debug!(
            "indexed {} tiles ({} dropped as empty)",
            index.len(),
            stage.tiles.len() - index.len()
        );

        let goals = extract_goal_groups(&index, &mut session)?;
        let boards = link_board_conditions(&index, &goals);
        let blocks = group_blocks(&index);
        let walls = trace_walls(&index, &mut session);

        Ok(CompiledStage::new(boards, blocks, walls, goals))
    }
}

/// Compile a stage with the default configuration
///
/// # Errors
///
/// Returns an error under the same conditions as [`StageCompiler::compile`]
pub fn compile_stage(stage: &StageData) -> Result<CompiledStage> {
    StageCompiler::default().compile(stage)
}
