//! Tests for pass orchestration and compiled output

#[cfg(test)]
mod tests {
    use tilestage::StageError;
    use tilestage::compile::{CompilerConfig, StageCompiler, compile_stage};
    use tilestage::io::configuration::MAX_SEGMENT_LENGTH;
    use tilestage::spatial::{Coordinate, Direction, StageBounds};
    use tilestage::stage::{ColorType, GoalMarker, StageData, Tile};

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn sample_stage() -> StageData {
        let mut tiles: Vec<Tile> = (0..3)
            .flat_map(|y| (0..3).map(move |x| c(x, y)))
            .map(|cell| {
                if cell == c(1, 1) {
                    Tile::block(cell, ColorType::Green)
                } else {
                    Tile::board(cell)
                }
            })
            .collect();
        tiles.push(Tile::goal(
            c(1, 3),
            &[GoalMarker::new(Direction::Down, ColorType::Green)],
        ));
        tiles.push(Tile::new(c(8, 8)));
        StageData::new(tiles)
    }

    // Tests default and invalid configurations
    // Verified by accepting a zero segment length
    #[test]
    fn test_config_validation() {
        assert_eq!(
            CompilerConfig::default().max_segment_length,
            MAX_SEGMENT_LENGTH
        );
        assert!(CompilerConfig::default().validate().is_ok());

        let zero = CompilerConfig {
            max_segment_length: 0,
        };
        assert!(matches!(
            StageCompiler::new(zero),
            Err(StageError::InvalidParameter { .. })
        ));
    }

    // Tests that an empty stage compiles to empty outputs
    // Verified by returning an error for empty input
    #[test]
    fn test_empty_stage() {
        let compiled = compile_stage(&StageData::default()).expect("empty stage compiles");

        assert!(compiled.is_empty());
        assert!(compiled.bounds().is_none());
    }

    // Tests that every pass contributes to the compiled stage
    // Verified by skipping the block pass
    #[test]
    fn test_all_passes_run() {
        let compiled = compile_stage(&sample_stage()).expect("stage compiles");

        assert_eq!(compiled.boards.len(), 9);
        assert_eq!(compiled.blocks.len(), 1);
        assert_eq!(compiled.goals.len(), 1);
        assert!(!compiled.walls.is_empty());

        let top = compiled.board_at(c(1, 2)).expect("board exists");
        assert_eq!(top.conditions.len(), 1);
        assert!(compiled.board_at(c(8, 8)).is_none());
        assert_eq!(
            compiled.bounds(),
            StageBounds::enclosing([c(0, 0), c(2, 2)])
        );
    }

    // Tests that the empty tile is dropped before indexing
    // Verified by indexing the raw tile list
    #[test]
    fn test_empty_tiles_ignored() {
        let compiled = compile_stage(&sample_stage()).expect("stage compiles");

        assert!(
            compiled
                .walls
                .iter()
                .all(|wall| wall.members.iter().all(|m| m.x < 8))
        );
    }

    // Tests that duplicate coordinates abort compilation
    // Verified by keeping the first tile silently
    #[test]
    fn test_duplicate_rejected() {
        let stage = StageData::new(vec![Tile::board(c(0, 0)), Tile::board(c(0, 0))]);

        assert!(matches!(
            compile_stage(&stage),
            Err(StageError::DuplicateCoordinate { .. })
        ));
    }

    // Tests that a tile at the coordinate limit fails instead of overflowing
    // Verified by skipping the range check when building the index
    #[test]
    fn test_extreme_coordinate_rejected() {
        let stage = StageData::new(vec![
            Tile::board(c(i32::MAX, 0)),
            Tile::block(c(i32::MAX, 1), ColorType::Red),
        ]);

        assert!(matches!(
            compile_stage(&stage),
            Err(StageError::CoordinateOutOfRange { .. })
        ));
    }

    // Tests that the configured limit bounds wall runs
    // Verified by tracing with the default limit regardless of config
    #[test]
    fn test_custom_segment_limit() {
        let compiler = StageCompiler::new(CompilerConfig {
            max_segment_length: 2,
        })
        .expect("config is valid");
        let stage = StageData::new((0..6).map(|x| Tile::board(c(x, 0))).collect());

        let compiled = compiler.compile(&stage).expect("stage compiles");

        assert_eq!(compiler.config().max_segment_length, 2);
        assert!(compiled.walls.iter().all(|wall| wall.members.len() <= 2));
        assert_eq!(compiled.walls.len(), 8);
    }

    // Tests that compiling twice gives identical results
    // Verified by keeping claim state on the compiler
    #[test]
    fn test_compile_idempotent() {
        let compiler = StageCompiler::default();
        let stage = sample_stage();

        let first = compiler.compile(&stage).expect("stage compiles");
        let second = compiler.compile(&stage).expect("stage compiles");

        assert_eq!(first, second);
    }
}
