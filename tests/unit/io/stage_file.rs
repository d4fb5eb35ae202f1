//! Tests for stage file loading and compiled descriptor export

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use std::fs;
    use tempfile::TempDir;
    use tilestage::StageError;
    use tilestage::compile::compile_stage;
    use tilestage::io::stage_file::{compiled_to_json, load_stage, save_stage, write_compiled};
    use tilestage::spatial::{Coordinate, Direction};
    use tilestage::stage::{ColorType, GoalMarker, StageData, Tile};

    fn c(x: i32, y: i32) -> Coordinate {
        Coordinate::new(x, y)
    }

    fn gated_stage() -> StageData {
        StageData::new(vec![
            Tile::board(c(0, 0)),
            Tile::block(c(1, 0), ColorType::Red),
            Tile::goal(c(0, 1), &[GoalMarker::new(Direction::Down, ColorType::Red)]),
            Tile::goal(c(1, 1), &[GoalMarker::new(Direction::Down, ColorType::Red)]),
        ])
    }

    // Tests that a saved stage loads back unchanged
    // Verified by writing an empty tile list
    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("nested/stage.json");
        let mut stage = gated_stage();
        stage.tiles.push(Tile::new(c(4, 4)));

        save_stage(&path, &mut stage, true).expect("stage saves");
        let loaded = load_stage(&path).expect("stage loads");

        assert_eq!(loaded.tiles.len(), 4);
        assert_eq!(loaded, stage);
    }

    // Tests that load errors carry the path
    // Verified by dropping the read context
    #[test]
    fn test_load_errors_carry_path() {
        let temp_dir = TempDir::new().expect("temp dir");
        let missing = temp_dir.path().join("missing.json");
        match load_stage(&missing) {
            Err(StageError::FileSystem {
                path, operation, ..
            }) => {
                assert_eq!(path, missing);
                assert_eq!(operation, "read stage");
            }
            other => unreachable!("expected FileSystem error, got {other:?}"),
        }

        let broken = temp_dir.path().join("broken.json");
        fs::write(&broken, "{ tiles: [").expect("write fixture");
        match load_stage(&broken) {
            Err(StageError::StageParse { path, .. }) => assert_eq!(path, broken),
            other => unreachable!("expected StageParse error, got {other:?}"),
        }
    }

    // Tests the compiled document layout and derived fields
    // Verified by omitting the goal color field
    #[test]
    fn test_compiled_document_fields() {
        let compiled = compile_stage(&gated_stage()).expect("stage compiles");
        let text = compiled_to_json(&compiled, false).expect("document serializes");
        let doc: Value = serde_json::from_str(&text).expect("document parses");

        let field = |pointer: &str| doc.pointer(pointer).cloned().unwrap_or(Value::Null);

        assert_eq!(field("/boards").as_array().map(Vec::len), Some(2));
        assert_eq!(field("/boards/0/x"), 0);
        assert_eq!(field("/boards/0/conditions/0/direction"), "Down");
        assert_eq!(field("/boards/0/conditions/0/color"), "Red");
        assert_eq!(field("/boards/0/conditions/0/totalLength"), 2);
        assert_eq!(field("/boards/0/conditions/0/offsetFromCenter"), -0.5);

        assert_eq!(field("/blocks/0/colorType"), "Red");
        assert_eq!(field("/blocks/0/x"), 1);
        assert_eq!(field("/blocks/0/size"), json!([1, 1]));

        assert_eq!(field("/goals/0/color"), "Red");
        assert_eq!(field("/goals/0/length"), 2);
        assert_eq!(field("/goals/0/center"), json!([0.5, 1.0]));
        assert_eq!(field("/goals/0/positions/1"), json!({ "x": 1, "y": 1 }));

        let walls = field("/walls");
        let walls = walls.as_array().expect("walls array");
        assert!(!walls.is_empty());
        assert!(walls.iter().all(|wall| wall.get("color").is_none()));
    }

    // Tests that compiled output is written to disk
    // Verified by skipping the write
    #[test]
    fn test_write_compiled() {
        let temp_dir = TempDir::new().expect("temp dir");
        let path = temp_dir.path().join("out/stage_compiled.json");
        let compiled = compile_stage(&gated_stage()).expect("stage compiles");

        write_compiled(&path, &compiled, true).expect("output writes");

        let text = fs::read_to_string(&path).expect("output readable");
        assert!(text.contains('\n'));
        assert!(text.contains("\"boards\""));
    }
}
