//! Command-line interface for batch compiling stage files

use crate::compile::executor::{CompilerConfig, StageCompiler};
use crate::io::configuration::{
    MAX_SEGMENT_LENGTH, OUTPUT_SUFFIX, PREVIEW_SUFFIX, STAGE_EXTENSION,
};
use crate::io::error::{ErrorContext, Result, StageError, WithContext};
use crate::io::image::export_preview;
use crate::io::progress::{FileStep, ProgressManager};
use crate::io::stage_file::{load_stage, write_compiled};
use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "tilestage")]
#[command(
    author,
    version,
    about = "Compile authored stage tiles into board, block, wall and goal descriptors"
)]
/// Command-line arguments for the stage compiler
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Stage JSON file or directory of stage files to compile
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Longest wall or goal run to emit
    #[arg(short = 'l', long, default_value_t = MAX_SEGMENT_LENGTH)]
    pub max_length: usize,

    /// Also render a PNG preview of each compiled stage
    #[arg(short = 'P', long)]
    pub preview: bool,

    /// Write indented JSON
    #[arg(short, long)]
    pub pretty: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Compiler configuration requested on the command line
    pub const fn compiler_config(&self) -> CompilerConfig {
        CompilerConfig {
            max_segment_length: self.max_length,
        }
    }

    /// Number of progress steps per stage file
    pub const fn steps_per_file(&self) -> usize {
        if self.preview {
            FileStep::Preview.ordinal()
        } else {
            FileStep::Write.ordinal()
        }
    }
}

/// Orchestrates batch compilation of stage files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Compile every stage named by the CLI target
    ///
    /// # Errors
    ///
    /// Returns an error if the target is invalid, the compiler configuration
    /// is out of range, or any stage fails to load, compile or write
    pub fn process(&mut self) -> Result<()> {
        let compiler = StageCompiler::new(self.cli.compiler_config())?;
        let files = self.collect_files()?;

        if files.is_empty() {
            info!("No stage files to compile");
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(&compiler, file, index)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;

        if target.is_file() {
            if !is_stage_file(target) {
                return Err(StageError::InvalidTarget {
                    path: target.clone(),
                    reason: "target file must be a .json stage",
                });
            }
            if self.should_process_file(target) {
                Ok(vec![target.clone()])
            } else {
                Ok(vec![])
            }
        } else if target.is_dir() {
            let context = ErrorContext {
                path: Some(target.clone()),
                operation: Some("list directory"),
            };
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_context(context.clone())? {
                let path = entry.with_context(context.clone())?.path();
                if is_stage_file(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(StageError::InvalidTarget {
                path: target.clone(),
                reason: "target must be a stage file or directory",
            })
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(
        &mut self,
        compiler: &StageCompiler,
        input_path: &Path,
        index: usize,
    ) -> Result<()> {
        let start_time = Instant::now();
        let steps = self.cli.steps_per_file();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, steps);
        }

        self.report(index, FileStep::Load);
        let stage = load_stage(input_path)?;

        self.report(index, FileStep::Compile);
        let compiled = compiler.compile(&stage)?;

        self.report(index, FileStep::Write);
        write_compiled(
            &Self::get_output_path(input_path),
            &compiled,
            self.cli.pretty,
        )?;

        if self.cli.preview {
            if compiled.is_empty() {
                info!("Skipping preview for {}: nothing to draw", input_path.display());
            } else {
                self.report(index, FileStep::Preview);
                export_preview(&compiled, &Self::get_preview_path(input_path))?;
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        info!(
            "Compiled {} in {:.2?}: {} boards, {} blocks, {} walls, {} goals",
            input_path.display(),
            start_time.elapsed(),
            compiled.boards.len(),
            compiled.blocks.len(),
            compiled.walls.len(),
            compiled.goals.len()
        );

        Ok(())
    }

    fn report(&mut self, index: usize, step: FileStep) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.update_step(index, step);
        }
    }

    fn sibling_path(input_path: &Path, suffix: &str, extension: &str) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let name = format!("{}{suffix}.{extension}", stem.to_string_lossy());
        input_path.with_file_name(name)
    }

    /// Path of the compiled descriptor file for a stage file
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, OUTPUT_SUFFIX, STAGE_EXTENSION)
    }

    /// Path of the preview image for a stage file
    pub fn get_preview_path(input_path: &Path) -> PathBuf {
        Self::sibling_path(input_path, PREVIEW_SUFFIX, "png")
    }
}

// Compiled outputs share the extension, so they are excluded by suffix
fn is_stage_file(path: &Path) -> bool {
    let has_extension = path.extension().and_then(|s| s.to_str()) == Some(STAGE_EXTENSION);
    let is_output = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX));
    has_extension && !is_output
}
