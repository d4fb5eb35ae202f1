pub mod stage_file;
