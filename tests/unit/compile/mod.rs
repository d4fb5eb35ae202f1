pub mod executor;
pub mod walls;
