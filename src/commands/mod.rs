/// Pipeline entry points, one per binary.
pub mod export;
pub mod greet;
