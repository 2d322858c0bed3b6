pub mod inference;
pub mod mock;
pub mod workers_ai;
