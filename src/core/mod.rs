pub mod group;
pub mod query;
pub mod state;
