pub mod polls;
pub mod results;
pub mod votes;
