pub mod choice_models;
pub mod poll_models;
pub mod vote_models;
