pub mod cast_vote;
pub mod create_choice;
pub mod create_poll;
pub mod get_choices;
pub mod get_results;
pub mod models;
pub mod polls;
