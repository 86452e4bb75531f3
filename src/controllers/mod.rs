pub mod poll_controllers;
