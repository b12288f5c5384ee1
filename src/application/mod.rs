// Application layer - Use cases and the ports they depend on
pub mod covid_repository;
pub mod dashboard_controller;
pub mod formatting;
pub mod render_targets;
