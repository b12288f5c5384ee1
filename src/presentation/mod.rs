// Presentation layer - Render targets, page rendering and HTTP handlers
pub mod app_state;
pub mod handlers;
pub mod page;
pub mod view;
