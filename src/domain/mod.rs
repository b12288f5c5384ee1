// Domain layer - Statistics, trend series and display models
pub mod chart;
pub mod covid;
pub mod dashboard;
pub mod historical;
