// Motor de agregação (funções puras)
pub mod date_range;
pub mod lead_filter;
pub mod leaderboard;
pub mod pipeline;
pub mod stats;
pub mod trends;

// Serviços com estado
pub mod dashboard_service;
pub use dashboard_service::{DashboardLimits, DashboardService};
pub mod lead_service;
pub use lead_service::LeadService;
pub mod notification_bus;
pub use notification_bus::NotificationBus;
pub mod notification_service;
pub use notification_service::NotificationCenter;
