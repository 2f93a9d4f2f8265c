pub mod lead_repo;
pub use lead_repo::LeadRepository;
pub mod notification_repo;
pub use notification_repo::NotificationRepository;
