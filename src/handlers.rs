pub mod dashboard;
pub mod leads;
pub mod notifications;
pub mod team;
