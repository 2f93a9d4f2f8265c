pub mod dashboard;
pub mod filters;
pub mod lead;
pub mod notification;
pub mod requests;
