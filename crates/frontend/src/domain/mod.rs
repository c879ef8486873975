pub mod clients;
pub mod interactions;
pub mod pickers;
pub mod projects;
pub mod reminders;
