pub mod client;
pub mod interaction;
pub mod project;
pub mod reminder;
