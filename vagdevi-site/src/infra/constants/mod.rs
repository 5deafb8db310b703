pub mod content;
pub mod layout;
