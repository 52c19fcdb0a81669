pub mod content;
pub mod delete;
pub mod info;
pub mod list;
pub mod upload;
