pub mod conversation;
pub mod uploaded_file;
