mod conversation;
mod session;
mod uploaded_file;

pub use conversation::*;
pub use session::*;
pub use uploaded_file::*;
