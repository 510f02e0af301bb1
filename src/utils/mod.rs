pub mod date;
pub mod fs;
pub mod log;
pub mod slug;
pub mod text;
