pub mod app_file;
pub mod global_file;
