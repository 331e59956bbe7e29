pub mod backend;
pub mod fs;
pub mod http;
pub mod notify;
pub mod view;
