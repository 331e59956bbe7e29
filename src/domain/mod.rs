pub mod dashboard;
pub mod detection;
pub mod errors;
pub mod flow;
pub mod media;
pub mod model;
pub mod session;
