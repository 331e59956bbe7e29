pub mod dto;
pub mod ports;
pub mod services;
