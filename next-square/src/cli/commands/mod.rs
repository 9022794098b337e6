// Command implementations

pub mod check;
pub mod init_config;
pub mod samples;
