pub mod config;
pub mod init;
pub mod ping;
pub mod shell;
pub mod show;
