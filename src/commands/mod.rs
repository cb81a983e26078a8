pub mod build;
pub mod check;
pub mod generate;
pub mod init;
pub mod inspect;
pub mod rename;
