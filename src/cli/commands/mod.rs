pub mod add;
pub mod backup;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod files;
pub mod import;
pub mod info;
pub mod init;
pub mod lang;
pub mod list;
pub mod log;
pub mod months;
pub mod show;
pub mod theme;
pub mod update;
