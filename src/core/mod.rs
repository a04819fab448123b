pub mod add;
pub mod backup;
pub mod calculator;
pub mod del;
pub mod import;
pub mod lang;
pub mod log;
pub mod theme;
pub mod update;
