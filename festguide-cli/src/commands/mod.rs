pub mod config;
pub mod hosts;
pub mod like;
pub mod likes;
pub mod search;
pub mod sections;
pub mod show;
pub mod today;
pub mod undo;
