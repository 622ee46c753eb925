pub mod cli;
pub mod commands;
pub mod db;
pub mod output;
pub mod utils;
