pub mod account;
pub mod db;
pub mod errors;
pub mod message;
