pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod importer;
pub mod models;
pub mod state;
