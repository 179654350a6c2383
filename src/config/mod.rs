//! Runtime configuration read from the environment (and `.env` files).

pub mod app;
pub mod db;
pub mod env;
pub mod web;
