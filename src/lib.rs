extern crate diesel;

pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod pagination;
pub mod services;
pub mod validation;
pub mod web;
