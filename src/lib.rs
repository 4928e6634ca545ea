// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod specs;
pub mod text;

pub mod csv;
pub mod file;
pub mod gui;
pub mod progress;
pub mod runner;
pub mod scrape;
