// Copyright @yucwang 2021

pub mod config;
pub mod config_loader;
pub mod cube;
pub mod error;
pub mod face;
pub mod generator;
pub mod sample_grid;
pub mod sensor;
pub mod texture;
