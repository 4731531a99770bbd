// Copyright @yucwang 2021

pub extern crate nalgebra as na;

pub mod core;
pub mod io;
pub mod math;
pub mod renderers;
pub mod sensors;
pub mod shapes;
pub mod textures;

pub use crate::core::config::BlockConfig;
pub use crate::core::error::{BlockError, Result};
pub use crate::core::generator::{generate_block, render_block, BlockSummary};
