// Copyright @yucwang 2021

pub mod painter;
pub mod renderer;
