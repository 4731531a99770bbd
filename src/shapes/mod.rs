// Copyright @yucwang 2023

pub mod quad_mesh;
