// Copyright @yucwang 2026

use crate::core::config::BlockConfig;
use crate::core::cube::{generate_cube, Cube};
use crate::core::error::Result;
use crate::core::face::Face;
use crate::core::texture::Texture;
use crate::io::image_utils;
use crate::math::bitmap::Bitmap;
use crate::renderers::painter::{PainterRenderer, Renderer};
use crate::sensors::build_sensor;
use crate::shapes::quad_mesh::QuadMesh;
use crate::textures::image::ImageTexture;

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub struct BlockSummary {
    pub output_path: PathBuf,
    pub width: usize,
    pub height: usize,
}

/// Loads the texture, renders the block and writes it to `config.output_path`.
pub fn generate_block(config: &BlockConfig) -> Result<BlockSummary> {
    config.validate()?;

    let texture = ImageTexture::from_file(&config.texture_path)?;
    let image = render_block(config, &texture)?;
    image_utils::write_image_to_file(&image, &config.output_path)?;

    log::info!("Block saved to: {}.", config.output_path.display());
    Ok(BlockSummary {
        output_path: config.output_path.clone(),
        width: image.width(),
        height: image.height(),
    })
}

/// Renders the block for an already loaded texture.
pub fn render_block(config: &BlockConfig, texture: &dyn Texture) -> Result<Bitmap> {
    render_block_with_progress(config, texture, true)
}

pub fn render_block_with_progress(config: &BlockConfig,
                                  texture: &dyn Texture,
                                  show_progress: bool) -> Result<Bitmap> {
    config.validate()?;
    warn_on_hidden_faces(config);

    let cube = generate_cube(texture, config.face_resolution, config.edge_length)?;
    let sensor = build_sensor(config)?;
    let renderer = PainterRenderer::new(sensor).with_progress(show_progress);

    let (width, height) = config.pixel_size();
    log::info!("Rendering {}x{} block, {} samples per face edge.", width, height, config.face_resolution);
    Ok(renderer.render(&meshes_in_draw_order(&cube)))
}

pub fn meshes_in_draw_order(cube: &Cube) -> Vec<QuadMesh> {
    Face::DRAW_ORDER
        .iter()
        .filter_map(|face| cube.grid(*face))
        .map(QuadMesh::from_grid)
        .collect()
}

// The draw order is fixed for the default camera; other angles may need a
// different order or show faces that are never generated.
fn warn_on_hidden_faces(config: &BlockConfig) {
    let dir = config.view_direction();
    for face in Face::DRAW_ORDER.iter() {
        if face.normal().dot(&dir) <= 0.0 {
            log::warn!("The {} face points away from the camera at elevation {} azimuth {}; \
                        occlusion may be wrong.", face, config.elevation_deg, config.azimuth_deg);
        }
    }
}
