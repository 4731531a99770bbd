// Copyright @yucwang 2026

pub mod orthographic;
pub mod perspective;

use crate::core::config::BlockConfig;
use crate::core::cube::cube_corners;
use crate::core::error::Result;
use crate::core::sensor::Sensor;
use crate::math::constants::Vector3f;

use self::orthographic::OrthographicCamera;
use self::perspective::PerspectiveCamera;

/// Camera described by `config`, framing the whole cube in the output raster.
pub fn build_sensor(config: &BlockConfig) -> Result<Box<dyn Sensor>> {
    let l = config.edge_length;
    let center = Vector3f::new(0.5 * l, 0.5 * l, 0.5 * l);
    let corners = cube_corners(l);
    let (width, height) = config.pixel_size();
    let to_eye = config.view_direction();

    let sensor: Box<dyn Sensor> = if config.orthographic {
        Box::new(OrthographicCamera::new(center, to_eye, &corners, width, height))
    } else {
        Box::new(PerspectiveCamera::new(center, to_eye, config.camera_distance * l, &corners, width, height)?)
    };
    log::info!("Camera: {}.", sensor.describe());
    Ok(sensor)
}
