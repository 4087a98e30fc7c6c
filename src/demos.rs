//! Demo scenes drawn onto a [`Canvas`].
//!
//! - sphere: silhouette of one configured sphere, rays cast from a fixed eye
//!   through every pixel of a wall behind it
//! - pulse: the same silhouette over several frames while the sphere's
//!   transform changes
//! - clock: twelve hour marks placed purely with transforms
//! - projectile: a launched point under gravity and wind, plotted tick by tick

use std::f32::consts::TAU;

use log::{debug, info};

use crate::canvas::Canvas;
use crate::color::Color;
use crate::config::{Config, ProjectileConfig};
use crate::error::ConfigError;
use crate::hittable::Hittable;
use crate::matrix::Matrix;
use crate::ray::Ray;
use crate::sphere::Sphere;
use crate::transform::{rotation_z, scaling, translation};
use crate::tuple::Tuple;

/// Paint every pixel whose ray has a visible hit on `object`.
pub fn render_silhouette(config: &Config, object: &dyn Hittable, color: Color) -> Canvas {
    let mut canvas = Canvas::new(config.width, config.height);
    let camera = config.camera;

    let ray_origin = Tuple::point(0.0, 0.0, camera.origin_z);
    let pixel_width = camera.wall_size / config.width as f32;
    let pixel_height = camera.wall_size / config.height as f32;
    let half = camera.wall_size / 2.0;

    canvas.fill_par(|x, y| {
        // Top of the wall is +half, bottom is -half
        let world_y = half - pixel_height * y as f32;
        let world_x = pixel_width * x as f32 - half;
        let position = Tuple::point(world_x, world_y, camera.wall_z);

        let ray = Ray::new(ray_origin, (position - ray_origin).normalize());
        object.intersect(&ray)?.hit().map(|_| color)
    });

    canvas
}

/// Render the configured sphere.
pub fn render_sphere(config: &Config) -> Result<Canvas, ConfigError> {
    let sphere = config.sphere.sphere()?;
    debug!("Sphere transform: {}", sphere.transform());
    Ok(render_silhouette(config, &sphere, config.sphere.color()))
}

/// Render `frames` frames of the configured sphere pulsing in x and y.
///
/// Each frame scales object space by `1 + 0.25 sin(2π frame / frames)`
/// before the configured transform is applied.
pub fn render_pulse(config: &Config, frames: usize) -> Result<Vec<Canvas>, ConfigError> {
    let base = config.sphere.transform();
    let color = config.sphere.color();
    let mut sphere = Sphere::new();
    let mut pulse = Matrix::identity(4);

    let mut canvases = Vec::with_capacity(frames);
    for frame in 0..frames {
        let scale = 1.0 + 0.25 * (TAU * frame as f32 / frames as f32).sin();
        pulse[(0, 0)] = scale;
        pulse[(1, 1)] = scale;

        sphere.set_transform(&base * &pulse)?;
        info!("Frame {}/{}: scale {:.3}", frame + 1, frames, scale);
        canvases.push(render_silhouette(config, &sphere, color));
    }
    Ok(canvases)
}

/// Draw twelve hour marks around the canvas center.
pub fn render_clock(config: &Config) -> Canvas {
    let mut canvas = Canvas::new(config.width, config.height);
    let color = Color::from(config.clock.color);

    let radius = config.width.min(config.height) as f32 * config.clock.radius_ratio;
    let face = translation(config.width as f32 / 2.0, config.height as f32 / 2.0, 0.0)
        * scaling(radius, radius, 1.0);

    // Twelve o'clock is straight up, which is -y in canvas coordinates
    let twelve = Tuple::point(0.0, -1.0, 0.0);
    for hour in 0..12 {
        let mark = &face * rotation_z(hour as f32 * TAU / 12.0) * twelve;
        if !plot(&mut canvas, mark.x(), mark.y(), color) {
            debug!("Hour {} at ({:.1}, {:.1}) is off the canvas", hour, mark.x(), mark.y());
        }
    }

    canvas
}

/// Advance a projectile until it falls below y = 0 (or `max_ticks` runs out).
///
/// Returns every position including the start; the last one is the first
/// below ground unless the tick cap was hit.
pub fn simulate_projectile(params: &ProjectileConfig) -> Vec<Tuple> {
    let acceleration = params.acceleration();
    let mut position = params.start();
    let mut velocity = params.launch_velocity();

    let mut trajectory = vec![position];
    while position.y() >= 0.0 && trajectory.len() <= params.max_ticks {
        position = position + velocity;
        velocity = velocity + acceleration;
        debug!("[{}]: {}", trajectory.len(), position);
        trajectory.push(position);
    }

    info!("Projectile landed after {} ticks at x = {:.2}", trajectory.len() - 1, position.x());
    trajectory
}

/// Plot the projectile trajectory with +y pointing up the canvas.
pub fn render_projectile(config: &Config) -> Canvas {
    let mut canvas = Canvas::new(config.width, config.height);
    let color = Color::from(config.projectile.color);
    let bottom = config.height as f32 - 1.0;

    for position in simulate_projectile(&config.projectile) {
        plot(&mut canvas, position.x(), bottom - position.y(), color);
    }
    canvas
}

/// Write the pixel nearest to (`x`, `y`); false when it falls off the canvas.
///
/// NaN coordinates are off the canvas too.
fn plot(canvas: &mut Canvas, x: f32, y: f32, color: Color) -> bool {
    let (x, y) = (x.round(), y.round());
    if !(x >= 0.0 && y >= 0.0) {
        return false;
    }
    canvas.write_pixel(x as usize, y as usize, color)
}
