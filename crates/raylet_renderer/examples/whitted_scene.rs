//! Whitted-style example scene.
//!
//! Renders a ground plane, a reflective sphere, a glass triangle, a box and a
//! back wall lit by one directional light, and saves the result as a PNG.
//!
//! Run with `RUST_LOG=info` to see render progress. An optional first argument
//! overrides the output path.

use anyhow::{Context, Result};
use raylet_core::{Cuboid, DirectionalLight, Material, Plane, Rectangle, Scene, Sphere, Transform, Triangle};
use raylet_math::{Vec2, Vec3};
use raylet_renderer::{render, Camera, Color, RenderConfig};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let output = std::env::args().nth(1).unwrap_or_else(|| "raylet_output.png".to_string());

    let scene = build_scene().context("Failed to build scene")?;
    let camera = Camera::new().with_resolution(600, 600);
    let config = RenderConfig::default();

    let image = render(&camera, &scene, &config);
    image
        .save(&output)
        .with_context(|| format!("Failed to save {output}"))?;

    Ok(())
}

fn build_scene() -> Result<Scene> {
    let mut scene = Scene::new("whitted");
    let root = scene.root();

    // Ground
    let ground = Material::new("ground", Color::new(0.65, 0.0, 1.0)).with_ambient_diffuse(0.15, 0.85);
    scene.add_object(root, "ground", Plane::new(Vec3::new(0.0, -30.0, 0.0), Vec3::Y), ground)?;

    // Mirror-ish sphere
    let green = Material::new("green", Color::new(0.05, 0.70, 0.2))
        .with_specular(0.6, Color::ONE, 64.0)
        .with_reflection(0.3);
    let sphere = scene.add_object(root, "sphere", Sphere::new(20.0), green)?;
    scene.set_transform(sphere, &Transform::from_translation(Vec3::new(0.0, 0.0, 70.0)))?;

    // Glass triangle in front of the sphere
    let glass = Material::new("glass", Color::new(0.0, 0.0, 0.8)).with_transparency(0.4);
    let triangle = scene.add_object(
        root,
        "triangle",
        Triangle::new(Vec3::new(-10.0, -10.0, 0.0), Vec3::new(0.0, 10.0, 0.0), Vec3::new(10.0, -10.0, 0.0)),
        glass,
    )?;
    scene.set_transform(triangle, &Transform::from_translation(Vec3::new(-15.0, 0.0, 40.0)))?;

    // Box resting on the ground
    let orange = Material::new("orange", Color::new(0.9, 0.45, 0.1)).with_specular(0.3, Color::ONE, 16.0);
    let block = scene.add_object(root, "box", Cuboid::new(Vec3::splat(-8.0), Vec3::splat(8.0)), orange)?;
    scene.set_transform(block, &Transform::from_translation(Vec3::new(25.0, -22.0, 55.0)))?;

    // Back wall
    let wall = Material::new("wall", Color::new(0.8, 0.8, 0.75));
    let backdrop = scene.add_object(
        root,
        "wall",
        Rectangle::new(Vec3::ZERO, Vec3::NEG_Z, Vec2::new(-80.0, -30.0), Vec2::new(80.0, 60.0)),
        wall,
    )?;
    scene.set_transform(backdrop, &Transform::from_translation(Vec3::new(0.0, 0.0, 120.0)))?;

    scene.add_light(DirectionalLight::new(Vec3::new(0.5, -0.5, 0.5), Color::ONE));

    log::info!("Built scene '{}' with {} objects", scene.name, scene.object_count());
    Ok(scene)
}
