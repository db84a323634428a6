//! Recursive Whitted-style shading.
//!
//! A shading call colors the closest hit of a ray in four ordered steps:
//! ambient + shadowed Lambertian diffuse, transparency blending, reflection
//! blending, and a specular highlight added on top. Transparency and
//! reflection read the color accumulated so far as their base layer, so the
//! order matters.

use raylet_core::{Color, Light, Material, NodeId, Scene};
use raylet_math::{Interval, Vec3};

use crate::traversal::cast;
use crate::Ray;

/// Immutable state shared by the sub-steps of one shading call.
struct ShadingContext<'a> {
    scene: &'a Scene,
    light: &'a dyn Light,
    material: &'a Material,
    /// World-space hit point
    point: Vec3,
    /// World-space unit normal
    normal: Vec3,
    /// Normalized direction of the incoming ray
    direction: Vec3,
    /// Unit vector from the hit point toward the light
    to_light: Vec3,
    object_id: NodeId,
    depth: u32,
}

impl ShadingContext<'_> {
    fn epsilon(&self) -> f32 {
        self.scene.shading_model().epsilon
    }

    fn background(&self) -> Color {
        self.scene.shading_model().background
    }

    /// Cast a secondary ray from the hit point, nudged along `direction`.
    fn spawn(&self, direction: Vec3) -> Ray {
        let mut ray = Ray::new(self.point + self.epsilon() * direction, direction);
        cast(self.scene, &mut ray);
        ray
    }
}

/// Compute the color of the closest hit recorded on `ray`.
///
/// Returns black once `depth` reaches the scene's recursion limit, the
/// background color when the ray has no hit, and only the ambient term when
/// the scene has no light.
pub fn compute_shading(ray: &Ray, scene: &Scene, depth: u32) -> Color {
    let model = scene.shading_model();
    if depth >= model.recursion_limit {
        return Color::ZERO;
    }

    let hit = ray.closest_intersection();
    if !hit.is_hit() {
        return model.background;
    }
    let Some(material) = scene.material(hit.object_id) else {
        return model.background;
    };

    let point = hit.world_point();
    let normal = hit.world_normal();

    let ambient = material.k_a * material.diffuse_color;
    let Some(light) = scene.primary_light() else {
        return ambient;
    };

    let ctx = ShadingContext {
        scene,
        light,
        material,
        point,
        normal,
        direction: ray.direction().normalize_or_zero(),
        to_light: -light.direction_at(point),
        object_id: hit.object_id,
        depth,
    };

    let shadow = shadow_intensity(&ctx);
    let cos_angle = Interval::UNIT.clamp(ctx.normal.dot(ctx.to_light));
    let diffuse_intensity = cos_angle * (1.0 - shadow);

    let light_color = light.base_color();
    let mut color = ambient + diffuse_intensity * material.k_d * material.diffuse_color * light_color;

    if material.is_transparent() {
        let next_layer = next_layer_color(&ctx);
        color = color * (1.0 - material.k_t) + next_layer * material.k_t;
    }

    if material.is_reflective() {
        let reflected = reflection_color(&ctx) * material.k_r * (diffuse_intensity + material.k_a);
        color = color * (1.0 - material.k_r) + reflected;
    }

    color + specular(&ctx) * material.k_s * material.specular_color * light_color
}

/// How much of the light is blocked at the hit point, in [0, 1].
fn shadow_intensity(ctx: &ShadingContext) -> f32 {
    let mut shadow_ray = ctx.spawn(ctx.to_light);
    occlusion(ctx.scene, &mut shadow_ray, ctx.object_id)
}

/// Accumulate `1 - k_t` for every occluder recorded on a shadow ray.
///
/// Hits on `origin_object` and hits behind the ray origin are skipped. Stops
/// as soon as the light is fully blocked.
pub(crate) fn occlusion(scene: &Scene, shadow_ray: &mut Ray, origin_object: NodeId) -> f32 {
    let mut intensity = 0.0_f32;

    while intensity < 1.0 {
        shadow_ray.discard_closest_while(|hit| hit.object_id == origin_object || hit.t_distance < 0.0);

        let occluder = shadow_ray.closest_intersection();
        if !occluder.is_hit() {
            break;
        }

        let k_t = scene.material(occluder.object_id).map_or(0.0, |m| m.k_t);
        intensity += (1.0 - k_t).max(0.0);
        shadow_ray.discard_closest_intersection();
    }

    Interval::UNIT.clamp(intensity)
}

/// Color seen through a transparent surface. Does not consume recursion depth.
fn next_layer_color(ctx: &ShadingContext) -> Color {
    let mut next = ctx.spawn(ctx.direction);
    next.discard_closest_while(|hit| hit.object_id == ctx.object_id || hit.t_distance < 0.0);

    if next.closest_intersection().is_hit() {
        compute_shading(&next, ctx.scene, ctx.depth)
    } else {
        ctx.background()
    }
}

/// Color seen along the reflection direction `normalize(normal - incoming)`.
fn reflection_color(ctx: &ShadingContext) -> Color {
    let direction = (ctx.normal - ctx.direction).normalize_or_zero();
    let mut reflection = ctx.spawn(direction);
    reflection.discard_closest_while(|hit| hit.t_distance < 0.0);

    if reflection.closest_intersection().is_hit() {
        compute_shading(&reflection, ctx.scene, ctx.depth + 1)
    } else {
        ctx.background()
    }
}

/// Phong highlight factor, before material and light colors are applied.
fn specular(ctx: &ShadingContext) -> f32 {
    let mirrored = reflect(-ctx.to_light, ctx.normal);
    mirrored.dot(ctx.direction).max(0.0).powf(ctx.material.shininess / 4.0)
}

/// Reflect a vector about a normal.
#[inline]
fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}
