use glam::Vec3;

use crate::scene::{Geometry, Light, Material, Node, NodeId, Scene, Transform};
use crate::selector::SceneKind;

pub const PLANET_COUNT: usize = 4;
pub const PLANET_COLORS: [u32; PLANET_COUNT] = [0xff0000, 0x00ff00, 0x0000ff, 0xff00ff];

const SUN_RADIUS: f32 = 5.0;
const SUN_COLOR: u32 = 0xffff00;
const PLANET_RADIUS: f32 = 1.0;
const SEGMENTS: u32 = 32;
const AMBIENT: u32 = 0x404040;

/// Distance of planet `index` from the sun
pub fn orbit_radius(index: usize) -> f32 {
    10.0 + index as f32 * 5.0
}

/// Sun at the origin, four planets strung out along +X, ambient light.
///
/// Returns the planet handles in orbit order.
pub fn build_solar_system() -> (Scene, [NodeId; PLANET_COUNT]) {
    let mut scene = Scene::new(SceneKind::SolarSystem);

    scene.add(Node::new(
        "sun",
        Geometry::Sphere {
            radius: SUN_RADIUS,
            width_segments: SEGMENTS,
            height_segments: SEGMENTS,
        },
        Material::Basic { color: SUN_COLOR },
    ));

    let planets = std::array::from_fn(|i| {
        let planet = Node::new(
            format!("planet-{}", i),
            Geometry::Sphere {
                radius: PLANET_RADIUS,
                width_segments: SEGMENTS,
                height_segments: SEGMENTS,
            },
            Material::Basic {
                color: PLANET_COLORS[i],
            },
        )
        .with_transform(Transform::from_position(Vec3::new(orbit_radius(i), 0.0, 0.0)));
        scene.add(planet)
    });

    scene.add_light(Light::Ambient { color: AMBIENT });

    log::info!(
        "Solar system scene created: {} nodes, {} planets",
        scene.node_count(),
        PLANET_COUNT
    );
    (scene, planets)
}
