use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use crate::scene::{Geometry, Light, Material, Node, NodeId, Scene, Transform};
use crate::selector::SceneKind;

const BODY_COLOR: u32 = 0x888888;
const PANEL_COLOR: u32 = 0x0000ff;
const PANEL_OFFSET: f32 = 8.0;
const AMBIENT: u32 = 0x404040;

/// Box body with two double-sided solar panels attached as children.
///
/// Returns the body handle; it is always the first top-level node.
pub fn build_space_station() -> (Scene, NodeId) {
    let mut scene = Scene::new(SceneKind::SpaceStation);

    let body = scene.add(Node::new(
        "station",
        Geometry::Cuboid {
            width: 10.0,
            height: 2.0,
            depth: 2.0,
        },
        Material::Phong {
            color: BODY_COLOR,
            double_sided: false,
        },
    ));

    for (name, x) in [("panel-left", -PANEL_OFFSET), ("panel-right", PANEL_OFFSET)] {
        let panel = Node::new(
            name,
            Geometry::Plane {
                width: 6.0,
                height: 2.0,
            },
            Material::Phong {
                color: PANEL_COLOR,
                double_sided: true,
            },
        )
        .with_transform(
            Transform::from_position(Vec3::new(x, 0.0, 0.0))
                .with_rotation(Vec3::new(0.0, FRAC_PI_2, 0.0)),
        );
        scene.add_child(body, panel);
    }

    scene.add_light(Light::Ambient { color: AMBIENT });
    scene.add_light(Light::Directional {
        color: 0xffffff,
        intensity: 1.0,
        position: Vec3::new(5.0, 3.0, 5.0),
    });

    log::info!("Space station scene created: {} nodes", scene.node_count());
    (scene, body)
}
