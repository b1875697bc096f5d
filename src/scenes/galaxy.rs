use rand::Rng;

use crate::scene::{Geometry, Material, Node, Scene};
use crate::selector::SceneKind;

pub const STAR_COUNT: usize = 10_000;

/// Stars are spread uniformly over a cube of this edge length centred on 0
pub const STAR_SPREAD: f32 = 2000.0;

const STAR_COLOR: u32 = 0xffffff;
const STAR_SIZE: f32 = 0.1;

/// Uniform sample in [-spread/2, spread/2)
fn spread<R: Rng>(rng: &mut R, range: f32) -> f32 {
    let half = range * 0.5;
    rng.random_range(-half..half)
}

/// Static star field: one point cloud, no lights
pub fn build_galaxy<R: Rng>(rng: &mut R) -> Scene {
    let mut scene = Scene::new(SceneKind::Galaxy);

    let positions: Vec<[f32; 3]> = (0..STAR_COUNT)
        .map(|_| {
            [
                spread(rng, STAR_SPREAD),
                spread(rng, STAR_SPREAD),
                spread(rng, STAR_SPREAD),
            ]
        })
        .collect();

    scene.add(Node::new(
        "stars",
        Geometry::Points { positions },
        Material::Points {
            color: STAR_COLOR,
            size: STAR_SIZE,
        },
    ));

    log::info!("Galaxy scene created: {} stars", scene.point_count());
    scene
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn positions(scene: &Scene) -> &[[f32; 3]] {
        match &scene.node(scene.roots()[0]).geometry {
            Geometry::Points { positions } => positions,
            other => panic!("expected points, got {:?}", other),
        }
    }

    #[test]
    fn test_star_count_and_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let scene = build_galaxy(&mut rng);

        assert_eq!(scene.point_count(), STAR_COUNT);
        for p in positions(&scene) {
            for c in p {
                assert!((-1000.0..1000.0).contains(c), "coordinate {} out of range", c);
            }
        }
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = build_galaxy(&mut ChaCha8Rng::seed_from_u64(42));
        let b = build_galaxy(&mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(positions(&a), positions(&b));
    }

    #[test]
    fn test_field_fills_the_cube() {
        let scene = build_galaxy(&mut ChaCha8Rng::seed_from_u64(3));
        let pts = positions(&scene);
        let min_x = pts.iter().map(|p| p[0]).fold(f32::MAX, f32::min);
        let max_x = pts.iter().map(|p| p[0]).fold(f32::MIN, f32::max);
        assert!(min_x < -900.0);
        assert!(max_x > 900.0);
    }

    #[test]
    fn test_no_lights() {
        let scene = build_galaxy(&mut ChaCha8Rng::seed_from_u64(0));
        assert!(scene.lights().is_empty());
    }
}
