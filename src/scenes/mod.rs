mod galaxy;
mod solar_system;
mod space_station;

pub use galaxy::{build_galaxy, STAR_COUNT, STAR_SPREAD};
pub use solar_system::{build_solar_system, orbit_radius, PLANET_COLORS, PLANET_COUNT};
pub use space_station::build_space_station;

use rand::Rng;

use crate::scene::{NodeId, Scene, SceneSummary};
use crate::selector::SceneKind;

/// The three scenes, built once in selector order, plus the handles the
/// animation step needs.
#[derive(Debug, Clone)]
pub struct SceneList {
    scenes: [Scene; SceneKind::COUNT],
    planets: [NodeId; PLANET_COUNT],
    station: NodeId,
}

impl SceneList {
    /// Runs the builders in order: solar system, galaxy, space station
    pub fn build<R: Rng>(rng: &mut R) -> Self {
        let (solar_system, planets) = build_solar_system();
        let galaxy = build_galaxy(rng);
        let (space_station, station) = build_space_station();

        Self {
            scenes: [solar_system, galaxy, space_station],
            planets,
            station,
        }
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, kind: SceneKind) -> &Scene {
        &self.scenes[kind.index()]
    }

    pub fn get_mut(&mut self, kind: SceneKind) -> &mut Scene {
        &mut self.scenes[kind.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }

    /// Planet handles in the solar system scene, in orbit order
    pub fn planets(&self) -> &[NodeId; PLANET_COUNT] {
        &self.planets
    }

    /// Station body handle in the space station scene
    pub fn station(&self) -> NodeId {
        self.station
    }

    pub fn summaries(&self) -> Vec<SceneSummary> {
        self.scenes.iter().map(Scene::summary).collect()
    }
}
