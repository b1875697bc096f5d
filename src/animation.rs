//! Per-tick scene animation.

use std::f32::consts::TAU;

use glam::Vec3;

use crate::scenes::{orbit_radius, SceneList};
use crate::selector::SceneKind;

/// Angular speed factor shared by all orbits; planet i turns (i + 1) times this
pub const ORBIT_SPEED: f64 = 0.5;

/// Yaw added to the station body on every tick, in radians
pub const STATION_YAW_STEP: f32 = 0.005;

/// Orbit angle of planet `index` at wall-clock `time_seconds`.
///
/// Computed in f64: epoch seconds do not fit an f32 with sub-second precision.
pub fn orbit_angle(index: usize, time_seconds: f64) -> f64 {
    time_seconds * (index as f64 + 1.0) * ORBIT_SPEED
}

/// Planet position on the XZ plane; a pure function of time and index
pub fn planet_position(index: usize, time_seconds: f64) -> Vec3 {
    let angle = orbit_angle(index, time_seconds);
    let radius = orbit_radius(index) as f64;
    Vec3::new((radius * angle.cos()) as f32, 0.0, (radius * angle.sin()) as f32)
}

/// Station yaw after one tick, kept in [0, 2π)
pub fn advance_station_yaw(yaw: f32) -> f32 {
    (yaw + STATION_YAW_STEP).rem_euclid(TAU)
}

/// Mutates the transforms of the active scene for one tick
pub fn step(scenes: &mut SceneList, active: SceneKind, time_seconds: f64) {
    match active {
        SceneKind::SolarSystem => {
            let planets = *scenes.planets();
            let scene = scenes.get_mut(SceneKind::SolarSystem);
            for (index, id) in planets.into_iter().enumerate() {
                scene.transform_mut(id).position = planet_position(index, time_seconds);
            }
        }
        SceneKind::Galaxy => {}
        SceneKind::SpaceStation => {
            let station = scenes.station();
            let transform = scenes.get_mut(SceneKind::SpaceStation).transform_mut(station);
            transform.rotation.y = advance_station_yaw(transform.rotation.y);
        }
    }
}
