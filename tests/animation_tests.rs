use std::f32::consts::TAU;

use glam::Vec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use space_scenes::animation::{advance_station_yaw, planet_position, STATION_YAW_STEP};
use space_scenes::clock::ManualClock;
use space_scenes::frame::{run_loop, CancellationToken, FrameIterator};
use space_scenes::scenes::orbit_radius;
use space_scenes::{AppState, SceneKind, SceneList};

fn state(initial: SceneKind) -> AppState {
    let scenes = SceneList::build(&mut ChaCha8Rng::seed_from_u64(7));
    AppState::new(scenes, initial, 800, 600)
}

fn planet_positions(state: &AppState) -> Vec<Vec3> {
    let scenes = state.scenes();
    let solar = scenes.get(SceneKind::SolarSystem);
    scenes
        .planets()
        .iter()
        .map(|id| solar.node(*id).transform.position)
        .collect()
}

fn station_yaw(state: &AppState) -> f32 {
    let scenes = state.scenes();
    let station = scenes.get(SceneKind::SpaceStation);
    station.node(scenes.station()).transform.rotation.y
}

fn run_ticks(state: &mut AppState, clock: &ManualClock, ticks: u64) -> u64 {
    let token = CancellationToken::new();
    run_loop(state, clock, FrameIterator::new(), &token, |_, _, frame| {
        clock.advance(1.0 / 60.0);
        if frame.number + 1 >= ticks {
            token.cancel();
        }
    })
}

#[cfg(test)]
mod orbits {
    use super::*;

    #[test]
    fn test_planets_stay_on_their_circles() {
        let mut state = state(SceneKind::SolarSystem);
        let clock = ManualClock::new(1_700_000_000.0);
        assert_eq!(run_ticks(&mut state, &clock, 120), 120);

        let scenes = state.scenes();
        let solar = scenes.get(SceneKind::SolarSystem);
        for (i, id) in scenes.planets().iter().enumerate() {
            let p = solar.node(*id).transform.position;
            let r = (p.x * p.x + p.z * p.z).sqrt();
            assert!((r - orbit_radius(i)).abs() < 1e-3, "planet {} radius {}", i, r);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_position_depends_only_on_time() {
        let mut a = state(SceneKind::SolarSystem);
        let mut b = state(SceneKind::SolarSystem);

        // Different tick counts, same final time
        a.tick(100.0);
        for t in [3.0, 50.0, 99.5, 100.0] {
            b.tick(t);
        }

        let pa = planet_positions(&a);
        let pb = planet_positions(&b);
        assert_eq!(pa, pb);
        assert_eq!(pa[2], planet_position(2, 100.0));
    }
}

#[cfg(test)]
mod station {
    use super::*;

    #[test]
    fn test_yaw_grows_by_fixed_step() {
        let mut state = state(SceneKind::SpaceStation);
        let clock = ManualClock::new(0.0);
        run_ticks(&mut state, &clock, 100);

        assert!((station_yaw(&state) - 100.0 * STATION_YAW_STEP).abs() < 1e-4);
    }

    #[test]
    fn test_single_step_adds_exactly_one_increment() {
        assert_eq!(advance_station_yaw(0.0), STATION_YAW_STEP);
        let two_steps = STATION_YAW_STEP + STATION_YAW_STEP;
        assert_eq!(advance_station_yaw(STATION_YAW_STEP), two_steps);
    }

    #[test]
    fn test_each_tick_adds_one_increment() {
        let mut state = state(SceneKind::SpaceStation);
        assert_eq!(station_yaw(&state), 0.0);

        state.tick(0.0);
        assert_eq!(station_yaw(&state), STATION_YAW_STEP);

        // Time does not drive the station; only the tick count does
        state.tick(1_000.0);
        assert_eq!(station_yaw(&state), STATION_YAW_STEP + STATION_YAW_STEP);
    }

    #[test]
    fn test_yaw_wraps_below_full_turn() {
        let mut yaw = 0.0;
        for _ in 0..5000 {
            yaw = advance_station_yaw(yaw);
            assert!((0.0..TAU).contains(&yaw));
        }
    }

    #[test]
    fn test_panels_follow_body() {
        let mut state = state(SceneKind::SpaceStation);
        let clock = ManualClock::new(0.0);
        run_ticks(&mut state, &clock, 200);

        let scenes = state.scenes();
        let scene = scenes.get(SceneKind::SpaceStation);
        let body = scenes.station();
        let yaw = scene.node(body).transform.rotation.y;
        let left = scene.node(body).children()[0];

        let p = scene.world_matrix(left).transform_point3(Vec3::ZERO);
        let expected = Vec3::new(-8.0 * yaw.cos(), 0.0, 8.0 * yaw.sin());
        assert!((p - expected).length() < 1e-4, "{:?} vs {:?}", p, expected);
    }
}
