use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use space_scenes::clock::ManualClock;
use space_scenes::frame::{run_loop, CancellationToken, FrameInfo};
use space_scenes::{Action, AppState, SceneError, SceneKind, SceneList};

fn state(initial: SceneKind) -> AppState {
    let scenes = SceneList::build(&mut ChaCha8Rng::seed_from_u64(42));
    AppState::new(scenes, initial, 800, 600)
}

#[cfg(test)]
mod switching {
    use super::*;

    #[test]
    fn test_every_name_selects_its_index() {
        let mut state = state(SceneKind::SolarSystem);
        let names = ["Solar System", "Galaxy", "Space Station"];
        for (expected, name) in names.into_iter().enumerate() {
            state.on_scene_selected(name);
            assert_eq!(state.selector().index(), expected);
            assert_eq!(state.active_scene().kind().name(), name);
        }
    }

    #[test]
    fn test_unknown_name_errors_and_keeps_selection() {
        let mut state = state(SceneKind::Galaxy);

        let err = state.switch_scene("galaxy").unwrap_err();
        assert_eq!(err, SceneError::UnknownScene("galaxy".to_string()));
        assert_eq!(state.active(), SceneKind::Galaxy);

        state.on_scene_selected("");
        assert_eq!(state.active(), SceneKind::Galaxy);
    }

    #[test]
    fn test_scene_list_survives_switches() {
        let mut state = state(SceneKind::SolarSystem);
        for _ in 0..5 {
            for kind in SceneKind::ALL {
                state.apply(Action::SwitchScene(kind.name().to_string()));
                state.tick(1.0);
            }
        }

        let kinds: Vec<SceneKind> = state.scenes().iter().map(|s| s.kind()).collect();
        assert_eq!(kinds, SceneKind::ALL.to_vec());
    }

    #[test]
    fn test_only_active_scene_is_stepped() {
        let mut state = state(SceneKind::SpaceStation);
        let clock = ManualClock::new(10.0);
        let token = CancellationToken::new();
        let frames = (0..20).map(|n| FrameInfo::new(n, 0.0, 0.0));

        let mut stepped = Vec::new();
        run_loop(&mut state, &clock, frames, &token, |_, kind, _| stepped.push(kind));
        assert!(stepped.iter().all(|k| *k == SceneKind::SpaceStation));

        // Planets never moved off their initial +X placement
        let scenes = state.scenes();
        let solar = scenes.get(SceneKind::SolarSystem);
        for id in scenes.planets() {
            let p = solar.node(*id).transform.position;
            assert_eq!(p.y, 0.0);
            assert_eq!(p.z, 0.0);
        }
    }
}

#[cfg(test)]
mod viewport {
    use super::*;

    #[test]
    fn test_resize_sets_exact_aspect() {
        let mut state = state(SceneKind::SolarSystem);
        for (w, h) in [(1920, 1080), (600, 800), (1, 1), (3000, 7)] {
            assert!(state.resize(w, h));
            assert_eq!(state.camera().aspect, w as f32 / h as f32);
            assert_eq!(state.viewport(), (w, h));
        }
    }

    #[test]
    fn test_zero_sized_viewport_is_ignored() {
        let mut state = state(SceneKind::SolarSystem);
        assert!(!state.resize(0, 0));
        assert!(!state.resize(0, 400));
        assert_eq!(state.camera().aspect, 800.0 / 600.0);
    }

    #[test]
    fn test_camera_distance_is_clamped() {
        let mut state = state(SceneKind::SolarSystem);
        state.apply(Action::SetCameraDistance(5.0));
        assert_eq!(state.camera().distance(), 20.0);
        state.apply(Action::SetCameraDistance(250.0));
        assert_eq!(state.camera().distance(), 100.0);
    }
}
