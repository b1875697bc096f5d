use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::SceneError;

/// The three built-in scenes, in the order they are built and indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum SceneKind {
    #[default]
    SolarSystem,
    Galaxy,
    SpaceStation,
}

impl SceneKind {
    pub const COUNT: usize = 3;

    /// Build order; position in this array is the scene index.
    pub const ALL: [SceneKind; Self::COUNT] = [
        SceneKind::SolarSystem,
        SceneKind::Galaxy,
        SceneKind::SpaceStation,
    ];

    pub const fn index(self) -> usize {
        match self {
            SceneKind::SolarSystem => 0,
            SceneKind::Galaxy => 1,
            SceneKind::SpaceStation => 2,
        }
    }

    /// Display name shown in the settings panel
    pub const fn name(self) -> &'static str {
        match self {
            SceneKind::SolarSystem => "Solar System",
            SceneKind::Galaxy => "Galaxy",
            SceneKind::SpaceStation => "Space Station",
        }
    }
}

impl fmt::Display for SceneKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SceneKind {
    type Err = SceneError;

    /// Exact, case-sensitive match against the display names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| SceneError::UnknownScene(s.to_string()))
    }
}

/// Which scene is currently active.
///
/// Backed by `SceneKind`, so it can only ever point at one of the three
/// built scenes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selector {
    current: SceneKind,
}

impl Selector {
    pub fn new(initial: SceneKind) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> SceneKind {
        self.current
    }

    pub fn index(&self) -> usize {
        self.current.index()
    }

    /// Switch by display name. On an unknown name the selection is left
    /// untouched and the error is returned to the caller.
    pub fn switch_scene(&mut self, name: &str) -> Result<SceneKind, SceneError> {
        let kind = name.parse::<SceneKind>()?;
        self.current = kind;
        Ok(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for kind in SceneKind::ALL {
            assert_eq!(kind.name().parse::<SceneKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_indices_follow_build_order() {
        for (i, kind) in SceneKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(SceneKind::ALL[i], *kind);
        }
    }

    #[test]
    fn test_match_is_exact() {
        assert!("solar system".parse::<SceneKind>().is_err());
        assert!(" Galaxy".parse::<SceneKind>().is_err());
        assert!("".parse::<SceneKind>().is_err());
    }

    #[test]
    fn test_default_is_solar_system() {
        assert_eq!(Selector::default().current(), SceneKind::SolarSystem);
        assert_eq!(Selector::default().index(), 0);
    }

    #[test]
    fn test_unknown_name_leaves_selection() {
        let mut selector = Selector::new(SceneKind::Galaxy);
        let result = selector.switch_scene("Nonsense");

        assert_eq!(result, Err(SceneError::UnknownScene("Nonsense".to_string())));
        assert_eq!(selector.current(), SceneKind::Galaxy);
    }

    #[test]
    fn test_switch_scene_by_name() {
        let mut selector = Selector::default();
        assert_eq!(selector.switch_scene("Space Station"), Ok(SceneKind::SpaceStation));
        assert_eq!(selector.index(), 2);
        assert_eq!(selector.switch_scene("Galaxy"), Ok(SceneKind::Galaxy));
        assert_eq!(selector.index(), 1);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(format!("{}", SceneKind::SpaceStation), "Space Station");
    }
}
