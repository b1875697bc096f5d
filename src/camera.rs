use glam::{Mat4, Vec3};

pub const DEFAULT_FOV_DEGREES: f32 = 75.0;
pub const DEFAULT_NEAR: f32 = 0.1;
pub const DEFAULT_FAR: f32 = 1000.0;
pub const DEFAULT_DISTANCE: f32 = 50.0;

/// Range of the camera-distance slider
pub const MIN_DISTANCE: f32 = 20.0;
pub const MAX_DISTANCE: f32 = 100.0;

/// Perspective camera looking down -Z from `position`.
///
/// The projection matrix is cached; call `update_projection_matrix` after
/// touching the projection parameters directly.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    projection: Mat4,
}

impl Camera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, DEFAULT_DISTANCE),
            fov_degrees,
            aspect,
            near,
            far,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// 75° camera sized for a `width` x `height` viewport
    pub fn for_viewport(width: u32, height: u32) -> Self {
        Self::new(
            DEFAULT_FOV_DEGREES,
            width as f32 / height.max(1) as f32,
            DEFAULT_NEAR,
            DEFAULT_FAR,
        )
    }

    pub fn update_projection_matrix(&mut self) {
        self.projection = Mat4::perspective_rh(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        );
    }

    /// Sets aspect = width / height and refreshes the projection
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.aspect = width / height;
        self.update_projection_matrix();
    }

    /// Moves the camera along Z, clamped to the slider range
    pub fn set_distance(&mut self, z: f32) {
        self.position.z = z.clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    pub fn distance(&self) -> f32 {
        self.position.z
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position).inverse()
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_FOV_DEGREES, 1.0, DEFAULT_NEAR, DEFAULT_FAR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_position() {
        let camera = Camera::for_viewport(800, 600);
        assert_eq!(camera.position, Vec3::new(0.0, 0.0, 50.0));
        assert_eq!(camera.aspect, 800.0 / 600.0);
    }

    #[test]
    fn test_set_viewport_updates_projection() {
        let mut camera = Camera::default();
        let before = camera.projection_matrix();

        camera.set_viewport(1920.0, 1080.0);

        assert_eq!(camera.aspect, 1920.0 / 1080.0);
        assert_ne!(camera.projection_matrix(), before);
        assert_eq!(
            camera.projection_matrix(),
            Mat4::perspective_rh(75f32.to_radians(), 1920.0 / 1080.0, 0.1, 1000.0)
        );
    }

    #[test]
    fn test_distance_is_clamped() {
        let mut camera = Camera::default();
        camera.set_distance(5.0);
        assert_eq!(camera.distance(), MIN_DISTANCE);
        camera.set_distance(250.0);
        assert_eq!(camera.distance(), MAX_DISTANCE);
        camera.set_distance(42.5);
        assert_eq!(camera.distance(), 42.5);
    }

    #[test]
    fn test_origin_projects_to_screen_centre() {
        let camera = Camera::for_viewport(800, 600);
        let clip = camera.view_projection() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        let ndc = clip.truncate() / clip.w;

        assert!(ndc.x.abs() < 1e-6);
        assert!(ndc.y.abs() < 1e-6);
        assert!((0.0..=1.0).contains(&ndc.z));
    }

    #[test]
    fn test_point_behind_far_plane_is_clipped() {
        let camera = Camera::for_viewport(800, 600);
        let clip = camera.view_projection() * glam::Vec4::new(0.0, 0.0, -2000.0, 1.0);
        assert!(clip.z / clip.w > 1.0);
    }
}
