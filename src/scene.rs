//! Scene graph: nodes with transforms, geometry and materials, plus lights.
//!
//! Nodes are stored in a flat arena and addressed by `NodeId`. The graph is
//! only extended while a scene is being built; afterwards callers can reach
//! transforms through `transform_mut` but cannot add or remove nodes.

use glam::{EulerRot, Mat4, Quat, Vec3};
use serde::Serialize;

use crate::selector::SceneKind;

/// Handle to a node inside one `Scene`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Position, Euler rotation (XYZ order, radians) and scale
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }

    /// Local matrix: translate * rotate * scale
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.quat(), self.position)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Cuboid {
        width: f32,
        height: f32,
        depth: f32,
    },
    Plane {
        width: f32,
        height: f32,
    },
    Points {
        positions: Vec<[f32; 3]>,
    },
}

impl Geometry {
    pub fn point_count(&self) -> usize {
        match self {
            Geometry::Points { positions } => positions.len(),
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Unlit, flat color
    Basic { color: u32 },
    /// Ambient + diffuse + specular
    Phong { color: u32, double_sided: bool },
    Points { color: u32, size: f32 },
}

impl Material {
    pub fn color(&self) -> u32 {
        match *self {
            Material::Basic { color }
            | Material::Phong { color, .. }
            | Material::Points { color, .. } => color,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    Ambient {
        color: u32,
    },
    /// Shines from `position` towards the origin
    Directional {
        color: u32,
        intensity: f32,
        position: Vec3,
    },
}

#[derive(Debug, Clone)]
pub struct Node {
    pub name: String,
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            transform: Transform::default(),
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }
}

#[derive(Debug, Clone)]
pub struct Scene {
    kind: SceneKind,
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
    lights: Vec<Light>,
}

impl Scene {
    pub fn new(kind: SceneKind) -> Self {
        Self {
            kind,
            nodes: Vec::new(),
            roots: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn kind(&self) -> SceneKind {
        self.kind
    }

    /// Adds a top-level node
    pub fn add(&mut self, node: Node) -> NodeId {
        let id = self.push(node, None);
        self.roots.push(id);
        id
    }

    /// Adds a node parented to `parent`; its transform is relative to the parent
    pub fn add_child(&mut self, parent: NodeId, node: Node) -> NodeId {
        let id = self.push(node, Some(parent));
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn add_light(&mut self, light: Light) {
        self.lights.push(light);
    }

    fn push(&mut self, mut node: Node, parent: Option<NodeId>) -> NodeId {
        node.parent = parent;
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    pub fn transform_mut(&mut self, id: NodeId) -> &mut Transform {
        &mut self.nodes[id.0].transform
    }

    /// Top-level nodes in insertion order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// All nodes, parents before children
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn point_count(&self) -> usize {
        self.nodes.iter().map(|n| n.geometry.point_count()).sum()
    }

    /// Composes local transforms from the root down to `id`
    pub fn world_matrix(&self, id: NodeId) -> Mat4 {
        let node = &self.nodes[id.0];
        let local = node.transform.matrix();
        match node.parent {
            Some(parent) => self.world_matrix(parent) * local,
            None => local,
        }
    }

    /// Sum of ambient lights, as 0xRRGGBB channels added and clamped
    pub fn ambient(&self) -> Option<u32> {
        self.lights
            .iter()
            .filter_map(|light| match light {
                Light::Ambient { color } => Some(*color),
                _ => None,
            })
            .reduce(|a, b| {
                let add = |shift: u32| {
                    (((a >> shift) & 0xff) + ((b >> shift) & 0xff)).min(0xff) << shift
                };
                add(16) | add(8) | add(0)
            })
    }

    pub fn directional(&self) -> Option<(u32, f32, Vec3)> {
        self.lights.iter().find_map(|light| match *light {
            Light::Directional {
                color,
                intensity,
                position,
            } => Some((color, intensity, position)),
            _ => None,
        })
    }

    pub fn summary(&self) -> SceneSummary {
        SceneSummary {
            kind: self.kind,
            name: self.kind.name(),
            nodes: self.node_count(),
            roots: self.roots.len(),
            lights: self.lights.len(),
            points: self.point_count(),
        }
    }
}

/// Serializable overview used by `--describe` and the stats panel
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SceneSummary {
    pub kind: SceneKind,
    pub name: &'static str,
    pub nodes: usize,
    pub roots: usize,
    pub lights: usize,
    pub points: usize,
}
