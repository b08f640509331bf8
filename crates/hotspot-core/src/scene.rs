use crate::collider::{raycast_mesh, Collider, Hits};
use crate::config::{ModelConfig, ViewerConfig};
use crate::mesh::MeshData;
use crate::ray::{Ray, Side};
use glam::{Mat4, Quat, Vec3};
use std::f32::consts::FRAC_PI_2;
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub side: Side,
}

#[derive(Clone, Debug)]
pub struct MeshSlot {
    pub data: Arc<MeshData>,
    pub material: Material,
}

/// Transform hierarchy node with an optional mesh.
#[derive(Clone, Debug)]
pub struct SceneNode {
    pub name: String,
    pub transform: Mat4,
    pub mesh: Option<MeshSlot>,
    pub children: Vec<SceneNode>,
}

impl SceneNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Mat4::IDENTITY,
            mesh: None,
            children: Vec::new(),
        }
    }

    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    pub fn with_mesh(mut self, data: Arc<MeshData>, material: Material) -> Self {
        self.mesh = Some(MeshSlot { data, material });
        self
    }

    pub fn with_child(mut self, child: SceneNode) -> Self {
        self.children.push(child);
        self
    }

    /// Visit every node with its world transform, parents first.
    pub fn walk(&self, parent: Mat4, f: &mut impl FnMut(&SceneNode, Mat4)) {
        let world = parent * self.transform;
        f(self, world);
        for child in &self.children {
            child.walk(world, f);
        }
    }
}

impl Collider for SceneNode {
    fn raycast(&self, ray: &Ray, hits: &mut Hits) {
        self.walk(Mat4::IDENTITY, &mut |node, world| {
            if let Some(slot) = &node.mesh {
                raycast_mesh(&slot.data, &world, slot.material.side, ray, hits);
            }
        });
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: [f32; 3],
    pub intensity: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionalLight {
    pub color: [f32; 3],
    pub intensity: f32,
    /// Light shines from here towards the origin.
    pub position: Vec3,
}

impl DirectionalLight {
    /// Unit vector pointing towards the light.
    pub fn direction(&self) -> Vec3 {
        self.position.try_normalize().unwrap_or(Vec3::Y)
    }
}

/// Mesh to draw with its world transform.
#[derive(Clone, Debug)]
pub struct DrawItem {
    pub mesh: Arc<MeshData>,
    pub world: Mat4,
    pub material: Material,
}

/// Floor, lights and the (possibly not yet loaded) model.
#[derive(Clone, Debug)]
pub struct Scene {
    pub floor: SceneNode,
    pub model: Option<SceneNode>,
    pub ambient: AmbientLight,
    pub directional: DirectionalLight,
    revision: u64,
}

impl Scene {
    pub fn from_config(config: &ViewerConfig) -> Self {
        let floor_mesh = Arc::new(MeshData::plane(config.floor.size.x, config.floor.size.y));
        let floor = SceneNode::new("floor")
            .with_transform(Mat4::from_rotation_x(-FRAC_PI_2))
            .with_mesh(
                floor_mesh,
                Material {
                    color: config.floor.color,
                    side: Side::Front,
                },
            );
        let l = &config.lights;
        Self {
            floor,
            model: None,
            ambient: AmbientLight {
                color: l.ambient_color,
                intensity: l.ambient_intensity,
            },
            directional: DirectionalLight {
                color: l.directional_color,
                intensity: l.directional_intensity,
                position: l.directional_position,
            },
            revision: 0,
        }
    }

    /// Build the boulder model. This is the expensive step that frontends
    /// run off the first frame.
    pub fn load_model(config: &ModelConfig) -> SceneNode {
        let mesh = MeshData::boulder(config.radius, config.detail, config.roughness, config.seed);
        log::info!(
            "[scene] model built: {} vertices, {} triangles",
            mesh.positions.len(),
            mesh.triangle_count()
        );
        let mesh_node = SceneNode::new("boulder_mesh").with_mesh(
            Arc::new(mesh),
            Material {
                color: config.color,
                side: Side::Front,
            },
        );
        SceneNode::new("boulder")
            .with_transform(Mat4::from_scale_rotation_translation(
                config.scale,
                Quat::IDENTITY,
                config.position,
            ))
            .with_child(mesh_node)
    }

    pub fn attach_model(&mut self, node: SceneNode) {
        log::info!("[scene] model '{}' attached", node.name);
        self.model = Some(node);
        self.revision += 1;
    }

    /// Bumped whenever the drawable set changes.
    #[inline]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[inline]
    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }

    pub fn colliders(&self) -> Vec<&dyn Collider> {
        let mut out: Vec<&dyn Collider> = vec![&self.floor];
        if let Some(model) = &self.model {
            out.push(model);
        }
        out
    }

    pub fn draw_list(&self) -> Vec<DrawItem> {
        let mut items = Vec::new();
        let mut collect = |node: &SceneNode, world: Mat4| {
            if let Some(slot) = &node.mesh {
                items.push(DrawItem {
                    mesh: slot.data.clone(),
                    world,
                    material: slot.material,
                });
            }
        };
        self.floor.walk(Mat4::IDENTITY, &mut collect);
        if let Some(model) = &self.model {
            model.walk(Mat4::IDENTITY, &mut collect);
        }
        items
    }
}
