//! Render-facing scene registry: mesh arena, attachment list, camera.
//!
//! Meshes are owned by a generational arena and referenced everywhere
//! else by stable [`MeshId`] handles, so attaching/detaching is a
//! validated operation: a stale handle is a no-op, never a dangling
//! pointer. Freeing a mesh detaches it first; that ordering keeps the
//! render loop from ever iterating a released mesh.

use std::sync::Arc;

use glam::Mat4;

use crate::camera::Camera;
use crate::geometry::instanced::{InstanceRaw, InstancedMesh};
use crate::geometry::primitive::Geometry;
use crate::geometry::Aabb;

/// Stable handle to a mesh slot in the scene's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeshId {
    index: u32,
    generation: u32,
}

struct Slot {
    generation: u32,
    mesh: Option<InstancedMesh>,
}

/// Generational arena owning every [`InstancedMesh`] in the scene.
#[derive(Default)]
pub struct MeshArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
}

impl MeshArena {
    /// Store a mesh and return its handle.
    pub fn insert(&mut self, mesh: InstancedMesh) -> MeshId {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.mesh = Some(mesh);
            return MeshId {
                index,
                generation: slot.generation,
            };
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            mesh: Some(mesh),
        });
        MeshId {
            index,
            generation: 0,
        }
    }

    /// Release a mesh. Stale or unknown handles return `None`; the slot's
    /// generation is bumped so old handles can never resolve again.
    pub fn remove(&mut self, id: MeshId) -> Option<InstancedMesh> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation || slot.mesh.is_none() {
            return None;
        }
        slot.generation += 1;
        self.free.push(id.index);
        slot.mesh.take()
    }

    /// Resolve a handle.
    #[must_use]
    pub fn get(&self, id: MeshId) -> Option<&InstancedMesh> {
        let slot = self.slots.get(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.mesh.as_ref()
    }

    /// Resolve a handle mutably.
    pub fn get_mut(&mut self, id: MeshId) -> Option<&mut InstancedMesh> {
        let slot = self.slots.get_mut(id.index as usize)?;
        if slot.generation != id.generation {
            return None;
        }
        slot.mesh.as_mut()
    }

    /// Whether the handle still resolves.
    #[must_use]
    pub fn contains(&self, id: MeshId) -> bool {
        self.get(id).is_some()
    }
}

/// Instance-buffer upload contract for the external render layer.
///
/// [`Scene::sync`] calls [`MeshUploader::upload`] exactly once per dirty
/// mesh per sync, once per change-batch, never redundantly for meshes
/// whose instance data has not changed.
pub trait MeshUploader {
    /// Receive the current instance stream for one attached mesh.
    fn upload(
        &mut self,
        id: MeshId,
        geometry: &Geometry,
        instances: &[InstanceRaw],
    );
}

/// The scene the render layer consumes: attached meshes plus camera state.
pub struct Scene {
    meshes: MeshArena,
    attached: Vec<MeshId>,
    camera: Camera,
}

impl Scene {
    /// Empty scene with the default orbit camera.
    #[must_use]
    pub fn new() -> Self {
        Self {
            meshes: MeshArena::default(),
            attached: Vec::new(),
            camera: Camera::default(),
        }
    }

    // -- Mesh ownership --

    /// Store a mesh in the scene's arena (not yet attached for render).
    pub fn insert_mesh(&mut self, mesh: InstancedMesh) -> MeshId {
        self.meshes.insert(mesh)
    }

    /// Detach and release a mesh. Detachment happens before the slot is
    /// freed so the render list never holds a dead handle.
    pub fn free_mesh(&mut self, id: MeshId) -> Option<InstancedMesh> {
        self.remove_mesh(id);
        self.meshes.remove(id)
    }

    /// Resolve a mesh handle.
    #[must_use]
    pub fn mesh(&self, id: MeshId) -> Option<&InstancedMesh> {
        self.meshes.get(id)
    }

    /// Resolve a mesh handle mutably.
    pub fn mesh_mut(&mut self, id: MeshId) -> Option<&mut InstancedMesh> {
        self.meshes.get_mut(id)
    }

    // -- Render attachment --

    /// Attach a mesh to the render set. Stale handles and duplicates are
    /// no-ops; returns whether the mesh is attached afterwards.
    pub fn add_mesh(&mut self, id: MeshId) -> bool {
        if !self.meshes.contains(id) {
            return false;
        }
        if !self.attached.contains(&id) {
            self.attached.push(id);
        }
        true
    }

    /// Detach a mesh from the render set; unknown handles are a no-op.
    pub fn remove_mesh(&mut self, id: MeshId) {
        self.attached.retain(|&m| m != id);
    }

    /// Whether a mesh is currently attached.
    #[must_use]
    pub fn is_attached(&self, id: MeshId) -> bool {
        self.attached.contains(&id)
    }

    /// Attached mesh handles, in attachment order.
    #[must_use]
    pub fn attached(&self) -> &[MeshId] {
        &self.attached
    }

    /// Bounding box over every attached mesh's transformed instances.
    #[must_use]
    pub fn attached_bounds(&self) -> Option<Aabb> {
        let mut out: Option<Aabb> = None;
        for &id in &self.attached {
            let Some(b) = self.meshes.get(id).and_then(InstancedMesh::compute_bounds)
            else {
                continue;
            };
            match &mut out {
                Some(acc) => acc.union(b),
                None => out = Some(b),
            }
        }
        out
    }

    // -- Camera --

    /// The scene camera.
    #[must_use]
    pub const fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the scene camera.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Move the camera eye to `distance` along its current view
    /// direction.
    pub fn set_camera_distance(&mut self, distance: f32) {
        self.camera.set_distance(distance);
    }

    // -- Upload synchronization --

    /// Push dirty instance streams to the render layer, then mark them
    /// clean. Each dirty mesh is uploaded exactly once per call; clean
    /// meshes are skipped entirely.
    pub fn sync<U: MeshUploader>(&mut self, uploader: &mut U) {
        for i in 0..self.attached.len() {
            let id = self.attached[i];
            let Some(mesh) = self.meshes.get_mut(id) else {
                continue;
            };
            if !mesh.is_dirty() {
                continue;
            }
            let geometry = Arc::clone(mesh.geometry());
            let instances = mesh.instance_data();
            mesh.mark_clean();
            uploader.upload(id, &geometry, &instances);
        }
    }

    /// View-projection matrix for the current camera state.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.camera.build_matrix()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}
