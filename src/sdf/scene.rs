/// Scene composition — the single place where shapes meet.
///
/// Each object carries its own inverse transform and base color; the scene
/// folds object samples together with the selected blend. The renderer only
/// ever calls `SceneField::sample`, so adding shapes never touches callers.

use crate::engine::types::{RenderParams, SceneSample};
use crate::math::{Mat4, Vec3};
use super::mandelbulb::Mandelbulb;
use super::{smooth_min_sample, union_sample, DistanceFunction, SceneField};

/// Base tint of the fractal surface.
pub const MANDELBULB_COLOR: Vec3 = Vec3::new(0.0, 0.42, 0.22);

/// How object samples are combined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BlendMode {
    /// Hard `min`
    Union,
    /// `smooth_min` with blend radius `k` (> 0)
    SmoothUnion { k: f64 },
}

/// One shape placed in the world.
pub struct SceneObject {
    pub shape: Box<dyn DistanceFunction>,
    pub color: Vec3,
    /// World → shape-local transform
    pub inv_transform: Mat4,
}

impl SceneObject {
    /// Shape at the world origin.
    pub fn new(shape: Box<dyn DistanceFunction>, color: Vec3) -> Self {
        Self { shape, color, inv_transform: Mat4::identity() }
    }

    /// Shape moved to `offset` in world space.
    pub fn translated(shape: Box<dyn DistanceFunction>, color: Vec3, offset: Vec3) -> Self {
        Self { shape, color, inv_transform: Mat4::inverse_translation(offset) }
    }

    #[inline]
    pub fn sample(&self, p: &Vec3) -> SceneSample {
        let local = self.inv_transform.transform_point(p);
        SceneSample { distance: self.shape.distance(&local), color: self.color }
    }
}

/// A set of objects under one blend mode.
pub struct Scene {
    pub objects: Vec<SceneObject>,
    pub blend: BlendMode,
}

impl Scene {
    pub fn new(blend: BlendMode) -> Self {
        Self { objects: Vec::new(), blend }
    }

    pub fn with(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// The fractal alone, placed at `offset`.
    pub fn mandelbulb(power: f64, offset: Vec3) -> Self {
        Scene::new(BlendMode::Union).with(SceneObject::translated(
            Box::new(Mandelbulb::new(power)),
            MANDELBULB_COLOR,
            offset,
        ))
    }

    /// Scene for one frame's parameters.
    pub fn from_params(params: &RenderParams) -> Self {
        Self::mandelbulb(params.power, params.offset)
    }
}

impl SceneField for Scene {
    fn sample(&self, p: &Vec3) -> SceneSample {
        let mut objects = self.objects.iter();
        let Some(first) = objects.next() else {
            return SceneSample::EMPTY;
        };

        objects.fold(first.sample(p), |acc, object| {
            let next = object.sample(p);
            match self.blend {
                BlendMode::Union => union_sample(acc, next),
                BlendMode::SmoothUnion { k } => smooth_min_sample(acc, next, k),
            }
        })
    }
}
