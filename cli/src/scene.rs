// The robot shown next to the editor: a fixed scene graph plus one rotation
// per animation frame.

use serde::Serialize;

/// Radians added to the robot's Y rotation every frame.
pub const ROTATION_STEP: f64 = 0.01;

pub type Vec3 = [f64; 3];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Geometry {
    Box { width: f64, height: f64, depth: f64 },
    Sphere { radius: f64 },
    Cylinder { radius_top: f64, radius_bottom: f64, height: f64 },
}

/// Phong material color as `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Material {
    pub color: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Mesh {
    pub name: &'static str,
    pub geometry: Geometry,
    pub material: Material,
    pub position: Vec3,
    pub rotation: Vec3,
    pub children: Vec<Mesh>,
}

impl Mesh {
    fn new(name: &'static str, geometry: Geometry, color: u32, position: Vec3) -> Self {
        Self {
            name,
            geometry,
            material: Material { color },
            position,
            rotation: [0.0; 3],
            children: Vec::new(),
        }
    }

    fn with_children(mut self, children: Vec<Mesh>) -> Self {
        self.children = children;
        self
    }

    pub fn child(&self, name: &str) -> Option<&Mesh> {
        self.children.iter().find(|c| c.name == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Light {
    Ambient { color: u32 },
    Directional { color: u32, intensity: f64, position: Vec3 },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Camera {
    pub fov: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
    pub position: Vec3,
    pub look_at: Vec3,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub camera: Camera,
    pub lights: Vec<Light>,
    pub robot: Mesh,
}

impl Scene {
    /// The robot scene for a canvas of the given size.
    pub fn robot(canvas_width: f64, canvas_height: f64) -> Self {
        let aspect = if canvas_height > 0.0 {
            canvas_width / canvas_height
        } else {
            1.0
        };

        let arm = |x: f64| {
            Mesh::new(
                if x < 0.0 { "leftArm" } else { "rightArm" },
                Geometry::Cylinder {
                    radius_top: 0.2,
                    radius_bottom: 0.2,
                    height: 3.0,
                },
                0xff0000,
                [x, 1.0, 0.0],
            )
        };
        let leg = |x: f64| {
            Mesh::new(
                if x < 0.0 { "leftLeg" } else { "rightLeg" },
                Geometry::Cylinder {
                    radius_top: 0.3,
                    radius_bottom: 0.3,
                    height: 4.0,
                },
                0x0000ff,
                [x, -3.5, 0.0],
            )
        };

        let head = Mesh::new(
            "head",
            Geometry::Sphere { radius: 1.0 },
            0x0000ff,
            [0.0, 2.5, 0.0],
        );

        let robot = Mesh::new(
            "body",
            Geometry::Box {
                width: 2.0,
                height: 3.0,
                depth: 1.0,
            },
            0x00ff00,
            [0.0; 3],
        )
        .with_children(vec![head, arm(-1.5), arm(1.5), leg(-0.5), leg(0.5)]);

        Self {
            camera: Camera {
                fov: 75.0,
                aspect,
                near: 0.1,
                far: 1000.0,
                position: [5.0, 5.0, 10.0],
                look_at: [0.0; 3],
            },
            lights: vec![
                Light::Ambient { color: 0x404040 },
                Light::Directional {
                    color: 0xffffff,
                    intensity: 1.0,
                    position: [5.0, 5.0, 5.0],
                },
            ],
            robot,
        }
    }
}

/// Advances the scene one frame at a time.
#[derive(Debug, Clone)]
pub struct Animator {
    scene: Scene,
    frames: u64,
}

impl Animator {
    pub fn new(scene: Scene) -> Self {
        Self { scene, frames: 0 }
    }

    pub fn tick(&mut self) {
        self.scene.robot.rotation[1] += ROTATION_STEP;
        self.frames += 1;
    }

    pub fn advance(&mut self, frames: u64) {
        for _ in 0..frames {
            self.tick();
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)] // Test code
mod tests {
    use super::*;

    #[test]
    fn test_robot_structure() {
        let scene = Scene::robot(800.0, 600.0);
        let body = &scene.robot;

        assert_eq!(body.children.len(), 5);
        assert_eq!(body.material.color, 0x00ff00);
        assert_eq!(body.child("head").unwrap().position, [0.0, 2.5, 0.0]);
        assert_eq!(body.child("leftArm").unwrap().position, [-1.5, 1.0, 0.0]);
        assert_eq!(body.child("rightLeg").unwrap().position, [0.5, -3.5, 0.0]);
        assert_eq!(body.child("rightArm").unwrap().material.color, 0xff0000);
        assert!((scene.camera.aspect - 800.0 / 600.0).abs() < f64::EPSILON);
        assert_eq!(scene.lights.len(), 2);
    }

    #[test]
    fn test_zero_height_canvas() {
        let scene = Scene::robot(800.0, 0.0);
        assert!((scene.camera.aspect - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_tick_rotates_only_the_body() {
        let mut animator = Animator::new(Scene::robot(800.0, 600.0));
        animator.advance(100);

        let body = &animator.scene().robot;
        assert_eq!(animator.frames(), 100);
        assert!((body.rotation[1] - 1.0).abs() < 1e-9);
        assert_eq!(body.rotation[0], 0.0);
        assert!(body.children.iter().all(|c| c.rotation == [0.0; 3]));
    }

    #[test]
    fn test_scene_serializes() {
        let json = serde_json::to_value(Scene::robot(800.0, 600.0)).unwrap();
        assert_eq!(json["robot"]["geometry"]["type"], "box");
        assert_eq!(json["robot"]["children"][0]["geometry"]["type"], "sphere");
        assert_eq!(json["camera"]["lookAt"], serde_json::json!([0.0, 0.0, 0.0]));
        assert_eq!(json["lights"][1]["type"], "directional");
    }
}
