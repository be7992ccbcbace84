//! Pan/zoom camera for the skill-tree canvas

use serde::{Deserialize, Serialize};

pub const MIN_ZOOM: f64 = 0.4;
pub const MAX_ZOOM: f64 = 2.0;
/// Zoom change per unit of wheel delta
pub const WHEEL_SENSITIVITY: f64 = 0.001;
/// Zoom change per +/- button press
pub const ZOOM_STEP: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            x: -200.0,
            y: -100.0,
            zoom: 1.0,
        }
    }
}

impl Camera {
    /// CSS transform applied to the canvas layer
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px) scale({})", self.x, self.y, self.zoom)
    }
}

fn clamp_zoom(zoom: f64) -> f64 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}

/// What the pointer went down on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PointerTarget {
    Canvas,
    Node(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    Dragging { last_x: f64, last_y: f64 },
}

/// Camera plus the drag gesture in progress
#[derive(Debug, Clone, PartialEq)]
pub struct CameraController {
    camera: Camera,
    drag: DragState,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}

impl CameraController {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            drag: DragState::Idle,
        }
    }

    pub fn camera(&self) -> Camera {
        self.camera
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// Nodes handle their own clicks and never start a pan
    pub fn pointer_down(&mut self, target: &PointerTarget, x: f64, y: f64) {
        if *target == PointerTarget::Canvas {
            self.drag = DragState::Dragging {
                last_x: x,
                last_y: y,
            };
        }
    }

    /// Pan by the raw pointer delta, independent of zoom
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        if let DragState::Dragging { last_x, last_y } = self.drag {
            self.camera.x += x - last_x;
            self.camera.y += y - last_y;
            self.drag = DragState::Dragging {
                last_x: x,
                last_y: y,
            };
        }
    }

    /// Pointer released or left the canvas
    pub fn pointer_up(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Zoom around the canvas origin; scrolling down zooms out.
    /// Non-finite deltas are ignored.
    pub fn wheel(&mut self, delta_y: f64) {
        if !delta_y.is_finite() {
            return;
        }
        self.camera.zoom = clamp_zoom(self.camera.zoom - delta_y * WHEEL_SENSITIVITY);
    }

    pub fn zoom_in(&mut self) {
        self.camera.zoom = clamp_zoom(self.camera.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.camera.zoom = clamp_zoom(self.camera.zoom - ZOOM_STEP);
    }

    /// Put canvas point (`x`, `y`) at the viewport centre, keeping zoom
    pub fn center_on(&mut self, x: f64, y: f64, viewport_w: f64, viewport_h: f64) {
        self.camera.x = viewport_w / 2.0 - x * self.camera.zoom;
        self.camera.y = viewport_h / 2.0 - y * self.camera.zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_camera() {
        let ctl = CameraController::default();
        assert_eq!(
            ctl.camera(),
            Camera {
                x: -200.0,
                y: -100.0,
                zoom: 1.0
            }
        );
        assert_eq!(ctl.camera().transform(), "translate(-200px, -100px) scale(1)");
    }

    #[test]
    fn test_drag_pans_by_raw_delta() {
        let mut ctl = CameraController::default();
        ctl.wheel(-500.0);
        assert_eq!(ctl.camera().zoom, 1.5);

        ctl.pointer_down(&PointerTarget::Canvas, 10.0, 10.0);
        ctl.pointer_move(40.0, 0.0);
        ctl.pointer_move(50.0, 5.0);
        ctl.pointer_up();
        ctl.pointer_move(500.0, 500.0);

        assert_eq!(ctl.camera().x, -160.0);
        assert_eq!(ctl.camera().y, -105.0);
        assert!(!ctl.is_dragging());
    }

    #[test]
    fn test_pointer_down_on_node_does_not_drag() {
        let mut ctl = CameraController::default();
        ctl.pointer_down(&PointerTarget::Node("html-basics".into()), 0.0, 0.0);
        ctl.pointer_move(100.0, 100.0);

        assert!(!ctl.is_dragging());
        assert_eq!(ctl.camera(), Camera::default());
    }

    #[test]
    fn test_wheel_stays_in_bounds() {
        let mut ctl = CameraController::default();
        let deltas = [-3000.0, 120.0, 9000.0, -1.0, -250.0, 0.0, 4000.0, -99999.0];
        for delta in deltas {
            ctl.wheel(delta);
            let zoom = ctl.camera().zoom;
            assert!((MIN_ZOOM..=MAX_ZOOM).contains(&zoom), "zoom {zoom}");
        }
        assert_eq!(ctl.camera().zoom, MAX_ZOOM);
    }

    #[test]
    fn test_wheel_ignores_non_finite_delta() {
        let mut ctl = CameraController::default();
        ctl.wheel(f64::NAN);
        assert_eq!(ctl.camera().zoom, 1.0);
        ctl.wheel(f64::NEG_INFINITY);
        assert_eq!(ctl.camera().zoom, 1.0);

        ctl.wheel(200.0);
        assert!((ctl.camera().zoom - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_buttons_clamp() {
        let mut ctl = CameraController::default();
        for _ in 0..10 {
            ctl.zoom_in();
        }
        assert_eq!(ctl.camera().zoom, MAX_ZOOM);
        for _ in 0..10 {
            ctl.zoom_out();
        }
        assert_eq!(ctl.camera().zoom, MIN_ZOOM);
    }

    #[test]
    fn test_center_on_point() {
        let mut ctl = CameraController::new(Camera {
            x: 0.0,
            y: 0.0,
            zoom: 0.5,
        });
        ctl.center_on(400.0, 300.0, 1200.0, 800.0);
        assert_eq!(ctl.camera().x, 400.0);
        assert_eq!(ctl.camera().y, 250.0);
        assert_eq!(ctl.camera().zoom, 0.5);
    }
}
