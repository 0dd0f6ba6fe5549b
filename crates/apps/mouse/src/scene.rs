//! Draggable rectangles on a fixed-size canvas
//!
//! All coordinates are canvas-local: the origin is the canvas' top-left
//! corner and y grows downward, matching egui's screen space.

use glam::Vec2;

/// Default canvas size in GUI points
pub const DEFAULT_CANVAS_SIZE: Vec2 = Vec2::new(600.0, 400.0);

/// A filled axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneObject {
    /// Top-left corner
    pub position: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Fill color as normalized RGBA
    pub color: [f32; 4],
}

impl SceneObject {
    pub fn new(x: f32, y: f32, width: f32, height: f32, color: [f32; 4]) -> Self {
        Self {
            position: Vec2::new(x, y),
            size: Vec2::new(width, height),
            color,
        }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    /// Check whether a point lies inside the rectangle, edges included
    pub fn contains(&self, point: Vec2) -> bool {
        point.cmpge(self.position).all() && point.cmple(self.max()).all()
    }
}

/// The three rectangles every run starts with
pub fn default_objects() -> Vec<SceneObject> {
    vec![
        SceneObject::new(50.0, 60.0, 80.0, 80.0, [1.0, 0.0, 0.0, 1.0]),
        SceneObject::new(200.0, 150.0, 100.0, 60.0, [0.0, 1.0, 0.0, 1.0]),
        SceneObject::new(400.0, 300.0, 60.0, 90.0, [0.0, 0.0, 1.0, 1.0]),
    ]
}

/// Clamp a rectangle origin so the rectangle stays inside the canvas
///
/// Each axis is clamped to `[0, canvas - size]`. When the rectangle is
/// larger than the canvas on an axis, that axis is pinned to 0.
pub fn clamp_to_canvas(position: Vec2, size: Vec2, canvas: Vec2) -> Vec2 {
    let max = (canvas - size).max(Vec2::ZERO);
    position.clamp(Vec2::ZERO, max)
}

/// Rectangles plus the selection and drag gesture state
#[derive(Debug, Clone)]
pub struct Scene {
    objects: Vec<SceneObject>,
    canvas_size: Vec2,
    selected: Option<usize>,
    /// Cursor position relative to the selected object's origin at press time
    drag_offset: Vec2,
    dragging: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_SIZE)
    }
}

impl Scene {
    /// Create a scene with the default rectangles
    pub fn new(canvas_size: Vec2) -> Self {
        Self::with_objects(default_objects(), canvas_size)
    }

    /// Create a scene from explicit objects, clamping each into the canvas
    pub fn with_objects(mut objects: Vec<SceneObject>, canvas_size: Vec2) -> Self {
        let canvas_size = canvas_size.max(Vec2::ZERO);
        for object in &mut objects {
            object.size = object.size.max(Vec2::ZERO);
            object.position = clamp_to_canvas(object.position, object.size, canvas_size);
        }
        Self {
            objects,
            canvas_size,
            selected: None,
            drag_offset: Vec2::ZERO,
            dragging: false,
        }
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.canvas_size
    }

    /// Index of the selected object
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selected.and_then(|i| self.objects.get(i))
    }

    /// True between a press that hit an object and the matching release
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn drag_offset(&self) -> Vec2 {
        self.drag_offset
    }

    /// Find the topmost object under a point
    ///
    /// Later objects are drawn on top, so they are tested first.
    pub fn hit_test(&self, point: Vec2) -> Option<usize> {
        self.objects.iter().rposition(|o| o.contains(point))
    }

    /// Handle a left-button press at a canvas-local point
    ///
    /// Selects the topmost object under the point and starts a drag, or
    /// clears the selection when the press misses every object.
    pub fn press(&mut self, point: Vec2) -> Option<usize> {
        self.selected = self.hit_test(point);
        match self.selected_object() {
            Some(object) => {
                self.drag_offset = point - object.position;
                self.dragging = true;
            }
            None => {
                self.drag_offset = Vec2::ZERO;
                self.dragging = false;
            }
        }
        self.selected
    }

    /// Move the dragged object so it stays anchored under the cursor
    ///
    /// Returns the new clamped position, or None when no drag is active.
    pub fn drag_to(&mut self, point: Vec2) -> Option<Vec2> {
        if !self.dragging {
            return None;
        }
        let canvas = self.canvas_size;
        let offset = self.drag_offset;
        let object = self.objects.get_mut(self.selected?)?;
        object.position = clamp_to_canvas(point - offset, object.size, canvas);
        Some(object.position)
    }

    /// End the drag gesture; the selection is kept
    pub fn release(&mut self) {
        self.dragging = false;
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.dragging = false;
    }

    /// Move the selected object, clamped into the canvas
    pub fn set_position(&mut self, position: Vec2) -> bool {
        let canvas = self.canvas_size;
        match self.selected_mut() {
            Some(object) => {
                object.position = clamp_to_canvas(position, object.size, canvas);
                true
            }
            None => false,
        }
    }

    /// Resize the selected object and re-clamp its position
    pub fn set_size(&mut self, size: Vec2) -> bool {
        let canvas = self.canvas_size;
        match self.selected_mut() {
            Some(object) => {
                object.size = size.max(Vec2::ZERO);
                object.position = clamp_to_canvas(object.position, object.size, canvas);
                true
            }
            None => false,
        }
    }

    pub fn set_color(&mut self, color: [f32; 4]) -> bool {
        match self.selected_mut() {
            Some(object) => {
                object.color = color.map(|c| c.clamp(0.0, 1.0));
                true
            }
            None => false,
        }
    }

    fn selected_mut(&mut self) -> Option<&mut SceneObject> {
        self.selected.and_then(|i| self.objects.get_mut(i))
    }
}
