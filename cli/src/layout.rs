// Splitter controllers for the three-panel layout.
//
// Each controller owns its drag state; the two never look at each other.

/// Minimum widths for the editor/simulator split, in pixels.
pub const MIN_LEFT_WIDTH: f64 = 300.0;
pub const MIN_RIGHT_WIDTH: f64 = 300.0;

/// Minimum heights for the editor/console split, in pixels.
pub const MIN_EDITOR_HEIGHT: f64 = 150.0;
pub const MIN_CONSOLE_HEIGHT: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    Default,
    EwResize,
    NsResize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Vertical divider between the editor column and the simulator.
#[derive(Debug, Clone)]
pub struct PanelSplitter {
    state: DragState,
    min_left: f64,
    min_right: f64,
}

impl Default for PanelSplitter {
    fn default() -> Self {
        Self::new(MIN_LEFT_WIDTH, MIN_RIGHT_WIDTH)
    }
}

impl PanelSplitter {
    pub fn new(min_left: f64, min_right: f64) -> Self {
        Self {
            state: DragState::Idle,
            min_left,
            min_right,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn begin_drag(&mut self) -> Cursor {
        self.state = DragState::Dragging;
        Cursor::EwResize
    }

    pub fn end_drag(&mut self) -> Cursor {
        self.state = DragState::Idle;
        Cursor::Default
    }

    /// New width of the left panel for a pointer at `pointer_x`, or `None`
    /// when no drag is in progress.
    ///
    /// When the container is too narrow for both minimums the right panel's
    /// minimum wins; the left width never goes below zero.
    pub fn drag_to(&self, pointer_x: f64, container: Rect) -> Option<f64> {
        if self.state == DragState::Idle {
            return None;
        }

        let mut left = pointer_x - container.left;
        let right = container.right() - pointer_x;

        if left < self.min_left {
            left = self.min_left;
        }
        if right < self.min_right || container.width - left < self.min_right {
            left = container.width - self.min_right;
        }

        Some(left.max(0.0))
    }
}

/// Horizontal divider between the editor and the console below it.
#[derive(Debug, Clone)]
pub struct EditorConsoleSplitter {
    state: DragState,
    min_editor: f64,
    min_console: f64,
}

impl Default for EditorConsoleSplitter {
    fn default() -> Self {
        Self::new(MIN_EDITOR_HEIGHT, MIN_CONSOLE_HEIGHT)
    }
}

impl EditorConsoleSplitter {
    pub fn new(min_editor: f64, min_console: f64) -> Self {
        Self {
            state: DragState::Idle,
            min_editor,
            min_console,
        }
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn begin_drag(&mut self) -> Cursor {
        self.state = DragState::Dragging;
        Cursor::NsResize
    }

    pub fn end_drag(&mut self) -> Cursor {
        self.state = DragState::Idle;
        Cursor::Default
    }

    /// `(editor_height, console_height)` for a pointer at `pointer_y` inside
    /// `section`, or `None` when idle. The console minimum is applied last,
    /// so it wins when both cannot hold.
    pub fn drag_to(
        &self,
        pointer_y: f64,
        section: Rect,
        divider_height: f64,
    ) -> Option<(f64, f64)> {
        if self.state == DragState::Idle {
            return None;
        }

        let total = section.height;
        let mut editor = pointer_y - section.top;
        let mut console = total - editor - divider_height;

        if editor < self.min_editor {
            editor = self.min_editor;
            console = total - self.min_editor - divider_height;
        }
        if console < self.min_console {
            console = self.min_console;
            editor = total - self.min_console - divider_height;
        }

        Some((editor, console))
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)] // Inputs are exact in binary
mod tests {
    use super::*;

    fn container() -> Rect {
        Rect::new(100.0, 0.0, 1200.0, 800.0)
    }

    #[test]
    fn test_idle_splitter_ignores_pointer() {
        let splitter = PanelSplitter::default();
        assert_eq!(splitter.state(), DragState::Idle);
        assert_eq!(splitter.drag_to(600.0, container()), None);
    }

    #[test]
    fn test_drag_cycle_sets_cursor() {
        let mut splitter = PanelSplitter::default();
        assert_eq!(splitter.begin_drag(), Cursor::EwResize);
        assert_eq!(splitter.state(), DragState::Dragging);
        assert_eq!(splitter.end_drag(), Cursor::Default);
        assert_eq!(splitter.drag_to(600.0, container()), None);
    }

    #[test]
    fn test_width_follows_pointer() {
        let mut splitter = PanelSplitter::default();
        splitter.begin_drag();
        assert_eq!(splitter.drag_to(700.0, container()), Some(600.0));
    }

    #[test]
    fn test_left_minimum() {
        let mut splitter = PanelSplitter::default();
        splitter.begin_drag();
        assert_eq!(splitter.drag_to(150.0, container()), Some(300.0));
    }

    #[test]
    fn test_right_minimum() {
        let mut splitter = PanelSplitter::default();
        splitter.begin_drag();
        // Pointer 100px from the right edge
        assert_eq!(splitter.drag_to(1200.0, container()), Some(900.0));
    }

    #[test]
    fn test_right_minimum_wins_in_narrow_container() {
        let mut splitter = PanelSplitter::default();
        splitter.begin_drag();
        let narrow = Rect::new(0.0, 0.0, 500.0, 400.0);

        // Pointer at the far left: left clamps to 300, leaving only 200
        assert_eq!(splitter.drag_to(10.0, narrow), Some(200.0));
        assert_eq!(splitter.drag_to(490.0, narrow), Some(200.0));

        let tiny = Rect::new(0.0, 0.0, 250.0, 400.0);
        assert_eq!(splitter.drag_to(100.0, tiny), Some(0.0));
    }

    #[test]
    fn test_editor_console_split() {
        let mut splitter = EditorConsoleSplitter::default();
        assert_eq!(splitter.begin_drag(), Cursor::NsResize);
        let section = Rect::new(0.0, 50.0, 600.0, 800.0);

        assert_eq!(splitter.drag_to(450.0, section, 10.0), Some((400.0, 390.0)));
    }

    #[test]
    fn test_editor_and_console_minimums() {
        let mut splitter = EditorConsoleSplitter::default();
        splitter.begin_drag();
        let section = Rect::new(0.0, 0.0, 600.0, 800.0);

        assert_eq!(splitter.drag_to(20.0, section, 10.0), Some((150.0, 640.0)));
        assert_eq!(splitter.drag_to(780.0, section, 10.0), Some((590.0, 200.0)));
    }

    #[test]
    fn test_console_minimum_wins_when_both_violated() {
        let mut splitter = EditorConsoleSplitter::default();
        splitter.begin_drag();
        let section = Rect::new(0.0, 0.0, 600.0, 300.0);

        assert_eq!(splitter.drag_to(0.0, section, 10.0), Some((90.0, 200.0)));
    }

    #[test]
    fn test_splitters_are_independent() {
        let mut panels = PanelSplitter::default();
        let mut rows = EditorConsoleSplitter::default();

        panels.begin_drag();
        assert_eq!(rows.state(), DragState::Idle);
        assert!(rows.drag_to(100.0, container(), 10.0).is_none());

        rows.begin_drag();
        panels.end_drag();
        assert_eq!(rows.state(), DragState::Dragging);
    }
}
