use crate::{
    EventOutcome, Gui, NodeId,
    config::GuiConfig,
    error::Result,
    event::{Key, KeyInput, MouseInput, mouse::Button},
    geom::{Point, Rect},
    testing::{DrawOp, RecordingGraphics},
};

/// Gap between inputs sent by the harness, wide enough that separate clicks
/// never count as a double click.
const STEP_MS: u64 = 1000;

/// Drives a [`Gui`] with synthetic input and records what it draws.
pub struct Harness {
    /// The driver under test.
    pub gui: Gui,
    /// Recorder for `render`.
    pub graphics: RecordingGraphics,
    /// Synthetic clock for input timestamps.
    clock_ms: u64,
}

impl Default for Harness {
    fn default() -> Self {
        Self::new(GuiConfig::default())
    }
}

impl Harness {
    /// A harness around a fresh `Gui`.
    pub fn new(config: GuiConfig) -> Self {
        Self {
            gui: Gui::new(config),
            graphics: RecordingGraphics::new(),
            clock_ms: 0,
        }
    }

    /// Make `top` the top widget, placed at `dim`.
    pub fn set_top(&mut self, top: impl Into<NodeId>, dim: Rect) -> Result<()> {
        let top = top.into();
        self.gui.core_mut().set_dimension(top, dim)?;
        self.gui.set_top(Some(top))
    }

    /// Advance the synthetic clock.
    pub fn tick(&mut self, ms: u64) {
        self.clock_ms += ms;
    }

    /// Press and release a key. Returns the outcome of the press.
    pub fn key(&mut self, key: impl Into<Key>) -> Result<EventOutcome> {
        let key = key.into();
        let outcome = self.gui.push_key_input(KeyInput::pressed(key))?;
        self.gui.push_key_input(KeyInput::released(key))?;
        Ok(outcome)
    }

    /// Move the pointer.
    pub fn move_to(&mut self, p: impl Into<Point>) -> Result<()> {
        self.tick(STEP_MS);
        self.gui.push_mouse_input(MouseInput::moved(p, self.clock_ms))
    }

    /// Press a button.
    pub fn press(&mut self, button: Button, p: impl Into<Point>) -> Result<()> {
        self.tick(STEP_MS);
        self.gui
            .push_mouse_input(MouseInput::pressed(button, p, self.clock_ms))
    }

    /// Release a button.
    pub fn release(&mut self, button: Button, p: impl Into<Point>) -> Result<()> {
        self.gui
            .push_mouse_input(MouseInput::released(button, p, self.clock_ms))
    }

    /// Press and release the left button at a point.
    pub fn click(&mut self, p: impl Into<Point>) -> Result<()> {
        let p = p.into();
        self.press(Button::Left, p)?;
        self.release(Button::Left, p)
    }

    /// Two left clicks inside the double-click window.
    pub fn double_click(&mut self, p: impl Into<Point>) -> Result<()> {
        let p = p.into();
        self.click(p)?;
        self.clock_ms += 1;
        self.gui
            .push_mouse_input(MouseInput::pressed(Button::Left, p, self.clock_ms))?;
        self.release(Button::Left, p)
    }

    /// Run a logic tick and draw, returning the recorded primitives.
    pub fn render(&mut self) -> Result<Vec<DrawOp>> {
        self.gui.logic()?;
        self.gui.draw(&mut self.graphics)?;
        Ok(self.graphics.take())
    }
}
