use std::{cell::RefCell, mem, rc::Rc};

use crate::{
    Context, DrawContext, EventOutcome,
    error::Result,
    event::{ActionEvent, FocusEvent, KeyEvent, MouseEvent, WidgetEvent},
    geom::Rect,
    graphics::{self, Graphics},
    widget::Widget,
};

/// A log shared between probes. Entries read `"<name>: <hook> ..."`.
pub type Log = Rc<RefCell<Vec<String>>>;

/// A widget that records every hook call in a shared [`Log`].
///
/// Probes ignore input unless built with [`consuming`](Self::consuming), and
/// hide their children from hit-testing unless built with
/// [`container`](Self::container).
#[derive(Debug, Clone)]
pub struct Probe {
    /// Name used in log entries.
    name: String,
    /// Shared log.
    log: Log,
    /// Consume key and mouse events.
    consume: bool,
    /// Report the whole dimension as children area.
    container: bool,
}

impl Probe {
    /// A fresh, empty log.
    pub fn log() -> Log {
        Rc::default()
    }

    /// Drain a log.
    pub fn take(log: &Log) -> Vec<String> {
        mem::take(&mut *log.borrow_mut())
    }

    /// Construct a probe recording into `log`.
    pub fn new(name: impl Into<String>, log: &Log) -> Self {
        Self {
            name: name.into(),
            log: log.clone(),
            consume: false,
            container: false,
        }
    }

    /// Build a probe that consumes key and mouse events.
    pub fn consuming(mut self) -> Self {
        self.consume = true;
        self
    }

    /// Build a probe that lays out and hit-tests children.
    pub fn container(mut self) -> Self {
        self.container = true;
        self
    }

    /// Append an entry.
    fn record(&self, what: impl AsRef<str>) {
        self.log
            .borrow_mut()
            .push(format!("{}: {}", self.name, what.as_ref()));
    }

    /// Outcome returned for input events.
    fn outcome(&self) -> EventOutcome {
        if self.consume {
            EventOutcome::Handle
        } else {
            EventOutcome::Ignore
        }
    }
}

impl Widget for Probe {
    fn draw(&mut self, _g: &mut dyn Graphics, _ctx: &DrawContext) -> Result<()> {
        self.record("draw");
        Ok(())
    }

    fn draw_frame(&mut self, g: &mut dyn Graphics, ctx: &DrawContext) -> Result<()> {
        self.record("frame");
        let frame = ctx.frame_size();
        let outer = ctx.dimension().expand(frame).at_origin();
        graphics::draw_bevel_frame(g, &ctx.palette(), outer, frame)
    }

    fn logic(&mut self, _ctx: &mut Context) -> Result<()> {
        self.record("logic");
        Ok(())
    }

    fn children_area(&self, size: Rect) -> Option<Rect> {
        self.container.then_some(size)
    }

    fn on_key(&mut self, event: &KeyEvent, _ctx: &mut Context) -> Result<EventOutcome> {
        self.record(format!("key {:?} {:?}", event.action, event.key.key));
        Ok(self.outcome())
    }

    fn on_mouse(&mut self, event: &MouseEvent, _ctx: &mut Context) -> Result<EventOutcome> {
        self.record(format!(
            "mouse {:?} {},{}",
            event.kind, event.location.x, event.location.y
        ));
        Ok(self.outcome())
    }

    fn on_focus(&mut self, event: &FocusEvent, _ctx: &mut Context) -> Result<()> {
        self.record(format!("focus {:?}", event.kind));
        Ok(())
    }

    fn on_action(&mut self, event: &ActionEvent, _ctx: &mut Context) -> Result<()> {
        self.record(format!("action {}", event.id));
        Ok(())
    }

    fn on_widget_event(&mut self, event: &WidgetEvent, _ctx: &mut Context) -> Result<()> {
        self.record(format!("{:?}", event.kind));
        Ok(())
    }

    fn font_changed(&mut self, _ctx: &mut Context) -> Result<()> {
        self.record("font");
        Ok(())
    }

    fn on_destroy(&mut self, _ctx: &mut Context) -> Result<()> {
        self.record("destroy");
        Ok(())
    }
}
