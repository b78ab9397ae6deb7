//! Widget trait and event outcome types.

use std::any::{Any, type_name};

use crate::{
    Context, DrawContext,
    error::Result,
    event::{ActionEvent, FocusEvent, KeyEvent, MouseEvent, WidgetEvent},
    geom::Rect,
    graphics::{self, Graphics},
};

/// The result of an event handler.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EventOutcome {
    /// The event was processed and propagation stops.
    Handle,
    /// The event was processed without a state change and propagation stops.
    Consume,
    /// The event was not handled and will bubble up the tree.
    Ignore,
}

impl EventOutcome {
    /// Was the event consumed?
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignore)
    }

    /// Combine the outcomes of two receivers on the same widget. `Handle`
    /// wins over `Consume`, which wins over `Ignore`.
    pub fn merge(self, other: Self) -> Self {
        match (self, other) {
            (Self::Handle, _) | (_, Self::Handle) => Self::Handle,
            (Self::Consume, _) | (_, Self::Consume) => Self::Consume,
            _ => Self::Ignore,
        }
    }
}

/// Widgets are the behavior attached to nodes in the Core arena.
///
/// Geometry, flags, colors and listeners live on the node and are managed
/// through [`Core`](crate::Core). A widget implements only the hooks it
/// needs; every hook defaults to doing nothing.
pub trait Widget: Any {
    /// Draw the widget's own content. Coordinates are relative to the
    /// widget's dimension, and drawing is clipped to it. Children are drawn
    /// afterwards by the toolkit.
    fn draw(&mut self, _g: &mut dyn Graphics, _ctx: &DrawContext) -> Result<()> {
        Ok(())
    }

    /// Draw the frame around the widget. Coordinates are relative to the
    /// dimension expanded by the frame size on every side.
    fn draw_frame(&mut self, g: &mut dyn Graphics, ctx: &DrawContext) -> Result<()> {
        let frame = ctx.frame_size();
        let dim = ctx.dimension().expand(frame);
        graphics::draw_bevel_frame(g, &ctx.palette(), dim.at_origin(), frame)
    }

    /// Per-frame logic tick.
    fn logic(&mut self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// The area, relative to the widget, in which children are positioned,
    /// drawn and hit-tested. `size` is the widget's dimension at the origin.
    /// `None` means the widget does not show children.
    fn children_area(&self, _size: Rect) -> Option<Rect> {
        None
    }

    /// Handle a key event. Called before the widget's key listeners.
    fn on_key(&mut self, _event: &KeyEvent, _ctx: &mut Context) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// Handle a mouse event. Called before the widget's mouse listeners.
    fn on_mouse(&mut self, _event: &MouseEvent, _ctx: &mut Context) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// The widget gained or lost focus.
    fn on_focus(&mut self, _event: &FocusEvent, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// The widget fired an action event.
    fn on_action(&mut self, _event: &ActionEvent, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// The widget or one of its ancestors moved, resized, or changed
    /// visibility.
    fn on_widget_event(&mut self, _event: &WidgetEvent, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// The font used by the widget changed.
    fn font_changed(&mut self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// Called once, pre-order, before the widget's subtree is destroyed.
    /// Detaching a child here keeps that child alive.
    fn on_destroy(&mut self, _ctx: &mut Context) -> Result<()> {
        Ok(())
    }

    /// Name used in diagnostics.
    fn name(&self) -> &'static str {
        let name = type_name::<Self>();
        name.rsplit("::").next().unwrap_or(name)
    }
}

/// Convert widgets into boxed trait objects.
impl<W> From<W> for Box<dyn Widget>
where
    W: Widget + 'static,
{
    fn from(widget: W) -> Self {
        Box::new(widget)
    }
}
