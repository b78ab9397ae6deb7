//! Tab header widget.

use crate::{
    Context, DrawContext, EventOutcome, FocusManager, NodeId,
    error::{Error, Result},
    event::{MouseEvent, MouseEventKind},
    geom::{Point, Rect},
    graphics::Graphics,
    style::Color,
    widget::Widget,
    widgets::TabbedArea,
};

/// Space between the caption and the tab edge.
const PADDING: u32 = 4;

/// A tab header showing a caption. Tabs are laid out by the
/// [`TabbedArea`] they belong to.
#[derive(Debug, Clone)]
pub struct Tab {
    /// Caption text.
    caption: String,
    /// Owning tabbed area.
    tabbed_area: Option<NodeId>,
    /// The pointer is over the tab.
    has_mouse: bool,
}

impl Tab {
    /// Construct a tab with a caption.
    pub fn new(caption: impl Into<String>) -> Self {
        Self {
            caption: caption.into(),
            tabbed_area: None,
            has_mouse: false,
        }
    }

    /// The caption.
    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Replace the caption and resize to fit it.
    pub fn set_caption(&mut self, ctx: &mut Context, caption: impl Into<String>) -> Result<()> {
        self.caption = caption.into();
        self.adjust_size(ctx)
    }

    /// The tabbed area this tab belongs to.
    pub fn tabbed_area(&self) -> Option<NodeId> {
        self.tabbed_area
    }

    /// Set the owning tabbed area.
    pub(crate) fn set_tabbed_area(&mut self, area: Option<NodeId>) {
        self.tabbed_area = area;
    }

    /// Is the pointer over the tab?
    pub fn has_mouse(&self) -> bool {
        self.has_mouse
    }

    /// Resize to the caption plus padding on every side, then lay out the
    /// owning area's strip again.
    pub fn adjust_size(&self, ctx: &mut Context) -> Result<()> {
        let font = ctx.font();
        let pos = ctx.dimension().tl;
        ctx.set_dimension(Rect::new(
            pos.x,
            pos.y,
            font.width(&self.caption) + 2 * PADDING,
            font.height() + 2 * PADDING,
        ))?;
        let Some(area) = self.tabbed_area else {
            return Ok(());
        };
        // The area is busy when it is the caller.
        match ctx
            .core_mut()
            .with_widget::<TabbedArea, _>(area, |ta, ctx| ta.relayout(ctx))
        {
            Ok(()) | Err(Error::NodeNotFound(_) | Error::ReentrantWidget(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }

    /// Is this tab the selected tab of its area?
    fn is_selected(&self, ctx: &DrawContext) -> bool {
        self.tabbed_area
            .and_then(|a| ctx.core().widget::<TabbedArea>(a))
            .is_some_and(|a| a.is_tab_selected(ctx.id()))
    }
}

impl Widget for Tab {
    fn draw(&mut self, g: &mut dyn Graphics, ctx: &DrawContext) -> Result<()> {
        let palette = ctx.palette();
        let dim = ctx.dimension();
        let (w, h) = (dim.w as i32, dim.h as i32);
        let selected = self.is_selected(ctx);

        let face = if selected || self.has_mouse {
            palette.base
        } else {
            palette.base.shadow()
        };
        g.set_color(face);
        g.fill_rectangle(Rect::new(1, 1, dim.w.saturating_sub(2), dim.h.saturating_sub(1)))?;

        g.set_color(palette.base.highlight());
        g.draw_line(Point::new(0, 0), Point::new(w - 1, 0))?;
        g.draw_line(Point::new(0, 1), Point::new(0, h - 1))?;
        g.set_color(palette.base.shadow());
        g.draw_line(Point::new(w - 1, 1), Point::new(w - 1, h - 1))?;

        g.set_color(palette.foreground);
        ctx.font().draw_string(
            g,
            &self.caption,
            Point::new(PADDING as i32, PADDING as i32),
        )?;

        if selected && self.tabbed_area.is_some_and(|a| ctx.core().is_focused(a)) {
            g.set_color(Color::BLACK);
            g.draw_rectangle(Rect::new(2, 2, dim.w.saturating_sub(4), dim.h.saturating_sub(4)))?;
        }
        Ok(())
    }

    fn on_mouse(&mut self, event: &MouseEvent, _ctx: &mut Context) -> Result<EventOutcome> {
        match event.kind {
            MouseEventKind::Entered => self.has_mouse = true,
            MouseEventKind::Exited => self.has_mouse = false,
            _ => {}
        }
        Ok(EventOutcome::Ignore)
    }

    fn font_changed(&mut self, ctx: &mut Context) -> Result<()> {
        self.adjust_size(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Core, widgets::Container};

    #[test]
    fn sizing() -> Result<()> {
        let mut core = Core::new();
        let tab = core.create(Tab::new("abc"));
        core.with_typed(tab, |t, ctx| t.adjust_size(ctx))?;
        assert_eq!(core.dimension(tab)?, Rect::new(0, 0, 24 + 8, 8 + 8));

        core.with_typed(tab, |t, ctx| t.set_caption(ctx, "a"))?;
        assert_eq!(core.dimension(tab)?.w, 8 + 8);
        assert_eq!(core.widget::<Tab>(tab).map(Tab::caption), Some("a"));
        Ok(())
    }

    #[test]
    fn renaming_moves_later_tabs() -> Result<()> {
        let mut core = Core::new();
        let area = TabbedArea::install(&mut core)?;
        core.set_size(area, 400, 100)?;
        let mut tabs = Vec::new();
        for caption in ["one", "two"] {
            let page: NodeId = core.create(Container::new()).into();
            tabs.push(core.with_typed(area, |ta, ctx| ta.add_tab(ctx, caption, page))?);
        }
        assert_eq!(core.dimension(tabs[1])?.tl.x, 32);

        core.with_typed(tabs[0], |t, ctx| t.set_caption(ctx, "a much longer caption"))?;
        let first = core.dimension(tabs[0])?;
        assert_eq!(first.w, 21 * 8 + 8);
        assert_eq!(core.dimension(tabs[1])?.tl.x, first.right());
        Ok(())
    }
}
