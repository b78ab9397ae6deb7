//! Tabbed area widget.
//!
//! A `TabbedArea` shows a strip of [`Tab`] headers above a content area.
//! Each tab is paired with a content widget, and only the content of the
//! selected tab is attached to the tree. The area owns the headers it
//! creates from captions; caller-made tabs and all content widgets remain
//! the caller's.

use tracing::debug;

use crate::{
    Context, Core, DrawContext, EventOutcome, FocusManager, NodeId, TypedId,
    error::{Error, Result},
    event::{
        KeyAction, KeyCode, KeyEvent, MouseEvent, MouseEventKind, WidgetEvent, WidgetEventKind,
        mouse::Button,
    },
    geom::{Point, Rect},
    graphics::Graphics,
    widget::Widget,
    widgets::{Container, Tab},
};

/// A tab strip with a single visible content widget.
///
/// Create one with [`TabbedArea::install`] and drive it through
/// [`Core::with_typed`]:
///
/// ```
/// use trellis::{Core, widgets::{Container, TabbedArea}};
///
/// # fn main() -> trellis::error::Result<()> {
/// let mut core = Core::new();
/// let area = TabbedArea::install(&mut core)?;
/// let page = core.create(Container::new());
/// core.with_typed(area, |ta, ctx| ta.add_tab(ctx, "First", page.into()).map(|_| ()))?;
/// assert_eq!(core.widget::<TabbedArea>(area).map(TabbedArea::tab_count), Some(1));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct TabbedArea {
    /// Holds the tab headers.
    tab_container: NodeId,
    /// Holds the selected content widget.
    widget_container: NodeId,
    /// Tab and content pairs, in strip order.
    tabs: Vec<(NodeId, NodeId)>,
    /// Index of the selected pair.
    selected: Option<usize>,
    /// Tabs created by the area from a caption.
    owned: Vec<NodeId>,
}

impl TabbedArea {
    /// Create a tabbed area and its internal containers in the arena.
    pub fn install(core: &mut Core) -> Result<TypedId<Self>> {
        let tab_container: NodeId = core.create(Container::transparent()).into();
        let widget_container: NodeId = core.create(Container::new()).into();
        let area = core.create(Self {
            tab_container,
            widget_container,
            tabs: Vec::new(),
            selected: None,
            owned: Vec::new(),
        });
        core.add(area, tab_container)?;
        core.add(area, widget_container)?;
        core.set_focusable(area, true)?;
        debug!(area = ?area.id(), "tabbed area");
        Ok(area)
    }

    /// The container holding the tab headers.
    pub fn tab_container(&self) -> NodeId {
        self.tab_container
    }

    /// The container holding the selected content.
    pub fn widget_container(&self) -> NodeId {
        self.widget_container
    }

    /// Number of tabs.
    pub fn tab_count(&self) -> usize {
        self.tabs.len()
    }

    /// Tab and content pairs in strip order.
    pub fn tabs(&self) -> &[(NodeId, NodeId)] {
        &self.tabs
    }

    /// Index of the selected tab.
    pub fn selected_tab_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected tab.
    pub fn selected_tab(&self) -> Option<NodeId> {
        self.selected.and_then(|i| self.tabs.get(i)).map(|(t, _)| *t)
    }

    /// Is the tab at `index` selected?
    pub fn is_tab_selected_at(&self, index: usize) -> bool {
        self.selected == Some(index) && index < self.tabs.len()
    }

    /// Is `tab` the selected tab?
    pub fn is_tab_selected(&self, tab: impl Into<NodeId>) -> bool {
        let tab = tab.into();
        self.selected_tab() == Some(tab)
    }

    /// Index of a tab in the strip.
    pub fn tab_index(&self, tab: impl Into<NodeId>) -> Option<usize> {
        let tab = tab.into();
        self.tabs.iter().position(|(t, _)| *t == tab)
    }

    /// Add a tab with a caption. The area creates and owns the header.
    /// The first tab added is selected.
    pub fn add_tab(
        &mut self,
        ctx: &mut Context,
        caption: impl Into<String>,
        content: NodeId,
    ) -> Result<TypedId<Tab>> {
        self.prune(ctx)?;
        self.check_content(ctx, content)?;
        let tab = ctx.core_mut().create(Tab::new(caption));
        self.owned.push(tab.id());
        if let Err(e) = self.push_tab(ctx, tab, content) {
            self.owned.retain(|t| *t != tab.id());
            ctx.core_mut().destroy(tab)?;
            return Err(e);
        }
        Ok(tab)
    }

    /// Add a caller-made tab. The caller keeps ownership of the header.
    /// The first tab added is selected.
    pub fn add_tab_with(
        &mut self,
        ctx: &mut Context,
        tab: TypedId<Tab>,
        content: NodeId,
    ) -> Result<()> {
        self.prune(ctx)?;
        self.check_content(ctx, content)?;
        self.push_tab(ctx, tab, content)
    }

    /// Content must exist and must not contain the area.
    fn check_content(&self, ctx: &Context, content: NodeId) -> Result<()> {
        let core = ctx.core();
        core.node_ref(content)?;
        if core.is_ancestor(content, self.widget_container) {
            return Err(Error::WouldCreateCycle {
                parent: self.widget_container,
                child: content,
            });
        }
        Ok(())
    }

    /// Attach a header and record the pair. On failure the header is
    /// detached again and no pair is recorded.
    fn push_tab(&mut self, ctx: &mut Context, tab: TypedId<Tab>, content: NodeId) -> Result<()> {
        let area = ctx.id();
        ctx.core_mut().add(self.tab_container, tab)?;
        self.tabs.push((tab.id(), content));
        let mut attached = ctx.core_mut().with_typed(tab, |t, ctx| {
            t.set_tabbed_area(Some(area));
            t.adjust_size(ctx)
        });
        if attached.is_ok() && self.selected.is_none() {
            attached = self.select(ctx, 0);
        }
        if let Err(e) = attached {
            self.tabs.pop();
            let core = ctx.core_mut();
            core.remove(self.tab_container, tab)?;
            core.with_typed(tab, |t, _| {
                t.set_tabbed_area(None);
                Ok(())
            })?;
            return Err(e);
        }
        debug!(?area, tab = ?tab.id(), ?content, "add tab");
        self.relayout(ctx)
    }

    /// Remove the tab at `index`. An owned header is destroyed, and the
    /// content is detached. If the tab was selected, the previous tab is
    /// selected instead, or the first tab when the first was removed.
    pub fn remove_tab_at(&mut self, ctx: &mut Context, index: usize) -> Result<()> {
        self.prune(ctx)?;
        if index >= self.tabs.len() {
            return Err(Error::TabIndexOutOfRange {
                index,
                count: self.tabs.len(),
            });
        }
        self.remove_index(ctx, index)?;
        self.relayout(ctx)
    }

    /// Remove a tab. Fails with `UnknownTab` if the tab is not in the strip.
    pub fn remove_tab(&mut self, ctx: &mut Context, tab: impl Into<NodeId>) -> Result<()> {
        let tab = tab.into();
        self.prune(ctx)?;
        let index = self.tab_index(tab).ok_or(Error::UnknownTab(tab))?;
        self.remove_index(ctx, index)?;
        self.relayout(ctx)
    }

    /// Select the tab at `index`. An invalid index leaves the selection
    /// unchanged.
    pub fn set_selected_tab_at(&mut self, ctx: &mut Context, index: usize) -> Result<()> {
        self.prune(ctx)?;
        if index < self.tabs.len() {
            self.select(ctx, index)?;
        }
        Ok(())
    }

    /// Select a tab. An unknown tab leaves the selection unchanged.
    pub fn set_selected_tab(&mut self, ctx: &mut Context, tab: impl Into<NodeId>) -> Result<()> {
        let tab = tab.into();
        self.prune(ctx)?;
        if let Some(index) = self.tab_index(tab) {
            self.select(ctx, index)?;
        }
        Ok(())
    }

    /// Swap the visible content for the pair at `index` and lay out the
    /// strip. The new content is attached before the old one is detached,
    /// so a failure leaves the previous selection in place.
    fn select(&mut self, ctx: &mut Context, index: usize) -> Result<()> {
        if self.selected == Some(index) {
            return Ok(());
        }
        let Some((_, content)) = self.tabs.get(index).copied() else {
            return Ok(());
        };
        let previous = self
            .selected
            .and_then(|i| self.tabs.get(i))
            .map(|(_, c)| *c);
        if previous != Some(content) {
            self.check_content(ctx, content)?;
            let core = ctx.core_mut();
            core.detach(content)?;
            core.add(self.widget_container, content)?;
            if let Some(prev) = previous {
                self.detach_content(core, prev)?;
            }
        }
        self.selected = Some(index);
        debug!(area = ?ctx.id(), selected = ?self.selected, "select tab");
        self.relayout(ctx)
    }

    /// Unlink the pair at a valid index without reselecting or laying out.
    /// Missing nodes are tolerated. Returns `true` if the pair was selected.
    fn unlink(&mut self, core: &mut Core, index: usize) -> Result<bool> {
        let (tab, content) = self.tabs.remove(index);
        let was_selected = self.selected == Some(index);
        if was_selected {
            self.selected = None;
        } else if let Some(s) = self.selected
            && s > index
        {
            self.selected = Some(s - 1);
        }

        self.detach_content(core, content)?;
        if self.owned.contains(&tab) {
            self.owned.retain(|t| *t != tab);
            if core.exists(tab) {
                core.destroy(tab)?;
            }
        } else if core.exists(tab) {
            if core.parent(tab) == Some(self.tab_container) {
                core.remove(self.tab_container, tab)?;
            }
            match core.with_widget::<Tab, _>(tab, |t, _| {
                t.set_tabbed_area(None);
                Ok(())
            }) {
                Ok(()) | Err(Error::ReentrantWidget(_)) => {}
                Err(e) => return Err(e),
            }
        }
        debug!(?tab, ?content, "remove tab");
        Ok(was_selected)
    }

    /// Remove the pair at a valid index, selecting its left neighbour if it
    /// was selected.
    fn remove_index(&mut self, ctx: &mut Context, index: usize) -> Result<()> {
        if self.unlink(ctx.core_mut(), index)? && !self.tabs.is_empty() {
            self.select(ctx, index.saturating_sub(1))?;
        }
        Ok(())
    }

    /// Detach a content widget if it is shown in the widget container.
    fn detach_content(&self, core: &mut Core, content: NodeId) -> Result<()> {
        if core.exists(content) && core.parent(content) == Some(self.widget_container) {
            core.remove(self.widget_container, content)?;
        }
        Ok(())
    }

    /// Drop pairs whose tab or content no longer exists. A dropped selection
    /// moves to the nearest surviving tab on its left.
    fn prune(&mut self, ctx: &mut Context) -> Result<()> {
        let alive: Vec<bool> = self
            .tabs
            .iter()
            .map(|(t, c)| ctx.core().exists(*t) && ctx.core().exists(*c))
            .collect();
        if alive.iter().all(|a| *a) {
            return Ok(());
        }
        let alive_before_selected = self
            .selected
            .map(|s| alive[..s].iter().filter(|a| **a).count());

        let mut reselect = false;
        for index in (0..alive.len()).rev() {
            if !alive[index] {
                reselect |= self.unlink(ctx.core_mut(), index)?;
            }
        }
        if reselect
            && !self.tabs.is_empty()
            && let Some(before) = alive_before_selected
        {
            self.select(ctx, before.saturating_sub(1))?;
        }
        self.relayout(ctx)
    }

    /// Size the internal containers and position the tab headers.
    pub(crate) fn relayout(&self, ctx: &mut Context) -> Result<()> {
        let strip = self.strip_height(ctx.core());
        let dim = ctx.dimension();
        let core = ctx.core_mut();
        core.set_dimension(
            self.tab_container,
            Rect::new(0, 0, dim.w.saturating_sub(2), strip),
        )?;
        core.set_dimension(
            self.widget_container,
            Rect::new(
                1,
                strip as i32 + 1,
                dim.w.saturating_sub(2),
                dim.h.saturating_sub(strip + 2),
            ),
        )?;

        let mut x = 0i32;
        for (i, (tab, _)) in self.tabs.iter().enumerate() {
            let Some(node) = core.node(*tab) else {
                continue;
            };
            let frame = node.frame_size() as i32;
            let size = node.dimension();
            let drop = if self.selected == Some(i) { 0 } else { 2 };
            let y = strip as i32 - size.h as i32 - frame + drop;
            core.set_position(*tab, Point::new(x + frame, y))?;
            x += size.w as i32 + 2 * frame;
        }
        Ok(())
    }

    /// Height of the tallest tab including its frame.
    fn strip_height(&self, core: &Core) -> u32 {
        self.tabs
            .iter()
            .filter_map(|(t, _)| core.node(*t))
            .map(|n| n.dimension().h + 2 * n.frame_size())
            .max()
            .unwrap_or(0)
    }

    /// Select the tab at `index` in response to user input, firing an action
    /// event if the selection changed.
    fn user_select(&mut self, ctx: &mut Context, index: usize) -> Result<bool> {
        if index >= self.tabs.len() || self.selected == Some(index) {
            return Ok(false);
        }
        self.select(ctx, index)?;
        ctx.distribute_action_event()?;
        Ok(true)
    }
}

impl Widget for TabbedArea {
    fn draw(&mut self, g: &mut dyn Graphics, ctx: &DrawContext) -> Result<()> {
        let palette = ctx.palette();
        let dim = ctx.dimension();
        let (w, h) = (dim.w as i32, dim.h as i32);
        let strip = ctx
            .core()
            .dimension(self.tab_container)
            .map(|d| d.h as i32)
            .unwrap_or(0);

        g.set_color(palette.base.highlight());
        g.draw_line(Point::new(0, strip), Point::new(0, h - 2))?;
        g.set_color(palette.base.shadow());
        g.draw_line(Point::new(w - 1, strip + 1), Point::new(w - 1, h - 1))?;
        g.draw_line(Point::new(1, h - 1), Point::new(w - 1, h - 1))?;

        g.set_color(palette.base.highlight());
        g.draw_line(Point::new(1, strip), Point::new(w - 1, strip))?;

        if let Some(tab) = self.selected_tab()
            && let Ok(td) = ctx.core().dimension(tab)
        {
            g.set_color(palette.base);
            g.draw_line(
                Point::new(td.tl.x + 1, strip),
                Point::new(td.right() - 2, strip),
            )?;
        }
        Ok(())
    }

    fn logic(&mut self, ctx: &mut Context) -> Result<()> {
        self.prune(ctx)
    }

    fn children_area(&self, size: Rect) -> Option<Rect> {
        Some(size)
    }

    fn on_key(&mut self, event: &KeyEvent, ctx: &mut Context) -> Result<EventOutcome> {
        if event.source != ctx.id() || event.action != KeyAction::Pressed {
            return Ok(EventOutcome::Ignore);
        }
        let Some(index) = self.selected else {
            return Ok(EventOutcome::Ignore);
        };
        let changed = if event.key == KeyCode::Left {
            index > 0 && self.user_select(ctx, index - 1)?
        } else if event.key == KeyCode::Right {
            self.user_select(ctx, index + 1)?
        } else {
            false
        };
        Ok(if changed {
            EventOutcome::Handle
        } else {
            EventOutcome::Ignore
        })
    }

    fn on_mouse(&mut self, event: &MouseEvent, ctx: &mut Context) -> Result<EventOutcome> {
        if event.kind != MouseEventKind::Pressed {
            return Ok(EventOutcome::Ignore);
        }
        let mut outcome = EventOutcome::Ignore;
        if event.button == Button::Left {
            let origin = ctx.core().dimension(self.tab_container)?.tl;
            let hit = ctx
                .core()
                .widget_at(self.tab_container, event.location - origin, None)
                .and_then(|t| self.tab_index(t));
            if let Some(index) = hit
                && self.user_select(ctx, index)?
            {
                outcome = EventOutcome::Handle;
            }
        }
        if !ctx.core().is_focusable(event.source)
            && ctx.core().focus_handler_of(ctx.id()).is_some()
        {
            ctx.request_focus()?;
        }
        Ok(outcome)
    }

    fn on_widget_event(&mut self, event: &WidgetEvent, ctx: &mut Context) -> Result<()> {
        if event.source == ctx.id() && event.kind == WidgetEventKind::Resized {
            self.relayout(ctx)?;
        }
        Ok(())
    }

    fn on_destroy(&mut self, ctx: &mut Context) -> Result<()> {
        let core = ctx.core_mut();
        for (tab, content) in self.tabs.clone() {
            self.detach_content(core, content)?;
            if !self.owned.contains(&tab) && core.exists(tab) {
                core.detach(tab)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// An area sized 200x100 with `n` captioned tabs over fresh containers.
    fn area_with_tabs(core: &mut Core, n: usize) -> Result<(TypedId<TabbedArea>, Vec<NodeId>)> {
        let area = TabbedArea::install(core)?;
        core.set_size(area, 200, 100)?;
        let mut pages = Vec::new();
        for i in 0..n {
            let page: NodeId = core.create(Container::new()).into();
            core.with_typed(area, |ta, ctx| ta.add_tab(ctx, format!("t{i}"), page))?;
            pages.push(page);
        }
        Ok((area, pages))
    }

    #[test]
    fn layout() -> Result<()> {
        let mut core = Core::new();
        let (area, _) = area_with_tabs(&mut core, 3)?;
        let ta = core.widget::<TabbedArea>(area).ok_or(Error::NodeNotFound(area.id()))?;
        let tabs: Vec<NodeId> = ta.tabs().iter().map(|(t, _)| *t).collect();
        let (tc, wc) = (ta.tab_container(), ta.widget_container());

        // Each header is 2 glyphs plus padding: 24x16.
        assert_eq!(core.dimension(tabs[0])?, Rect::new(0, 0, 24, 16));
        assert_eq!(core.dimension(tabs[1])?, Rect::new(24, 2, 24, 16));
        assert_eq!(core.dimension(tabs[2])?, Rect::new(48, 2, 24, 16));
        assert_eq!(core.dimension(tc)?, Rect::new(0, 0, 198, 16));
        assert_eq!(core.dimension(wc)?, Rect::new(1, 17, 198, 82));

        core.set_size(area, 100, 50)?;
        assert_eq!(core.dimension(wc)?, Rect::new(1, 17, 98, 32));
        Ok(())
    }

    #[test]
    fn selection() -> Result<()> {
        let mut core = Core::new();
        let (area, pages) = area_with_tabs(&mut core, 3)?;
        let wc = core
            .widget::<TabbedArea>(area)
            .map(TabbedArea::widget_container)
            .ok_or(Error::NodeNotFound(area.id()))?;
        assert_eq!(core.children(wc), &[pages[0]]);

        core.with_typed(area, |ta, ctx| ta.set_selected_tab_at(ctx, 2))?;
        assert_eq!(core.children(wc), &[pages[2]]);
        assert!(core.parent(pages[0]).is_none());

        core.with_typed(area, |ta, ctx| ta.set_selected_tab_at(ctx, 9))?;
        let ta = core.widget::<TabbedArea>(area).ok_or(Error::NodeNotFound(area.id()))?;
        assert_eq!(ta.selected_tab_index(), Some(2));
        assert!(ta.is_tab_selected_at(2));
        assert!(!ta.is_tab_selected_at(0));
        Ok(())
    }

    #[test]
    fn removal() -> Result<()> {
        let mut core = Core::new();
        let (area, pages) = area_with_tabs(&mut core, 3)?;
        let first = core
            .widget::<TabbedArea>(area)
            .and_then(|ta| ta.tabs().first().map(|(t, _)| *t))
            .ok_or(Error::NodeNotFound(area.id()))?;

        core.with_typed(area, |ta, ctx| ta.set_selected_tab_at(ctx, 1))?;
        core.with_typed(area, |ta, ctx| ta.remove_tab_at(ctx, 1))?;
        let ta = core.widget::<TabbedArea>(area).ok_or(Error::NodeNotFound(area.id()))?;
        assert_eq!(ta.selected_tab_index(), Some(0));
        assert_eq!(ta.tab_count(), 2);
        assert!(core.exists(pages[1]));
        assert!(core.parent(pages[1]).is_none());

        // Owned headers are destroyed with their pair.
        core.with_typed(area, |ta, ctx| ta.remove_tab(ctx, first))?;
        assert!(!core.exists(first));
        let ta = core.widget::<TabbedArea>(area).ok_or(Error::NodeNotFound(area.id()))?;
        assert_eq!(ta.selected_tab_index(), Some(0));
        assert_eq!(ta.tabs()[0].1, pages[2]);

        assert_eq!(
            core.with_typed(area, |ta, ctx| ta.remove_tab_at(ctx, 5)),
            Err(Error::TabIndexOutOfRange { index: 5, count: 1 })
        );
        assert_eq!(
            core.with_typed(area, |ta, ctx| ta.remove_tab(ctx, first)),
            Err(Error::UnknownTab(first))
        );

        core.with_typed(area, |ta, ctx| ta.remove_tab_at(ctx, 0))?;
        let ta = core.widget::<TabbedArea>(area).ok_or(Error::NodeNotFound(area.id()))?;
        assert_eq!(ta.selected_tab_index(), None);
        assert!(core.children(ta.widget_container()).is_empty());
        Ok(())
    }

    #[test]
    fn pruning() -> Result<()> {
        let mut core = Core::new();
        let (area, pages) = area_with_tabs(&mut core, 2)?;
        core.destroy(pages[0])?;
        core.logic(area)?;
        let ta = core.widget::<TabbedArea>(area).ok_or(Error::NodeNotFound(area.id()))?;
        assert_eq!(ta.tab_count(), 1);
        assert_eq!(ta.selected_tab_index(), Some(0));
        assert_eq!(core.children(ta.widget_container()), &[pages[1]]);
        Ok(())
    }

    #[test]
    fn destroy_keeps_caller_widgets() -> Result<()> {
        let mut core = Core::new();
        let (area, pages) = area_with_tabs(&mut core, 1)?;
        let page: NodeId = core.create(Container::new()).into();
        let tab = core.create(Tab::new("mine"));
        core.with_typed(area, |ta, ctx| ta.add_tab_with(ctx, tab, page))?;
        let owned = core
            .widget::<TabbedArea>(area)
            .and_then(|ta| ta.tabs().first().map(|(t, _)| *t))
            .ok_or(Error::NodeNotFound(area.id()))?;

        core.destroy(area)?;
        assert!(!core.exists(area));
        assert!(!core.exists(owned));
        assert!(core.exists(tab));
        assert!(core.exists(pages[0]));
        assert!(core.exists(page));
        assert!(core.parent(pages[0]).is_none());
        assert!(core.parent(tab).is_none());
        Ok(())
    }

    #[test]
    fn enclosing_content_rejected() -> Result<()> {
        let mut core = Core::new();
        let root: NodeId = core.create(Container::new()).into();
        let area = TabbedArea::install(&mut core)?;
        core.add(root, area)?;
        let (tc, wc) = core
            .widget::<TabbedArea>(area)
            .map(|ta| (ta.tab_container(), ta.widget_container()))
            .ok_or(Error::NodeNotFound(area.id()))?;

        let first = core.with_typed(area, |ta, ctx| ta.add_tab(ctx, "bad", root).map(|_| ()));
        assert_eq!(
            first,
            Err(Error::WouldCreateCycle {
                parent: wc,
                child: root
            })
        );
        assert!(core.children(tc).is_empty());
        assert_eq!(core.len(), 4);

        let page: NodeId = core.create(Container::new()).into();
        core.with_typed(area, |ta, ctx| ta.add_tab(ctx, "page", page))?;
        let own: NodeId = area.into();
        assert!(
            core.with_typed(area, |ta, ctx| ta.add_tab(ctx, "self", own))
                .is_err()
        );

        let ta = core.widget::<TabbedArea>(area).ok_or(Error::NodeNotFound(own))?;
        assert_eq!(ta.tab_count(), 1);
        assert_eq!(ta.selected_tab_index(), Some(0));
        assert_eq!(core.children(wc), &[page]);
        assert_eq!(core.children(tc).len(), 1);
        Ok(())
    }
}
