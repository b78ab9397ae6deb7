//! Integration tests for focus and tab navigation.

#[cfg(test)]
mod tests {
    use trellis::{
        FocusManager, NodeId,
        config::GuiConfig,
        error::Result,
        event::{KeyCode, key::Shift},
        geom::Rect,
        testing::{Harness, Log, Probe},
    };

    /// A 100x100 top probe with three focusable children side by side.
    fn setup(config: GuiConfig) -> Result<(Harness, Log, NodeId, [NodeId; 3])> {
        let log = Probe::log();
        let mut h = Harness::new(config);
        let core = h.gui.core_mut();
        let top: NodeId = core.create(Probe::new("top", &log).container()).into();
        let mut kids = [top; 3];
        for (i, name) in ["a", "b", "c"].into_iter().enumerate() {
            let id: NodeId = core.create(Probe::new(name, &log)).into();
            core.set_dimension(id, Rect::new(i as i32 * 30, 0, 20, 20))?;
            core.set_focusable(id, true)?;
            core.add(top, id)?;
            kids[i] = id;
        }
        h.set_top(top, Rect::new(0, 0, 100, 100))?;
        Probe::take(&log);
        Ok((h, log, top, kids))
    }

    /// Every node holding focus.
    fn focused(h: &Harness, ids: &[NodeId]) -> Vec<NodeId> {
        ids.iter()
            .copied()
            .filter(|id| h.gui.core().is_focused(*id))
            .collect()
    }

    #[test]
    fn request_focus() -> Result<()> {
        let (mut h, log, top, [a, b, c]) = setup(GuiConfig::default())?;
        let core = h.gui.core_mut();

        // The top probe is not focusable.
        assert!(!core.request_focus(top)?);
        assert!(!core.is_focused(top));

        assert!(core.request_focus(a)?);
        assert!(core.request_focus(b)?);
        assert_eq!(
            Probe::take(&log),
            vec!["a: focus Gained", "a: focus Lost", "b: focus Gained"]
        );
        assert_eq!(focused(&h, &[top, a, b, c]), vec![b]);

        let handler = h.gui.focus_handler();
        h.gui.core_mut().focus_none(handler)?;
        assert!(focused(&h, &[top, a, b, c]).is_empty());
        Ok(())
    }

    #[test]
    fn focus_dropped_when_unfocusable() -> Result<()> {
        let (mut h, _, _, [a, b, c]) = setup(GuiConfig::default())?;
        let core = h.gui.core_mut();

        core.request_focus(a)?;
        core.set_visible(a, false)?;
        assert!(!core.is_focused(a));
        assert!(!core.request_focus(a)?);

        core.request_focus(b)?;
        core.set_enabled(b, false)?;
        assert!(!core.is_focused(b));

        core.request_focus(c)?;
        core.set_focusable(c, false)?;
        assert!(!core.is_focused(c));
        Ok(())
    }

    #[test]
    fn cycling() -> Result<()> {
        let (mut h, _, _, [a, b, c]) = setup(GuiConfig::default())?;
        let handler = h.gui.focus_handler();
        let core = h.gui.core_mut();

        core.focus_next(handler)?;
        assert!(core.is_focused(a));
        core.focus_next(handler)?;
        core.focus_next(handler)?;
        assert!(core.is_focused(c));
        core.focus_next(handler)?;
        assert!(core.is_focused(a));
        core.focus_previous(handler)?;
        assert!(core.is_focused(c));

        // Disabled widgets are skipped.
        core.set_enabled(a, false)?;
        core.focus_next(handler)?;
        assert!(core.is_focused(b));
        Ok(())
    }

    #[test]
    fn tab_keys() -> Result<()> {
        let (mut h, log, _, [a, b, c]) = setup(GuiConfig::default())?;
        h.gui.core_mut().request_focus(a)?;
        Probe::take(&log);

        h.key(KeyCode::Tab)?;
        assert!(h.gui.core().is_focused(b));
        // The focused widget and its ancestors see the key before navigation.
        assert_eq!(
            Probe::take(&log),
            vec![
                "a: key Pressed Tab",
                "top: key Pressed Tab",
                "a: focus Lost",
                "b: focus Gained",
                "b: key Released Tab",
                "top: key Released Tab",
            ]
        );

        h.gui.core_mut().set_tab_in_enabled(c, false)?;
        h.key(KeyCode::Tab)?;
        assert!(h.gui.core().is_focused(a));

        h.key(Shift + KeyCode::Tab)?;
        assert!(h.gui.core().is_focused(b));
        h.key(KeyCode::BackTab)?;
        assert!(h.gui.core().is_focused(a));

        h.gui.core_mut().set_tab_out_enabled(a, false)?;
        h.key(KeyCode::Tab)?;
        assert!(h.gui.core().is_focused(a));

        // Explicit navigation ignores tab flags.
        let handler = h.gui.focus_handler();
        h.gui.core_mut().focus_next(handler)?;
        assert!(h.gui.core().is_focused(b));
        Ok(())
    }

    #[test]
    fn tab_navigation_disabled() -> Result<()> {
        let config = GuiConfig {
            tab_navigation: false,
            ..GuiConfig::default()
        };
        let (mut h, _, _, [a, _, _]) = setup(config)?;
        h.gui.core_mut().request_focus(a)?;
        h.key(KeyCode::Tab)?;
        assert!(h.gui.core().is_focused(a));
        Ok(())
    }

    #[test]
    fn consumed_tab_does_not_navigate() -> Result<()> {
        let log = Probe::log();
        let mut h = Harness::default();
        let core = h.gui.core_mut();
        let top: NodeId = core.create(Probe::new("top", &log).container()).into();
        let a: NodeId = core.create(Probe::new("a", &log).consuming()).into();
        let b: NodeId = core.create(Probe::new("b", &log)).into();
        for id in [a, b] {
            core.set_focusable(id, true)?;
            core.add(top, id)?;
        }
        h.set_top(top, Rect::new(0, 0, 10, 10))?;
        h.gui.core_mut().request_focus(a)?;
        h.key(KeyCode::Tab)?;
        assert!(h.gui.core().is_focused(a));
        Ok(())
    }

    #[test]
    fn internal_focus_handler() -> Result<()> {
        let (mut h, _, top, [a, _, _]) = setup(GuiConfig::default())?;
        let log = Probe::log();
        let outer = h.gui.focus_handler();
        let core = h.gui.core_mut();

        let panel: NodeId = core.create(Probe::new("panel", &log).container()).into();
        core.set_focusable(panel, true)?;
        let inner = core.create_internal_focus_handler(panel)?;
        let x: NodeId = core.create(Probe::new("x", &log)).into();
        let y: NodeId = core.create(Probe::new("y", &log)).into();
        for id in [x, y] {
            core.set_focusable(id, true)?;
            core.add(panel, id)?;
        }
        core.add(top, panel)?;

        assert_eq!(core.focus_handler_of(x), Some(inner));
        assert_eq!(core.focus_handler_of(panel), Some(outer));

        core.request_focus(a)?;
        core.request_focus(x)?;
        // Each handler keeps its own focus.
        assert!(core.is_focused(a));
        assert!(core.is_focused(x));

        // Key input descends through the focused panel's handler.
        core.request_focus(panel)?;
        assert_eq!(h.gui.key_target(), Some(x));
        h.key('k')?;
        assert_eq!(
            Probe::take(&log),
            vec![
                "x: focus Gained",
                "panel: focus Gained",
                "x: key Pressed Char('k')",
                "panel: key Pressed Char('k')",
                "x: key Released Char('k')",
                "panel: key Released Char('k')",
            ]
        );

        // Tab moves focus inside the handler managing the key target.
        h.key(KeyCode::Tab)?;
        assert!(h.gui.core().is_focused(y));
        assert!(h.gui.core().is_focused(panel));
        Ok(())
    }
}
