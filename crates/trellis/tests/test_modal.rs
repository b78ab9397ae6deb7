//! Integration tests for modal focus and modal mouse input focus.

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use trellis::{
        FocusManager, NodeId,
        error::{Error, Result},
        event::Button,
        geom::Rect,
        testing::{Harness, Log, Probe},
    };

    /// A top widget at (0,0,100,100) holding `outside` and `dialog`.
    struct Fixture {
        /// Driver.
        h: Harness,
        /// Shared probe log.
        log: Log,
        /// Focusable widget outside the dialog at (0,0,20,20).
        outside: NodeId,
        /// Dialog container at (50,50,40,40).
        dialog: NodeId,
        /// Focusable widget inside the dialog at (5,5,10,10).
        inner: NodeId,
    }

    fn fixture() -> Result<Fixture> {
        let log = Probe::log();
        let mut h = Harness::default();
        let core = h.gui.core_mut();
        let top: NodeId = core.create(Probe::new("top", &log).container()).into();
        let outside: NodeId = core.create(Probe::new("outside", &log)).into();
        let dialog: NodeId = core.create(Probe::new("dialog", &log).container()).into();
        let inner: NodeId = core.create(Probe::new("inner", &log)).into();
        core.set_dimension(outside, Rect::new(0, 0, 20, 20))?;
        core.set_dimension(dialog, Rect::new(50, 50, 40, 40))?;
        core.set_dimension(inner, Rect::new(5, 5, 10, 10))?;
        for id in [outside, dialog, inner] {
            core.set_focusable(id, true)?;
        }
        core.add(top, outside)?;
        core.add(top, dialog)?;
        core.add(dialog, inner)?;
        h.set_top(top, Rect::new(0, 0, 100, 100))?;
        Probe::take(&log);
        Ok(Fixture {
            h,
            log,
            outside,
            dialog,
            inner,
        })
    }

    #[test]
    fn holder_only() -> Result<()> {
        let Fixture {
            mut h,
            outside,
            dialog,
            inner,
            ..
        } = fixture()?;
        let core = h.gui.core_mut();

        core.request_modal_focus(dialog)?;
        // Re-requesting by the holder is fine.
        core.request_modal_focus(dialog)?;
        assert_eq!(
            core.request_modal_focus(outside),
            Err(Error::ModalFocusHeld(dialog))
        );
        assert!(core.is_modal_focused(inner));
        assert!(!core.is_modal_focused(outside));

        // Only the holder can release.
        core.release_modal_focus(outside)?;
        assert!(core.is_modal_focused(dialog));
        core.release_modal_focus(dialog)?;
        assert!(!core.is_modal_focused(dialog));
        core.request_modal_focus(outside)?;

        core.request_modal_mouse_input_focus(dialog)?;
        assert_eq!(
            core.request_modal_mouse_input_focus(inner),
            Err(Error::ModalMouseInputFocusHeld(dialog))
        );
        assert!(core.is_modal_mouse_input_focused(inner));
        core.release_modal_mouse_input_focus(inner)?;
        assert!(core.is_modal_mouse_input_focused(inner));
        core.release_modal_mouse_input_focus(dialog)?;
        assert!(!core.is_modal_mouse_input_focused(inner));
        Ok(())
    }

    #[test]
    fn focus_restricted() -> Result<()> {
        let Fixture {
            mut h,
            outside,
            dialog,
            inner,
            ..
        } = fixture()?;
        let handler = h.gui.focus_handler();
        let core = h.gui.core_mut();

        core.request_focus(outside)?;
        core.request_modal_focus(dialog)?;
        assert!(!core.is_focused(outside));
        assert!(!core.request_focus(outside)?);
        assert!(core.request_focus(inner)?);

        // Cycling never leaves the dialog.
        core.focus_next(handler)?;
        assert!(core.is_focused(dialog));
        core.focus_next(handler)?;
        assert!(core.is_focused(inner));
        core.focus_previous(handler)?;
        assert!(core.is_focused(dialog));

        core.release_modal_focus(dialog)?;
        assert!(core.request_focus(outside)?);
        Ok(())
    }

    #[test]
    fn keys_stop_at_holder() -> Result<()> {
        let Fixture {
            mut h,
            log,
            dialog,
            inner,
            ..
        } = fixture()?;
        h.gui.core_mut().request_focus(inner)?;
        h.gui.core_mut().request_modal_focus(dialog)?;
        Probe::take(&log);

        h.key('x')?;
        assert_eq!(
            Probe::take(&log),
            vec![
                "inner: key Pressed Char('x')",
                "dialog: key Pressed Char('x')",
                "inner: key Released Char('x')",
                "dialog: key Released Char('x')",
            ]
        );
        Ok(())
    }

    #[test]
    fn mouse_outside_dropped() -> Result<()> {
        let Fixture {
            mut h,
            log,
            outside,
            dialog,
            ..
        } = fixture()?;
        h.gui.core_mut().request_modal_focus(dialog)?;

        h.click((5, 5))?;
        assert!(Probe::take(&log).is_empty());
        assert!(!h.gui.core().is_focused(outside));

        h.click((57, 57))?;
        assert_eq!(
            Probe::take(&log),
            vec![
                "dialog: mouse Entered 7,7",
                "inner: mouse Entered 2,2",
                "inner: focus Gained",
                "inner: mouse Pressed 2,2",
                "dialog: mouse Pressed 7,7",
                "inner: mouse Released 2,2",
                "dialog: mouse Released 7,7",
                "inner: mouse Clicked 2,2",
                "dialog: mouse Clicked 7,7",
            ]
        );
        Ok(())
    }

    #[test]
    fn mouse_input_redirected() -> Result<()> {
        let Fixture {
            mut h,
            log,
            outside,
            dialog,
            ..
        } = fixture()?;
        h.gui.core_mut().request_focus(outside)?;
        h.gui.core_mut().request_modal_mouse_input_focus(dialog)?;
        // Keyboard focus is untouched.
        assert!(h.gui.core().is_focused(outside));
        h.move_to((5, 5))?;
        Probe::take(&log);

        h.press(Button::Left, (5, 5))?;
        assert_eq!(
            Probe::take(&log),
            vec![
                "outside: focus Lost",
                "dialog: focus Gained",
                "dialog: mouse Pressed -45,-45",
            ]
        );
        h.release(Button::Left, (5, 5))?;
        assert!(h.gui.core().is_focused(dialog));
        Ok(())
    }
}
