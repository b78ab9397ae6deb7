//! Integration tests for key and mouse routing through the Gui.

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;
    use trellis::{
        EventOutcome, FocusManager, NodeId,
        error::Result,
        event::{Button, KeyInput, MouseEventKind, MouseInput, mouse::Action},
        geom::{Point, Rect},
        testing::{Harness, Log, Probe, RecordingListener, init_tracing},
    };

    /// A top probe at (10,10,100,100) with a child `a` at (20,20,30,30).
    fn pair() -> Result<(Harness, Log, NodeId, NodeId)> {
        init_tracing();
        let log = Probe::log();
        let mut h = Harness::default();
        let core = h.gui.core_mut();
        let top: NodeId = core.create(Probe::new("top", &log).container()).into();
        let a: NodeId = core.create(Probe::new("a", &log)).into();
        core.set_dimension(a, Rect::new(20, 20, 30, 30))?;
        core.add(top, a)?;
        h.set_top(top, Rect::new(10, 10, 100, 100))?;
        Probe::take(&log);
        Ok((h, log, top, a))
    }

    #[test]
    fn click_sequence() -> Result<()> {
        let (mut h, log, _, _) = pair()?;
        h.click((35, 36))?;
        assert_eq!(
            Probe::take(&log),
            vec![
                "top: mouse Entered 25,26",
                "a: mouse Entered 5,6",
                "a: mouse Pressed 5,6",
                "top: mouse Pressed 25,26",
                "a: mouse Released 5,6",
                "top: mouse Released 25,26",
                "a: mouse Clicked 5,6",
                "top: mouse Clicked 25,26",
            ]
        );

        h.move_to((15, 15))?;
        assert_eq!(
            Probe::take(&log),
            vec!["a: mouse Exited -15,-15", "top: mouse Moved 5,5"]
        );

        // Leaving the top widget entirely.
        h.move_to((0, 0))?;
        assert_eq!(
            Probe::take(&log),
            vec!["top: mouse Exited -10,-10", "top: mouse Moved -10,-10"]
        );
        Ok(())
    }

    #[test]
    fn click_counts() -> Result<()> {
        let (mut h, _, _, a) = pair()?;
        let rl = Rc::new(RecordingListener::new());
        h.gui.core_mut().add_mouse_listener(a, &rl)?;

        h.double_click((35, 36))?;
        let counts = |kind: MouseEventKind| -> Vec<u32> {
            rl.mouse_events()
                .iter()
                .filter(|e| e.kind == kind)
                .map(|e| e.click_count)
                .collect()
        };
        assert_eq!(counts(MouseEventKind::Pressed), vec![1, 2]);
        assert_eq!(counts(MouseEventKind::Clicked), vec![1, 2]);
        assert_eq!(counts(MouseEventKind::Entered), vec![0]);
        rl.take();

        // Far apart in time, the count restarts.
        h.click((35, 36))?;
        assert_eq!(counts(MouseEventKind::Pressed), vec![1]);
        rl.take();

        // A different button restarts the count too.
        h.click((35, 36))?;
        h.gui
            .push_mouse_input(MouseInput::pressed(Button::Right, (35, 36), 1_000_000))?;
        h.gui
            .push_mouse_input(MouseInput::pressed(Button::Right, (35, 36), 1_000_001))?;
        assert_eq!(counts(MouseEventKind::Pressed), vec![1, 1, 2]);
        Ok(())
    }

    #[test]
    fn drag() -> Result<()> {
        let (mut h, log, top, a) = pair()?;
        h.press(Button::Left, (35, 36))?;
        assert_eq!(
            h.gui.core().focus_handler(h.gui.focus_handler()).and_then(|f| f.dragged()),
            Some(a)
        );
        Probe::take(&log);

        h.move_to((100, 100))?;
        assert_eq!(
            Probe::take(&log),
            vec![
                "a: mouse Exited 70,70",
                "a: mouse Dragged 70,70",
                "top: mouse Dragged 90,90",
            ]
        );

        // The release goes to the dragged widget, without a click.
        h.release(Button::Left, (100, 100))?;
        assert_eq!(
            Probe::take(&log),
            vec!["a: mouse Released 70,70", "top: mouse Released 90,90"]
        );
        let handler = h.gui.focus_handler();
        let state = h.gui.core().focus_handler(handler);
        assert_eq!(state.and_then(|f| f.dragged()), None);
        assert_eq!(state.and_then(|f| f.last_pressed()), None);
        assert_eq!(state.and_then(|f| f.last_with_mouse()), Some(top));
        Ok(())
    }

    #[test]
    fn wheel() -> Result<()> {
        let (mut h, log, _, _) = pair()?;
        h.move_to((35, 36))?;
        Probe::take(&log);
        for action in [Action::WheelUp, Action::WheelDown] {
            h.gui
                .push_mouse_input(MouseInput::new(action, Button::None, (35, 36), 5000))?;
        }
        assert_eq!(
            Probe::take(&log),
            vec![
                "a: mouse WheelMovedUp 5,6",
                "top: mouse WheelMovedUp 25,26",
                "a: mouse WheelMovedDown 5,6",
                "top: mouse WheelMovedDown 25,26",
            ]
        );
        Ok(())
    }

    #[test]
    fn disabled_widgets_skipped() -> Result<()> {
        let (mut h, log, _, a) = pair()?;
        h.gui.core_mut().set_enabled(a, false)?;
        h.click((35, 36))?;
        assert_eq!(
            Probe::take(&log),
            vec![
                "top: mouse Entered 25,26",
                "top: mouse Pressed 25,26",
                "top: mouse Released 25,26",
                "top: mouse Clicked 25,26",
            ]
        );
        Ok(())
    }

    #[test]
    fn disabled_parent_passed_over() -> Result<()> {
        let log = Probe::log();
        let mut h = Harness::default();
        let core = h.gui.core_mut();
        let top: NodeId = core.create(Probe::new("top", &log).container()).into();
        let mid: NodeId = core.create(Probe::new("mid", &log).container()).into();
        let leaf: NodeId = core.create(Probe::new("leaf", &log)).into();
        core.set_dimension(mid, Rect::new(0, 0, 50, 50))?;
        core.set_dimension(leaf, Rect::new(0, 0, 10, 10))?;
        core.set_focusable(leaf, true)?;
        core.add(top, mid)?;
        core.add(mid, leaf)?;
        h.set_top(top, Rect::new(0, 0, 100, 100))?;

        h.gui.core_mut().set_enabled(mid, false)?;
        // Enabled state is not inherited.
        assert!(h.gui.core().is_enabled(leaf));
        assert!(h.gui.core_mut().request_focus(leaf)?);
        Probe::take(&log);

        h.key('q')?;
        h.press(Button::Left, (1, 1))?;
        assert_eq!(
            Probe::take(&log),
            vec![
                "leaf: key Pressed Char('q')",
                "top: key Pressed Char('q')",
                "leaf: key Released Char('q')",
                "top: key Released Char('q')",
                "top: mouse Entered 1,1",
                "leaf: mouse Entered 1,1",
                "leaf: mouse Pressed 1,1",
                "top: mouse Pressed 1,1",
            ]
        );
        Ok(())
    }

    #[test]
    fn consumers_stop_bubbling() -> Result<()> {
        let log = Probe::log();
        let mut h = Harness::default();
        let core = h.gui.core_mut();
        let top: NodeId = core.create(Probe::new("top", &log).container()).into();
        let leaf: NodeId = core.create(Probe::new("leaf", &log).consuming()).into();
        core.set_dimension(leaf, Rect::new(0, 0, 10, 10))?;
        core.set_focusable(leaf, true)?;
        core.add(top, leaf)?;
        h.set_top(top, Rect::new(0, 0, 100, 100))?;
        h.gui.core_mut().request_focus(leaf)?;
        Probe::take(&log);

        assert_eq!(h.key('q')?, EventOutcome::Handle);
        h.click((2, 3))?;
        assert_eq!(
            Probe::take(&log),
            vec![
                "leaf: key Pressed Char('q')",
                "leaf: key Released Char('q')",
                "top: mouse Entered 2,3",
                "leaf: mouse Entered 2,3",
                "leaf: mouse Pressed 2,3",
                "leaf: mouse Released 2,3",
                "leaf: mouse Clicked 2,3",
            ]
        );

        // A consuming listener on the top widget does not stop the leaf.
        let rl = Rc::new(RecordingListener::consuming());
        h.gui.core_mut().add_key_listener(top, &rl)?;
        h.key('r')?;
        assert!(rl.is_empty());
        Ok(())
    }

    #[test]
    fn global_key_listeners() -> Result<()> {
        let (mut h, log, top, _) = pair()?;
        h.gui.core_mut().set_focusable(top, true)?;
        h.gui.core_mut().request_focus(top)?;
        Probe::take(&log);

        let seen = Rc::new(RecordingListener::new());
        h.gui.add_key_listener(&seen);
        h.key('z')?;
        assert_eq!(seen.len(), 2);
        assert_eq!(Probe::take(&log).len(), 2);

        let eater = Rc::new(RecordingListener::consuming());
        h.gui.add_key_listener(&eater);
        assert_eq!(h.key('z')?, EventOutcome::Handle);
        assert!(Probe::take(&log).is_empty());
        assert_eq!(eater.len(), 2);

        assert!(h.gui.remove_key_listener(&eater));
        assert!(!h.gui.remove_key_listener(&eater));
        h.key('z')?;
        assert_eq!(Probe::take(&log).len(), 2);

        // Dropped listeners are skipped.
        drop(seen);
        h.gui.push_key_input(KeyInput::pressed('y'))?;
        Ok(())
    }

    #[test]
    fn no_target_without_focus() -> Result<()> {
        let (mut h, log, _, _) = pair()?;
        assert_eq!(h.gui.key_target(), None);
        assert_eq!(h.key('q')?, EventOutcome::Ignore);
        assert!(Probe::take(&log).is_empty());

        // Input outside any top widget is harmless.
        h.gui.set_top(None)?;
        h.click(Point::new(35, 36))?;
        assert!(Probe::take(&log).is_empty());
        Ok(())
    }
}
