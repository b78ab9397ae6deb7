use tracing::trace;

use crate::{
    Core, DrawContext, NodeId, Widget,
    error::{Error, Result},
    graphics::Graphics,
};

/// Draw a node and its visible descendants.
///
/// The frame is drawn first, clipped to the dimension grown by the frame
/// size. The widget then draws clipped to its dimension, and each visible
/// child is drawn in child order clipped to the children area.
pub fn draw(core: &mut Core, g: &mut dyn Graphics, id: NodeId) -> Result<()> {
    let (dim, frame) = {
        let node = core.node_ref(id)?;
        (node.dimension, node.frame_size)
    };

    if frame > 0 {
        g.push_clip_area(dim.expand(frame));
        let out = call_draw(core, id, |w, ctx| w.draw_frame(g, ctx));
        g.pop_clip_area();
        out?;
    }

    g.push_clip_area(dim);
    let out = draw_contents(core, g, id);
    g.pop_clip_area();
    out
}

/// Draw the widget and its children inside an already pushed clip area.
fn draw_contents(core: &mut Core, g: &mut dyn Graphics, id: NodeId) -> Result<()> {
    call_draw(core, id, |w, ctx| w.draw(g, ctx))?;

    let Some(area) = core.node_ref(id)?.children_area else {
        return Ok(());
    };
    let children = core.node_ref(id)?.children.clone();
    g.push_clip_area(area);
    let mut out = Ok(());
    for child in children {
        if core.nodes.get(child).is_some_and(|n| n.visible) {
            out = draw(core, g, child);
            if out.is_err() {
                break;
            }
        }
    }
    g.pop_clip_area();
    out
}

/// Run a draw hook. A widget whose hook is already running is skipped.
fn call_draw(
    core: &mut Core,
    id: NodeId,
    f: impl FnOnce(&mut dyn Widget, &DrawContext) -> Result<()>,
) -> Result<()> {
    let out = core.with_widget_mut(id, |w, core| {
        let ctx = DrawContext::new(core, id);
        f(w, &ctx)
    });
    match out {
        Ok(r) => r,
        Err(Error::ReentrantWidget(_)) => {
            trace!(?id, "draw skipped");
            Ok(())
        }
        Err(e) => Err(e),
    }
}

/// Run the logic hook of a node and then of its descendants, depth-first in
/// child order.
pub fn logic(core: &mut Core, id: NodeId) -> Result<()> {
    core.run_hook(id, |w, ctx| w.logic(ctx))?;
    let children = core.children(id).to_vec();
    for child in children {
        logic(core, child)?;
    }
    Ok(())
}
