use crate::{
    Core, NodeId,
    geom::{Point, Rect},
};

/// The child of `id` under `p`, which is relative to `id`.
///
/// A node without a children area hides its children from hit-testing.
/// Children are searched top-most first, which is the reverse of draw
/// order; invisible children and `exclude` are skipped. Disabled children
/// are still hit so that they block the pointer.
pub fn child_at(core: &Core, id: NodeId, p: Point, exclude: Option<NodeId>) -> Option<NodeId> {
    let node = core.nodes.get(id)?;
    let area = node.children_area?;
    if !area.contains_point(p) {
        return None;
    }
    node.children.iter().rev().copied().find(|child| {
        Some(*child) != exclude
            && core
                .nodes
                .get(*child)
                .is_some_and(|c| c.visible && c.dimension.shift(area.tl).contains_point(p))
    })
}

/// The deepest descendant of `id` under `p`, which is relative to `id`.
/// Returns `None` if no child of `id` is under the point.
pub fn deepest_at(core: &Core, id: NodeId, p: Point, exclude: Option<NodeId>) -> Option<NodeId> {
    let mut current = id;
    let mut p = p;
    let mut found = None;
    while let Some(child) = child_at(core, current, p, exclude) {
        let origin = core
            .nodes
            .get(current)
            .and_then(|n| n.children_area)
            .map(|a| a.tl)
            .unwrap_or_default();
        let child_tl = core
            .nodes
            .get(child)
            .map(|n| n.dimension.tl)
            .unwrap_or_default();
        p = p - origin - child_tl;
        current = child;
        found = Some(child);
    }
    found
}

/// Every visible child of `id` whose rectangle intersects `area`, which is
/// relative to `id`, in child order.
pub fn children_in(core: &Core, id: NodeId, area: Rect, ignore: Option<NodeId>) -> Vec<NodeId> {
    let Some(node) = core.nodes.get(id) else {
        return Vec::new();
    };
    let Some(ca) = node.children_area else {
        return Vec::new();
    };
    node.children
        .iter()
        .copied()
        .filter(|child| {
            Some(*child) != ignore
                && core
                    .nodes
                    .get(*child)
                    .is_some_and(|c| c.visible && c.dimension.shift(ca.tl).intersects(&area))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::Result, widgets::Container};

    #[test]
    fn hit_order() -> Result<()> {
        let mut core = Core::new();
        let top: NodeId = core.create(Container::new()).into();
        let a: NodeId = core.create(Container::new()).into();
        let b: NodeId = core.create(Container::new()).into();
        let inner: NodeId = core.create(Container::new()).into();
        core.set_dimension(top, Rect::new(0, 0, 100, 100))?;
        core.set_dimension(a, Rect::new(10, 10, 40, 40))?;
        core.set_dimension(b, Rect::new(30, 30, 40, 40))?;
        core.set_dimension(inner, Rect::new(5, 5, 10, 10))?;
        core.add(top, a)?;
        core.add(top, b)?;
        core.add(a, inner)?;

        // b is drawn last, so it wins the overlap.
        assert_eq!(child_at(&core, top, Point::new(35, 35), None), Some(b));
        assert_eq!(child_at(&core, top, Point::new(35, 35), Some(b)), Some(a));
        assert_eq!(child_at(&core, top, Point::new(95, 95), None), None);
        assert_eq!(deepest_at(&core, top, Point::new(16, 16), None), Some(inner));

        core.set_visible(b, false)?;
        assert_eq!(child_at(&core, top, Point::new(35, 35), None), Some(a));

        let hits = children_in(&core, top, Rect::new(0, 0, 35, 35), None);
        assert_eq!(hits, vec![a]);
        core.set_visible(b, true)?;
        let hits = children_in(&core, top, Rect::new(0, 0, 35, 35), None);
        assert_eq!(hits, vec![a, b]);
        Ok(())
    }
}
