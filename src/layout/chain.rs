//! # Layout Rectangle Chain
//!
//! Nested board regions are described as a chain of rectangles, each owning
//! exactly one child: board image → coordinate labels → stones → grid.
//!
//! Layout happens in two phases:
//!
//! 1. **Construction.** Start from the innermost rectangle in an arbitrary
//!    unit system and wrap it outward with [`LayoutRect::with_margin`]. Each
//!    wrap produces a parent exactly large enough for the child plus margins.
//! 2. **Finalization.** [`LayoutRect::finalize`] consumes the builder, fits the
//!    root into real pixel bounds and walks down the chain, carrying the scale
//!    factor so every margin is converted into pixels at the right scale. The
//!    result is a [`LayoutChain`], which has no mutators.
//!
//! The margins and strategy passed to `with_margin` are recorded on the
//! *child*: they describe how that child sits inside its parent's frame.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::geometry::{center_fit, clip, Edges, Rect};

/// Where a child rectangle is placed inside its parent's frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContainerStrategy {
    /// Centered within the margins.
    #[default]
    Center,
    /// Flush with the parent's top-left corner; margins end up bottom/right.
    ClampTopLeft,
    /// Flush with the parent's bottom-right corner; margins end up top/left.
    ClampBottomRight,
}

/// A rectangle under construction. See the module docs.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutRect {
    bounds: Rect,
    margin: Edges,
    strategy: ContainerStrategy,
    child: Option<Box<LayoutRect>>,
}

impl LayoutRect {
    /// A leaf rectangle at the origin.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            bounds: Rect::from_size(width, height),
            margin: Edges::ZERO,
            strategy: ContainerStrategy::Center,
            child: None,
        }
    }

    /// Current (pre-scale) bounds.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Margins between this rectangle and its parent's frame.
    pub fn margin(&self) -> Edges {
        self.margin
    }

    pub fn strategy(&self) -> ContainerStrategy {
        self.strategy
    }

    pub fn child(&self) -> Option<&LayoutRect> {
        self.child.as_deref()
    }

    /// Number of rectangles in the chain starting here.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut node = self;
        while let Some(child) = node.child.as_deref() {
            depth += 1;
            node = child;
        }
        depth
    }

    /// Set how this rectangle is placed when it ends up as the root of
    /// [`finalize`](Self::finalize). Wrapping it later overwrites the value.
    #[must_use]
    pub fn anchored(mut self, strategy: ContainerStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Wrap `self` in a new parent that adds `margin` around it.
    ///
    /// The parent sits at the origin and is sized
    /// `(width + left + right, height + top + bottom)`. `self` (and its
    /// descendants) move to where `strategy` puts them inside that parent.
    #[must_use]
    pub fn with_margin(mut self, margin: Edges, strategy: ContainerStrategy) -> Self {
        let (dx, dy) = match strategy {
            ContainerStrategy::Center => (margin.left, margin.top),
            ContainerStrategy::ClampBottomRight => (margin.horizontal(), margin.vertical()),
            ContainerStrategy::ClampTopLeft => (0.0, 0.0),
        };
        self.shift(dx, dy);
        self.margin = margin;
        self.strategy = strategy;

        let bounds = Rect::from_size(
            self.bounds.width + margin.horizontal(),
            self.bounds.height + margin.vertical(),
        );
        Self {
            bounds,
            margin: Edges::ZERO,
            strategy: ContainerStrategy::Center,
            child: Some(Box::new(self)),
        }
    }

    /// [`with_margin`](Self::with_margin) with the same margin on every side.
    #[must_use]
    pub fn with_uniform_margin(self, margin: f64, strategy: ContainerStrategy) -> Self {
        self.with_margin(Edges::uniform(margin), strategy)
    }

    fn shift(&mut self, dx: f64, dy: f64) {
        let mut node = Some(self);
        while let Some(current) = node {
            current.bounds = current.bounds.translate(dx, dy);
            node = current.child.as_deref_mut();
        }
    }

    /// Fit the chain into `container` (absolute pixels), keeping an extra
    /// `extra_margin` pixels free around the root, and freeze it.
    ///
    /// Each level, top-down:
    /// 1. Its margins are scaled by the parent's fit scale (1.0 at the root)
    ///    and, at the root, grown by `extra_margin`.
    /// 2. The largest rectangle with the level's original aspect ratio is
    ///    fitted into the container shrunk by those margins.
    /// 3. The level is placed by its [`ContainerStrategy`]. A top-left
    ///    clamped *root* is anchored at its own fitted extent
    ///    `(width, height)`, not at the container origin.
    /// 4. The level's bounds become the container for its child, and
    ///    `fitted width / original width` becomes the child's scale.
    pub fn finalize(self, container: Rect, extra_margin: f64) -> LayoutChain {
        let mut levels = Vec::with_capacity(self.depth());
        let mut node = self;
        let mut container = container;
        let mut extra = extra_margin;
        let mut parent_scale = 1.0;
        let mut first = true;

        loop {
            let LayoutRect {
                bounds,
                margin,
                strategy,
                child,
            } = node;

            let fit_container = clip(&container, margin.scaled(parent_scale).grown(extra));
            let fit = center_fit(&fit_container, bounds.aspect_ratio(), 0.0);
            let fit_scale = fit.width / bounds.width;

            let (x, y) = match strategy {
                ContainerStrategy::Center => (fit.x, fit.y),
                ContainerStrategy::ClampTopLeft if first => (fit.width, fit.height),
                ContainerStrategy::ClampTopLeft => (container.x, container.y),
                ContainerStrategy::ClampBottomRight => (
                    container.right() - fit.width,
                    container.bottom() - fit.height,
                ),
            };
            let placed = Rect::new(x, y, fit.width, fit.height);
            trace!(
                "finalized level {} ({:?}) at {:?}, scale {}",
                levels.len(),
                strategy,
                placed,
                fit_scale
            );
            levels.push(placed);

            match child {
                Some(next) => {
                    node = *next;
                    container = placed;
                    extra = 0.0;
                    parent_scale = fit_scale;
                    first = false;
                }
                None => break,
            }
        }

        LayoutChain { levels }
    }
}

/// A finalized chain of absolute pixel rectangles, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutChain {
    levels: Vec<Rect>,
}

impl LayoutChain {
    pub fn levels(&self) -> &[Rect] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level(&self, index: usize) -> Option<Rect> {
        self.levels.get(index).copied()
    }

    /// The outermost rectangle.
    pub fn root(&self) -> Rect {
        self.levels[0]
    }

    /// The innermost rectangle.
    pub fn leaf(&self) -> Rect {
        self.levels[self.levels.len() - 1]
    }

    /// `(parent, child)` pairs from the root down.
    pub fn pairs(&self) -> impl Iterator<Item = (Rect, Rect)> + '_ {
        self.levels.windows(2).map(|w| (w[0], w[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn with_margin_center_offsets_child() {
        let parent = LayoutRect::new(10.0, 20.0).with_margin(
            Edges::new(1.0, 2.0, 3.0, 4.0),
            ContainerStrategy::Center,
        );
        assert_eq!(parent.bounds(), Rect::new(0.0, 0.0, 16.0, 24.0));
        let child = parent.child().unwrap();
        assert_eq!(child.bounds(), Rect::new(4.0, 1.0, 10.0, 20.0));
        assert_eq!(child.margin(), Edges::new(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn with_margin_clamp_bottom_right_pushes_child_to_corner() {
        let parent = LayoutRect::new(10.0, 10.0)
            .with_margin(Edges::new(0.0, 5.0, 5.0, 0.0), ContainerStrategy::ClampBottomRight);
        let child = parent.child().unwrap().bounds();
        assert_eq!(child.right(), parent.bounds().right());
        assert_eq!(child.bottom(), parent.bounds().bottom());
    }

    #[test]
    fn with_margin_clamp_top_left_keeps_child_at_origin() {
        let parent = LayoutRect::new(10.0, 10.0)
            .with_margin(Edges::new(5.0, 0.0, 0.0, 5.0), ContainerStrategy::ClampTopLeft);
        assert_eq!(parent.child().unwrap().bounds(), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(parent.bounds(), Rect::new(0.0, 0.0, 15.0, 15.0));
    }

    #[test]
    fn shifting_moves_whole_subchain() {
        let root = LayoutRect::new(10.0, 10.0)
            .with_uniform_margin(1.0, ContainerStrategy::Center)
            .with_uniform_margin(2.0, ContainerStrategy::Center);
        let middle = root.child().unwrap();
        let leaf = middle.child().unwrap();
        assert_eq!(middle.bounds(), Rect::new(2.0, 2.0, 12.0, 12.0));
        assert_eq!(leaf.bounds(), Rect::new(3.0, 3.0, 10.0, 10.0));
        assert_eq!(root.depth(), 3);
    }

    #[test]
    fn construction_contains_child_plus_margins() {
        let root = LayoutRect::new(7.0, 3.0)
            .with_margin(Edges::new(0.0, 2.0, 2.0, 0.0), ContainerStrategy::ClampBottomRight)
            .with_uniform_margin(1.5, ContainerStrategy::Center)
            .with_margin(Edges::new(1.0, 0.0, 0.0, 1.0), ContainerStrategy::ClampTopLeft);

        let mut parent = &root;
        while let Some(child) = parent.child() {
            let p = parent.bounds();
            let c = child.bounds();
            let m = child.margin();
            assert!(close(p.width, c.width + m.horizontal()));
            assert!(close(p.height, c.height + m.vertical()));
            assert!(p.contains_rect(&c, EPS));
            parent = child;
        }
    }

    #[test]
    fn finalize_scales_uniformly_into_container() {
        let chain = LayoutRect::new(80.0, 80.0)
            .with_uniform_margin(10.0, ContainerStrategy::Center)
            .finalize(Rect::from_size(200.0, 200.0), 0.0);

        assert_eq!(chain.len(), 2);
        let root = chain.root();
        let leaf = chain.leaf();
        assert!(close(root.width, 200.0));
        assert!(close(root.x, 0.0));
        // Scale is 2: the 10 unit margin becomes 20 pixels.
        assert!(close(leaf.x, 20.0));
        assert!(close(leaf.y, 20.0));
        assert!(close(leaf.width, 160.0));
        assert!(close(leaf.height, 160.0));
    }

    #[test]
    fn finalize_applies_extra_margin_at_root_only() {
        let chain = LayoutRect::new(100.0, 100.0)
            .with_uniform_margin(0.0, ContainerStrategy::Center)
            .finalize(Rect::from_size(100.0, 100.0), 10.0);
        assert_eq!(chain.root(), Rect::new(10.0, 10.0, 80.0, 80.0));
        assert_eq!(chain.leaf(), Rect::new(10.0, 10.0, 80.0, 80.0));
    }

    #[test]
    fn finalize_centers_root_in_wide_container() {
        let chain = LayoutRect::new(1.0, 1.0).finalize(Rect::from_size(300.0, 100.0), 0.0);
        assert_eq!(chain.root(), Rect::new(100.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn finalize_clamp_bottom_right_hugs_corner() {
        let chain = LayoutRect::new(50.0, 50.0)
            .with_margin(Edges::new(0.0, 50.0, 50.0, 0.0), ContainerStrategy::ClampBottomRight)
            .finalize(Rect::new(10.0, 10.0, 200.0, 200.0), 0.0);
        let leaf = chain.leaf();
        assert!(close(leaf.width, 100.0));
        assert!(close(leaf.right(), 210.0));
        assert!(close(leaf.bottom(), 210.0));
    }

    #[test]
    fn finalize_clamp_top_left_child_hugs_origin() {
        let chain = LayoutRect::new(50.0, 50.0)
            .with_margin(Edges::new(50.0, 0.0, 0.0, 50.0), ContainerStrategy::ClampTopLeft)
            .finalize(Rect::new(10.0, 10.0, 200.0, 200.0), 0.0);
        assert_eq!(chain.leaf(), Rect::new(10.0, 10.0, 100.0, 100.0));
    }

    #[test]
    fn finalize_clamp_top_left_root_anchors_at_own_extent() {
        let chain = LayoutRect::new(20.0, 10.0)
            .anchored(ContainerStrategy::ClampTopLeft)
            .finalize(Rect::new(5.0, 5.0, 100.0, 100.0), 0.0);
        assert_eq!(chain.root(), Rect::new(100.0, 50.0, 100.0, 50.0));
    }

    #[test]
    fn pairs_walk_from_root() {
        let chain = LayoutRect::new(10.0, 10.0)
            .with_uniform_margin(1.0, ContainerStrategy::Center)
            .with_uniform_margin(1.0, ContainerStrategy::Center)
            .finalize(Rect::from_size(120.0, 120.0), 0.0);
        assert_eq!(chain.pairs().count(), 2);
        assert!(!chain.is_empty());
        assert_eq!(chain.level(0), Some(chain.root()));
        assert_eq!(chain.level(2), Some(chain.leaf()));
        assert_eq!(chain.level(3), None);
        let middle = chain.level(1).unwrap();
        assert!(close(middle.width, 12.0 * 120.0 / 14.0));
        for (parent, child) in chain.pairs() {
            assert!(parent.contains_rect(&child, EPS));
        }
    }
}
