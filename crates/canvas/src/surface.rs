use crate::{Draft, Rectangle, RectangleId};
use geometry::{normalize, Frame, SurfacePoint};

/// How a pointer down changed the draft.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DraftStart {
    /// The surface was idle.
    Started,
    /// A draft was already active; it was discarded without committing.
    Superseded { previous_anchor: SurfacePoint },
}

/// Committed rectangles plus the one in-progress draft.
///
/// ```text
/// Idle    --down(p)--> Drawing { anchor: p, opposite: p }
/// Drawing --move(q)--> Drawing { anchor, opposite: q }
/// Drawing --up(q)----> Idle, commits normalize(anchor, q)
/// Drawing --down(p)--> Drawing { anchor: p, opposite: p }  (old draft dropped)
/// Drawing --cancel---> Idle
/// ```
///
/// Moves and ups while idle are ignored.
#[derive(Clone, Debug, Default)]
pub struct Surface {
    rectangles: Vec<Rectangle>,
    draft: Draft,
}

impl Surface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed rectangles in commit order.
    pub fn rectangles(&self) -> &[Rectangle] {
        &self.rectangles
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn is_drawing(&self) -> bool {
        self.draft.is_drawing()
    }

    pub fn pointer_down(&mut self, point: SurfacePoint) -> DraftStart {
        let start = match self.draft.anchor() {
            None => DraftStart::Started,
            Some(previous_anchor) => {
                log::debug!(
                    "draft at {:?} superseded by pointer down at {:?}",
                    previous_anchor,
                    point
                );
                DraftStart::Superseded { previous_anchor }
            }
        };
        self.draft = Draft::start(point);
        start
    }

    /// Track the opposite corner. Returns false when there is no draft.
    pub fn pointer_move(&mut self, point: SurfacePoint) -> bool {
        match &mut self.draft {
            Draft::Idle => false,
            Draft::Drawing { opposite, .. } => {
                *opposite = point;
                true
            }
        }
    }

    /// Commit the draft using `point` as the opposite corner.
    ///
    /// A stray pointer up with no draft commits nothing.
    pub fn pointer_up(&mut self, point: SurfacePoint) -> Option<RectangleId> {
        let Draft::Drawing { anchor, .. } = std::mem::take(&mut self.draft) else {
            log::trace!("pointer up at {:?} with no draft", point);
            return None;
        };

        let rectangle = Rectangle::new(normalize(anchor, point));
        log::debug!("committed rectangle {} {:?}", rectangle.id, rectangle.edges);
        self.rectangles.push(rectangle);
        Some(rectangle.id)
    }

    /// Drop the draft without committing. Returns false when idle.
    pub fn cancel(&mut self) -> bool {
        let cancelled = self.draft.is_drawing();
        if cancelled {
            log::debug!("draft cancelled");
        }
        self.draft = Draft::Idle;
        cancelled
    }

    pub fn committed_frames(&self) -> impl Iterator<Item = Frame> + '_ {
        self.rectangles.iter().map(Rectangle::frame)
    }

    pub fn preview_frame(&self) -> Option<Frame> {
        self.draft.preview_frame()
    }

    /// Everything to render: committed frames in commit order, then the live
    /// preview if a draft is active.
    pub fn frames(&self) -> Vec<Frame> {
        self.committed_frames().chain(self.preview_frame()).collect()
    }
}
