use geometry::{frame_from, Frame, SurfacePoint};

/// The in-progress rectangle.
///
/// `Drawing` exists exactly while a pointer-down has happened and has not yet
/// been committed or cancelled. It is never part of the committed list.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Draft {
    #[default]
    Idle,
    Drawing {
        /// Captured at pointer down, fixed until commit.
        anchor: SurfacePoint,
        /// Latest pointer position; starts equal to the anchor.
        opposite: SurfacePoint,
    },
}

impl Draft {
    pub fn start(anchor: SurfacePoint) -> Self {
        Draft::Drawing {
            anchor,
            opposite: anchor,
        }
    }

    pub fn is_drawing(&self) -> bool {
        matches!(self, Draft::Drawing { .. })
    }

    pub fn anchor(&self) -> Option<SurfacePoint> {
        match self {
            Draft::Idle => None,
            Draft::Drawing { anchor, .. } => Some(*anchor),
        }
    }

    /// Live frame between the anchor and the opposite point.
    pub fn preview_frame(&self) -> Option<Frame> {
        match self {
            Draft::Idle => None,
            Draft::Drawing { anchor, opposite } => Some(frame_from(*anchor, *opposite)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_has_no_preview() {
        assert_eq!(Draft::default(), Draft::Idle);
        assert_eq!(Draft::Idle.preview_frame(), None);
        assert_eq!(Draft::Idle.anchor(), None);
    }

    #[test]
    fn new_draft_previews_a_point() {
        let draft = Draft::start(SurfacePoint::new(4.0, 9.0));
        assert!(draft.is_drawing());
        assert_eq!(
            draft.preview_frame(),
            Some(Frame {
                top: 9.0,
                left: 4.0,
                width: 0.0,
                height: 0.0
            })
        );
    }
}
