use std::rc::Rc;
use yew::prelude::*;
use crate::mirror::image::UploadedImage;

/// Pairs a timer completion with the scan that scheduled it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScanTicket(pub(crate) u64);

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum MirrorState {
    #[default]
    Closed,
    Idle { notice: Option<String> },
    Scanning { image: UploadedImage, ticket: ScanTicket },
    ResultsShown { image: UploadedImage },
}

#[derive(Debug)]
pub enum MirrorAction {
    Open,
    Close,
    ImageSelected { image: UploadedImage, ticket: ScanTicket },
    ScanElapsed(ScanTicket),
    ReadFailed(String),
}

impl MirrorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, MirrorState::Closed)
    }

    pub fn is_scanning(&self) -> bool {
        matches!(self, MirrorState::Scanning { .. })
    }

    pub fn shows_results(&self) -> bool {
        matches!(self, MirrorState::ResultsShown { .. })
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        match self {
            MirrorState::Scanning { image, .. } | MirrorState::ResultsShown { image } => Some(image),
            MirrorState::Closed | MirrorState::Idle { .. } => None,
        }
    }

    pub fn notice(&self) -> Option<&str> {
        match self {
            MirrorState::Idle { notice } => notice.as_deref(),
            _ => None,
        }
    }

    /// Returns `None` when the action does not apply to the current state.
    pub fn apply(&self, action: MirrorAction) -> Option<MirrorState> {
        match (self, action) {
            (MirrorState::Closed, MirrorAction::Open) => Some(MirrorState::Idle { notice: None }),
            (_, MirrorAction::Open) => None,

            (MirrorState::Closed, MirrorAction::Close) => None,
            (_, MirrorAction::Close) => Some(MirrorState::Closed),

            // A read that finishes after close must not reopen anything
            (MirrorState::Idle { .. } | MirrorState::Scanning { .. }, MirrorAction::ImageSelected { image, ticket }) => {
                Some(MirrorState::Scanning { image, ticket })
            }
            (_, MirrorAction::ImageSelected { .. }) => None,

            (MirrorState::Scanning { image, ticket }, MirrorAction::ScanElapsed(elapsed)) if *ticket == elapsed => {
                Some(MirrorState::ResultsShown { image: image.clone() })
            }
            (_, MirrorAction::ScanElapsed(_)) => None,

            (MirrorState::Idle { .. }, MirrorAction::ReadFailed(message)) => {
                Some(MirrorState::Idle { notice: Some(message) })
            }
            (_, MirrorAction::ReadFailed(_)) => None,
        }
    }
}

impl Reducible for MirrorState {
    type Action = MirrorAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => Rc::new(next),
            None => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo() -> UploadedImage {
        UploadedImage::from_bytes("image/png", &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0, 0])
    }

    fn reduce_all(actions: Vec<MirrorAction>) -> Rc<MirrorState> {
        actions
            .into_iter()
            .fold(Rc::new(MirrorState::default()), |state, action| state.reduce(action))
    }

    fn assert_reset(state: &MirrorState) {
        assert!(!state.is_open());
        assert!(!state.is_scanning());
        assert!(!state.shows_results());
        assert!(state.image().is_none());
    }

    #[test]
    fn starts_closed() {
        assert_reset(&MirrorState::default());
    }

    #[test]
    fn open_shows_modal_with_everything_else_cleared() {
        let state = reduce_all(vec![MirrorAction::Open]);
        assert!(state.is_open());
        assert!(!state.is_scanning());
        assert!(!state.shows_results());
        assert!(state.image().is_none());
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn open_twice_keeps_the_same_state() {
        let opened = reduce_all(vec![MirrorAction::Open]);
        let again = Rc::clone(&opened).reduce(MirrorAction::Open);
        assert!(Rc::ptr_eq(&opened, &again));
    }

    #[test]
    fn selecting_an_image_starts_scanning() {
        let state = reduce_all(vec![
            MirrorAction::Open,
            MirrorAction::ImageSelected { image: photo(), ticket: ScanTicket(1) },
        ]);
        assert!(state.is_open());
        assert!(state.is_scanning());
        assert!(!state.shows_results());
        assert_eq!(state.image(), Some(&photo()));
    }

    #[test]
    fn matching_elapse_shows_results_with_same_image() {
        let state = reduce_all(vec![
            MirrorAction::Open,
            MirrorAction::ImageSelected { image: photo(), ticket: ScanTicket(1) },
            MirrorAction::ScanElapsed(ScanTicket(1)),
        ]);
        assert!(!state.is_scanning());
        assert!(state.shows_results());
        assert_eq!(state.image(), Some(&photo()));
    }

    #[test]
    fn stale_ticket_is_ignored() {
        let state = reduce_all(vec![
            MirrorAction::Open,
            MirrorAction::ImageSelected { image: photo(), ticket: ScanTicket(1) },
            MirrorAction::Close,
            MirrorAction::Open,
            MirrorAction::ImageSelected { image: photo(), ticket: ScanTicket(2) },
            MirrorAction::ScanElapsed(ScanTicket(1)),
        ]);
        assert!(state.is_scanning());
        assert!(!state.shows_results());
    }

    #[test]
    fn elapse_after_close_leaves_modal_closed() {
        let state = reduce_all(vec![
            MirrorAction::Open,
            MirrorAction::ImageSelected { image: photo(), ticket: ScanTicket(7) },
            MirrorAction::Close,
            MirrorAction::ScanElapsed(ScanTicket(7)),
        ]);
        assert_reset(&state);
    }

    #[test]
    fn image_arriving_after_close_is_dropped() {
        let state = reduce_all(vec![
            MirrorAction::Open,
            MirrorAction::Close,
            MirrorAction::ImageSelected { image: photo(), ticket: ScanTicket(1) },
        ]);
        assert_reset(&state);
    }

    #[test]
    fn reselecting_while_scanning_restarts_the_scan() {
        let other = UploadedImage::from_bytes("image/jpeg", &[0xff, 0xd8]);
        let state = reduce_all(vec![
            MirrorAction::Open,
            MirrorAction::ImageSelected { image: photo(), ticket: ScanTicket(1) },
            MirrorAction::ImageSelected { image: other.clone(), ticket: ScanTicket(2) },
            MirrorAction::ScanElapsed(ScanTicket(1)),
        ]);
        assert!(state.is_scanning());
        assert_eq!(state.image(), Some(&other));

        let state = state.reduce(MirrorAction::ScanElapsed(ScanTicket(2)));
        assert!(state.shows_results());
        assert_eq!(state.image(), Some(&other));
    }

    #[test]
    fn close_resets_from_every_state() {
        let paths = vec![
            vec![MirrorAction::Close],
            vec![MirrorAction::Open, MirrorAction::Close],
            vec![
                MirrorAction::Open,
                MirrorAction::ReadFailed("Could not read selfie.png".to_string()),
                MirrorAction::Close,
            ],
            vec![
                MirrorAction::Open,
                MirrorAction::ImageSelected { image: photo(), ticket: ScanTicket(1) },
                MirrorAction::Close,
            ],
            vec![
                MirrorAction::Open,
                MirrorAction::ImageSelected { image: photo(), ticket: ScanTicket(1) },
                MirrorAction::ScanElapsed(ScanTicket(1)),
                MirrorAction::Close,
            ],
        ];
        for actions in paths {
            assert_reset(&reduce_all(actions));
        }
    }

    #[test]
    fn read_failure_keeps_modal_idle_with_notice() {
        let state = reduce_all(vec![
            MirrorAction::Open,
            MirrorAction::ReadFailed("Could not read selfie.png".to_string()),
        ]);
        assert!(state.is_open());
        assert!(!state.is_scanning());
        assert!(state.image().is_none());
        assert_eq!(state.notice(), Some("Could not read selfie.png"));

        let state = state.reduce(MirrorAction::ImageSelected { image: photo(), ticket: ScanTicket(3) });
        assert!(state.is_scanning());
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn results_ignore_late_failures_and_selections() {
        let shown = reduce_all(vec![
            MirrorAction::Open,
            MirrorAction::ImageSelected { image: photo(), ticket: ScanTicket(1) },
            MirrorAction::ScanElapsed(ScanTicket(1)),
        ]);
        let after = Rc::clone(&shown)
            .reduce(MirrorAction::ReadFailed("late".to_string()))
            .reduce(MirrorAction::ImageSelected { image: photo(), ticket: ScanTicket(2) });
        assert!(Rc::ptr_eq(&shown, &after));
    }
}
