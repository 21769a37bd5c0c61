use std::cell::{Cell, RefCell};
use yew::Callback;
use crate::mirror::image::UploadedImage;
use crate::mirror::state::{MirrorAction, ScanTicket};
use crate::mirror::timer::{ScanTimer, SCAN_DELAY_MS};
use crate::mirror::upload::MirrorError;

/// Identifies one open/close cycle of the mirror. File reads carry the
/// generation they started in so a result from an earlier cycle is dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenGeneration(u64);

/// Drives the mirror state through `dispatch` and owns the pending scan timer.
pub struct MirrorSession<T: ScanTimer> {
    timer: T,
    dispatch: Callback<MirrorAction>,
    next_ticket: Cell<u64>,
    generation: Cell<u64>,
    pending: RefCell<Option<T::Handle>>,
}

impl<T: ScanTimer> MirrorSession<T> {
    pub fn new(timer: T, dispatch: Callback<MirrorAction>) -> Self {
        Self {
            timer,
            dispatch,
            next_ticket: Cell::new(1),
            generation: Cell::new(0),
            pending: RefCell::new(None),
        }
    }

    pub fn generation(&self) -> OpenGeneration {
        OpenGeneration(self.generation.get())
    }

    fn next_generation(&self) {
        self.generation.set(self.generation.get() + 1);
    }

    pub fn open(&self) {
        log::debug!("Opening virtual mirror");
        self.next_generation();
        self.dispatch.emit(MirrorAction::Open);
    }

    pub fn close(&self) {
        self.next_generation();
        // Dropping the handle cancels the timeout
        self.pending.borrow_mut().take();
        self.dispatch.emit(MirrorAction::Close);
    }

    /// Hands a finished file read to the mirror, unless the mirror was closed
    /// or reopened while the read was in flight.
    pub fn accept_upload(&self, generation: OpenGeneration, result: Result<UploadedImage, MirrorError>) {
        if generation != self.generation() {
            log::debug!("Dropping photo read from an earlier mirror session");
            return;
        }
        match result {
            Ok(image) => self.select_image(image),
            Err(err) => self.read_failed(err),
        }
    }

    pub fn select_image(&self, image: UploadedImage) {
        let ticket = ScanTicket(self.next_ticket.get());
        self.next_ticket.set(ticket.0 + 1);
        log::info!("Scanning photo ({} bytes)", image.byte_len());

        self.dispatch.emit(MirrorAction::ImageSelected { image, ticket });

        let dispatch = self.dispatch.clone();
        let handle = self.timer.schedule(
            SCAN_DELAY_MS,
            Box::new(move || dispatch.emit(MirrorAction::ScanElapsed(ticket))),
        );
        *self.pending.borrow_mut() = Some(handle);
    }

    pub fn read_failed(&self, err: MirrorError) {
        if err.is_silent() {
            log::debug!("Photo picker closed without a file");
            return;
        }
        log::warn!("Failed to load photo: {}", err);
        self.dispatch.emit(MirrorAction::ReadFailed(err.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use yew::functional::Reducible;
    use crate::mirror::recommendation::recommendation_for;
    use crate::mirror::state::MirrorState;
    use crate::mirror::timer::VirtualTimer;

    struct Harness {
        state: Rc<RefCell<Rc<MirrorState>>>,
        timer: VirtualTimer,
        session: MirrorSession<VirtualTimer>,
    }

    impl Harness {
        fn new() -> Self {
            let state = Rc::new(RefCell::new(Rc::new(MirrorState::default())));
            let timer = VirtualTimer::default();
            let dispatch = {
                let state = Rc::clone(&state);
                Callback::from(move |action: MirrorAction| {
                    let current = Rc::clone(&state.borrow());
                    *state.borrow_mut() = current.reduce(action);
                })
            };
            let session = MirrorSession::new(timer.clone(), dispatch);
            Self { state, timer, session }
        }

        fn state(&self) -> Rc<MirrorState> {
            Rc::clone(&self.state.borrow())
        }
    }

    fn fake_png() -> UploadedImage {
        UploadedImage::from_bytes("image/png", &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00])
    }

    #[test]
    fn upload_scan_results_close() {
        let h = Harness::new();

        h.session.open();
        let state = h.state();
        assert!(state.is_open());
        assert!(!state.is_scanning());
        assert!(!state.shows_results());
        assert!(state.image().is_none());

        h.session.select_image(fake_png());
        let state = h.state();
        assert!(state.is_scanning());
        assert!(!state.shows_results());
        assert_eq!(state.image(), Some(&fake_png()));

        h.timer.advance(2_999);
        assert!(h.state().is_scanning());

        h.timer.advance(1);
        let state = h.state();
        assert!(!state.is_scanning());
        assert!(state.shows_results());
        assert_eq!(state.image(), Some(&fake_png()));
        let style = state.image().map(recommendation_for).map(|r| r.style);
        assert_eq!(style, Some("Textured French Crop with High Fade"));

        h.session.close();
        let state = h.state();
        assert!(!state.is_open());
        assert!(!state.is_scanning());
        assert!(!state.shows_results());
        assert!(state.image().is_none());
    }

    #[test]
    fn close_cancels_the_pending_scan() {
        let h = Harness::new();
        h.session.open();
        h.session.select_image(fake_png());
        assert_eq!(h.timer.pending(), 1);

        h.session.close();
        assert_eq!(h.timer.pending(), 0);

        h.timer.advance(SCAN_DELAY_MS.into());
        assert_eq!(*h.state(), MirrorState::Closed);
    }

    #[test]
    fn reopened_mirror_waits_for_its_own_scan() {
        let h = Harness::new();
        h.session.open();
        h.session.select_image(fake_png());
        h.timer.advance(2_000);
        h.session.close();

        h.session.open();
        h.session.select_image(fake_png());
        h.timer.advance(1_000);
        assert!(h.state().is_scanning());

        h.timer.advance(2_000);
        assert!(h.state().shows_results());
    }

    #[test]
    fn late_read_after_close_stays_closed() {
        let h = Harness::new();
        h.session.open();
        h.session.close();

        h.session.select_image(fake_png());
        h.timer.advance(SCAN_DELAY_MS.into());
        assert_eq!(*h.state(), MirrorState::Closed);
    }

    #[test]
    fn read_finishing_after_reopen_is_dropped() {
        let h = Harness::new();
        h.session.open();
        let started_in = h.session.generation();
        h.session.close();
        h.session.open();

        h.session.accept_upload(started_in, Ok(fake_png()));
        assert_eq!(*h.state(), MirrorState::Idle { notice: None });
        assert_eq!(h.timer.pending(), 0);

        h.timer.advance(SCAN_DELAY_MS.into());
        assert!(!h.state().is_scanning());
        assert!(!h.state().shows_results());
    }

    #[test]
    fn read_error_from_earlier_open_leaves_no_notice() {
        let h = Harness::new();
        h.session.open();
        let started_in = h.session.generation();
        h.session.close();
        h.session.open();

        h.session.accept_upload(
            started_in,
            Err(MirrorError::Read {
                name: "selfie.png".to_string(),
                reason: "NotReadableError".to_string(),
            }),
        );
        assert_eq!(h.state().notice(), None);
    }

    #[test]
    fn read_finishing_after_close_schedules_nothing() {
        let h = Harness::new();
        h.session.open();
        let started_in = h.session.generation();
        h.session.close();

        h.session.accept_upload(started_in, Ok(fake_png()));
        assert_eq!(*h.state(), MirrorState::Closed);
        assert_eq!(h.timer.pending(), 0);
    }

    #[test]
    fn upload_within_the_same_open_starts_scanning() {
        let h = Harness::new();
        h.session.open();
        let started_in = h.session.generation();

        h.session.accept_upload(started_in, Ok(fake_png()));
        assert!(h.state().is_scanning());

        h.timer.advance(SCAN_DELAY_MS.into());
        assert!(h.state().shows_results());
    }

    #[test]
    fn read_errors_show_a_notice_but_cancelled_picker_does_not() {
        let h = Harness::new();
        h.session.open();

        h.session.read_failed(MirrorError::NoFile);
        assert_eq!(*h.state(), MirrorState::Idle { notice: None });

        h.session.read_failed(MirrorError::Read {
            name: "selfie.png".to_string(),
            reason: "NotReadableError".to_string(),
        });
        assert_eq!(h.state().notice(), Some("Could not read selfie.png: NotReadableError"));
        assert!(h.state().image().is_none());
    }
}
