use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::dom::MediaElement;

thread_local! {
    static SHARED: Rc<PlaybackCoordinator> = Rc::new(PlaybackCoordinator::new());
}

#[derive(Default)]
struct CoordinatorState {
    currently_playing: Option<Weak<dyn MediaElement>>,
    requested: Option<Weak<dyn MediaElement>>,
}

/**
    Keeps at most one video playing across every component that shares it.

    Holds weak references only, so a torn-down element is never kept alive
    and is never paused. Advisory: pausing is best effort.
*/
#[derive(Default)]
pub struct PlaybackCoordinator {
    state: RefCell<CoordinatorState>,
}

impl PlaybackCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /**
        Page-wide coordinator for the current thread.
    */
    pub fn shared() -> Rc<Self> {
        SHARED.with(Rc::clone)
    }

    /**
        Mark `video` as requested, pause whichever other video is currently
        playing, then mark `video` as currently playing.
    */
    pub fn request_play(&self, video: &Rc<dyn MediaElement>) {
        let previous = {
            let mut state = self.state.borrow_mut();
            state.requested = Some(Rc::downgrade(video));
            state.currently_playing.as_ref().and_then(Weak::upgrade)
        };

        // Pause outside the borrow; the element may call back into us
        if let Some(previous) = previous
            && !same(&previous, video)
        {
            log::debug!("[coordinator] Pausing previously playing video");
            previous.pause();
        }

        self.state.borrow_mut().currently_playing = Some(Rc::downgrade(video));
    }

    /**
        Called when a video stops on its own (suspend, ended). Forgets the
        currently playing video if it is not the one last requested.
    */
    pub fn clear(&self) {
        let mut state = self.state.borrow_mut();
        if !same_slot(&state.currently_playing, &state.requested) {
            state.currently_playing = None;
        }
    }

    pub fn currently_playing(&self) -> Option<Rc<dyn MediaElement>> {
        self.state
            .borrow()
            .currently_playing
            .as_ref()
            .and_then(Weak::upgrade)
    }

    pub fn is_current(&self, video: &Rc<dyn MediaElement>) -> bool {
        self.currently_playing()
            .is_some_and(|current| same(&current, video))
    }

    /**
        Forget both references.
    */
    pub fn reset(&self) {
        *self.state.borrow_mut() = CoordinatorState::default();
    }
}

fn same(a: &Rc<dyn MediaElement>, b: &Rc<dyn MediaElement>) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

fn same_slot(a: &Option<Weak<dyn MediaElement>>, b: &Option<Weak<dyn MediaElement>>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::addr_eq(a.as_ptr(), b.as_ptr()),
        _ => false,
    }
}
