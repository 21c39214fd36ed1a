use contracts::shared::list_view::ScrollLock;
use leptos::prelude::*;

const NO_SCROLL_CLASS: &str = "no-scroll";

/// Locks body scrolling while at least one modal is open.
///
/// Modals take a [`ScrollGuard`] when they mount; dropping the last guard
/// restores scrolling, whatever order the modals close in.
#[derive(Clone, Copy)]
pub struct ModalService {
    lock: RwSignal<ScrollLock>,
}

impl ModalService {
    pub fn new() -> Self {
        Self {
            lock: RwSignal::new(ScrollLock::default()),
        }
    }

    pub fn acquire(&self) -> ScrollGuard {
        let locked = self.lock.try_update(|lock| lock.acquire()).unwrap_or(false);
        if locked {
            set_body_scroll_locked(true);
        }
        ScrollGuard { service: *self }
    }

    fn release(&self) {
        let unlocked = self.lock.try_update(|lock| lock.release()).unwrap_or(false);
        if unlocked {
            set_body_scroll_locked(false);
        }
    }

    pub fn is_locked(&self) -> bool {
        self.lock.with(|lock| lock.is_locked())
    }
}

impl Default for ModalService {
    fn default() -> Self {
        Self::new()
    }
}

pub struct ScrollGuard {
    service: ModalService,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.service.release();
    }
}

fn set_body_scroll_locked(locked: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        return;
    };
    let classes = body.class_list();
    let result = if locked {
        classes.add_1(NO_SCROLL_CLASS)
    } else {
        classes.remove_1(NO_SCROLL_CLASS)
    };
    if let Err(e) = result {
        log::warn!("failed to toggle body scroll lock: {:?}", e);
    }
}

pub fn use_modal_service() -> ModalService {
    use_context::<ModalService>().expect("ModalService not provided in context")
}
