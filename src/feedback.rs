//! Timed status messages shown under the forms.
//!
//! DESIGN
//! ======
//! A region shows one message at a time, styled by exactly one class
//! (`success` or `error`), and clears itself after a fixed delay. Every
//! `show` hands out a [`ClearTicket`]; only the newest ticket may clear the
//! region, so a stale timer can never wipe a newer message. The browser
//! emitter additionally cancels the stale timer outright.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// Outcome category; doubles as the region's CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedbackKind {
    Success,
    Error,
}

impl FeedbackKind {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub text: String,
    pub kind: FeedbackKind,
}

impl FeedbackMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: FeedbackKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: FeedbackKind::Error }
    }
}

/// Proof of which `show` scheduled a clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClearTicket(u64);

impl ClearTicket {
    /// Advance `generation` and issue a ticket for it.
    pub(crate) fn next(generation: &mut u64) -> Self {
        *generation = generation.wrapping_add(1);
        Self(*generation)
    }

    pub(crate) fn is_current(self, generation: u64) -> bool {
        self.0 == generation
    }
}

/// Content of one feedback region.
#[derive(Clone, Debug, Default)]
pub struct FeedbackRegion {
    current: Option<FeedbackMessage>,
    generation: u64,
}

impl FeedbackRegion {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace whatever is showing with `message`.
    pub fn show(&mut self, message: FeedbackMessage) -> ClearTicket {
        self.current = Some(message);
        ClearTicket::next(&mut self.generation)
    }

    /// Clear the region if `ticket` belongs to the message still showing.
    /// Returns whether anything was cleared.
    pub fn expire(&mut self, ticket: ClearTicket) -> bool {
        if !ticket.is_current(self.generation) || self.current.is_none() {
            return false;
        }
        self.current = None;
        true
    }

    #[must_use]
    pub fn current(&self) -> Option<&FeedbackMessage> {
        self.current.as_ref()
    }

    /// Text to render; empty when cleared.
    #[must_use]
    pub fn text(&self) -> &str {
        self.current.as_ref().map_or("", |m| m.text.as_str())
    }

    /// Class list to render; empty when cleared.
    #[must_use]
    pub fn class_name(&self) -> &'static str {
        self.current.as_ref().map_or("", |m| m.kind.css_class())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::FeedbackEmitter;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use web_sys::{Document, Element};

    use super::{FeedbackMessage, FeedbackRegion};
    use crate::dom::TimerSlot;

    /// A feedback region bound to its page element and clear delay.
    pub struct FeedbackEmitter {
        element: Element,
        delay_ms: u32,
        region: RefCell<FeedbackRegion>,
        timer: TimerSlot,
    }

    impl FeedbackEmitter {
        /// Bind to the element with `id`; `None` when the page has no such region.
        pub fn find(document: &Document, id: &str, delay_ms: u32) -> Option<Rc<Self>> {
            let element = document.get_element_by_id(id)?;
            Some(Rc::new(Self {
                element,
                delay_ms,
                region: RefCell::new(FeedbackRegion::new()),
                timer: TimerSlot::default(),
            }))
        }

        /// Render `message` now and schedule its clear.
        pub fn show(self: &Rc<Self>, message: FeedbackMessage) {
            let ticket = self.region.borrow_mut().show(message);
            self.render();

            let weak: Weak<Self> = Rc::downgrade(self);
            self.timer.schedule(self.delay_ms, move || {
                let Some(emitter) = weak.upgrade() else {
                    return;
                };
                let cleared = emitter.region.borrow_mut().expire(ticket);
                if cleared {
                    emitter.render();
                }
            });
        }

        fn render(&self) {
            let region = self.region.borrow();
            self.element.set_text_content(Some(region.text()));
            self.element.set_class_name(region.class_name());
        }
    }
}
