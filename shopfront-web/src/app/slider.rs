//! `#dealSlider` rotation.
use crate::dom::{self, Interval, Listener};
use shopfront_core::{SlideChange, SliderState};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use web_sys::Element;

const ACTIVE: &str = "is-active";

pub struct DealSlider {
    me: Weak<Self>,
    slides: Vec<Element>,
    state: RefCell<SliderState>,
    delay_ms: u32,
    timer: RefCell<Option<Interval>>,
    _hover: Vec<Listener>,
}

impl DealSlider {
    /// Bind to `#dealSlider` and its `.deal-slide` children and start
    /// rotating. Returns `None` when the page has no slider or no slides.
    #[must_use]
    pub fn mount(delay_ms: u32) -> Option<Rc<Self>> {
        let host = dom::by_id("dealSlider")?;
        let slides = dom::query_all(&host, ".deal-slide");
        let state = SliderState::new(slides.len())?;
        let slider = Rc::new_cyclic(|me: &Weak<Self>| {
            let hover = [("mouseenter", true), ("mouseleave", false)]
                .into_iter()
                .filter_map(|(event, entering)| {
                    let me = me.clone();
                    Listener::new(&host, event, move |_| {
                        if let Some(this) = me.upgrade() {
                            this.hover(entering);
                        }
                    })
                    .map_err(|e| {
                        log::warn!("slider {event} not bound: {}", dom::js_error_message(&e));
                    })
                    .ok()
                })
                .collect();
            Self {
                me: me.clone(),
                slides,
                state: RefCell::new(state),
                delay_ms,
                timer: RefCell::new(None),
                _hover: hover,
            }
        });
        slider.paint_all();
        slider.start();
        Some(slider)
    }

    fn paint_all(&self) {
        let state = self.state.borrow();
        for (idx, slide) in self.slides.iter().enumerate() {
            let _ = slide
                .class_list()
                .toggle_with_force(ACTIVE, state.is_active(idx));
        }
    }

    fn paint(&self, change: SlideChange) {
        if let Some(prev) = self.slides.get(change.previous) {
            let _ = prev.class_list().remove_1(ACTIVE);
        }
        if let Some(cur) = self.slides.get(change.current) {
            let _ = cur.class_list().add_1(ACTIVE);
        }
    }

    fn tick(&self) {
        let change = self.state.borrow_mut().tick();
        if let Some(change) = change {
            self.paint(change);
        }
    }

    fn start(&self) {
        let me = self.me.clone();
        let interval = Interval::new(self.delay_ms, move || {
            if let Some(this) = me.upgrade() {
                this.tick();
            }
        })
        .map_err(|e| log::warn!("slider timer not scheduled: {}", dom::js_error_message(&e)))
        .ok();
        *self.timer.borrow_mut() = interval;
    }

    fn hover(&self, entering: bool) {
        let mut state = self.state.borrow_mut();
        if entering {
            state.pointer_enter();
            drop(state);
            *self.timer.borrow_mut() = None;
        } else {
            state.pointer_leave();
            drop(state);
            self.start();
        }
    }
}
