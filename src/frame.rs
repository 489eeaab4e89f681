use crate::dom;
use martone_core::animator::{Animation, Animator};
use martone_core::tasks::StopHandle;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive `tick` from `requestAnimationFrame` until `stop` is raised or
/// `tick` returns `false`. `tick` receives the frame timestamp in ms.
pub fn start_loop(stop: StopHandle, mut tick: impl FnMut(f64) -> bool + 'static) {
    let raf: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let raf_clone = raf.clone();
    *raf.borrow_mut() = Some(Closure::wrap(Box::new(move |_ts: f64| {
        if stop.is_stopped() || !tick(dom::now_ms()) {
            return;
        }
        request_frame(&raf_clone);
    }) as Box<dyn FnMut(f64)>));
    request_frame(&raf);
}

fn request_frame(raf: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = raf.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Run `f` once on the next rendered frame.
pub fn on_next_frame(f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(move |_ts: f64| f());
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

/// Shared property animator. Animations started from anywhere (including
/// from inside another animation's callbacks) are queued and picked up on
/// the next frame; the frame loop only runs while something is in flight.
#[derive(Clone, Default)]
pub struct Motion {
    animator: Rc<RefCell<Animator>>,
    queued: Rc<RefCell<Vec<Animation>>>,
    running: Rc<RefCell<bool>>,
}

impl Motion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self, animation: Animation) {
        self.queued.borrow_mut().push(animation);
        if *self.running.borrow() {
            return;
        }
        *self.running.borrow_mut() = true;
        let this = self.clone();
        start_loop(StopHandle::new(), move |now| this.tick(now));
    }

    fn tick(&self, now: f64) -> bool {
        let queued: Vec<Animation> = self.queued.borrow_mut().drain(..).collect();
        let mut animator = self.animator.borrow_mut();
        for a in queued {
            animator.start(a);
        }
        animator.tick(now);
        let busy = !animator.is_idle() || !self.queued.borrow().is_empty();
        if !busy {
            *self.running.borrow_mut() = false;
        }
        busy
    }
}
