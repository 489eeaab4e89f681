use crate::constants::{
    NEWSLETTER_BUSY_HTML, NEWSLETTER_BUTTON_SELECTOR, NEWSLETTER_FORM_ID,
    NEWSLETTER_INPUT_SELECTOR, SUBSCRIPTION_SUCCESS_CLASS,
};
use crate::dom;
use crate::toast::Toasts;
use martone_core::config::FxConfig;
use martone_core::constants::NEWSLETTER_SUCCESS_HOLD_MS;
use martone_core::error::SubmitError;
use martone_core::newsletter::{
    FieldValidity, Newsletter, Subscribed, INVALID_EMAIL_MESSAGE, SUBSCRIBED_MESSAGE,
};
use martone_core::notify::NotificationKind;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

// re-check interval while waiting on the simulated round-trip
const POLL_MS: f64 = 10.0;

#[derive(Clone)]
struct SignupForm {
    form: web::Element,
    input: web::HtmlInputElement,
    button: Option<web::HtmlButtonElement>,
    signup: Rc<RefCell<Newsletter>>,
    toasts: Toasts,
}

impl SignupForm {
    fn set_busy(&self, busy: bool, idle_html: &str) {
        if let Some(button) = &self.button {
            button.set_disabled(busy);
            button.set_inner_html(if busy { NEWSLETTER_BUSY_HTML } else { idle_html });
        }
    }

    fn submit(&self) {
        let email = self.input.value();
        match self.signup.borrow_mut().submit(&email, dom::now_ms()) {
            Ok(()) => {}
            Err(SubmitError::Invalid(e)) => {
                log::info!("[newsletter] rejected: {e}");
                self.toasts.notify(INVALID_EMAIL_MESSAGE, NotificationKind::Error);
                return;
            }
            Err(SubmitError::Pending) => {
                log::debug!("[newsletter] submit ignored while pending");
                return;
            }
        }

        let idle_html = self
            .button
            .as_ref()
            .map(|b| b.inner_html())
            .unwrap_or_default();
        self.set_busy(true, &idle_html);
        let this = self.clone();
        spawn_local(async move {
            let ack_ms = this.signup.borrow().ack_ms();
            dom::sleep_ms(ack_ms).await;
            let done = loop {
                if let Some(done) = this.signup.borrow_mut().poll(dom::now_ms()) {
                    break done;
                }
                dom::sleep_ms(POLL_MS).await;
            };
            this.acknowledge(done, &idle_html);
        });
    }

    fn acknowledge(&self, done: Subscribed, idle_html: &str) {
        log::info!("[newsletter] subscribed ({} chars)", done.email.len());
        self.toasts.notify(SUBSCRIBED_MESSAGE, NotificationKind::Success);
        self.input.set_value("");
        self.set_busy(false, idle_html);
        _ = self.form.class_list().add_1(SUBSCRIPTION_SUCCESS_CLASS);
        let form = self.form.clone();
        dom::set_timeout(NEWSLETTER_SUCCESS_HOLD_MS, move || {
            _ = form.class_list().remove_1(SUBSCRIPTION_SUCCESS_CLASS);
        });
    }

    fn refresh_validity(&self) {
        let validity = FieldValidity::of(&self.input.value());
        let classes = self.input.class_list();
        _ = classes.remove_2("is-valid", "is-invalid");
        if let Some(class) = validity.class() {
            _ = classes.add_1(class);
        }
    }
}

/// Newsletter form: live validation and the simulated subscription.
pub fn wire_newsletter(document: &web::Document, cfg: &FxConfig, toasts: &Toasts) -> anyhow::Result<()> {
    let Some(form) = document.get_element_by_id(NEWSLETTER_FORM_ID) else {
        return Ok(());
    };
    let input = dom::query_one::<web::HtmlInputElement>(&form, NEWSLETTER_INPUT_SELECTOR)
        .ok_or_else(|| anyhow::anyhow!("newsletter form has no email input"))?;
    let signup = SignupForm {
        button: dom::query_one(&form, NEWSLETTER_BUTTON_SELECTOR),
        form: form.clone(),
        input: input.clone(),
        signup: Rc::new(RefCell::new(Newsletter::new(cfg.newsletter_ack_ms))),
        toasts: toasts.clone(),
    };

    let on_submit = signup.clone();
    dom::add_listener::<web::Event>(&form, "submit", move |ev| {
        ev.prevent_default();
        on_submit.submit();
    });
    dom::add_listener::<web::Event>(&input, "input", move |_| signup.refresh_validity());
    Ok(())
}
