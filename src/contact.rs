use crate::constants::*;
use crate::dom;
use site_core::ContactSubmission;
use wasm_bindgen::JsCast;
use web_sys as web;

fn field_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

/// Local-only contact form: log, thank the visitor, clear the fields.
pub fn init(document: &web::Document) -> bool {
    let form = dom::query(document, CONTACT_FORM_SELECTOR)
        .and_then(|el| el.dyn_into::<web::HtmlFormElement>().ok());
    let Some(form) = form else {
        log::debug!("[contact] no contact form on this page");
        return false;
    };
    let doc = document.clone();
    let form_reset = form.clone();
    dom::listen(&form, "submit", move |ev: web::Event| {
        ev.prevent_default();
        let [first, last, email, message] = CONTACT_FIELD_IDS.map(|id| field_value(&doc, id));
        let submission = ContactSubmission::new(first, last, email, message);
        log::info!("[contact] form submitted: {}", submission);
        if let Some(w) = web::window() {
            _ = w.alert_with_message(submission.acknowledgement());
        }
        form_reset.reset();
    });
    true
}
