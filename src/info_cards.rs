use crate::constants::{HOVER_TEXT_ATTR, INFO_CARD_SELECTOR, INFO_TEXT_SELECTOR};
use crate::dom;
use site_core::InfoCardKind;
use web_sys as web;

/// Swap each info card's caption for its hover text while the pointer is over it.
pub fn init(document: &web::Document) -> usize {
    let mut wired = 0;
    for card in dom::query_all_in_document(document, INFO_CARD_SELECTOR) {
        let Some(text) = dom::query_all(&card, INFO_TEXT_SELECTOR).into_iter().next() else {
            continue;
        };

        let text_enter = text.clone();
        dom::listen(&card, "mouseenter", move |_: web::Event| {
            if let Some(hover) = text_enter.get_attribute(HOVER_TEXT_ATTR) {
                text_enter.set_text_content(Some(&hover));
            }
        });

        let card_leave = card.clone();
        dom::listen(&card, "mouseleave", move |_: web::Event| {
            let classes = card_leave.class_name();
            if let Some(kind) = InfoCardKind::from_class_list(classes.split_whitespace()) {
                text.set_text_content(Some(kind.idle_text()));
            }
        });
        wired += 1;
    }
    wired
}
