use crate::constants::*;
use crate::dom;
use site_core::event_details::split_paragraphs;
use site_core::{EventCatalog, EventContent, EventDetails, NOT_FOUND_TITLE};
use wasm_bindgen::JsCast;
use web_sys as web;

fn append_paragraph(document: &web::Document, container: &web::Element, text: &str) {
    if let Ok(p) = document.create_element("p") {
        p.set_text_content(Some(text));
        _ = container.append_child(&p);
    }
}

fn wire_download(document: &web::Document, link: String) {
    let Some(button) = dom::query(document, EVENT_DOWNLOAD_SELECTOR) else {
        return;
    };
    dom::listen(&button, "click", move |_: web::Event| {
        if let Some(w) = web::window() {
            if let Err(e) = w.open_with_url_and_target(&link, "_blank") {
                log::warn!("[event] window.open failed: {:?}", e);
            }
        }
    });
}

fn render_listed(document: &web::Document, title_el: &web::Element, details: &EventDetails) {
    title_el.set_text_content(Some(details.title));
    if let Some(container) = document.get_element_by_id(EVENT_DESCRIPTION_ID) {
        for paragraph in details.paragraphs() {
            append_paragraph(document, &container, paragraph);
        }
    }
    if let Some(gallery) = dom::query(document, IMAGE_GALLERY_SELECTOR) {
        for src in &details.images {
            let img = document
                .create_element("img")
                .ok()
                .and_then(|el| el.dyn_into::<web::HtmlImageElement>().ok());
            if let Some(img) = img {
                img.set_src(src);
                img.set_alt(details.title);
                _ = gallery.append_child(&img);
            }
        }
    }
    wire_download(document, details.link.to_string());
}

/// Markup shipped in the page itself: `[data-event="<name>"]`, either a
/// `<template>` or a hidden element whose children are copied over.
fn render_embedded(document: &web::Document, title_el: &web::Element, name: &str) -> bool {
    let source = dom::query_all_in_document(document, &format!("[{}]", EMBEDDED_EVENT_ATTR))
        .into_iter()
        .find(|el| el.get_attribute(EMBEDDED_EVENT_ATTR).as_deref() == Some(name));
    let Some(source) = source else {
        return false;
    };
    let title = source
        .get_attribute(EMBEDDED_TITLE_ATTR)
        .unwrap_or_else(|| name.to_string());
    title_el.set_text_content(Some(&title));

    if let Some(container) = document.get_element_by_id(EVENT_DESCRIPTION_ID) {
        if let Some(template) = source.dyn_ref::<web::HtmlTemplateElement>() {
            if let Ok(copy) = template.content().clone_node_with_deep(true) {
                _ = container.append_child(&copy);
            }
        } else {
            let children = source.child_nodes();
            let has_elements = source.child_element_count() > 0;
            if has_elements {
                for i in 0..children.length() {
                    if let Some(copy) = children.item(i).and_then(|n| n.clone_node_with_deep(true).ok()) {
                        _ = container.append_child(&copy);
                    }
                }
            } else {
                // plain text markup uses the same sparkle delimiters as the catalog
                let text = source.text_content().unwrap_or_default();
                for paragraph in split_paragraphs(&text) {
                    append_paragraph(document, &container, paragraph);
                }
            }
        }
    }
    if let Some(link) = source.get_attribute(EMBEDDED_LINK_ATTR) {
        wire_download(document, link);
    }
    true
}

pub fn init(document: &web::Document) -> anyhow::Result<bool> {
    let Some(title_el) = document.get_element_by_id(EVENT_TITLE_ID) else {
        return Ok(false);
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let search = window
        .location()
        .search()
        .map_err(|e| anyhow::anyhow!("location.search: {:?}", e))?;
    let params = web::UrlSearchParams::new_with_str(&search)
        .map_err(|e| anyhow::anyhow!("URLSearchParams: {:?}", e))?;
    let requested = params.get(EVENT_QUERY_PARAM);

    let catalog = EventCatalog::builtin();
    let shown = match catalog.resolve(requested.as_deref()) {
        EventContent::Listed(details) => {
            render_listed(document, &title_el, details);
            true
        }
        EventContent::Embedded(name) => render_embedded(document, &title_el, &name),
        EventContent::NotFound => false,
    };
    if !shown {
        title_el.set_text_content(Some(NOT_FOUND_TITLE));
        log::warn!("[event] no details for {:?}", requested);
    } else {
        log::info!("[event] showing {:?}", requested);
    }
    Ok(true)
}
