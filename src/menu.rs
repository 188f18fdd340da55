use crate::constants::*;
use crate::dom;
use site_core::NavMenu;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
struct MenuWiring {
    hamburger: web::Element,
    nav: web::Element,
    state: Rc<RefCell<NavMenu>>,
}

impl MenuWiring {
    fn render(&self) {
        let open = self.state.borrow().is_open();
        for el in [&self.hamburger, &self.nav] {
            if open {
                dom::add_class(el, CLASS_ACTIVE);
            } else {
                dom::remove_class(el, CLASS_ACTIVE);
            }
        }
    }
}

pub fn init(document: &web::Document) -> bool {
    let (Some(hamburger), Some(nav)) = (
        dom::query(document, HAMBURGER_SELECTOR),
        dom::query(document, NAV_MENU_SELECTOR),
    ) else {
        log::debug!("[menu] no navigation on this page");
        return false;
    };
    let w = MenuWiring {
        hamburger,
        nav,
        state: Rc::new(RefCell::new(NavMenu::new())),
    };

    let wt = w.clone();
    dom::listen(&w.hamburger, "click", move |_: web::Event| {
        let open = wt.state.borrow_mut().toggle();
        wt.render();
        log::debug!("[menu] open={}", open);
    });

    for link in dom::query_all_in_document(document, NAV_LINK_SELECTOR) {
        let wl = w.clone();
        dom::listen(&link, "click", move |_: web::Event| {
            if wl.state.borrow_mut().close() {
                wl.render();
            }
        });
    }

    let wd = w.clone();
    dom::listen(document, "click", move |ev: web::Event| {
        let inside = dom::contains_target(&wd.hamburger, &ev) || dom::contains_target(&wd.nav, &ev);
        if wd.state.borrow_mut().on_document_click(inside) {
            wd.render();
        }
    });

    if let Some(window) = web::window() {
        let wr = w.clone();
        dom::listen(&window, "resize", move |_: web::Event| {
            let (width, _) = dom::viewport_size();
            if wr.state.borrow_mut().on_resize(width) {
                wr.render();
            }
        });
    }
    true
}
