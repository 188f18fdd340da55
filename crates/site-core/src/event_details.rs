//! Content for the event-details page.
//!
//! The page is one template; the `event` query parameter selects what fills
//! it. Known events live in a small built-in catalog, anything else may be
//! supplied as embedded markup by the page itself.

use fnv::FnvHashMap;
use smallvec::{smallvec, SmallVec};

pub const NOT_FOUND_TITLE: &str = "Event Not Found";
pub const PARAGRAPH_DELIMITER: char = '✨';

#[derive(Clone, Debug, PartialEq)]
pub struct EventDetails {
    pub title: &'static str,
    pub description: &'static str,
    pub images: SmallVec<[&'static str; 4]>,
    pub link: &'static str,
}

impl EventDetails {
    /// Description pieces between sparkle delimiters, trimmed, blanks dropped.
    pub fn paragraphs(&self) -> Vec<&'static str> {
        split_paragraphs(self.description)
    }
}

pub fn split_paragraphs(description: &str) -> Vec<&str> {
    description
        .split(PARAGRAPH_DELIMITER)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// What the page should show for a given `event` parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum EventContent<'a> {
    Listed(&'a EventDetails),
    /// Not in the catalog; the page may carry `[data-event="<name>"]` markup.
    Embedded(String),
    NotFound,
}

pub struct EventCatalog {
    events: FnvHashMap<&'static str, EventDetails>,
}

impl Default for EventCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl EventCatalog {
    pub fn empty() -> Self {
        Self {
            events: FnvHashMap::default(),
        }
    }

    pub fn builtin() -> Self {
        let mut catalog = Self::empty();
        // key spelling is what existing links on the site use
        catalog.insert(
            "cybersecuirty",
            EventDetails {
                title: "Diving deep into Cybersecurity",
                description: "Yesterday, I had the incredible opportunity to volunteer at the Cybersecurity Event organized by GDSC CIT.✨ It was an enriching experience, helping participants with technical challenges and ensuring smooth event management alongside our amazing team!✨ 📚 What We Did: The first three hours were filled with theoretical insights, introducing participants to the fundamentals of staying secure in this tech-driven world. The final hour? A hands-on session where attendees created a project to track IP addresses remotely—a practical and engaging dive into cybersecurity!✨ 🔑 Key Takeaways: -Fundamentals of staying secure in the tech field. -Basics of Git, Docker, and Ubuntu. -The importance of understanding and practising cybersecurity ✨",
                images: smallvec![
                    "assets/DSC_1108.JPG",
                    "assets/DSC_1428.JPG",
                    "assets/DSC_1115.JPG"
                ],
                link: "https://google.com",
            },
        );
        catalog.insert(
            "quiz",
            EventDetails {
                title: "Coming Soon",
                description: "Engaging quizzes to challenge knowledge and encourage learning.",
                images: smallvec!["assets/update"],
                link: "#",
            },
        );
        catalog
    }

    pub fn insert(&mut self, key: &'static str, details: EventDetails) {
        self.events.insert(key, details);
    }

    pub fn get(&self, key: &str) -> Option<&EventDetails> {
        self.events.get(key)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn resolve(&self, event_param: Option<&str>) -> EventContent<'_> {
        match event_param.map(str::trim) {
            Some(name) if !name.is_empty() => match self.get(name) {
                Some(details) => EventContent::Listed(details),
                None => EventContent::Embedded(name.to_string()),
            },
            _ => EventContent::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_event_is_listed() {
        let c = EventCatalog::builtin();
        match c.resolve(Some("quiz")) {
            EventContent::Listed(d) => assert_eq!(d.title, "Coming Soon"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn unknown_event_falls_back_to_markup() {
        let c = EventCatalog::builtin();
        assert_eq!(
            c.resolve(Some("hackathon")),
            EventContent::Embedded("hackathon".into())
        );
        assert_eq!(c.resolve(None), EventContent::NotFound);
        assert_eq!(c.resolve(Some("  ")), EventContent::NotFound);
    }

    #[test]
    fn description_splits_on_sparkles() {
        let c = EventCatalog::builtin();
        let d = c.get("cybersecuirty").unwrap();
        let paras = d.paragraphs();
        assert_eq!(paras.len(), 4);
        assert!(paras[0].starts_with("Yesterday"));
        assert!(paras[0].ends_with("GDSC CIT."));
        assert!(paras[3].starts_with("🔑 Key Takeaways"));
        assert!(paras.iter().all(|p| !p.contains(PARAGRAPH_DELIMITER)));
        assert_eq!(d.images.len(), 3);
    }

    #[test]
    fn split_drops_blank_pieces() {
        assert_eq!(split_paragraphs(" a ✨✨ b ✨"), vec!["a", "b"]);
        assert!(split_paragraphs("").is_empty());
    }
}
