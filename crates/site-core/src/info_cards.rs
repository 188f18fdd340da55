/// The "about us" cards swap their caption for `data-hover-text` on hover and
/// restore a caption chosen by their status class when the pointer leaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfoCardKind {
    Error,
    Info,
    Success,
    Warning,
}

impl InfoCardKind {
    /// In precedence order.
    pub const ALL: [Self; 4] = [Self::Error, Self::Info, Self::Success, Self::Warning];

    pub fn class(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }

    pub fn from_class(class: &str) -> Option<Self> {
        match class {
            "error" => Some(Self::Error),
            "info" => Some(Self::Info),
            "success" => Some(Self::Success),
            "warning" => Some(Self::Warning),
            _ => None,
        }
    }

    /// First recognised class wins, in the order the stylesheet checks them.
    pub fn from_class_list<'a>(classes: impl IntoIterator<Item = &'a str>) -> Option<Self> {
        let kinds: Vec<Self> = classes.into_iter().filter_map(Self::from_class).collect();
        Self::ALL
            .into_iter()
            .find(|k| kinds.contains(k))
    }

    pub fn idle_text(self) -> &'static str {
        match self {
            Self::Error => "Know more about us?",
            Self::Info => "What do we do?",
            Self::Success => "Why Join Us??",
            Self::Warning => "Our Vison..",
        }
    }
}
