//! Navigation highlighting: the active link follows clicks and scroll position.

/// How far above a section's top the scroll position counts as "inside" it.
pub const SCROLL_SPY_OFFSET: f64 = 200.0;

#[derive(Debug, Clone, PartialEq)]
pub struct NavLink {
    /// In-page anchor, e.g. `#cursos`
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

impl Section {
    pub fn new(id: &str, top: f64, height: f64) -> Self {
        Self {
            id: id.to_string(),
            top,
            height,
        }
    }

    fn contains(&self, scroll_y: f64) -> bool {
        scroll_y >= self.top - SCROLL_SPY_OFFSET && scroll_y < self.top + self.height - SCROLL_SPY_OFFSET
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavMenu {
    links: Vec<NavLink>,
    sections: Vec<Section>,
}

impl NavMenu {
    pub fn new<'a>(hrefs: impl IntoIterator<Item = &'a str>, sections: Vec<Section>) -> Self {
        let links = hrefs
            .into_iter()
            .map(|href| NavLink {
                href: href.to_string(),
                active: false,
            })
            .collect();
        Self { links, sections }
    }

    pub fn links(&self) -> &[NavLink] {
        &self.links
    }

    pub fn active_href(&self) -> Option<&str> {
        self.links.iter().find(|l| l.active).map(|l| l.href.as_str())
    }

    /// Make the clicked link the only active one. Returns false for an unknown index.
    pub fn click(&mut self, index: usize) -> bool {
        if index >= self.links.len() {
            return false;
        }
        for (i, link) in self.links.iter_mut().enumerate() {
            link.active = i == index;
        }
        true
    }

    /// Highlight the link of the section under `scroll_y`.
    /// Later sections win when ranges overlap. Returns the current section id.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<&str> {
        let current = self
            .sections
            .iter()
            .rev()
            .find(|s| s.contains(scroll_y))
            .map(|s| s.id.as_str());

        for link in &mut self.links {
            link.active = match current {
                Some(id) => link.href.strip_prefix('#') == Some(id),
                None => false,
            };
        }
        current
    }
}
