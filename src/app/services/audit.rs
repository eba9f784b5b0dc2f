use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Heading(u8),
    Link,
    Button,
    Image,
}

/// Just enough of a page element to judge whether it is labelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
    pub kind: ElementKind,
    pub text: String,
    pub aria_label: Option<String>,
    pub alt: Option<String>,
}

impl PageElement {
    pub fn new(kind: ElementKind, text: &str) -> Self {
        Self {
            kind,
            text: text.to_string(),
            aria_label: None,
            alt: None,
        }
    }

    pub fn with_aria_label(mut self, label: &str) -> Self {
        self.aria_label = Some(label.to_string());
        self
    }

    fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }

    fn has_label(&self) -> bool {
        self.has_text() || self.aria_label.as_deref().is_some_and(|l| !l.is_empty())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessibilityIssue {
    EmptyHeading,
    UnlabeledLink,
    UnlabeledButton,
}

impl fmt::Display for AccessibilityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AccessibilityIssue::EmptyHeading => "Heading vazio encontrado",
            AccessibilityIssue::UnlabeledLink => "Link sem texto encontrado",
            AccessibilityIssue::UnlabeledButton => "Botão sem texto encontrado",
        };
        f.write_str(text)
    }
}

/// Report headings without text and links/buttons without text or aria-label.
/// Issues are grouped by kind: headings, then links, then buttons.
pub fn audit_page(elements: &[PageElement]) -> Vec<AccessibilityIssue> {
    let headings = elements
        .iter()
        .filter(|e| matches!(e.kind, ElementKind::Heading(_)) && !e.has_text())
        .map(|_| AccessibilityIssue::EmptyHeading);
    let links = elements
        .iter()
        .filter(|e| e.kind == ElementKind::Link && !e.has_label())
        .map(|_| AccessibilityIssue::UnlabeledLink);
    let buttons = elements
        .iter()
        .filter(|e| e.kind == ElementKind::Button && !e.has_label())
        .map(|_| AccessibilityIssue::UnlabeledButton);

    headings.chain(links).chain(buttons).collect()
}

/// Give every image without `alt` a numbered description. Returns how many were filled.
pub fn add_image_descriptions(elements: &mut [PageElement]) -> usize {
    let mut filled = 0;
    for element in elements
        .iter_mut()
        .filter(|e| e.kind == ElementKind::Image && e.alt.is_none())
    {
        filled += 1;
        element.alt = Some(format!("Imagem descritiva {}", filled));
    }
    filled
}
