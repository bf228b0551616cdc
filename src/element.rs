use std::collections::HashMap;

/// Attribute holding the Meetup group the element should display.
pub const GROUP_ATTRIBUTE: &str = "data-meetup-group";

/// A page element the next event can be rendered into.
pub trait Element {
    fn attribute(&self, name: &str) -> Option<String>;

    /// Replace the element's content.
    fn set_inner_html(&mut self, html: String);

    fn set_opacity(&mut self, opacity: f32);
}

/// An element kept in memory, for hosts that assemble pages server side.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryElement {
    pub attributes: HashMap<String, String>,

    pub inner_html: String,

    /// `None` until a style has been applied.
    pub opacity: Option<f32>,
}

impl MemoryElement {
    pub fn new() -> MemoryElement {
        MemoryElement::default()
    }

    pub fn for_group(group: &str) -> MemoryElement {
        let mut element = MemoryElement::default();
        element
            .attributes
            .insert(GROUP_ATTRIBUTE.to_string(), group.to_string());
        element
    }
}

impl Element for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.attributes.get(name).cloned()
    }

    fn set_inner_html(&mut self, html: String) {
        self.inner_html = html;
    }

    fn set_opacity(&mut self, opacity: f32) {
        self.opacity = Some(opacity);
    }
}
