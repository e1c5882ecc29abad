//! Page model and display sink
//!
//! The calculator never holds references to page elements. Rendering
//! produces a [`DisplayText`], and whoever owns the page writes it through a
//! [`DisplaySink`]. [`MockDom`] is an in-memory page with the calculator's
//! output regions and keypad buttons, used by the driver and in tests.

use crate::config::DriverConfig;
use crate::core::{CalcResult, DisplayText};
use crate::keypad::Keypad;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, VecDeque};
use tracing::trace;

/// Attribute marking the element that shows the previous operand
pub const PREVIOUS_ATTR: &str = "data-previous";

/// Attribute marking the element that shows the current entry
pub const CURRENT_ATTR: &str = "data-current";

/// Anything that can show the two display lines
pub trait DisplaySink {
    /// Replaces the shown text with `display`
    fn show(&mut self, display: &DisplayText);
}

impl DisplaySink for DisplayText {
    fn show(&mut self, display: &DisplayText) {
        self.clone_from(display);
    }
}

/// Represents a DOM element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: BTreeMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// True if the element carries the attribute, with any value
    #[must_use]
    pub fn has_attr(&self, key: &str) -> bool {
        self.attributes.contains_key(key)
    }
}

/// A click dispatched on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickEvent {
    /// The ID of the clicked element
    pub element_id: String,
}

impl ClickEvent {
    /// Creates a click event
    #[must_use]
    pub fn new(element_id: &str) -> Self {
        Self {
            element_id: element_id.to_string(),
        }
    }
}

/// Serializable view of the page used for snapshots
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSnapshot {
    /// Text of the previous-operand region
    pub previous: String,
    /// Text of the current-entry region
    pub current: String,
    /// Clicked element ids, oldest first
    pub clicks: Vec<String>,
}

/// In-memory page for the calculator
#[derive(Debug)]
pub struct MockDom {
    /// Elements in document order
    elements: Vec<DomElement>,
    /// Click history for verification
    event_history: VecDeque<ClickEvent>,
    config: DriverConfig,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty page
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DriverConfig::default())
    }

    /// Creates an empty page with the given configuration
    #[must_use]
    pub fn with_config(config: DriverConfig) -> Self {
        Self {
            elements: Vec::new(),
            event_history: VecDeque::new(),
            config,
        }
    }

    /// Creates the calculator page: two output regions followed by the keypad
    #[must_use]
    pub fn calculator(keypad: &Keypad, config: DriverConfig) -> Self {
        let mut dom = Self::with_config(config);

        dom.register_element(
            DomElement::new("div")
                .with_id("previous-operand")
                .with_attr(PREVIOUS_ATTR, "")
                .with_class("previous-operand"),
        );
        dom.register_element(
            DomElement::new("div")
                .with_id("current-operand")
                .with_attr(CURRENT_ATTR, "")
                .with_class("current-operand"),
        );
        for button in keypad.create_dom_elements() {
            dom.register_element(button);
        }
        dom
    }

    /// Registers an element; an element with the same ID is replaced
    pub fn register_element(&mut self, element: DomElement) {
        if element.id.is_empty() {
            return;
        }
        match self.elements.iter_mut().find(|e| e.id == element.id) {
            Some(existing) => *existing = element,
            None => self.elements.push(element),
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    /// All elements carrying an attribute, in document order
    #[must_use]
    pub fn query_selector_all(&self, attr: &str) -> Vec<&DomElement> {
        self.elements.iter().filter(|e| e.has_attr(attr)).collect()
    }

    /// First element carrying an attribute
    #[must_use]
    pub fn query_selector(&self, attr: &str) -> Option<&DomElement> {
        self.elements.iter().find(|e| e.has_attr(attr))
    }

    fn query_selector_mut(&mut self, attr: &str) -> Option<&mut DomElement> {
        self.elements.iter_mut().find(|e| e.has_attr(attr))
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.get_element(id).map(|e| e.text_content.as_str())
    }

    /// Records a click, dropping the oldest once `max_events` is reached
    pub fn dispatch_click(&mut self, element_id: &str) {
        if !self.config.record_events || self.config.max_events == 0 {
            return;
        }
        if self.event_history.len() >= self.config.max_events {
            self.event_history.pop_front();
        }
        self.event_history.push_back(ClickEvent::new(element_id));
    }

    /// Gets the click history, oldest first
    #[must_use]
    pub fn event_history(&self) -> &VecDeque<ClickEvent> {
        &self.event_history
    }

    /// Clears click history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Text of the current-entry region
    #[must_use]
    pub fn current_text(&self) -> &str {
        self.query_selector(CURRENT_ATTR)
            .map_or("", |e| e.text_content.as_str())
    }

    /// Text of the previous-operand region
    #[must_use]
    pub fn previous_text(&self) -> &str {
        self.query_selector(PREVIOUS_ATTR)
            .map_or("", |e| e.text_content.as_str())
    }

    /// Captures the display and click history
    #[must_use]
    pub fn snapshot(&self) -> PageSnapshot {
        PageSnapshot {
            previous: self.previous_text().to_string(),
            current: self.current_text().to_string(),
            clicks: self
                .event_history
                .iter()
                .map(|e| e.element_id.clone())
                .collect(),
        }
    }

    /// Snapshot as pretty-printed JSON
    pub fn snapshot_json(&self) -> CalcResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

impl DisplaySink for MockDom {
    fn show(&mut self, text: &DisplayText) {
        if let Some(current) = self.query_selector_mut(CURRENT_ATTR) {
            current.set_text(&text.current);
        }
        if let Some(previous) = self.query_selector_mut(PREVIOUS_ATTR) {
            previous.set_text(&text.previous);
        }
        trace!(current = %text.current, previous = %text.previous, "display updated");
    }
}
