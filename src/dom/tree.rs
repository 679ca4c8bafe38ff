//! Element arena and the width/font-size model.

use std::collections::HashMap;

use super::metrics::estimate_text_width;
use super::selector::Selector;

/// Index into the document's element arena.
pub type NodeId = usize;

/// Font size (px) used when neither the element nor any ancestor sets one.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// A single element: identity, text content, tree links, inline styles and
/// the block-layout width inputs.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub text: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    styles: HashMap<String, String>,
    /// Explicit block width in px. Takes precedence over `width_fraction`.
    pub width_px: Option<f64>,
    /// Block width as a fraction of the viewport width.
    pub width_fraction: Option<f64>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            id: None,
            classes: Vec::new(),
            text: String::new(),
            children: Vec::new(),
            parent: None,
            styles: HashMap::new(),
            width_px: None,
            width_fraction: None,
        }
    }

    pub fn style(&self, property: &str) -> Option<&str> {
        self.styles.get(property).map(|s| s.as_str())
    }
}

/// An owned element tree with a viewport. Index 0 is the body; removal
/// detaches a subtree, and arena slots are never reused.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Element>,
    viewport_width: f64,
}

const BODY: NodeId = 0;

impl Document {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            nodes: vec![Element::new("body")],
            viewport_width,
        }
    }

    pub fn body(&self) -> NodeId {
        BODY
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Simulates a window resize. Block widths derived from the viewport
    /// change immediately; nothing is recomputed here.
    pub fn set_viewport_width(&mut self, width: f64) {
        self.viewport_width = width;
    }

    pub fn element(&self, id: NodeId) -> &Element {
        &self.nodes[id]
    }

    /// Create a detached element.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        self.nodes.push(Element::new(tag));
        self.nodes.len() - 1
    }

    pub fn set_id(&mut self, id: NodeId, value: &str) {
        self.nodes[id].id = Some(value.to_string());
    }

    pub fn add_class(&mut self, id: NodeId, class: &str) {
        self.nodes[id].classes.push(class.to_string());
    }

    pub fn set_text(&mut self, id: NodeId, text: &str) {
        self.nodes[id].text = text.to_string();
    }

    pub fn set_width_px(&mut self, id: NodeId, width: f64) {
        self.nodes[id].width_px = Some(width);
    }

    pub fn set_width_fraction(&mut self, id: NodeId, fraction: f64) {
        self.nodes[id].width_fraction = Some(fraction);
    }

    /// Append `child` under `parent`, detaching it from any previous parent.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    pub fn append_to_body(&mut self, child: NodeId) {
        self.append_child(BODY, child);
    }

    /// Remove an element (and with it, its subtree) from the document.
    pub fn remove(&mut self, id: NodeId) {
        self.detach(id);
    }

    fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id].parent.take() {
            self.nodes[parent].children.retain(|&c| c != id);
        }
    }

    /// Deep-copy a subtree. The copy is detached and shares nothing with
    /// the original.
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        let mut copy = self.nodes[id].clone();
        copy.parent = None;
        let children = std::mem::take(&mut copy.children);
        self.nodes.push(copy);
        let clone_id = self.nodes.len() - 1;
        for child in children {
            let child_clone = self.clone_subtree(child);
            self.append_child(clone_id, child_clone);
        }
        clone_id
    }

    pub fn set_style(&mut self, id: NodeId, property: &str, value: &str) {
        self.nodes[id]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    pub fn style(&self, id: NodeId, property: &str) -> Option<&str> {
        self.nodes[id].style(property)
    }

    /// Effective font size in px: the nearest inline `font-size` walking up
    /// from `id`, or [`DEFAULT_FONT_SIZE`].
    pub fn font_size(&self, id: NodeId) -> f64 {
        let mut current = Some(id);
        while let Some(node) = current {
            if let Some(value) = self.nodes[node].style("font-size") {
                if let Some(px) = parse_font_size(value) {
                    return px;
                }
            }
            current = self.nodes[node].parent;
        }
        DEFAULT_FONT_SIZE
    }

    /// Rendered pixel width.
    ///
    /// Inline elements shrink-wrap their text: width is the subtree text
    /// measured at the effective font size. Block elements take their
    /// layout width: explicit px, else a fraction of the viewport, else
    /// the full viewport.
    pub fn width(&self, id: NodeId) -> f64 {
        let el = &self.nodes[id];
        if el.style("display") == Some("inline") {
            return estimate_text_width(&self.collect_text(id), self.font_size(id));
        }
        if let Some(px) = el.width_px {
            return px;
        }
        if let Some(fraction) = el.width_fraction {
            return fraction * self.viewport_width;
        }
        self.viewport_width
    }

    /// Concatenated text of an element and its descendants.
    pub fn collect_text(&self, id: NodeId) -> String {
        let mut out = self.nodes[id].text.clone();
        for &child in &self.nodes[id].children {
            out.push_str(&self.collect_text(child));
        }
        out
    }

    /// All attached elements matching `selector`, in document order
    /// (depth-first from the body, the order a host selector API returns).
    pub fn query_selector_all(&self, selector: &Selector) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_matches(BODY, selector, &mut out);
        out
    }

    fn collect_matches(&self, id: NodeId, selector: &Selector, out: &mut Vec<NodeId>) {
        if id != BODY && selector.matches(&self.nodes[id]) {
            out.push(id);
        }
        for &child in &self.nodes[id].children {
            self.collect_matches(child, selector, out);
        }
    }
}

/// Parse an inline font-size value: `px`, `pt` (converted at 96 dpi) or a
/// bare number taken as px.
fn parse_font_size(value: &str) -> Option<f64> {
    let value = value.trim();
    if let Some(n) = value.strip_suffix("px") {
        return n.trim().parse().ok();
    }
    if let Some(n) = value.strip_suffix("pt") {
        return n.trim().parse::<f64>().ok().map(|pt| pt * 96.0 / 72.0);
    }
    value.parse().ok()
}
