// ABOUTME: Complete HTML document wrapper.
// ABOUTME: Holds finished head/body trees and frames them on render.

use crate::element::Element;
use crate::render::escape_into;

/// A full page. Head and body elements are appended as finished trees;
/// nothing is rebuilt or shared between documents.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    head: Vec<Element>,
    body: Vec<Element>,
}

impl Document {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            head: Vec::new(),
            body: Vec::new(),
        }
    }

    pub fn add_head(&mut self, element: Element) {
        self.head.push(element);
    }

    pub fn add_body(&mut self, element: Element) {
        self.body.push(element);
    }

    /// Serialize the whole page. The title always comes first in the head.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(16 * 1024);
        out.push_str("<!DOCTYPE html><html><head><title>");
        escape_into(&mut out, &self.title);
        out.push_str("</title>");
        for element in &self.head {
            element.render_into(&mut out);
        }
        out.push_str("</head><body>");
        for element in &self.body {
            element.render_into(&mut out);
        }
        out.push_str("</body></html>");
        out
    }
}
