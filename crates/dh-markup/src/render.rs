// ABOUTME: Compact HTML serialization.
// ABOUTME: No indentation or newlines; void elements render unclosed.

use crate::element::{Element, Node};

/// Tags that never take a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

impl Element {
    /// Serialize this element and its subtree to a single-line string.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(256);
        self.render_into(&mut out);
        out
    }

    pub(crate) fn render_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            escape_into(out, value);
            out.push('"');
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag.as_str()) {
            return;
        }

        for child in &self.children {
            match child {
                Node::Element(el) => el.render_into(out),
                Node::Text(text) => escape_into(out, text),
            }
        }

        out.push_str("</");
        out.push_str(&self.tag);
        out.push('>');
    }
}

/// HTML-escape a string into the output buffer.
pub(crate) fn escape_into(out: &mut String, s: &str) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tags::{div, input, span};

    #[test]
    fn renders_nested_elements_compactly() {
        let el = div().id("outer").child(span("hi"));
        assert_eq!(el.render(), "<div id=\"outer\"><span>hi</span></div>");
    }

    #[test]
    fn escapes_text_and_attribute_values() {
        let el = div().attr("title", "a<b & \"c\"").text("1 < 2 > 0 & done");
        assert_eq!(
            el.render(),
            "<div title=\"a&lt;b &amp; &quot;c&quot;\">1 &lt; 2 &gt; 0 &amp; done</div>"
        );
    }

    #[test]
    fn void_elements_have_no_closing_tag() {
        let el = input().attr("type", "text");
        assert_eq!(el.render(), "<input type=\"text\">");
    }

    #[test]
    fn empty_non_void_elements_still_close() {
        assert_eq!(div().class("handle").render(), "<div class=\"handle\"></div>");
    }

    #[test]
    fn float_attributes_use_shortest_display_form() {
        assert_eq!(
            div().attr("data-default-split-position", 30.0).render(),
            "<div data-default-split-position=\"30\"></div>"
        );
        assert_eq!(
            div().attr("data-default-split-position", 100.0 / 3.0).render(),
            "<div data-default-split-position=\"33.333333333333336\"></div>"
        );
    }

    #[test]
    fn flags_render_name_equals_name() {
        let el = input().attr("type", "radio").flag("checked");
        assert_eq!(el.render(), "<input type=\"radio\" checked=\"checked\">");
    }

    #[test]
    fn unicode_passes_through_unescaped() {
        assert_eq!(span("♖ DataHold").render(), "<span>♖ DataHold</span>");
    }
}
