// ABOUTME: One-line constructors for the tags the workspace uses.
// ABOUTME: Plus stylesheet/script reference helpers for document heads.

use crate::element::Element;

pub fn div() -> Element {
    Element::new("div")
}

pub fn span(text: &str) -> Element {
    Element::new("span").text(text)
}

pub fn h3(text: &str) -> Element {
    Element::new("h3").text(text)
}

pub fn ul() -> Element {
    Element::new("ul")
}

pub fn li() -> Element {
    Element::new("li")
}

pub fn button() -> Element {
    Element::new("button")
}

pub fn label() -> Element {
    Element::new("label")
}

pub fn input() -> Element {
    Element::new("input")
}

pub fn select() -> Element {
    Element::new("select")
}

pub fn option(text: &str, value: &str) -> Element {
    Element::new("option").attr("value", value).text(text)
}

/// Font Awesome style icon: `<i class="...">`.
pub fn icon(classes: &str) -> Element {
    Element::new("i").class(classes)
}

pub fn stylesheet(href: &str) -> Element {
    Element::new("link").attr("rel", "stylesheet").attr("href", href)
}

/// Classic script reference for document heads.
pub fn classic_script(src: &str) -> Element {
    Element::new("script")
        .attr("type", "text/javascript")
        .attr("src", src)
}

pub fn script_src(src: &str) -> Element {
    Element::new("script").attr("src", src)
}

pub fn module_script(src: &str) -> Element {
    Element::new("script").attr("type", "module").attr("src", src)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_carries_value_and_text() {
        assert_eq!(
            option("Parquet", "parquet").render(),
            "<option value=\"parquet\">Parquet</option>"
        );
    }

    #[test]
    fn stylesheet_is_a_void_link() {
        assert_eq!(
            stylesheet("assets/styles.css").render(),
            "<link rel=\"stylesheet\" href=\"assets/styles.css\">"
        );
    }

    #[test]
    fn module_script_sets_type() {
        assert_eq!(
            module_script("scripts/main.js").render(),
            "<script type=\"module\" src=\"scripts/main.js\"></script>"
        );
    }
}
