// ABOUTME: Shared page chrome: navbar, panel headers, icon buttons.
// ABOUTME: The id/class vocabulary here is the contract with client scripts.

use dh_markup::tags::{button, div, h3, ul};
use dh_markup::Element;

pub fn navbar(banner: &str) -> Element {
    div().id("navbar").child(ul().child(h3(banner)))
}

/// Panel title bar: `<h3>` plus a button group (possibly empty).
pub fn panel_header(title: &str, buttons: impl IntoIterator<Item = Element>) -> Element {
    div()
        .class("panel-header")
        .child(h3(title))
        .child(div().class("btn-group").children(buttons))
}

pub fn panel_content(inner: Element) -> Element {
    div().class("panel-content").child(inner)
}

/// `<button class="icon-button <kind>">`; the kind class selects the glyph.
pub fn icon_button(kind: &str) -> Element {
    button().class("icon-button").class(kind)
}
