//! Page chrome around a slider: loading and error notices, title block.

use range_core::LOADING_TEXT;
use web_sys as web;

use crate::dom;

pub const CLASS_STATUS: &str = "range-status";
pub const CLASS_CONTENT: &str = "range-content";

fn clear(root: &web::Element) {
    root.set_inner_html("");
}

fn status(document: &web::Document, live: &str, text: &str) -> anyhow::Result<web::HtmlElement> {
    let el = dom::create(document, "div", CLASS_STATUS)?;
    dom::set_attr(&el, "role", "alert");
    dom::set_attr(&el, "aria-live", live);
    let p = dom::create(document, "p", "")?;
    p.set_text_content(Some(text));
    dom::append(&el, &p)?;
    Ok(el)
}

pub fn show_loading(document: &web::Document, root: &web::Element) -> anyhow::Result<()> {
    clear(root);
    dom::append(root, &status(document, "polite", LOADING_TEXT)?)
}

pub fn show_error(document: &web::Document, root: &web::Element, message: &str) -> anyhow::Result<()> {
    clear(root);
    dom::append(root, &status(document, "assertive", message)?)
}

/// Replace whatever `root` shows with the title block and return the
/// container the slider goes into.
pub fn show_content(
    document: &web::Document,
    root: &web::Element,
    title: &str,
    subtitle: &str,
) -> anyhow::Result<web::HtmlElement> {
    clear(root);
    let h1 = dom::create(document, "h1", "")?;
    h1.set_text_content(Some(title));
    let h2 = dom::create(document, "h2", "")?;
    h2.set_text_content(Some(subtitle));
    let content = dom::create(document, "div", CLASS_CONTENT)?;
    dom::append(root, &h1)?;
    dom::append(root, &h2)?;
    dom::append(root, &content)?;
    Ok(content)
}
