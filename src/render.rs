//! Paint a [`SliderSnapshot`] onto the slider's DOM.
//!
//! Structure is built once by `slider`; painting only touches styles,
//! attributes, classes and text, so it is cheap to run after every change.

use std::rc::Rc;

use range_core::{plain_number, HandleView, SliderSnapshot};
use web_sys as web;

use crate::constants::CLASS_SELECTED;
use crate::dom::{percent, set_attr, set_style};
use crate::slider::SliderParts;

pub trait Painter {
    fn paint(&self, snapshot: &SliderSnapshot);
}

pub struct DomPainter {
    parts: Rc<SliderParts>,
}

impl DomPainter {
    pub fn new(parts: Rc<SliderParts>) -> Self {
        Self { parts }
    }

    pub fn shared(parts: Rc<SliderParts>) -> Rc<dyn Painter> {
        Rc::new(Self::new(parts))
    }
}

fn paint_handle(el: &web::HtmlElement, view: &HandleView) {
    set_style(el, "left", &percent(view.position));
    set_attr(el, "aria-valuemin", &plain_number(view.min));
    set_attr(el, "aria-valuemax", &plain_number(view.max));
    set_attr(el, "aria-valuenow", &plain_number(view.value));
    set_attr(el, "aria-label", &view.label);
}

impl Painter for DomPainter {
    fn paint(&self, snapshot: &SliderSnapshot) {
        let parts = &self.parts;
        for (el, view) in parts.handles.iter().zip(&snapshot.handles) {
            paint_handle(el, view);
        }

        set_style(&parts.highlight, "left", &percent(snapshot.highlight.left));
        set_style(&parts.highlight, "right", &percent(snapshot.highlight.right));

        for (el, marker) in parts.markers.iter().zip(&snapshot.markers) {
            _ = el
                .class_list()
                .toggle_with_force(CLASS_SELECTED, marker.selected);
        }

        for (field, view) in parts.inputs.iter().zip(&snapshot.handles) {
            let text = plain_number(view.value);
            // Rewriting an unchanged value would move the caret.
            if field.value() != text {
                field.set_value(&text);
            }
        }

        for (el, text) in parts.labels.iter().zip(&snapshot.bound_labels) {
            el.set_text_content(Some(text));
        }
    }
}
