use range_core::{Handle, RangeControl};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::CLASS_HANDLE;
use crate::dom;
use crate::input::{event_client_x, track_rect};
use crate::slider::Slider;

/// Press on a handle opens a drag session for it.
pub fn wire_handle_press<C: RangeControl + 'static>(slider: &Slider<C>) {
    for (el, handle) in slider.parts().handles.iter().zip(Handle::BOTH) {
        let s = slider.clone();
        let focus = el.clone();
        dom::add_listener(el, "mousedown", move |ev: web::MouseEvent| {
            if ev.button() != 0 {
                return;
            }
            // No text selection while dragging; focus is given back by hand.
            ev.prevent_default();
            _ = focus.focus();
            s.begin_drag(handle);
        });
        let s = slider.clone();
        dom::add_listener(el, "touchstart", move |_: web::TouchEvent| {
            s.begin_drag(handle);
        });
    }
}

fn from_handle(ev: &web::Event) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web::Element>().ok())
        .map(|el| el.class_list().contains(CLASS_HANDLE))
        .unwrap_or(false)
}

/// Click on the bare track moves the nearer handle there. The click that
/// follows releasing a handle bubbles up to the track too and is skipped.
pub fn wire_track_click<C: RangeControl + 'static>(slider: &Slider<C>) {
    let s = slider.clone();
    dom::add_listener(&slider.parts().track, "click", move |ev: web::MouseEvent| {
        if from_handle(&ev) {
            return;
        }
        let Some(x) = event_client_x(&ev) else {
            return;
        };
        let rect = track_rect(&s.parts().track);
        s.update(|c| c.on_track_click(x, rect));
    });
}

pub fn wire_markers<C: RangeControl + 'static>(slider: &Slider<C>) {
    for (index, el) in slider.parts().markers.iter().enumerate() {
        let s = slider.clone();
        dom::add_listener(el, "click", move |ev: web::MouseEvent| {
            ev.stop_propagation();
            if s.update(|c| c.on_marker_click(index)) {
                log::debug!("[marker] {}", index);
            }
        });
    }
}

/// Number inputs commit on `change`. A rejected entry is painted over with
/// the current value.
pub fn wire_inputs<C: RangeControl + 'static>(slider: &Slider<C>) {
    for (field, handle) in slider.parts().inputs.iter().zip(Handle::BOTH) {
        let s = slider.clone();
        let source = field.clone();
        dom::add_listener(field, "change", move |_: web::Event| {
            let text = source.value();
            if !s.update(|c| c.on_text_input(handle, &text)) {
                log::debug!("[input] {} rejected {:?}", handle, text);
                s.repaint();
            }
        });
    }
}
