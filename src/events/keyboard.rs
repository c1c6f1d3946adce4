use range_core::{Handle, KeyStep, RangeControl};
use web_sys as web;

use crate::dom;
use crate::slider::Slider;

/// Arrow keys on a focused handle move it one step (or one stop).
pub fn wire_handle_keys<C: RangeControl + 'static>(slider: &Slider<C>) {
    for (el, handle) in slider.parts().handles.iter().zip(Handle::BOTH) {
        let s = slider.clone();
        dom::add_listener(el, "keydown", move |ev: web::KeyboardEvent| {
            let key = ev.key();
            if KeyStep::from_key(&key).is_none() {
                return;
            }
            // Arrow keys would otherwise scroll the page.
            ev.prevent_default();
            if s.update(|c| c.on_key(&key, handle)) {
                log::debug!("[key] {} {}", handle, key);
            }
        });
    }
}
