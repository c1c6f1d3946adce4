//! One mounted slider: its DOM parts, its controller and its drag session.

use std::cell::RefCell;
use std::rc::Rc;

use anyhow::anyhow;
use range_core::{plain_number, Handle, HandleView, RangeControl, SliderSnapshot};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::*;
use crate::dom;
use crate::events::{self, DragSession, ListenerGuard};
use crate::input::{event_client_x, track_rect};
use crate::render::{DomPainter, Painter};

/// Extra controls around the track.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Chrome {
    /// Continuous slider: two number inputs above the track.
    Inputs { step: f64 },
    /// Fixed slider: a marker per value and "Min:"/"Max:" labels below.
    Markers,
}

/// Elements owned by a slider. Empty `markers`/`inputs`/`labels` mean the
/// chrome does not have them.
pub struct SliderParts {
    pub root: web::HtmlElement,
    pub track: web::HtmlElement,
    pub highlight: web::HtmlElement,
    pub handles: [web::HtmlElement; 2],
    pub markers: Vec<web::HtmlElement>,
    pub inputs: Vec<web::HtmlInputElement>,
    pub labels: Vec<web::HtmlElement>,
}

pub struct Slider<C: RangeControl + 'static> {
    control: Rc<RefCell<C>>,
    parts: Rc<SliderParts>,
    painter: Rc<dyn Painter>,
    session: Rc<RefCell<DragSession>>,
    document: web::Document,
}

impl<C: RangeControl + 'static> Clone for Slider<C> {
    fn clone(&self) -> Self {
        Self {
            control: self.control.clone(),
            parts: self.parts.clone(),
            painter: self.painter.clone(),
            session: self.session.clone(),
            document: self.document.clone(),
        }
    }
}

impl<C: RangeControl + 'static> Slider<C> {
    pub fn mount(
        document: &web::Document,
        container: &web::Element,
        control: C,
        chrome: Chrome,
    ) -> anyhow::Result<Self> {
        Self::mount_with(document, container, control, chrome, DomPainter::shared)
    }

    /// Build the DOM under `container`, wire its events and paint once.
    pub fn mount_with(
        document: &web::Document,
        container: &web::Element,
        control: C,
        chrome: Chrome,
        painter: impl FnOnce(Rc<SliderParts>) -> Rc<dyn Painter>,
    ) -> anyhow::Result<Self> {
        let parts = Rc::new(build_parts(document, &control.snapshot(), chrome)?);
        dom::append(container, &parts.root)?;
        let slider = Self {
            control: Rc::new(RefCell::new(control)),
            painter: painter(parts.clone()),
            parts,
            session: Rc::new(RefCell::new(DragSession::default())),
            document: document.clone(),
        };

        events::wire_handle_press(&slider);
        events::wire_handle_keys(&slider);
        events::wire_track_click(&slider);
        events::wire_markers(&slider);
        events::wire_inputs(&slider);

        slider.repaint();
        Ok(slider)
    }

    #[inline]
    pub fn parts(&self) -> &SliderParts {
        &self.parts
    }

    pub fn repaint(&self) {
        let snapshot = self.control.borrow().snapshot();
        self.painter.paint(&snapshot);
    }

    /// Apply `f` to the controller; repaint when it reports a change.
    pub fn update(&self, f: impl FnOnce(&mut C) -> bool) -> bool {
        let changed = f(&mut self.control.borrow_mut());
        if changed {
            self.repaint();
        }
        changed
    }

    pub fn begin_drag(&self, handle: Handle) {
        let mover = self.clone();
        let ender = self.clone();
        let guard = ListenerGuard::attach(
            &self.document,
            move |ev| mover.drag_move(ev),
            move |_| ender.end_drag(),
        );
        self.session.borrow_mut().begin(handle, guard);
        _ = self.parts.root.class_list().add_1(CLASS_DRAGGING);
    }

    fn drag_move(&self, ev: &web::Event) {
        let state = self.session.borrow().state();
        let Some(x) = event_client_x(ev) else {
            return;
        };
        let rect = track_rect(&self.parts.track);
        self.update(|c| state.dispatch_move(c, x, rect));
    }

    pub fn end_drag(&self) {
        self.session.borrow_mut().end();
        _ = self.parts.root.class_list().remove_1(CLASS_DRAGGING);
    }
}

fn build_handle(document: &web::Document, view: &HandleView) -> anyhow::Result<web::HtmlElement> {
    let el = dom::create(document, "div", CLASS_HANDLE)?;
    dom::set_attr(&el, "role", "slider");
    dom::set_attr(&el, "tabindex", "0");
    dom::set_attr(&el, "data-handle", view.handle.as_str());
    dom::set_attr(&el, "data-testid", &format!("{}-handle", view.handle));
    Ok(el)
}

fn build_input(
    document: &web::Document,
    view: &HandleView,
    step: f64,
) -> anyhow::Result<web::HtmlInputElement> {
    let field = document
        .create_element("input")
        .map_err(|e| anyhow!("create <input>: {:?}", e))?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow!("{:?}", e))?;
    field.set_class_name(CLASS_INPUT);
    field.set_type("number");
    field.set_step(&plain_number(step));
    dom::set_attr(&field, "aria-label", &format!("{} input", view.handle.aria_prefix()));
    dom::set_attr(&field, "data-testid", &format!("{}-input", view.handle));
    Ok(field)
}

fn build_labels(document: &web::Document, root: &web::Element) -> anyhow::Result<Vec<web::HtmlElement>> {
    let row = dom::create(document, "div", CLASS_LABELS)?;
    let mut labels = Vec::with_capacity(2);
    for _ in Handle::BOTH {
        let label = dom::create(document, "span", "")?;
        dom::append(&row, &label)?;
        labels.push(label);
    }
    dom::append(root, &row)?;
    Ok(labels)
}

fn build_parts(
    document: &web::Document,
    snapshot: &SliderSnapshot,
    chrome: Chrome,
) -> anyhow::Result<SliderParts> {
    let root_class = match chrome {
        Chrome::Inputs { .. } => CLASS_SLIDER.to_string(),
        Chrome::Markers => format!("{} {}", CLASS_SLIDER, CLASS_FIXED),
    };
    let root = dom::create(document, "div", &root_class)?;

    let mut inputs = Vec::new();
    if let Chrome::Inputs { step } = chrome {
        let row = dom::create(document, "div", CLASS_INPUTS)?;
        for view in &snapshot.handles {
            let field = build_input(document, view, step)?;
            dom::append(&row, &field)?;
            inputs.push(field);
        }
        dom::append(&root, &row)?;
    }

    let track = dom::create(document, "div", CLASS_TRACK)?;
    let highlight = dom::create(document, "div", CLASS_HIGHLIGHT)?;
    dom::append(&track, &highlight)?;

    let mut markers = Vec::new();
    if chrome == Chrome::Markers {
        let row = dom::create(document, "div", CLASS_MARKERS)?;
        for view in &snapshot.markers {
            let marker = dom::create(document, "div", CLASS_MARKER)?;
            dom::set_attr(&marker, "data-index", &view.index.to_string());
            dom::set_style(&marker, "left", &dom::percent(view.position));
            let circle = dom::create(document, "div", CLASS_MARKER_CIRCLE)?;
            let label = dom::create(document, "span", "")?;
            label.set_text_content(Some(&view.label));
            dom::append(&marker, &circle)?;
            dom::append(&marker, &label)?;
            dom::append(&row, &marker)?;
            markers.push(marker);
        }
        dom::append(&track, &row)?;
    }

    let handles = [
        build_handle(document, &snapshot.handles[0])?,
        build_handle(document, &snapshot.handles[1])?,
    ];
    for handle in &handles {
        dom::append(&track, handle)?;
    }
    dom::append(&root, &track)?;

    let labels = match chrome {
        Chrome::Markers => build_labels(document, &root)?,
        Chrome::Inputs { .. } => Vec::new(),
    };

    Ok(SliderParts {
        root,
        track,
        highlight,
        handles,
        markers,
        inputs,
        labels,
    })
}

/// Fixed slider fetched with no values: just the bound labels, as
/// placeholders, and nothing to interact with.
pub fn mount_placeholder(
    document: &web::Document,
    container: &web::Element,
    texts: &[String; 2],
) -> anyhow::Result<()> {
    let root = dom::create(document, "div", &format!("{} {}", CLASS_SLIDER, CLASS_FIXED))?;
    for (label, text) in build_labels(document, &root)?.iter().zip(texts) {
        label.set_text_content(Some(text));
    }
    dom::append(container, &root)
}
