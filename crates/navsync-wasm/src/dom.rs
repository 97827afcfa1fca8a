//! DOM-backed geometry source and root style sink.

use navsync_core::{GeometrySource, OuterSize, SinkError, StyleSink};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement};

/// Reads element geometry from a live document.
///
/// The element is looked up on every call, so it may be inserted or removed
/// between synchronizations.
#[derive(Debug, Clone)]
pub struct DomGeometry {
    document: Document,
}

impl DomGeometry {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

impl GeometrySource for DomGeometry {
    fn outer_size(&self, id: &str) -> Option<OuterSize> {
        // Non-HTML elements (e.g. inline SVG) have no offset box; treat as absent.
        let element = self
            .document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(OuterSize::new(element.offset_width(), element.offset_height()))
    }
}

/// Writes custom properties onto `document.documentElement.style`.
#[derive(Debug, Clone)]
pub struct RootStyle {
    document: Document,
}

impl RootStyle {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    fn root(&self, property: &str) -> Result<HtmlElement, SinkError> {
        self.document
            .document_element()
            .ok_or_else(|| SinkError::new(property, "document has no root element"))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SinkError::new(property, "root element has no inline style"))
    }

    /// Current inline value of `name` on the root element, empty if unset.
    pub fn get_property(&self, name: &str) -> Result<String, SinkError> {
        self.root(name)?
            .style()
            .get_property_value(name)
            .map_err(|e| SinkError::new(name, describe(&e)))
    }
}

impl StyleSink for RootStyle {
    fn set_property(&mut self, name: &str, value: &str) -> Result<(), SinkError> {
        self.root(name)?
            .style()
            .set_property(name, value)
            .map_err(|e| SinkError::new(name, describe(&e)))
    }
}

fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
