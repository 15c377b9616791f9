use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, Window};

use crate::domain::{Size, Transform};
use crate::rigid_body::Vec2;
use crate::simulation::{ContainerInfo, ContainerKind, ElementHost, FoundElement, VisualAdapter};

/// Reads the live document
#[derive(Clone)]
pub struct DomHost {
    document: Document,
}

impl DomHost {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    pub fn from_window() -> Option<Self> {
        web_sys::window()?.document().map(Self::new)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

fn rect_size(el: &Element) -> Size {
    let rect = el.get_bounding_client_rect();
    Size::new(rect.width() as f32, rect.height() as f32)
}

/// Layout size (ignores transforms, so a rotated element keeps its real box)
fn layout_size(el: &Element) -> Size {
    match el.dyn_ref::<HtmlElement>() {
        Some(html) => Size::new(html.offset_width() as f32, html.offset_height() as f32),
        None => rect_size(el),
    }
}

impl ElementHost for DomHost {
    type Node = Element;

    fn find_container(&self, container_id: &str) -> Option<(Element, ContainerInfo)> {
        let container = self.document.get_element_by_id(container_id)?;
        let info = ContainerInfo {
            size: rect_size(&container),
            kind: ContainerKind::from_tag(&container.tag_name()),
        };
        Some((container, info))
    }

    fn find_marked(&self, container: &Element, selector: &str) -> Vec<FoundElement<Element>> {
        let list = match container.query_selector_all(selector) {
            Ok(list) => list,
            Err(_) => {
                console_warn!("invalid marker selector `{}`", selector);
                return Vec::new();
            }
        };

        let origin = container.get_bounding_client_rect();
        let mut found = Vec::with_capacity(list.length() as usize);
        for i in 0..list.length() {
            let Some(node) = list.get(i) else {
                continue;
            };
            let Ok(el) = node.dyn_into::<Element>() else {
                continue;
            };
            let rect = el.get_bounding_client_rect();
            let centre = Vec2::new(
                (rect.left() - origin.left() + rect.width() / 2.0) as f32,
                (rect.top() - origin.top() + rect.height() / 2.0) as f32,
            );
            found.push(FoundElement { size: layout_size(&el), centre, node: el });
        }
        found
    }

    fn container_size(&self, container: &Element) -> Size {
        rect_size(container)
    }
}

/// Give the container a positioning context for absolutely placed children.
/// Only a container whose computed position is `static` is touched; one
/// positioned by a stylesheet keeps its layout.
pub fn anchor_container(window: &Window, container: &Element) {
    let Some(html) = container.dyn_ref::<HtmlElement>() else {
        return;
    };
    let computed = match window.get_computed_style(container) {
        Ok(Some(computed)) => computed.get_property_value("position").unwrap_or_default(),
        _ => html.style().get_property_value("position").unwrap_or_default(),
    };
    if computed.is_empty() || computed == "static" {
        set(&html.style(), "position", "relative");
    }
}

/// Writes inline styles on tracked elements
#[derive(Default)]
pub struct StyleAdapter {
    failed_writes: u32,
}

impl StyleAdapter {
    pub fn failed_writes(&self) -> u32 {
        self.failed_writes
    }
}

impl VisualAdapter<Element> for StyleAdapter {
    fn detach_from_flow(&mut self, node: &Element) {
        let Some(html) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        let style = html.style();
        set(&style, "position", "absolute");
        set(&style, "top", "0");
        set(&style, "left", "0");
        set(&style, "margin", "0");
        set(&style, "transform-origin", "50% 50%");
        set(&style, "will-change", "transform");
        // Elements are often hidden until the drop; make them visible now.
        set(&style, "opacity", "1");
        set(&style, "visibility", "visible");
    }

    fn write_transform(&mut self, node: &Element, transform: &Transform) {
        let Some(html) = node.dyn_ref::<HtmlElement>() else {
            return;
        };
        if html.style().set_property("transform", &transform.to_css()).is_err() {
            self.failed_writes = self.failed_writes.saturating_add(1);
        }
    }
}

fn set(style: &CssStyleDeclaration, name: &str, value: &str) {
    if style.set_property(name, value).is_err() {
        console_warn!("could not set `{}: {}`", name, value);
    }
}
