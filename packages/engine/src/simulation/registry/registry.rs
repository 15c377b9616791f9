use crate::core::{BridgeError, BridgeWarning};
use crate::domain::Size;
use crate::rigid_body::Vec2;

/// Tags that draw their own pixels and never show positioned children
const SURFACE_TAGS: [&str; 6] = ["CANVAS", "IMG", "VIDEO", "IFRAME", "IMAGE", "OBJECT"];

#[derive(Clone, Debug, PartialEq)]
pub enum ContainerKind {
    /// Ordinary element that can host positioned children
    Host,
    /// Rendering surface; children would be invisible
    Surface { tag: String },
}

impl ContainerKind {
    pub fn from_tag(tag: &str) -> Self {
        let upper = tag.to_ascii_uppercase();
        if SURFACE_TAGS.contains(&upper.as_str()) {
            ContainerKind::Surface { tag: tag.to_ascii_lowercase() }
        } else {
            ContainerKind::Host
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContainerInfo {
    pub size: Size,
    pub kind: ContainerKind,
}

/// A marked element as reported by the host, before any fallback
#[derive(Clone, Debug)]
pub struct FoundElement<N> {
    pub node: N,
    /// Rendered size; may be zero or NaN for elements not laid out yet
    pub size: Size,
    /// Centre of the element's box in container coordinates
    pub centre: Vec2,
}

/// Read side of the page: where the container is, what it holds, how big it is.
pub trait ElementHost {
    type Node: Clone;

    fn find_container(&self, container_id: &str) -> Option<(Self::Node, ContainerInfo)>;

    /// Marked descendants of `container`, in document order
    fn find_marked(&self, container: &Self::Node, selector: &str) -> Vec<FoundElement<Self::Node>>;

    /// Current size of the container (read on resize)
    fn container_size(&self, container: &Self::Node) -> Size;
}

pub struct Discovery<N> {
    pub container: N,
    pub info: ContainerInfo,
    pub elements: Vec<FoundElement<N>>,
    pub warnings: Vec<BridgeWarning>,
}

/// Locate the container and its marked children.
///
/// Missing container or zero children abort setup. A surface container only
/// produces a warning.
pub fn discover<H: ElementHost>(
    host: &H,
    container_id: &str,
    selector: &str,
) -> Result<Discovery<H::Node>, BridgeError> {
    let Some((container, info)) = host.find_container(container_id) else {
        return Err(BridgeError::Configuration { container_id: container_id.to_string() });
    };

    let elements = host.find_marked(&container, selector);
    if elements.is_empty() {
        return Err(BridgeError::EmptyInput {
            container_id: container_id.to_string(),
            selector: selector.to_string(),
        });
    }

    let mut warnings = Vec::new();
    if let ContainerKind::Surface { tag } = &info.kind {
        let warning = BridgeWarning::NonHostingContainer {
            container_id: container_id.to_string(),
            tag: tag.clone(),
        };
        warning.log();
        warnings.push(warning);
    }

    console_log!(
        "#{}: {} tracked elements in a {}x{} container",
        container_id,
        elements.len(),
        info.size.width,
        info.size.height
    );

    Ok(Discovery { container, info, elements, warnings })
}
