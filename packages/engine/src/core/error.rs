use thiserror::Error;

/// Reasons the bridge refuses to start. None of these ever reach JS as an
/// exception: the facade logs them and returns `undefined`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeError {
    /// Container element is not in the document
    #[error("container #{container_id} not found")]
    Configuration { container_id: String },

    /// Container exists but holds nothing to simulate
    #[error("no elements matching `{selector}` inside #{container_id}")]
    EmptyInput { container_id: String, selector: String },

    /// Config JSON could not be parsed
    #[error("invalid bridge config: {0}")]
    InvalidConfig(String),
}

/// Degraded but non-fatal outcomes. Logged with `console.warn`, setup continues.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BridgeWarning {
    /// Container is a rendering surface (canvas, img, ...) that cannot show
    /// positioned children. The simulation still runs, invisibly.
    #[error("container #{container_id} is a <{tag}> and cannot host children; simulation will have no visible effect")]
    NonHostingContainer { container_id: String, tag: String },

    /// Visibility gating is not possible; activation happens immediately.
    #[error("visibility trigger unavailable ({reason}); activating immediately")]
    TriggerUnavailable { reason: String },
}

impl BridgeWarning {
    pub fn log(&self) {
        crate::core::log::warn(&self.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_container() {
        let err = BridgeError::Configuration { container_id: "drop-zone".into() };
        assert_eq!(err.to_string(), "container #drop-zone not found");

        let err = BridgeError::EmptyInput {
            container_id: "drop-zone".into(),
            selector: ".matter-box".into(),
        };
        assert!(err.to_string().contains(".matter-box"));
    }
}
