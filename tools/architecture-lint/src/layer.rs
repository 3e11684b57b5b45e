//! Where a source file sits in the backend's hexagon.

use std::path::{Component, Path};

/// Layer owning a file under `backend/src`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    /// Entities, services and ports.
    Domain,
    /// HTTP adapters driving the ports.
    Inbound,
    /// Store adapters driven by the ports.
    Outbound,
    /// Crate root, middleware, docs and the server binary. These compose the
    /// other layers and are not constrained.
    Wiring,
}

impl Layer {
    /// Classify `relative`, a path below `backend/src`.
    pub fn of(relative: &Path) -> Self {
        match relative.components().next() {
            Some(Component::Normal(first)) => Self::named(&first.to_string_lossy())
                .unwrap_or(Self::Wiring),
            _ => Self::Wiring,
        }
    }

    /// The hexagon layer whose top-level module is called `module`.
    pub fn named(module: &str) -> Option<Self> {
        match module {
            "domain" => Some(Self::Domain),
            "inbound" => Some(Self::Inbound),
            "outbound" => Some(Self::Outbound),
            _ => None,
        }
    }

    /// Module name as written in paths.
    pub const fn module(self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Inbound => "inbound",
            Self::Outbound => "outbound",
            Self::Wiring => "crate root",
        }
    }

    /// Sibling layers this layer may not reach into.
    pub const fn sealed_from(self) -> &'static [Self] {
        match self {
            Self::Domain => &[Self::Inbound, Self::Outbound],
            Self::Inbound => &[Self::Outbound],
            Self::Outbound => &[Self::Inbound],
            Self::Wiring => &[],
        }
    }

    /// External crates that belong to other layers.
    pub const fn banned_crates(self) -> &'static [&'static str] {
        match self {
            Self::Domain => &[
                "actix_http",
                "actix_web",
                "actix_web_prom",
                "clap",
                "ortho_config",
                "tracing_subscriber",
                "utoipa",
                "utoipa_swagger_ui",
            ],
            Self::Inbound => &["clap", "ortho_config", "tracing_subscriber"],
            Self::Outbound => &["actix_http", "actix_web", "utoipa"],
            Self::Wiring => &[],
        }
    }
}
