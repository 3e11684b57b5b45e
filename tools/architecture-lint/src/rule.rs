//! Boundary rules and the findings they produce.

use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

use crate::facts::Facts;
use crate::layer::Layer;

/// Library name of the backend, as written in absolute paths.
const CRATE_NAME: &str = "cesa_backend";

/// Driven port only store adapters implement.
const STORE_PORT: &str = "EntityStore";

/// Driving ports only domain services implement.
const DRIVING_PORTS: [&str; 2] = ["DirectoryCommand", "DirectoryQuery"];

/// Names HTTP adapters must not touch: they go through the driving ports.
const BEHIND_PORTS: [&str; 4] = [
    "DirectoryService",
    "CustomerService",
    "EmployeeService",
    STORE_PORT,
];

/// A broken boundary rule.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rule {
    /// A layer names a module of a layer sealed from it.
    ReachesLayer {
        /// Layer of the offending file.
        from: Layer,
        /// Layer it reached into.
        into: Layer,
    },
    /// A layer names a crate that belongs elsewhere.
    UsesCrate {
        /// Layer of the offending file.
        layer: Layer,
        /// Crate root as written in the path.
        krate: String,
    },
    /// `EntityStore` implemented outside the store adapters.
    StoreOutsideOutbound {
        /// Layer of the offending file.
        layer: Layer,
    },
    /// A driving port implemented outside the domain.
    PortOutsideDomain {
        /// Layer of the offending file.
        layer: Layer,
        /// Port trait name.
        port: String,
    },
    /// An HTTP adapter naming a service or store instead of a port.
    BypassesPorts {
        /// Name the adapter used.
        name: String,
    },
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ReachesLayer { from, into } => write!(
                f,
                "{} module must not depend on crate::{}",
                from.module(),
                into.module()
            ),
            Self::UsesCrate { layer, krate } => write!(
                f,
                "{} module must not depend on external crate `{krate}`",
                layer.module()
            ),
            Self::StoreOutsideOutbound { layer } => write!(
                f,
                "`{STORE_PORT}` may only be implemented in outbound, found in {}",
                layer.module()
            ),
            Self::PortOutsideDomain { layer, port } => write!(
                f,
                "`{port}` may only be implemented in domain, found in {}",
                layer.module()
            ),
            Self::BypassesPorts { name } => write!(
                f,
                "inbound module must reach directories through their ports, not `{name}`"
            ),
        }
    }
}

/// One rule broken by one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// File path relative to `backend/src`.
    pub file: PathBuf,
    /// The rule it breaks.
    pub rule: Rule,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file.display(), self.rule)
    }
}

/// Rules a file in `layer` with the given facts breaks, each reported once.
pub(crate) fn broken_rules(layer: Layer, facts: &Facts) -> BTreeSet<Rule> {
    let mut broken = BTreeSet::new();

    for path in &facts.paths {
        if let Some(into) = layer_reached(path) {
            if layer.sealed_from().contains(&into) {
                broken.insert(Rule::ReachesLayer { from: layer, into });
            }
        }
        if let Some(krate) = path.first() {
            if layer.banned_crates().contains(&krate.as_str()) {
                broken.insert(Rule::UsesCrate {
                    layer,
                    krate: krate.clone(),
                });
            }
        }
        if layer == Layer::Inbound {
            for name in path {
                if BEHIND_PORTS.contains(&name.as_str()) {
                    broken.insert(Rule::BypassesPorts { name: name.clone() });
                }
            }
        }
    }

    if layer != Layer::Outbound && facts.implemented.contains(STORE_PORT) {
        broken.insert(Rule::StoreOutsideOutbound { layer });
    }
    if layer != Layer::Domain {
        for port in DRIVING_PORTS {
            if facts.implemented.contains(port) {
                broken.insert(Rule::PortOutsideDomain {
                    layer,
                    port: port.to_owned(),
                });
            }
        }
    }

    broken
}

/// Hexagon layer a path points into, once relative and crate prefixes are
/// stripped.
fn layer_reached(path: &[String]) -> Option<Layer> {
    let mut rest = path
        .iter()
        .map(String::as_str)
        .skip_while(|segment| matches!(*segment, "crate" | "self" | "super"));
    let mut first = rest.next()?;
    if first == CRATE_NAME {
        first = rest.next()?;
    }
    Layer::named(first)
}
