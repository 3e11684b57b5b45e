//! Customer and employee directory backend.
//!
//! Layers follow a hexagonal layout: [`domain`] holds entities, services and
//! ports; [`inbound`] adapts HTTP onto the driving ports; [`outbound`]
//! provides the in-memory stores behind the driven port.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
