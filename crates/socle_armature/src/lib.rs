//! Armature - The structural skeleton for Socle.
//!
//! An armature is the wire frame a sculptor builds on. This crate holds
//! everything about a bridged component that can be decided without a
//! browser: the composition model of a component definition, the derived
//! [`PropertySet`], registration options, the registration state itself,
//! and the lifecycle decisions that govern when a mounted instance is
//! created and when a detached one is finally destroyed.
//!
//! All of it is pure and host-testable; `socle_vitrine` drives these types
//! from the real DOM callbacks.

pub mod lifecycle;
pub mod options;
pub mod props;
pub mod registry;
pub mod spec;

pub use lifecycle::{decide_connect, decide_deadline, ConnectAction, DeadlineAction, HostSnapshot};
pub use options::{BridgeOptions, DEFAULT_DESTROY_TIMEOUT_MS};
pub use props::PropertySet;
pub use registry::{BridgeRegistry, Registration, RegisteredComponent, RegistryError};
pub use spec::ComponentSpec;
