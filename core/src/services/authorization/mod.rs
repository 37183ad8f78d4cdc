//! Authorization policy module
//!
//! A pure decision function over (actor, action, resource). No I/O: the
//! caller supplies the resource's recorded owner, the policy only decides.
//! Every mutating entry point consults this before touching the store, and
//! a denial is always reported as the single undifferentiated
//! `DomainError::Forbidden`.

mod policy;

pub use policy::{allow, authorize, Action, Actor, Resource, ResourceKind};
