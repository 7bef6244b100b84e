//! Domain layer: the canonical inventory model, SPDX document model, and the
//! pure services that turn one into the other.
pub mod domain;
pub mod policies;
pub mod services;
