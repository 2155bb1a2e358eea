//! Client-side list state machine shared by the member, payment and plan views
//!
//! - [`CollectionStore`]: the fetched list, patched after mutations
//! - [`projection`]: search, category filter and pagination over the store
//! - [`MutationCoordinator`]: add/edit modal plus create, update and delete
//! - [`ListSession`]: the three bundled for one mounted view

pub mod coordinator;
pub mod projection;
pub mod session;
pub mod store;

pub use coordinator::{DeleteOutcome, ModalState, MutationCoordinator};
pub use projection::{Projection, project};
pub use session::ListSession;
pub use store::CollectionStore;
