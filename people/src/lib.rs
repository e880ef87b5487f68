//! People service: profile pages for the people of the community.
//!
//! Each route resolves a person by short name, reads from the collaborator
//! services in [`services`] and answers with a [`view::Outcome`]: a rendered
//! view-model, the not-found view, or a redirect.

pub mod badges;
pub mod errors;
pub mod handlers;
pub mod pagination;
pub mod resolver;
pub mod services;
pub mod state;
pub mod view;

pub use handlers::configure;
pub use state::{AppState, Collaborators};

pub const SERVICE_NAME: &str = "people-service";
