//! Domain records shared by the tribes services.
//!
//! Everything here is read-only presentation data: the services that own
//! these records live behind the collaborator traits of each service crate.

pub mod activity;
pub mod badge;
pub mod content_source;
pub mod feed;
pub mod works;

pub use activity::*;
pub use badge::*;
pub use content_source::*;
pub use feed::*;
pub use works::*;
