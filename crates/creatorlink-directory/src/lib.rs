//! Creatorlink — creator directory.
//!
//! A static, read-only list of creators. It supplies the choices for the
//! wizard's creator step and resolves deep-link creator ids into the
//! summary used to seed a draft.

pub mod creator;
pub mod directory;

pub use creator::Creator;
pub use directory::CreatorDirectory;
