//! Domain logic - pure business rules independent of the hosting API

pub mod note;
pub mod tag;
pub mod version;

pub use note::{ClassifiedNote, NoteRule, ReleaseNotes};
pub use tag::Tag;
pub use version::{BumpType, Version};
