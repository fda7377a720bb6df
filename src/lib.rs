//! # Data Picked
//!
//! `data-picked` models the result of a platform file/folder picker.
//!
//! The platform-specific picking UI lives elsewhere; it constructs a
//! [`PickedFile`] with a [`StreamOpener`] producing the file's bytes and
//! an optional [`ReleaseCallback`] freeing the backing platform resource
//! (temp file handle, content-provider cursor, security-scoped URI).
//! Consumers read the name/path, acquire streams or the whole content,
//! and release exactly once — either explicitly via
//! [`PickedFile::release`] or implicitly when the value is dropped.
//!
//! [`PickedFolder`] is the lifecycle-free folder counterpart.

pub mod errors;

mod file;
mod folder;

pub use errors::{PickedError, Result};
pub use file::{ByteStream, PickedFile, ReleaseCallback, StreamOpener};
pub use folder::PickedFolder;
