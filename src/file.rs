use std::{
    fmt,
    fs::File,
    io::{Cursor, Read},
    path::Path,
    sync::Arc,
};

use crate::errors::{PickedError, Result};

/// A readable byte stream handed out by a [`StreamOpener`].
/// Ownership passes to the caller; dropping it closes the stream.
pub type ByteStream = Box<dyn Read + Send>;

/// Zero-argument function returning a fresh stream over the picked
/// file's bytes, positioned at the start. Supplied by the platform
/// picker; invoked on demand, never at construction time.
pub type StreamOpener = Box<dyn Fn() -> Result<ByteStream> + Send>;

/// Cleanup hook freeing whatever platform resource backs the stream
/// opener (temp file, content-provider cursor, security-scoped URI).
/// Fired at most once; the flag is `true` when the release came from an
/// explicit [`PickedFile::release`] call and `false` when it came from
/// `Drop`.
pub type ReleaseCallback = Box<dyn FnOnce(bool) + Send>;

/// A file selected through a platform file picker.
///
/// Holds a display name, a path (or platform URI, which may not be
/// openable through the filesystem directly), and the means to produce
/// a byte stream over the file's content. The object never holds a
/// live stream itself, only the opener.
///
/// Releasing is one-shot: the first [`release`](Self::release) call (or
/// `Drop`, if the consumer never released explicitly) fires the release
/// callback and makes the object permanently inert. Every accessor
/// fails with [`PickedError::Disposed`] afterwards.
pub struct PickedFile {
    name: String,
    path: String,
    opener: StreamOpener,
    on_release: Option<ReleaseCallback>,
    disposed: bool,
}

impl PickedFile {
    /// General constructor. Performs no I/O; the opener is only invoked
    /// by [`stream`](Self::stream) and [`data`](Self::data).
    ///
    /// The opener must return an independent, freshly positioned stream
    /// on every invocation. A single-use opener is accepted but makes
    /// any second acquisition the caller's bug.
    pub fn new(
        path: impl Into<String>,
        name: impl Into<String>,
        opener: StreamOpener,
        on_release: Option<ReleaseCallback>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            opener,
            on_release,
            disposed: false,
        }
    }

    /// In-memory convenience constructor: every stream acquisition
    /// yields a fresh cursor over the same shared bytes, so repeated
    /// [`data`](Self::data)/[`stream`](Self::stream) calls in any order
    /// always observe the full original content.
    pub fn from_bytes(
        path: impl Into<String>,
        name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
        on_release: Option<ReleaseCallback>,
    ) -> Self {
        let shared: Arc<[u8]> = bytes.into().into();
        let opener: StreamOpener =
            Box::new(move || Ok(Box::new(Cursor::new(shared.clone())) as ByteStream));
        Self::new(path, name, opener, on_release)
    }

    /// Path-backed convenience constructor: derives the display name
    /// from the last path component and opens the file anew on every
    /// stream acquisition. No I/O happens here.
    pub fn from_path(
        path: impl AsRef<Path>,
        on_release: Option<ReleaseCallback>,
    ) -> Result<Self> {
        let path = path.as_ref();
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| {
                PickedError::Path(format!(
                    "No file name in `{}`",
                    path.display()
                ))
            })?;

        let source = path.to_path_buf();
        let opener: StreamOpener = Box::new(move || {
            let file = File::open(&source)?;
            Ok(Box::new(file) as ByteStream)
        });

        Ok(Self::new(path.to_string_lossy(), name, opener, on_release))
    }

    /// Display name of the picked file, without the path.
    pub fn name(&self) -> Result<&str> {
        self.guard()?;
        Ok(&self.name)
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<()> {
        self.guard()?;
        self.name = name.into();
        Ok(())
    }

    /// Full path or platform URI. On some platforms this is not
    /// openable through filesystem APIs; use [`stream`](Self::stream)
    /// for the content.
    pub fn path(&self) -> Result<&str> {
        self.guard()?;
        Ok(&self.path)
    }

    pub fn set_path(&mut self, path: impl Into<String>) -> Result<()> {
        self.guard()?;
        self.path = path.into();
        Ok(())
    }

    /// Open a fresh stream over the file's bytes.
    ///
    /// The caller owns the returned stream and is responsible for
    /// closing it (dropping it). Errors raised by the opener propagate
    /// unchanged.
    pub fn stream(&self) -> Result<ByteStream> {
        self.guard()?;
        log::trace!("picked/{}: opening stream", self.name);
        (self.opener)()
    }

    /// Read the whole file content into memory.
    ///
    /// Acquires a stream through the same path as
    /// [`stream`](Self::stream), drains it to completion and closes it.
    /// Because this re-invokes the opener rather than caching bytes,
    /// repeated calls are safe for [`from_bytes`](Self::from_bytes) and
    /// [`from_path`](Self::from_path) instances, but a caller-supplied
    /// single-use opener only supports one acquisition in total.
    pub fn data(&self) -> Result<Vec<u8>> {
        let mut stream = self.stream()?;
        let mut content = vec![];
        stream.read_to_end(&mut content)?;
        Ok(content)
    }

    /// Release the underlying platform resources.
    ///
    /// Idempotent: the first call fires the release callback (if any)
    /// with `true` and permanently disposes the object; later calls are
    /// no-ops. Dropping an unreleased instance runs the same transition
    /// with `false`.
    pub fn release(&mut self) {
        self.transition(true);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn guard(&self) -> Result<()> {
        if self.disposed {
            return Err(PickedError::Disposed);
        }
        Ok(())
    }

    // The single Active -> Disposed transition. `Option::take` keeps
    // the callback exactly-once even when release() is followed by Drop.
    fn transition(&mut self, explicit: bool) {
        if self.disposed {
            return;
        }
        self.disposed = true;

        log::debug!("picked/{}: released (explicit: {})", self.name, explicit);

        if let Some(callback) = self.on_release.take() {
            callback(explicit);
        }
    }
}

impl Drop for PickedFile {
    fn drop(&mut self) {
        self.transition(false);
    }
}

impl fmt::Debug for PickedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PickedFile")
            .field("name", &self.name)
            .field("path", &self.path)
            .field("disposed", &self.disposed)
            .finish_non_exhaustive()
    }
}
