use thiserror::Error;

/// Written and read back once at startup to prove clipboard access works
/// before any network traffic is accepted.
const SELF_TEST_SENTINEL: &str = "texclip-self-test";

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to create clipboard instance: {0}")]
    Init(#[source] arboard::Error),

    #[error("failed to access clipboard: {0}")]
    Access(#[source] arboard::Error),

    #[error("clipboard read-back mismatch: wrote {wrote:?}, got {read:?}")]
    ReadBackMismatch { wrote: String, read: String },
}

/// Host clipboard as a capability. The write side backs the `/copy`
/// endpoint; reading exists only for [`self_test`].
pub trait Clipboard: Send {
    fn set_text(&mut self, text: &str) -> Result<(), Error>;
    fn get_text(&mut self) -> Result<String, Error>;
}

/// The real OS clipboard, via `arboard`.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, Error> {
        Ok(SystemClipboard {
            inner: arboard::Clipboard::new().map_err(Error::Init)?,
        })
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), Error> {
        self.inner.set_text(text).map_err(Error::Access)
    }

    fn get_text(&mut self) -> Result<String, Error> {
        self.inner.get_text().map_err(Error::Access)
    }
}

/// Write a sentinel and read it back. A failure means the platform
/// clipboard is unusable (missing permissions or provider) and the server
/// must not start.
pub fn self_test(clipboard: &mut dyn Clipboard) -> Result<(), Error> {
    clipboard.set_text(SELF_TEST_SENTINEL)?;
    let read = clipboard.get_text()?;
    if read != SELF_TEST_SENTINEL {
        return Err(Error::ReadBackMismatch {
            wrote: SELF_TEST_SENTINEL.to_string(),
            read,
        });
    }
    Ok(())
}
