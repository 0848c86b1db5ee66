use std::cell::Cell;
use std::ffi::{CStr, CString};
use std::io;
use std::marker::PhantomData;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;
use std::ptr::{self, NonNull};

use log::{debug, trace};

use super::ffi::{self, MagicSet};
use super::{DetectError, Flags, FlagsError, LoadError, OpenError};
use crate::maybe::Maybe;

/// An open libmagic handle (a "cookie").
///
/// The handle is closed when the Magic is dropped. A database has to be [loaded](Magic::load)
/// before files can be [described](Magic::file).
///
/// # Examples
/// ```no_run
/// # use algebraic_lib::magic::{Flags, Magic, MagicError};
/// # use algebraic_lib::maybe::Maybe;
/// let mut magic = Magic::open(Flags::NONE)?;
/// magic.load(Maybe::Nothing)?;
///
/// magic.set_flags(Flags::MIME)?;
/// println!("{}", magic.file("Cargo.toml")?);
/// # Ok::<(), MagicError>(())
/// ```
#[derive(Debug)]
pub struct Magic {
    cookie: NonNull<MagicSet>,
    flags: Flags,
    _not_sync: PhantomData<Cell<()>>,
}

impl Magic {
    /// Opens a new handle with the provided flags. They can be changed later with
    /// [`Magic::set_flags`].
    pub fn open(flags: Flags) -> Result<Magic, OpenError> {
        // SAFETY: magic_open has no preconditions and returns null on failure.
        let cookie = unsafe { ffi::magic_open(flags.bits()) };

        match NonNull::new(cookie) {
            Some(cookie) => {
                debug!("opened libmagic handle with {flags}");
                Ok(Magic {
                    cookie,
                    flags,
                    _not_sync: PhantomData,
                })
            },
            None => Err(OpenError(io::Error::last_os_error().raw_os_error().unwrap_or(0))),
        }
    }

    /// Loads a magic database, either the one at `database` or the system default for
    /// `Nothing`.
    pub fn load(&mut self, database: Maybe<&Path>) -> Result<(), LoadError> {
        let database = match database {
            Maybe::Just(path) => Maybe::Just(c_path(path).map_err(|message| LoadError { message })?),
            Maybe::Nothing => Maybe::Nothing,
        };
        let filename = database.as_ref().from_maybe(ptr::null(), |path| path.as_ptr());

        // SAFETY: The cookie is open and filename is either null or a C string that outlives the
        // call.
        if unsafe { ffi::magic_load(self.cookie.as_ptr(), filename) } != 0 {
            return Err(LoadError {
                message: self.last_error(),
            });
        }

        debug!("loaded magic database {:?}", database);
        Ok(())
    }

    /// Replaces the flags used for subsequent detection.
    pub fn set_flags(&mut self, flags: Flags) -> Result<(), FlagsError> {
        // SAFETY: The cookie is open.
        if unsafe { ffi::magic_setflags(self.cookie.as_ptr(), flags.bits()) } == -1 {
            return Err(FlagsError { flags });
        }

        trace!("libmagic flags set to {flags}");
        self.flags = flags;
        Ok(())
    }

    pub const fn flags(&self) -> Flags {
        self.flags
    }

    /// Describes the file at `path` according to the current flags.
    ///
    /// Unless [`Flags::ERROR`] is set, libmagic reports most problems with the file (such as it
    /// not existing) as part of the description instead of failing.
    pub fn file<P: AsRef<Path>>(&mut self, path: P) -> Result<String, DetectError> {
        let path = path.as_ref();
        let filename = c_path(path).map_err(|message| DetectError {
            path: path.display().to_string(),
            message,
        })?;

        // SAFETY: The cookie is open and filename is a valid C string.
        let description = unsafe { ffi::magic_file(self.cookie.as_ptr(), filename.as_ptr()) };
        if description.is_null() {
            return Err(DetectError {
                path: path.display().to_string(),
                message: self.last_error(),
            });
        }

        // SAFETY: Non-null results are NUL-terminated strings owned by the cookie, valid until the
        // next call. The string is copied out immediately.
        Ok(unsafe { CStr::from_ptr(description) }.to_string_lossy().into_owned())
    }

    /// Returns the message describing the last error on this handle, if there was one.
    pub fn error(&self) -> Maybe<String> {
        // SAFETY: The cookie is open.
        let message = unsafe { ffi::magic_error(self.cookie.as_ptr()) };
        if message.is_null() {
            Maybe::Nothing
        } else {
            // SAFETY: Non-null messages are NUL-terminated strings owned by the cookie.
            Maybe::Just(unsafe { CStr::from_ptr(message) }.to_string_lossy().into_owned())
        }
    }

    fn last_error(&self) -> String {
        self.error().unwrap_or_else(|| {
            // SAFETY: The cookie is open.
            match unsafe { ffi::magic_errno(self.cookie.as_ptr()) } {
                0 => String::from("unknown error"),
                errno => io::Error::from_raw_os_error(errno).to_string(),
            }
        })
    }
}

impl Drop for Magic {
    fn drop(&mut self) {
        // SAFETY: The cookie is open and is never used again.
        unsafe { ffi::magic_close(self.cookie.as_ptr()) };
        debug!("closed libmagic handle");
    }
}

// SAFETY: A cookie isn't tied to the thread that opened it, only to a single user at a time.
unsafe impl Send for Magic {}

fn c_path(path: &Path) -> Result<CString, String> {
    CString::new(path.as_os_str().as_bytes())
        .map_err(|_| String::from("path contains an interior nul byte"))
}
