use std::fmt::{self, Display, Formatter};
use std::ops::{BitOr, BitOrAssign};

use libc::c_int;

use crate::maybe::Maybe;

/// Flags controlling libmagic's behaviour, as passed to [`Magic::open`](super::Magic::open) and
/// [`Magic::set_flags`](super::Magic::set_flags).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags(c_int);

impl Flags {
    pub const NONE: Flags = Flags(0x0000000);
    pub const DEBUG: Flags = Flags(0x0000001);
    pub const SYMLINK: Flags = Flags(0x0000002);
    pub const COMPRESS: Flags = Flags(0x0000004);
    pub const DEVICES: Flags = Flags(0x0000008);
    pub const MIME_TYPE: Flags = Flags(0x0000010);
    pub const CONTINUE: Flags = Flags(0x0000020);
    pub const CHECK: Flags = Flags(0x0000040);
    pub const PRESERVE_ATIME: Flags = Flags(0x0000080);
    pub const RAW: Flags = Flags(0x0000100);
    /// Report errors from [`Magic::file`](super::Magic::file) as errors, rather than as part of
    /// the description.
    pub const ERROR: Flags = Flags(0x0000200);
    pub const MIME_ENCODING: Flags = Flags(0x0000400);
    pub const MIME: Flags = Flags(Flags::MIME_TYPE.0 | Flags::MIME_ENCODING.0);
    pub const APPLE: Flags = Flags(0x0000800);
    pub const EXTENSION: Flags = Flags(0x1000000);

    const NAMED: [(Flags, &'static str); 15] = [
        (Flags::NONE, "MAGIC_NONE"),
        (Flags::DEBUG, "MAGIC_DEBUG"),
        (Flags::SYMLINK, "MAGIC_SYMLINK"),
        (Flags::COMPRESS, "MAGIC_COMPRESS"),
        (Flags::DEVICES, "MAGIC_DEVICES"),
        (Flags::MIME_TYPE, "MAGIC_MIME_TYPE"),
        (Flags::CONTINUE, "MAGIC_CONTINUE"),
        (Flags::CHECK, "MAGIC_CHECK"),
        (Flags::PRESERVE_ATIME, "MAGIC_PRESERVE_ATIME"),
        (Flags::RAW, "MAGIC_RAW"),
        (Flags::ERROR, "MAGIC_ERROR"),
        (Flags::MIME_ENCODING, "MAGIC_MIME_ENCODING"),
        (Flags::MIME, "MAGIC_MIME"),
        (Flags::APPLE, "MAGIC_APPLE"),
        (Flags::EXTENSION, "MAGIC_EXTENSION"),
    ];

    pub const fn bits(self) -> c_int {
        self.0
    }

    pub const fn contains(self, other: Flags) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the name of the C constant with exactly this value, if there is one.
    pub fn name(self) -> Maybe<&'static str> {
        Flags::NAMED
            .iter()
            .find(|(flags, _)| *flags == self)
            .map(|(_, name)| *name)
            .into()
    }
}

impl BitOr for Flags {
    type Output = Flags;

    fn bitor(self, rhs: Flags) -> Flags {
        Flags(self.0 | rhs.0)
    }
}

impl BitOrAssign for Flags {
    fn bitor_assign(&mut self, rhs: Flags) {
        self.0 |= rhs.0;
    }
}

impl Display for Flags {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.name() {
            Maybe::Just(name) => write!(f, "{name}"),
            Maybe::Nothing => write!(f, "{:#x}", self.0),
        }
    }
}
