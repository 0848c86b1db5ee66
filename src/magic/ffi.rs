//! Raw bindings to the parts of libmagic's C API used by [`Magic`](super::Magic).

use libc::{c_char, c_int};

#[repr(C)]
pub(crate) struct MagicSet {
    _private: [u8; 0],
}

pub(crate) type Cookie = *mut MagicSet;

#[link(name = "magic")]
unsafe extern "C" {
    pub(crate) fn magic_open(flags: c_int) -> Cookie;
    pub(crate) fn magic_close(cookie: Cookie);
    pub(crate) fn magic_error(cookie: Cookie) -> *const c_char;
    pub(crate) fn magic_errno(cookie: Cookie) -> c_int;
    pub(crate) fn magic_file(cookie: Cookie, filename: *const c_char) -> *const c_char;
    pub(crate) fn magic_setflags(cookie: Cookie, flags: c_int) -> c_int;
    pub(crate) fn magic_load(cookie: Cookie, filename: *const c_char) -> c_int;
}
