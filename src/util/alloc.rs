use std::alloc::Layout;
use std::cell::RefCell;
use std::ptr::NonNull;
use std::rc::Rc;

use crate::boxed::{Global, RawAlloc};
use crate::error::AllocError;

/// A shared, ordered record of teardown events.
#[derive(Debug, Default, Clone)]
pub struct EventLog(Rc<RefCell<Vec<&'static str>>>);

impl EventLog {
    pub fn new() -> EventLog {
        EventLog::default()
    }

    pub fn push(&self, event: &'static str) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<&'static str> {
        self.0.borrow().clone()
    }
}

/// Records `name` in the log when dropped.
#[derive(Debug)]
pub struct DropHook {
    pub log: EventLog,
    pub name: &'static str,
}

impl DropHook {
    pub fn new(log: &EventLog, name: &'static str) -> DropHook {
        DropHook {
            log: log.clone(),
            name,
        }
    }
}

impl Drop for DropHook {
    fn drop(&mut self) {
        self.log.push(self.name);
    }
}

/// Records `"payload"` in the log and then panics when dropped.
#[derive(Debug)]
pub struct PanicOnDrop(pub EventLog);

impl Drop for PanicOnDrop {
    fn drop(&mut self) {
        self.0.push("payload");
        panic!("payload drop panicked");
    }
}

/// Wraps the global allocator, recording every allocation and deallocation. Can be told to fail
/// all allocations.
#[derive(Debug, Clone)]
pub struct RecordingAlloc {
    pub log: EventLog,
    pub fail: bool,
}

impl RecordingAlloc {
    pub fn new(log: &EventLog) -> RecordingAlloc {
        RecordingAlloc {
            log: log.clone(),
            fail: false,
        }
    }

    pub fn failing(log: &EventLog) -> RecordingAlloc {
        RecordingAlloc {
            log: log.clone(),
            fail: true,
        }
    }
}

// SAFETY: All memory is provided by Global.
unsafe impl RawAlloc for RecordingAlloc {
    unsafe fn allocate(&self, layout: Layout) -> Result<NonNull<u8>, AllocError> {
        if self.fail {
            self.log.push("alloc failed");
            return Err(AllocError::new(layout));
        }

        self.log.push("alloc");
        // SAFETY: Forwarded from the caller.
        unsafe { Global.allocate(layout) }
    }

    unsafe fn deallocate(&self, ptr: NonNull<u8>, layout: Layout) {
        self.log.push("dealloc");
        // SAFETY: Forwarded from the caller.
        unsafe { Global.deallocate(ptr, layout) }
    }
}
