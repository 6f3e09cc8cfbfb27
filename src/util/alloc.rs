use std::alloc::{self, Layout};
use std::ptr::NonNull;

use super::error::AllocFailed;

/// Moves `value` onto the heap, reporting allocation failure instead of aborting like
/// [`Box::new`] does.
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>, AllocFailed<T>> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(Box::new(value));
    }

    // SAFETY: The layout has a non-zero size.
    let ptr = unsafe { alloc::alloc(layout) }.cast::<T>();

    match NonNull::new(ptr) {
        Some(ptr) => {
            // SAFETY: ptr was just allocated by the global allocator with the layout of T, so it
            // is valid for writes and can be owned by a Box.
            unsafe {
                ptr.as_ptr().write(value);
                Ok(Box::from_raw(ptr.as_ptr()))
            }
        },
        None => Err(AllocFailed { value, layout }),
    }
}

#[cfg(test)]
pub(crate) use counted::CountedDrop;
