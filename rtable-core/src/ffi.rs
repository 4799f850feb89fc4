use std::os::raw::{c_char, c_int};

use crate::pagination::{OverflowPolicy, PageCursor, PageWindow, total_pages};

/// Error codes for FFI functions
#[repr(C)]
pub enum FFIError {
    Success = 0,
    NullPointer = -1,
}

/// Item range of the visible page, `start..end`
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FfiPageWindow {
    pub start: usize,
    pub end: usize,
    pub clamped: bool,
}

impl From<PageWindow> for FfiPageWindow {
    fn from(window: PageWindow) -> Self {
        Self {
            start: window.start,
            end: window.end,
            clamped: window.clamped,
        }
    }
}

/// Footer state for the host's navigation controls
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FfiPageStatus {
    pub page_index: usize,
    pub total_pages: usize,
    pub can_prev: bool,
    pub can_next: bool,
}

/// Create a paginator over `total_items` rows held by the host
///
/// # Returns
/// * Handle that must be released with `rtable_paginator_free`
/// * Null when `items_per_page` is zero
///
/// `full_dataset_overflow` selects the compatibility overflow behaviour.
#[unsafe(no_mangle)]
pub extern "C" fn rtable_paginator_new(
    total_items: usize,
    items_per_page: usize,
    initial_page: usize,
    full_dataset_overflow: bool,
) -> *mut PageCursor {
    if items_per_page == 0 {
        log::warn!("rtable_paginator_new called with items_per_page = 0");
        return std::ptr::null_mut();
    }

    let overflow = if full_dataset_overflow {
        OverflowPolicy::FullDataset
    } else {
        OverflowPolicy::ClampToLastPage
    };
    let cursor = PageCursor::new(total_items, items_per_page, initial_page).with_overflow(overflow);
    Box::into_raw(Box::new(cursor))
}

/// Free a handle returned by `rtable_paginator_new`
#[unsafe(no_mangle)]
pub extern "C" fn rtable_paginator_free(handle: *mut PageCursor) {
    if !handle.is_null() {
        unsafe {
            drop(Box::from_raw(handle));
        }
    }
}

fn write_window(cursor: &PageCursor, out_window: *mut FfiPageWindow) -> c_int {
    unsafe {
        *out_window = cursor.window().into();
    }
    FFIError::Success as c_int
}

/// Write the visible page range into `out_window`
#[unsafe(no_mangle)]
pub extern "C" fn rtable_paginator_current(
    handle: *const PageCursor,
    out_window: *mut FfiPageWindow,
) -> c_int {
    if handle.is_null() || out_window.is_null() {
        return FFIError::NullPointer as c_int;
    }
    let cursor = unsafe { &*handle };
    write_window(cursor, out_window)
}

/// Move forward one page when possible, then write the visible page range
#[unsafe(no_mangle)]
pub extern "C" fn rtable_paginator_advance(
    handle: *mut PageCursor,
    out_window: *mut FfiPageWindow,
) -> c_int {
    if handle.is_null() || out_window.is_null() {
        return FFIError::NullPointer as c_int;
    }
    let cursor = unsafe { &mut *handle };
    cursor.next_page();
    write_window(cursor, out_window)
}

/// Move back one page when possible, then write the visible page range
#[unsafe(no_mangle)]
pub extern "C" fn rtable_paginator_retreat(
    handle: *mut PageCursor,
    out_window: *mut FfiPageWindow,
) -> c_int {
    if handle.is_null() || out_window.is_null() {
        return FFIError::NullPointer as c_int;
    }
    let cursor = unsafe { &mut *handle };
    cursor.prev_page();
    write_window(cursor, out_window)
}

#[unsafe(no_mangle)]
pub extern "C" fn rtable_paginator_status(
    handle: *const PageCursor,
    out_status: *mut FfiPageStatus,
) -> c_int {
    if handle.is_null() || out_status.is_null() {
        return FFIError::NullPointer as c_int;
    }
    let cursor = unsafe { &*handle };
    unsafe {
        *out_status = FfiPageStatus {
            page_index: cursor.page_index(),
            total_pages: cursor.total_pages(),
            can_prev: cursor.can_go_prev(),
            can_next: cursor.can_go_next(),
        };
    }
    FFIError::Success as c_int
}

/// Page count for a collection, shared with the host's footer
#[unsafe(no_mangle)]
pub extern "C" fn rtable_total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_pages(total_items, items_per_page)
}

/// Get error message for an error code
/// Returns a static null-terminated string (no need to free)
#[unsafe(no_mangle)]
pub extern "C" fn rtable_get_error_message(error_code: c_int) -> *const c_char {
    let message: &'static [u8] = match error_code {
        x if x == FFIError::Success as c_int => b"Success\0",
        x if x == FFIError::NullPointer as c_int => b"Null pointer argument\0",
        _ => b"Unknown error\0",
    };
    message.as_ptr() as *const c_char
}
