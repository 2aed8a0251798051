use crate::error::BufferAllocationSnafu;
use crate::Result;
use snafu::OptionExt;
use std::ops;

/// A fixed-capacity byte buffer that can be dereferenced as a slice.
///
/// The backing storage is allocated once and never grows past `capacity`.
pub struct PackBuffer {
  buf: Vec<u8>,
  capacity: usize,
}

// Only the filled part is visible; the spare capacity is not.
impl ops::Deref for PackBuffer {
  type Target = [u8];

  fn deref(&self) -> &[u8] {
    &self.buf[..]
  }
}

impl PackBuffer {
  pub fn with_capacity(capacity: usize) -> PackBuffer {
    PackBuffer {
      buf: Vec::with_capacity(capacity),
      capacity,
    }
  }

  /// Like `with_capacity`, but reports an allocation failure instead of
  /// aborting.
  pub fn try_with_capacity(capacity: usize) -> Result<PackBuffer> {
    let mut buf = Vec::new();
    buf
      .try_reserve_exact(capacity)
      .ok()
      .context(BufferAllocationSnafu { size: capacity })?;
    Ok(PackBuffer { buf, capacity })
  }

  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Appends `data`. Returns false, leaving the buffer untouched, when the
  /// result would not fit.
  pub fn write(&mut self, data: &[u8]) -> bool {
    if self.buf.len() + data.len() > self.capacity {
      return false;
    }
    self.buf.extend_from_slice(data);
    true
  }

  pub fn clear(&mut self) {
    self.buf.clear();
  }
}
