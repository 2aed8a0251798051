use crate::error::{MissingStartCodeSnafu, TruncatedSnafu};
use crate::Result;
use bytes::Buf;
use snafu::ensure;

pub const START_CODE_PREFIX: [u8; 3] = [0x00, 0x00, 0x01];

/// A read cursor over a borrowed slice. Every read is bounds checked and fails
/// with `Error::Truncated` instead of running past the end.
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
  data: &'a [u8],
  pos: usize,
}

impl<'a> Cursor<'a> {
  pub fn new(data: &'a [u8]) -> Cursor<'a> {
    Cursor { data, pos: 0 }
  }

  pub fn position(&self) -> usize {
    self.pos
  }

  pub fn remaining(&self) -> usize {
    self.data.len() - self.pos
  }

  /// The unread part of the underlying slice.
  pub fn rest(&self) -> &'a [u8] {
    &self.data[self.pos..]
  }

  fn require(&self, needed: usize) -> Result<()> {
    ensure!(
      self.remaining() >= needed,
      TruncatedSnafu {
        offset: self.pos,
        needed,
        remaining: self.remaining(),
      }
    );
    Ok(())
  }

  pub fn read_u8(&mut self) -> Result<u8> {
    self.require(1)?;
    let mut buf = self.rest();
    let v = buf.get_u8();
    self.pos += 1;
    Ok(v)
  }

  pub fn read_u16(&mut self) -> Result<u16> {
    self.require(2)?;
    let mut buf = self.rest();
    let v = buf.get_u16();
    self.pos += 2;
    Ok(v)
  }

  pub fn skip(&mut self, n: usize) -> Result<()> {
    self.require(n)?;
    self.pos += n;
    Ok(())
  }

  pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
    self.require(n)?;
    let v = &self.data[self.pos..self.pos + n];
    self.pos += n;
    Ok(v)
  }

  /// Returns the stream id following a `00 00 01` prefix at the cursor,
  /// without consuming anything.
  pub fn peek_start_code(&self) -> Result<u8> {
    self.require(4)?;
    ensure!(
      self.rest()[..3] == START_CODE_PREFIX,
      MissingStartCodeSnafu { offset: self.pos }
    );
    Ok(self.data[self.pos + 3])
  }
}
