use crate::context::Context;
use crate::error::InvalidMaxPackSizeSnafu;
use crate::internal::pack_buffer::PackBuffer;
use crate::mp2p::pack_parser::parse_pack;
use crate::mp2p::{PsHandler, StreamTypeTable, PACK_START_CODE};
use crate::stats::Stats;
use crate::Result;
use log::debug;
use snafu::ensure;

pub const DEFAULT_MAX_PACK_SIZE: usize = 200 * 1024;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// Capacity of the pack buffer. A pack that grows past it is dropped.
  pub max_pack_size: usize,
}

impl Config {
  pub fn with_max_pack_size(mut self, max_pack_size: usize) -> Config {
    self.max_pack_size = max_pack_size;
    self
  }
}

impl Default for Config {
  fn default() -> Config {
    Config {
      max_pack_size: DEFAULT_MAX_PACK_SIZE,
    }
  }
}

/// Reassembles program stream packs from a chunked byte stream and hands the
/// elementary stream data of every complete pack to a `PsHandler`.
///
/// Chunks must be framed on pack boundaries: a new pack has to start at the
/// first byte of a chunk, and every other chunk is taken as a continuation of
/// the current pack. A pack is parsed when the chunk starting the next one
/// arrives (or on `flush`).
pub struct PsDemuxer<H> {
  ctx: Context,
  handler: H,
  buf: PackBuffer,
  start_code_found: bool,
}

impl<H> PsDemuxer<H>
where
  H: PsHandler,
{
  pub fn new(handler: H) -> PsDemuxer<H> {
    let buf = PackBuffer::with_capacity(DEFAULT_MAX_PACK_SIZE);
    PsDemuxer::from_parts(handler, buf)
  }

  pub fn with_config(handler: H, config: Config) -> Result<PsDemuxer<H>> {
    ensure!(
      config.max_pack_size > 0,
      InvalidMaxPackSizeSnafu {
        size: config.max_pack_size,
      }
    );
    let buf = PackBuffer::try_with_capacity(config.max_pack_size)?;
    Ok(PsDemuxer::from_parts(handler, buf))
  }

  fn from_parts(handler: H, buf: PackBuffer) -> PsDemuxer<H> {
    PsDemuxer {
      ctx: Context::new(),
      handler,
      buf,
      start_code_found: false,
    }
  }

  pub fn put_stream(&mut self, chunk: &[u8]) {
    let starts_pack = chunk.starts_with(&PACK_START_CODE);

    if !self.start_code_found {
      if !starts_pack {
        self.ctx.stats.unsynchronized_bytes += chunk.len() as u64;
        return;
      }
      self.start_code_found = true;
    } else if starts_pack {
      parse_pack(&mut self.ctx, &mut self.handler, &self.buf);
      self.buf.clear();
    }

    if !self.buf.write(chunk) {
      debug!(
        "pack exceeds {} bytes, dropping {} buffered bytes",
        self.buf.capacity(),
        self.buf.len() + chunk.len()
      );
      self.ctx.stats.buffer_overflows += 1;
      self.reset();
    }
  }

  /// Parses the pack buffered so far as if the next pack had started. Call at
  /// end of input; the demuxer then waits for a new pack start code.
  pub fn flush(&mut self) {
    if self.start_code_found {
      parse_pack(&mut self.ctx, &mut self.handler, &self.buf);
    }
    self.reset();
  }

  /// Drops any buffered bytes and waits for the next pack start code. Stream
  /// types learned so far are kept.
  pub fn reset(&mut self) {
    self.buf.clear();
    self.start_code_found = false;
  }

  pub fn stream_type(&self, stream_id: u8) -> u8 {
    self.ctx.stream_types.get(stream_id)
  }

  pub fn stream_types(&self) -> &StreamTypeTable {
    &self.ctx.stream_types
  }

  pub fn stats(&self) -> &Stats {
    &self.ctx.stats
  }

  pub fn buffered_len(&self) -> usize {
    self.buf.len()
  }

  pub fn max_pack_size(&self) -> usize {
    self.buf.capacity()
  }

  pub fn handler(&self) -> &H {
    &self.handler
  }

  pub fn mut_handler(&mut self) -> &mut H {
    &mut self.handler
  }

  pub fn into_handler(self) -> H {
    self.handler
  }
}
