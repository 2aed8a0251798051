mod demuxer;
mod pack_parser;
mod pes_parser;
mod stream_map;

#[cfg(test)]
mod test_util;

pub use demuxer::{Config, PsDemuxer, DEFAULT_MAX_PACK_SIZE};
pub use stream_map::StreamTypeTable;

use twiddle::Twiddle;

pub const PACK_START_CODE: [u8; 4] = [0x00, 0x00, 0x01, 0xBA];

// ISO/IEC 13818-1 Table 2-18
pub const SYSTEM_HEADER_STREAM_ID: u8 = 0xBB;
pub const PROGRAM_STREAM_MAP_STREAM_ID: u8 = 0xBC;

/// Receives the elementary stream data found in each completed pack.
///
/// All calls happen synchronously from within `PsDemuxer::put_stream` (or
/// `flush`). The `es` slice borrows the demuxer's pack buffer and is only valid
/// for the duration of the call.
#[cfg_attr(test, mockall::automock)]
pub trait PsHandler {
  fn on_pack_parse_begin(&mut self);
  fn on_pack_pes_es_data(&mut self, es: &[u8], stream_type: u8);
  fn on_pack_parse_end(&mut self);
}

impl<H: PsHandler + ?Sized> PsHandler for &mut H {
  fn on_pack_parse_begin(&mut self) {
    (**self).on_pack_parse_begin()
  }

  fn on_pack_pes_es_data(&mut self, es: &[u8], stream_type: u8) {
    (**self).on_pack_pes_es_data(es, stream_type)
  }

  fn on_pack_parse_end(&mut self) {
    (**self).on_pack_parse_end()
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamId {
  SystemHeader,
  ProgramStreamMap,
  Audio(u8),
  Video(u8),
  Other(u8),
}

impl StreamId {
  pub fn from_u8(id: u8) -> StreamId {
    match id {
      SYSTEM_HEADER_STREAM_ID => StreamId::SystemHeader,
      PROGRAM_STREAM_MAP_STREAM_ID => StreamId::ProgramStreamMap,
      0xC0..=0xDF => StreamId::Audio(id.bits(4..=0)),
      0xE0..=0xEF => StreamId::Video(id.bits(3..=0)),
      _ => StreamId::Other(id),
    }
  }
}

/// Well-known `stream_type` values carried by program stream maps. Values from
/// ISO/IEC 13818-1 Table 2-34 plus the GB/T 28181 assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamType {
  Mpeg1Video = 0x01,
  Mpeg2Video = 0x02,
  Mpeg1Audio = 0x03,
  Mpeg2Audio = 0x04,
  AdtsAac = 0x0F,
  Mpeg4Video = 0x10,
  Avc = 0x1B,
  Hevc = 0x24,
  SvacVideo = 0x80,
  G711A = 0x90,
  G711U = 0x91,
  G7221 = 0x92,
  G7231 = 0x93,
  G729 = 0x99,
  SvacAudio = 0x9B,
}

impl StreamType {
  pub fn from_u8(v: u8) -> Option<StreamType> {
    let t = match v {
      0x01 => StreamType::Mpeg1Video,
      0x02 => StreamType::Mpeg2Video,
      0x03 => StreamType::Mpeg1Audio,
      0x04 => StreamType::Mpeg2Audio,
      0x0F => StreamType::AdtsAac,
      0x10 => StreamType::Mpeg4Video,
      0x1B => StreamType::Avc,
      0x24 => StreamType::Hevc,
      0x80 => StreamType::SvacVideo,
      0x90 => StreamType::G711A,
      0x91 => StreamType::G711U,
      0x92 => StreamType::G7221,
      0x93 => StreamType::G7231,
      0x99 => StreamType::G729,
      0x9B => StreamType::SvacAudio,
      _ => return None,
    };
    Some(t)
  }

  pub fn is_video(self) -> bool {
    match self {
      StreamType::Mpeg1Video
      | StreamType::Mpeg2Video
      | StreamType::Mpeg4Video
      | StreamType::Avc
      | StreamType::Hevc
      | StreamType::SvacVideo => true,
      _ => false,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stream_id() {
    assert_eq!(StreamId::from_u8(0xBB), StreamId::SystemHeader);
    assert_eq!(StreamId::from_u8(0xBC), StreamId::ProgramStreamMap);
    assert_eq!(StreamId::from_u8(0xC0), StreamId::Audio(0));
    assert_eq!(StreamId::from_u8(0xDF), StreamId::Audio(31));
    assert_eq!(StreamId::from_u8(0xE0), StreamId::Video(0));
    assert_eq!(StreamId::from_u8(0xEF), StreamId::Video(15));
    assert_eq!(StreamId::from_u8(0xBD), StreamId::Other(0xBD));
    assert_eq!(StreamId::from_u8(0xF0), StreamId::Other(0xF0));
  }

  #[test]
  fn stream_type() {
    assert_eq!(StreamType::from_u8(0x1B), Some(StreamType::Avc));
    assert_eq!(StreamType::from_u8(0x90), Some(StreamType::G711A));
    assert_eq!(StreamType::from_u8(0x00), None);
    assert!(StreamType::Hevc.is_video());
    assert!(!StreamType::AdtsAac.is_video());
    assert_eq!(StreamType::Avc as u8, 0x1B);
  }
}
