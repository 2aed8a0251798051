use crate::mp2p::{PsHandler, PACK_START_CODE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
  Begin,
  Es(Vec<u8>, u8),
  End,
}

/// Handler that records every callback.
#[derive(Default, Debug)]
pub struct Recorder {
  pub events: Vec<Event>,
}

impl PsHandler for Recorder {
  fn on_pack_parse_begin(&mut self) {
    self.events.push(Event::Begin);
  }

  fn on_pack_pes_es_data(&mut self, es: &[u8], stream_type: u8) {
    self.events.push(Event::Es(es.to_vec(), stream_type));
  }

  fn on_pack_parse_end(&mut self) {
    self.events.push(Event::End);
  }
}

pub fn pack_header(stuffing: usize) -> Vec<u8> {
  let mut v = PACK_START_CODE.to_vec();
  // SCR, program_mux_rate and markers.
  v.extend_from_slice(&[0x44, 0x00, 0x04, 0x00, 0x04, 0x01, 0x01, 0x89, 0xC3]);
  v.push(0xF8 | stuffing as u8);
  v.extend(std::iter::repeat(0xFF).take(stuffing));
  v
}

pub fn system_header() -> Vec<u8> {
  vec![
    0x00, 0x00, 0x01, 0xBB, 0x00, 0x0C, 0x80, 0x1E, 0xFF, 0xFE, 0xE1, 0x7F,
    0xE0, 0xE0, 0xE8, 0xC0, 0xC0, 0x20,
  ]
}

pub fn psm(entries: &[(u8, u8)]) -> Vec<u8> {
  let map_len = entries.len() * 4;
  let psm_len = 2 + 2 + 2 + map_len + 4;
  let mut v = vec![0x00, 0x00, 0x01, 0xBC];
  v.extend_from_slice(&(psm_len as u16).to_be_bytes());
  v.extend_from_slice(&[0xE0, 0xFF, 0x00, 0x00]);
  v.extend_from_slice(&(map_len as u16).to_be_bytes());
  for &(stream_type, stream_id) in entries {
    v.extend_from_slice(&[stream_type, stream_id, 0x00, 0x00]);
  }
  v.extend_from_slice(&[0x00, 0x00, 0x00, 0x00]);
  v
}

pub fn pes(stream_id: u8, header_data: &[u8], payload: &[u8]) -> Vec<u8> {
  let packet_len = 3 + header_data.len() + payload.len();
  let mut v = vec![0x00, 0x00, 0x01, stream_id];
  v.extend_from_slice(&(packet_len as u16).to_be_bytes());
  v.extend_from_slice(&[0x80, if header_data.is_empty() { 0x00 } else { 0x80 }]);
  v.push(header_data.len() as u8);
  v.extend_from_slice(header_data);
  v.extend_from_slice(payload);
  v
}

pub fn padding(len: usize) -> Vec<u8> {
  let mut v = vec![0x00, 0x00, 0x01, 0xBE];
  v.extend_from_slice(&(len as u16).to_be_bytes());
  v.extend(std::iter::repeat(0xFF).take(len));
  v
}

pub fn concat(parts: &[Vec<u8>]) -> Vec<u8> {
  parts.concat()
}
