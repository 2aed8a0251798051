use crate::internal::cursor::Cursor;
use crate::Result;
use std::fmt;

const PSM_ENTRY_LEN: usize = 4;

/// Maps a PES stream id to the `stream_type` announced for it by the most
/// recent program stream map. Unknown ids map to 0.
#[derive(Clone)]
pub struct StreamTypeTable {
  types: [u8; 256],
}

impl StreamTypeTable {
  pub fn new() -> StreamTypeTable {
    StreamTypeTable { types: [0; 256] }
  }

  pub fn get(&self, stream_id: u8) -> u8 {
    self.types[stream_id as usize]
  }

  pub fn set(&mut self, stream_id: u8, stream_type: u8) {
    self.types[stream_id as usize] = stream_type;
  }

  /// Known (non-zero) entries, ordered by stream id.
  pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
    self
      .types
      .iter()
      .enumerate()
      .filter(|&(_, &t)| t != 0)
      .map(|(id, &t)| (id as u8, t))
  }

  /// Reads the elementary stream map of the program stream map at `psm` (which
  /// must be positioned on its start code) and records every entry.
  ///
  /// Fails only when the map's start code and length run past the pack.
  /// Inside the map, reading stops quietly at its end; entries read up to
  /// there are kept. Returns the number of entries written.
  pub fn update_from_psm(&mut self, psm: Cursor) -> Result<usize> {
    let mut c = psm;
    c.skip(4)?; // start code + map_stream_id
    let psm_len = c.read_u16()? as usize;

    // Confine the walk to the map itself when the pack holds all of it.
    let end = psm_len.min(c.remaining());
    let mut written = 0;
    let _ = self.read_es_map(Cursor::new(&c.rest()[..end]), &mut written);
    Ok(written)
  }

  fn read_es_map(&mut self, map: Cursor, written: &mut usize) -> Result<()> {
    let mut c = map;
    c.skip(2)?; // current_next_indicator, version, marker
    let info_len = c.read_u16()? as usize;
    c.skip(info_len)?;
    let map_len = c.read_u16()? as usize;

    for _ in 0..map_len / PSM_ENTRY_LEN {
      let entry = c.take(PSM_ENTRY_LEN)?;
      let stream_type = entry[0];
      let stream_id = entry[1];
      self.set(stream_id, stream_type);
      *written += 1;
    }
    Ok(())
  }
}

impl Default for StreamTypeTable {
  fn default() -> StreamTypeTable {
    StreamTypeTable::new()
  }
}

impl fmt::Debug for StreamTypeTable {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.debug_map().entries(self.iter()).finish()
  }
}
