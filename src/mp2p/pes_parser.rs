use crate::error::PesLengthUnderflowSnafu;
use crate::internal::cursor::Cursor;
use crate::Result;
use snafu::ensure;

// The two flag bytes and the PES_header_data_length byte that follow
// PES_packet_length (ISO/IEC 13818-1 2.4.3.6).
const PES_FIXED_HEADER_LEN: usize = 3;

/// A PES packet's elementary stream payload.
#[derive(Debug, PartialEq, Eq)]
pub struct PesPayload<'a> {
  pub stream_id: u8,
  pub es: &'a [u8],
}

/// Parses the PES packet at the cursor, leaving the cursor after the packet.
///
/// On error the cursor is left where it was.
pub fn parse_pes<'a>(cursor: &mut Cursor<'a>) -> Result<PesPayload<'a>> {
  let mut c = *cursor;

  let stream_id = c.peek_start_code()?;
  c.skip(4)?;
  let packet_len = c.read_u16()? as usize;
  c.skip(2)?; // flags
  let header_data_len = c.read_u8()? as usize;

  let header_len = PES_FIXED_HEADER_LEN + header_data_len;
  ensure!(
    packet_len >= header_len,
    PesLengthUnderflowSnafu {
      packet_len,
      header_len,
    }
  );

  c.skip(header_data_len)?;
  let es = c.take(packet_len - header_len)?;

  *cursor = c;
  Ok(PesPayload { stream_id, es })
}
