use crate::context::Context;
use crate::internal::cursor::Cursor;
use crate::mp2p::pes_parser::parse_pes;
use crate::mp2p::{PsHandler, StreamId};
use crate::Result;
use log::{debug, trace};
use twiddle::Twiddle;

// pack_start_code plus the fixed part of pack_header() up to and including
// pack_stuffing_length (ISO/IEC 13818-1 Table 2-33).
const PACK_HEADER_LEN: usize = 14;

/// Walks one complete pack, updating the stream type table from any program
/// stream map and handing every audio/video PES payload to `handler`.
///
/// The first structural anomaly ends the walk; whatever was dispatched before
/// it stands and `on_pack_parse_end` still fires. A pack too short for its own
/// pack header produces no callbacks at all.
pub fn parse_pack<H>(ctx: &mut Context, handler: &mut H, pack: &[u8])
where
  H: PsHandler + ?Sized,
{
  if pack.len() < PACK_HEADER_LEN {
    ctx.stats.short_packs += 1;
    return;
  }
  let stuffing_len = pack[PACK_HEADER_LEN - 1].bits(2..=0) as usize;
  if pack.len() < PACK_HEADER_LEN + stuffing_len {
    ctx.stats.short_packs += 1;
    return;
  }

  handler.on_pack_parse_begin();

  let mut c = Cursor::new(&pack[PACK_HEADER_LEN + stuffing_len..]);
  while c.remaining() >= 4 {
    if let Err(e) = parse_structure(ctx, handler, &mut c) {
      debug!("pack truncated: {}", e);
      ctx.stats.truncated_packs += 1;
      break;
    }
  }

  handler.on_pack_parse_end();

  ctx.stats.packs_parsed += 1;
  trace!("parsed pack of {} bytes", pack.len());
}

fn parse_structure<H>(
  ctx: &mut Context,
  handler: &mut H,
  c: &mut Cursor,
) -> Result<()>
where
  H: PsHandler + ?Sized,
{
  let stream_id = c.peek_start_code()?;

  match StreamId::from_u8(stream_id) {
    StreamId::ProgramStreamMap => {
      let n = ctx.stream_types.update_from_psm(*c)?;
      ctx.stats.stream_map_updates += n as u64;
      skip_structure(c)
    }
    StreamId::Audio(_) | StreamId::Video(_) => {
      let pes = parse_pes(c)?;
      let stream_type = ctx.stream_types.get(pes.stream_id);
      trace!(
        "es unit: stream_id={:#04x} stream_type={:#04x} len={}",
        pes.stream_id,
        stream_type,
        pes.es.len()
      );
      ctx.stats.es_units += 1;
      handler.on_pack_pes_es_data(pes.es, stream_type);
      Ok(())
    }
    // System header, padding, private streams...
    StreamId::SystemHeader | StreamId::Other(_) => skip_structure(c),
  }
}

fn skip_structure(c: &mut Cursor) -> Result<()> {
  c.skip(4)?;
  let len = c.read_u16()? as usize;
  c.skip(len)
}
