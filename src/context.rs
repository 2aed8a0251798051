use crate::mp2p::StreamTypeTable;
use crate::stats::Stats;

/// Session state shared by the parsers of one demuxer.
pub struct Context {
  pub stats: Stats,
  pub stream_types: StreamTypeTable,
}

impl Context {
  pub fn new() -> Context {
    Context {
      stats: Default::default(),
      stream_types: StreamTypeTable::new(),
    }
  }
}
