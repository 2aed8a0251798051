#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Stats {
  pub packs_parsed: u64,
  pub es_units: u64,
  pub unsynchronized_bytes: u64,
  pub buffer_overflows: u64,
  pub truncated_packs: u64,
  pub short_packs: u64,
  pub stream_map_updates: u64,
}
