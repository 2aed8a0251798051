use snafu::Snafu;

#[derive(Debug, Snafu, PartialEq, Eq)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
  #[snafu(display("Invalid max pack size: {}", size))]
  InvalidMaxPackSize { size: usize },

  #[snafu(display("Could not allocate a {} byte pack buffer", size))]
  BufferAllocation { size: usize },

  #[snafu(display(
    "Truncated structure at offset {}: need {} bytes, {} remaining",
    offset,
    needed,
    remaining
  ))]
  Truncated {
    offset: usize,
    needed: usize,
    remaining: usize,
  },

  #[snafu(display("Missing start code prefix at offset {}", offset))]
  MissingStartCode { offset: usize },

  #[snafu(display(
    "PES packet length {} is shorter than its header ({} bytes)",
    packet_len,
    header_len
  ))]
  PesLengthUnderflow { packet_len: usize, header_len: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
