pub mod cursor;
pub mod pack_buffer;
