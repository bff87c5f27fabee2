pub mod constants;
pub mod encoding;
pub mod logger;

pub use self::encoding::{decode_bytes_auto, open_encoded_reader, read_to_string_auto};
pub use self::logger::Logger;
