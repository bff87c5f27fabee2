use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use encoding_rs_io::DecodeReaderBytesBuilder;
use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

pub type EncodedBufReader = BufReader<encoding_rs_io::DecodeReaderBytes<File, Vec<u8>>>;

/// Open a file with BOM sniffing and return a buffered reader that yields
/// UTF-8 text. Inputs without a BOM are passed through as UTF-8.
pub fn open_encoded_reader<P: AsRef<Path>>(
    filepath: P,
    buffer_size: usize,
) -> io::Result<EncodedBufReader> {
    let file = File::open(filepath)?;
    let decoder = DecodeReaderBytesBuilder::new()
        .encoding(None)
        .build(file);
    Ok(BufReader::with_capacity(buffer_size, decoder))
}

/// Read the entire file into a UTF-8 `String`, guessing the source encoding.
pub fn read_to_string_auto<P: AsRef<Path>>(filepath: P) -> io::Result<String> {
    let bytes = fs::read(filepath)?;
    Ok(decode_bytes_auto(&bytes))
}

/// Detect text encoding from a byte slice.
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

/// Decode a byte slice to a UTF-8 `String` using automatic encoding detection.
pub fn decode_bytes_auto(bytes: &[u8]) -> String {
    // decode()는 BOM이 있으면 감지 결과보다 BOM을 우선함
    let enc = detect_encoding(bytes);
    let (cow, _, _) = enc.decode(bytes);
    cow.into_owned()
}
