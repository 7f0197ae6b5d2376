#![no_main]

use libfuzzer_sys::fuzz_target;

use readview::{ExtractOptions, ReadabilityExtractor, Reader};

fuzz_target!(|data: &[u8]| {
    let html = readview::source::decode_html(data);
    let options = ExtractOptions::new().with("url", "https://example.com/");

    // Extraction must never panic, whatever the input
    let _ = Reader::new(ReadabilityExtractor).extract_from_html(&html, &options);
});
