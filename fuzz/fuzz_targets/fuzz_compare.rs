#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    // Arbitrary page text and queries must never panic
    let (page, query) = input;
    if let Ok(cmp) = pagesearch::search::compare(page, query) {
        let _ = pagesearch::search::highlight(page, &cmp.query, &cmp.candidates);
    }
    let _ = pagesearch::search::complete(page, query);
});
