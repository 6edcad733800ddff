#![no_main]
use libfuzzer_sys::fuzz_target;
use urlsmith::Url;

fuzz_target!(|data: &str| {
    if let Ok(url) = Url::parse(data) {
        let rendered = url.render();
        let reparsed = Url::parse(&rendered).unwrap();
        assert_eq!(url, reparsed);
        assert_eq!(rendered, reparsed.render());
    }
});
