#![no_main]
use libfuzzer_sys::fuzz_target;
use urlsmith::encoding::{decode, encode, table};

fuzz_target!(|data: &str| {
    for t in [
        table::USERINFO,
        table::REG_NAME,
        table::PATH_SEGMENT,
        table::QUERY,
        table::QUERY_PART,
        table::FRAGMENT,
    ] {
        let enc = encode(data, t);
        assert_eq!(decode(&enc).unwrap(), data);
    }
});
