#![no_main]

use libfuzzer_sys::fuzz_target;
use nodechain::ds::CacheList;

// Fuzz arbitrary operation sequences on CacheList.
//
// Tests prepend_key, move_to_head_by_key, remove_by_key, pop_key and clear,
// checking that the key index and the chain never drift apart.
fuzz_target!(|data: &[u8]| {
    let mut recency: CacheList<u8, u8> = CacheList::new();

    for pair in data.chunks_exact(2) {
        let op = pair[0] % 6;
        let key = pair[1] % 32;

        match op {
            0 | 1 => {
                let present = recency.contains_key(&key);
                let old_len = recency.len();
                let result = recency.prepend_key(key, key);
                if present {
                    assert!(result.is_err());
                    assert_eq!(recency.len(), old_len);
                } else {
                    assert!(result.is_ok());
                    assert_eq!(recency.front_key(), Some(&key));
                }
            }
            2 => {
                let present = recency.contains_key(&key);
                assert_eq!(recency.move_to_head_by_key(&key), present);
                if present {
                    assert_eq!(recency.front_key(), Some(&key));
                }
            }
            3 => {
                let present = recency.contains_key(&key);
                assert_eq!(recency.remove_by_key(&key), present);
                assert!(!recency.contains_key(&key));
            }
            4 => {
                let expected = recency.back_key().copied();
                assert_eq!(recency.pop_key(), expected);
                if let Some(evicted) = expected {
                    assert!(!recency.contains_key(&evicted));
                }
            }
            5 => {
                recency.clear();
                assert!(recency.is_empty());
            }
            _ => unreachable!(),
        }

        assert!(recency.check_invariants().is_ok());
    }
});
