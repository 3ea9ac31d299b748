#![no_main]

use libfuzzer_sys::fuzz_target;
use nodechain::ds::List;

// Fuzz arbitrary operation sequences on List against a Vec model.
//
// Each op consumes three bytes: opcode, a signed position and a value.
fuzz_target!(|data: &[u8]| {
    let mut list: List<u8> = List::new();
    let mut model: Vec<u8> = Vec::new();

    for chunk in data.chunks_exact(3) {
        let op = chunk[0] % 10;
        let pos = chunk[1] as i8 as isize % 12;
        let value = chunk[2];

        match op {
            0 => {
                list.push_front(value);
                model.insert(0, value);
            }
            1 => {
                list.push_back(value);
                model.push(value);
            }
            2 => {
                let expected = if model.is_empty() {
                    None
                } else {
                    Some(model.remove(0))
                };
                assert_eq!(list.pop_front(), expected);
            }
            3 => assert_eq!(list.pop_back(), model.pop()),
            4 => {
                // insert
                list.insert(pos, value);
                let at = clamp(model.len(), pos);
                if at >= model.len() {
                    model.push(value);
                } else {
                    model.insert(at, value);
                }
            }
            5 => {
                // get
                let expected = resolve(model.len(), pos).map(|i| &model[i]);
                assert_eq!(list.get(pos), expected);
            }
            6 => {
                // slice_remove
                let length = isize::from(value % 6);
                let removed = list.slice_remove(pos, length).map(|r| r.to_vec());
                let expected = resolve(model.len(), pos).and_then(|at| {
                    let count = (length as usize).min(model.len() - at);
                    (count > 0).then(|| model.drain(at..at + count).collect::<Vec<_>>())
                });
                assert_eq!(removed, expected);
            }
            7 => {
                // splice
                let length = isize::from(value % 4);
                let replacement = vec![value; usize::from(value % 3)];
                let removed = list.splice(pos, length, replacement.clone()).to_vec();
                let at = clamp(model.len(), pos);
                if at >= model.len() {
                    assert!(removed.is_empty());
                    model.extend(replacement);
                } else {
                    let count = (length as usize).min(model.len() - at);
                    let expected: Vec<u8> = model.splice(at..at + count, replacement).collect();
                    assert_eq!(removed, expected);
                }
            }
            8 => {
                // remove_value
                let expected = model.iter().position(|v| *v == value).map(|i| model.remove(i));
                assert_eq!(list.remove_value(&value), expected);
            }
            9 => {
                list.clear();
                model.clear();
            }
            _ => unreachable!(),
        }

        assert!(list.check_invariants().is_ok());
        assert_eq!(list.len(), model.len());
    }

    assert_eq!(list.to_vec(), model);
});

fn resolve(len: usize, index: isize) -> Option<usize> {
    let pos = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index as usize
    };
    (pos < len).then_some(pos)
}

fn clamp(len: usize, index: isize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index as usize
    }
}
