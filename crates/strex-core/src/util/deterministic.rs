//! Deterministic ordering helpers.
//!
//! Rendering the same document twice must produce identical text, so every
//! reordering the report performs lives here and is stable.

use std::collections::HashMap;

use crate::results::model::{DecodedString, LanguageString};

/// Sort language strings by ascending offset.
///
/// The sort is stable: records sharing an offset keep their input order.
pub fn sort_by_offset(strings: &mut [&LanguageString]) {
    strings.sort_by_key(|s| s.offset);
}

/// Group decoded strings by decoding routine.
///
/// Groups appear in order of the routine's first occurrence; records keep
/// their input order inside each group.
pub fn group_by_routine(strings: &[DecodedString]) -> Vec<(u64, Vec<&DecodedString>)> {
    let mut groups: Vec<(u64, Vec<&DecodedString>)> = Vec::new();
    let mut index: HashMap<u64, usize> = HashMap::new();

    for ds in strings {
        match index.get(&ds.decoding_routine) {
            Some(&i) => groups[i].1.push(ds),
            None => {
                index.insert(ds.decoding_routine, groups.len());
                groups.push((ds.decoding_routine, vec![ds]));
            }
        }
    }

    groups
}
