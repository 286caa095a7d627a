use std::collections::HashMap;

use crate::types::Rgb;

/// Occurrence count plus the position of the first occurrence, used to break
/// ties between equally frequent colors.
#[derive(Debug, Clone, Copy)]
struct Tally {
    count: usize,
    first_seen: usize,
}

/// Most frequent color in `samples`.
///
/// Ties go to the color encountered first. Returns `None` for no samples.
pub fn dominant_color(samples: &[Rgb]) -> Option<Rgb> {
    let mut tallies: HashMap<Rgb, Tally> = HashMap::new();
    for (idx, color) in samples.iter().enumerate() {
        tallies
            .entry(*color)
            .and_modify(|t| t.count += 1)
            .or_insert(Tally {
                count: 1,
                first_seen: idx,
            });
    }

    tallies
        .into_iter()
        .max_by(|(_, a), (_, b)| {
            a.count
                .cmp(&b.count)
                .then_with(|| b.first_seen.cmp(&a.first_seen))
        })
        .map(|(color, _)| color)
}
