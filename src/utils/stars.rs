use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Star {
    Full,
    Half,
    Empty,
}

/// Maps a rating in [0, 5] to the five-star row shown on the details
/// page: one full star per whole point, a half star when the fractional
/// part is at least 0.5, empty stars for the rest.
pub fn star_row(rating: f64) -> [Star; 5] {
    let full = rating.floor() as usize;
    let has_half = rating % 1.0 >= 0.5;

    let mut row = [Star::Empty; 5];
    for (i, star) in row.iter_mut().enumerate() {
        let position = i + 1;
        *star = if position <= full {
            Star::Full
        } else if position == full + 1 && has_half {
            Star::Half
        } else {
            Star::Empty
        };
    }

    row
}
