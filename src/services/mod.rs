pub mod agency;
pub mod awards;
pub mod covid;
pub mod dashboard;
pub mod explore;
pub mod recipients;
pub mod search;

use crate::models::Colored;
use crate::palette::{self, Color};

/// Pair the first `top_n` rows with palette colors and drop the rest.
pub fn color_top<T>(rows: Vec<T>, palette: &[Color], top_n: usize) -> Vec<Colored<T>> {
    rows.into_iter()
        .take(top_n)
        .enumerate()
        .map(|(position, item)| Colored {
            item,
            color: palette::slot(palette, position, top_n).map(|(_, color)| color),
        })
        .collect()
}
