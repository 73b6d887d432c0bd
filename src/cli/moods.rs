use tabled::Table;

use crate::{
    mood::{self, Mood},
    types::MoodTableRow,
};

pub fn moods(mood: Option<Mood>) {
    let selected: Vec<Mood> = match mood {
        Some(m) => vec![m],
        None => Mood::ALL.to_vec(),
    };

    let rows: Vec<MoodTableRow> = selected
        .iter()
        .flat_map(|m| {
            mood::feature_ranges(*m)
                .iter()
                .map(|(feature, range)| MoodTableRow {
                    mood: m.to_string(),
                    feature: feature.to_string(),
                    range: format!("[{}, {}]", range.lo, range.hi),
                })
        })
        .collect();

    let table = Table::new(rows);
    println!("{}", table);
}
