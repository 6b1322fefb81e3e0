//! Presentation mapper: scroll position to style-agnostic rows.

/// Visual depth of a row relative to the center line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthBand {
    Center,
    Near,
    Mid,
    Far,
}

impl DepthBand {
    pub fn from_distance(distance: usize) -> Self {
        match distance {
            0 => Self::Center,
            1..=2 => Self::Near,
            3..=5 => Self::Mid,
            _ => Self::Far,
        }
    }
}

/// One screen row of the prompter body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row<'a> {
    Blank,
    Line { index: usize, text: &'a str, band: DepthBand },
}

/// Maps `height` rows around `offset` so the current line sits at `height / 2`.
pub fn map_viewport(offset: usize, height: usize, lines: &[String]) -> Vec<Row<'_>> {
    let center = height / 2;
    (0..height)
        .map(|row| {
            let index = (offset + row).checked_sub(center);
            match index.and_then(|i| lines.get(i).map(|text| (i, text))) {
                Some((index, text)) => Row::Line {
                    index,
                    text,
                    band: DepthBand::from_distance(row.abs_diff(center)),
                },
                None => Row::Blank,
            }
        })
        .collect()
}
