use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{Gap, ItemAlignment, StyleError, parse_length};

/// Upper bound for `repeat()` counts, keeps a typo from allocating millions of tracks.
const MAX_REPEAT: usize = 1000;

/// A single grid track size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Track {
    /// Share of the free space (`1fr`).
    Fraction(f32),
    /// Fixed size in logical pixels.
    Pixels(f32),
    /// Sized to content.
    Auto,
}

impl FromStr for Track {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s {
            "" => Err(StyleError::Empty),
            "auto" | "min-content" | "max-content" => Ok(Track::Auto),
            _ => {
                if let Some(num) = s.strip_suffix("fr") {
                    return match num.parse::<f32>() {
                        Ok(n) if n.is_finite() && n > 0.0 => Ok(Track::Fraction(n)),
                        _ => Err(StyleError::InvalidTrack(s.to_string())),
                    };
                }

                parse_length(s)
                    .map(Track::Pixels)
                    .map_err(|_| StyleError::InvalidTrack(s.to_string()))
            }
        }
    }
}

/// An explicit track list, as in `grid-template-columns`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct TrackList(Vec<Track>);

impl TrackList {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self(tracks)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Track> {
        self.0.get(index).copied()
    }
}

impl FromStr for TrackList {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(StyleError::Empty);
        }
        if s == "none" {
            return Ok(Self::default());
        }

        let mut tracks = Vec::new();
        for token in split_top_level(s)? {
            if let Some(body) = token
                .strip_prefix("repeat(")
                .and_then(|rest| rest.strip_suffix(')'))
            {
                let (count, pattern) = body
                    .split_once(',')
                    .ok_or_else(|| StyleError::InvalidRepeat(token.to_string()))?;

                let count = match count.trim().parse::<usize>() {
                    Ok(n) if (1..=MAX_REPEAT).contains(&n) => n,
                    _ => return Err(StyleError::InvalidRepeat(token.to_string())),
                };

                let pattern: TrackList = pattern
                    .parse()
                    .map_err(|_| StyleError::InvalidRepeat(token.to_string()))?;
                if pattern.is_empty() {
                    return Err(StyleError::InvalidRepeat(token.to_string()));
                }

                for _ in 0..count {
                    tracks.extend_from_slice(pattern.tracks());
                }
            } else {
                tracks.push(token.parse()?);
            }
        }

        Ok(Self(tracks))
    }
}

/// Split on whitespace that is not nested inside parentheses.
fn split_top_level(s: &str) -> Result<Vec<&str>, StyleError> {
    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut start = None;

    for (idx, ch) in s.char_indices() {
        match ch {
            '(' => {
                depth += 1;
                start.get_or_insert(idx);
            }
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| StyleError::InvalidTrack(s.to_string()))?;
            }
            c if c.is_whitespace() && depth == 0 => {
                if let Some(begin) = start.take() {
                    tokens.push(&s[begin..idx]);
                }
            }
            _ => {
                start.get_or_insert(idx);
            }
        }
    }

    if depth != 0 {
        return Err(StyleError::InvalidTrack(s.to_string()));
    }
    if let Some(begin) = start {
        tokens.push(&s[begin..]);
    }

    Ok(tokens)
}

/// Grid layout of the preview: track lists, gaps and item placement.
///
/// Items are placed row-major. Columns beyond the explicit list do not
/// exist (a single implicit column is used when the list is empty); rows
/// beyond the explicit list are implicit `auto` rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub columns: TrackList,
    pub rows: TrackList,
    pub gap: Gap,
    pub justify_items: ItemAlignment,
    pub align_items: ItemAlignment,
}

impl GridConfig {
    pub fn new(columns: TrackList, rows: TrackList) -> Self {
        Self {
            columns,
            rows,
            gap: Gap::default(),
            justify_items: ItemAlignment::default(),
            align_items: ItemAlignment::default(),
        }
    }

    pub fn with_gap(mut self, gap: Gap) -> Self {
        self.gap = gap;
        self
    }

    pub fn with_justify_items(mut self, alignment: ItemAlignment) -> Self {
        self.justify_items = alignment;
        self
    }

    pub fn with_align_items(mut self, alignment: ItemAlignment) -> Self {
        self.align_items = alignment;
        self
    }

    pub fn column_count(&self) -> usize {
        self.columns.len().max(1)
    }

    /// Rows needed for `total_items`, never fewer than the explicit rows.
    pub fn row_count(&self, total_items: usize) -> usize {
        total_items
            .div_ceil(self.column_count())
            .max(self.rows.len())
    }

    /// `(row, column)` of the item at `index`.
    pub fn cell_position(&self, index: usize) -> (usize, usize) {
        let cols = self.column_count();
        (index / cols, index % cols)
    }

    pub fn column_track(&self, column: usize) -> Track {
        if self.columns.is_empty() {
            return Track::Fraction(1.0);
        }
        self.columns.get(column).unwrap_or(Track::Auto)
    }

    pub fn row_track(&self, row: usize) -> Track {
        self.rows.get(row).unwrap_or(Track::Auto)
    }

    /// Whether the item at `index` is stretched to its row height. Only
    /// fixed rows have a height to fill; content-sized rows keep `start`.
    pub fn fills_cell_height(&self, index: usize) -> bool {
        let (row, _) = self.cell_position(index);
        self.align_items.is_stretch() && matches!(self.row_track(row), Track::Pixels(_))
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new(TrackList::new(vec![Track::Fraction(1.0)]), TrackList::new(vec![Track::Auto]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_track() {
        let list: TrackList = "1fr".parse().unwrap();
        assert_eq!(list.tracks(), &[Track::Fraction(1.0)]);
    }

    #[test]
    fn test_mixed_tracks() {
        let list: TrackList = "200px 1fr auto 2fr".parse().unwrap();
        assert_eq!(
            list.tracks(),
            &[
                Track::Pixels(200.0),
                Track::Fraction(1.0),
                Track::Auto,
                Track::Fraction(2.0)
            ]
        );
    }

    #[test]
    fn test_repeat_expands() {
        let list: TrackList = "repeat(3, 1fr)".parse().unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.tracks().iter().all(|t| *t == Track::Fraction(1.0)));

        let list: TrackList = "100px repeat(2, 1fr 50px)".parse().unwrap();
        assert_eq!(
            list.tracks(),
            &[
                Track::Pixels(100.0),
                Track::Fraction(1.0),
                Track::Pixels(50.0),
                Track::Fraction(1.0),
                Track::Pixels(50.0)
            ]
        );
    }

    #[test]
    fn test_invalid_lists() {
        assert_eq!("".parse::<TrackList>(), Err(StyleError::Empty));
        assert!("repeat(0, 1fr)".parse::<TrackList>().is_err());
        assert!("repeat(auto-fill, 100px)".parse::<TrackList>().is_err());
        assert!("repeat(2 1fr)".parse::<TrackList>().is_err());
        assert!("1fr (".parse::<TrackList>().is_err());
        assert!("1fr)".parse::<TrackList>().is_err());
        assert!("0fr".parse::<TrackList>().is_err());
        assert!("wide".parse::<TrackList>().is_err());
    }

    #[test]
    fn test_none_is_empty() {
        let list: TrackList = "none".parse().unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_cell_positions() {
        let config = GridConfig::new("repeat(3, 1fr)".parse().unwrap(), "auto".parse().unwrap());
        assert_eq!(config.column_count(), 3);
        assert_eq!(config.cell_position(0), (0, 0));
        assert_eq!(config.cell_position(2), (0, 2));
        assert_eq!(config.cell_position(4), (1, 1));
        assert_eq!(config.row_count(7), 3);
        assert_eq!(config.row_count(0), 1);
    }

    #[test]
    fn test_implicit_tracks() {
        let config = GridConfig::new(TrackList::default(), "120px".parse().unwrap());
        assert_eq!(config.column_count(), 1);
        assert_eq!(config.column_track(0), Track::Fraction(1.0));
        assert_eq!(config.row_track(0), Track::Pixels(120.0));
        assert_eq!(config.row_track(5), Track::Auto);
    }

    #[test]
    fn test_vertical_stretch_needs_fixed_row() {
        let config = GridConfig::new("repeat(2, 1fr)".parse().unwrap(), "150px auto".parse().unwrap());
        assert!(config.fills_cell_height(0));
        assert!(config.fills_cell_height(1));
        assert!(!config.fills_cell_height(2));
        assert!(!config.fills_cell_height(9));

        let config = config.with_align_items(ItemAlignment::Center);
        assert!(!config.fills_cell_height(0));
    }

    #[test]
    fn test_default_matches_component_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.column_count(), 1);
        assert_eq!(config.gap, Gap::uniform(4.0));
        assert_eq!(config.justify_items, ItemAlignment::Stretch);
        assert_eq!(config.align_items, ItemAlignment::Stretch);
    }
}
