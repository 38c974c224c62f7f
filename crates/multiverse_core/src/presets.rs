//! Catalog of named starting positions, loaded from TOML.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::BoardState;
use crate::error::SetupError;
use crate::multiverse::Multiverse;
use crate::notation::parse_boards;

const BUILTIN: &str = include_str!("../presets.toml");

/// A named starting position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    /// One board per entry of `timelines`, separated by whitespace
    pub position: String,
    /// Index of the timeline each board starts on
    #[serde(default = "default_timelines")]
    pub timelines: Vec<i32>,
    pub width: usize,
    pub height: usize,
}

fn default_timelines() -> Vec<i32> {
    vec![0]
}

impl Preset {
    pub fn boards(&self) -> Result<Vec<BoardState>, SetupError> {
        let boards = parse_boards(&self.position, self.width, self.height)?;
        if boards.len() != self.timelines.len() {
            return Err(SetupError::TimelineCount {
                boards: boards.len(),
                timelines: self.timelines.len(),
            });
        }
        Ok(boards)
    }

    /// Fresh game on this position.
    pub fn build(&self) -> Result<Multiverse, SetupError> {
        let boards = self.boards()?;
        let initial = self.timelines.iter().copied().zip(boards);
        Ok(Multiverse::new(self.width, self.height, initial)?)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PresetCatalog {
    #[serde(rename = "preset", default)]
    presets: Vec<Preset>,
}

impl PresetCatalog {
    /// The positions shipped with the engine.
    pub fn builtin() -> Result<Self, SetupError> {
        Self::from_toml_str(BUILTIN)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, SetupError> {
        let catalog: PresetCatalog = toml::from_str(text)?;
        let mut seen = HashSet::new();
        for preset in &catalog.presets {
            if !seen.insert(preset.name.to_ascii_uppercase()) {
                return Err(SetupError::DuplicatePreset(preset.name.clone()));
            }
        }
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self, SetupError> {
        let text = std::fs::read_to_string(path).map_err(|source| SetupError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Case-insensitive lookup by name.
    pub fn get(&self, name: &str) -> Result<&Preset, SetupError> {
        self.presets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .ok_or_else(|| SetupError::PresetNotFound(name.to_string()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Preset> {
        self.presets.iter()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Color, Piece, PieceKind};

    #[test]
    fn test_builtin_catalog_builds_every_preset() {
        let catalog = PresetCatalog::builtin().unwrap();
        assert!(!catalog.is_empty());
        for preset in catalog.iter() {
            let mv = preset
                .build()
                .unwrap_or_else(|e| panic!("{} failed to build: {e}", preset.name));
            assert_eq!(mv.timeline_count(), preset.timelines.len());
        }
    }

    #[test]
    fn test_builtin_positions_print_back() {
        use crate::notation::{board_to_string, parse_board};

        for preset in PresetCatalog::builtin().unwrap().iter() {
            for board in preset.boards().unwrap() {
                let text = board_to_string(&board);
                assert_eq!(parse_board(&text, preset.width, preset.height).unwrap(), board);
            }
        }
    }

    #[test]
    fn test_lookup_ignores_case() {
        let catalog = PresetCatalog::builtin().unwrap();
        let preset = catalog.get("misc - timeline battlegrounds").unwrap();
        assert_eq!(preset.timelines, vec![-1, 0, 1]);

        let mv = preset.build().unwrap();
        assert_eq!(mv.lowest_timeline(), -1);
        assert_eq!(mv.highest_timeline(), 1);
        assert_eq!(
            mv.piece_at(-1, 1, 2, 4, Color::White).unwrap(),
            Some(Piece::black(PieceKind::King))
        );

        assert!(matches!(
            catalog.get("no such preset"),
            Err(SetupError::PresetNotFound(_))
        ));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let text = r#"
            [[preset]]
            name = "A"
            position = "1"
            width = 1
            height = 1

            [[preset]]
            name = "a"
            position = "1"
            width = 1
            height = 1
        "#;
        assert!(matches!(
            PresetCatalog::from_toml_str(text),
            Err(SetupError::DuplicatePreset(_))
        ));
    }

    #[test]
    fn test_board_count_must_match_timelines() {
        let text = r#"
            [[preset]]
            name = "too many ranks"
            position = "k/K"
            width = 1
            height = 1
        "#;
        let catalog = PresetCatalog::from_toml_str(text).unwrap();
        assert!(matches!(
            catalog.get("too many ranks").unwrap().build(),
            Err(SetupError::RankCount { .. })
        ));

        let text = r#"
            [[preset]]
            name = "mismatch"
            position = "k K"
            timelines = [0, 1, 2]
            width = 1
            height = 1
        "#;
        let catalog = PresetCatalog::from_toml_str(text).unwrap();
        assert!(matches!(
            catalog.get("mismatch").unwrap().build(),
            Err(SetupError::TimelineCount {
                boards: 2,
                timelines: 3
            })
        ));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            PresetCatalog::from_toml_str("[[preset]]\nname = 3"),
            Err(SetupError::Catalog(_))
        ));
    }
}
