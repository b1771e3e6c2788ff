//! Loading board themes from YAML.

use std::path::Path;

use gridventure_core::error::DomainError;
use tracing::info;

use crate::domain::board::Board;
use crate::domain::theme::BoardTheme;

/// A theme that passed validation, with its board already built.
#[derive(Debug, Clone)]
pub struct LoadedTheme {
    /// The validated board.
    pub board: Board,
    /// The theme as authored.
    pub theme: BoardTheme,
}

/// Validates a theme and builds its board.
///
/// # Errors
///
/// Returns `DomainError::InvalidBoard` if the tables or pools are invalid.
pub fn build_theme(theme: BoardTheme) -> Result<LoadedTheme, DomainError> {
    theme.messages.validate()?;
    let board = Board::new(theme.board.clone())?;
    Ok(LoadedTheme { board, theme })
}

/// Parses and validates a YAML theme.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the YAML does not parse and
/// `DomainError::InvalidBoard` if it parses but fails validation.
pub fn load_theme_from_str(yaml: &str) -> Result<LoadedTheme, DomainError> {
    let theme: BoardTheme = serde_yaml::from_str(yaml)
        .map_err(|e| DomainError::Infrastructure(format!("theme parsing failed: {e}")))?;
    build_theme(theme)
}

/// Reads, parses and validates a YAML theme file.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if the file cannot be read or
/// parsed and `DomainError::InvalidBoard` if it fails validation.
pub fn load_theme_from_path(path: &Path) -> Result<LoadedTheme, DomainError> {
    let yaml = std::fs::read_to_string(path).map_err(|e| {
        DomainError::Infrastructure(format!("cannot read theme {}: {e}", path.display()))
    })?;
    let loaded = load_theme_from_str(&yaml)?;
    info!(
        path = %path.display(),
        cell_count = loaded.board.cell_count(),
        "board theme loaded"
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::TransitionKind;

    const SMALL_THEME: &str = r#"
board:
  cell_count: 20
  columns: 5
  boosts:
    3: 12
  setbacks:
    17: 6
messages:
  boost: ["up you go"]
  setback: ["down you go"]
  win: "done"
"#;

    #[test]
    fn test_load_theme_from_str_builds_board() {
        let loaded = load_theme_from_str(SMALL_THEME).unwrap();

        assert_eq!(loaded.board.cell_count(), 20);
        assert_eq!(loaded.board.columns(), 5);
        assert_eq!(
            loaded.board.classify(3).unwrap().map(|t| t.kind),
            Some(TransitionKind::Boost)
        );
        assert_eq!(loaded.theme.messages.win, "done");
    }

    #[test]
    fn test_missing_sections_fall_back_to_standard() {
        let loaded = load_theme_from_str("board:\n  boosts: { 4: 14 }\n").unwrap();

        assert_eq!(loaded.board.cell_count(), 100);
        assert!(loaded.board.config().setbacks.is_empty());
        assert_eq!(loaded.theme.messages.boost.len(), 7);
    }

    #[test]
    fn test_invalid_table_fails_fast() {
        let result = load_theme_from_str("board:\n  setbacks: { 100: 50 }\n");
        match result {
            Err(DomainError::InvalidBoard(msg)) => {
                assert_eq!(msg, "setback source 100 sits on a board edge");
            }
            other => panic!("expected InvalidBoard, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_pool_fails_fast() {
        let yaml = "messages:\n  boost: []\n  setback: [\"x\"]\n  win: \"y\"\n";
        assert!(matches!(
            load_theme_from_str(yaml),
            Err(DomainError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_blank_message_entry_fails_fast() {
        let yaml = "messages:\n  boost: [\"x\", \"\"]\n  setback: [\"x\"]\n  win: \"y\"\n";
        assert!(matches!(
            load_theme_from_str(yaml),
            Err(DomainError::InvalidBoard(_))
        ));
    }

    #[test]
    fn test_oversized_board_fails_before_allocating() {
        let result = load_theme_from_str("board:\n  cell_count: 4000000000\n  columns: 1\n");
        assert!(matches!(result, Err(DomainError::InvalidBoard(_))));
    }

    #[test]
    fn test_malformed_yaml_is_an_infrastructure_error() {
        assert!(matches!(
            load_theme_from_str("board: [not, a, map"),
            Err(DomainError::Infrastructure(_))
        ));
    }

    #[test]
    fn test_missing_file_is_an_infrastructure_error() {
        let result = load_theme_from_path(Path::new("/definitely/not/here.yaml"));
        assert!(matches!(result, Err(DomainError::Infrastructure(_))));
    }

    #[test]
    fn test_default_theme_round_trips_through_yaml() {
        let yaml = serde_yaml::to_string(&BoardTheme::default()).unwrap();
        let loaded = load_theme_from_str(&yaml).unwrap();
        assert_eq!(loaded.theme, BoardTheme::default());
    }
}
