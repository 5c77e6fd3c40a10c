use anyhow::{Context, Result};
use odograph_codec::Coordinate;
use std::path::{Path, PathBuf};

/// Load a coordinate from a JSON file path or an inline JSON string.
///
/// Anything that names an existing file (or ends in `.json`) is read from
/// disk; otherwise the argument itself is parsed as JSON. The loaded
/// coordinate is validated before it is handed to the codec.
pub fn load_coordinate(source: &str) -> Result<Coordinate> {
    let path = Path::new(source);
    let text = if path.exists() || source.ends_with(".json") {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read coordinate file {}", path.display()))?
    } else {
        source.to_string()
    };

    let coordinate: Coordinate =
        serde_json::from_str(&text).context("Failed to parse coordinate JSON")?;
    coordinate
        .validate()
        .map_err(|e| anyhow::anyhow!("Invalid coordinate: {e}"))?;
    Ok(coordinate)
}

/// Write a coordinate as pretty JSON.
pub fn save_coordinate(coordinate: &Coordinate, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(coordinate).context("Failed to serialize coordinate")?;
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}

/// Default coordinate path for an input file: `<file>.coord.json`.
pub fn coordinate_path(input: &Path) -> PathBuf {
    let mut name = input
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".coord.json");
    input.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_coordinate_inline_json() {
        let coordinate = load_coordinate(
            r#"{"start_mask":50000,"end_mask":50010,"prev_mask":50000,"end_d":10,"length_bytes":1}"#,
        )
        .unwrap();
        assert_eq!(coordinate.end_mask, 50_010);
    }

    #[test]
    fn test_load_coordinate_rejects_invalid_fields() {
        let result = load_coordinate(
            r#"{"start_mask":50000,"end_mask":50010,"prev_mask":50000,"end_d":99,"length_bytes":1}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_coordinate_path_appends_suffix() {
        let path = coordinate_path(Path::new("/tmp/data.bin"));
        assert_eq!(path, Path::new("/tmp/data.bin.coord.json"));
    }
}
