//! Loading point sets for a run.
//!
//! Text input holds one point per line, written `x,y` or `x y`. Blank
//! lines and lines starting with `#` are skipped.

use crate::error::GaError;
use crate::ga::Coordinate;
use std::fs;
use std::path::Path;

/// Parses a point list.
pub fn parse_points(text: &str) -> Result<Vec<Coordinate>, GaError> {
    let mut points = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|f| !f.is_empty())
            .collect();
        if fields.len() != 2 {
            return Err(GaError::Parse {
                line: index + 1,
                message: format!("expected 2 fields, found {}", fields.len()),
            });
        }
        let x = parse_field(fields[0], index + 1)?;
        let y = parse_field(fields[1], index + 1)?;
        points.push(Coordinate::new(x, y));
    }
    Ok(points)
}

/// Reads and parses a point file.
pub fn read_points(path: &Path) -> Result<Vec<Coordinate>, GaError> {
    let text = fs::read_to_string(path)?;
    parse_points(&text)
}

/// Centres of a `rows` x `columns` grid of `tile_width` x `tile_height`
/// tiles, row by row.
pub fn grid_points(rows: usize, columns: usize, tile_width: f64, tile_height: f64) -> Vec<Coordinate> {
    (0..rows)
        .flat_map(|row| {
            (0..columns).map(move |column| {
                Coordinate::new(
                    (column as f64 + 0.5) * tile_width,
                    (row as f64 + 0.5) * tile_height,
                )
            })
        })
        .collect()
}

fn parse_field(field: &str, line: usize) -> Result<f64, GaError> {
    field.parse::<f64>().map_err(|err| GaError::Parse {
        line,
        message: format!("{field:?}: {err}"),
    })
}
