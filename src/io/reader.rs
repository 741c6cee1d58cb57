// src/io/reader.rs
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::date::DateSpec;
use crate::error::{ConvertError, Result};
use crate::hemisphere::Hemisphere;
use crate::paths;

/// Sentinel stamped over the unobserved cells around the north pole.
pub const POLE_HOLE: u8 = 251;

/// Raw packed concentration grid, one byte per 25 km cell.
///
/// Bytes are carried through exactly as read; sentinel codes and the
/// scale/offset convention are interpreted only by the attributes declared on
/// the packed NetCDF variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryGrid {
    rows: usize,
    columns: usize,
    data: Vec<u8>,
}

impl BinaryGrid {
    /// Read `path` as a flat grid of exactly `rows * columns` bytes.
    ///
    /// The length check is a hard integrity gate: a truncated or oversized
    /// file would otherwise surface only as a garbled NetCDF payload.
    pub fn decode(path: &Path, rows: usize, columns: usize) -> Result<Self> {
        if !path.is_file() {
            return Err(ConvertError::MissingInputFile {
                filename: path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string()),
                search_dir: path.parent().unwrap_or(Path::new(".")).to_path_buf(),
            });
        }

        let expected = (rows * columns) as u64;
        let actual = fs::metadata(path)?.len();
        if actual != expected {
            return Err(ConvertError::GridSizeMismatch {
                path: path.to_path_buf(),
                actual,
                expected,
                rows,
                columns,
            });
        }

        let data = fs::read(path)?;
        Ok(BinaryGrid {
            rows,
            columns,
            data,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn get(&self, row: usize, column: usize) -> u8 {
        self.data[row * self.columns + column]
    }

    pub fn set(&mut self, row: usize, column: usize, value: u8) {
        self.data[row * self.columns + column] = value;
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

/// Stamp the fixed pole-hole kernel into a northern hemisphere grid.
///
/// The AMSR2 swath never observes a small disc around the pole; those cells
/// arrive as arbitrary bytes and are overwritten with the 251 sentinel. The
/// kernel is specific to the 304x448 north grid and must not be applied to
/// the south.
pub fn apply_pole_hole_mask(grid: &mut BinaryGrid) {
    debug_assert_eq!((grid.columns(), grid.rows()), (304, 448));

    for column in 150..158 {
        grid.set(229, column, POLE_HOLE);
        grid.set(238, column, POLE_HOLE);
    }
    for row in 230..238 {
        for column in 149..159 {
            grid.set(row, column, POLE_HOLE);
        }
    }
}

/// Locate `nt_YYYYMMDD_as2_nrt_{n|s}.bin` anywhere under `input_dir`.
///
/// The staging tree nests binaries in per-delivery subdirectories, so the
/// search walks recursively rather than probing a single path.
pub fn find_binary_file(
    input_dir: &Path,
    date: DateSpec,
    hemisphere: Hemisphere,
) -> Result<PathBuf> {
    let filename = paths::input_filename(date, hemisphere);

    for entry in WalkDir::new(input_dir).into_iter().filter_map(|e| e.ok()) {
        if entry.file_type().is_file() && entry.file_name().to_string_lossy() == filename {
            return Ok(entry.into_path());
        }
    }

    Err(ConvertError::MissingInputFile {
        filename,
        search_dir: input_dir.to_path_buf(),
    })
}
