// src/io/ncgen.rs
use std::fmt::Write as _;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::error::{ConvertError, Result};
use crate::io::reader::BinaryGrid;

/// Values per line in the spliced data section
const VALUES_PER_LINE: usize = 16;

/// Adapter around the external `ncgen` NetCDF compiler.
///
/// Low-level NetCDF-4 encoding (chunking, attribute typing, packing) is the
/// compiler's problem, not ours; this adapter only stages a concrete CDL
/// document and reports the tool's diagnostics verbatim when it rejects one.
#[derive(Debug, Clone)]
pub struct NcgenCompiler {
    program: PathBuf,
}

impl Default for NcgenCompiler {
    fn default() -> Self {
        NcgenCompiler {
            program: PathBuf::from("ncgen"),
        }
    }
}

impl NcgenCompiler {
    /// Use a specific compiler binary instead of `ncgen` from PATH.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        NcgenCompiler {
            program: program.into(),
        }
    }

    /// Materialize `output` from the rendered CDL plus the grid payload.
    ///
    /// The payload is spliced into the document's data section, the result is
    /// written to `<output>.cdl`, and `ncgen -k nc4` compiles it in place.
    /// The transient CDL is removed on success and kept on failure so a
    /// rejected document can be inspected as-is.
    pub fn compile(&self, cdl: &str, grid: &BinaryGrid, output: &Path) -> Result<()> {
        let concrete = splice_payload(cdl, grid, output)?;

        let cdl_path = output.with_extension("cdl");
        fs::write(&cdl_path, concrete)?;

        if output.exists() {
            fs::remove_file(output)?;
        }

        debug!(program = %self.program.display(), cdl = %cdl_path.display(), "running ncgen");
        let run = Command::new(&self.program)
            .arg("-k")
            .arg("nc4")
            .arg("-o")
            .arg(output)
            .arg(&cdl_path)
            .output();

        match run {
            Err(e) if e.kind() == ErrorKind::NotFound => Err(ConvertError::Compile {
                output: output.to_path_buf(),
                stderr: format!("{} not found on PATH", self.program.display()),
            }),
            Err(e) => Err(ConvertError::Compile {
                output: output.to_path_buf(),
                stderr: format!("failed to spawn {}: {e}", self.program.display()),
            }),
            Ok(out) if !out.status.success() => Err(ConvertError::Compile {
                output: output.to_path_buf(),
                stderr: String::from_utf8_lossy(&out.stderr).into_owned(),
            }),
            Ok(_) => {
                fs::remove_file(&cdl_path)?;
                Ok(())
            }
        }
    }
}

/// Insert `ICECON = ...;` before the document's closing brace.
fn splice_payload(cdl: &str, grid: &BinaryGrid, output: &Path) -> Result<String> {
    let close = cdl.trim_end().len();
    let close = cdl[..close].rfind('}').ok_or_else(|| ConvertError::Compile {
        output: output.to_path_buf(),
        stderr: "rendered CDL has no closing brace".to_string(),
    })?;

    let mut concrete = String::with_capacity(cdl.len() + grid.as_bytes().len() * 5);
    concrete.push_str(&cdl[..close]);
    concrete.push_str("\n ICECON =\n");

    for (i, byte) in grid.as_bytes().iter().enumerate() {
        if i > 0 {
            if i % VALUES_PER_LINE == 0 {
                concrete.push_str(",\n  ");
            } else {
                concrete.push_str(", ");
            }
        } else {
            concrete.push_str("  ");
        }
        let _ = write!(concrete, "{byte}");
    }

    concrete.push_str(" ;\n");
    concrete.push_str(&cdl[close..]);
    Ok(concrete)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_of(rows: usize, columns: usize, fill: u8) -> BinaryGrid {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("grid.bin");
        fs::write(&path, vec![fill; rows * columns]).unwrap();
        BinaryGrid::decode(&path, rows, columns).unwrap()
    }

    #[test]
    fn payload_lands_before_closing_brace() {
        let grid = grid_of(2, 3, 7);
        let cdl = "netcdf t {\ndata:\n time = 0 ;\n}\n";
        let spliced = splice_payload(cdl, &grid, Path::new("t.nc")).unwrap();

        assert!(spliced.contains(" ICECON =\n  7, 7, 7, 7, 7, 7 ;"));
        assert!(spliced.trim_end().ends_with('}'));
        assert_eq!(spliced.matches('}').count(), 1);
    }

    #[test]
    fn braceless_document_is_rejected() {
        let grid = grid_of(1, 1, 0);
        let err = splice_payload("no cdl here", &grid, Path::new("t.nc")).unwrap_err();
        assert!(matches!(err, ConvertError::Compile { .. }));
    }
}
