// src/paths.rs
use std::path::{Path, PathBuf};

use crate::date::DateSpec;
use crate::hemisphere::Hemisphere;

/// Product version carried in output filenames and global attributes.
pub const PRODUCT_VERSION: &str = "v2.0";

/// Destination of one hemisphere/date conversion.
///
/// Computed once per conversion and used to write exactly one file. Path
/// composition is pure; creating `directory` is the caller's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub directory: PathBuf,
    pub filename: String,
}

impl OutputRecord {
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Name of the binary input for one day: `nt_YYYYMMDD_as2_nrt_{n|s}.bin`.
pub fn input_filename(date: DateSpec, hemisphere: Hemisphere) -> String {
    format!(
        "nt_{}_as2_nrt_{}.bin",
        date.compact(),
        hemisphere.profile().code
    )
}

/// Compose `output_dir/YYYY.MM.DD/NSIDC0803_SIC_{N|S}25km_YYYYMMDD_v2.0.nc`.
pub fn build_output_record(
    output_dir: &Path,
    date: DateSpec,
    hemisphere: Hemisphere,
) -> OutputRecord {
    let filename = format!(
        "NSIDC0803_SIC_{}25km_{}_{}.nc",
        hemisphere.profile().code.to_ascii_uppercase(),
        date.compact(),
        PRODUCT_VERSION,
    );

    OutputRecord {
        directory: output_dir.join(date.dotted()),
        filename,
    }
}
