// src/pipeline.rs
use std::fmt::Write as _;

use chrono::Utc;
use tracing::debug;

use crate::config::Config;
use crate::crs::{self, CrsDescriptor};
use crate::date::DateSpec;
use crate::error::Result;
use crate::hemisphere::{Hemisphere, HemisphereProfile};
use crate::io::reader::{self, BinaryGrid};
use crate::io::NcgenCompiler;
use crate::paths::{self, OutputRecord, PRODUCT_VERSION};
use crate::template::{render, RenderContext, Value};

/// Run one hemisphere/date conversion end to end:
/// locate and decode the binary grid, derive CRS metadata, render the CDL,
/// and compile the NetCDF into its date-partitioned destination.
///
/// Each step must finish before the next starts; in particular the grid is
/// size-validated before any CDL is rendered, so the compiled payload always
/// agrees with the declared dimensions. A failure aborts only this pair.
pub fn convert(
    config: &Config,
    template: &str,
    date: DateSpec,
    hemisphere: Hemisphere,
    compiler: &NcgenCompiler,
) -> Result<OutputRecord> {
    let profile = hemisphere.profile();

    let binary_path = reader::find_binary_file(&config.input_dir, date, hemisphere)?;
    debug!(input = %binary_path.display(), "decoding binary grid");
    let mut grid = BinaryGrid::decode(&binary_path, profile.rows, profile.columns)?;

    if hemisphere == Hemisphere::North {
        reader::apply_pole_hole_mask(&mut grid);
    }

    let crs = crs::derive(profile.epsg, profile.geo_transform)?;

    let stamp = Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();
    let context = build_context(
        profile,
        &crs,
        date,
        &stamp,
        &stamp,
        &config.software_repository,
    );

    debug!("rendering CDL");
    let cdl = render(template, &context)?;

    let record = paths::build_output_record(&config.output_dir, date, hemisphere);
    debug!(output = %record.path().display(), "compiling NetCDF");
    compiler.compile(&cdl, &grid, &record.path())?;

    Ok(record)
}

/// Merge hemisphere profile, CRS authority output, date forms, and process
/// metadata into the flat placeholder map the template consumes.
///
/// Which fields are hemisphere-specific versus constant is decided here, not
/// by the renderer.
pub fn build_context(
    profile: &HemisphereProfile,
    crs: &CrsDescriptor,
    date: DateSpec,
    date_created: &str,
    date_modified: &str,
    software_repository: &str,
) -> RenderContext {
    let mut context = RenderContext::new();

    // Grid dimensions
    context.set("xdim", Value::Int(profile.columns as i64));
    context.set("ydim", Value::Int(profile.rows as i64));

    // Projection numbers and CRS authority output
    context.set(
        "crs_long_name",
        Value::Text(profile.crs_long_name.to_string()),
    );
    context.set(
        "longitude_of_origin",
        Value::Float(profile.longitude_of_origin),
    );
    context.set(
        "latitude_of_projection_origin",
        Value::Float(profile.latitude_of_projection_origin),
    );
    context.set(
        "latitude_of_standard_parallel",
        Value::Float(profile.latitude_of_standard_parallel),
    );
    context.set("false_easting", Value::Float(profile.false_easting));
    context.set("false_northing", Value::Float(profile.false_northing));
    context.set("semi_major_axis", Value::Float(profile.semi_major_axis));
    context.set(
        "inverse_flattening",
        Value::Float(profile.inverse_flattening),
    );
    context.set("geo_transform", Value::Text(crs.geo_transform_text()));
    context.set("crs_wkt", Value::Text(crs.wkt.clone()));

    // Geospatial extent
    context.set(
        "geospatial_bounds",
        Value::Text(profile.geospatial_bounds.to_string()),
    );
    context.set(
        "geospatial_bounds_crs",
        Value::Text(profile.geospatial_bounds_crs.to_string()),
    );
    context.set(
        "geospatial_lat_min",
        Value::Float(profile.geospatial_lat_min),
    );
    context.set(
        "geospatial_lat_max",
        Value::Float(profile.geospatial_lat_max),
    );

    // Descriptive strings
    context.set(
        "title",
        Value::Text(format!(
            "Near-Real-Time AMSR2 Daily 25 km Polar Gridded Sea Ice Concentration, {}",
            profile.name
        )),
    );

    // Time coverage and provenance stamps
    context.set(
        "time_coverage_start",
        Value::Text(date.coverage_start()),
    );
    context.set("time_coverage_end", Value::Text(date.coverage_end()));
    context.set("date_created", Value::Text(date_created.to_string()));
    context.set("date_modified", Value::Text(date_modified.to_string()));
    context.set(
        "software_version_id",
        Value::Text(PRODUCT_VERSION.to_string()),
    );
    context.set(
        "software_repository",
        Value::Text(software_repository.to_string()),
    );

    // Coordinate data
    context.set("time_index", Value::Int(date.days_since_epoch()));
    context.set(
        "x_values",
        Value::Raw(coordinate_values(
            crs.geo_transform[0],
            crs.geo_transform[1],
            profile.columns,
        )),
    );
    context.set(
        "y_values",
        Value::Raw(coordinate_values(
            crs.geo_transform[3],
            crs.geo_transform[5],
            profile.rows,
        )),
    );

    context
}

/// Cell-center coordinates along one axis: origin + (i + 0.5) * step.
fn coordinate_values(origin: f64, step: f64, count: usize) -> String {
    let mut out = String::with_capacity(count * 10);
    for i in 0..count {
        if i > 0 {
            if i % 10 == 0 {
                out.push_str(",\n  ");
            } else {
                out.push_str(", ");
            }
        }
        let center = origin + (i as f64 + 0.5) * step;
        if center.fract() == 0.0 {
            let _ = write!(out, "{}", center as i64);
        } else {
            let _ = write!(out, "{center}");
        }
    }
    out
}
