// src/hemisphere.rs
use std::fmt;
use std::str::FromStr;

use crate::error::ConvertError;

/// Grid origin and pixel size, GDAL ordering:
/// x origin, x pixel size, row rotation, y origin, column rotation, y pixel size.
pub type GeoTransform = [f64; 6];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
}

/// Fixed per-hemisphere grid geometry and projection metadata.
///
/// One instance exists per hemisphere; both are compile-time constants and
/// never derived at runtime.
#[derive(Debug, Clone, Copy)]
pub struct HemisphereProfile {
    pub hemisphere: Hemisphere,
    /// Grid width in 25 km cells
    pub columns: usize,
    /// Grid height in 25 km cells
    pub rows: usize,
    /// Lowercase file code, `n` or `s`
    pub code: char,
    pub name: &'static str,
    pub epsg: u32,
    pub crs_long_name: &'static str,
    pub longitude_of_origin: f64,
    pub latitude_of_projection_origin: f64,
    pub latitude_of_standard_parallel: f64,
    pub false_easting: f64,
    pub false_northing: f64,
    /// Hughes 1980 ellipsoid
    pub semi_major_axis: f64,
    pub inverse_flattening: f64,
    pub geo_transform: GeoTransform,
    pub geospatial_bounds: &'static str,
    pub geospatial_bounds_crs: &'static str,
    pub geospatial_lat_min: f64,
    pub geospatial_lat_max: f64,
}

static NORTH: HemisphereProfile = HemisphereProfile {
    hemisphere: Hemisphere::North,
    columns: 304,
    rows: 448,
    code: 'n',
    name: "Northern Hemisphere",
    epsg: 3411,
    crs_long_name: "NSIDC Sea Ice Polar Stereographic North",
    longitude_of_origin: -45.0,
    latitude_of_projection_origin: 90.0,
    latitude_of_standard_parallel: 70.0,
    false_easting: 0.0,
    false_northing: 0.0,
    semi_major_axis: 6_378_273.0,
    inverse_flattening: 298.279411123064,
    geo_transform: [-3_850_000.0, 25_000.0, 0.0, 5_850_000.0, 0.0, -25_000.0],
    geospatial_bounds: "POLYGON ((-3850000 5850000, 3750000 5850000, \
                        3750000 -5350000, -3850000 -5350000, -3850000 5850000))",
    geospatial_bounds_crs: "EPSG:3411",
    geospatial_lat_min: 30.980564,
    geospatial_lat_max: 90.0,
};

static SOUTH: HemisphereProfile = HemisphereProfile {
    hemisphere: Hemisphere::South,
    columns: 316,
    rows: 332,
    code: 's',
    name: "Southern Hemisphere",
    epsg: 3412,
    crs_long_name: "NSIDC Sea Ice Polar Stereographic South",
    longitude_of_origin: 0.0,
    latitude_of_projection_origin: -90.0,
    latitude_of_standard_parallel: -70.0,
    false_easting: 0.0,
    false_northing: 0.0,
    semi_major_axis: 6_378_273.0,
    inverse_flattening: 298.279411123064,
    geo_transform: [-3_950_000.0, 25_000.0, 0.0, 4_350_000.0, 0.0, -25_000.0],
    geospatial_bounds: "POLYGON ((-3950000 4350000, 3950000 4350000, \
                        3950000 -3950000, -3950000 -3950000, -3950000 4350000))",
    geospatial_bounds_crs: "EPSG:3412",
    geospatial_lat_min: -90.0,
    geospatial_lat_max: -39.23089,
};

impl Hemisphere {
    pub const ALL: [Hemisphere; 2] = [Hemisphere::North, Hemisphere::South];

    /// Resolve the fixed profile for this hemisphere.
    pub fn profile(self) -> &'static HemisphereProfile {
        match self {
            Hemisphere::North => &NORTH,
            Hemisphere::South => &SOUTH,
        }
    }
}

impl FromStr for Hemisphere {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "north" | "n" => Ok(Hemisphere::North),
            "south" | "s" => Ok(Hemisphere::South),
            _ => Err(ConvertError::InvalidHemisphere(s.to_string())),
        }
    }
}

impl fmt::Display for Hemisphere {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Hemisphere::North => f.write_str("north"),
            Hemisphere::South => f.write_str("south"),
        }
    }
}
