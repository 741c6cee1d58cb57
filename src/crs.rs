// src/crs.rs
use gdal::spatial_ref::SpatialRef;

use crate::error::{ConvertError, Result};
use crate::hemisphere::GeoTransform;

/// Authoritative CRS description for one hemisphere grid.
#[derive(Debug, Clone)]
pub struct CrsDescriptor {
    /// Well-known text exported from the EPSG registry
    pub wkt: String,
    /// Grid extent of the owning profile; not an EPSG property
    pub geo_transform: GeoTransform,
}

/// Look up `epsg` in the projection library and pair the exported WKT with
/// the grid's geotransform.
///
/// The WKT is deliberately not hand-written: ellipsoid parameters and false
/// origin conventions must come from the registry, and the two NSIDC polar
/// stereographic codes (3411, 3412) carry the Hughes 1980 datum that generic
/// polar CRS text gets wrong.
pub fn derive(epsg: u32, geo_transform: GeoTransform) -> Result<CrsDescriptor> {
    let spatial_ref =
        SpatialRef::from_epsg(epsg).map_err(|source| ConvertError::CrsResolution { epsg, source })?;
    let wkt = spatial_ref
        .to_wkt()
        .map_err(|source| ConvertError::CrsResolution { epsg, source })?;

    Ok(CrsDescriptor { wkt, geo_transform })
}

impl CrsDescriptor {
    /// GeoTransform in the space-separated text form carried by the `crs`
    /// variable attribute, e.g. `-3850000 25000 0 5850000 0 -25000`.
    pub fn geo_transform_text(&self) -> String {
        self.geo_transform
            .iter()
            .map(|v| format_coefficient(*v))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn format_coefficient(v: f64) -> String {
    if v.fract() == 0.0 {
        format!("{}", v as i64)
    } else {
        format!("{v}")
    }
}
