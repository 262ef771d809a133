//! Study-area boundary loading and reprojection.
//!
//! The boundary arrives as a shapefile in whatever CRS the GIS team
//! exported it in; everything downstream is WGS84 degrees, so every
//! coordinate is run through a proj transform on the way in. Attribute
//! columns are dropped wholesale — only geometry survives.

use std::path::Path;

use geo::MapCoords;
use geo_types::{Coord, Geometry, MultiLineString, MultiPolygon, Point};
use proj4rs::proj::Proj;

use surveymap_core::{validate_wgs84, BoundarySet};

use crate::{IngestError, Result};

/// Proj string for geographic WGS84 degrees, the pipeline's target CRS.
pub const WGS84_PROJ: &str = "+proj=longlat +datum=WGS84 +no_defs";

/// Coordinate transform from a source projection into WGS84 degrees.
///
/// proj works in radians on the latlong side, so degrees are converted at
/// both boundaries of the transform.
pub struct Reprojector {
    source: Proj,
    target: Proj,
    identity: bool,
}

impl Reprojector {
    /// Build a transform from `source_proj` (a proj string) to WGS84.
    ///
    /// An empty string or the WGS84 string itself yields the identity
    /// transform, for boundary files that are already geographic.
    pub fn to_wgs84(source_proj: &str) -> Result<Self> {
        let trimmed = source_proj.trim();
        let identity = trimmed.is_empty() || trimmed == WGS84_PROJ;
        let source = if identity { WGS84_PROJ } else { trimmed };
        Ok(Self {
            source: parse_proj(source)?,
            target: parse_proj(WGS84_PROJ)?,
            identity,
        })
    }

    pub fn is_identity(&self) -> bool {
        self.identity
    }

    /// Transform a single coordinate pair into WGS84 degrees.
    pub fn coord_to_wgs84(&self, x: f64, y: f64) -> Result<(f64, f64)> {
        if self.identity {
            return Ok((x, y));
        }
        let (mut px, mut py) = (x, y);
        if self.source.is_latlong() {
            px = px.to_radians();
            py = py.to_radians();
        }
        let mut point = (px, py, 0.0_f64);
        proj4rs::transform::transform(&self.source, &self.target, &mut point)
            .map_err(|e| IngestError::Projection(e.to_string()))?;
        // Target is latlong, so the output comes back in radians.
        Ok((point.0.to_degrees(), point.1.to_degrees()))
    }

    /// Transform every coordinate of a geometry.
    pub fn geometry_to_wgs84(&self, geometry: &Geometry<f64>) -> Result<Geometry<f64>> {
        geometry.try_map_coords(|coord| {
            let (x, y) = self.coord_to_wgs84(coord.x, coord.y)?;
            Ok(Coord { x, y })
        })
    }
}

fn parse_proj(definition: &str) -> Result<Proj> {
    Proj::from_proj_string(definition).map_err(|e| IngestError::Projection(e.to_string()))
}

/// Load the boundary shapefile and reproject it to WGS84.
///
/// Every reprojected geometry is range-checked; coordinates outside the
/// WGS84 valid ranges mean the source projection flag was wrong, which is
/// fatal like every other input error here.
pub fn load_boundary(path: &Path, source_proj: &str) -> Result<BoundarySet> {
    if !path.is_file() {
        return Err(IngestError::MissingInput(path.to_path_buf()));
    }

    let reprojector = Reprojector::to_wgs84(source_proj)?;
    let shapes = shapefile::read_shapes(path)?;

    let mut geometries = Vec::with_capacity(shapes.len());
    for shape in shapes {
        let geometry = shape_to_geometry(shape)?;
        let geometry = reprojector.geometry_to_wgs84(&geometry)?;
        validate_wgs84(&geometry)?;
        geometries.push(geometry);
    }

    tracing::debug!(
        path = %path.display(),
        features = geometries.len(),
        reprojected = !reprojector.is_identity(),
        "loaded boundary shapefile"
    );
    Ok(BoundarySet::new(geometries))
}

fn shape_to_geometry(shape: shapefile::Shape) -> Result<Geometry<f64>> {
    match shape {
        shapefile::Shape::Polygon(polygon) => MultiPolygon::<f64>::try_from(polygon)
            .map(Geometry::MultiPolygon)
            .map_err(|e| IngestError::UnsupportedShape(format!("{e:?}"))),
        shapefile::Shape::Polyline(polyline) => MultiLineString::<f64>::try_from(polyline)
            .map(Geometry::MultiLineString)
            .map_err(|e| IngestError::UnsupportedShape(format!("{e:?}"))),
        shapefile::Shape::Point(point) => Point::<f64>::try_from(point)
            .map(Geometry::Point)
            .map_err(|e| IngestError::UnsupportedShape(format!("{e:?}"))),
        other => Err(IngestError::UnsupportedShape(other.shapetype().to_string())),
    }
}
