use geo_types::Geometry;

/// Study-area boundary polygons.
///
/// Only geometry survives preprocessing; the administrative attribute
/// columns of the source shapefile are dropped. Features are identified by
/// position alone.
#[derive(Debug, Clone, Default)]
pub struct BoundarySet {
    geometries: Vec<Geometry<f64>>,
}

impl BoundarySet {
    #[must_use]
    pub fn new(geometries: Vec<Geometry<f64>>) -> Self {
        Self { geometries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Geometry<f64>> {
        self.geometries.iter()
    }
}

impl From<Vec<Geometry<f64>>> for BoundarySet {
    fn from(geometries: Vec<Geometry<f64>>) -> Self {
        Self::new(geometries)
    }
}
