use crate::types::{Coordinate, Geometry, LineString, Polygon};

/// The minimal axis-aligned rectangle covering every coordinate of a geometry.
///
/// Bounds are always 2-dimensional; z components never contribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Computes the bounds of a geometry, recursing into collections.
    ///
    /// Returns `None` when the geometry carries no coordinates anywhere in its
    /// subtree, since there is no meaningful box for it.
    pub fn of(geometry: &Geometry) -> Option<Bounds> {
        let mut bounds = None;
        extend_geometry(&mut bounds, geometry);
        bounds
    }

    fn extend(&mut self, coordinate: &Coordinate) {
        self.min_x = self.min_x.min(coordinate.x);
        self.min_y = self.min_y.min(coordinate.y);
        self.max_x = self.max_x.max(coordinate.x);
        self.max_y = self.max_y.max(coordinate.y);
    }
}

fn extend_coordinate(bounds: &mut Option<Bounds>, coordinate: &Coordinate) {
    match bounds {
        Some(bounds) => bounds.extend(coordinate),
        None => {
            *bounds = Some(Bounds {
                min_x: coordinate.x,
                min_y: coordinate.y,
                max_x: coordinate.x,
                max_y: coordinate.y,
            });
        }
    }
}

fn extend_line(bounds: &mut Option<Bounds>, line: &LineString) {
    for coordinate in &line.0 {
        extend_coordinate(bounds, coordinate);
    }
}

fn extend_polygon(bounds: &mut Option<Bounds>, polygon: &Polygon) {
    extend_line(bounds, &polygon.exterior);
    for ring in &polygon.interiors {
        extend_line(bounds, ring);
    }
}

fn extend_geometry(bounds: &mut Option<Bounds>, geometry: &Geometry) {
    match geometry {
        Geometry::Point(point) => {
            if let Some(coordinate) = &point.0 {
                extend_coordinate(bounds, coordinate);
            }
        }
        Geometry::LineString(line) => extend_line(bounds, line),
        Geometry::Polygon(polygon) => extend_polygon(bounds, polygon),
        Geometry::MultiPoint(multi) => {
            for point in &multi.0 {
                if let Some(coordinate) = &point.0 {
                    extend_coordinate(bounds, coordinate);
                }
            }
        }
        Geometry::MultiLineString(multi) => {
            for line in &multi.0 {
                extend_line(bounds, line);
            }
        }
        Geometry::MultiPolygon(multi) => {
            for polygon in &multi.0 {
                extend_polygon(bounds, polygon);
            }
        }
        Geometry::GeometryCollection(collection) => {
            for child in &collection.0 {
                extend_geometry(bounds, child);
            }
        }
    }
}
