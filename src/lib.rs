//! A library for writing geometry objects as GeoJSON values, according to the
//! GeoJSON format [specification](https://geojson.org/geojson-spec.html).
//!
//! * The `coordinates` member of a written object may be null if the geometry
//!   is empty.
//! * No `crs` member is written.
//! * The rounding precision and whether to add a `bbox` member are
//!   configurable on the writer.
//! * 2- and 3-dimensional coordinates are supported.
pub mod bounds;
mod geojson;
pub mod result;
pub mod types;

use crate::bounds::Bounds;
use crate::geojson::CoordsJson;
use crate::result::{Error, Result};
use crate::types::Geometry;
use serde_json::{Map, Value};

/// Writes [Geometry](crate::types::Geometry) values as GeoJSON objects.
///
/// The writer holds only its configuration, so a single writer can be reused
/// for any number of geometries. Configuration changes affect subsequent
/// [write](Self::write) calls only.
#[derive(Debug, Clone)]
pub struct GeoJsonWriter {
    decimal_places: u8,
    factor: f64,
    bbox: bool,
}

impl Default for GeoJsonWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl GeoJsonWriter {
    /// Creates a writer with a rounding precision of 0 decimal places and bbox
    /// emission disabled.
    ///
    /// The default precision rounds every coordinate to a whole number; there
    /// is no unrounded mode. Callers that want fractional coordinates must
    /// raise the precision with
    /// [set_rounding_precision](Self::set_rounding_precision).
    pub fn new() -> GeoJsonWriter {
        GeoJsonWriter {
            decimal_places: 0,
            factor: 1.0,
            bbox: false,
        }
    }

    /// Sets the number of decimal places coordinates are rounded to.
    ///
    /// A precision of 0 still rounds to the nearest whole number.
    pub fn set_rounding_precision(&mut self, decimal_places: u8) {
        self.decimal_places = decimal_places;
        self.factor = 10f64.powi(i32::from(decimal_places));
    }

    /// Sets whether written objects carry a `bbox` member.
    pub fn set_bbox(&mut self, bbox: bool) {
        self.bbox = bbox;
    }

    pub fn rounding_precision(&self) -> u8 {
        self.decimal_places
    }

    pub fn bbox(&self) -> bool {
        self.bbox
    }

    /// Writes a geometry as a GeoJSON object.
    ///
    /// The object carries the canonical `type` name of the geometry and its
    /// `coordinates` (or, for a collection, its `geometries`, with every
    /// member written recursively as a full object). An empty Point,
    /// LineString or Polygon gets a null `coordinates` member; an empty
    /// Multi\* geometry or collection gets an empty list.
    ///
    /// When bbox emission is enabled the object also carries a `bbox` member,
    /// except for geometries without any coordinates, which have no box to
    /// report.
    pub fn write(&self, geometry: &Geometry) -> Value {
        let (key, payload) = match geometry {
            Geometry::Point(point) => (
                "coordinates",
                match &point.0 {
                    Some(coordinate) => coordinate.coords_json(self),
                    None => Value::Null,
                },
            ),
            Geometry::LineString(line) => (
                "coordinates",
                if line.is_empty() {
                    Value::Null
                } else {
                    line.coords_json(self)
                },
            ),
            Geometry::Polygon(polygon) => (
                "coordinates",
                if polygon.is_empty() {
                    Value::Null
                } else {
                    polygon.coords_json(self)
                },
            ),
            Geometry::MultiPoint(multi) => ("coordinates", multi.coords_json(self)),
            Geometry::MultiLineString(multi) => ("coordinates", multi.coords_json(self)),
            Geometry::MultiPolygon(multi) => ("coordinates", multi.coords_json(self)),
            Geometry::GeometryCollection(collection) => (
                "geometries",
                Value::Array(
                    collection
                        .0
                        .iter()
                        .map(|child| self.write(child))
                        .collect(),
                ),
            ),
        };

        let mut object = Map::new();
        object.insert("type".to_owned(), Value::from(geometry.type_name()));
        object.insert(key.to_owned(), payload);
        if self.bbox {
            if let Some(bounds) = Bounds::of(geometry) {
                object.insert("bbox".to_owned(), self.bounds_json(&bounds));
            }
        }
        Value::Object(object)
    }

    /// Writes just the bounding box of a geometry as a
    /// `[min x, min y, max x, max y]` array, with each bound rounded to the
    /// configured precision.
    ///
    /// # Errors
    /// Returns [Error::EmptyGeometry] when the geometry carries no
    /// coordinates anywhere in its subtree.
    pub fn write_bbox(&self, geometry: &Geometry) -> Result<Value> {
        let bounds = Bounds::of(geometry).ok_or(Error::EmptyGeometry)?;
        Ok(self.bounds_json(&bounds))
    }

    pub(crate) fn round_number(&self, value: f64) -> f64 {
        (value * self.factor).round() / self.factor
    }

    fn bounds_json(&self, bounds: &Bounds) -> Value {
        Value::from(vec![
            self.round_number(bounds.min_x),
            self.round_number(bounds.min_y),
            self.round_number(bounds.max_x),
            self.round_number(bounds.max_y),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coordinate, GeometryCollection, LineString, Point, Polygon};
    use rstest::rstest;
    use serde_json::json;

    fn writer_with_precision(decimal_places: u8) -> GeoJsonWriter {
        let mut writer = GeoJsonWriter::new();
        writer.set_rounding_precision(decimal_places);
        writer
    }

    fn unit_square() -> Geometry {
        Geometry::from(Polygon::new(
            LineString::new(vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(4.0, 0.0),
                Coordinate::new(4.0, 4.0),
                Coordinate::new(0.0, 4.0),
                Coordinate::new(0.0, 0.0),
            ]),
            vec![],
        ))
    }

    #[rstest]
    #[case(0, 1.23456, 1.0)]
    #[case(2, 1.23456, 1.23)]
    #[case(2, 2.34567, 2.35)]
    #[case(3, 2.34567, 2.346)]
    #[case(0, 2.5, 3.0)]
    #[case(0, -2.5, -3.0)]
    fn round_number_cases(#[case] decimal_places: u8, #[case] value: f64, #[case] expected: f64) {
        let writer = writer_with_precision(decimal_places);
        assert_eq!(writer.round_number(value), expected);
    }

    #[rstest]
    #[case(0, 1.23456)]
    #[case(2, 1.23456)]
    #[case(5, -7.654321)]
    fn rounding_is_idempotent(#[case] decimal_places: u8, #[case] value: f64) {
        let writer = writer_with_precision(decimal_places);
        let once = writer.round_number(value);
        assert_eq!(writer.round_number(once), once);
    }

    #[test]
    fn defaults() {
        let writer = GeoJsonWriter::new();
        assert_eq!(writer.rounding_precision(), 0);
        assert!(!writer.bbox());
    }

    #[test]
    fn no_bbox_member_unless_enabled() {
        let writer = writer_with_precision(0);
        let object = writer.write(&unit_square());
        assert!(object.get("bbox").is_none());
    }

    #[test]
    fn polygon_bbox() {
        let mut writer = GeoJsonWriter::new();
        writer.set_bbox(true);

        let object = writer.write(&unit_square());
        assert_eq!(object["bbox"], json!([0.0, 0.0, 4.0, 4.0]));
    }

    #[test]
    fn bbox_is_rounded() {
        let mut writer = writer_with_precision(1);
        writer.set_bbox(true);
        let line = Geometry::from(LineString::new(vec![
            Coordinate::new(0.04, 0.06),
            Coordinate::new(2.64, 1.98),
        ]));

        let object = writer.write(&line);
        assert_eq!(object["bbox"], json!([0.0, 0.1, 2.6, 2.0]));
    }

    #[test]
    fn bbox_omitted_for_empty_geometry() {
        let mut writer = GeoJsonWriter::new();
        writer.set_bbox(true);

        let object = writer.write(&Geometry::from(Point::empty()));
        assert_eq!(object, json!({"type": "Point", "coordinates": null}));
    }

    #[test]
    fn collection_members_carry_their_own_bbox() {
        let mut writer = GeoJsonWriter::new();
        writer.set_bbox(true);
        let collection = Geometry::from(GeometryCollection::new(vec![Geometry::from(
            Point::new(Coordinate::new(1.0, 2.0)),
        )]));

        let object = writer.write(&collection);
        assert_eq!(object["bbox"], json!([1.0, 2.0, 1.0, 2.0]));
        assert_eq!(object["geometries"][0]["bbox"], json!([1.0, 2.0, 1.0, 2.0]));
    }

    #[test]
    fn write_bbox_alone() {
        let writer = writer_with_precision(0);
        let bbox = writer.write_bbox(&unit_square()).unwrap();
        assert_eq!(bbox, json!([0.0, 0.0, 4.0, 4.0]));
    }

    #[test]
    fn write_bbox_of_empty_geometry_fails() {
        let writer = GeoJsonWriter::new();
        let result = writer.write_bbox(&Geometry::from(LineString::default()));
        assert!(matches!(result, Err(Error::EmptyGeometry)));
    }

    #[test]
    fn precision_changes_affect_later_writes_only() {
        let mut writer = writer_with_precision(2);
        let point = Geometry::from(Point::new(Coordinate::new(1.23456, 2.34567)));

        let before = writer.write(&point);
        writer.set_rounding_precision(0);
        let after = writer.write(&point);

        assert_eq!(before["coordinates"], json!([1.23, 2.35]));
        assert_eq!(after["coordinates"], json!([1.0, 2.0]));
    }
}
