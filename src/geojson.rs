use crate::types::*;
use crate::GeoJsonWriter;
use serde_json::Value;

/// A trait for the conversion of a geometry's parts into the value of a
/// GeoJSON `coordinates` member.
///
/// The payload shapes nest mechanically, so each geometry type converts itself
/// and composes the conversions of its parts. The empty-geometry to null
/// collapse for the singular kinds happens at the dispatch level instead,
/// where a MultiPolygon member must stay an empty list.
pub(crate) trait CoordsJson {
    fn coords_json(&self, writer: &GeoJsonWriter) -> Value;
}

impl CoordsJson for Coordinate {
    fn coords_json(&self, writer: &GeoJsonWriter) -> Value {
        let x = writer.round_number(self.x);
        let y = writer.round_number(self.y);
        match self.z {
            Some(z) if !z.is_nan() => Value::from(vec![x, y, writer.round_number(z)]),
            _ => Value::from(vec![x, y]),
        }
    }
}

impl CoordsJson for LineString {
    fn coords_json(&self, writer: &GeoJsonWriter) -> Value {
        Value::Array(self.0.iter().map(|c| c.coords_json(writer)).collect())
    }
}

impl CoordsJson for Polygon {
    fn coords_json(&self, writer: &GeoJsonWriter) -> Value {
        if self.exterior.is_empty() {
            return Value::Array(Vec::new());
        }
        let mut rings = Vec::with_capacity(self.interiors.len() + 1);
        rings.push(self.exterior.coords_json(writer));
        for ring in &self.interiors {
            rings.push(ring.coords_json(writer));
        }
        Value::Array(rings)
    }
}

impl CoordsJson for MultiPoint {
    fn coords_json(&self, writer: &GeoJsonWriter) -> Value {
        Value::Array(
            self.0
                .iter()
                .map(|point| match &point.0 {
                    Some(coordinate) => coordinate.coords_json(writer),
                    None => Value::Null,
                })
                .collect(),
        )
    }
}

impl CoordsJson for MultiLineString {
    fn coords_json(&self, writer: &GeoJsonWriter) -> Value {
        Value::Array(self.0.iter().map(|line| line.coords_json(writer)).collect())
    }
}

impl CoordsJson for MultiPolygon {
    fn coords_json(&self, writer: &GeoJsonWriter) -> Value {
        Value::Array(
            self.0
                .iter()
                .map(|polygon| polygon.coords_json(writer))
                .collect(),
        )
    }
}
