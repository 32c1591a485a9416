use crate::result::Error;

/// A single position with two or three real-valued components.
///
/// The z component is optional. A coordinate whose z is `None` or NaN is
/// treated as 2-dimensional when written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
    pub z: Option<f64>,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Coordinate {
        Coordinate { x, y, z: None }
    }

    pub fn new_3d(x: f64, y: f64, z: f64) -> Coordinate {
        Coordinate { x, y, z: Some(z) }
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from(value: (f64, f64)) -> Self {
        Coordinate::new(value.0, value.1)
    }
}

impl From<(f64, f64, f64)> for Coordinate {
    fn from(value: (f64, f64, f64)) -> Self {
        Coordinate::new_3d(value.0, value.1, value.2)
    }
}

/// A single point, possibly empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point(pub Option<Coordinate>);

impl Point {
    pub fn new(coordinate: Coordinate) -> Point {
        Point(Some(coordinate))
    }

    pub fn empty() -> Point {
        Point(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

/// An ordered sequence of coordinates forming a path. The order of the
/// coordinates defines the shape and is preserved when writing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LineString(pub Vec<Coordinate>);

impl LineString {
    pub fn new(coordinates: Vec<Coordinate>) -> LineString {
        LineString(coordinates)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One exterior ring and zero or more interior rings. Rings are closed
/// coordinate loops (first coordinate equal to the last); closure is assumed,
/// not validated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub exterior: LineString,
    pub interiors: Vec<LineString>,
}

impl Polygon {
    pub fn new(exterior: LineString, interiors: Vec<LineString>) -> Polygon {
        Polygon {
            exterior,
            interiors,
        }
    }

    /// A polygon with an empty exterior ring is empty.
    pub fn is_empty(&self) -> bool {
        self.exterior.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPoint(pub Vec<Point>);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiLineString(pub Vec<LineString>);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct MultiPolygon(pub Vec<Polygon>);

/// An ordered sequence of arbitrary child geometries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GeometryCollection(pub Vec<Geometry>);

impl MultiPoint {
    pub fn new(points: Vec<Point>) -> MultiPoint {
        MultiPoint(points)
    }
}

impl MultiLineString {
    pub fn new(lines: Vec<LineString>) -> MultiLineString {
        MultiLineString(lines)
    }
}

impl MultiPolygon {
    pub fn new(polygons: Vec<Polygon>) -> MultiPolygon {
        MultiPolygon(polygons)
    }
}

impl GeometryCollection {
    pub fn new(geometries: Vec<Geometry>) -> GeometryCollection {
        GeometryCollection(geometries)
    }
}

/// A geometry of any of the seven supported kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    LineString(LineString),
    Polygon(Polygon),
    MultiPoint(MultiPoint),
    MultiLineString(MultiLineString),
    MultiPolygon(MultiPolygon),
    GeometryCollection(GeometryCollection),
}

impl Geometry {
    /// The canonical GeoJSON name for this geometry's kind.
    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point(_) => "Point",
            Geometry::LineString(_) => "LineString",
            Geometry::Polygon(_) => "Polygon",
            Geometry::MultiPoint(_) => "MultiPoint",
            Geometry::MultiLineString(_) => "MultiLineString",
            Geometry::MultiPolygon(_) => "MultiPolygon",
            Geometry::GeometryCollection(_) => "GeometryCollection",
        }
    }

    /// True when the geometry carries no coordinates anywhere in its subtree.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(point) => point.is_empty(),
            Geometry::LineString(line) => line.is_empty(),
            Geometry::Polygon(polygon) => polygon.is_empty(),
            Geometry::MultiPoint(multi) => multi.0.iter().all(Point::is_empty),
            Geometry::MultiLineString(multi) => multi.0.iter().all(LineString::is_empty),
            Geometry::MultiPolygon(multi) => multi.0.iter().all(Polygon::is_empty),
            Geometry::GeometryCollection(collection) => {
                collection.0.iter().all(Geometry::is_empty)
            }
        }
    }
}

// wrapping a concrete geometry into the enum is mechanical, so a macro keeps
// the impls in one place
macro_rules! geometry_from {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$t> for Geometry {
                fn from(value: $t) -> Self {
                    Geometry::$variant(value)
                }
            }
        )*
    };
}

geometry_from! {
    Point => Point,
    LineString => LineString,
    Polygon => Polygon,
    MultiPoint => MultiPoint,
    MultiLineString => MultiLineString,
    MultiPolygon => MultiPolygon,
    GeometryCollection => GeometryCollection,
}

impl From<geo_types::Coord<f64>> for Coordinate {
    fn from(value: geo_types::Coord<f64>) -> Self {
        Coordinate::new(value.x, value.y)
    }
}

impl From<geo_types::Point<f64>> for Point {
    fn from(value: geo_types::Point<f64>) -> Self {
        Point(Some(Coordinate::new(value.x(), value.y())))
    }
}

impl From<geo_types::LineString<f64>> for LineString {
    fn from(value: geo_types::LineString<f64>) -> Self {
        LineString::new(value.into_iter().map(Coordinate::from).collect())
    }
}

impl From<geo_types::Polygon<f64>> for Polygon {
    fn from(value: geo_types::Polygon<f64>) -> Self {
        let (exterior, interiors) = value.into_inner();
        Polygon::new(
            LineString::from(exterior),
            interiors.into_iter().map(LineString::from).collect(),
        )
    }
}

impl From<geo_types::MultiPoint<f64>> for MultiPoint {
    fn from(value: geo_types::MultiPoint<f64>) -> Self {
        MultiPoint::new(value.0.into_iter().map(Point::from).collect())
    }
}

impl From<geo_types::MultiLineString<f64>> for MultiLineString {
    fn from(value: geo_types::MultiLineString<f64>) -> Self {
        MultiLineString::new(value.0.into_iter().map(LineString::from).collect())
    }
}

impl From<geo_types::MultiPolygon<f64>> for MultiPolygon {
    fn from(value: geo_types::MultiPolygon<f64>) -> Self {
        MultiPolygon::new(value.0.into_iter().map(Polygon::from).collect())
    }
}

impl TryFrom<geo_types::GeometryCollection<f64>> for GeometryCollection {
    type Error = Error;

    fn try_from(value: geo_types::GeometryCollection<f64>) -> Result<Self, Error> {
        let mut geometries = Vec::with_capacity(value.len());
        for geometry in value {
            geometries.push(Geometry::try_from(geometry)?);
        }
        Ok(GeometryCollection::new(geometries))
    }
}

impl TryFrom<geo_types::Geometry<f64>> for Geometry {
    type Error = Error;

    fn try_from(value: geo_types::Geometry<f64>) -> Result<Self, Error> {
        match value {
            geo_types::Geometry::Point(g) => Ok(Geometry::Point(g.into())),
            geo_types::Geometry::LineString(g) => Ok(Geometry::LineString(g.into())),
            geo_types::Geometry::Polygon(g) => Ok(Geometry::Polygon(g.into())),
            geo_types::Geometry::MultiPoint(g) => Ok(Geometry::MultiPoint(g.into())),
            geo_types::Geometry::MultiLineString(g) => Ok(Geometry::MultiLineString(g.into())),
            geo_types::Geometry::MultiPolygon(g) => Ok(Geometry::MultiPolygon(g.into())),
            geo_types::Geometry::GeometryCollection(g) => {
                Ok(Geometry::GeometryCollection(g.try_into()?))
            }
            // Line, Rect and Triangle have no GeoJSON counterpart
            _ => Err(Error::UnsupportedGeometryType),
        }
    }
}
