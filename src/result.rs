/// The result returned by fallible methods within the crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("geometry has no coordinates to derive a bounding box from")]
    EmptyGeometry,
    #[error("unsupported geometry type")]
    UnsupportedGeometryType,
}
