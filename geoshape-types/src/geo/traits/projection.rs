/// Projection converts points from one coordinate system into another.
///
/// Both directions return `None` if the point cannot be represented in the target coordinate system.
pub trait Projection {
    /// Type of the input point.
    type InPoint;
    /// Type of the output point.
    type OutPoint;

    /// Projects an input point into the output coordinate system.
    fn project(&self, input: &Self::InPoint) -> Option<Self::OutPoint>;
    /// Projects a point from the output coordinate system back into the input one.
    fn unproject(&self, input: &Self::OutPoint) -> Option<Self::InPoint>;
}
