use geo::{BoundingRect, Contains, LineString, Point, Polygon, Rect};

use crate::geometry::{BandPolygon, BandRing, Coordinate};

/// A single drawing operation of a decoded band.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new ring at this coordinate.
    MoveTo(Coordinate),
    /// Extend the current ring to this coordinate.
    LineTo(Coordinate),
    /// Close the current ring. Carries no coordinate.
    Close,
}

impl PathCommand {
    /// The coordinate carried by this command, if any.
    pub fn coord(&self) -> Option<Coordinate> {
        match self {
            PathCommand::MoveTo(c) | PathCommand::LineTo(c) => Some(*c),
            PathCommand::Close => None,
        }
    }
}

/// A decoded drive-time band, as the sequence of path commands that draws it.
///
/// Every ring contributes one [`PathCommand::MoveTo`], one [`PathCommand::LineTo`] per
/// subsequent coordinate and a trailing [`PathCommand::Close`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BandPath {
    commands: Vec<PathCommand>,
}

impl BandPath {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn move_to(&mut self, coord: Coordinate) {
        self.commands.push(PathCommand::MoveTo(coord));
    }

    pub(crate) fn line_to(&mut self, coord: Coordinate) {
        self.commands.push(PathCommand::LineTo(coord));
    }

    pub(crate) fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Append one ring to this path.
    pub(crate) fn push_ring(&mut self, coords: impl IntoIterator<Item = Coordinate>) {
        let mut coords = coords.into_iter();
        let Some(first) = coords.next() else {
            return;
        };
        self.move_to(first);
        for coord in coords {
            self.line_to(coord);
        }
        self.close();
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathCommand> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// The number of rings drawn by this path.
    pub fn num_rings(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, PathCommand::MoveTo(_)))
            .count()
    }

    /// Rebuild the rings drawn by this path, in order.
    pub fn to_polygon(&self) -> BandPolygon {
        let mut polygon = BandPolygon::default();
        let mut current: Option<BandRing> = None;
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(c) => {
                    if let Some(ring) = current.replace(BandRing::new(vec![*c])) {
                        polygon.push(ring);
                    }
                }
                PathCommand::LineTo(c) => current.get_or_insert_with(BandRing::default).push(*c),
                PathCommand::Close => {
                    if let Some(ring) = current.take() {
                        polygon.push(ring);
                    }
                }
            }
        }
        if let Some(ring) = current {
            polygon.push(ring);
        }
        polygon
    }

    /// Convert to a [`geo::Polygon`], taking the first ring as exterior and the rest as interiors.
    pub fn to_geo(&self) -> Polygon<f64> {
        self.to_polygon().into()
    }

    /// Whether `coord` lies strictly inside the band.
    ///
    /// Rings are combined with the even-odd rule: a point is inside when an odd number of rings
    /// contain it. This treats nested rings as holes and disjoint rings as separate islands.
    pub fn contains(&self, coord: impl Into<Coordinate>) -> bool {
        let coord: Coordinate = coord.into();
        let point = Point::from(geo::Coord::from(coord));
        let containing = self
            .to_polygon()
            .into_inner()
            .into_iter()
            .map(|ring| Polygon::new(LineString::from(ring), vec![]))
            .filter(|polygon| polygon.contains(&point))
            .count();
        containing % 2 == 1
    }

    /// The bounding rectangle of every coordinate in this path, or `None` if it is empty.
    pub fn bounding_rect(&self) -> Option<Rect<f64>> {
        let line_string: LineString<f64> = self
            .commands
            .iter()
            .filter_map(PathCommand::coord)
            .map(geo::Coord::from)
            .collect();
        line_string.bounding_rect()
    }
}

impl<'a> IntoIterator for &'a BandPath {
    type Item = &'a PathCommand;
    type IntoIter = std::slice::Iter<'a, PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

impl IntoIterator for BandPath {
    type Item = PathCommand;
    type IntoIter = std::vec::IntoIter<PathCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}

impl From<&BandPolygon> for BandPath {
    fn from(value: &BandPolygon) -> Self {
        let num_commands = value.rings().iter().map(|ring| ring.len() + 1).sum();
        let mut path = BandPath::with_capacity(num_commands);
        for ring in value.rings() {
            path.push_ring(ring.coords().iter().copied());
        }
        path
    }
}
