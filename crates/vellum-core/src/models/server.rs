use super::AccentColor;

/// A server tile in the leftmost rail.
#[derive(Debug, Clone, PartialEq)]
pub struct Server {
    pub id: String,
    pub name: String,
    /// Short glyph shown on the tile.
    pub icon: String,
    pub color: AccentColor,
}

impl Server {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        icon: impl Into<String>,
        color: AccentColor,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            color,
        }
    }
}
