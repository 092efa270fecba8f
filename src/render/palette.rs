use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Built-in series colors, assigned by series position.
pub const DEFAULT_PALETTE: [Color; 39] = [
    Color::from_rgb8(0xe5, 0x2b, 0x50),
    Color::from_rgb8(0x00, 0x80, 0x00),
    Color::from_rgb8(0x00, 0x00, 0xff),
    Color::from_rgb8(0xff, 0x00, 0xff),
    Color::from_rgb8(0xa5, 0x2a, 0x2a),
    Color::from_rgb8(0x00, 0x00, 0x8b),
    Color::from_rgb8(0x00, 0x8b, 0x8b),
    Color::from_rgb8(0xa9, 0xa9, 0xa9),
    Color::from_rgb8(0x00, 0x64, 0x00),
    Color::from_rgb8(0xbd, 0xb7, 0x6b),
    Color::from_rgb8(0x8b, 0x00, 0x8b),
    Color::from_rgb8(0x55, 0x6b, 0x2f),
    Color::from_rgb8(0xff, 0x8c, 0x00),
    Color::from_rgb8(0x99, 0x32, 0xcc),
    Color::from_rgb8(0x8b, 0x00, 0x00),
    Color::from_rgb8(0xe9, 0x96, 0x7a),
    Color::from_rgb8(0x94, 0x00, 0xd3),
    Color::from_rgb8(0xff, 0x00, 0xff),
    Color::from_rgb8(0xff, 0xd7, 0x00),
    Color::from_rgb8(0x00, 0x80, 0x00),
    Color::from_rgb8(0x4b, 0x00, 0x82),
    Color::from_rgb8(0xf0, 0xe6, 0x8c),
    Color::from_rgb8(0xad, 0xd8, 0xe6),
    Color::from_rgb8(0xe0, 0xff, 0xff),
    Color::from_rgb8(0x90, 0xee, 0x90),
    Color::from_rgb8(0xd3, 0xd3, 0xd3),
    Color::from_rgb8(0xff, 0xb6, 0xc1),
    Color::from_rgb8(0xff, 0xff, 0xe0),
    Color::from_rgb8(0x80, 0x00, 0x00),
    Color::from_rgb8(0x00, 0x00, 0x80),
    Color::from_rgb8(0x80, 0x80, 0x00),
    Color::from_rgb8(0xff, 0xa5, 0x00),
    Color::from_rgb8(0xff, 0xc0, 0xcb),
    Color::from_rgb8(0x80, 0x00, 0x80),
    Color::from_rgb8(0x80, 0x00, 0x80),
    Color::from_rgb8(0xff, 0x00, 0x00),
    Color::from_rgb8(0xc0, 0xc0, 0xc0),
    Color::from_rgb8(0xff, 0xff, 0xff),
    Color::from_rgb8(0xff, 0xff, 0x00),
];

/// Ordered set of series colors. Series `i` receives color `i mod len`.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> ChartResult<Self> {
        if colors.is_empty() {
            return Err(ChartError::InvalidData(
                "palette must contain at least one color".to_owned(),
            ));
        }
        for color in &colors {
            color.validate()?;
        }
        Ok(Self { colors })
    }

    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> ChartResult<Self> {
        let colors = colors
            .iter()
            .map(|text| Color::from_hex(text.as_ref()))
            .collect::<ChartResult<Vec<_>>>()?;
        Self::new(colors)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[must_use]
    pub fn color_for(&self, series_index: usize) -> Color {
        self.colors[series_index % self.colors.len()]
    }

    /// Colors for the first `series_count` series.
    #[must_use]
    pub fn assign(&self, series_count: usize) -> Vec<Color> {
        (0..series_count).map(|index| self.color_for(index)).collect()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_PALETTE.to_vec(),
        }
    }
}
