/// The three Helvetica faces the invoice layout draws with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
    Normal,
    Bold,
    Oblique,
}

impl Style {
    /// PostScript name of the standard Type1 font for this face
    pub fn base_font(&self) -> &'static [u8] {
        match self {
            Style::Normal => b"Helvetica",
            Style::Bold => b"Helvetica-Bold",
            Style::Oblique => b"Helvetica-Oblique",
        }
    }
}
