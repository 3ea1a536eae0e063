/// Rows of compiled-in ASCII art
#[derive(Debug, Clone, Copy)]
pub struct ArtBlock {
    rows: &'static [&'static str],
}

impl ArtBlock {
    pub const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &'static [&'static str] {
        self.rows
    }

    /// Widest row, in characters
    pub fn width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.chars().count())
            .max()
            .unwrap_or(0)
    }
}

pub const TUX: ArtBlock = ArtBlock::new(&[
    r"        .--.        ",
    r"       |o_o |       ",
    r"       |:_/ |       ",
    r"      //   \ \      ",
    r"     (|     | )     ",
    r"    /'\_   _/`\     ",
    r"    \___)=(___/     ",
]);
