use plotters::style::RGBColor;

// ---------------------------------------------------------------------------
// Named chart colours
// ---------------------------------------------------------------------------

pub const SKY_BLUE: RGBColor = RGBColor(135, 206, 235);
pub const CORAL: RGBColor = RGBColor(255, 127, 80);
