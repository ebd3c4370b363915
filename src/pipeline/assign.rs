use crate::color::Color;
use crate::pipeline::service::PaletteService;

/// How colors are picked for a list of regions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AssignMode {
    /// Hue from each name, lightness from its position in the list.
    Named,
    /// One golden-angle palette, handed out in list order.
    Sequential { seed: Option<f64> },
}

/// A region name with the fill color chosen for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionColor {
    pub name: String,
    pub color: Color,
}

/// Color every region in `names`, preserving order.
pub fn assign_regions<S: AsRef<str>>(
    service: &PaletteService,
    names: &[S],
    mode: AssignMode,
) -> Vec<RegionColor> {
    let colors: Vec<Color> = match mode {
        AssignMode::Named => names
            .iter()
            .enumerate()
            .map(|(i, name)| service.color_for_name(name.as_ref(), i))
            .collect(),
        AssignMode::Sequential { seed } => service.generate_sequence(names.len(), seed),
    };

    names
        .iter()
        .zip(colors)
        .map(|(name, color)| RegionColor {
            name: name.as_ref().to_string(),
            color,
        })
        .collect()
}
