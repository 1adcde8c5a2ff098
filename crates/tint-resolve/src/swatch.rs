//! Image Analysis Boundary
//!
//! The resolver never decodes pixels itself. A host-provided analyzer
//! turns an avatar image into candidate swatches tagged with a palette
//! category; the resolver only picks from them.

use std::collections::HashMap;
use std::fmt;

use tint_color::convert;

use crate::ResolveError;

/// Palette categories an analyzer may report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwatchCategory {
    Vibrant,
    Muted,
    DarkVibrant,
    DarkMuted,
    LightVibrant,
    LightMuted,
}

impl SwatchCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SwatchCategory::Vibrant => "Vibrant",
            SwatchCategory::Muted => "Muted",
            SwatchCategory::DarkVibrant => "DarkVibrant",
            SwatchCategory::DarkMuted => "DarkMuted",
            SwatchCategory::LightVibrant => "LightVibrant",
            SwatchCategory::LightMuted => "LightMuted",
        }
    }
}

impl fmt::Display for SwatchCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One candidate representative color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    rgb: [u8; 3],
    population: u32,
}

impl Swatch {
    pub fn new(rgb: [u8; 3], population: u32) -> Self {
        Self { rgb, population }
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    pub fn hex(&self) -> String {
        convert::rgb_to_hex(self.rgb)
    }

    /// Pixel count backing this swatch.
    pub fn population(&self) -> u32 {
        self.population
    }
}

/// The analyzer's output: zero or one swatch per category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SwatchSet {
    swatches: HashMap<SwatchCategory, Swatch>,
}

impl SwatchSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, category: SwatchCategory, swatch: Swatch) {
        self.swatches.insert(category, swatch);
    }

    pub fn get(&self, category: SwatchCategory) -> Option<&Swatch> {
        self.swatches.get(&category)
    }

    pub fn is_empty(&self) -> bool {
        self.swatches.is_empty()
    }

    /// Tie-break policy: walk `priority` in order and return the first
    /// category with a swatch, `None` if none of them has one.
    pub fn first_valid(&self, priority: &[SwatchCategory]) -> Option<&Swatch> {
        priority.iter().find_map(|category| self.get(*category))
    }
}

/// Extracts candidate swatches from an avatar image. The one suspending
/// operation in the core - analysis waits on image load and decode.
pub trait ImageAnalyzer {
    /// Analyze the image at `image_path`. An error here means the image
    /// failed to load or analysis itself failed; an empty [`SwatchSet`]
    /// means analysis succeeded but found nothing usable.
    async fn analyze(&self, image_path: &str) -> Result<SwatchSet, ResolveError>;
}
