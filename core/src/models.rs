use serde::{Deserialize, Serialize};

/// Reserved PNG-payload chunk codes, keyed by nominal edge length in pixels.
///
/// This is the contract with the icns consumer. Keep it in ascending order.
pub const RESOLUTION_TYPE_CODES: [(u32, [u8; 4]); 4] = [
    (128, *b"ic07"),
    (256, *b"ic08"),
    (512, *b"ic09"),
    (1024, *b"ic10"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum IconSize {
    Px128,
    Px256,
    Px512,
    Px1024,
}

impl IconSize {
    /// Every size, in the order chunks are written.
    pub const ALL: [IconSize; 4] = [
        IconSize::Px128,
        IconSize::Px256,
        IconSize::Px512,
        IconSize::Px1024,
    ];

    fn index(self) -> usize {
        match self {
            IconSize::Px128 => 0,
            IconSize::Px256 => 1,
            IconSize::Px512 => 2,
            IconSize::Px1024 => 3,
        }
    }

    pub fn pixels(self) -> u32 {
        RESOLUTION_TYPE_CODES[self.index()].0
    }

    pub fn type_code(self) -> [u8; 4] {
        RESOLUTION_TYPE_CODES[self.index()].1
    }

    pub fn from_pixels(pixels: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.pixels() == pixels)
    }

    pub fn from_type_code(code: &[u8]) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.type_code() == code)
    }

    pub fn label(self) -> String {
        self.pixels().to_string()
    }
}

impl From<IconSize> for u32 {
    fn from(value: IconSize) -> Self {
        value.pixels()
    }
}

impl TryFrom<u32> for IconSize {
    type Error = String;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        IconSize::from_pixels(value).ok_or_else(|| format!("no icns chunk for {value}px"))
    }
}
