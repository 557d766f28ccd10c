use serde::*;

/// Compact board coordinate, packed into a u16 (x in the high byte, y in the
/// low byte). Boards larger than 256x256 are not supported.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(transparent)]
pub struct Location {
    packed: u16,
}

impl Location {
    pub fn from_coords(x: u32, y: u32) -> Self {
        Location {
            packed: ((x << 8) | y) as u16,
        }
    }

    #[inline]
    pub fn x(self) -> u8 {
        ((self.packed >> 8) & 0xFF) as u8
    }

    #[inline]
    pub fn y(self) -> u8 {
        (self.packed & 0xFF) as u8
    }

    #[inline]
    pub fn packed_repr(self) -> u16 {
        self.packed
    }

    #[inline]
    pub fn from_packed(packed: u16) -> Self {
        Location { packed }
    }

    /// Manhattan distance. The engine uses no other metric.
    pub fn distance_to(self, other: Self) -> u32 {
        self.distance_to_xy(other.x() as i16, other.y() as i16)
    }

    pub fn distance_to_xy(self, x: i16, y: i16) -> u32 {
        let dx = (self.x() as i16) - x;
        let dy = (self.y() as i16) - y;

        (dx.abs() + dy.abs()) as u32
    }
}

impl Serialize for Location {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.packed_repr().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Location {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        u16::deserialize(deserializer).map(Location::from_packed)
    }
}
