use std::fmt;

/// An independent world coordinate space, rendered as its own image plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Overworld,
    Nether,
    TheEnd,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [Dimension::Overworld, Dimension::Nether, Dimension::TheEnd];

    pub fn id(self) -> i32 {
        match self {
            Dimension::Overworld => 0,
            Dimension::Nether => 1,
            Dimension::TheEnd => 2,
        }
    }

    /// Maps a stored dimension id. Old worlds store negative ids for the overworld.
    pub fn from_id(id: i32) -> Option<Self> {
        match id {
            i32::MIN..=0 => Some(Dimension::Overworld),
            1 => Some(Dimension::Nether),
            2 => Some(Dimension::TheEnd),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Overworld => "Overworld",
            Dimension::Nether => "Nether",
            Dimension::TheEnd => "The End",
        }
    }

    pub(crate) fn index(self) -> usize {
        self.id() as usize
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
