use std::fmt;
use std::str::FromStr;

/// Official event identifiers recognised as schedule columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventId {
    Cube3,
    Cube2,
    Cube4,
    Cube5,
    Cube6,
    Cube7,
    Blindfolded3,
    FewestMoves,
    OneHanded,
    Clock,
    Megaminx,
    Pyraminx,
    Skewb,
    Square1,
    Blindfolded4,
    Blindfolded5,
    MultiBlind,
}

impl EventId {
    pub const ALL: [EventId; 17] = [
        EventId::Cube3,
        EventId::Cube2,
        EventId::Cube4,
        EventId::Cube5,
        EventId::Cube6,
        EventId::Cube7,
        EventId::Blindfolded3,
        EventId::FewestMoves,
        EventId::OneHanded,
        EventId::Clock,
        EventId::Megaminx,
        EventId::Pyraminx,
        EventId::Skewb,
        EventId::Square1,
        EventId::Blindfolded4,
        EventId::Blindfolded5,
        EventId::MultiBlind,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventId::Cube3 => "333",
            EventId::Cube2 => "222",
            EventId::Cube4 => "444",
            EventId::Cube5 => "555",
            EventId::Cube6 => "666",
            EventId::Cube7 => "777",
            EventId::Blindfolded3 => "333bf",
            EventId::FewestMoves => "333fm",
            EventId::OneHanded => "333oh",
            EventId::Clock => "clock",
            EventId::Megaminx => "minx",
            EventId::Pyraminx => "pyram",
            EventId::Skewb => "skewb",
            EventId::Square1 => "sq1",
            EventId::Blindfolded4 => "444bf",
            EventId::Blindfolded5 => "555bf",
            EventId::MultiBlind => "333mbf",
        }
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventId {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventId::ALL
            .iter()
            .find(|event| event.as_str() == s)
            .copied()
            .ok_or(())
    }
}
