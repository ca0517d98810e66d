use std::fmt;

/// Number of gates in the bank.
pub const GATE_COUNT: usize = 16;

/// Identity of a gate, numbered 1 through 16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GateId(u8);

impl GateId {
    /// Every gate in identity order.
    pub const ALL: [GateId; GATE_COUNT] = [
        GateId(1),
        GateId(2),
        GateId(3),
        GateId(4),
        GateId(5),
        GateId(6),
        GateId(7),
        GateId(8),
        GateId(9),
        GateId(10),
        GateId(11),
        GateId(12),
        GateId(13),
        GateId(14),
        GateId(15),
        GateId(16),
    ];

    /// Returns the gate with the given number, or `None` outside `1..=16`.
    #[must_use]
    pub fn new(number: u8) -> Option<Self> {
        (1..=16).contains(&number).then_some(Self(number))
    }

    /// The gate number, `1..=16`.
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Zero-based position of the gate in bank order.
    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }

    #[must_use]
    pub fn group(self) -> GateGroup {
        if self.0 <= 8 {
            GateGroup::Canadian
        } else {
            GateGroup::American
        }
    }

    #[must_use]
    pub fn sill_source(self) -> SillSource {
        match self.0 {
            1..=4 => SillSource::Gates1To4,
            5..=8 => SillSource::Gates5To8,
            _ => SillSource::Gates9To16,
        }
    }
}

impl fmt::Display for GateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// National grouping of the gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateGroup {
    /// Gates 1–8.
    Canadian,
    /// Gates 9–16.
    American,
}

impl fmt::Display for GateGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Canadian => "Canadian",
            Self::American => "American",
        })
    }
}

/// Which shared sill elevation a gate reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SillSource {
    Gates1To4,
    Gates5To8,
    Gates9To16,
}

impl fmt::Display for SillSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Gates1To4 => "gates 1-4",
            Self::Gates5To8 => "gates 5-8",
            Self::Gates9To16 => "gates 9-16",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_ordered_and_indexed() {
        for (index, id) in GateId::ALL.iter().enumerate() {
            assert_eq!(id.index(), index);
            assert_eq!(usize::from(id.get()), index + 1);
        }
    }

    #[test]
    fn new_rejects_out_of_range() {
        assert_eq!(GateId::new(0), None);
        assert_eq!(GateId::new(17), None);
        assert_eq!(GateId::new(16).map(GateId::get), Some(16));
    }

    #[test]
    fn groups_and_sill_sources_partition_the_bank() {
        let canadian = GateId::ALL
            .iter()
            .filter(|id| id.group() == GateGroup::Canadian)
            .count();
        assert_eq!(canadian, 8);

        let count = |source| {
            GateId::ALL
                .iter()
                .filter(|id| id.sill_source() == source)
                .count()
        };
        assert_eq!(count(SillSource::Gates1To4), 4);
        assert_eq!(count(SillSource::Gates5To8), 4);
        assert_eq!(count(SillSource::Gates9To16), 8);

        assert_eq!(GateId::ALL[4].sill_source(), SillSource::Gates5To8);
        assert_eq!(GateId::ALL[8].group(), GateGroup::American);
    }
}
