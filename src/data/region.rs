//! Region Classifier Module
//! Assigns each state one of three fixed geographic groups by static
//! membership list, used only for color coding.

/// Geographic group of a state, plus `Unknown` for names outside the
/// 50-states-plus-DC domain. The renderer maps `Unknown` to a gray fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    East,
    Central,
    West,
    Unknown,
}

impl Group {
    pub fn label(&self) -> &'static str {
        match self {
            Group::East => "East",
            Group::Central => "Central",
            Group::West => "West",
            Group::Unknown => "Unknown",
        }
    }
}

pub const EAST_STATES: [&str; 24] = [
    "Alabama",
    "Connecticut",
    "Delaware",
    "District of Columbia",
    "Florida",
    "Georgia",
    "Indiana",
    "Kentucky",
    "Maine",
    "Maryland",
    "Massachusetts",
    "Michigan",
    "New Hampshire",
    "New Jersey",
    "New York",
    "North Carolina",
    "Ohio",
    "Pennsylvania",
    "Rhode Island",
    "South Carolina",
    "Tennessee",
    "Vermont",
    "Virginia",
    "West Virginia",
];

pub const CENTRAL_STATES: [&str; 17] = [
    "Arkansas",
    "Colorado",
    "Illinois",
    "Iowa",
    "Kansas",
    "Louisiana",
    "Minnesota",
    "Mississippi",
    "Missouri",
    "Nebraska",
    "New Mexico",
    "North Dakota",
    "Oklahoma",
    "South Dakota",
    "Texas",
    "Wisconsin",
    "Wyoming",
];

pub const WEST_STATES: [&str; 10] = [
    "Alaska",
    "Arizona",
    "California",
    "Hawaii",
    "Idaho",
    "Montana",
    "Nevada",
    "Oregon",
    "Utah",
    "Washington",
];

/// Classify a region name by exact membership. Names outside the three
/// lists (territories, typos, padded strings) come back `Unknown`.
pub fn classify(region_name: &str) -> Group {
    if EAST_STATES.contains(&region_name) {
        Group::East
    } else if CENTRAL_STATES.contains(&region_name) {
        Group::Central
    } else if WEST_STATES.contains(&region_name) {
        Group::West
    } else {
        Group::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn lists_partition_fifty_states_plus_dc() {
        let all: Vec<&str> = EAST_STATES
            .iter()
            .chain(CENTRAL_STATES.iter())
            .chain(WEST_STATES.iter())
            .copied()
            .collect();
        assert_eq!(all.len(), 51);

        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(unique.len(), 51, "membership lists must be disjoint");
    }

    #[test]
    fn every_known_name_gets_exactly_one_group() {
        for name in EAST_STATES {
            assert_eq!(classify(name), Group::East);
        }
        for name in CENTRAL_STATES {
            assert_eq!(classify(name), Group::Central);
        }
        for name in WEST_STATES {
            assert_eq!(classify(name), Group::West);
        }
    }

    #[test]
    fn classification_is_exact_match() {
        assert_eq!(classify("Ohio"), Group::East);
        assert_eq!(classify("Texas"), Group::Central);
        assert_eq!(classify("Nevada"), Group::West);
        assert_eq!(classify("ohio"), Group::Unknown);
        assert_eq!(classify(" Ohio"), Group::Unknown);
        assert_eq!(classify("Puerto Rico"), Group::Unknown);
        assert_eq!(classify(""), Group::Unknown);
    }
}
