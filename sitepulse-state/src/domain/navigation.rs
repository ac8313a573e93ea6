use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Dashboard section currently shown to the user.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Tab {
    #[default]
    Dashboard,
    Projects,
    Safety,
    Quality,
    Equipment,
    Analytics,
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn tabs_round_trip_through_strings() {
        for tab in Tab::iter() {
            assert_eq!(tab.to_string().parse::<Tab>().unwrap(), tab);
        }
        assert_eq!(Tab::default(), Tab::Dashboard);
        assert!("settings".parse::<Tab>().is_err());
    }
}
