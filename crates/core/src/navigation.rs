use crate::model::RegionId;

/// Places the home screen can send the user to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Explore,
    PassportOverview,
    RegionDetail(RegionId),
    Scan,
    Rewards,
    Profile,
}

impl Destination {
    /// Route path understood by the app router.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Destination::Explore => "/".to_string(),
            Destination::PassportOverview => "/passport".to_string(),
            Destination::RegionDetail(id) => format!("/passport/{id}"),
            Destination::Scan => "/scan".to_string(),
            Destination::Rewards => "/rewards".to_string(),
            Destination::Profile => "/profile".to_string(),
        }
    }
}
