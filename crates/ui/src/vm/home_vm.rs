use passport_core::model::RegionId;
use passport_core::DerivedRegionView;
use services::HomeProgress;

/// UI-ready data for the home screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HomeVm {
    /// `None` hides the points pill (demo accounts).
    pub points_label: Option<String>,
    pub stamps_label: String,
    pub percentage: u8,
    pub percentage_label: String,
    pub regions: Vec<RegionCardVm>,
}

/// One card in the region carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegionCardVm {
    pub id: RegionId,
    pub name: String,
    pub image_src: Option<String>,
    /// One entry per stamp slot; `true` renders a filled dot.
    pub dots: Vec<bool>,
    pub count_label: String,
}

#[must_use]
pub fn map_home_vm(progress: &HomeProgress) -> HomeVm {
    let aggregate = progress.aggregate;
    let points_label = if progress.restricted {
        None
    } else {
        Some(format!("{} Points", progress.points))
    };

    HomeVm {
        points_label,
        stamps_label: format!(
            "{}/{} Stamps",
            aggregate.total_collected, aggregate.total_possible
        ),
        percentage: aggregate.percentage,
        percentage_label: format!("{}%", aggregate.percentage),
        regions: progress
            .regions
            .iter()
            .map(|region| map_region_card(region, progress.restricted))
            .collect(),
    }
}

#[must_use]
pub fn map_region_card(region: &DerivedRegionView, restricted: bool) -> RegionCardVm {
    let collected = if restricted { 0 } else { region.collected_count };
    let slots = region.total_stamp_slots();
    let dots = (0..slots).map(|slot| slot < collected).collect();

    RegionCardVm {
        id: region.id().clone(),
        name: region.name().to_string(),
        image_src: region.image.as_ref().map(|image| image.as_str().to_string()),
        dots,
        count_label: format!("{collected}/{slots}"),
    }
}
