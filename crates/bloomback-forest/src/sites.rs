/// A fixed reforestation project location. Base coordinates mark the center
/// of the planting area; the ranges bound how far a derived tree position may
/// drift from it (kept small so trees stay inside the forest).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub name: &'static str,
    pub area: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub lat_range: f64,
    pub lng_range: f64,
}

pub const SITES: [Site; 6] = [
    Site {
        name: "Madagascar Reforestation Project",
        area: "Andasibe-Mantadia National Park",
        lat: -18.9332,
        lng: 48.4191,
        lat_range: 0.15,
        lng_range: 0.15,
    },
    Site {
        name: "Amazon Rainforest Initiative",
        area: "Acre State region",
        lat: -9.4713,
        lng: -68.2947,
        lat_range: 0.2,
        lng_range: 0.2,
    },
    Site {
        name: "East Africa Greenbelt",
        area: "Aberdare Forest, Kenya",
        lat: -0.3792,
        lng: 36.7001,
        lat_range: 0.15,
        lng_range: 0.15,
    },
    Site {
        name: "Atlantic Forest Restoration",
        area: "Serra do Mar, Brazil",
        lat: -23.3485,
        lng: -44.7491,
        lat_range: 0.2,
        lng_range: 0.2,
    },
    Site {
        name: "Borneo Rainforest Project",
        area: "Sabah rainforest region",
        lat: 5.4164,
        lng: 117.3228,
        lat_range: 0.25,
        lng_range: 0.25,
    },
    Site {
        name: "Australian Bushland Recovery",
        area: "Daintree Rainforest",
        lat: -16.17,
        lng: 145.4206,
        lat_range: 0.15,
        lng_range: 0.15,
    },
];
