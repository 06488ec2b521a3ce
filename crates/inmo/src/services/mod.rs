//! One wrapper per backend resource. Each call is exactly one HTTP request;
//! nothing is retried or cached.

mod catalog;
mod facilities;
mod floor_plans;
mod media;
mod properties;
mod rental;

pub use catalog::{CatalogResource, CatalogService, ChildResource};
pub use facilities::NearbyFacilityService;
pub use floor_plans::FloorPlanService;
pub use media::{FileService, GalleryImageService, PrivateFileService};
pub use properties::PropertyService;
pub use rental::RentalConfigService;

use crate::api::ApiClient;
use crate::models::{
    Agent, City, CityZone, Country, Department, Neighborhood, OwnerContact,
};

/// Every service built over one shared client.
#[derive(Debug, Clone)]
pub struct Services {
    pub countries: CatalogService<Country>,
    pub departments: CatalogService<Department>,
    pub cities: CatalogService<City>,
    pub city_zones: CatalogService<CityZone>,
    pub neighborhoods: CatalogService<Neighborhood>,
    pub agents: CatalogService<Agent>,
    pub owners: CatalogService<OwnerContact>,
    pub properties: PropertyService,
    pub gallery: GalleryImageService,
    pub floor_plans: FloorPlanService,
    pub private_files: PrivateFileService,
    pub files: FileService,
    pub nearby_facilities: NearbyFacilityService,
    pub rental_configs: RentalConfigService,
}

impl Services {
    pub fn new(api: ApiClient) -> Self {
        Self {
            countries: CatalogService::new(api.clone()),
            departments: CatalogService::new(api.clone()),
            cities: CatalogService::new(api.clone()),
            city_zones: CatalogService::new(api.clone()),
            neighborhoods: CatalogService::new(api.clone()),
            agents: CatalogService::new(api.clone()),
            owners: CatalogService::new(api.clone()),
            properties: PropertyService::new(api.clone()),
            gallery: GalleryImageService::new(api.clone()),
            floor_plans: FloorPlanService::new(api.clone()),
            private_files: PrivateFileService::new(api.clone()),
            files: FileService::new(api.clone()),
            nearby_facilities: NearbyFacilityService::new(api.clone()),
            rental_configs: RentalConfigService::new(api),
        }
    }
}
