use std::fmt;

use crate::models::{
    EntityId, FloorPlanDraft, NearbyFacilityLink, OperationType, RentalConfigDraft,
};

/// Name of a validated field, as used for the inline error map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    Title,
    Description,
    Price,
    Currency,
    OperationType,
    PropertyType,
    Status,
    Bedrooms,
    Bathrooms,
    ParkingSpaces,
    Area,
    LotSize,
    YearBuilt,
    Floor,
    Address,
    Country,
    Department,
    City,
    CityZone,
    Neighborhood,
    Latitude,
    Longitude,
    Images,
    Amenities,
    Services,
    Featured,
    Premium,
    Visible,
    Agent,
    OwnerContact,
    FloorPlans,
    NearbyFacilities,
    RentalNightlyPrice,
    RentalMinNights,
    RentalMaxNights,
    RentalConfig,
}

impl FieldKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Title => "title",
            FieldKey::Description => "description",
            FieldKey::Price => "price",
            FieldKey::Currency => "currency",
            FieldKey::OperationType => "operationType",
            FieldKey::PropertyType => "propertyTypeId",
            FieldKey::Status => "statusId",
            FieldKey::Bedrooms => "bedrooms",
            FieldKey::Bathrooms => "bathrooms",
            FieldKey::ParkingSpaces => "parkingSpaces",
            FieldKey::Area => "area",
            FieldKey::LotSize => "lotSize",
            FieldKey::YearBuilt => "yearBuilt",
            FieldKey::Floor => "floor",
            FieldKey::Address => "address",
            FieldKey::Country => "countryId",
            FieldKey::Department => "departmentId",
            FieldKey::City => "cityId",
            FieldKey::CityZone => "cityZoneId",
            FieldKey::Neighborhood => "neighborhoodId",
            FieldKey::Latitude => "latitude",
            FieldKey::Longitude => "longitude",
            FieldKey::Images => "images",
            FieldKey::Amenities => "amenityIds",
            FieldKey::Services => "serviceIds",
            FieldKey::Featured => "featured",
            FieldKey::Premium => "premium",
            FieldKey::Visible => "visible",
            FieldKey::Agent => "agentId",
            FieldKey::OwnerContact => "ownerContactId",
            FieldKey::FloorPlans => "floorPlans",
            FieldKey::NearbyFacilities => "nearbyFacilities",
            FieldKey::RentalNightlyPrice => "rentalConfig.nightlyPrice",
            FieldKey::RentalMinNights => "rentalConfig.minNights",
            FieldKey::RentalMaxNights => "rentalConfig.maxNights",
            FieldKey::RentalConfig => "rentalConfig",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Change event emitted by a step for one field of the form.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldChange {
    Title(String),
    Description(String),
    Price(Option<f64>),
    Currency(String),
    OperationType(Option<OperationType>),
    PropertyType(Option<EntityId>),
    Status(Option<EntityId>),
    Bedrooms(Option<u32>),
    Bathrooms(Option<u32>),
    ParkingSpaces(Option<u32>),
    Area(Option<f64>),
    LotSize(Option<f64>),
    YearBuilt(Option<i32>),
    Floor(Option<i32>),
    Address(String),
    Country(Option<EntityId>),
    Department(Option<EntityId>),
    City(Option<EntityId>),
    CityZone(Option<EntityId>),
    Neighborhood(Option<EntityId>),
    Latitude(Option<f64>),
    Longitude(Option<f64>),
    Images(Vec<String>),
    Amenities(Vec<EntityId>),
    Services(Vec<EntityId>),
    Featured(bool),
    Premium(bool),
    Visible(bool),
    Agent(Option<EntityId>),
    OwnerContact(Option<EntityId>),
    FloorPlans(Vec<FloorPlanDraft>),
    NearbyFacilities(Vec<NearbyFacilityLink>),
    RentalConfig(RentalConfigDraft),
}

impl FieldChange {
    /// Fields whose inline errors become stale once this change is applied.
    pub fn keys(&self) -> &'static [FieldKey] {
        match self {
            FieldChange::Title(_) => &[FieldKey::Title],
            FieldChange::Description(_) => &[FieldKey::Description],
            FieldChange::Price(_) => &[FieldKey::Price],
            FieldChange::Currency(_) => &[FieldKey::Currency],
            FieldChange::OperationType(_) => &[
                FieldKey::OperationType,
                FieldKey::RentalNightlyPrice,
                FieldKey::RentalMinNights,
                FieldKey::RentalMaxNights,
            ],
            FieldChange::PropertyType(_) => &[FieldKey::PropertyType],
            FieldChange::Status(_) => &[FieldKey::Status],
            FieldChange::Bedrooms(_) => &[FieldKey::Bedrooms],
            FieldChange::Bathrooms(_) => &[FieldKey::Bathrooms],
            FieldChange::ParkingSpaces(_) => &[FieldKey::ParkingSpaces],
            FieldChange::Area(_) => &[FieldKey::Area],
            FieldChange::LotSize(_) => &[FieldKey::LotSize],
            FieldChange::YearBuilt(_) => &[FieldKey::YearBuilt],
            FieldChange::Floor(_) => &[FieldKey::Floor],
            FieldChange::Address(_) => &[FieldKey::Address],
            FieldChange::Country(_) => &[FieldKey::Country],
            FieldChange::Department(_) => &[FieldKey::Department],
            FieldChange::City(_) => &[FieldKey::City],
            FieldChange::CityZone(_) => &[FieldKey::CityZone],
            FieldChange::Neighborhood(_) => &[FieldKey::Neighborhood],
            FieldChange::Latitude(_) => &[FieldKey::Latitude],
            FieldChange::Longitude(_) => &[FieldKey::Longitude],
            FieldChange::Images(_) => &[FieldKey::Images],
            FieldChange::Amenities(_) => &[FieldKey::Amenities],
            FieldChange::Services(_) => &[FieldKey::Services],
            FieldChange::Featured(_) => &[FieldKey::Featured],
            FieldChange::Premium(_) => &[FieldKey::Premium],
            FieldChange::Visible(_) => &[FieldKey::Visible],
            FieldChange::Agent(_) => &[FieldKey::Agent],
            FieldChange::OwnerContact(_) => &[FieldKey::OwnerContact],
            FieldChange::FloorPlans(_) => &[FieldKey::FloorPlans],
            FieldChange::NearbyFacilities(_) => &[FieldKey::NearbyFacilities],
            FieldChange::RentalConfig(_) => &[
                FieldKey::RentalConfig,
                FieldKey::RentalNightlyPrice,
                FieldKey::RentalMinNights,
                FieldKey::RentalMaxNights,
            ],
        }
    }
}
