//! Request/response payloads (DTOs) for the inventory service API.

pub mod catalogue_item;
pub mod category;
pub mod common;
pub mod dimension;
pub mod item;
pub mod property;
pub mod system;

pub use catalogue_item::{
    CatalogueItemListQuery, CatalogueItemListResponse, CatalogueItemPatchRequest,
    CatalogueItemPostRequest, CatalogueItemResponse, PropertyValuePostRequest,
};
pub use category::{
    BreadcrumbsResponse, CategoryListQuery, CategoryListResponse, CategoryPatchRequest,
    CategoryPostRequest, CategoryResponse,
};
pub use common::PaginationInfo;
pub use dimension::{
    DimensionListQuery, ManufacturerListResponse, ManufacturerPatchRequest,
    ManufacturerPostRequest, ManufacturerResponse, UnitPostRequest, UnitResponse,
    UsageStatusPostRequest, UsageStatusResponse,
};
pub use item::{ItemListQuery, ItemListResponse, ItemPatchRequest, ItemPostRequest, ItemResponse};
pub use property::{PropertyDefinitionRequest, PropertyPatchRequest, PropertyPostRequest};
pub use system::{
    SystemListQuery, SystemListResponse, SystemPatchRequest, SystemPostRequest, SystemResponse,
};
