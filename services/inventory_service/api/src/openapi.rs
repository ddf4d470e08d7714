//! OpenAPI schema registration.
//!
//! Handlers are not individually annotated with `#[utoipa::path]`; the
//! document below registers the request/response schemas so clients can
//! still generate typed bindings against them.

use utoipa::OpenApi;

use inventory_service_core::dto::catalogue_item::{
    CatalogueItemListResponse, CatalogueItemPatchRequest, CatalogueItemPostRequest,
    CatalogueItemResponse, PropertyValuePostRequest,
};
use inventory_service_core::dto::category::{
    BreadcrumbsResponse, CategoryListResponse, CategoryPatchRequest, CategoryPostRequest,
    CategoryResponse,
};
use inventory_service_core::dto::dimension::{
    ManufacturerListResponse, ManufacturerPatchRequest, ManufacturerPostRequest,
    ManufacturerResponse, UnitPostRequest, UnitResponse, UsageStatusPostRequest,
    UsageStatusResponse,
};
use inventory_service_core::dto::item::{
    ItemListResponse, ItemPatchRequest, ItemPostRequest, ItemResponse,
};
use inventory_service_core::dto::property::{PropertyPatchRequest, PropertyPostRequest};
use inventory_service_core::dto::system::{
    SystemListResponse, SystemPatchRequest, SystemPostRequest, SystemResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(),
    components(schemas(
        CategoryPostRequest,
        CategoryPatchRequest,
        CategoryResponse,
        CategoryListResponse,
        BreadcrumbsResponse,
        PropertyPostRequest,
        PropertyPatchRequest,
        CatalogueItemPostRequest,
        CatalogueItemPatchRequest,
        CatalogueItemResponse,
        CatalogueItemListResponse,
        PropertyValuePostRequest,
        ItemPostRequest,
        ItemPatchRequest,
        ItemResponse,
        ItemListResponse,
        SystemPostRequest,
        SystemPatchRequest,
        SystemResponse,
        SystemListResponse,
        UnitPostRequest,
        UnitResponse,
        UsageStatusPostRequest,
        UsageStatusResponse,
        ManufacturerPostRequest,
        ManufacturerPatchRequest,
        ManufacturerResponse,
        ManufacturerListResponse,
    )),
    tags(
        (name = "catalogue-categories", description = "Catalogue category tree and property schema"),
        (name = "catalogue-items", description = "Catalogue item management"),
        (name = "items", description = "Physical item tracking"),
        (name = "systems", description = "System tree"),
        (name = "units", description = "Unit of measure management"),
        (name = "usage-statuses", description = "Usage status management"),
        (name = "manufacturers", description = "Manufacturer management"),
    ),
    info(
        title = "Inventory Service API",
        version = "0.1.0",
        description = "Hierarchical inventory management backend",
        license(name = "MIT"),
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
    ),
)]
pub struct ApiDoc;

/// Export OpenAPI spec to YAML file (only with --features export-spec)
#[cfg(feature = "export-spec")]
pub fn export_spec() -> Result<(), Box<dyn std::error::Error>> {
    use std::path::Path;

    let openapi = ApiDoc::openapi();
    let yaml = serde_yaml::to_string(&openapi).map_err(std::io::Error::other)?;

    let path =
        Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../../../shared/openapi/inventory.yaml"));

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, yaml)?;

    eprintln!("OpenAPI spec exported to {:?}", path);
    Ok(())
}
