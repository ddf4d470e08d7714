//! Unit tests for `ItemServiceImpl` using mocks.

use chrono::Utc;
use mockall::mock;
use mockall::predicate::*;

use inventory_service_core::domains::category::CatalogueCategory;
use inventory_service_core::domains::catalogue_item::CatalogueItem;
use inventory_service_core::domains::dimension::UsageStatus;
use inventory_service_core::domains::item::Item;
use inventory_service_core::domains::property::{Property, PropertyScalar, PropertyType, PropertyValue};
use inventory_service_core::domains::system::{Importance, System};
use inventory_service_core::dto::catalogue_item::PropertyValuePostRequest;
use inventory_service_core::dto::item::ItemPostRequest;
use inventory_service_core::repositories::category::{CatalogueCategoryRepository, ParentFilter};
use inventory_service_core::repositories::catalogue_item::CatalogueItemRepository;
use inventory_service_core::repositories::dimension::UsageStatusRepository;
use inventory_service_core::repositories::item::ItemRepository;
use inventory_service_core::repositories::system::SystemRepository;
use inventory_service_core::services::item::ItemService;
use inventory_service_core::{AppError, Result};
use shared_types::ObjectId;

use super::ItemServiceImpl;

mock! {
    pub ItemRepo {}

    #[async_trait::async_trait]
    impl ItemRepository for ItemRepo {
        async fn create(&self, item: Item) -> Result<Item>;
        async fn find_by_id(&self, id: ObjectId) -> Result<Option<Item>>;
        async fn update(&self, item: Item) -> Result<Item>;
        async fn delete(&self, id: ObjectId) -> Result<bool>;
        async fn list(
            &self,
            catalogue_item_id: Option<ObjectId>,
            system_id: Option<ObjectId>,
            page: u32,
            page_size: u32,
        ) -> Result<(Vec<Item>, i64)>;
    }
}

mock! {
    pub CatalogueItemRepoForItems {}

    #[async_trait::async_trait]
    impl CatalogueItemRepository for CatalogueItemRepoForItems {
        async fn create(&self, item: CatalogueItem) -> Result<CatalogueItem>;
        async fn find_by_id(&self, id: ObjectId) -> Result<Option<CatalogueItem>>;
        async fn update(&self, item: CatalogueItem) -> Result<CatalogueItem>;
        async fn delete(&self, id: ObjectId) -> Result<bool>;
        async fn list(
            &self,
            catalogue_category_id: Option<ObjectId>,
            page: u32,
            page_size: u32,
        ) -> Result<(Vec<CatalogueItem>, i64)>;
        async fn list_ids_by_category(&self, catalogue_category_id: ObjectId) -> Result<Vec<ObjectId>>;
        async fn has_items(&self, catalogue_item_id: ObjectId) -> Result<bool>;
    }
}

mock! {
    pub CategoryRepoForItems {}

    #[async_trait::async_trait]
    impl CatalogueCategoryRepository for CategoryRepoForItems {
        async fn create(&self, category: CatalogueCategory) -> Result<CatalogueCategory>;
        async fn find_by_id(&self, id: ObjectId) -> Result<Option<CatalogueCategory>>;
        async fn find_by_parent_and_code(
            &self,
            parent_id: Option<ObjectId>,
            code: &str,
        ) -> Result<Option<CatalogueCategory>>;
        async fn update(&self, category: CatalogueCategory) -> Result<CatalogueCategory>;
        async fn delete(&self, id: ObjectId) -> Result<bool>;
        async fn list(
            &self,
            filter: ParentFilter,
            page: u32,
            page_size: u32,
        ) -> Result<(Vec<CatalogueCategory>, i64)>;
        async fn has_child_categories(&self, id: ObjectId) -> Result<bool>;
        async fn has_child_catalogue_items(&self, id: ObjectId) -> Result<bool>;
        async fn get_breadcrumbs(&self, id: ObjectId) -> Result<inventory_service_core::domains::category::Breadcrumbs>;
        async fn would_create_cycle(&self, moving_id: ObjectId, destination_id: ObjectId) -> Result<bool>;
        async fn add_property(
            &self,
            category_id: ObjectId,
            property: Property,
            default_value: Option<PropertyScalar>,
        ) -> Result<CatalogueCategory>;
        async fn update_property(
            &self,
            category_id: ObjectId,
            property: Property,
            rename_occurred: bool,
        ) -> Result<CatalogueCategory>;
    }
}

mock! {
    pub SystemRepoForItems {}

    #[async_trait::async_trait]
    impl SystemRepository for SystemRepoForItems {
        async fn create(&self, system: System) -> Result<System>;
        async fn find_by_id(&self, id: ObjectId) -> Result<Option<System>>;
        async fn find_by_parent_and_code(
            &self,
            parent_id: Option<ObjectId>,
            code: &str,
        ) -> Result<Option<System>>;
        async fn update(&self, system: System) -> Result<System>;
        async fn delete(&self, id: ObjectId) -> Result<bool>;
        async fn list(
            &self,
            filter: ParentFilter,
            page: u32,
            page_size: u32,
        ) -> Result<(Vec<System>, i64)>;
        async fn has_child_systems(&self, id: ObjectId) -> Result<bool>;
        async fn has_child_items(&self, id: ObjectId) -> Result<bool>;
        async fn get_breadcrumbs(&self, id: ObjectId) -> Result<inventory_service_core::domains::category::Breadcrumbs>;
        async fn would_create_cycle(&self, moving_id: ObjectId, destination_id: ObjectId) -> Result<bool>;
    }
}

mock! {
    pub UsageStatusRepoForItems {}

    #[async_trait::async_trait]
    impl UsageStatusRepository for UsageStatusRepoForItems {
        async fn create(&self, status: UsageStatus) -> Result<UsageStatus>;
        async fn find_by_id(&self, id: ObjectId) -> Result<Option<UsageStatus>>;
        async fn find_by_code(&self, code: &str) -> Result<Option<UsageStatus>>;
        async fn list(&self, page: u32, page_size: u32) -> Result<(Vec<UsageStatus>, i64)>;
        async fn delete(&self, id: ObjectId) -> Result<bool>;
        async fn is_referenced_by_any_item(&self, id: ObjectId) -> Result<bool>;
    }
}

fn make_system() -> System {
    let now = Utc::now();
    System {
        id: ObjectId::new(),
        name: "Lab 1".to_string(),
        code: "lab-1".to_string(),
        parent_id: None,
        importance: Importance::Low,
        description: None,
        location: None,
        owner: None,
        created_time: now,
        modified_time: now,
    }
}

fn make_usage_status() -> UsageStatus {
    let now = Utc::now();
    UsageStatus {
        id: ObjectId::new(),
        value: "New".to_string(),
        code: "new".to_string(),
        created_time: now,
        modified_time: now,
    }
}

fn make_catalogue_item(category_id: ObjectId) -> CatalogueItem {
    let now = Utc::now();
    CatalogueItem {
        id: ObjectId::new(),
        catalogue_category_id: category_id,
        manufacturer_id: ObjectId::new(),
        name: "330 Ohm Resistor".to_string(),
        description: None,
        cost_gbp: None,
        cost_to_rework_gbp: None,
        days_to_replace: None,
        days_to_rework: None,
        drawing_number: None,
        drawing_link: None,
        item_model_number: None,
        notes: None,
        is_obsolete: false,
        obsolete_reason: None,
        obsolete_replacement_catalogue_item_id: None,
        properties: vec![],
        created_time: now,
        modified_time: now,
    }
}

fn make_leaf_category(properties: Vec<Property>) -> CatalogueCategory {
    let now = Utc::now();
    CatalogueCategory {
        id: ObjectId::new(),
        name: "Resistors".to_string(),
        code: "resistors".to_string(),
        parent_id: None,
        is_leaf: true,
        properties,
        created_time: now,
        modified_time: now,
    }
}

fn mandatory_number_property(id: ObjectId) -> Property {
    Property {
        id,
        name: "Resistance".to_string(),
        prop_type: PropertyType::Number,
        unit_id: None,
        unit: None,
        mandatory: true,
        allowed_values: None,
    }
}

struct Fixture {
    property_id: ObjectId,
    category_id: ObjectId,
    catalogue_item_id: ObjectId,
    system_id: ObjectId,
    usage_status_id: ObjectId,
}

fn setup(
    schema: Vec<Property>,
) -> (
    Fixture,
    MockCatalogueItemRepoForItems,
    MockCategoryRepoForItems,
    MockSystemRepoForItems,
    MockUsageStatusRepoForItems,
) {
    let category = make_leaf_category(schema);
    let category_id = category.id;
    let catalogue_item = make_catalogue_item(category_id);
    let catalogue_item_id = catalogue_item.id;
    let system = make_system();
    let system_id = system.id;
    let usage_status = make_usage_status();
    let usage_status_id = usage_status.id;
    let property_id = category
        .properties
        .first()
        .map(|p| p.id)
        .unwrap_or_else(ObjectId::new);

    let mut catalogue_items = MockCatalogueItemRepoForItems::new();
    catalogue_items
        .expect_find_by_id()
        .with(eq(catalogue_item_id))
        .returning(move |_| Ok(Some(catalogue_item.clone())));

    let mut categories = MockCategoryRepoForItems::new();
    categories
        .expect_find_by_id()
        .with(eq(category_id))
        .returning(move |_| Ok(Some(category.clone())));

    let mut systems = MockSystemRepoForItems::new();
    systems
        .expect_find_by_id()
        .with(eq(system_id))
        .returning(move |_| Ok(Some(system.clone())));

    let mut usage_statuses = MockUsageStatusRepoForItems::new();
    usage_statuses
        .expect_find_by_id()
        .with(eq(usage_status_id))
        .returning(move |_| Ok(Some(usage_status.clone())));

    (
        Fixture {
            property_id,
            category_id,
            catalogue_item_id,
            system_id,
            usage_status_id,
        },
        catalogue_items,
        categories,
        systems,
        usage_statuses,
    )
}

fn base_request(fx: &Fixture) -> ItemPostRequest {
    ItemPostRequest {
        catalogue_item_id: fx.catalogue_item_id,
        system_id: fx.system_id,
        usage_status_id: fx.usage_status_id,
        purchase_order_number: None,
        warranty_end_date: None,
        asset_number: None,
        serial_number: None,
        delivered_date: None,
        is_defective: false,
        notes: None,
        properties: vec![],
    }
}

#[tokio::test]
async fn create_accepts_mandatory_property_omitted_entirely() {
    let property_id = ObjectId::new();
    let (fx, catalogue_items, categories, systems, usage_statuses) =
        setup(vec![mandatory_number_property(property_id)]);
    let _ = fx.category_id;

    let mut repo = MockItemRepo::new();
    repo.expect_create().returning(|item| Ok(item));

    let service = ItemServiceImpl::new(repo, catalogue_items, categories, systems, usage_statuses);
    let request = base_request(&fx);

    let item = service.create_item(request).await.unwrap();
    assert_eq!(item.properties.len(), 0);
}

#[tokio::test]
async fn create_rejects_mandatory_property_given_explicit_null() {
    let property_id = ObjectId::new();
    let (fx, catalogue_items, categories, systems, usage_statuses) =
        setup(vec![mandatory_number_property(property_id)]);
    assert_eq!(fx.property_id, property_id);

    let repo = MockItemRepo::new();
    let service = ItemServiceImpl::new(repo, catalogue_items, categories, systems, usage_statuses);

    let mut request = base_request(&fx);
    request.properties = vec![PropertyValuePostRequest {
        id: property_id,
        value: None,
    }];

    let err = service.create_item(request).await.unwrap_err();
    match err {
        AppError::MissingMandatoryProperty(msg) => {
            assert_eq!(msg, format!("Mandatory property with ID '{property_id}' cannot be None."));
        }
        other => panic!("expected MissingMandatoryProperty, got {other:?}"),
    }
}

#[tokio::test]
async fn create_rejects_wrong_type_override_with_plain_type_name() {
    let property_id = ObjectId::new();
    let (fx, catalogue_items, categories, systems, usage_statuses) =
        setup(vec![mandatory_number_property(property_id)]);

    let repo = MockItemRepo::new();
    let service = ItemServiceImpl::new(repo, catalogue_items, categories, systems, usage_statuses);

    let mut request = base_request(&fx);
    request.properties = vec![PropertyValuePostRequest {
        id: property_id,
        value: Some(PropertyScalar::Boolean(true)),
    }];

    let err = service.create_item(request).await.unwrap_err();
    match err {
        AppError::InvalidPropertyType(msg) => {
            assert_eq!(
                msg,
                format!("Invalid value for property with ID '{property_id}'. Must be of type number.")
            );
        }
        other => panic!("expected InvalidPropertyType, got {other:?}"),
    }
}

#[tokio::test]
async fn get_item_resolves_inherited_properties_from_catalogue_item() {
    let property_id = ObjectId::new();
    let (fx, mut catalogue_items, categories, systems, usage_statuses) =
        setup(vec![mandatory_number_property(property_id)]);

    let item_id = ObjectId::new();
    let catalogue_item_id = fx.catalogue_item_id;
    let base_value = PropertyValue {
        id: property_id,
        name: "Resistance".to_string(),
        unit_id: None,
        unit: None,
        value: Some(PropertyScalar::Number(330.0)),
    };
    let mut catalogue_item_with_props = make_catalogue_item(fx.category_id);
    catalogue_item_with_props.id = catalogue_item_id;
    catalogue_item_with_props.properties = vec![base_value];
    catalogue_items = MockCatalogueItemRepoForItems::new();
    catalogue_items
        .expect_find_by_id()
        .with(eq(catalogue_item_id))
        .returning(move |_| Ok(Some(catalogue_item_with_props.clone())));

    let item = Item {
        id: item_id,
        catalogue_item_id,
        system_id: fx.system_id,
        usage_status_id: fx.usage_status_id,
        usage_status: "New".to_string(),
        purchase_order_number: None,
        warranty_end_date: None,
        asset_number: None,
        serial_number: None,
        delivered_date: None,
        is_defective: false,
        notes: None,
        properties: vec![],
        created_time: Utc::now(),
        modified_time: Utc::now(),
    };

    let mut repo = MockItemRepo::new();
    repo.expect_find_by_id()
        .with(eq(item_id))
        .returning(move |_| Ok(Some(item.clone())));

    let service = ItemServiceImpl::new(repo, catalogue_items, categories, systems, usage_statuses);
    let resolved = service.get_item(item_id).await.unwrap();
    assert_eq!(resolved.properties[0].value, Some(PropertyScalar::Number(330.0)));
}

#[tokio::test]
async fn delete_item_reports_missing() {
    let id = ObjectId::new();
    let mut repo = MockItemRepo::new();
    repo.expect_delete().with(eq(id)).returning(|_| Ok(false));

    let catalogue_items = MockCatalogueItemRepoForItems::new();
    let categories = MockCategoryRepoForItems::new();
    let systems = MockSystemRepoForItems::new();
    let usage_statuses = MockUsageStatusRepoForItems::new();
    let service = ItemServiceImpl::new(repo, catalogue_items, categories, systems, usage_statuses);

    let err = service.delete_item(id).await.unwrap_err();
    assert!(matches!(err, AppError::Missing(_)));
}
