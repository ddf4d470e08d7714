//! Unit tests for `CatalogueCategoryServiceImpl` using mocks.

use chrono::Utc;
use mockall::mock;
use mockall::predicate::*;

use inventory_service_core::domains::category::{Breadcrumbs, CatalogueCategory};
use inventory_service_core::domains::dimension::Unit;
use inventory_service_core::dto::category::{CategoryListQuery, CategoryPatchRequest, CategoryPostRequest};
use inventory_service_core::dto::property::PropertyPatchRequest;
use inventory_service_core::repositories::category::{CatalogueCategoryRepository, ParentFilter};
use inventory_service_core::repositories::dimension::UnitRepository;
use inventory_service_core::services::category::CatalogueCategoryService;
use inventory_service_core::{AppError, Result};
use shared_types::ObjectId;

use super::CatalogueCategoryServiceImpl;

mock! {
    pub CategoryRepo {}

    #[async_trait::async_trait]
    impl CatalogueCategoryRepository for CategoryRepo {
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
        async fn get_breadcrumbs(&self, id: ObjectId) -> Result<Breadcrumbs>;
        async fn would_create_cycle(&self, moving_id: ObjectId, destination_id: ObjectId) -> Result<bool>;
        async fn add_property(
            &self,
            category_id: ObjectId,
            property: inventory_service_core::domains::property::Property,
            default_value: Option<inventory_service_core::domains::property::PropertyScalar>,
        ) -> Result<CatalogueCategory>;
        async fn update_property(
            &self,
            category_id: ObjectId,
            property: inventory_service_core::domains::property::Property,
            rename_occurred: bool,
        ) -> Result<CatalogueCategory>;
    }
}

mock! {
    pub UnitRepo {}

    #[async_trait::async_trait]
    impl UnitRepository for UnitRepo {
        async fn create(&self, unit: Unit) -> Result<Unit>;
        async fn find_by_id(&self, id: ObjectId) -> Result<Option<Unit>>;
        async fn find_by_code(&self, code: &str) -> Result<Option<Unit>>;
        async fn list(&self, page: u32, page_size: u32) -> Result<(Vec<Unit>, i64)>;
        async fn delete(&self, id: ObjectId) -> Result<bool>;
        async fn is_referenced_by_any_category(&self, id: ObjectId) -> Result<bool>;
    }
}

fn make_category(is_leaf: bool) -> CatalogueCategory {
    let now = Utc::now();
    CatalogueCategory {
        id: ObjectId::new(),
        name: "Resistors".to_string(),
        code: "resistors".to_string(),
        parent_id: None,
        is_leaf,
        properties: vec![],
        created_time: now,
        modified_time: now,
    }
}

#[tokio::test]
async fn create_category_rejects_duplicate_code_in_same_parent() {
    let mut repo = MockCategoryRepo::new();
    repo.expect_find_by_parent_and_code()
        .returning(|_, _| Ok(Some(make_category(true))));

    let units = MockUnitRepo::new();
    let service = CatalogueCategoryServiceImpl::new(repo, units);

    let request = CategoryPostRequest {
        name: "Resistors".to_string(),
        parent_id: None,
        is_leaf: true,
        properties: vec![],
    };

    let err = service.create_category(request).await.unwrap_err();
    assert!(matches!(err, AppError::Duplicate(_)));
}

#[tokio::test]
async fn create_category_rejects_leaf_parent() {
    let parent_id = ObjectId::new();
    let mut repo = MockCategoryRepo::new();
    repo.expect_find_by_id()
        .with(eq(parent_id))
        .returning(|_| Ok(Some(make_category(true))));

    let units = MockUnitRepo::new();
    let service = CatalogueCategoryServiceImpl::new(repo, units);

    let request = CategoryPostRequest {
        name: "Subcategory".to_string(),
        parent_id: Some(parent_id),
        is_leaf: true,
        properties: vec![],
    };

    let err = service.create_category(request).await.unwrap_err();
    assert!(matches!(err, AppError::LeafParent(_)));
}

#[tokio::test]
async fn update_category_rejects_structural_change_with_children() {
    let category = make_category(true);
    let id = category.id;

    let mut repo = MockCategoryRepo::new();
    repo.expect_find_by_id()
        .with(eq(id))
        .returning(move |_| Ok(Some(category.clone())));
    repo.expect_has_child_categories().returning(|_| Ok(true));
    repo.expect_has_child_catalogue_items().returning(|_| Ok(false));

    let units = MockUnitRepo::new();
    let service = CatalogueCategoryServiceImpl::new(repo, units);

    let patch = CategoryPatchRequest {
        is_leaf: Some(false),
        ..Default::default()
    };

    let err = service.update_category(id, patch).await.unwrap_err();
    assert!(matches!(err, AppError::ChildrenExist(_)));
}

#[tokio::test]
async fn delete_category_rejects_when_children_exist() {
    let category = make_category(true);
    let id = category.id;

    let mut repo = MockCategoryRepo::new();
    repo.expect_has_child_categories().returning(|_| Ok(false));
    repo.expect_has_child_catalogue_items().returning(|_| Ok(true));

    let units = MockUnitRepo::new();
    let service = CatalogueCategoryServiceImpl::new(repo, units);

    let err = service.delete_category(id).await.unwrap_err();
    assert!(matches!(err, AppError::ChildrenExist(_)));
}

#[tokio::test]
async fn add_property_rejects_on_non_leaf_category() {
    let category = make_category(false);
    let id = category.id;

    let mut repo = MockCategoryRepo::new();
    repo.expect_find_by_id()
        .with(eq(id))
        .returning(move |_| Ok(Some(category.clone())));

    let units = MockUnitRepo::new();
    let service = CatalogueCategoryServiceImpl::new(repo, units);

    let request = inventory_service_core::dto::property::PropertyPostRequest {
        name: "Resistance".to_string(),
        prop_type: inventory_service_core::domains::property::PropertyType::Number,
        unit_id: None,
        mandatory: false,
        allowed_values: None,
        default_value: None,
    };

    let err = service.add_property(id, request).await.unwrap_err();
    assert!(matches!(err, AppError::NonLeafCategoryForItem(_)));
}

#[tokio::test]
async fn update_property_rejects_removing_allowed_values() {
    use inventory_service_core::domains::property::{AllowedValues, Property, PropertyScalar, PropertyType};

    let mut category = make_category(true);
    let property = Property {
        id: ObjectId::new(),
        name: "Colour".to_string(),
        prop_type: PropertyType::String,
        unit_id: None,
        unit: None,
        mandatory: false,
        allowed_values: Some(AllowedValues::List {
            values: vec![PropertyScalar::Str("Red".to_string())],
        }),
    };
    category.properties.push(property.clone());
    let category_id = category.id;
    let property_id = property.id;

    let mut repo = MockCategoryRepo::new();
    repo.expect_find_by_id()
        .with(eq(category_id))
        .returning(move |_| Ok(Some(category.clone())));

    let units = MockUnitRepo::new();
    let service = CatalogueCategoryServiceImpl::new(repo, units);

    let patch = PropertyPatchRequest {
        name: None,
        allowed_values: Some(None),
    };

    let err = service
        .update_property(category_id, property_id, patch)
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidAction(_)));
}

#[tokio::test]
async fn list_categories_short_circuits_on_unparseable_parent_id() {
    let repo = MockCategoryRepo::new();
    let units = MockUnitRepo::new();
    let service = CatalogueCategoryServiceImpl::new(repo, units);

    let query = CategoryListQuery {
        parent_id: Some("not-an-object-id".to_string()),
        page: 1,
        page_size: 20,
    };

    let (categories, pagination) = service.list_categories(query).await.unwrap();
    assert!(categories.is_empty());
    assert_eq!(pagination.total_items, 0);
}
