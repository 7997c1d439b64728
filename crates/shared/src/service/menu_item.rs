use crate::{
    abstract_trait::{DynMenuItemRepository, MenuItemServiceTrait},
    domain::{
        enums::{Allergen, Category, LookupEnum},
        requests::{CreateMenuItemRequest, UpdateMenuItemRequest},
        responses::MenuItemResponse,
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::info;

pub struct MenuItemService {
    menu_item_repository: DynMenuItemRepository,
}

impl MenuItemService {
    pub fn new(menu_item_repository: DynMenuItemRepository) -> Self {
        Self {
            menu_item_repository,
        }
    }

    fn allergen_names(ids: &[i64]) -> Result<Vec<String>, ServiceError> {
        ids.iter()
            .map(|id| {
                Allergen::from_id(*id)
                    .map(|a| a.as_str().to_string())
                    .ok_or_else(|| ServiceError::not_found("Allergen", *id))
            })
            .collect()
    }

    async fn to_response(
        &self,
        item: crate::model::MenuItem,
    ) -> Result<MenuItemResponse, ServiceError> {
        let allergen_ids = self.menu_item_repository.allergens_of(item.id).await?;
        let allergens = Self::allergen_names(&allergen_ids)?;
        Ok(MenuItemResponse::from_model(item, allergens))
    }
}

#[async_trait]
impl MenuItemServiceTrait for MenuItemService {
    async fn get_menu_items(&self) -> Result<Vec<MenuItemResponse>, ServiceError> {
        let items = self.menu_item_repository.find_all().await?;

        let mut responses = Vec::with_capacity(items.len());
        for item in items {
            responses.push(self.to_response(item).await?);
        }

        Ok(responses)
    }

    async fn get_menu_item(&self, id: i64) -> Result<MenuItemResponse, ServiceError> {
        let item = self
            .menu_item_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Menu item", id))?;

        self.to_response(item).await
    }

    async fn get_menu_items_by_category(
        &self,
        category: &str,
    ) -> Result<Vec<MenuItemResponse>, ServiceError> {
        let category = Category::parse(category)?;
        let items = self
            .menu_item_repository
            .find_by_category(category.as_str())
            .await?;

        let mut responses = Vec::with_capacity(items.len());
        for item in items {
            responses.push(self.to_response(item).await?);
        }

        Ok(responses)
    }

    async fn create_menu_item(
        &self,
        input: &CreateMenuItemRequest,
    ) -> Result<MenuItemResponse, ServiceError> {
        if self
            .menu_item_repository
            .exists_by_name(&input.name, None)
            .await?
        {
            return Err(ServiceError::InvalidArgument(format!(
                "Menu item with name {} already exists",
                input.name
            )));
        }

        let category = Category::parse(&input.category)?;
        // Unknown allergen ids fail before anything is written.
        let allergens = Self::allergen_names(&input.allergen_ids)?;

        let item = self
            .menu_item_repository
            .create(input, category.as_str())
            .await?;

        Ok(MenuItemResponse::from_model(item, allergens))
    }

    async fn update_menu_item(
        &self,
        id: i64,
        input: &UpdateMenuItemRequest,
    ) -> Result<MenuItemResponse, ServiceError> {
        self.menu_item_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Menu item", id))?;

        if self
            .menu_item_repository
            .exists_by_name(&input.name, Some(id))
            .await?
        {
            return Err(ServiceError::InvalidArgument(format!(
                "Menu item with name {} already exists",
                input.name
            )));
        }

        let category = Category::parse(&input.category)?;
        let allergens = Self::allergen_names(&input.allergen_ids)?;

        let item = self
            .menu_item_repository
            .update(id, input, category.as_str())
            .await?;

        Ok(MenuItemResponse::from_model(item, allergens))
    }

    async fn delete_menu_item(&self, id: i64) -> Result<(), ServiceError> {
        self.menu_item_repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Menu item", id))?;

        self.menu_item_repository.delete(id).await?;
        info!("✅ Deleted menu item {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::MenuItemRepositoryTrait, errors::RepositoryError, model::MenuItem,
    };
    use rust_decimal::Decimal;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    struct InMemoryMenuRepo {
        items: Mutex<Vec<MenuItem>>,
        allergens: Mutex<Vec<(i64, i64)>>,
        next_id: Mutex<i64>,
    }

    impl InMemoryMenuRepo {
        fn empty() -> Self {
            Self {
                items: Mutex::new(Vec::new()),
                allergens: Mutex::new(Vec::new()),
                next_id: Mutex::new(1),
            }
        }
    }

    #[async_trait]
    impl MenuItemRepositoryTrait for InMemoryMenuRepo {
        async fn find_all(&self) -> Result<Vec<MenuItem>, RepositoryError> {
            Ok(self.items.lock().await.clone())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<MenuItem>, RepositoryError> {
            Ok(self.items.lock().await.iter().find(|i| i.id == id).cloned())
        }

        async fn find_by_category(
            &self,
            category: &str,
        ) -> Result<Vec<MenuItem>, RepositoryError> {
            Ok(self
                .items
                .lock()
                .await
                .iter()
                .filter(|i| i.category == category)
                .cloned()
                .collect())
        }

        async fn exists_by_name(
            &self,
            name: &str,
            exclude_id: Option<i64>,
        ) -> Result<bool, RepositoryError> {
            Ok(self
                .items
                .lock()
                .await
                .iter()
                .any(|i| i.name == name && Some(i.id) != exclude_id))
        }

        async fn create(
            &self,
            input: &CreateMenuItemRequest,
            category: &str,
        ) -> Result<MenuItem, RepositoryError> {
            let mut next = self.next_id.lock().await;
            let item = MenuItem {
                id: *next,
                name: input.name.clone(),
                description: input.description.clone(),
                price: input.price,
                category: category.to_string(),
            };
            *next += 1;
            self.items.lock().await.push(item.clone());
            let mut allergens = self.allergens.lock().await;
            for aid in &input.allergen_ids {
                allergens.push((item.id, *aid));
            }
            Ok(item)
        }

        async fn update(
            &self,
            id: i64,
            input: &UpdateMenuItemRequest,
            category: &str,
        ) -> Result<MenuItem, RepositoryError> {
            let mut items = self.items.lock().await;
            let item = items
                .iter_mut()
                .find(|i| i.id == id)
                .ok_or(RepositoryError::NotFound)?;
            item.name = input.name.clone();
            item.description = input.description.clone();
            item.price = input.price;
            item.category = category.to_string();
            let mut allergens = self.allergens.lock().await;
            allergens.retain(|(mid, _)| *mid != id);
            for aid in &input.allergen_ids {
                allergens.push((id, *aid));
            }
            Ok(item.clone())
        }

        async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
            self.items.lock().await.retain(|i| i.id != id);
            self.allergens.lock().await.retain(|(mid, _)| *mid != id);
            Ok(())
        }

        async fn allergens_of(&self, menu_item_id: i64) -> Result<Vec<i64>, RepositoryError> {
            Ok(self
                .allergens
                .lock()
                .await
                .iter()
                .filter(|(mid, _)| *mid == menu_item_id)
                .map(|(_, aid)| *aid)
                .collect())
        }
    }

    fn svc() -> MenuItemService {
        MenuItemService::new(Arc::new(InMemoryMenuRepo::empty()))
    }

    fn create_req(name: &str, category: &str, allergen_ids: Vec<i64>) -> CreateMenuItemRequest {
        CreateMenuItemRequest {
            name: name.into(),
            description: "".into(),
            price: Decimal::new(950, 2),
            category: category.into(),
            allergen_ids,
        }
    }

    #[tokio::test]
    async fn create_coerces_category_and_maps_allergens() {
        let svc = svc();

        let created = svc
            .create_menu_item(&create_req(
                "Margherita",
                "main_course",
                vec![Allergen::Gluten.id(), Allergen::Lactose.id()],
            ))
            .await
            .unwrap();

        assert_eq!(created.category, "MAIN_COURSE");
        assert_eq!(created.allergens, vec!["GLUTEN", "LACTOSE"]);
    }

    #[tokio::test]
    async fn unknown_category_is_rejected() {
        let svc = svc();

        let err = svc
            .create_menu_item(&create_req("Soup", "BRUNCH", vec![]))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InvalidArgument(msg) if msg == "Invalid category: BRUNCH"));
    }

    #[tokio::test]
    async fn unknown_allergen_id_is_not_found() {
        let svc = svc();

        let err = svc
            .create_menu_item(&create_req("Soup", "APPETIZER", vec![999]))
            .await
            .unwrap_err();

        assert!(
            matches!(err, ServiceError::NotFound(msg) if msg == "Allergen not found with id: 999")
        );
    }

    #[tokio::test]
    async fn name_uniqueness_excludes_own_row_on_update() {
        let svc = svc();
        let first = svc
            .create_menu_item(&create_req("Margherita", "MAIN_COURSE", vec![]))
            .await
            .unwrap();
        svc.create_menu_item(&create_req("Calzone", "MAIN_COURSE", vec![]))
            .await
            .unwrap();

        // Same name, same row: allowed.
        svc.update_menu_item(
            first.id,
            &UpdateMenuItemRequest {
                name: "Margherita".into(),
                description: "classic".into(),
                price: Decimal::new(1050, 2),
                category: "MAIN_COURSE".into(),
                allergen_ids: vec![],
            },
        )
        .await
        .unwrap();

        // Someone else's name: rejected.
        let err = svc
            .update_menu_item(
                first.id,
                &UpdateMenuItemRequest {
                    name: "Calzone".into(),
                    description: "".into(),
                    price: Decimal::new(1050, 2),
                    category: "MAIN_COURSE".into(),
                    allergen_ids: vec![],
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn update_replaces_allergen_set() {
        let svc = svc();
        let created = svc
            .create_menu_item(&create_req(
                "Margherita",
                "MAIN_COURSE",
                vec![Allergen::Gluten.id()],
            ))
            .await
            .unwrap();

        let updated = svc
            .update_menu_item(
                created.id,
                &UpdateMenuItemRequest {
                    name: "Margherita".into(),
                    description: "".into(),
                    price: Decimal::new(950, 2),
                    category: "MAIN_COURSE".into(),
                    allergen_ids: vec![Allergen::Soy.id()],
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.allergens, vec!["SOY"]);

        let fetched = svc.get_menu_item(created.id).await.unwrap();
        assert_eq!(fetched.allergens, vec!["SOY"]);
    }
}
