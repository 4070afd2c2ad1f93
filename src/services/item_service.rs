// src/services/item_service.rs
//
// Owns the in-memory item collection: the wiki seed plus anything the
// user added locally.

use std::collections::HashSet;
use std::sync::{Arc, RwLock};

use chrono::{NaiveDate, Utc};

use crate::domain::item::{validate_item, Item, ItemType, Rarity};
use crate::domain::RecordIdGenerator;
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, ItemAdded, NoticePosted, NoticeSeverity};
use crate::repositories::ItemRepository;

#[derive(Debug, Clone)]
pub struct CreateItemRequest {
    pub name: String,
    pub item_type: ItemType,
    pub rarity: Rarity,
    pub description: String,
    pub image_url: Option<String>,
    pub gold_value: Option<u32>,
    pub crit: Option<f32>,
    pub dodge: Option<f32>,
    pub fire_resist: Option<f32>,
    pub elec_resist: Option<f32>,
    pub source: Option<String>,
    pub submitted_by: Option<String>,
}

pub struct ItemService {
    items: RwLock<Vec<Item>>,
    item_repo: Arc<dyn ItemRepository>,
    ids: Arc<RecordIdGenerator>,
    event_bus: Arc<EventBus>,
}

impl ItemService {
    pub fn new(
        item_repo: Arc<dyn ItemRepository>,
        ids: Arc<RecordIdGenerator>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            item_repo,
            ids,
            event_bus,
        }
    }

    /// Install the wiki seed as the base collection
    pub fn install_seed(&self) {
        *self.items.write().unwrap() = seed_items(Utc::now().date_naive());
    }

    /// Merge locally persisted items; the base collection wins id ties
    pub fn hydrate_from_store(&self) -> AppResult<()> {
        let saved = self.item_repo.load()?;
        let mut items = self.items.write().unwrap();
        let existing: HashSet<u64> = items.iter().map(|item| item.id).collect();
        items.extend(saved.into_iter().filter(|item| !existing.contains(&item.id)));
        Ok(())
    }

    pub fn add(&self, request: CreateItemRequest) -> AppResult<u64> {
        let item = Item {
            id: self.ids.next(),
            name: request.name,
            item_type: request.item_type,
            rarity: request.rarity,
            description: request.description,
            image_url: request.image_url.filter(|s| !s.trim().is_empty()),
            gold_value: request.gold_value,
            crit: request.crit,
            dodge: request.dodge,
            fire_resist: request.fire_resist,
            elec_resist: request.elec_resist,
            source: request.source.filter(|s| !s.trim().is_empty()),
            date_added: Utc::now().date_naive(),
            submitted_by: request.submitted_by.filter(|s| !s.trim().is_empty()),
        };

        if let Err(violation) = validate_item(&item) {
            self.event_bus.emit(NoticePosted::new(
                violation.to_string(),
                NoticeSeverity::Error,
            ));
            return Err(AppError::Domain(violation));
        }

        let item_id = item.id;
        {
            let mut items = self.items.write().unwrap();
            items.push(item.clone());
            self.item_repo.save(&items);
        }

        self.event_bus.emit(ItemAdded::new(item_id, item.name));
        self.event_bus.emit(NoticePosted::new(
            "Item added locally. Submitting to the community database...".to_string(),
            NoticeSeverity::Success,
        ));

        Ok(item_id)
    }

    pub fn find(&self, id: u64) -> Option<Item> {
        self.items
            .read()
            .unwrap()
            .iter()
            .find(|item| item.id == id)
            .cloned()
    }

    pub fn list(&self) -> Vec<Item> {
        self.items.read().unwrap().clone()
    }
}

/// The wiki items every install starts with
fn seed_items(today: NaiveDate) -> Vec<Item> {
    let base = |id: u64, name: &str, item_type: ItemType, rarity: Rarity, description: &str| Item {
        id,
        name: name.to_string(),
        item_type,
        rarity,
        description: description.to_string(),
        image_url: None,
        gold_value: None,
        crit: None,
        dodge: None,
        fire_resist: None,
        elec_resist: None,
        source: None,
        date_added: today,
        submitted_by: Some("Wiki Data".to_string()),
    };

    let mut amberfire = base(
        1,
        "Amberfire Ring",
        ItemType::Accessory,
        Rarity::Rare,
        "Grants the ability to throw a fire knife when attacking",
    );
    amberfire.gold_value = Some(500);
    amberfire.crit = Some(5.0);
    amberfire.source = Some("Equipment drop or crafting".to_string());

    let mut soulplate = base(
        2,
        "Soulplate",
        ItemType::Armor,
        Rarity::Epic,
        "Allows charging a shield by 20% of max HP when an enemy dies",
    );
    soulplate.gold_value = Some(750);
    soulplate.dodge = Some(10.0);
    soulplate.fire_resist = Some(15.0);
    soulplate.elec_resist = Some(15.0);
    soulplate.source = Some("Boss drop or blueprint crafting".to_string());

    let mut ferocity = base(
        3,
        "Ferocity Ring",
        ItemType::Accessory,
        Rarity::Uncommon,
        "Adds rage each time you land a critical hit",
    );
    ferocity.gold_value = Some(300);
    ferocity.crit = Some(8.0);
    ferocity.source = Some("Equipment drop".to_string());

    let mut vest = base(
        4,
        "Battlethirsty Vest",
        ItemType::Armor,
        Rarity::Rare,
        "Crafted from Blueprint: Battlethirsty Vest, provides enhanced combat abilities",
    );
    vest.gold_value = Some(600);
    vest.crit = Some(3.0);
    vest.dodge = Some(5.0);
    vest.fire_resist = Some(10.0);
    vest.elec_resist = Some(10.0);
    vest.source = Some("Blueprint crafting (requires 320 Ore, 140 Wood)".to_string());

    vec![amberfire, soulplate, ferocity, vest]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_test_pool;
    use crate::events::create_event_bus;
    use crate::repositories::StoreItemRepository;
    use crate::store::SqliteKeyValueStore;

    fn service() -> ItemService {
        let pool = Arc::new(create_test_pool().unwrap());
        let store = Arc::new(SqliteKeyValueStore::new(pool));
        ItemService::new(
            Arc::new(StoreItemRepository::new(store)),
            Arc::new(RecordIdGenerator::new()),
            Arc::new(create_event_bus()),
        )
    }

    fn request(name: &str, description: &str) -> CreateItemRequest {
        CreateItemRequest {
            name: name.to_string(),
            item_type: ItemType::Weapon,
            rarity: Rarity::Rare,
            description: description.to_string(),
            image_url: None,
            gold_value: Some(120),
            crit: None,
            dodge: None,
            fire_resist: None,
            elec_resist: None,
            source: None,
            submitted_by: None,
        }
    }

    #[test]
    fn test_seed_installs_wiki_items() {
        let service = service();
        service.install_seed();

        let items = service.list();
        assert_eq!(items.len(), 4);
        assert_eq!(items[0].name, "Amberfire Ring");
        assert!(items.iter().all(|item| item.submitted_by.as_deref() == Some("Wiki Data")));
    }

    #[test]
    fn test_add_appends_and_persists() {
        let service = service();
        service.install_seed();

        let id = service
            .add(request("Ember Blade", "A blade wreathed in embers"))
            .unwrap();

        assert_eq!(service.list().len(), 5);
        assert_eq!(service.find(id).unwrap().name, "Ember Blade");
    }

    #[test]
    fn test_add_rejects_empty_description() {
        let service = service();
        service.install_seed();

        let result = service.add(request("Ember Blade", "  "));
        assert!(result.is_err());
        assert_eq!(service.list().len(), 4);
    }

    #[test]
    fn test_hydrate_merges_user_items_and_skips_seed_ids() {
        let pool = Arc::new(create_test_pool().unwrap());
        let store = Arc::new(SqliteKeyValueStore::new(pool));
        let repo: Arc<dyn ItemRepository> = Arc::new(StoreItemRepository::new(store));

        // A previous session saved the seed plus one user item
        let first = ItemService::new(
            Arc::clone(&repo),
            Arc::new(RecordIdGenerator::new()),
            Arc::new(create_event_bus()),
        );
        first.install_seed();
        first
            .add(request("Ember Blade", "A blade wreathed in embers"))
            .unwrap();

        let second = ItemService::new(
            repo,
            Arc::new(RecordIdGenerator::new()),
            Arc::new(create_event_bus()),
        );
        second.install_seed();
        second.hydrate_from_store().unwrap();

        let items = second.list();
        assert_eq!(items.len(), 5);
        assert_eq!(items.iter().filter(|i| i.name == "Amberfire Ring").count(), 1);
    }
}
