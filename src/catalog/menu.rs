//! Menu catalog implementation.
//!
//! ## Architecture
//!
//! - **Slab**: Storage for every catalog node, linked into one ordered list
//! - **HashIndex**: Item ID to handle mapping for O(1) average lookup
//!
//! The list and the index always describe the same set of items: every
//! insert and delete touches both before returning.
//!
//! ## Ordering
//!
//! New items go to the front, so the list is newest-first until
//! [`Catalog::sort_by_price`] reorders it. Sorting never touches the index,
//! which keys on ids, not positions.
//!
//! ## Example
//!
//! ```
//! use foodie_express::catalog::Catalog;
//! use foodie_express::types::{ItemId, Price};
//!
//! let mut catalog = Catalog::new();
//! let burger = catalog.add_item("Burger", Price::from_cents(550));
//! let fries = catalog.add_item("Fries", Price::from_cents(200));
//!
//! assert_eq!(burger, ItemId::new(1));
//! assert_eq!(catalog.find_by_id(fries).unwrap().name, "Fries");
//!
//! let names: Vec<&str> = catalog.list_all().map(|item| item.name.as_str()).collect();
//! assert_eq!(names, ["Fries", "Burger"]);
//! ```

use sha2::{Digest, Sha256};
use slab::Slab;

use crate::catalog::{merge_sort, HashIndex, ItemNode};
use crate::config::EngineConfig;
use crate::error::{DeliveryError, Result};
use crate::types::{ItemHandle, ItemId, MenuItem, Price};

/// Menu catalog: an ordered, singly linked list of items with a hash index.
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Node storage
    /// Key: slab index, Value: ItemNode
    items: Slab<ItemNode>,

    /// First node in catalog order
    head: Option<usize>,

    /// Item ID to handle mapping
    index: HashIndex,

    /// Next item ID to hand out
    next_id: u64,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// Create an empty catalog with the default bucket count
    pub fn new() -> Self {
        Self {
            items: Slab::new(),
            head: None,
            index: HashIndex::new(),
            next_id: 1,
        }
    }

    /// Create an empty catalog sized by `config`
    pub fn with_config(config: &EngineConfig) -> Self {
        Self {
            items: Slab::with_capacity(config.item_capacity),
            head: None,
            index: HashIndex::with_capacity(config.bucket_count, config.item_capacity),
            next_id: 1,
        }
    }

    // ========================================================================
    // Size
    // ========================================================================

    /// Number of items on the menu
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the menu is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// The ID the next added item will receive
    #[inline]
    pub fn peek_next_id(&self) -> ItemId {
        ItemId::new(self.next_id)
    }

    /// Read-only view of the hash index
    #[inline]
    pub fn index(&self) -> &HashIndex {
        &self.index
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Add an item at the front of the menu and return its new ID
    pub fn add_item(&mut self, name: impl Into<String>, price: Price) -> ItemId {
        let id = ItemId::new(self.next_id);
        self.next_id += 1;

        let mut node = ItemNode::new(MenuItem::new(id, name, price));
        node.next = self.head;
        let slot = self.items.insert(node);
        self.head = Some(slot);

        self.index.insert(id, ItemHandle::new(slot, id));
        id
    }

    /// Parse `price` and add the item
    ///
    /// # Errors
    ///
    /// [`DeliveryError::InvalidInput`] when the price is not a non-negative
    /// number. No ID is consumed in that case.
    pub fn add_item_parsed(&mut self, name: impl Into<String>, price: &str) -> Result<ItemId> {
        let price = Price::parse(price)?;
        Ok(self.add_item(name, price))
    }

    /// Replace the name and price of an existing item in place
    ///
    /// The item keeps its ID and its position in the list.
    pub fn edit_item(&mut self, id: ItemId, name: impl Into<String>, price: Price) -> Result<()> {
        let item = self.find_by_id_mut(id)?;
        item.name = name.into();
        item.price = price;
        Ok(())
    }

    /// Parse `price` and edit the item
    ///
    /// The price is validated before the lookup, so a bad price never
    /// mutates anything.
    pub fn edit_item_parsed(&mut self, id: ItemId, name: impl Into<String>, price: &str) -> Result<()> {
        let price = Price::parse(price)?;
        self.edit_item(id, name, price)
    }

    /// Remove an item from the menu and return it
    ///
    /// The list has no back links, so this walks from the head to find the
    /// predecessor. The index entry is removed once the node is unlinked.
    ///
    /// # Errors
    ///
    /// - [`DeliveryError::EmptyCatalog`] if the menu has no items
    /// - [`DeliveryError::NotFound`] if no item has this ID; nothing changes
    pub fn delete_item(&mut self, id: ItemId) -> Result<MenuItem> {
        if self.head.is_none() {
            return Err(DeliveryError::EmptyCatalog);
        }

        let mut prev: Option<usize> = None;
        let mut cursor = self.head;

        while let Some(slot) = cursor {
            let node = &self.items[slot];
            let next = node.next;
            if node.id() == id {
                match prev {
                    Some(p) => self.items[p].next = next,
                    None => self.head = next,
                }
                self.index.remove(id);
                return Ok(self.items.remove(slot).item);
            }
            prev = Some(slot);
            cursor = next;
        }

        Err(DeliveryError::NotFound { id })
    }

    /// Reorder the menu by ascending price (stable merge sort)
    ///
    /// Returns `false` without touching anything when there are fewer than
    /// two items.
    pub fn sort_by_price(&mut self) -> bool {
        match self.head {
            Some(first) if self.items[first].next.is_some() => {
                self.head = merge_sort(&mut self.items, self.head);
                true
            }
            _ => false,
        }
    }

    // ========================================================================
    // Lookup
    // ========================================================================

    /// Handle of the item with this ID
    pub fn handle_of(&self, id: ItemId) -> Result<ItemHandle> {
        self.index.find(id).ok_or(DeliveryError::NotFound { id })
    }

    /// Look up an item by ID through the hash index
    pub fn find_by_id(&self, id: ItemId) -> Result<&MenuItem> {
        let handle = self.handle_of(id)?;
        self.items
            .get(handle.slot())
            .map(|node| &node.item)
            .ok_or(DeliveryError::NotFound { id })
    }

    fn find_by_id_mut(&mut self, id: ItemId) -> Result<&mut MenuItem> {
        let handle = self.handle_of(id)?;
        self.items
            .get_mut(handle.slot())
            .map(|node| &mut node.item)
            .ok_or(DeliveryError::NotFound { id })
    }

    /// Check if an item with this ID is on the menu
    #[inline]
    pub fn contains(&self, id: ItemId) -> bool {
        self.index.contains(id)
    }

    /// Follow a handle taken earlier
    ///
    /// # Errors
    ///
    /// [`DeliveryError::DanglingReference`] if the item was deleted since the
    /// handle was taken. A recycled slot is detected by its different ID.
    pub fn resolve(&self, handle: ItemHandle) -> Result<&MenuItem> {
        self.items
            .get(handle.slot())
            .map(|node| &node.item)
            .filter(|item| item.id == handle.id())
            .ok_or(DeliveryError::DanglingReference { id: handle.id() })
    }

    /// Items whose name contains `needle` (case-sensitive), in menu order
    ///
    /// Yields nothing when no item matches.
    pub fn search_by_name<'a>(&'a self, needle: &'a str) -> impl Iterator<Item = &'a MenuItem> + 'a {
        self.list_all().filter(move |item| item.name_contains(needle))
    }

    /// All items in current menu order
    pub fn list_all(&self) -> Iter<'_> {
        Iter {
            items: &self.items,
            cursor: self.head,
        }
    }

    // ========================================================================
    // Fingerprint
    // ========================================================================

    /// SHA-256 over every item in menu order
    ///
    /// Two catalogs with the same items in the same order share a
    /// fingerprint. Slab placement does not affect it.
    pub fn fingerprint(&self) -> [u8; 32] {
        let mut buf = Vec::with_capacity(self.len() * 32);
        for item in self.list_all() {
            item.encode_into(&mut buf);
        }

        let mut hasher = Sha256::new();
        hasher.update(&buf);
        let digest = hasher.finalize();

        let mut root = [0u8; 32];
        root.copy_from_slice(&digest);
        root
    }

    /// Fingerprint as a hex string
    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint())
    }
}

/// Iterator over the menu in list order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    items: &'a Slab<ItemNode>,
    cursor: Option<usize>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a MenuItem;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.items.get(self.cursor?)?;
        self.cursor = node.next;
        Some(&node.item)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a MenuItem;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.list_all()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn price(cents: u64) -> Price {
        Price::from_cents(cents)
    }

    fn names(catalog: &Catalog) -> Vec<String> {
        catalog.list_all().map(|item| item.name.clone()).collect()
    }

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_item("Burger", price(550));
        catalog.add_item("Fries", price(200));
        catalog.add_item("Soda", price(150));
        catalog
    }

    #[test]
    fn test_catalog_new() {
        let catalog = Catalog::new();

        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.peek_next_id(), ItemId::new(1));
        assert_eq!(catalog.list_all().count(), 0);
    }

    #[test]
    fn test_catalog_with_config() {
        let config = EngineConfig::default().with_bucket_count(13).with_item_capacity(256);
        let catalog = Catalog::with_config(&config);

        assert_eq!(catalog.index().bucket_count(), 13);
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_add_assigns_ids_and_prepends() {
        let catalog = sample();

        assert_eq!(catalog.len(), 3);
        assert_eq!(names(&catalog), ["Soda", "Fries", "Burger"]);
        assert_eq!(catalog.find_by_id(ItemId::new(1)).unwrap().name, "Burger");
        assert_eq!(catalog.find_by_id(ItemId::new(3)).unwrap().name, "Soda");
        assert_eq!(catalog.peek_next_id(), ItemId::new(4));
    }

    #[test]
    fn test_add_parsed_rejects_bad_price() {
        let mut catalog = Catalog::new();

        assert!(matches!(catalog.add_item_parsed("Tea", "abc"), Err(DeliveryError::InvalidInput(_))));
        assert!(matches!(catalog.add_item_parsed("Tea", "-2"), Err(DeliveryError::InvalidInput(_))));
        assert!(catalog.is_empty());
        assert_eq!(catalog.peek_next_id(), ItemId::new(1));

        let id = catalog.add_item_parsed("Tea", "1.20").unwrap();
        assert_eq!(id, ItemId::new(1));
        assert_eq!(catalog.find_by_id(id).unwrap().price, price(120));
    }

    #[test]
    fn test_edit_in_place() {
        let mut catalog = sample();

        catalog.edit_item(ItemId::new(2), "Cheese Fries", price(275)).unwrap();

        let item = catalog.find_by_id(ItemId::new(2)).unwrap();
        assert_eq!(item.name, "Cheese Fries");
        assert_eq!(item.price, price(275));
        assert_eq!(names(&catalog), ["Soda", "Cheese Fries", "Burger"]);
    }

    #[test]
    fn test_edit_missing() {
        let mut catalog = sample();
        let before = catalog.fingerprint();

        let err = catalog.edit_item(ItemId::new(9), "Ghost", price(1)).unwrap_err();
        assert_eq!(err, DeliveryError::NotFound { id: ItemId::new(9) });
        assert_eq!(catalog.fingerprint(), before);
    }

    #[test]
    fn test_edit_parsed_bad_price_changes_nothing() {
        let mut catalog = sample();
        let before = catalog.fingerprint();

        let err = catalog.edit_item_parsed(ItemId::new(1), "Burger", "free").unwrap_err();
        assert!(matches!(err, DeliveryError::InvalidInput(_)));
        assert_eq!(catalog.fingerprint(), before);
    }

    #[test]
    fn test_delete_head_middle_tail() {
        let mut catalog = sample();
        catalog.add_item("Nuggets", price(400)); // order: Nuggets, Soda, Fries, Burger

        assert_eq!(catalog.delete_item(ItemId::new(3)).unwrap().name, "Soda");
        assert_eq!(names(&catalog), ["Nuggets", "Fries", "Burger"]);

        assert_eq!(catalog.delete_item(ItemId::new(4)).unwrap().name, "Nuggets");
        assert_eq!(names(&catalog), ["Fries", "Burger"]);

        assert_eq!(catalog.delete_item(ItemId::new(1)).unwrap().name, "Burger");
        assert_eq!(names(&catalog), ["Fries"]);

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.index().len(), 1);
        assert!(catalog.find_by_id(ItemId::new(1)).is_err());
        assert!(catalog.find_by_id(ItemId::new(2)).is_ok());
    }

    #[test]
    fn test_delete_missing_and_empty() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.delete_item(ItemId::new(1)), Err(DeliveryError::EmptyCatalog));

        let mut catalog = sample();
        assert_eq!(
            catalog.delete_item(ItemId::new(42)),
            Err(DeliveryError::NotFound { id: ItemId::new(42) })
        );
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.index().len(), 3);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut catalog = sample();
        catalog.delete_item(ItemId::new(3)).unwrap();

        let id = catalog.add_item("Water", price(100));
        assert_eq!(id, ItemId::new(4));
        assert!(catalog.find_by_id(ItemId::new(3)).is_err());
    }

    #[test]
    fn test_resolve_detects_recycled_slot() {
        let mut catalog = sample();
        let handle = catalog.handle_of(ItemId::new(2)).unwrap();
        assert_eq!(catalog.resolve(handle).unwrap().name, "Fries");

        catalog.delete_item(ItemId::new(2)).unwrap();
        assert_eq!(
            catalog.resolve(handle),
            Err(DeliveryError::DanglingReference { id: ItemId::new(2) })
        );

        // The slab hands the freed slot to the next insert
        let water = catalog.add_item("Water", price(100));
        assert_eq!(catalog.handle_of(water).unwrap().slot(), handle.slot());
        assert_eq!(
            catalog.resolve(handle),
            Err(DeliveryError::DanglingReference { id: ItemId::new(2) })
        );
    }

    #[test]
    fn test_search_by_name() {
        let mut catalog = Catalog::new();
        catalog.add_item("Chicken Burger", price(899));
        catalog.add_item("Fries", price(200));
        catalog.add_item("Beef Burger", price(999));
        catalog.add_item("burger sauce", price(50));

        let hits: Vec<&str> = catalog.search_by_name("Burger").map(|i| i.name.as_str()).collect();
        assert_eq!(hits, ["Beef Burger", "Chicken Burger"]);

        assert_eq!(catalog.search_by_name("Pizza").count(), 0);
        assert_eq!(catalog.search_by_name("").count(), 4);
    }

    #[test]
    fn test_sort_by_price_scenario() {
        let mut catalog = sample();

        assert!(catalog.sort_by_price());
        let listed: Vec<(String, u64)> = catalog
            .list_all()
            .map(|item| (item.name.clone(), item.price.cents()))
            .collect();
        assert_eq!(
            listed,
            vec![("Soda".to_string(), 150), ("Fries".to_string(), 200), ("Burger".to_string(), 550)]
        );

        // Index is still valid after relinking
        for id in 1..=3 {
            assert_eq!(catalog.find_by_id(ItemId::new(id)).unwrap().id, ItemId::new(id));
        }
    }

    #[test]
    fn test_sort_small_is_noop() {
        let mut catalog = Catalog::new();
        assert!(!catalog.sort_by_price());

        catalog.add_item("Only", price(100));
        assert!(!catalog.sort_by_price());
        assert_eq!(names(&catalog), ["Only"]);
    }

    #[test]
    fn test_sort_idempotent() {
        let mut catalog = Catalog::new();
        for (name, cents) in [("A", 300), ("B", 100), ("C", 300), ("D", 50), ("E", 100)] {
            catalog.add_item(name, price(cents));
        }

        catalog.sort_by_price();
        let once = catalog.fingerprint();
        catalog.sort_by_price();
        assert_eq!(catalog.fingerprint(), once);
        // list before sort was E, D, C, B, A; ties keep that order
        assert_eq!(names(&catalog), ["D", "E", "B", "C", "A"]);
    }

    #[test]
    fn test_fingerprint_tracks_content_and_order() {
        let a = sample();
        let mut b = sample();
        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint_hex().len(), 64);

        // added cheapest first, so the list starts out as Burger, Fries, Soda
        let mut unsorted = Catalog::new();
        unsorted.add_item("Soda", price(150));
        unsorted.add_item("Fries", price(200));
        unsorted.add_item("Burger", price(550));
        let before = unsorted.fingerprint();
        assert!(unsorted.sort_by_price());
        assert_ne!(unsorted.fingerprint(), before);

        b.sort_by_price();
        assert_eq!(a.fingerprint(), b.fingerprint());

        let mut c = sample();
        c.edit_item(ItemId::new(1), "Burger", price(551)).unwrap();
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_into_iterator() {
        let catalog = sample();
        let mut total = 0;
        for item in &catalog {
            total += item.price.cents();
        }
        assert_eq!(total, 900);
    }
}
