//! Command execution against the catalog and the order queue.
//!
//! [`DeliveryEngine::execute`] is the only entry point a shell needs: it
//! takes a parsed [`Command`] and returns an [`Outcome`] describing what
//! happened, or the [`DeliveryError`] explaining why nothing did. Outcomes
//! carry owned snapshots of the affected items so the caller can render them
//! after the engine has moved on.

use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::engine::Command;
use crate::error::{DeliveryError, Result};
use crate::orders::OrderQueue;
use crate::types::{ItemId, MenuItem, Price};

/// One pending order as seen at listing time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOrder {
    /// 1-based queue position
    pub position: usize,

    /// ID the order was placed for
    pub id: ItemId,

    /// The item, or `None` if it was deleted after the order was placed
    pub item: Option<MenuItem>,
}

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Added(MenuItem),
    Edited(MenuItem),
    Deleted(MenuItem),
    Found(MenuItem),
    Menu(Vec<MenuItem>),
    /// `reordered` is false when the menu had fewer than two items
    Sorted { reordered: bool, count: usize },
    Matches { needle: String, items: Vec<MenuItem> },
    /// `position` is the 1-based place in the queue
    Ordered { item: MenuItem, position: usize },
    Pending(Vec<PendingOrder>),
    Dispatched(MenuItem),
    Fingerprint(String),
    Help,
    Quit,
}

/// Catalog plus order queue behind a single command interface.
///
/// ## Example
///
/// ```
/// use foodie_express::engine::{Command, DeliveryEngine, Outcome};
///
/// let mut engine = DeliveryEngine::new();
/// engine.execute(Command::parse("add Burger 5.50").unwrap()).unwrap();
/// engine.execute(Command::parse("order 1").unwrap()).unwrap();
///
/// match engine.execute(Command::Dispatch).unwrap() {
///     Outcome::Dispatched(item) => assert_eq!(item.name, "Burger"),
///     other => panic!("unexpected outcome: {other:?}"),
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct DeliveryEngine {
    catalog: Catalog,
    orders: OrderQueue,
}

impl DeliveryEngine {
    /// Create an engine with default sizing
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine sized by `config`
    pub fn with_config(config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            catalog: Catalog::with_config(config),
            orders: OrderQueue::with_capacity(config.queue_capacity),
        })
    }

    /// The menu catalog
    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The pending order queue
    #[inline]
    pub fn orders(&self) -> &OrderQueue {
        &self.orders
    }

    /// Run one command
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        let name = command.name();
        match self.apply(command) {
            Ok(outcome) => {
                debug!(
                    command = name,
                    items = self.catalog.len(),
                    pending = self.orders.len(),
                    "command executed"
                );
                Ok(outcome)
            }
            Err(err) => {
                warn!(command = name, error = %err, "command rejected");
                Err(err)
            }
        }
    }

    fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Add { name, price } => self.add(name, price),
            Command::Edit { id, name, price } => {
                require_name(&name)?;
                self.catalog.edit_item(id, name, price)?;
                Ok(Outcome::Edited(self.catalog.find_by_id(id)?.clone()))
            }
            Command::Delete { id } => self.catalog.delete_item(id).map(Outcome::Deleted),
            Command::Show { id } => Ok(Outcome::Found(self.catalog.find_by_id(id)?.clone())),
            Command::List => Ok(Outcome::Menu(self.catalog.list_all().cloned().collect())),
            Command::Sort => Ok(Outcome::Sorted {
                reordered: self.catalog.sort_by_price(),
                count: self.catalog.len(),
            }),
            Command::Search { needle } => {
                let items = self.catalog.search_by_name(&needle).cloned().collect();
                Ok(Outcome::Matches { needle, items })
            }
            Command::Order { id } => self.place_order(id),
            Command::Pending => Ok(Outcome::Pending(self.pending())),
            Command::Dispatch => self.dispatch(),
            Command::Digest => Ok(Outcome::Fingerprint(self.catalog.fingerprint_hex())),
            Command::Help => Ok(Outcome::Help),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    fn add(&mut self, name: String, price: Price) -> Result<Outcome> {
        require_name(&name)?;
        let id = self.catalog.add_item(name, price);
        Ok(Outcome::Added(self.catalog.find_by_id(id)?.clone()))
    }

    fn place_order(&mut self, id: ItemId) -> Result<Outcome> {
        let handle = self.catalog.handle_of(id)?;
        self.orders.enqueue(Some(handle))?;
        let item = self.catalog.resolve(handle)?.clone();
        Ok(Outcome::Ordered { item, position: self.orders.len() })
    }

    /// Remove the oldest order and return its item
    ///
    /// An order whose item was deleted is still removed from the queue, and
    /// the call reports [`DeliveryError::DanglingReference`].
    fn dispatch(&mut self) -> Result<Outcome> {
        let handle = self.orders.dequeue()?;
        let item = self.catalog.resolve(handle)?.clone();
        Ok(Outcome::Dispatched(item))
    }

    /// Snapshot of the queue, oldest first
    pub fn pending(&self) -> Vec<PendingOrder> {
        self.orders
            .list_all()
            .enumerate()
            .map(|(i, handle)| PendingOrder {
                position: i + 1,
                id: handle.id(),
                item: self.catalog.resolve(handle).ok().cloned(),
            })
            .collect()
    }
}

fn require_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(DeliveryError::invalid("food name must not be empty"));
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
