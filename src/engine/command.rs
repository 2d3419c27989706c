//! Text commands accepted by the engine.
//!
//! One command per line. The first word selects the command; the rest are
//! its arguments. Names may contain spaces, so the price is always the last
//! word of an `add` or `edit` line.
//!
//! ```text
//! add <name> <price>          edit <id> <name> <price>
//! delete <id>                 show <id>
//! list                        sort
//! search <text>               order <id>
//! pending                     dispatch
//! digest                      help
//! quit
//! ```

use crate::error::{DeliveryError, Result};
use crate::types::{ItemId, Price};

/// A parsed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a new item with the next free ID
    Add { name: String, price: Price },
    /// Replace an item's name and price
    Edit { id: ItemId, name: String, price: Price },
    /// Remove an item from the menu
    Delete { id: ItemId },
    /// Look up one item
    Show { id: ItemId },
    /// Print the menu in current order
    List,
    /// Merge sort the menu by price
    Sort,
    /// Case-sensitive substring search over names
    Search { needle: String },
    /// Queue an order for an item
    Order { id: ItemId },
    /// Print pending orders
    Pending,
    /// Dispatch the oldest pending order
    Dispatch,
    /// Print the catalog fingerprint
    Digest,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line
    ///
    /// # Errors
    ///
    /// - [`DeliveryError::UnknownCommand`] for an unrecognised first word
    /// - [`DeliveryError::InvalidInput`] for missing or malformed arguments
    ///
    /// # Example
    ///
    /// ```
    /// use foodie_express::engine::Command;
    /// use foodie_express::types::{ItemId, Price};
    ///
    /// let cmd = Command::parse("add Chicken Burger 8.99").unwrap();
    /// assert_eq!(cmd, Command::Add { name: "Chicken Burger".into(), price: Price::from_cents(899) });
    ///
    /// assert_eq!(Command::parse("order 3").unwrap(), Command::Order { id: ItemId::new(3) });
    /// ```
    pub fn parse(line: &str) -> Result<Self> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_ascii_lowercase().as_str() {
            "add" => {
                let (name, price) = split_name_price(rest, "add <name> <price>")?;
                Ok(Command::Add { name, price })
            }
            "edit" => {
                let (id, rest) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| usage("edit <id> <name> <price>"))?;
                let id: ItemId = id.parse()?;
                let (name, price) = split_name_price(rest.trim(), "edit <id> <name> <price>")?;
                Ok(Command::Edit { id, name, price })
            }
            "delete" | "del" | "rm" => Ok(Command::Delete { id: parse_id(rest, "delete <id>")? }),
            "show" | "find" => Ok(Command::Show { id: parse_id(rest, "show <id>")? }),
            "order" => Ok(Command::Order { id: parse_id(rest, "order <id>")? }),
            "search" => Ok(Command::Search { needle: rest.to_string() }),
            "list" | "menu" | "ls" => no_args(rest, Command::List),
            "sort" => no_args(rest, Command::Sort),
            "pending" | "orders" => no_args(rest, Command::Pending),
            "dispatch" => no_args(rest, Command::Dispatch),
            "digest" => no_args(rest, Command::Digest),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            _ => Err(DeliveryError::UnknownCommand(verb.to_string())),
        }
    }

    /// Short command name, used in log fields
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add { .. } => "add",
            Command::Edit { .. } => "edit",
            Command::Delete { .. } => "delete",
            Command::Show { .. } => "show",
            Command::List => "list",
            Command::Sort => "sort",
            Command::Search { .. } => "search",
            Command::Order { .. } => "order",
            Command::Pending => "pending",
            Command::Dispatch => "dispatch",
            Command::Digest => "digest",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn usage(form: &str) -> DeliveryError {
    DeliveryError::invalid(format!("usage: {form}"))
}

fn parse_id(rest: &str, form: &str) -> Result<ItemId> {
    if rest.is_empty() {
        return Err(usage(form));
    }
    rest.parse()
}

fn no_args(rest: &str, command: Command) -> Result<Command> {
    if rest.is_empty() {
        Ok(command)
    } else {
        Err(DeliveryError::invalid(format!("`{}` takes no arguments", command.name())))
    }
}

/// Split `"<name words> <price>"`, validating both halves.
fn split_name_price(rest: &str, form: &str) -> Result<(String, Price)> {
    let (name, price) = rest.rsplit_once(char::is_whitespace).ok_or_else(|| usage(form))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(usage(form));
    }
    Ok((name.to_string(), Price::parse(price)?))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        assert_eq!(
            Command::parse("add Burger 5.50").unwrap(),
            Command::Add { name: "Burger".into(), price: Price::from_cents(550) }
        );
        assert_eq!(
            Command::parse("  ADD   Nasi  Lemak   7  ").unwrap(),
            Command::Add { name: "Nasi  Lemak".into(), price: Price::from_cents(700) }
        );
    }

    #[test]
    fn test_parse_add_errors() {
        assert!(matches!(Command::parse("add"), Err(DeliveryError::InvalidInput(_))));
        assert!(matches!(Command::parse("add 5.50"), Err(DeliveryError::InvalidInput(_))));
        assert!(matches!(Command::parse("add Burger cheap"), Err(DeliveryError::InvalidInput(_))));
        assert!(matches!(Command::parse("add Burger -1"), Err(DeliveryError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_edit() {
        assert_eq!(
            Command::parse("edit 2 Cheese Fries 2.75").unwrap(),
            Command::Edit { id: ItemId::new(2), name: "Cheese Fries".into(), price: Price::from_cents(275) }
        );
        assert!(matches!(Command::parse("edit 2"), Err(DeliveryError::InvalidInput(_))));
        assert!(matches!(Command::parse("edit x Fries 2"), Err(DeliveryError::InvalidInput(_))));
        assert!(matches!(Command::parse("edit 2 3.00"), Err(DeliveryError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_id_commands() {
        assert_eq!(Command::parse("delete 4").unwrap(), Command::Delete { id: ItemId::new(4) });
        assert_eq!(Command::parse("rm 4").unwrap(), Command::Delete { id: ItemId::new(4) });
        assert_eq!(Command::parse("show 1").unwrap(), Command::Show { id: ItemId::new(1) });
        assert_eq!(Command::parse("order 9").unwrap(), Command::Order { id: ItemId::new(9) });

        assert!(matches!(Command::parse("order"), Err(DeliveryError::InvalidInput(_))));
        assert!(matches!(Command::parse("delete two"), Err(DeliveryError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_search_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("search Chicken Bur").unwrap(),
            Command::Search { needle: "Chicken Bur".into() }
        );
        assert_eq!(Command::parse("search").unwrap(), Command::Search { needle: String::new() });
    }

    #[test]
    fn test_parse_nullary() {
        assert_eq!(Command::parse("list").unwrap(), Command::List);
        assert_eq!(Command::parse("menu").unwrap(), Command::List);
        assert_eq!(Command::parse("sort").unwrap(), Command::Sort);
        assert_eq!(Command::parse("orders").unwrap(), Command::Pending);
        assert_eq!(Command::parse("dispatch").unwrap(), Command::Dispatch);
        assert_eq!(Command::parse("digest").unwrap(), Command::Digest);
        assert_eq!(Command::parse("?").unwrap(), Command::Help);
        assert_eq!(Command::parse("exit").unwrap(), Command::Quit);

        assert!(matches!(Command::parse("sort now"), Err(DeliveryError::InvalidInput(_))));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Command::parse("launch rockets"),
            Err(DeliveryError::UnknownCommand("launch".into()))
        );
        assert_eq!(Command::parse(""), Err(DeliveryError::UnknownCommand(String::new())));
    }

    #[test]
    fn test_command_name() {
        assert_eq!(Command::Dispatch.name(), "dispatch");
        assert_eq!(Command::Show { id: ItemId::new(1) }.name(), "show");
    }
}
