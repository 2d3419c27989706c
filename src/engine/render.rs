//! Plain-text rendering of outcomes and errors for a console shell.
//!
//! Everything here returns a `String`; printing is left to the caller.

use std::fmt::Write as _;

use crate::engine::{Outcome, PendingOrder};
use crate::error::DeliveryError;
use crate::types::MenuItem;

const RULE: &str = "---------------------------------------------";

/// Program banner shown once at start-up
pub fn banner() -> String {
    [
        "********************************************************",
        "*                                                      *",
        "*          FOODIE EXPRESS DELIVERY SYSTEM              *",
        "*                                                      *",
        "********************************************************",
        "",
        "Welcome to the Food Delivery Management System!",
        "Type `help` to list the commands.",
    ]
    .join("\n")
}

/// Command reference
pub fn help() -> String {
    [
        "------------------ Menu Administration ----------------",
        "  add <name> <price>         Add a new food item",
        "  edit <id> <name> <price>   Edit a food item by ID",
        "  delete <id>                Delete a food item by ID",
        "  show <id>                  Show one food item",
        "  list                       Display the full menu",
        "  sort                       Sort the menu by price",
        "  search <text>              Search food by name",
        "-------------------- Order System --------------------",
        "  order <id>                 Place a new order",
        "  pending                    View all pending orders",
        "  dispatch                   Dispatch the next order",
        "------------------------------------------------------",
        "  digest                     Print the menu fingerprint",
        "  quit                       Exit",
    ]
    .join("\n")
}

/// Render a successful outcome
pub fn outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Added(item) => {
            format!("Food item \"{}\" added successfully with ID {}!", item.name, item.id)
        }
        Outcome::Edited(item) => format!("Food item {} updated successfully!", item.id),
        Outcome::Deleted(item) => format!("Food item with ID {} deleted successfully.", item.id),
        Outcome::Found(item) => menu_table("FOOD ITEM DETAILS", std::slice::from_ref(item)),
        Outcome::Menu(items) if items.is_empty() => "The menu is currently empty.".to_string(),
        Outcome::Menu(items) => menu_table("FULL FOOD MENU", items),
        Outcome::Sorted { reordered: false, .. } => {
            "Menu is already sorted or has too few items to sort.".to_string()
        }
        Outcome::Sorted { count, .. } => format!("Menu of {count} items has been sorted by price."),
        Outcome::Matches { needle, items } => search_results(needle, items),
        Outcome::Ordered { item, position } => format!(
            "Order for \"{}\" has been placed in the queue (position {}).",
            item.name, position
        ),
        Outcome::Pending(orders) if orders.is_empty() => {
            "The order queue is currently empty.".to_string()
        }
        Outcome::Pending(orders) => pending_list(orders),
        Outcome::Dispatched(item) => format!("Dispatched order for \"{}\".", item.name),
        Outcome::Fingerprint(hex) => format!("Menu fingerprint: {hex}"),
        Outcome::Help => help(),
        Outcome::Quit => {
            "Thank you for using Foodie Express Delivery System!\nExiting system. Goodbye!".to_string()
        }
    }
}

/// Render an error as a user-facing message
pub fn error(err: &DeliveryError) -> String {
    let mut msg = err.to_string();
    if let Some(first) = msg.get(0..1) {
        let upper = first.to_ascii_uppercase();
        msg.replace_range(0..1, &upper);
    }
    format!("Error: {msg}.")
}

fn menu_table(title: &str, items: &[MenuItem]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", format!("{title:^width$}", width = RULE.len()).trim_end());
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{:<8}{:<25}Price (RM)", "ID", "Name");
    let _ = writeln!(out, "{RULE}");
    for item in items {
        let _ = writeln!(out, "{:<8}{:<25}{}", item.id, item.name, item.price);
    }
    out.push_str(RULE);
    out
}

fn search_results(needle: &str, items: &[MenuItem]) -> String {
    let mut out = format!("--- Search Results for \"{needle}\" ---");
    if items.is_empty() {
        out.push_str("\nNo food items found matching your search term.");
    }
    for item in items {
        let _ = write!(out, "\nFound -> ID: {}, Name: {}, Price: RM{}", item.id, item.name, item.price);
    }
    out
}

fn pending_list(orders: &[PendingOrder]) -> String {
    let mut out = String::from("--- Pending Delivery Queue ---");
    for order in orders {
        match &order.item {
            Some(item) => {
                let _ = write!(out, "\n{}. ID: {}, Name: {}", order.position, order.id, item.name);
            }
            None => {
                let _ = write!(out, "\n{}. ID: {}, (no longer on the menu)", order.position, order.id);
            }
        }
    }
    out.push_str("\n------------------------------");
    out
}

// ============================================================================
// Unit Tests
// ============================================================================
